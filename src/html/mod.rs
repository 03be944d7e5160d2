//! HTML publication-list rendering.
//!
//! Produces a single `<div class="publicationlist">` fragment meant to be
//! pasted or included into an existing page: one inline stylesheet and
//! toggle script, then one `<h3>`/`<table>` block per year, most recent
//! first. Each row carries an anchor equal to the entry's citation key, a
//! reverse running number, and the rendered entry with its collapsible
//! BibTeX source.
//!
//! # Example
//!
//! ```
//! use biblatex::Bibliography;
//! use publist::{HtmlRenderer, PublicationRenderer, Record};
//!
//! let input = r#"@article{doe2020,
//!     author = {Jane Doe},
//!     title = {An Example Article},
//!     journal = {Journal of Examples},
//!     year = {2020},
//! }"#;
//! let bibliography = Bibliography::parse(input).unwrap();
//! let records = Record::resolve_all(&bibliography);
//!
//! let html = HtmlRenderer::new().render(&records).unwrap();
//! assert!(html.contains(r##"<a href="#doe2020">1</a>"##));
//! ```

mod assets;

use crate::config::{ButtonStyle, Config};
use crate::error::{RenderError, fields};
use crate::group::{Numbering, emission_order};
use crate::record::Record;
use crate::utils::{html_encode, main_link_target, normalize_doi, title_text, venue_string};
use crate::PublicationRenderer;

const TRAILER: &str = "<div class=\"footnotecomment\">\n \
    generated by <a href=\"https://github.com/revidiumhq/publist\">publist</a>\n\
    </div>\n";

/// Renderer for the HTML output format.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    config: Config,
}

/// The typed inputs of one entry fragment, computed before any markup is
/// assembled so a missing field is an explicit default here rather than a
/// formatting-time surprise.
struct Fragment {
    main_url: String,
    title: String,
    authors: String,
    venue: String,
    buttons: String,
    source: String,
}

impl HtmlRenderer {
    /// Creates a new HTML renderer with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the renderer's configuration.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Substitute homepage links into the author display names. Lookup is
    /// exact string equality against the configured map.
    fn linked_authors(&self, record: &Record) -> Vec<String> {
        record
            .authors()
            .into_iter()
            .map(|name| match self.config.author_homepages.get(&name) {
                Some(homepage) => {
                    format!("<a target=\"_blank\" href=\"{homepage}\">{name}</a>")
                }
                None => name,
            })
            .collect()
    }

    /// One link button in the configured style. The leading space separates
    /// it from the preceding button.
    fn button(&self, href: &str, label: &str) -> String {
        match self.config.button_style {
            ButtonStyle::Class => format!(" <a class=\"button\" href=\"{href}\">{label}</a>"),
            ButtonStyle::Brackets => format!(" [<a href=\"{href}\">{label}</a>]"),
        }
    }

    /// The toggle for the collapsible BibTeX source block.
    fn bibtex_toggle(&self) -> &'static str {
        match self.config.button_style {
            ButtonStyle::Class => {
                "<a class=\"button\" style=\"cursor: pointer;\" onClick=\"showBibHere(this);\">bibtex</a>"
            }
            ButtonStyle::Brackets => {
                "[<a style=\"cursor: pointer;\" onClick=\"showBibHere(this);\">bibtex</a>]"
            }
        }
    }

    /// All link buttons of a record, in fixed order: PDF, the configured
    /// custom buttons, Preprint PDF, DOI.
    fn buttons(&self, record: &Record) -> String {
        let mut buttons = String::new();
        if let Some(url) = record.field(fields::URL) {
            buttons.push_str(&self.button(&url, "PDF"));
        }
        for spec in &self.config.buttons {
            if let Some(value) = record.field(&spec.field) {
                let (label, url) = spec.expand(&value);
                buttons.push_str(&self.button(&url, &label));
            }
        }
        if let Some(url) = record.field(fields::PREPRINT_URL) {
            buttons.push_str(&self.button(&url, "Preprint PDF"));
        }
        if let Some(doi) = record.field(fields::DOI) {
            let doi = normalize_doi(&doi);
            let href = format!("https://dx.doi.org/{doi}");
            buttons.push_str(&self.button(&href, &format!("DOI: {doi}")));
        }
        buttons
    }

    /// Render one entry into its position-agnostic fragment.
    fn entry_fragment(&self, record: &Record) -> String {
        let fragment = Fragment {
            main_url: main_link_target(record),
            title: title_text(record),
            authors: self.linked_authors(record).join(", "),
            venue: venue_string(record, ("<i>", "</i>"), true),
            buttons: self.buttons(record),
            source: html_encode(&record.to_bibtex(), self.config.escape_ampersands),
        };
        format!(
            "<span class=\"title\"><a href=\"{main_url}\">{title}</a></span>\n \
            (<span class=\"authors\">{authors}</span>)\n \
            <span class=\"venueline\">In: <span class=\"journal\">{venue}</span></span>\n \
            <br>\n \
            <span class=\"buttonline\">\n \
            {toggle}{buttons}\n \
            </span>\n \
            <pre class=\"bibhidden\">\n{source}</pre>\n",
            main_url = fragment.main_url,
            title = fragment.title,
            authors = fragment.authors,
            venue = fragment.venue,
            toggle = self.bibtex_toggle(),
            buttons = fragment.buttons,
            source = fragment.source,
        )
    }
}

impl PublicationRenderer for HtmlRenderer {
    /// Render the full HTML document: preamble, per-year tables with reverse
    /// numbering, and the optional attribution trailer.
    fn render(&self, records: &[Record]) -> Result<String, RenderError> {
        let groups = emission_order(records)?;
        let mut numbering = Numbering::new(records.len());

        let mut out = String::new();
        out.push_str("<div class=\"publicationlist\">\n");
        out.push_str(&format!("<style>{}</style>\n", assets::STYLE));
        out.push_str(&format!("<script>{}</script>\n", assets::SCRIPT));

        for group in &groups {
            out.push_str(&format!("<h3>{}</h3>\n", group.year));
            out.push_str("<table cellspacing=\"0\" class=\"yeartable\">\n");
            for record in &group.records {
                out.push_str(&format!(
                    "<tr id=\"{key}\">\n \
                    <td class=\"bibitemanchor\" style=\"min-width: 2em;\" align=\"right\" valign=\"top\">\n   \
                    [<a href=\"#{key}\">{number}</a>]\n \
                    </td>\n \
                    <td class=\"bibitemtext\" valign=\"top\">{fragment}</td>\n\
                    </tr>\n",
                    key = record.key(),
                    number = numbering.take(),
                    fragment = self.entry_fragment(record),
                ));
            }
            out.push_str("</table>\n");
        }

        if self.config.attribution {
            out.push_str(TRAILER);
        }
        out.push_str("</div> <!-- end of publicationlist -->\n");
        Ok(out)
    }
}
