//! Markdown publication-list rendering.
//!
//! Emits a flat unordered list, one `  - ` bullet per entry, in the same
//! order as the HTML document (year descending, month descending within a
//! year). There are no year headings, no numbering, no custom buttons, and
//! no embedded BibTeX source; the note field is omitted as well. The output
//! targets Markdown dialects that keep literal `\[`/`\]` out of link
//! parsing, so the buttons render as bracketed links.

use crate::config::Config;
use crate::error::{RenderError, fields};
use crate::group::emission_order;
use crate::record::Record;
use crate::utils::{main_link_target, normalize_doi, title_text, venue_string};
use crate::PublicationRenderer;

/// Renderer for the Markdown output format.
#[derive(Debug, Clone, Default)]
pub struct MarkdownRenderer {
    config: Config,
}

impl MarkdownRenderer {
    /// Creates a new Markdown renderer with default configuration.
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

    fn linked_authors(&self, record: &Record) -> Vec<String> {
        record
            .authors()
            .into_iter()
            .map(|name| match self.config.author_homepages.get(&name) {
                Some(homepage) => format!("[{name}]({homepage})"),
                None => name,
            })
            .collect()
    }

    fn buttons(&self, record: &Record) -> String {
        let mut buttons = String::new();
        if let Some(url) = record.field(fields::URL) {
            buttons.push_str(&format!(" \\[[PDF]({url})\\]"));
        }
        if let Some(url) = record.field(fields::PREPRINT_URL) {
            buttons.push_str(&format!(" \\[[Preprint PDF]({url})\\]"));
        }
        if let Some(doi) = record.field(fields::DOI) {
            let doi = normalize_doi(&doi);
            buttons.push_str(&format!(" \\[[DOI: {doi}](https://dx.doi.org/{doi})\\]"));
        }
        buttons
    }

    fn entry_fragment(&self, record: &Record) -> String {
        format!(
            "[{title}]({main_url}) ({authors}) In: {venue}{buttons}",
            title = title_text(record),
            main_url = main_link_target(record),
            authors = self.linked_authors(record).join(", "),
            venue = venue_string(record, ("*", "*"), false),
            buttons = self.buttons(record),
        )
    }
}

impl PublicationRenderer for MarkdownRenderer {
    fn render(&self, records: &[Record]) -> Result<String, RenderError> {
        let groups = emission_order(records)?;
        let mut out = String::new();
        for group in &groups {
            for record in &group.records {
                out.push_str(&format!("  - {}\n", self.entry_fragment(record)));
            }
        }
        Ok(out)
    }
}
