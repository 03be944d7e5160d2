//! A generator for static publication lists from BibTeX databases.
//!
//! `publist` turns a `.bib` file into an HTML fragment (or a Markdown bullet
//! list) ready to be embedded into a personal homepage. Entries are grouped
//! by year, ordered most-recent-first, numbered in reverse, and rendered with
//! author homepage links, a venue line, and link buttons for PDFs, preprints,
//! and DOIs.
//!
//! Parsing of the BibTeX source itself is delegated to the [`biblatex`]
//! crate, which handles field mapping, TeX-to-Unicode decoding, author name
//! parsing, and `crossref` parent lookup. This crate is only concerned with
//! turning the parsed records into presentation markup.
//!
//! # Basic Usage
//!
//! ```rust
//! use biblatex::Bibliography;
//! use publist::{HtmlRenderer, PublicationRenderer, Record};
//!
//! let input = r#"@article{doe2020,
//!     author = {Jane Doe},
//!     title = {An Example Article},
//!     journal = {Journal of Examples},
//!     year = {2020},
//! }"#;
//!
//! let bibliography = Bibliography::parse(input).unwrap();
//! let records = Record::resolve_all(&bibliography);
//! let html = HtmlRenderer::new().render(&records).unwrap();
//! assert!(html.contains("An Example Article"));
//! ```
//!
//! # Configuration
//!
//! Rendering is customized through a declarative [`Config`] value, typically
//! loaded from a YAML file:
//!
//! ```yaml
//! author_homepages:
//!   "Jane Doe": https://janedoe.example.org
//! buttons:
//!   - field: slides
//!     label: Slides
//!     url: "{value}"
//! attribution: true
//! button_style: class
//! ```
//!
//! ```rust
//! use publist::{Config, HtmlRenderer};
//!
//! let mut config = Config::default();
//! config
//!     .author_homepages
//!     .insert("Jane Doe".to_string(), "https://janedoe.example.org".to_string());
//! let renderer = HtmlRenderer::new().with_config(config);
//! ```
//!
//! # Diagnostics
//!
//! With the `diagnostics` feature enabled, BibTeX parse failures can be
//! rendered as rich [ariadne](https://docs.rs/ariadne) reports with source
//! context; see [`diagnostics`](crate::diagnostics).
//!
//! # Error Handling
//!
//! Rendering fails fast: an entry without a `year` field or with a month
//! value that is neither a known month name nor an integer aborts the whole
//! run with a [`RenderError`] naming the offending citation key. There is no
//! partial output.

pub mod config;
#[cfg(feature = "diagnostics")]
pub mod diagnostics;
pub mod error;
pub mod group;
pub mod html;
pub mod markdown;
pub mod record;

mod utils;

// Reexports
pub use config::{ButtonSpec, ButtonStyle, Config};
pub use error::{ConfigError, RenderError};
pub use html::HtmlRenderer;
pub use markdown::MarkdownRenderer;
pub use record::Record;

/// Output formats supported by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Html,
    Markdown,
}

impl OutputFormat {
    /// Convert the format to a string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Html => "HTML",
            OutputFormat::Markdown => "Markdown",
        }
    }

    /// Build the renderer for this output format.
    pub fn renderer(&self, config: Config) -> Box<dyn PublicationRenderer> {
        match self {
            OutputFormat::Html => Box::new(HtmlRenderer::new().with_config(config)),
            OutputFormat::Markdown => Box::new(MarkdownRenderer::new().with_config(config)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trait for implementing publication-list renderers.
pub trait PublicationRenderer {
    /// Render a full publication list from crossref-resolved records.
    ///
    /// # Arguments
    ///
    /// * `records` - The records to render, in source-database order
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if a record is missing its `year` field or
    /// carries an unrecognizable `month` value.
    fn render(&self, records: &[Record]) -> std::result::Result<String, RenderError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use biblatex::Bibliography;

    #[test]
    fn test_output_format_display() {
        assert_eq!(format!("{}", OutputFormat::Html), "HTML");
        assert_eq!(format!("{}", OutputFormat::Markdown), "Markdown");
    }

    #[test]
    fn test_renderer_selection() {
        let input = r#"@article{a, author = {Jane Doe}, title = {T}, year = {2020}}"#;
        let bibliography = Bibliography::parse(input).unwrap();
        let records = Record::resolve_all(&bibliography);

        let html = OutputFormat::Html
            .renderer(Config::default())
            .render(&records)
            .unwrap();
        assert!(html.contains("<table"));

        let markdown = OutputFormat::Markdown
            .renderer(Config::default())
            .render(&records)
            .unwrap();
        assert!(markdown.starts_with("  - "));
    }
}
