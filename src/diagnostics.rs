//! Pretty diagnostic reporting using [ariadne].
//!
//! This module renders BibTeX parse failures from the [`biblatex`] parser as
//! rich, human-readable reports with source context, underlines, and labels.
//! It is only compiled when the `diagnostics` Cargo feature is enabled:
//!
//! ```toml
//! [dependencies]
//! publist = { version = "0.2", features = ["diagnostics"] }
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use biblatex::Bibliography;
//!
//! let source = "@article{broken, title = {Unclosed";
//! if let Err(error) = Bibliography::parse(source) {
//!     eprintln!("{}", publist::diagnostics::render_parse_error("pubs.bib", source, &error));
//! }
//! ```

use ariadne::{Color, Label, Report, ReportKind, Source};

/// Render a BibTeX parse error as a pretty Ariadne diagnostic.
///
/// The returned `String` contains ANSI colour codes when the terminal
/// supports them.  Redirect to a file or pipe through `strip-ansi` if you
/// need plain text.
///
/// # Arguments
///
/// * `filename` – Label shown in the report header (e.g. `"pubs.bib"`).
/// * `source`   – The original source text that was parsed.
/// * `error`    – The parse error returned by [`biblatex::Bibliography::parse`].
pub fn render_parse_error(filename: &str, source: &str, error: &biblatex::ParseError) -> String {
    let mut buf = Vec::new();

    // The parser's span is a byte range into the source; clamp it so a span
    // pointing at end-of-input still renders.
    let range = error.span.start.min(source.len())..error.span.end.min(source.len());

    Report::build(ReportKind::Error, (filename, range.clone()))
        .with_message(format!("{}", error))
        .with_label(
            Label::new((filename, range))
                .with_message(format!("{}", error.kind))
                .with_color(Color::Red),
        )
        .finish()
        .write((filename, Source::from(source)), &mut buf)
        .unwrap();

    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use biblatex::Bibliography;

    #[test]
    fn test_render_parse_error() {
        let source = "@article{broken, title = {Unclosed";
        let error = Bibliography::parse(source).expect_err("input is malformed");
        let diagnostic = render_parse_error("pubs.bib", source, &error);
        assert!(diagnostic.contains("pubs.bib"));
    }

    #[test]
    fn test_render_parse_error_span_at_end_of_input() {
        let source = "@article{x,";
        if let Err(error) = Bibliography::parse(source) {
            // Should not panic even when the span touches end-of-input.
            let diagnostic = render_parse_error("pubs.bib", source, &error);
            assert!(diagnostic.contains("pubs.bib"));
        }
    }
}
