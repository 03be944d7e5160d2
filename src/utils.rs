use regex::Regex;
use std::sync::LazyLock;

use crate::error::fields;
use crate::record::Record;

static DOI_URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:doi:\s*|https?://(?:dx\.)?doi\.org/)(.+)$").unwrap());

/// Month names in calendar order; only the first three letters are matched.
const MONTH_NAMES: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Resolve a BibTeX month value to its 1-12 ordinal.
///
/// The first three letters of the value are matched case-insensitively
/// against the English month names, so both `mar` and `March` resolve to 3.
/// Values that do not match any month name are parsed as integers. Returns
/// `None` when both fail; the caller decides whether that is fatal.
pub(crate) fn month_ordinal(value: &str) -> Option<i64> {
    if let Some(prefix) = value.get(0..3) {
        let prefix = prefix.to_ascii_lowercase();
        if let Some(index) = MONTH_NAMES.iter().position(|name| *name == prefix) {
            return Some(index as i64 + 1);
        }
    }
    value.trim().parse::<i64>().ok()
}

/// Strip URL and `doi:` prefixes from a DOI field value.
///
/// Databases frequently store the resolver URL instead of the bare
/// identifier; the rendered button re-adds the resolver, so the prefix has
/// to go. Values without a known prefix pass through unchanged.
pub(crate) fn normalize_doi(value: &str) -> String {
    let trimmed = value.trim().trim_end_matches("[doi]").trim();
    match DOI_URL_REGEX.captures(trimmed) {
        Some(captures) => captures[1].to_string(),
        None => trimmed.to_string(),
    }
}

/// Entity-escape text for embedding inside an HTML element.
///
/// Only `<` and `>` are escaped by default, matching the historical output
/// of this tool; `escape_ampersands` additionally escapes `&` for
/// well-formed markup. Quotes are never touched since the text is element
/// content, not an attribute value.
pub(crate) fn html_encode(source: &str, escape_ampersands: bool) -> String {
    let source = if escape_ampersands {
        source.replace('&', "&amp;")
    } else {
        source.to_string()
    };
    source.replace('<', "&lt;").replace('>', "&gt;")
}

/// Replace literal backslash-space sequences left over from TeX source.
pub(crate) fn unescape_backslash_space(source: &str) -> String {
    source.replace("\\ ", " ")
}

/// Assemble the venue line of a record.
///
/// The first present of `journal` and `booktitle` (that priority) becomes
/// the emphasized venue name, `???` when neither exists. Volume, issue,
/// `pp. `-prefixed pages, and (HTML only) a parenthesized note are appended
/// in that fixed order when present. `emph` supplies the opening and closing
/// emphasis markup of the target format.
pub(crate) fn venue_string(record: &Record, emph: (&str, &str), include_note: bool) -> String {
    let mut venue = match record
        .field(fields::JOURNAL)
        .or_else(|| record.field(fields::BOOKTITLE))
    {
        Some(name) => format!("{}{}{}", emph.0, name, emph.1),
        None => "???".to_string(),
    };
    if let Some(volume) = record.field(fields::VOLUME) {
        venue.push_str(&format!(", {volume}"));
    }
    if let Some(issue) = record.field(fields::ISSUE) {
        venue.push_str(&format!(", {issue}"));
    }
    if let Some(pages) = record.field(fields::PAGES) {
        venue.push_str(&format!(", pp. {pages}"));
    }
    if include_note {
        if let Some(note) = record.field(fields::NOTE) {
            venue.push_str(&format!(" ({note})"));
        }
    }
    unescape_backslash_space(&venue)
}

/// The entry's main link target: `url`, else `preprinturl`, else empty.
pub(crate) fn main_link_target(record: &Record) -> String {
    record
        .field(fields::URL)
        .or_else(|| record.field(fields::PREPRINT_URL))
        .unwrap_or_default()
}

/// The entry's display title, with backslash-space sequences unescaped.
pub(crate) fn title_text(record: &Record) -> String {
    record
        .field(fields::TITLE)
        .map(|title| unescape_backslash_space(&title))
        .unwrap_or_default()
}
