//! Crossref-resolved record view over parsed BibTeX entries.
//!
//! The [`biblatex`] parser keeps `crossref` inheritance implicit: a child
//! entry only names its parent, and field lookup has to walk the parent's
//! field map itself. [`Record`] performs that overlay once, up front, so the
//! renderers can treat every record as a flat, case-insensitive field map.

use biblatex::{Bibliography, Chunk, Entry, Person, Spanned};

use crate::error::fields;

/// One publication record with its crossref parent's fields merged in.
///
/// Own fields always win over inherited ones. The record is immutable after
/// resolution; renderers only read from it.
#[derive(Debug, Clone)]
pub struct Record {
    entry: Entry,
}

impl Record {
    /// Resolve every entry of a parsed bibliography, in source order.
    pub fn resolve_all(bibliography: &Bibliography) -> Vec<Record> {
        bibliography
            .iter()
            .map(|entry| Record::resolve(entry, bibliography))
            .collect()
    }

    /// Overlay `entry` with the fields of its crossref parents.
    fn resolve(entry: &Entry, bibliography: &Bibliography) -> Record {
        let mut merged = entry.clone();
        let parents = merged.parents().ok().unwrap_or_default();
        for parent_key in parents {
            if let Some(parent) = bibliography.get(&parent_key) {
                for (name, chunks) in &parent.fields {
                    merged
                        .fields
                        .entry(name.clone())
                        .or_insert_with(|| chunks.clone());
                }
            }
        }
        Record { entry: merged }
    }

    /// The unique citation key of this record.
    pub fn key(&self) -> &str {
        &self.entry.key
    }

    /// Look up a field by name, case-insensitively, as decoded Unicode text.
    pub fn field(&self, name: &str) -> Option<String> {
        self.entry
            .fields
            .get(&name.to_ascii_lowercase())
            .map(|chunks| chunks_to_string(chunks))
    }

    /// Whether the record carries a field, own or inherited.
    pub fn has(&self, name: &str) -> bool {
        self.entry.fields.contains_key(&name.to_ascii_lowercase())
    }

    /// The `year` field, treated as an opaque sortable string.
    pub(crate) fn year(&self) -> Option<String> {
        self.field(fields::YEAR)
    }

    /// Display names of the record's authors, in order.
    ///
    /// Records without an `author` field (common for proceedings volumes)
    /// yield an empty list.
    pub fn authors(&self) -> Vec<String> {
        match self.entry.author() {
            Ok(people) => people.iter().map(display_name).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Re-serialize the resolved record to BibLaTeX source text.
    ///
    /// The output carries the merged field map, so what the reader copies
    /// out of the page is a self-contained record.
    pub fn to_bibtex(&self) -> String {
        self.entry.to_biblatex_string()
    }
}

/// Format a parsed person name for display: given name first, then any
/// name particle, family name, and suffix, skipping absent parts.
fn display_name(person: &Person) -> String {
    [
        person.given_name.as_str(),
        person.prefix.as_str(),
        person.name.as_str(),
        person.suffix.as_str(),
    ]
    .into_iter()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(" ")
}

/// Join a field's chunk list into plain text.
fn chunks_to_string(chunks: &[Spanned<Chunk>]) -> String {
    chunks
        .iter()
        .map(|chunk| match &chunk.v {
            Chunk::Normal(s) => s.as_str(),
            Chunk::Verbatim(s) => s.as_str(),
            Chunk::Math(s) => s.as_str(),
        })
        .collect()
}
