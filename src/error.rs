//! Error types for rendering and configuration loading.
//!
//! Rendering errors carry the citation key of the offending entry so the
//! user can locate it in the source database; configuration errors carry the
//! path of the file that failed to load.

use std::path::PathBuf;
use thiserror::Error;

/// Field name constants for the BibTeX fields the renderers consume.
pub mod fields {
    pub const AUTHOR: &str = "author";
    pub const TITLE: &str = "title";
    pub const YEAR: &str = "year";
    pub const MONTH: &str = "month";
    pub const JOURNAL: &str = "journal";
    pub const BOOKTITLE: &str = "booktitle";
    pub const VOLUME: &str = "volume";
    pub const ISSUE: &str = "issue";
    pub const PAGES: &str = "pages";
    pub const NOTE: &str = "note";
    pub const URL: &str = "url";
    pub const PREPRINT_URL: &str = "preprinturl";
    pub const DOI: &str = "doi";
}

/// Errors produced while turning records into markup.
///
/// Both variants are fatal to the whole run: the renderers produce either a
/// complete document or no output at all.
#[derive(Error, Debug)]
pub enum RenderError {
    /// An entry has no `year` field, which grouping requires.
    #[error("entry '{key}' has no year field")]
    MissingYear { key: String },

    /// An entry's `month` value is neither a known month name prefix nor an
    /// integer.
    #[error("entry '{key}' has an unrecognized month value \"{value}\"")]
    BadMonth { key: String, value: String },
}

impl RenderError {
    /// The citation key of the entry that caused the error.
    pub fn key(&self) -> &str {
        match self {
            RenderError::MissingYear { key } => key,
            RenderError::BadMonth { key, .. } => key,
        }
    }
}

/// Errors produced while loading the declarative configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not parse config file '{path}': {source}")]
    Yaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_display() {
        let error = RenderError::MissingYear {
            key: "doe2020".to_string(),
        };
        assert_eq!(format!("{}", error), "entry 'doe2020' has no year field");
        assert_eq!(error.key(), "doe2020");

        let error = RenderError::BadMonth {
            key: "doe2020".to_string(),
            value: "Brumaire".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("doe2020"));
        assert!(display.contains("Brumaire"));
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::Io {
            path: PathBuf::from("publist.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let display = format!("{}", error);
        assert!(display.contains("publist.yaml"));
        assert!(display.contains("not found"));
    }
}
