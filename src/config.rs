//! Declarative rendering configuration.
//!
//! The configuration is a plain YAML document loaded with [`serde_yaml`],
//! replacing the executed config script of earlier incarnations of this
//! tool. Everything is optional; an absent file means built-in defaults.
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
//! escape_ampersands: false
//! ```

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Styling of the link buttons attached to each entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    /// `<a class="button" …>` anchors, styled by the embedded stylesheet.
    #[default]
    Class,
    /// Plain anchors wrapped in literal square brackets.
    Brackets,
}

/// One custom link button, applied when `field` is present on an entry.
///
/// `label` and `url` are templates in which every `{value}` occurrence is
/// replaced by the entry's field value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ButtonSpec {
    pub field: String,
    pub label: String,
    pub url: String,
}

impl ButtonSpec {
    /// Expand the templates against a field value, yielding (label, url).
    pub(crate) fn expand(&self, value: &str) -> (String, String) {
        (
            self.label.replace("{value}", value),
            self.url.replace("{value}", value),
        )
    }
}

/// Rendering configuration, populated once before rendering begins and
/// read-only thereafter.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Exact rendered author name to homepage URL. Lookup is exact string
    /// equality; no fuzzy or Unicode-normalized matching.
    pub author_homepages: HashMap<String, String>,

    /// Custom link buttons, applied in order.
    pub buttons: Vec<ButtonSpec>,

    /// Whether to append the attribution trailer to the HTML document.
    pub attribution: bool,

    /// Styling of the link buttons.
    pub button_style: ButtonStyle,

    /// Also escape `&` in the embedded BibTeX source block. Off by default
    /// for compatibility with the historical output.
    pub escape_ampersands: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            author_homepages: HashMap::new(),
            buttons: Vec::new(),
            attribution: true,
            button_style: ButtonStyle::default(),
            escape_ampersands: false,
        }
    }
}

impl Config {
    /// Load a configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be opened and
    /// [`ConfigError::Yaml`] when its contents do not deserialize.
    pub fn from_path(path: &Path) -> Result<Config, ConfigError> {
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        serde_yaml::from_reader(file).map_err(|source| ConfigError::Yaml {
            path: path.to_owned(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.author_homepages.is_empty());
        assert!(config.buttons.is_empty());
        assert!(config.attribution);
        assert_eq!(config.button_style, ButtonStyle::Class);
        assert!(!config.escape_ampersands);
    }

    #[test]
    fn test_deserialize_full_document() {
        let yaml = r#"
author_homepages:
  "Jane Doe": https://janedoe.example.org
buttons:
  - field: slides
    label: Slides
    url: "{value}"
  - field: video
    label: "Video ({value})"
    url: "https://videos.example.org/{value}"
attribution: false
button_style: brackets
escape_ampersands: true
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            config.author_homepages["Jane Doe"],
            "https://janedoe.example.org"
        );
        assert_eq!(config.buttons.len(), 2);
        assert_eq!(config.buttons[0].field, "slides");
        assert!(!config.attribution);
        assert_eq!(config.button_style, ButtonStyle::Brackets);
        assert!(config.escape_ampersands);
    }

    #[test]
    fn test_deserialize_partial_document_keeps_defaults() {
        let config: Config = serde_yaml::from_str("attribution: false\n").unwrap();
        assert!(!config.attribution);
        assert_eq!(config.button_style, ButtonStyle::Class);
        assert!(config.buttons.is_empty());
    }

    #[test]
    fn test_button_expansion() {
        let button = ButtonSpec {
            field: "video".to_string(),
            label: "Video ({value})".to_string(),
            url: "https://videos.example.org/{value}".to_string(),
        };
        let (label, url) = button.expand("talk42");
        assert_eq!(label, "Video (talk42)");
        assert_eq!(url, "https://videos.example.org/talk42");
    }
}
