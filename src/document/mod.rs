//! The markup currently open in the code editor, together with the syntax
//! language and color theme the editor displays it with.

use crate::catalog::TemplateEntry;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

/// The page the editor opens with before any template is applied.
pub const WELCOME_PAGE: &str = include_str!("welcome.html");

/// A document shared between the session and a running orchestration.
pub type SharedDocument = Arc<Mutex<DocumentBuffer>>;

/// Syntax highlighting mode of the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Html,
    Javascript,
    Css,
    Json,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Language::Html => "html",
            Language::Javascript => "javascript",
            Language::Css => "css",
            Language::Json => "json",
        };
        f.write_str(name)
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(Language::Html),
            "javascript" | "js" => Ok(Language::Javascript),
            "css" => Ok(Language::Css),
            "json" => Ok(Language::Json),
            other => Err(format!("Unsupported language '{}'", other)),
        }
    }
}

/// Color theme of the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Theme name understood by the embedded editor widget.
    pub fn editor_id(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "vs-dark",
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" | "vs-dark" => Ok(Theme::Dark),
            other => Err(format!("Unsupported theme '{}'", other)),
        }
    }
}

/// The edited text. No markup validation is ever performed.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentBuffer {
    text: String,
    language: Language,
    theme: Theme,
}

impl Default for DocumentBuffer {
    fn default() -> Self {
        Self::new(WELCOME_PAGE)
    }
}

impl DocumentBuffer {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: Language::default(),
            theme: Theme::default(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Replaces the whole text, as an edit in the editor does.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn apply_template(&mut self, entry: &TemplateEntry) {
        debug!(template = %entry.id, bytes = entry.code.len(), "Applying template to document");
        self.text.clone_from(&entry.code);
    }

    /// Inserts `fragment` directly before the first occurrence of `marker`.
    ///
    /// Returns `false` and leaves the text untouched when the marker is absent.
    pub fn append_before_marker(&mut self, marker: &str, fragment: &str) -> bool {
        match self.text.find(marker) {
            Some(at) => {
                self.text.insert_str(at, fragment);
                true
            }
            None => {
                debug!(marker, "Marker not found, document left unchanged");
                false
            }
        }
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welcome_page_has_one_main_close() {
        let doc = DocumentBuffer::default();
        assert_eq!(doc.text().matches("</main>").count(), 1);
        assert_eq!(doc.language(), Language::Html);
        assert_eq!(doc.theme(), Theme::Light);
    }

    #[test]
    fn test_append_before_first_marker_only() {
        let mut doc = DocumentBuffer::new("<a></main><b></main>");
        assert!(doc.append_before_marker("</main>", "X"));
        assert_eq!(doc.text(), "<a>X</main><b></main>");
    }

    #[test]
    fn test_missing_marker_is_a_no_op() {
        let mut doc = DocumentBuffer::new("<div></div>");
        assert!(!doc.append_before_marker("</main>", "X"));
        assert_eq!(doc.text(), "<div></div>");
    }

    #[test]
    fn test_parse_presentation_choices() {
        assert_eq!("JSON".parse::<Language>(), Ok(Language::Json));
        assert_eq!("vs-dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(Theme::Dark.editor_id(), "vs-dark");
        assert!("cobol".parse::<Language>().is_err());
    }
}
