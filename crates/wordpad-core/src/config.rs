//! Editor configuration: banned phrases, initial content and export options.

use serde::{Deserialize, Serialize};

use crate::error::WordpadError;
use crate::export::PdfExportOptions;
use crate::filter::PhraseFilter;

/// Phrases stripped from pasted content unless the host overrides them.
pub const DEFAULT_BANNED_PHRASES: &[&str] = &[
    "Sign Up",
    "sign up",
    "SIGN UP",
    "Signup",
    "signup",
    r#""Concept && Coding" YT Video Notes"#,
    "Report Abuse",
];

/// Document content the editor starts with.
pub const DEFAULT_INITIAL_CONTENT: &str = "<p>Paste something…</p>";

/// Editor configuration, fixed for the lifetime of an editor instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WordpadConfig {
    /// Literal phrases removed from pastes, applied in order.
    pub banned_phrases: Vec<String>,
    /// HTML the document surface is constructed with.
    pub initial_content: String,
    /// Options handed to the PDF converter.
    pub export: PdfExportOptions,
}

impl Default for WordpadConfig {
    fn default() -> Self {
        Self {
            banned_phrases: DEFAULT_BANNED_PHRASES
                .iter()
                .map(|p| p.to_string())
                .collect(),
            initial_content: DEFAULT_INITIAL_CONTENT.to_owned(),
            export: PdfExportOptions::default(),
        }
    }
}

impl WordpadConfig {
    /// Parse a (possibly partial) JSON override. Missing fields keep defaults.
    pub fn from_json(json: &str) -> Result<Self, WordpadError> {
        let config = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Build the phrase filter for this configuration.
    pub fn phrase_filter(&self) -> Result<PhraseFilter, WordpadError> {
        PhraseFilter::new(&self.banned_phrases)
    }
}
