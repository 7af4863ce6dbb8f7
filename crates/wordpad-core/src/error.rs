//! Error types for wordpad operations.

use miette::Diagnostic;

/// Main error type for wordpad operations.
#[derive(thiserror::Error, Debug, Diagnostic)]
pub enum WordpadError {
    /// Host-supplied configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    #[diagnostic(code(wordpad::config))]
    Config(#[from] serde_json::Error),

    /// A banned phrase could not be compiled into a matcher.
    #[error("invalid banned phrase {phrase:?}: {message}")]
    #[diagnostic(code(wordpad::pattern))]
    Pattern { phrase: String, message: String },

    /// Toolbar command name not recognised.
    #[error("unknown toolbar command: {0}")]
    #[diagnostic(
        code(wordpad::command),
        help("expected one of bold, italic, h1..h6, bulletList, orderedList, undo, redo, image")
    )]
    UnknownCommand(String),

    /// Selected file could not be read.
    #[error("failed to read file {name:?}: {message}")]
    #[diagnostic(code(wordpad::file_read))]
    FileRead { name: String, message: String },

    /// Selected file had no content.
    #[error("file {0:?} is empty")]
    #[diagnostic(code(wordpad::empty_file))]
    EmptyFile(String),

    /// PDF conversion library rejected the export.
    #[error("PDF export failed: {0}")]
    #[diagnostic(code(wordpad::export))]
    Export(String),
}

impl WordpadError {
    pub fn file_read(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::FileRead {
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn export(message: impl Into<String>) -> Self {
        Self::Export(message.into())
    }
}
