pub mod format_service;
pub mod language_service;

use thiserror::Error;

/// Generic result type
pub type Result<T> = std::result::Result<T, Error>;

/// Generic error type
#[derive(Debug, Error)]
pub enum Error {
    /// error returned if there is neither a built-in nor a file based pack for a language code
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// error returned if a supported language is used before it was loaded
    #[error("language not loaded: {0}")]
    LanguageNotLoaded(String),

    /// error returned if a language scoped setting is written, that the language doesn't define
    #[error("setting not found: {0}")]
    SettingNotFound(String),

    /// errors stemming from rendering a phrase
    #[error("Format error: {0}")]
    Format(#[from] syr_format_core::FormatError),

    /// errors that stem from validation in core
    #[error("Validation Error: {0}")]
    Validation(#[from] syr_format_core::ValidationError),

    /// std io
    #[error("Io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Json error: {0}")]
    Json(#[from] serde_json::Error),
}
