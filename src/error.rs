use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Raised when an operation requires exactly one character.
    #[error("expected a single character, got {0} characters")]
    InvalidCharLength(usize),

    #[error("invalid codepoint: {0}")]
    InvalidCodepoint(String),

    #[error("unknown Unicode property: {0}")]
    UnknownProperty(String),

    #[error("unknown encoding: {0}")]
    UnknownEncoding(String),

    #[error("unknown locale identifier: {0}")]
    UnknownLocale(String),

    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("invalid range notation {notation:?}: {reason}")]
    InvalidRange { notation: String, reason: String },

    #[error("set notation error at offset {position}: {message}")]
    SetSyntax { position: usize, message: String },

    #[error("no record found for {0}")]
    NotFound(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("xml error: {0}")]
    Xml(#[from] xml::reader::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    #[error("collator unavailable: {0}")]
    Collator(String),
}

pub type Result<T> = std::result::Result<T, Error>;
