use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    // Shown to the user verbatim when a load attempt fails. A failed load
    // never clears an already loaded entry set.
    #[error("Invalid JSON file")]
    InvalidJson(#[source] serde_json::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("clipboard error: {0}")]
    Clipboard(String),

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
