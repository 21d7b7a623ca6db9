use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{Error, Result};

// Parse a JSON document from text. This is the only fallible step in a load;
// flattening is total once parsing succeeds. On failure the caller keeps any
// previously loaded entry set.
pub fn parse_document(text: &str) -> Result<Value> {
    serde_json::from_str(text).map_err(Error::InvalidJson)
}

pub fn open_file(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.display().to_string(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "read document");
    parse_document(&text)
}

// Load a document from the system clipboard (expects UTF-8 JSON text).
pub fn open_clipboard() -> Result<Value> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| Error::Clipboard(e.to_string()))?;
    let text = clipboard
        .get_text()
        .map_err(|e| Error::Clipboard(e.to_string()))?;
    parse_document(&text)
}
