use std::time::Duration;

use crate::error::{Error, Result};

// How long the "Picked!" toast stays on screen.
pub const NOTIFICATION_DURATION: Duration = Duration::from_secs(2);

// Payload handed to the presentation layer when an entry is picked from the
// suggestions or the result table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pick {
    pub path: String,
    pub notification: String,
}

impl Pick {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            notification: format!("Picked! {path}"),
        }
    }
}

// Write a picked property path straight to the system clipboard.
pub fn copy_path(path: &str) -> Result<()> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| Error::Clipboard(e.to_string()))?;
    clipboard
        .set_text(path.to_string())
        .map_err(|e| Error::Clipboard(e.to_string()))?;
    Ok(())
}

// Presentation split for the copy-last-property-only toggle: the dimmed
// prefix (dot included) and the highlighted final segment. Rendering only,
// never an input to matching or sorting.
pub fn split_last_segment(path: &str) -> (&str, &str) {
    match path.rfind('.') {
        Some(dot) => path.split_at(dot + 1),
        None => ("", path),
    }
}
