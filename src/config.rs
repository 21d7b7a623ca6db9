use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::state::AppState;
use crate::types::Entry;

// Fixed persistence keys; each one saves and restores on its own.
const ENTRIES_KEY: &str = "entries";
const FILE_NAME_KEY: &str = "file-name";
const DARK_MODE_KEY: &str = "dark-mode";

// File-backed session persistence: one file per key under a config directory.
// Restoring hands the engine the identical entry sequence a fresh load of the
// same document would produce.
pub struct Storage {
    dir: PathBuf,
}

impl Storage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn default_dir() -> Result<Self> {
        let base = dirs::config_dir()
            .ok_or_else(|| Error::Config("no config directory available".into()))?;
        Ok(Self::new(base.join("jsonpick")))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn save_entries(&self, entries: &[Entry]) -> Result<()> {
        let json = serde_json::to_string(entries).map_err(|e| Error::Config(e.to_string()))?;
        self.write_key(ENTRIES_KEY, &json)
    }

    pub fn load_entries(&self) -> Result<Option<Vec<Entry>>> {
        match self.read_key(ENTRIES_KEY)? {
            Some(json) => serde_json::from_str(&json)
                .map(Some)
                .map_err(|e| Error::Config(e.to_string())),
            None => Ok(None),
        }
    }

    pub fn save_file_name(&self, name: &str) -> Result<()> {
        self.write_key(FILE_NAME_KEY, name)
    }

    pub fn load_file_name(&self) -> Result<Option<String>> {
        Ok(self.read_key(FILE_NAME_KEY)?.map(|s| s.trim().to_string()))
    }

    pub fn save_dark_mode(&self, enabled: bool) -> Result<()> {
        self.write_key(DARK_MODE_KEY, if enabled { "true" } else { "false" })
    }

    pub fn load_dark_mode(&self) -> Result<Option<bool>> {
        match self.read_key(DARK_MODE_KEY)? {
            Some(text) => match text.trim() {
                "true" => Ok(Some(true)),
                "false" => Ok(Some(false)),
                other => Err(Error::Config(format!("invalid dark-mode value: {other}"))),
            },
            None => Ok(None),
        }
    }

    // Snapshot the loaded session (entry set + file name) in one call.
    pub fn save_session(&self, state: &AppState) -> Result<()> {
        if let Some(entries) = state.entries() {
            self.save_entries(&entries)?;
        }
        if let Some(name) = state.file_name() {
            self.save_file_name(&name)?;
        }
        Ok(())
    }

    // Rehydrate a previously saved session; returns false when nothing was
    // persisted, leaving the state untouched.
    pub fn restore_session(&self, state: &AppState) -> Result<bool> {
        let Some(entries) = self.load_entries()? else {
            return Ok(false);
        };
        let file_name = self.load_file_name()?;
        state.restore(entries, file_name);
        Ok(true)
    }

    pub fn clear(&self) -> Result<()> {
        for key in [ENTRIES_KEY, FILE_NAME_KEY, DARK_MODE_KEY] {
            self.clear_key(key)?;
        }
        Ok(())
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    fn write_key(&self, key: &str, contents: &str) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            Error::Config(format!("failed to create {}: {e}", self.dir.display()))
        })?;
        let path = self.key_path(key);
        fs::write(&path, contents)
            .map_err(|e| Error::Config(format!("failed to write {}: {e}", path.display())))
    }

    fn read_key(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))
    }

    fn clear_key(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        if path.exists() {
            fs::remove_file(&path)
                .map_err(|e| Error::Config(format!("failed to remove {}: {e}", path.display())))?;
        }
        Ok(())
    }
}
