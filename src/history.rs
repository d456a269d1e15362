use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::PersistError;

const APP_DIR_NAME: &str = "terminal-portfolio";
const HISTORY_FILE_NAME: &str = "history.json";

/// Most entries kept when writing the history file.
const MAX_PERSISTED_ENTRIES: usize = 100;

/// Append-only command history with a recall cursor.
///
/// Entries hold the raw submitted lines, before any normalization. The
/// cursor starts one past the end; recall navigation only moves the cursor,
/// never the entries.
#[derive(Debug, Clone, Default)]
pub struct CommandHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl CommandHistory {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a history seeded with previous-session entries, cursor one
    /// past the end.
    #[must_use]
    pub fn with_entries(entries: Vec<String>) -> Self {
        let cursor = entries.len();
        Self { entries, cursor }
    }

    /// Appends a submitted line and resets the cursor past the end.
    pub fn push(&mut self, line: String) {
        self.entries.push(line);
        self.cursor = self.entries.len();
    }

    /// Moves the cursor one entry back, floored at the oldest entry, and
    /// returns the entry now under the cursor. `None` when there is no
    /// history at all (the input buffer is left untouched).
    pub fn recall_previous(&mut self) -> Option<&str> {
        if self.cursor > 0 {
            self.cursor -= 1;
        }

        self.entries.get(self.cursor).map(String::as_str)
    }

    /// Moves the cursor one entry forward, capped one past the end. Returns
    /// the entry now under the cursor, or `None` at the cap (the input
    /// buffer becomes empty).
    pub fn recall_next(&mut self) -> Option<&str> {
        if self.cursor < self.entries.len() {
            self.cursor += 1;
        }

        self.entries.get(self.cursor).map(String::as_str)
    }

    /// Returns all entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Returns the current cursor index (entry count when past the end).
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct HistoryFile {
    entries: Vec<String>,
}

/// Returns the platform-correct history file path.
#[must_use]
pub fn history_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(HISTORY_FILE_NAME);
    base
}

/// Loads persisted history from disk.
///
/// Returns an empty history when the file does not yet exist (first run).
/// Returns `Err` when the file exists but cannot be read or parsed, so the
/// caller can surface a warning before entering raw terminal mode.
pub fn load_history() -> Result<CommandHistory, PersistError> {
    load_history_from_path(&history_path())
}

/// Saves history to disk, creating parent directories when needed. Only the
/// newest `MAX_PERSISTED_ENTRIES` entries are written.
pub fn save_history(history: &CommandHistory) -> Result<(), PersistError> {
    save_history_to_path(&history_path(), history)
}

fn load_history_from_path(path: &Path) -> Result<CommandHistory, PersistError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(CommandHistory::new()),
        Err(e) => return Err(e.into()),
    };

    let file: HistoryFile = serde_json::from_str(&raw)?;
    Ok(CommandHistory::with_entries(file.entries))
}

fn save_history_to_path(path: &Path, history: &CommandHistory) -> Result<(), PersistError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let entries = history.entries();
    let keep_from = entries.len().saturating_sub(MAX_PERSISTED_ENTRIES);
    let payload = HistoryFile {
        entries: entries[keep_from..].to_vec(),
    };

    let json = serde_json::to_string_pretty(&payload)?;
    fs::write(path, json)?;
    Ok(())
}
