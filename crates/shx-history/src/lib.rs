//! # shx-history
//!
//! In-memory log of every command the toolkit has executed, in
//! execution order. The process manager records background launches
//! here and the terminal executor records foreground runs, so one
//! shared instance gives a complete audit trail.
//!
//! The history can be saved to and loaded from plain text files, one
//! entry per line.

use std::fs;
use std::path::Path;

use parking_lot::Mutex;
use shx_common::{Error, Result};
use tracing::{debug, info};

/// Thread-safe, append-only command log.
///
/// Cheap to share behind an [`std::sync::Arc`]; all methods take
/// `&self`.
#[derive(Debug, Default)]
pub struct CommandHistory {
    entries: Mutex<Vec<String>>,
}

impl CommandHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one executed command at the end of the log.
    pub fn append(&self, entry: impl Into<String>) {
        self.entries.lock().push(entry.into());
    }

    /// Returns a snapshot of all entries in execution order.
    ///
    /// The snapshot is independent of the live log; later appends do
    /// not show up in it.
    pub fn get_all(&self) -> Vec<String> {
        self.entries.lock().clone()
    }

    /// Removes every entry.
    pub fn clear(&self) {
        self.entries.lock().clear();
        debug!("Command history cleared");
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Writes the history to a new text file, one entry per line.
    ///
    /// Refuses to overwrite: if `path` already exists the call fails
    /// and the file is left untouched. Missing parent directories are
    /// created. Returns the number of entries written.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        if path.exists() {
            return Err(Error::HistoryFileExists {
                path: path.to_path_buf(),
            });
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let snapshot = self.get_all();
        let mut contents = String::new();
        for entry in &snapshot {
            contents.push_str(entry);
            contents.push('\n');
        }
        fs::write(path, contents)?;

        info!(path = %path.display(), count = snapshot.len(), "Saved command history");
        Ok(snapshot.len())
    }

    /// Replaces the current history with the contents of a text file.
    ///
    /// The file must exist. Blank lines are skipped. Returns the number
    /// of entries loaded.
    pub fn load_from_file(&self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::HistoryFileMissing {
                path: path.to_path_buf(),
            });
        }

        let contents = fs::read_to_string(path)?;
        let loaded: Vec<String> = contents
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.to_string())
            .collect();

        let count = loaded.len();
        *self.entries.lock() = loaded;

        info!(path = %path.display(), count, "Loaded command history");
        Ok(count)
    }
}
