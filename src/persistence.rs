//! High-score record: a single JSON integer in a file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{GameError, Result};

pub const DEFAULT_RECORD_PATH: &str = "save_record/record.json";

#[derive(Clone, Debug)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        HighScoreStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored high score. A missing, unreadable or malformed record
    /// counts as 0.
    pub fn load(&self) -> u32 {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no high-score record");
                return 0;
            }
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "cannot read high-score record");
                return 0;
            }
        };
        match serde_json::from_str::<u32>(contents.trim()) {
            Ok(record) => record,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "ignoring malformed high-score record");
                0
            }
        }
    }

    pub fn save(&self, high_score: u32) -> Result<()> {
        let contents = serde_json::to_string(&high_score)?;
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|source| GameError::Record {
                path: self.path.clone(),
                source,
            })?;
        }
        fs::write(&self.path, contents).map_err(|source| GameError::Record {
            path: self.path.clone(),
            source,
        })?;
        tracing::info!(path = %self.path.display(), high_score, "high score saved");
        Ok(())
    }
}

impl Default for HighScoreStore {
    fn default() -> Self {
        HighScoreStore::new(DEFAULT_RECORD_PATH)
    }
}
