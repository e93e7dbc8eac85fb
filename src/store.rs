//! High score persistence.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_SAVE_FILE: &str = "snake_highscores.json";

/// Key-value store holding one best score per difficulty key.
pub trait ScoreStore {
    fn load(&mut self, key: &str) -> Result<Option<u32>, StoreError>;
    fn save(&mut self, key: &str, score: u32) -> Result<(), StoreError>;
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read high scores from {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write high scores to {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("high score file {} is malformed", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode high scores")]
    Encode(#[source] serde_json::Error),
    #[error("high score store is unavailable")]
    Unavailable,
}

// On-disk document
#[derive(Serialize, Deserialize, Default, Debug)]
struct SaveData {
    #[serde(default)]
    high_scores: BTreeMap<String, u32>,
}

/// Stores high scores in a pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<SaveData, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(SaveData::default()),
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        serde_json::from_str(&text).map_err(|source| StoreError::Malformed {
            path: self.path.clone(),
            source,
        })
    }
}

impl ScoreStore for JsonFileStore {
    fn load(&mut self, key: &str) -> Result<Option<u32>, StoreError> {
        Ok(self.read()?.high_scores.get(key).copied())
    }

    fn save(&mut self, key: &str, score: u32) -> Result<(), StoreError> {
        // A corrupt file is replaced rather than blocking every future save.
        let mut data = match self.read() {
            Ok(data) => data,
            Err(StoreError::Malformed { .. }) => SaveData::default(),
            Err(err) => return Err(err),
        };
        data.high_scores.insert(key.to_owned(), score);
        let text = serde_json::to_string_pretty(&data).map_err(StoreError::Encode)?;
        fs::write(&self.path, text).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

/// In-memory store. [`MemoryStore::unavailable`] builds one that fails every call.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    scores: HashMap<String, u32>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unavailable() -> Self {
        Self {
            scores: HashMap::new(),
            unavailable: true,
        }
    }

    pub fn with_score(mut self, key: &str, score: u32) -> Self {
        self.scores.insert(key.to_owned(), score);
        self
    }

    pub fn get(&self, key: &str) -> Option<u32> {
        self.scores.get(key).copied()
    }
}

impl ScoreStore for MemoryStore {
    fn load(&mut self, key: &str) -> Result<Option<u32>, StoreError> {
        if self.unavailable {
            return Err(StoreError::Unavailable);
        }
        Ok(self.get(key))
    }

    fn save(&mut self, key: &str, score: u32) -> Result<(), StoreError> {
        if self.unavailable {
            return Err(StoreError::Unavailable);
        }
        self.scores.insert(key.to_owned(), score);
        Ok(())
    }
}
