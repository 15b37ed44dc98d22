//! High score persistence
//!
//! The high score is a single non-negative integer stored as text. Stores
//! report errors; callers decide how to recover (the simulation treats a
//! missing or unreadable score as zero).

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Default file name next to the executable's working directory
pub const DEFAULT_HIGH_SCORE_FILE: &str = "high_score.txt";

/// Persistence errors
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("High score not found")]
    NotFound,

    #[error("High score corrupted: {0:?}")]
    Corrupted(String),
}

/// Load/save boundary for the high score
pub trait ScoreStore {
    fn load(&self) -> Result<u64, PersistError>;
    fn save(&mut self, high_score: u64) -> Result<(), PersistError>;
}

/// Parse the stored text form, tolerating surrounding whitespace
pub fn parse_high_score(text: &str) -> Result<u64, PersistError> {
    text.trim()
        .parse::<u64>()
        .map_err(|_| PersistError::Corrupted(text.to_string()))
}

/// High score kept in a text file
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&self) -> Result<u64, PersistError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(PersistError::NotFound);
            }
            Err(e) => return Err(e.into()),
        };
        parse_high_score(&text)
    }

    fn save(&mut self, high_score: u64) -> Result<(), PersistError> {
        std::fs::write(&self.path, high_score.to_string())?;
        log::info!("High score {} saved to {}", high_score, self.path.display());
        Ok(())
    }
}

/// In-memory store holding the raw text, for tests and headless runs
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    pub contents: Option<String>,
    pub saves: u32,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(text: impl Into<String>) -> Self {
        Self {
            contents: Some(text.into()),
            saves: 0,
        }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> Result<u64, PersistError> {
        match &self.contents {
            Some(text) => parse_high_score(text),
            None => Err(PersistError::NotFound),
        }
    }

    fn save(&mut self, high_score: u64) -> Result<(), PersistError> {
        self.contents = Some(high_score.to_string());
        self.saves += 1;
        Ok(())
    }
}
