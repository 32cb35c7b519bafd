//! JSON persistence for the running score.

use derive_more::{Display, Error};
use infinite_tictactoe::Scoreboard;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Score file error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Score file error: {} at {}:{}", message, file, line)]
pub struct ScoreFileError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ScoreFileError {
    /// Creates a new error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for ScoreFileError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

impl From<serde_json::Error> for ScoreFileError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("Malformed score file: {}", err))
    }
}

/// A scoreboard stored at a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreFile {
    path: PathBuf,
}

impl ScoreFile {
    /// Points at `path`; nothing is read until [`ScoreFile::load`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the scoreboard. A missing file is an empty scoreboard.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<Scoreboard, ScoreFileError> {
        if !self.path.exists() {
            debug!("No score file yet");
            return Ok(Scoreboard::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        let scoreboard = serde_json::from_str(&content)?;
        debug!(?scoreboard, "Loaded scores");
        Ok(scoreboard)
    }

    /// Writes the scoreboard, replacing any previous contents.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn save(&self, scoreboard: &Scoreboard) -> Result<(), ScoreFileError> {
        let content = serde_json::to_string_pretty(scoreboard)?;
        std::fs::write(&self.path, content)?;
        info!(total = scoreboard.total(), "Saved scores");
        Ok(())
    }
}
