//! Record of every accepted player input in a run, enough to rebuild it exactly.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const JOURNAL_FORMAT_VERSION: u16 = 1;

#[derive(Debug, thiserror::Error)]
pub enum JournalError {
    #[error("could not access journal file: {0}")]
    Io(#[from] io::Error),
    #[error("malformed journal: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported journal format version {found} (expected {JOURNAL_FORMAT_VERSION})")]
    UnsupportedVersion { found: u16 },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunJournal {
    pub format_version: u16,
    pub seed: u64,
    /// Fingerprint of the hotel config the run was generated from.
    pub config_hash: u64,
    pub inputs: Vec<InputRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    pub seq: u64,
    pub payload: InputPayload,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputPayload {
    AddCandy { amount: i32 },
    RemoveCandy { amount: i32 },
    GoToFloor { floor: u32 },
    SubmitPasscode { attempt: String },
}

impl RunJournal {
    pub fn new(seed: u64, config_hash: u64) -> Self {
        Self { format_version: JOURNAL_FORMAT_VERSION, seed, config_hash, inputs: Vec::new() }
    }

    /// Appends with the next sequence number and returns it.
    pub fn append(&mut self, payload: InputPayload) -> u64 {
        let seq = self.inputs.len() as u64;
        self.inputs.push(InputRecord { seq, payload });
        seq
    }

    pub fn to_json(&self) -> Result<String, JournalError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(source: &str) -> Result<Self, JournalError> {
        let journal: Self = serde_json::from_str(source)?;
        if journal.format_version != JOURNAL_FORMAT_VERSION {
            return Err(JournalError::UnsupportedVersion { found: journal.format_version });
        }
        Ok(journal)
    }

    pub fn save(&self, path: &Path) -> Result<(), JournalError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, JournalError> {
        Self::from_json(&fs::read_to_string(path)?)
    }
}
