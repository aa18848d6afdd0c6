use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use directories::ProjectDirs;
use hotel_core::GameSession;
use serde::{Deserialize, Serialize};

use crate::{APP_NAME, format_snapshot_hash, outcome_code};

pub const RUN_STATE_FORMAT_VERSION: u32 = 1;

/// Summary of the latest run, rewritten after every accepted command.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RunStateFile {
    pub format_version: u32,
    pub run_seed: u64,
    pub snapshot_hash_hex: String,
    pub floor: u32,
    pub candy: i32,
    pub passcode_failures: u32,
    pub outcome: Option<String>,
    pub updated_at_unix_ms: u64,
}

impl RunStateFile {
    pub fn from_session(session: &GameSession) -> Self {
        let updated_at_unix_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |duration| duration.as_millis() as u64);
        Self {
            format_version: RUN_STATE_FORMAT_VERSION,
            run_seed: session.seed(),
            snapshot_hash_hex: format_snapshot_hash(session.snapshot_hash()),
            floor: session.current_floor(),
            candy: session.candy_count(),
            passcode_failures: session.failure_count(),
            outcome: session.outcome().map(|outcome| outcome_code(&outcome).to_string()),
            updated_at_unix_ms,
        }
    }

    pub fn get_default_path() -> Option<PathBuf> {
        data_file("last_run_state.json")
    }

    pub fn write_atomic(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;

        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, path)?;

        Ok(())
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        let state: Self = serde_json::from_str(&content)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(state)
    }
}

/// Where the journal of the latest run is kept, next to the run state.
pub fn default_journal_path() -> Option<PathBuf> {
    data_file("last_run_journal.json")
}

fn data_file(name: &str) -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME).map(|proj_dirs| proj_dirs.data_dir().join(name))
}
