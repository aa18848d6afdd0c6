//! Stable snapshot hashing for deterministic verification.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::GameSession;
use crate::types::{DefeatCause, RunOutcome};

impl GameSession {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u64(self.config.fingerprint());
        hasher.write(self.passcode.digits());
        hasher.write(&self.layout.canonical_bytes());
        hasher.write_u32(self.progress.current_floor());
        hasher.write_i32(self.progress.candy());
        hasher.write_u32(self.progress.passcode_failures());
        hasher.write_usize(self.progress.issued_clue_count());
        hasher.write_usize(self.progress.code_positions_issued());
        hasher.write_u8(match self.outcome {
            None => 0,
            Some(RunOutcome::Victory) => 1,
            Some(RunOutcome::Defeat(DefeatCause::OutOfCandy)) => 2,
            Some(RunOutcome::Defeat(DefeatCause::AttemptsExhausted)) => 3,
        });
        hasher.finish()
    }
}
