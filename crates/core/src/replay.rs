use crate::config::HotelConfig;
use crate::journal::{InputPayload, RunJournal};
use crate::session::GameSession;
use crate::types::{RunOutcome, SessionError};

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReplayError {
    #[error("journal was recorded with config {recorded:#018x}, replaying with {current:#018x}")]
    ConfigMismatch { recorded: u64, current: u64 },
    #[error("journal has no resolved seed")]
    MissingSeed,
    #[error("input {found} is out of order (expected {expected})")]
    SequenceGap { expected: u64, found: u64 },
    #[error("input {seq} could not be applied: {source}")]
    InvalidInput { seq: u64, source: SessionError },
}

#[derive(Debug, PartialEq, Eq)]
pub struct ReplayResult {
    pub final_outcome: Option<RunOutcome>,
    pub final_snapshot_hash: u64,
    pub final_floor: u32,
    pub candy_count: i32,
    pub failure_count: u32,
    pub inputs_applied: usize,
}

/// Applies one recorded input to a live session.
pub fn apply_input(session: &mut GameSession, payload: &InputPayload) -> Result<(), SessionError> {
    match payload {
        InputPayload::AddCandy { amount } => {
            session.add_candy(*amount);
        }
        InputPayload::RemoveCandy { amount } => {
            session.remove_candy(*amount);
        }
        InputPayload::GoToFloor { floor } => {
            session.go_to_floor(*floor, &mut ())?;
        }
        InputPayload::SubmitPasscode { attempt } => {
            session.submit_passcode(attempt);
        }
    }
    Ok(())
}

/// Regenerates the run from the journal's seed and applies every input in order.
pub fn replay_to_end(
    config: &HotelConfig,
    journal: &RunJournal,
) -> Result<ReplayResult, ReplayError> {
    let current = config.fingerprint();
    if journal.config_hash != current {
        return Err(ReplayError::ConfigMismatch { recorded: journal.config_hash, current });
    }
    if journal.seed == 0 {
        return Err(ReplayError::MissingSeed);
    }

    let mut session = GameSession::initialize(config.clone(), journal.seed);
    for (expected, record) in (0_u64..).zip(&journal.inputs) {
        if record.seq != expected {
            return Err(ReplayError::SequenceGap { expected, found: record.seq });
        }
        apply_input(&mut session, &record.payload)
            .map_err(|source| ReplayError::InvalidInput { seq: record.seq, source })?;
    }

    Ok(ReplayResult {
        final_outcome: session.outcome(),
        final_snapshot_hash: session.snapshot_hash(),
        final_floor: session.current_floor(),
        candy_count: session.candy_count(),
        failure_count: session.failure_count(),
        inputs_applied: journal.inputs.len(),
    })
}

#[cfg(test)]
mod tests;
