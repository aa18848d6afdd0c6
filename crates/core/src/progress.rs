//! Mutable per-run state: floor, candy, passcode failures and the clue registry.

use std::collections::BTreeSet;

use crate::clue::{ClueData, ClueSignature};
use crate::types::DefeatCause;

pub const MAX_PASSCODE_ATTEMPTS: u32 = 3;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProgressTracker {
    current_floor: u32,
    candy: i32,
    passcode_failures: u32,
    issued_clues: BTreeSet<ClueSignature>,
    code_positions_issued: usize,
    out_of_candy: bool,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn current_floor(&self) -> u32 {
        self.current_floor
    }

    pub(crate) fn set_current_floor(&mut self, floor: u32) {
        self.current_floor = floor;
    }

    pub fn candy(&self) -> i32 {
        self.candy
    }

    pub fn add_candy(&mut self, amount: i32) -> i32 {
        self.candy = self.candy.saturating_add(amount);
        self.candy
    }

    /// Returns the defeat cause the first time the count drops below zero.
    pub fn remove_candy(&mut self, amount: i32) -> Option<DefeatCause> {
        self.candy = self.candy.saturating_sub(amount);
        if self.candy < 0 && !self.out_of_candy {
            self.out_of_candy = true;
            return Some(DefeatCause::OutOfCandy);
        }
        None
    }

    pub fn passcode_failures(&self) -> u32 {
        self.passcode_failures
    }

    pub fn attempts_exhausted(&self) -> bool {
        self.passcode_failures >= MAX_PASSCODE_ATTEMPTS
    }

    /// Counts a wrong passcode; reports exhaustion on the attempt that reaches the cap.
    pub fn add_passcode_failure(&mut self) -> Option<DefeatCause> {
        if self.attempts_exhausted() {
            return None;
        }
        self.passcode_failures += 1;
        self.attempts_exhausted().then_some(DefeatCause::AttemptsExhausted)
    }

    /// Inserts the clue's signature; `false` means it was already issued this run.
    pub fn try_register_clue(&mut self, clue: &ClueData) -> bool {
        if clue.is_neutral() {
            return true;
        }
        self.issued_clues.insert(clue.signature())
    }

    pub fn issued_clue_count(&self) -> usize {
        self.issued_clues.len()
    }

    pub fn code_positions_issued(&self) -> usize {
        self.code_positions_issued
    }

    /// Claims the next 1-based passcode position while any remain unrevealed.
    pub(crate) fn claim_code_position(&mut self, passcode_length: usize) -> Option<usize> {
        if self.code_positions_issued >= passcode_length {
            return None;
        }
        self.code_positions_issued += 1;
        Some(self.code_positions_issued)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clue::ClueKind;

    #[test]
    fn candy_going_negative_signals_defeat_once() {
        let mut progress = ProgressTracker::new();
        assert_eq!(progress.remove_candy(1), Some(DefeatCause::OutOfCandy));
        assert_eq!(progress.candy(), -1);
        assert_eq!(progress.remove_candy(1), None);
        progress.add_candy(5);
        assert_eq!(progress.remove_candy(10), None);
        assert_eq!(progress.candy(), -6);
    }

    #[test]
    fn candy_at_zero_is_not_a_defeat() {
        let mut progress = ProgressTracker::new();
        assert_eq!(progress.add_candy(2), 2);
        assert_eq!(progress.remove_candy(2), None);
        assert_eq!(progress.candy(), 0);
    }

    #[test]
    fn third_failure_exhausts_attempts_and_count_is_capped() {
        let mut progress = ProgressTracker::new();
        assert_eq!(progress.add_passcode_failure(), None);
        assert_eq!(progress.add_passcode_failure(), None);
        assert_eq!(progress.add_passcode_failure(), Some(DefeatCause::AttemptsExhausted));
        assert_eq!(progress.add_passcode_failure(), None);
        assert_eq!(progress.passcode_failures(), MAX_PASSCODE_ATTEMPTS);
    }

    #[test]
    fn duplicate_signatures_are_rejected_but_neutral_is_exempt() {
        let mut progress = ProgressTracker::new();
        let clue = ClueData::new(ClueKind::CodeSum, 0, 17, 0, 0);
        assert!(progress.try_register_clue(&clue));
        assert!(!progress.try_register_clue(&clue));
        assert!(progress.try_register_clue(&ClueData::NEUTRAL));
        assert!(progress.try_register_clue(&ClueData::NEUTRAL));
        assert_eq!(progress.issued_clue_count(), 1);
    }

    #[test]
    fn code_positions_are_claimed_in_order_until_exhausted() {
        let mut progress = ProgressTracker::new();
        assert_eq!(progress.claim_code_position(3), Some(1));
        assert_eq!(progress.claim_code_position(3), Some(2));
        assert_eq!(progress.claim_code_position(3), Some(3));
        assert_eq!(progress.claim_code_position(3), None);
        assert_eq!(progress.code_positions_issued(), 3);
    }

    #[test]
    fn reset_clears_the_run() {
        let mut progress = ProgressTracker::new();
        progress.add_candy(3);
        progress.set_current_floor(2);
        progress.add_passcode_failure();
        progress.try_register_clue(&ClueData::new(ClueKind::AssertGood, 1, 0, 0, 0));
        progress.reset();
        assert_eq!(progress, ProgressTracker::new());
    }
}
