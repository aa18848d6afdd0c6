pub mod app_loop;
pub mod run_state_file;
pub mod seed;

use hotel_core::{DefeatCause, RunOutcome};

pub const APP_NAME: &str = "HauntedHotel";

/// Format a seed as an exact decimal string with no prefix or suffix.
pub fn format_seed(seed: u64) -> String {
    seed.to_string()
}

/// Format a snapshot hash as `0x` followed by exactly 16 lowercase hex digits.
pub fn format_snapshot_hash(hash: u64) -> String {
    format!("0x{hash:016x}")
}

/// Map a `RunOutcome` to its reason code string.
pub fn outcome_code(outcome: &RunOutcome) -> &'static str {
    match outcome {
        RunOutcome::Victory => "WIN_ESCAPED",
        RunOutcome::Defeat(DefeatCause::OutOfCandy) => "DEF_OUT_OF_CANDY",
        RunOutcome::Defeat(DefeatCause::AttemptsExhausted) => "DEF_KEYPAD_LOCKED",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_seed_is_exact_decimal() {
        assert_eq!(format_seed(0), "0");
        assert_eq!(format_seed(12345), "12345");
        assert_eq!(format_seed(u64::MAX), "18446744073709551615");
    }

    #[test]
    fn format_snapshot_hash_is_16_hex_digits() {
        assert_eq!(format_snapshot_hash(0), "0x0000000000000000");
        assert_eq!(format_snapshot_hash(0xDEADBEEF), "0x00000000deadbeef");
        assert_eq!(format_snapshot_hash(u64::MAX), "0xffffffffffffffff");
    }

    #[test]
    fn outcome_codes_are_distinct() {
        assert_eq!(outcome_code(&RunOutcome::Victory), "WIN_ESCAPED");
        assert_eq!(outcome_code(&RunOutcome::Defeat(DefeatCause::OutOfCandy)), "DEF_OUT_OF_CANDY");
        assert_eq!(
            outcome_code(&RunOutcome::Defeat(DefeatCause::AttemptsExhausted)),
            "DEF_KEYPAD_LOCKED"
        );
    }
}
