use std::fmt;

use serde::{Deserialize, Serialize};

use crate::rng::HotelRng;

/// Secret digit sequence that opens the exit door.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Passcode {
    digits: Vec<u8>,
}

impl Passcode {
    pub fn generate(length: usize, rng: &mut HotelRng) -> Self {
        Self { digits: (0..length).map(|_| rng.digit()).collect() }
    }

    /// Builds a passcode from explicit digits; `None` if any value exceeds 9.
    pub fn from_digits(digits: &[u8]) -> Option<Self> {
        if digits.iter().any(|&digit| digit > 9) {
            return None;
        }
        Some(Self { digits: digits.to_vec() })
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Digit at a 1-based position.
    pub fn digit_at(&self, position: usize) -> Option<u8> {
        position.checked_sub(1).and_then(|index| self.digits.get(index).copied())
    }

    pub fn digit_sum(&self) -> u32 {
        self.digits.iter().map(|&digit| u32::from(digit)).sum()
    }

    pub fn matches(&self, attempt: &str) -> bool {
        attempt.len() == self.digits.len()
            && attempt
                .bytes()
                .zip(&self.digits)
                .all(|(byte, &digit)| byte.is_ascii_digit() && byte - b'0' == digit)
    }
}

impl fmt::Display for Passcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in &self.digits {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}
