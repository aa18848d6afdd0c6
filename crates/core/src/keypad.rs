//! Exit-door keypad: buffers digits and submits them to the session.

use std::mem;

use crate::session::{GameSession, PasscodeCheck};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeypadKey {
    Digit(u8),
    Backspace,
    Clear,
    Submit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeypadResponse {
    Updated,
    /// Submit pressed before every digit was entered; nothing was checked.
    Incomplete,
    Accepted,
    Rejected { attempts_left: u32 },
    /// No attempts remain or the run is over; the key was ignored.
    Locked,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Keypad {
    entry: String,
}

impl Keypad {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(&self) -> &str {
        &self.entry
    }

    /// Entered digits followed by `*` for each one still missing.
    pub fn display(&self, passcode_length: usize) -> String {
        let missing = passcode_length.saturating_sub(self.entry.len());
        format!("{}{}", self.entry, "*".repeat(missing))
    }

    pub fn press(&mut self, key: KeypadKey, session: &mut GameSession) -> KeypadResponse {
        if session.is_finished() {
            return KeypadResponse::Locked;
        }

        let length = session.passcode().len();
        match key {
            KeypadKey::Digit(digit) => {
                if digit <= 9 && self.entry.len() < length {
                    self.entry.push(char::from(b'0' + digit));
                }
                KeypadResponse::Updated
            }
            KeypadKey::Backspace => {
                self.entry.pop();
                KeypadResponse::Updated
            }
            KeypadKey::Clear => {
                self.entry.clear();
                KeypadResponse::Updated
            }
            KeypadKey::Submit => {
                if self.entry.len() < length {
                    return KeypadResponse::Incomplete;
                }
                let attempt = mem::take(&mut self.entry);
                match session.submit_passcode(&attempt) {
                    PasscodeCheck::Accepted => KeypadResponse::Accepted,
                    PasscodeCheck::Rejected { .. } => {
                        KeypadResponse::Rejected { attempts_left: session.attempts_left() }
                    }
                    PasscodeCheck::Exhausted | PasscodeCheck::Locked => KeypadResponse::Locked,
                }
            }
        }
    }
}
