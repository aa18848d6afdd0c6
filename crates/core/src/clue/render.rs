use super::{ClueData, ClueKind};
use crate::rng::HotelRng;

/// Lines shown on a television that carries no clue.
pub const FLAVOR_LINES: &[&str] = &[
    "You can never leave",
    "No way out",
    "Be afraid",
    "They know you are here",
    "Trust no one",
    "The walls are listening",
    "It's all a dream",
    "Wake up",
    "Check-out time was hours ago",
    "Room service is not coming",
    "It watches from the dark",
    "We shouldn't be here",
    "It knows your name",
    "They move when you blink",
    "It's closer than before",
    "Keep quiet",
    "Nobody remembers checking in",
    "Don't open the door for anyone",
];

/// Player-facing room number: floor followed by a two-digit index.
pub fn room_label(floor: u32, index: u32) -> String {
    format!("{floor}{index:02}")
}

impl ClueData {
    /// Text for an informative clue, or `None` for the neutral placeholder.
    pub fn describe(&self, passcode_length: usize) -> Option<String> {
        let floor = self.floor;
        let room = |index: u32| room_label(floor, index);
        let text = match self.kind {
            ClueKind::Neutral => return None,

            ClueKind::AssertGood => format!("Room {} is safe", room(self.a)),
            ClueKind::AssertBad => format!("Room {} is not safe", room(self.a)),

            ClueKind::AdjacentGood => format!("A room next to {} is safe", room(self.a)),
            ClueKind::AdjacentBad => format!("A room next to {} is dangerous", room(self.a)),

            ClueKind::AmongSetGood => format!(
                "One of rooms {}, {} or {} is safe",
                room(self.a),
                room(self.b),
                room(self.c)
            ),
            ClueKind::AmongSetBad => format!(
                "One of rooms {}, {} or {} is not safe",
                room(self.a),
                room(self.b),
                room(self.c)
            ),

            ClueKind::RangeGood => format!("Floor {floor} has {} safe rooms", self.a),
            ClueKind::RangeBad => format!("Floor {floor} has {} dangerous rooms", self.a),

            ClueKind::XorGood => {
                format!("Either room {} or room {} is safe", room(self.a), room(self.b))
            }
            ClueKind::XorBad => {
                format!("Either room {} or room {} is dangerous", room(self.a), room(self.b))
            }

            ClueKind::CodePosition => masked_passcode(self.a, self.b, passcode_length),
            ClueKind::CodeSum => format!("The passcode digits add up to {}", self.a),
        };
        Some(text)
    }

    /// Text shown on screen; neutral clues draw a random flavor line.
    pub fn render(&self, passcode_length: usize, rng: &mut HotelRng) -> String {
        match self.describe(passcode_length) {
            Some(text) => text,
            None => rng.choose(FLAVOR_LINES).copied().unwrap_or_default().to_string(),
        }
    }
}

fn masked_passcode(digit: u32, position: u32, passcode_length: usize) -> String {
    let mut slots = vec!["_".to_string(); passcode_length];
    if let Some(slot) = (position as usize).checked_sub(1).and_then(|index| slots.get_mut(index)) {
        *slot = digit.to_string();
    }
    slots.join(" ")
}
