//! Clue values, their dedup signature, synthesis and rendering.

mod render;
pub mod synth;

use serde::{Deserialize, Serialize};

use crate::config::ClueWeights;

pub use render::{FLAVOR_LINES, room_label};
pub use synth::{ClueContext, synthesize};

/// Floor recorded on passcode clues; they are not about any hallway.
pub const LOBBY_FLOOR: u32 = 0;

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ClueKind {
    /// No information; renders as flavor text and is exempt from dedup.
    #[default]
    Neutral,

    AssertGood,
    AssertBad,

    AdjacentGood,
    AdjacentBad,

    AmongSetGood,
    AmongSetBad,

    RangeGood,
    RangeBad,

    XorGood,
    XorBad,

    CodePosition,
    CodeSum,
}

impl ClueKind {
    pub fn is_neutral(self) -> bool {
        self == Self::Neutral
    }

    pub fn reveals_passcode(self) -> bool {
        matches!(self, Self::CodePosition | Self::CodeSum)
    }

    pub fn family(self) -> Option<ClueFamily> {
        match self {
            Self::AssertGood | Self::AssertBad => Some(ClueFamily::Assert),
            Self::AdjacentGood | Self::AdjacentBad => Some(ClueFamily::Adjacent),
            Self::AmongSetGood | Self::AmongSetBad => Some(ClueFamily::AmongSet),
            Self::RangeGood | Self::RangeBad => Some(ClueFamily::Range),
            Self::XorGood | Self::XorBad => Some(ClueFamily::Xor),
            Self::CodeSum => Some(ClueFamily::CodeSum),
            Self::Neutral | Self::CodePosition => None,
        }
    }
}

/// The chance-based clue families. Position clues are never rolled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClueFamily {
    Assert,
    Adjacent,
    Xor,
    AmongSet,
    Range,
    CodeSum,
}

impl ClueFamily {
    /// Order in which cumulative weights are walked; earlier families win ties.
    pub const ROLL_ORDER: [Self; 6] =
        [Self::Assert, Self::Adjacent, Self::Xor, Self::AmongSet, Self::Range, Self::CodeSum];

    pub fn weight(self, weights: &ClueWeights) -> f64 {
        let raw = match self {
            Self::Assert => weights.assert,
            Self::Adjacent => weights.adjacent,
            Self::Xor => weights.xor,
            Self::AmongSet => weights.among_set,
            Self::Range => weights.range,
            Self::CodeSum => weights.code_sum,
        };
        if raw.is_nan() { 0.0 } else { raw.max(0.0) }
    }

    fn kind(self, good: bool) -> ClueKind {
        match (self, good) {
            (Self::Assert, true) => ClueKind::AssertGood,
            (Self::Assert, false) => ClueKind::AssertBad,
            (Self::Adjacent, true) => ClueKind::AdjacentGood,
            (Self::Adjacent, false) => ClueKind::AdjacentBad,
            (Self::Xor, true) => ClueKind::XorGood,
            (Self::Xor, false) => ClueKind::XorBad,
            (Self::AmongSet, true) => ClueKind::AmongSetGood,
            (Self::AmongSet, false) => ClueKind::AmongSetBad,
            (Self::Range, true) => ClueKind::RangeGood,
            (Self::Range, false) => ClueKind::RangeBad,
            (Self::CodeSum, _) => ClueKind::CodeSum,
        }
    }
}

/// A clue as a `(kind, floor, a, b, c)` tuple. The meaning of `a`, `b` and `c`
/// depends on the kind: room indices, a count, a digit and its position, or a
/// digit sum.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClueData {
    pub kind: ClueKind,
    pub floor: u32,
    pub a: u32,
    pub b: u32,
    pub c: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClueSignature {
    pub kind: ClueKind,
    pub floor: u32,
    pub a: u32,
    pub b: u32,
    pub c: u32,
}

impl ClueData {
    pub const NEUTRAL: Self = Self { kind: ClueKind::Neutral, floor: 0, a: 0, b: 0, c: 0 };

    pub fn new(kind: ClueKind, floor: u32, a: u32, b: u32, c: u32) -> Self {
        Self { kind, floor, a, b, c }
    }

    pub fn is_neutral(&self) -> bool {
        self.kind.is_neutral()
    }

    pub fn signature(&self) -> ClueSignature {
        ClueSignature { kind: self.kind, floor: self.floor, a: self.a, b: self.b, c: self.c }
    }
}
