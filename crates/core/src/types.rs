use serde::{Deserialize, Serialize};

/// Hidden status of a room: safe to enter or hosting a monster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Safety {
    Good,
    Bad,
}

impl Safety {
    pub fn from_good(is_good: bool) -> Self {
        if is_good { Self::Good } else { Self::Bad }
    }

    pub fn is_good(self) -> bool {
        self == Self::Good
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum InteractionType {
    // Candy sources.
    Searchable,
    Pickup,

    TelevisionKey,
    /// Carries a synthesized clue when the room is good.
    TelevisionClue,

    GoodMonster,
    ForcedMonster,
    MonsterTelevision,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DefeatCause {
    OutOfCandy,
    AttemptsExhausted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RunOutcome {
    Victory,
    Defeat(DefeatCause),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("floor {floor} is outside the hotel (max floor {max_floor})")]
    FloorOutOfRange { floor: u32, max_floor: u32 },
}
