use serde::{Deserialize, Serialize};

use crate::types::{InteractionType, Safety};

/// Smallest weight a room definition can contribute to a weighted roll.
pub const MIN_SPAWN_WEIGHT: f64 = 0.0001;

pub const FALLBACK_DEFEAT_MESSAGE: &str = "You ran out of candy!";

pub mod keys {
    pub const ROOM_LOUNGE_CANDY_BOWL: &str = "room_lounge_candy_bowl";
    pub const ROOM_SUITE_CANDY_STASH: &str = "room_suite_candy_stash";
    pub const ROOM_DEN_CLUE_TELEVISION: &str = "room_den_clue_television";
    pub const ROOM_STUDY_CLUE_TELEVISION: &str = "room_study_clue_television";
    pub const ROOM_PARLOR_FRIENDLY_MONSTER: &str = "room_parlor_friendly_monster";
    pub const ROOM_OFFICE_KEYPAD_TELEVISION: &str = "room_office_keypad_television";

    pub const ROOM_CLOSET_LURKER: &str = "room_closet_lurker";
    pub const ROOM_LOUNGE_MONSTER_TELEVISION: &str = "room_lounge_monster_television";
    pub const ROOM_NURSERY_LURKER_STASH: &str = "room_nursery_lurker_stash";
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomInteraction {
    pub kind: InteractionType,
    pub amount: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoomDefinition {
    pub id: String,
    pub category: Safety,
    #[serde(default = "default_spawn_weight")]
    pub spawn_weight: f64,
    /// Host-engine template the presentation layer instantiates for this room.
    pub prefab: String,
    #[serde(default)]
    pub interactions: Vec<RoomInteraction>,
}

fn default_spawn_weight() -> f64 {
    1.0
}

impl RoomDefinition {
    pub fn new(id: &str, category: Safety, spawn_weight: f64, prefab: &str) -> Self {
        Self {
            id: id.to_string(),
            category,
            spawn_weight,
            prefab: prefab.to_string(),
            interactions: Vec::new(),
        }
    }

    pub fn with_interaction(mut self, kind: InteractionType, amount: u32) -> Self {
        self.interactions.push(RoomInteraction { kind, amount });
        self
    }

    /// Weight used by the weighted roll, clamped so no entry has zero probability.
    pub fn effective_weight(&self) -> f64 {
        if self.spawn_weight.is_nan() {
            return MIN_SPAWN_WEIGHT;
        }
        self.spawn_weight.max(MIN_SPAWN_WEIGHT)
    }

    pub fn has_tv_clue(&self) -> bool {
        self.interactions.iter().any(|entry| entry.kind == InteractionType::TelevisionClue)
    }
}

pub fn default_good_pool() -> Vec<RoomDefinition> {
    vec![
        RoomDefinition::new(keys::ROOM_LOUNGE_CANDY_BOWL, Safety::Good, 1.0, "Lounge")
            .with_interaction(InteractionType::Searchable, 3),
        RoomDefinition::new(keys::ROOM_SUITE_CANDY_STASH, Safety::Good, 0.8, "Suite")
            .with_interaction(InteractionType::Pickup, 2)
            .with_interaction(InteractionType::Searchable, 1),
        RoomDefinition::new(keys::ROOM_DEN_CLUE_TELEVISION, Safety::Good, 1.2, "Den")
            .with_interaction(InteractionType::TelevisionClue, 1)
            .with_interaction(InteractionType::Searchable, 1),
        RoomDefinition::new(keys::ROOM_STUDY_CLUE_TELEVISION, Safety::Good, 0.6, "Study")
            .with_interaction(InteractionType::TelevisionClue, 1)
            .with_interaction(InteractionType::Pickup, 1),
        RoomDefinition::new(keys::ROOM_PARLOR_FRIENDLY_MONSTER, Safety::Good, 0.5, "Parlor")
            .with_interaction(InteractionType::GoodMonster, 1),
        RoomDefinition::new(keys::ROOM_OFFICE_KEYPAD_TELEVISION, Safety::Good, 0.4, "Office")
            .with_interaction(InteractionType::TelevisionKey, 1),
    ]
}

pub fn default_bad_pool() -> Vec<RoomDefinition> {
    vec![
        RoomDefinition::new(keys::ROOM_CLOSET_LURKER, Safety::Bad, 1.0, "Closet")
            .with_interaction(InteractionType::ForcedMonster, 1),
        RoomDefinition::new(keys::ROOM_LOUNGE_MONSTER_TELEVISION, Safety::Bad, 0.7, "Lounge")
            .with_interaction(InteractionType::MonsterTelevision, 1),
        RoomDefinition::new(keys::ROOM_NURSERY_LURKER_STASH, Safety::Bad, 0.5, "Nursery")
            .with_interaction(InteractionType::ForcedMonster, 1)
            .with_interaction(InteractionType::Pickup, 1),
    ]
}

pub fn default_defeat_messages() -> Vec<String> {
    [
        "Your pockets are empty. Something in the hall is still hungry.",
        "No candy left to bargain with.",
        "The monsters wanted a treat. You had none.",
    ]
    .iter()
    .map(|message| message.to_string())
    .collect()
}

/// Picks the message shown when candy runs out, skipping blank entries.
pub fn pick_defeat_message(messages: &[String], roll: usize) -> &str {
    let valid: Vec<&String> =
        messages.iter().filter(|message| !message.trim().is_empty()).collect();
    if valid.is_empty() {
        return FALLBACK_DEFEAT_MESSAGE;
    }
    valid[roll % valid.len()].as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_weight_is_clamped_to_positive_floor() {
        let zero = RoomDefinition::new("zero", Safety::Good, 0.0, "Zero");
        let negative = RoomDefinition::new("negative", Safety::Good, -3.0, "Negative");
        let nan = RoomDefinition::new("nan", Safety::Good, f64::NAN, "Nan");
        assert_eq!(zero.effective_weight(), MIN_SPAWN_WEIGHT);
        assert_eq!(negative.effective_weight(), MIN_SPAWN_WEIGHT);
        assert_eq!(nan.effective_weight(), MIN_SPAWN_WEIGHT);
    }

    #[test]
    fn default_pools_match_their_categories() {
        assert!(default_good_pool().iter().all(|room| room.category == Safety::Good));
        assert!(default_bad_pool().iter().all(|room| room.category == Safety::Bad));
    }

    #[test]
    fn default_good_pool_carries_tv_clue_rooms() {
        let tv_rooms = default_good_pool().iter().filter(|room| room.has_tv_clue()).count();
        assert!(tv_rooms >= 2);
        assert!(!default_bad_pool().iter().any(RoomDefinition::has_tv_clue));
    }

    #[test]
    fn defeat_message_skips_blank_entries_and_falls_back() {
        let messages = vec!["  ".to_string(), "Out of sweets".to_string()];
        assert_eq!(pick_defeat_message(&messages, 0), "Out of sweets");
        assert_eq!(pick_defeat_message(&messages, 5), "Out of sweets");
        assert_eq!(pick_defeat_message(&[], 3), FALLBACK_DEFEAT_MESSAGE);
        assert_eq!(pick_defeat_message(&[String::new()], 0), FALLBACK_DEFEAT_MESSAGE);
    }
}
