//! Hotel-wide configuration: floor and room counts, ratios, clue weights and
//! the room pools. Authored as TOML; every field falls back to the built-in
//! defaults when omitted.

use std::fs;
use std::hash::Hasher;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::Xxh3;

use crate::content::{
    RoomDefinition, default_bad_pool, default_defeat_messages, default_good_pool,
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read hotel config: {0}")]
    Io(#[from] io::Error),
    #[error("could not parse hotel config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Relative chances of the six weighted clue families.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClueWeights {
    pub assert: f64,
    pub adjacent: f64,
    pub among_set: f64,
    pub range: f64,
    pub xor: f64,
    pub code_sum: f64,
}

impl Default for ClueWeights {
    fn default() -> Self {
        Self { assert: 0.15, adjacent: 0.15, among_set: 0.15, range: 0.15, xor: 0.3, code_sum: 0.1 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotelConfig {
    /// Number of floors including the lobby (floor 0).
    pub total_floors: u32,
    pub rooms_per_floor: u32,
    pub good_room_ratio: f64,
    pub passcode_length: usize,
    pub clue_weights: ClueWeights,
    pub good_pool: Vec<RoomDefinition>,
    pub bad_pool: Vec<RoomDefinition>,
    pub defeat_messages: Vec<String>,
}

impl Default for HotelConfig {
    fn default() -> Self {
        Self {
            total_floors: 3,
            rooms_per_floor: 6,
            good_room_ratio: 0.7,
            passcode_length: 6,
            clue_weights: ClueWeights::default(),
            good_pool: default_good_pool(),
            bad_pool: default_bad_pool(),
            defeat_messages: default_defeat_messages(),
        }
    }
}

impl HotelConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Highest floor index plus one; floors `1..max_floor` hold rooms.
    pub fn max_floor(&self) -> u32 {
        self.total_floors
    }

    pub fn pool(&self, is_good: bool) -> &[RoomDefinition] {
        if is_good { &self.good_pool } else { &self.bad_pool }
    }

    /// Stable fingerprint used to tie journals to the config they were recorded with.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u32(self.total_floors);
        hasher.write_u32(self.rooms_per_floor);
        hasher.write_u64(self.good_room_ratio.to_bits());
        hasher.write_usize(self.passcode_length);
        let weights = self.clue_weights;
        for weight in [
            weights.assert,
            weights.adjacent,
            weights.among_set,
            weights.range,
            weights.xor,
            weights.code_sum,
        ] {
            hasher.write_u64(weight.to_bits());
        }
        for room in self.good_pool.iter().chain(&self.bad_pool) {
            hasher.write(room.id.as_bytes());
            hasher.write_u8(u8::from(room.category.is_good()));
            hasher.write_u64(room.spawn_weight.to_bits());
            hasher.write(room.prefab.as_bytes());
            for entry in &room.interactions {
                hasher.write_u8(entry.kind as u8);
                hasher.write_u32(entry.amount);
            }
        }
        hasher.finish()
    }
}
