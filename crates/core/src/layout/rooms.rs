//! Safety rolls and weighted room selection.

use crate::config::HotelConfig;
use crate::content::RoomDefinition;
use crate::rng::HotelRng;
use crate::types::Safety;

use super::model::{HotelLayout, RoomState};

pub(super) fn roll_rooms(config: &HotelConfig, rng: &mut HotelRng) -> HotelLayout {
    let max_floor = config.max_floor();
    let rooms_per_floor = config.rooms_per_floor;
    if rooms_per_floor == 0 || max_floor <= 1 {
        return HotelLayout::new(max_floor, rooms_per_floor, Vec::new());
    }

    let floors = (1..max_floor)
        .map(|floor| {
            (0..rooms_per_floor)
                .map(|index| {
                    let is_good = rng.chance(config.good_room_ratio);
                    let definition = weighted_pick(config.pool(is_good), rng).cloned();
                    RoomState {
                        floor,
                        index,
                        definition,
                        safety: Safety::from_good(is_good),
                        clue: Default::default(),
                        prefab_seed: rng.next_u64(),
                        spawn_seed: rng.next_u64(),
                    }
                })
                .collect()
        })
        .collect();

    HotelLayout::new(max_floor, rooms_per_floor, floors)
}

/// Weighted roll over a pool. Float drift that leaves the roll unspent falls
/// back to the last entry.
pub fn weighted_pick<'a>(
    pool: &'a [RoomDefinition],
    rng: &mut HotelRng,
) -> Option<&'a RoomDefinition> {
    if pool.is_empty() {
        return None;
    }

    let total: f64 = pool.iter().map(RoomDefinition::effective_weight).sum();
    let mut roll = rng.value() * total;
    for definition in pool {
        roll -= definition.effective_weight();
        if roll <= 0.0 {
            return Some(definition);
        }
    }

    pool.last()
}
