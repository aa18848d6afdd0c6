//! Guarantees enough good rooms carry a clue television to reveal the passcode.

use tracing::{debug, warn};

use crate::content::RoomDefinition;
use crate::rng::HotelRng;

use super::model::HotelLayout;

/// Swaps good non-TV rooms for TV-clue definitions from the good pool until
/// `min(required, good rooms)` good rooms can carry a clue. Only good rooms are
/// touched, so the good/bad split is unchanged. Returns the number of swaps.
pub(super) fn enforce_tv_quota(
    layout: &mut HotelLayout,
    good_pool: &[RoomDefinition],
    required: usize,
    rng: &mut HotelRng,
) -> usize {
    let target = required.min(layout.good_room_count());
    let mut tv_rooms = layout.good_tv_room_count();
    if tv_rooms >= target {
        return 0;
    }

    let tv_definitions: Vec<&RoomDefinition> =
        good_pool.iter().filter(|definition| definition.has_tv_clue()).collect();
    if tv_definitions.is_empty() {
        warn!(
            target: "hotel::layout",
            tv_rooms,
            target_tv_rooms = target,
            "layout.quota.no_tv_definitions"
        );
        return 0;
    }

    let mut replacements = 0;
    while tv_rooms < target {
        let candidates: Vec<(u32, u32)> = layout
            .rooms()
            .filter(|room| room.is_good() && !room.has_tv_clue_definition())
            .map(|room| (room.floor, room.index))
            .collect();
        let Some(&(floor, index)) = rng.choose(&candidates) else {
            break;
        };
        let Some(&replacement) = rng.choose(&tv_definitions) else {
            break;
        };

        layout.room_mut(floor, index).definition = Some(replacement.clone());
        replacements += 1;
        tv_rooms = layout.good_tv_room_count();
    }

    debug!(target: "hotel::layout", replacements, tv_rooms, "layout.quota.applied");
    replacements
}
