//! Clue synthesis.
//!
//! Every clue-bearing room asks for one clue. Until each passcode position has
//! been revealed the answer is always the next position clue; after that a
//! family is rolled from the configured weights and built from the live room
//! grid. A family whose structural precondition cannot be met (too few rooms of
//! one safety, no neighbour at ±2, ...) yields the neutral clue instead of
//! failing.

use crate::config::ClueWeights;
use crate::layout::HotelLayout;
use crate::passcode::Passcode;
use crate::progress::ProgressTracker;
use crate::rng::HotelRng;
use crate::types::Safety;

use super::{ClueData, ClueFamily, ClueKind, LOBBY_FLOOR};

/// Rooms are numbered in pairs across the hallway, so neighbours sit two apart.
pub const ADJACENT_STEP: u32 = 2;

pub struct ClueContext<'a> {
    pub layout: &'a HotelLayout,
    pub passcode: &'a Passcode,
    pub weights: &'a ClueWeights,
}

pub fn synthesize(
    context: &ClueContext<'_>,
    progress: &mut ProgressTracker,
    rng: &mut HotelRng,
) -> ClueData {
    if let Some(position) = progress.claim_code_position(context.passcode.len()) {
        return code_position_clue(context.passcode, position);
    }

    match roll_family(context.weights, rng) {
        Some(family) => family_clue(context, family, rng),
        None => ClueData::NEUTRAL,
    }
}

/// Cumulative-weight roll in [`ClueFamily::ROLL_ORDER`]; `None` when the roll
/// passes every threshold, which includes all weights being zero.
pub fn roll_family(weights: &ClueWeights, rng: &mut HotelRng) -> Option<ClueFamily> {
    let total: f64 = ClueFamily::ROLL_ORDER.iter().map(|family| family.weight(weights)).sum();
    let roll = rng.value() * total;
    let mut cumulative = 0.0;
    for family in ClueFamily::ROLL_ORDER {
        cumulative += family.weight(weights);
        if roll < cumulative {
            return Some(family);
        }
    }
    None
}

pub fn family_clue(context: &ClueContext<'_>, family: ClueFamily, rng: &mut HotelRng) -> ClueData {
    let layout = context.layout;
    match family {
        ClueFamily::Assert => assert_clue(layout, rng),
        ClueFamily::Adjacent => {
            pick_floor(layout, rng).map_or(ClueData::NEUTRAL, |floor| {
                adjacent_clue_on_floor(layout, floor, rng)
            })
        }
        ClueFamily::Xor => pick_floor(layout, rng)
            .map_or(ClueData::NEUTRAL, |floor| xor_clue_on_floor(layout, floor, rng)),
        ClueFamily::AmongSet => pick_floor(layout, rng)
            .map_or(ClueData::NEUTRAL, |floor| among_set_clue_on_floor(layout, floor, rng)),
        ClueFamily::Range => pick_floor(layout, rng)
            .map_or(ClueData::NEUTRAL, |floor| range_clue_on_floor(layout, floor, rng)),
        ClueFamily::CodeSum => code_sum_clue(context.passcode),
    }
}

fn pick_floor(layout: &HotelLayout, rng: &mut HotelRng) -> Option<u32> {
    if !layout.has_rooms() {
        return None;
    }
    let floors = layout.floor_numbers();
    Some(rng.range(floors.start, floors.end))
}

pub fn assert_clue(layout: &HotelLayout, rng: &mut HotelRng) -> ClueData {
    let Some(floor) = pick_floor(layout, rng) else {
        return ClueData::NEUTRAL;
    };
    let index = rng.range(0, layout.rooms_per_floor());
    let good = layout.room(floor, index).is_good();
    ClueData::new(ClueFamily::Assert.kind(good), floor, index, 0, 0)
}

/// `a` is the room named in the clue, `b` the neighbour whose safety it states.
pub fn adjacent_clue_on_floor(layout: &HotelLayout, floor: u32, rng: &mut HotelRng) -> ClueData {
    let rooms = layout.rooms_per_floor();
    let neighbours = |source: u32| -> Vec<u32> {
        [source.checked_sub(ADJACENT_STEP), source.checked_add(ADJACENT_STEP)]
            .into_iter()
            .flatten()
            .filter(|&index| index < rooms)
            .collect()
    };

    let sources: Vec<u32> = (0..rooms).filter(|&index| !neighbours(index).is_empty()).collect();
    let Some(&source) = rng.choose(&sources) else {
        return ClueData::NEUTRAL;
    };
    let candidates = neighbours(source);
    let Some(&target) = rng.choose(&candidates) else {
        return ClueData::NEUTRAL;
    };

    let good = layout.room(floor, target).is_good();
    ClueData::new(ClueFamily::Adjacent.kind(good), floor, source, target, 0)
}

/// Good polarity lists one good room among two bad ones; bad polarity the reverse.
pub fn among_set_clue_on_floor(layout: &HotelLayout, floor: u32, rng: &mut HotelRng) -> ClueData {
    let good_rooms = layout.indices_with_safety(floor, Safety::Good);
    let bad_rooms = layout.indices_with_safety(floor, Safety::Bad);
    if good_rooms.len() < 2 || bad_rooms.len() < 2 {
        return ClueData::NEUTRAL;
    }

    let good_clue = rng.coin();
    let (minority, majority) =
        if good_clue { (&good_rooms, &bad_rooms) } else { (&bad_rooms, &good_rooms) };

    let mut set = rng.sample(minority, 1);
    set.extend(rng.sample(majority, 2));
    rng.shuffle(&mut set);

    match set[..] {
        [a, b, c] if a != b && b != c && a != c => {
            ClueData::new(ClueFamily::AmongSet.kind(good_clue), floor, a, b, c)
        }
        _ => ClueData::NEUTRAL,
    }
}

pub fn range_clue_on_floor(layout: &HotelLayout, floor: u32, rng: &mut HotelRng) -> ClueData {
    let good_count = layout.indices_with_safety(floor, Safety::Good).len() as u32;
    let bad_count = layout.rooms_per_floor() - good_count;
    let good_clue = rng.coin();
    let count = if good_clue { good_count } else { bad_count };
    ClueData::new(ClueFamily::Range.kind(good_clue), floor, count, 0, 0)
}

/// Pairs one good and one bad room from the whole floor, so exactly one of the
/// two named rooms matches the stated safety.
pub fn xor_clue_on_floor(layout: &HotelLayout, floor: u32, rng: &mut HotelRng) -> ClueData {
    let good_rooms = layout.indices_with_safety(floor, Safety::Good);
    let bad_rooms = layout.indices_with_safety(floor, Safety::Bad);
    let (Some(&good), Some(&bad)) = (rng.choose(&good_rooms), rng.choose(&bad_rooms)) else {
        return ClueData::NEUTRAL;
    };

    let good_form = rng.coin();
    let good_first = rng.coin();
    let (first, second) = if good_first { (good, bad) } else { (bad, good) };
    ClueData::new(ClueFamily::Xor.kind(good_form), floor, first, second, 0)
}

pub fn code_sum_clue(passcode: &Passcode) -> ClueData {
    if passcode.is_empty() {
        return ClueData::NEUTRAL;
    }
    ClueData::new(ClueKind::CodeSum, LOBBY_FLOOR, passcode.digit_sum(), 0, 0)
}

/// `a` is the digit, `b` its 1-based position.
pub fn code_position_clue(passcode: &Passcode, position: usize) -> ClueData {
    match passcode.digit_at(position) {
        Some(digit) => ClueData::new(
            ClueKind::CodePosition,
            LOBBY_FLOOR,
            u32::from(digit),
            position as u32,
            0,
        ),
        None => ClueData::NEUTRAL,
    }
}
