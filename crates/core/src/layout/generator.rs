//! Layout generation orchestration: room rolls, TV-quota fixup, clue attachment.

use tracing::debug;

use crate::clue::{ClueContext, ClueData, synthesize};
use crate::config::HotelConfig;
use crate::passcode::Passcode;
use crate::progress::ProgressTracker;
use crate::rng::HotelRng;

use super::model::HotelLayout;
use super::quota::enforce_tv_quota;
use super::rooms::roll_rooms;

pub struct LayoutGenerator<'a> {
    config: &'a HotelConfig,
}

impl<'a> LayoutGenerator<'a> {
    pub fn new(config: &'a HotelConfig) -> Self {
        Self { config }
    }

    pub fn generate(
        &self,
        passcode: &Passcode,
        progress: &mut ProgressTracker,
        rng: &mut HotelRng,
    ) -> HotelLayout {
        let mut layout = roll_rooms(self.config, rng);
        let replacements =
            enforce_tv_quota(&mut layout, &self.config.good_pool, passcode.len(), rng);
        let (clued, rejected) = self.attach_clues(&mut layout, passcode, progress, rng);

        debug!(
            target: "hotel::layout",
            rooms = layout.room_count(),
            good_rooms = layout.good_room_count(),
            tv_rooms = layout.good_tv_room_count(),
            replacements,
            clued,
            rejected,
            "layout.generated"
        );
        layout
    }

    /// Visits every room in shuffled order and gives each TV-clue room one clue.
    /// Returns `(attached, rejected_as_duplicate)`.
    fn attach_clues(
        &self,
        layout: &mut HotelLayout,
        passcode: &Passcode,
        progress: &mut ProgressTracker,
        rng: &mut HotelRng,
    ) -> (usize, usize) {
        let mut coords: Vec<(u32, u32)> =
            layout.rooms().map(|room| (room.floor, room.index)).collect();
        rng.shuffle(&mut coords);

        let mut attached = 0;
        let mut rejected = 0;
        for (floor, index) in coords {
            if !layout.room(floor, index).has_tv_clue_definition() {
                continue;
            }

            let clue = {
                let context =
                    ClueContext { layout: &*layout, passcode, weights: &self.config.clue_weights };
                synthesize(&context, progress, rng)
            };

            let accepted = progress.try_register_clue(&clue);
            let room = layout.room_mut(floor, index);
            if accepted {
                room.clue = clue;
                if !clue.is_neutral() {
                    attached += 1;
                }
            } else {
                room.clue = ClueData::NEUTRAL;
                rejected += 1;
            }
        }
        (attached, rejected)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::clue::ClueKind;

    fn generate(config: &HotelConfig, seed: u64) -> (Passcode, HotelLayout, ProgressTracker) {
        let mut rng = HotelRng::from_seed(seed);
        let passcode = Passcode::generate(config.passcode_length, &mut rng);
        let mut progress = ProgressTracker::new();
        let layout = LayoutGenerator::new(config).generate(&passcode, &mut progress, &mut rng);
        (passcode, layout, progress)
    }

    #[test]
    fn only_tv_clue_rooms_carry_clues() {
        let config = HotelConfig::default();
        let (_, layout, _) = generate(&config, 21);
        for room in layout.rooms() {
            if room.has_clue() {
                assert!(room.has_tv_clue_definition(), "room {} has a stray clue", room.label());
            }
        }
    }

    #[test]
    fn every_passcode_digit_is_revealed_when_enough_tv_rooms_exist() {
        let config = HotelConfig { good_room_ratio: 1.0, ..HotelConfig::default() };
        let (passcode, layout, progress) = generate(&config, 22);

        let mut positions: Vec<(u32, u32)> = layout
            .rooms()
            .filter(|room| room.clue.kind == ClueKind::CodePosition)
            .map(|room| (room.clue.b, room.clue.a))
            .collect();
        positions.sort_unstable();

        let expected: Vec<(u32, u32)> = passcode
            .digits()
            .iter()
            .enumerate()
            .map(|(slot, &digit)| (slot as u32 + 1, u32::from(digit)))
            .collect();
        assert_eq!(positions, expected);
        assert_eq!(progress.code_positions_issued(), passcode.len());
    }

    #[test]
    fn attached_signatures_are_unique() {
        let config = HotelConfig { rooms_per_floor: 12, total_floors: 5, ..HotelConfig::default() };
        let (_, layout, _) = generate(&config, 23);
        let clues: Vec<_> =
            layout.rooms().filter(|room| room.has_clue()).map(|room| room.clue.signature()).collect();
        let unique: BTreeSet<_> = clues.iter().copied().collect();
        assert_eq!(unique.len(), clues.len());
    }

    #[test]
    fn degenerate_config_generates_an_empty_hotel() {
        let config = HotelConfig { total_floors: 1, ..HotelConfig::default() };
        let (_, layout, progress) = generate(&config, 24);
        assert!(!layout.has_rooms());
        assert_eq!(progress.code_positions_issued(), 0);
    }
}
