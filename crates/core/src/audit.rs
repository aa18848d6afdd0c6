//! Post-generation checks of the guarantees every generated hotel must hold.
//! Used by the integration tests and the fuzz sweep in `hotel_tools`.

use std::collections::BTreeSet;

use crate::clue::ClueKind;
use crate::config::HotelConfig;
use crate::content::RoomDefinition;
use crate::layout::HotelLayout;
use crate::passcode::Passcode;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuditError {
    #[error("expected {expected} rooms, found {found}")]
    RoomCount { expected: usize, found: usize },
    #[error("room at slot {floor}/{index} reports coordinates {reported_floor}/{reported_index}")]
    Misplaced { floor: u32, index: u32, reported_floor: u32, reported_index: u32 },
    #[error("only {found} good rooms carry a clue television, need {required}")]
    TvQuota { required: usize, found: usize },
    #[error("room {floor}/{index} carries a clue without a clue television")]
    StrayClue { floor: u32, index: u32 },
    #[error("clue {kind:?} on floor {floor} was issued twice")]
    DuplicateClue { kind: ClueKind, floor: u32 },
    #[error("passcode positions {found:?} issued, expected 1..={expected}")]
    PositionGap { expected: usize, found: Vec<u32> },
    #[error("position {position} reveals {revealed}, passcode has {actual:?}")]
    WrongDigit { position: u32, revealed: u32, actual: Option<u8> },
}

pub fn audit_layout(
    config: &HotelConfig,
    passcode: &Passcode,
    layout: &HotelLayout,
) -> Result<(), AuditError> {
    check_grid(config, layout)?;
    check_tv_quota(config, passcode, layout)?;
    check_clues(passcode, layout)
}

fn check_grid(config: &HotelConfig, layout: &HotelLayout) -> Result<(), AuditError> {
    let floors = config.max_floor().saturating_sub(1) as usize;
    let expected =
        if config.rooms_per_floor == 0 { 0 } else { floors * config.rooms_per_floor as usize };
    if layout.room_count() != expected {
        return Err(AuditError::RoomCount { expected, found: layout.room_count() });
    }

    for floor in layout.floor_numbers() {
        for (slot, room) in layout.floor_rooms(floor).iter().enumerate() {
            let index = slot as u32;
            if room.floor != floor || room.index != index {
                return Err(AuditError::Misplaced {
                    floor,
                    index,
                    reported_floor: room.floor,
                    reported_index: room.index,
                });
            }
        }
    }
    Ok(())
}

fn check_tv_quota(
    config: &HotelConfig,
    passcode: &Passcode,
    layout: &HotelLayout,
) -> Result<(), AuditError> {
    if !config.good_pool.iter().any(RoomDefinition::has_tv_clue) {
        return Ok(());
    }
    let required = passcode.len().min(layout.good_room_count());
    let found = layout.good_tv_room_count();
    if found < required {
        return Err(AuditError::TvQuota { required, found });
    }
    Ok(())
}

fn check_clues(passcode: &Passcode, layout: &HotelLayout) -> Result<(), AuditError> {
    let mut seen = BTreeSet::new();
    let mut positions = Vec::new();
    let mut tv_rooms = 0;

    for room in layout.rooms() {
        if room.has_tv_clue_definition() {
            tv_rooms += 1;
        }
        if !room.has_clue() {
            continue;
        }
        if !room.has_tv_clue_definition() {
            return Err(AuditError::StrayClue { floor: room.floor, index: room.index });
        }
        if !seen.insert(room.clue.signature()) {
            return Err(AuditError::DuplicateClue { kind: room.clue.kind, floor: room.clue.floor });
        }
        if room.clue.kind == ClueKind::CodePosition {
            positions.push((room.clue.b, room.clue.a));
        }
    }

    positions.sort_unstable();
    let expected = passcode.len().min(tv_rooms);
    let issued: Vec<u32> = positions.iter().map(|&(position, _)| position).collect();
    if !issued.iter().copied().eq(1..=expected as u32) {
        return Err(AuditError::PositionGap { expected, found: issued });
    }

    for (position, revealed) in positions {
        let actual = passcode.digit_at(position as usize);
        if actual.map(u32::from) != Some(revealed) {
            return Err(AuditError::WrongDigit { position, revealed, actual });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::generate_layout;
    use crate::progress::ProgressTracker;
    use crate::rng::HotelRng;

    fn generated(config: &HotelConfig, seed: u64) -> (Passcode, HotelLayout) {
        let mut rng = HotelRng::from_seed(seed);
        let passcode = Passcode::generate(config.passcode_length, &mut rng);
        let layout = generate_layout(config, &passcode, &mut ProgressTracker::new(), &mut rng);
        (passcode, layout)
    }

    #[test]
    fn generated_layouts_pass() {
        let config = HotelConfig::default();
        for seed in 1..20 {
            let (passcode, layout) = generated(&config, seed);
            assert_eq!(audit_layout(&config, &passcode, &layout), Ok(()));
        }
    }

    #[test]
    fn a_different_passcode_is_caught() {
        let config = HotelConfig { good_room_ratio: 1.0, ..HotelConfig::default() };
        let (passcode, layout) = generated(&config, 3);
        let shifted: Vec<u8> = passcode.digits().iter().map(|digit| (digit + 1) % 10).collect();
        let other = Passcode::from_digits(&shifted).expect("valid digits");
        assert!(matches!(
            audit_layout(&config, &other, &layout),
            Err(AuditError::WrongDigit { position: 1, .. })
        ));
    }

    #[test]
    fn a_config_mismatch_is_caught_as_a_room_count_error() {
        let config = HotelConfig::default();
        let (passcode, layout) = generated(&config, 4);
        let bigger = HotelConfig { rooms_per_floor: 10, ..HotelConfig::default() };
        assert_eq!(
            audit_layout(&bigger, &passcode, &layout),
            Err(AuditError::RoomCount { expected: 20, found: 12 })
        );
    }
}
