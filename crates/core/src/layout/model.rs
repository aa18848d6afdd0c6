//! Public data models for the generated room grid.

use std::ops::Range;

use crate::clue::{ClueData, room_label};
use crate::content::RoomDefinition;
use crate::types::Safety;

#[derive(Clone, Debug, PartialEq)]
pub struct RoomState {
    pub floor: u32,
    pub index: u32,
    /// `None` when the matching pool was empty; such rooms spawn no content.
    pub definition: Option<RoomDefinition>,
    pub safety: Safety,
    pub clue: ClueData,
    pub prefab_seed: u64,
    pub spawn_seed: u64,
}

impl RoomState {
    pub fn is_good(&self) -> bool {
        self.safety.is_good()
    }

    pub fn has_clue(&self) -> bool {
        !self.clue.is_neutral()
    }

    pub fn has_passcode_clue(&self) -> bool {
        self.clue.kind.reveals_passcode()
    }

    pub fn has_tv_clue_definition(&self) -> bool {
        self.definition.as_ref().is_some_and(RoomDefinition::has_tv_clue)
    }

    pub fn label(&self) -> String {
        room_label(self.floor, self.index)
    }
}

/// Every hallway floor's rooms. Floor 0 is the lobby and holds none.
#[derive(Clone, Debug, PartialEq)]
pub struct HotelLayout {
    max_floor: u32,
    rooms_per_floor: u32,
    floors: Vec<Vec<RoomState>>,
}

impl HotelLayout {
    pub(crate) fn new(max_floor: u32, rooms_per_floor: u32, floors: Vec<Vec<RoomState>>) -> Self {
        debug_assert!(floors.iter().all(|rooms| rooms.len() == rooms_per_floor as usize));
        Self { max_floor, rooms_per_floor, floors }
    }

    pub fn max_floor(&self) -> u32 {
        self.max_floor
    }

    pub fn rooms_per_floor(&self) -> u32 {
        self.rooms_per_floor
    }

    /// Floors that hold rooms.
    pub fn floor_numbers(&self) -> Range<u32> {
        1..(self.floors.len() as u32 + 1)
    }

    pub fn has_rooms(&self) -> bool {
        self.room_count() > 0
    }

    pub fn room_count(&self) -> usize {
        self.floors.iter().map(Vec::len).sum()
    }

    pub fn rooms(&self) -> impl Iterator<Item = &RoomState> {
        self.floors.iter().flatten()
    }

    pub fn try_room(&self, floor: u32, index: u32) -> Option<&RoomState> {
        let slot = (floor as usize).checked_sub(1)?;
        self.floors.get(slot)?.get(index as usize)
    }

    /// Panics when `floor`/`index` lie outside the grid; callers own that bound.
    pub fn room(&self, floor: u32, index: u32) -> &RoomState {
        match self.try_room(floor, index) {
            Some(room) => room,
            None => panic!(
                "room {floor}/{index} is outside the hotel ({} floors of {} rooms)",
                self.floors.len(),
                self.rooms_per_floor
            ),
        }
    }

    pub(crate) fn room_mut(&mut self, floor: u32, index: u32) -> &mut RoomState {
        let rooms_per_floor = self.rooms_per_floor;
        let floor_count = self.floors.len();
        match (floor as usize).checked_sub(1).and_then(|slot| self.floors.get_mut(slot)) {
            Some(rooms) if (index as usize) < rooms.len() => &mut rooms[index as usize],
            _ => panic!(
                "room {floor}/{index} is outside the hotel ({floor_count} floors of {rooms_per_floor} rooms)"
            ),
        }
    }

    /// Panics when `floor` holds no rooms.
    pub fn floor_rooms(&self, floor: u32) -> &[RoomState] {
        match (floor as usize).checked_sub(1).and_then(|slot| self.floors.get(slot)) {
            Some(rooms) => rooms,
            None => panic!("floor {floor} holds no rooms"),
        }
    }

    pub fn indices_with_safety(&self, floor: u32, safety: Safety) -> Vec<u32> {
        self.floor_rooms(floor)
            .iter()
            .filter(|room| room.safety == safety)
            .map(|room| room.index)
            .collect()
    }

    pub fn good_room_count(&self) -> usize {
        self.rooms().filter(|room| room.is_good()).count()
    }

    pub fn good_tv_room_count(&self) -> usize {
        self.rooms().filter(|room| room.is_good() && room.has_tv_clue_definition()).count()
    }

    /// Stable byte encoding used for hashing and determinism checks.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend(self.max_floor.to_le_bytes());
        bytes.extend(self.rooms_per_floor.to_le_bytes());
        for room in self.rooms() {
            bytes.extend(room.floor.to_le_bytes());
            bytes.extend(room.index.to_le_bytes());
            bytes.push(u8::from(room.is_good()));
            match &room.definition {
                Some(definition) => {
                    bytes.extend((definition.id.len() as u32).to_le_bytes());
                    bytes.extend(definition.id.as_bytes());
                }
                None => bytes.extend(u32::MAX.to_le_bytes()),
            }
            bytes.push(room.clue.kind as u8);
            for value in [room.clue.floor, room.clue.a, room.clue.b, room.clue.c] {
                bytes.extend(value.to_le_bytes());
            }
            bytes.extend(room.prefab_seed.to_le_bytes());
            bytes.extend(room.spawn_seed.to_le_bytes());
        }
        bytes
    }
}
