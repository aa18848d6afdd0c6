//! Narrow seams to the host engine: content spawning and scene loading.
//! The session decides what each room holds and how much; the host owns
//! prefabs, placement and scene lifetimes.

use crate::clue::ClueData;
use crate::content::RoomDefinition;
use crate::layout::RoomState;
use crate::rng::HotelRng;
use crate::types::InteractionType;

/// One interaction of one room, ready to be instantiated by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnRequest<'a> {
    pub floor: u32,
    pub index: u32,
    pub definition: &'a RoomDefinition,
    pub interaction: InteractionType,
    pub amount: u32,
    pub prefab_seed: u64,
    pub spawn_seed: u64,
    /// Set only for clue televisions.
    pub clue: Option<&'a ClueData>,
}

impl SpawnRequest<'_> {
    /// Deterministic ordering of `slot_count` spawn slots for this request,
    /// derived from the room's spawn seed.
    pub fn shuffled_slots(&self, slot_count: usize) -> Vec<usize> {
        let mut slots: Vec<usize> = (0..slot_count).collect();
        HotelRng::from_seed(self.spawn_seed).shuffle(&mut slots);
        slots
    }
}

pub trait ContentSpawner {
    type Handle;

    fn spawn_content(&mut self, request: &SpawnRequest<'_>) -> Vec<Self::Handle>;
}

pub trait SceneNavigator {
    /// Called after the session has moved to `floor`; `0` is the lobby.
    fn load_floor(&mut self, floor: u32);
}

impl SceneNavigator for () {
    fn load_floor(&mut self, _floor: u32) {}
}

/// Requests for every interaction of `room`. Clue televisions are withheld from
/// bad rooms.
pub(crate) fn room_requests(room: &RoomState) -> Vec<SpawnRequest<'_>> {
    let Some(definition) = room.definition.as_ref() else {
        return Vec::new();
    };

    definition
        .interactions
        .iter()
        .filter(|interaction| {
            interaction.kind != InteractionType::TelevisionClue || room.is_good()
        })
        .map(|interaction| SpawnRequest {
            floor: room.floor,
            index: room.index,
            definition,
            interaction: interaction.kind,
            amount: interaction.amount,
            prefab_seed: room.prefab_seed,
            spawn_seed: room.spawn_seed,
            clue: (interaction.kind == InteractionType::TelevisionClue).then_some(&room.clue),
        })
        .collect()
}
