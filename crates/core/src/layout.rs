//! Procedural hotel layout split into room rolls, the TV quota and clue attachment.

pub mod model;

mod generator;
mod quota;
mod rooms;

pub use generator::LayoutGenerator;
pub use model::{HotelLayout, RoomState};
pub use rooms::weighted_pick;

use crate::config::HotelConfig;
use crate::passcode::Passcode;
use crate::progress::ProgressTracker;
use crate::rng::HotelRng;

pub fn generate_layout(
    config: &HotelConfig,
    passcode: &Passcode,
    progress: &mut ProgressTracker,
    rng: &mut HotelRng,
) -> HotelLayout {
    LayoutGenerator::new(config).generate(passcode, progress, rng)
}
