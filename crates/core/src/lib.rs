pub mod audit;
pub mod clue;
pub mod config;
pub mod content;
pub mod events;
pub mod journal;
pub mod keypad;
pub mod layout;
pub mod passcode;
pub mod progress;
pub mod replay;
pub mod rng;
pub mod seed;
pub mod session;
pub mod types;

pub use audit::{AuditError, audit_layout};
pub use clue::{ClueData, ClueKind};
pub use config::{ClueWeights, ConfigError, HotelConfig};
pub use content::RoomDefinition;
pub use events::{SessionEvent, SubscriptionId};
pub use journal::{InputPayload, InputRecord, JournalError, RunJournal};
pub use keypad::{Keypad, KeypadKey, KeypadResponse};
pub use layout::{HotelLayout, RoomState};
pub use passcode::Passcode;
pub use progress::{MAX_PASSCODE_ATTEMPTS, ProgressTracker};
pub use replay::*;
pub use session::{ContentSpawner, GameSession, PasscodeCheck, SceneNavigator, SpawnRequest};
pub use types::*;
