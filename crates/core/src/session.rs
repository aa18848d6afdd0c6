//! Run-scoped game state: one generated hotel, its passcode and the player's progress.
//!
//! A `GameSession` owns every piece of mutable run state. Restarting discards all
//! of it and regenerates from a fresh seed, so two runs never share state.

mod hash;
mod spawn;

pub use spawn::{ContentSpawner, SceneNavigator, SpawnRequest};

use tracing::{debug, info};

use crate::config::HotelConfig;
use crate::content::pick_defeat_message;
use crate::events::{EventBus, SessionEvent, SubscriptionId};
use crate::layout::{HotelLayout, RoomState, generate_layout};
use crate::passcode::Passcode;
use crate::progress::{MAX_PASSCODE_ATTEMPTS, ProgressTracker};
use crate::rng::HotelRng;
use crate::seed::{FLAVOR_STREAM, mix_seed_stream, resolve_seed};
use crate::types::{RunOutcome, SessionError};

/// Result of entering a full code at the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasscodeCheck {
    Accepted,
    Rejected { failures: u32 },
    /// The attempt that used up the last try.
    Exhausted,
    /// The run is already over; the attempt was ignored.
    Locked,
}

pub struct GameSession {
    config: HotelConfig,
    seed: u64,
    passcode: Passcode,
    layout: HotelLayout,
    progress: ProgressTracker,
    flavor_rng: HotelRng,
    events: EventBus,
    outcome: Option<RunOutcome>,
}

impl GameSession {
    /// Builds the passcode, room grid and clues. A seed of `0` derives one from
    /// the clock; the resolved value is available from [`GameSession::seed`].
    pub fn initialize(config: HotelConfig, seed: u64) -> Self {
        let seed = resolve_seed(seed);
        let (passcode, layout, progress) = generate_run(&config, seed);
        let mut session = Self {
            config,
            seed,
            passcode,
            layout,
            progress,
            flavor_rng: HotelRng::from_seed(mix_seed_stream(seed, FLAVOR_STREAM)),
            events: EventBus::new(),
            outcome: None,
        };
        session.announce_run();
        session
    }

    /// Throws the current run away and generates a new one. Subscribers stay
    /// attached; the event log starts over.
    pub fn restart(&mut self, seed: u64) {
        let seed = resolve_seed(seed);
        let (passcode, layout, progress) = generate_run(&self.config, seed);
        self.seed = seed;
        self.passcode = passcode;
        self.layout = layout;
        self.progress = progress;
        self.flavor_rng = HotelRng::from_seed(mix_seed_stream(seed, FLAVOR_STREAM));
        self.outcome = None;
        self.events.clear_log();
        self.announce_run();
    }

    fn announce_run(&mut self) {
        info!(
            target: "hotel::session",
            seed = self.seed,
            rooms = self.layout.room_count(),
            clues = self.progress.issued_clue_count(),
            "session.started"
        );
        self.events.publish(SessionEvent::RunStarted { seed: self.seed });
    }

    /// Panics when the coordinates lie outside the generated grid.
    pub fn room_state(&self, floor: u32, index: u32) -> &RoomState {
        self.layout.room(floor, index)
    }

    /// Player-facing text for the room's clue. Rooms without one get a flavor line.
    pub fn clue_text(&mut self, floor: u32, index: u32) -> String {
        let clue = self.layout.room(floor, index).clue;
        clue.render(self.passcode.len(), &mut self.flavor_rng)
    }

    pub fn add_candy(&mut self, amount: i32) -> i32 {
        let count = self.progress.add_candy(amount);
        self.events.publish(SessionEvent::CandyChanged { count });
        count
    }

    /// Returns the defeat outcome the first time the count drops below zero.
    pub fn remove_candy(&mut self, amount: i32) -> Option<RunOutcome> {
        let cause = self.progress.remove_candy(amount);
        let count = self.progress.candy();
        self.events.publish(SessionEvent::CandyChanged { count });

        let cause = cause?;
        let roll = self.flavor_rng.index(self.config.defeat_messages.len().max(1));
        let message = pick_defeat_message(&self.config.defeat_messages, roll).to_string();
        self.events.publish(SessionEvent::OutOfCandy { count, message });
        Some(self.finish(RunOutcome::Defeat(cause)))
    }

    /// Counts a wrong passcode; returns the defeat outcome on the attempt that
    /// uses up the last try.
    pub fn add_passcode_failure(&mut self) -> Option<RunOutcome> {
        let cause = self.progress.add_passcode_failure();
        self.events.publish(SessionEvent::PasscodeRejected {
            failures: self.progress.passcode_failures(),
        });

        let cause = cause?;
        self.events.publish(SessionEvent::AttemptsExhausted);
        Some(self.finish(RunOutcome::Defeat(cause)))
    }

    pub fn submit_passcode(&mut self, attempt: &str) -> PasscodeCheck {
        if self.outcome.is_some() || self.progress.attempts_exhausted() {
            return PasscodeCheck::Locked;
        }

        if self.passcode.matches(attempt) {
            self.events.publish(SessionEvent::PasscodeAccepted);
            self.finish(RunOutcome::Victory);
            return PasscodeCheck::Accepted;
        }

        match self.add_passcode_failure() {
            Some(_) => PasscodeCheck::Exhausted,
            None => PasscodeCheck::Rejected { failures: self.progress.passcode_failures() },
        }
    }

    /// Records the first outcome of the run and returns whichever one stands.
    fn finish(&mut self, outcome: RunOutcome) -> RunOutcome {
        let outcome = *self.outcome.get_or_insert(outcome);
        info!(target: "hotel::session", seed = self.seed, ?outcome, "session.finished");
        outcome
    }

    /// Moves the player to `floor` and asks the host to load it. Returns `false`
    /// when the player is already there.
    pub fn go_to_floor(
        &mut self,
        floor: u32,
        navigator: &mut impl SceneNavigator,
    ) -> Result<bool, SessionError> {
        let max_floor = self.max_floor();
        if floor >= max_floor {
            return Err(SessionError::FloorOutOfRange { floor, max_floor });
        }

        let from = self.progress.current_floor();
        if from == floor {
            return Ok(false);
        }

        self.progress.set_current_floor(floor);
        debug!(target: "hotel::session", from, to = floor, "session.floor_changed");
        self.events.publish(SessionEvent::FloorChanged { from, to: floor });
        navigator.load_floor(floor);
        Ok(true)
    }

    /// Hands every room interaction on the current floor to `spawner`. The lobby
    /// spawns nothing.
    pub fn spawn_current_floor<S: ContentSpawner>(&self, spawner: &mut S) -> Vec<S::Handle> {
        let Some(rooms) = self.current_floor_rooms() else {
            return Vec::new();
        };

        let mut handles = Vec::new();
        for room in rooms {
            for request in spawn::room_requests(room) {
                handles.extend(spawner.spawn_content(&request));
            }
        }
        handles
    }

    fn current_floor_rooms(&self) -> Option<&[RoomState]> {
        let floor = self.progress.current_floor();
        self.layout.floor_numbers().contains(&floor).then(|| self.layout.floor_rooms(floor))
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&SessionEvent) + 'static) -> SubscriptionId {
        self.events.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    pub fn event_log(&self) -> &[SessionEvent] {
        self.events.log()
    }

    pub fn current_floor(&self) -> u32 {
        self.progress.current_floor()
    }

    pub fn max_floor(&self) -> u32 {
        self.config.max_floor()
    }

    pub fn candy_count(&self) -> i32 {
        self.progress.candy()
    }

    pub fn failure_count(&self) -> u32 {
        self.progress.passcode_failures()
    }

    pub fn attempts_left(&self) -> u32 {
        MAX_PASSCODE_ATTEMPTS.saturating_sub(self.progress.passcode_failures())
    }

    pub fn passcode(&self) -> &Passcode {
        &self.passcode
    }

    pub fn outcome(&self) -> Option<RunOutcome> {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &HotelConfig {
        &self.config
    }

    pub fn layout(&self) -> &HotelLayout {
        &self.layout
    }

    pub fn progress(&self) -> &ProgressTracker {
        &self.progress
    }
}

/// One uninterrupted sequence of draws: passcode first, then the layout.
fn generate_run(config: &HotelConfig, seed: u64) -> (Passcode, HotelLayout, ProgressTracker) {
    let mut rng = HotelRng::from_seed(seed);
    let passcode = Passcode::generate(config.passcode_length, &mut rng);
    let mut progress = ProgressTracker::new();
    let layout = generate_layout(config, &passcode, &mut progress, &mut rng);
    (passcode, layout, progress)
}
