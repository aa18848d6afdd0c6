//! Session-scoped notifications for presentation layers.

use serde::{Deserialize, Serialize};
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    pub struct SubscriptionId;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    RunStarted { seed: u64 },
    FloorChanged { from: u32, to: u32 },
    CandyChanged { count: i32 },
    OutOfCandy { count: i32, message: String },
    PasscodeRejected { failures: u32 },
    AttemptsExhausted,
    PasscodeAccepted,
}

type Listener = Box<dyn FnMut(&SessionEvent)>;

/// Fans events out to subscribers and keeps an ordered log of everything published.
#[derive(Default)]
pub struct EventBus {
    listeners: SlotMap<SubscriptionId, Listener>,
    log: Vec<SessionEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&SessionEvent) + 'static) -> SubscriptionId {
        self.listeners.insert(Box::new(listener))
    }

    /// Returns `false` for ids that were never issued or already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.remove(id).is_some()
    }

    pub fn publish(&mut self, event: SessionEvent) {
        for listener in self.listeners.values_mut() {
            listener(&event);
        }
        self.log.push(event);
    }

    pub fn log(&self) -> &[SessionEvent] {
        &self.log
    }

    pub fn clear_log(&mut self) {
        self.log.clear();
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}
