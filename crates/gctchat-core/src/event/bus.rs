//! Broadcast event bus for distributing `ShellEvent` to view subscribers.
//!
//! Built on `tokio::sync::broadcast`. `publish` is synchronous, so the shell
//! can notify from inside its plain (non-async) operations. Publishing with no
//! active subscribers is a no-op.

use gctchat_types::event::ShellEvent;
use tokio::sync::broadcast;

/// Default channel capacity; a view that falls further behind sees `Lagged`.
pub const DEFAULT_CAPACITY: usize = 256;

/// Multi-consumer event bus for shell state changes.
///
/// Cloning the bus clones the sender, allowing multiple producers and
/// consumers.
pub struct EventBus {
    sender: broadcast::Sender<ShellEvent>,
}

impl EventBus {
    /// Create a new event bus with the given channel capacity.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Create a new subscriber that will receive all future events.
    pub fn subscribe(&self) -> broadcast::Receiver<ShellEvent> {
        self.sender.subscribe()
    }

    /// Publish an event to all current subscribers.
    pub fn publish(&self, event: ShellEvent) {
        let _ = self.sender.send(event);
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("receiver_count", &self.sender.receiver_count())
            .finish()
    }
}
