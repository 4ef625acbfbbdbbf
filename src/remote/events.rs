//! Event bus for remote module lifecycle events
//!
//! Broadcasts `Imported` / `FailedToImport` events to every subscriber. This
//! is the default [`EventSink`]; hosts that forward events to telemetry can
//! implement the trait directly instead.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::debug;

use crate::remote::traits::{EventSink, RemoteEventDetails, RemoteEventType};
use crate::utils::with_default;

/// Default number of events buffered per subscriber
pub const DEFAULT_EVENT_CAPACITY: usize = 64;

/// One emitted lifecycle event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteEvent {
    pub event_type: RemoteEventType,
    pub details: RemoteEventDetails,
}

/// Broadcast-backed event sink
pub struct EventBus {
    sender: broadcast::Sender<RemoteEvent>,
}

impl EventBus {
    /// Create a new event bus buffering up to `capacity` events per subscriber
    pub fn new(capacity: usize) -> Self {
        // broadcast::channel rejects a zero capacity
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Subscribe to all events emitted from now on
    pub fn subscribe(&self) -> broadcast::Receiver<RemoteEvent> {
        self.sender.subscribe()
    }

    /// Number of live subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_CAPACITY)
    }
}

impl EventSink for EventBus {
    fn emit(&self, event_type: RemoteEventType, details: &RemoteEventDetails) {
        debug!("Publishing {} event for {}", event_type, details.detail);

        let event = RemoteEvent {
            event_type,
            details: details.clone(),
        };

        // Nobody listening is not a failure
        with_default(
            || self.sender.send(event).map(|_| ()),
            (),
            "No subscribers for remote event",
        );
    }
}
