// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Cross-component signaling for the booking portal.
//!
//! The source of these signals used to be ambient window-level events; here
//! they flow through an explicit publish/subscribe channel owned by the
//! portal. Events are informational facts: the session and the availability
//! snapshot remain the source of truth, and handlers re-query them rather
//! than acting on event payloads alone.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::debug;

/// Maximum number of events to buffer in the broadcast channel.
/// If subscribers cannot keep up, older events will be dropped.
const EVENT_BUFFER_SIZE: usize = 100;

/// Portal-level event types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PortalEvent {
    /// Someone asked for a fresh availability snapshot.
    RefreshRequested,
    /// A booking was cancelled; the grid for its date may have opened up.
    BookingCancelled {
        /// The cancelled booking's identifier.
        booking_id: String,
    },
    /// A booking was created for this session.
    BookingCreated {
        /// The new booking's identifier.
        booking_id: String,
    },
    /// Payment completed for this session's booking.
    PaymentCompleted {
        /// The paid booking's identifier.
        booking_id: String,
    },
}

/// Broadcaster for portal events.
///
/// This is a lightweight wrapper around `tokio::sync::broadcast` that lets
/// any number of components receive refresh and lifecycle notifications.
#[derive(Debug, Clone)]
pub struct PortalEventBus {
    /// The broadcast channel sender.
    tx: broadcast::Sender<PortalEvent>,
}

impl PortalEventBus {
    /// Creates a new event bus.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(EVENT_BUFFER_SIZE);
        Self { tx }
    }

    /// Broadcasts an event to all subscribers.
    ///
    /// If no subscribers are connected, the event is silently dropped.
    /// This is non-blocking and never waits for receivers.
    pub fn broadcast(&self, event: &PortalEvent) {
        match self.tx.send(event.clone()) {
            Ok(count) => {
                debug!(?event, receivers = count, "Broadcast portal event");
            }
            Err(_) => {
                // No receivers, which is fine
                debug!(?event, "No receivers for portal event");
            }
        }
    }

    /// Subscribes to the event stream.
    ///
    /// Returns a receiver for all future events. Events sent before
    /// subscription are not received.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<PortalEvent> {
        self.tx.subscribe()
    }
}

impl Default for PortalEventBus {
    fn default() -> Self {
        Self::new()
    }
}
