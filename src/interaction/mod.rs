//! Click messages flowing from a chart surface to the view controller.
//!
//! Surfaces never call back into the controller directly. A click is turned
//! into a [`MapEvent`] and sent through an [`EventSink`]; the controller owns
//! the receiving half and runs every message through one transition function.

use std::sync::mpsc::{self, Receiver, Sender};

use serde::{Deserialize, Serialize};

/// Click input consumed by the view controller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MapEvent {
    /// A rendered feature (province, city, ...) was clicked.
    FeatureClicked { name: String },
    /// Empty canvas area was clicked.
    BackgroundClicked,
}

impl MapEvent {
    #[must_use]
    pub fn feature(name: impl Into<String>) -> Self {
        Self::FeatureClicked { name: name.into() }
    }

    #[must_use]
    pub fn channel(&self) -> EventChannel {
        match self {
            Self::FeatureClicked { .. } => EventChannel::Feature,
            Self::BackgroundClicked => EventChannel::Background,
        }
    }
}

/// Subscription channel exposed by a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventChannel {
    Feature,
    Background,
}

/// Sending half of the controller's click queue.
#[derive(Debug, Clone)]
pub struct EventSink {
    channel: EventChannel,
    sender: Sender<MapEvent>,
}

impl EventSink {
    #[must_use]
    pub fn channel(&self) -> EventChannel {
        self.channel
    }

    /// Delivers `event` if it belongs to this sink's channel.
    ///
    /// Returns `false` when the event targets another channel or the
    /// receiving side is gone.
    pub fn deliver(&self, event: MapEvent) -> bool {
        if event.channel() != self.channel {
            return false;
        }
        self.sender.send(event).is_ok()
    }
}

/// Receiving half plus a factory for per-channel sinks.
#[derive(Debug)]
pub struct EventQueue {
    sender: Sender<MapEvent>,
    receiver: Receiver<MapEvent>,
}

impl Default for EventQueue {
    fn default() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }
}

impl EventQueue {
    #[must_use]
    pub fn sink(&self, channel: EventChannel) -> EventSink {
        EventSink {
            channel,
            sender: self.sender.clone(),
        }
    }

    /// Takes the oldest queued message.
    pub fn pop(&self) -> Option<MapEvent> {
        self.receiver.try_recv().ok()
    }

    /// Takes every queued message in arrival order.
    pub fn drain(&self) -> Vec<MapEvent> {
        self.receiver.try_iter().collect()
    }
}
