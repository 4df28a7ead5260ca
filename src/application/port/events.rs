// SPDX-License-Identifier: MPL-2.0
//! Media element notifications and listener registration.
//!
//! Adapters embed an [`EventTarget`] and call [`EventTarget::dispatch`] whenever
//! their state changes. Subscribers receive events on a queue they own and get
//! back a [`Listener`] guard; dropping the guard deregisters it, so a
//! subscriber can never outlive its registration.

use std::sync::{Arc, Mutex, PoisonError, Weak};

use tokio::sync::mpsc::UnboundedSender;

/// State-change notifications emitted by a media element.
///
/// Events carry no payload: handlers read the current values back from the
/// element, the same way DOM media events work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaEvent {
    Play,
    Pause,
    LoadedData,
    TimeUpdate,
    VolumeChange,
    FullscreenChange,
    EnterPictureInPicture,
    LeavePictureInPicture,
}

impl MediaEvent {
    /// Every notification kind, in registration order.
    pub const ALL: [MediaEvent; 8] = [
        MediaEvent::Play,
        MediaEvent::Pause,
        MediaEvent::LoadedData,
        MediaEvent::TimeUpdate,
        MediaEvent::VolumeChange,
        MediaEvent::FullscreenChange,
        MediaEvent::EnterPictureInPicture,
        MediaEvent::LeavePictureInPicture,
    ];

    /// DOM event name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            MediaEvent::Play => "play",
            MediaEvent::Pause => "pause",
            MediaEvent::LoadedData => "loadeddata",
            MediaEvent::TimeUpdate => "timeupdate",
            MediaEvent::VolumeChange => "volumechange",
            MediaEvent::FullscreenChange => "fullscreenchange",
            MediaEvent::EnterPictureInPicture => "enterpictureinpicture",
            MediaEvent::LeavePictureInPicture => "leavepictureinpicture",
        }
    }
}

/// Queue a listener's events are delivered to.
pub type EventSink = UnboundedSender<MediaEvent>;

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    entries: Vec<Entry>,
}

#[derive(Debug)]
struct Entry {
    id: u64,
    event: MediaEvent,
    sink: EventSink,
}

/// Listener registry an adapter dispatches its notifications through.
#[derive(Debug, Default)]
pub struct EventTarget {
    registry: Arc<Mutex<Registry>>,
}

impl EventTarget {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `sink` for `event`. The registration lives as long as the
    /// returned guard.
    #[must_use = "dropping the listener deregisters it immediately"]
    pub fn add_listener(&self, event: MediaEvent, sink: EventSink) -> Listener {
        let mut registry = self.registry.lock().unwrap_or_else(PoisonError::into_inner);
        let id = registry.next_id;
        registry.next_id += 1;
        registry.entries.push(Entry { id, event, sink });

        Listener {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Delivers `event` to every listener registered for it.
    ///
    /// Returns the number of listeners notified. Listeners whose queue was
    /// closed are pruned.
    pub fn dispatch(&self, event: MediaEvent) -> usize {
        let mut registry = self.registry.lock().unwrap_or_else(PoisonError::into_inner);
        let mut delivered = 0;
        registry.entries.retain(|entry| {
            if entry.event != event {
                return true;
            }
            if entry.sink.send(event).is_ok() {
                delivered += 1;
                true
            } else {
                false
            }
        });
        delivered
    }

    /// Number of live registrations across all events.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .len()
    }
}

/// Registration guard returned by [`EventTarget::add_listener`].
///
/// Deregisters on drop, including during unwinding.
#[derive(Debug)]
pub struct Listener {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Drop for Listener {
    fn drop(&mut self) {
        // The element may already be gone, in which case there is nothing to remove
        if let Some(registry) = self.registry.upgrade() {
            registry
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .entries
                .retain(|entry| entry.id != self.id);
        }
    }
}
