// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//!
//! # Available Ports
//!
//! - [`media_element`]: Host media element driven by the player controller
//! - [`events`]: Notifications and listener registration shared by all adapters
//!
//! # Design Notes
//!
//! - Traits use domain and port types only (no iced handles, no `FFmpeg` types)
//! - Notifications are delivered on a queue the subscriber owns
//! - No `async fn`; callers decide how to drain their queue

pub mod events;
pub mod media_element;

// Re-export main types for convenience
pub use events::{EventSink, EventTarget, Listener, MediaEvent};
pub use media_element::{CaptionMode, HostRejection, MediaElement};
