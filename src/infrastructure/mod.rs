// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`simulated`]: In-memory media element (implements [`MediaElement`])
//!
//! [`MediaElement`]: crate::application::port::MediaElement

pub mod simulated;

// Re-export main types for convenience
pub use simulated::{HostCapabilities, SimulatedMediaElement};
