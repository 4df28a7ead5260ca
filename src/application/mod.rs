// SPDX-License-Identifier: MPL-2.0
//! Application layer - ports the player core is written against.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The player and presentation layers use application layer ports

pub mod port;
