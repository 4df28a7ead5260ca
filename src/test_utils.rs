// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and other common test helpers.
//!
//! This module re-exports the `approx` crate's assertion macro for float comparison,
//! which properly handles floating-point precision issues that `assert_eq!` cannot.

// Re-export the approx macro for convenient use in tests
pub use approx::assert_abs_diff_eq;
