// SPDX-License-Identifier: MPL-2.0
//! User interface widgets.

pub mod controls;
