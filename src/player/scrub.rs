// SPDX-License-Identifier: MPL-2.0
//! Timeline geometry and the scrub gesture state.

use crate::domain::video::Fraction;

/// Scrub gesture state.
///
/// The paused flag captured at scrub start only exists while scrubbing, so it
/// cannot be read after the gesture ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrubState {
    #[default]
    Idle,
    Scrubbing {
        /// Whether the element was paused before the gesture paused it.
        was_paused: bool,
    },
}

impl ScrubState {
    #[must_use]
    pub fn is_scrubbing(self) -> bool {
        matches!(self, Self::Scrubbing { .. })
    }

    /// Paused flag captured at scrub start, if a scrub is in progress.
    #[must_use]
    pub fn was_paused(self) -> Option<bool> {
        match self {
            Self::Idle => None,
            Self::Scrubbing { was_paused } => Some(was_paused),
        }
    }
}

/// Horizontal extent of the timeline in the host's pointer coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineBounds {
    pub left: f32,
    pub width: f32,
}

impl TimelineBounds {
    #[must_use]
    pub fn new(left: f32, width: f32) -> Self {
        Self { left, width }
    }

    /// Fraction for pointer X, clamped to the timeline extent.
    ///
    /// A collapsed timeline (zero or negative width) maps everything to 0.
    #[must_use]
    pub fn fraction_at(&self, x: f32) -> Fraction {
        if self.width.is_nan() || self.width <= 0.0 {
            return Fraction::ZERO;
        }
        Fraction::new(f64::from((x - self.left) / self.width))
    }
}

impl Default for TimelineBounds {
    /// Unit-width timeline, so pointer X reads directly as a fraction.
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

/// One pointer event on the timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    /// Whether the primary button is held during this event.
    pub primary_held: bool,
}

impl PointerSample {
    #[must_use]
    pub fn pressed(x: f32) -> Self {
        Self {
            x,
            primary_held: true,
        }
    }

    #[must_use]
    pub fn released(x: f32) -> Self {
        Self {
            x,
            primary_held: false,
        }
    }
}
