// SPDX-License-Identifier: MPL-2.0
//! Player core: the controller, its derived state and the scrub gesture.
//!
//! ```
//! use iced_reel::domain::video::ThumbnailSet;
//! use iced_reel::infrastructure::SimulatedMediaElement;
//! use iced_reel::player::Controller;
//!
//! let mut player = Controller::mount(SimulatedMediaElement::new(), ThumbnailSet::default());
//! player.media_mut().load(120.0);
//! player.seek_to(0.5);
//! player.pump();
//! assert_eq!(player.state().current_time_text(), "1:00");
//! ```

mod controller;
mod scrub;
mod state;

pub use controller::Controller;
pub use scrub::{PointerSample, ScrubState, TimelineBounds};
pub use state::PlayerState;
