// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the preview window.

use super::Message;
use crate::ui::controls;
use iced::{event, mouse, time, window, Subscription};
use std::time::Duration;

/// Playback clock granularity for the simulated element.
const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Window-level cursor moves, exits and left-button releases.
///
/// The timeline only sees the pointer while it is over the bar; these keep a
/// drag going after the pointer leaves it.
pub fn create_pointer_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::PointerReleased)
        }
        event::Event::Mouse(mouse::Event::CursorMoved { position }) => Some(Message::Controls(
            controls::Message::CursorMoved { x: position.x },
        )),
        event::Event::Mouse(mouse::Event::CursorLeft) => {
            Some(Message::Controls(controls::Message::CursorLeftWindow))
        }
        _ => None,
    })
}

/// Clock ticks while the element is playing.
pub fn create_tick_subscription(playing: bool) -> Subscription<Message> {
    if playing {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

pub fn create_window_subscription() -> Subscription<Message> {
    window::open_events().map(Message::WindowOpened)
}
