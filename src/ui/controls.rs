// SPDX-License-Identifier: MPL-2.0
//! Player controls UI.
//!
//! Provides the timeline with hover and scrub previews, plus a toolbar with
//! play/pause, volume, time display, speed, captions and view-mode toggles.
//! [`update`] forwards messages to a [`Controller`] and drains its queue, so
//! the next [`view`] already reflects the element's answer.

use std::path::Path;

use iced::widget::image::Handle;
use iced::widget::{
    button, container, mouse_area, progress_bar, responsive, row, slider, text, tooltip, Column,
    Image, Row, Space, Text,
};
use iced::{Alignment, Element, Length, Point, Size};

use crate::application::port::MediaElement;
use crate::config::VOLUME_STEP;
use crate::domain::video::{Fraction, UiMode, VolumeLevel};
use crate::player::{Controller, PlayerState, PointerSample, TimelineBounds};

const SPACING: f32 = 8.0;
const TIMELINE_HEIGHT: f32 = 12.0;
const PREVIEW_WIDTH: f32 = 160.0;
const SCRUB_PREVIEW_WIDTH: f32 = 320.0;
const VOLUME_SLIDER_WIDTH: f32 = 80.0;

/// Messages emitted by player control widgets.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    TogglePlayback,
    /// Volume slider input (0.0 to 1.0).
    SetVolume(f64),
    ToggleMute,
    CycleSpeed,
    ToggleCaptions,
    ToggleMiniPlayer,
    ToggleTheater,
    ToggleFullscreen,

    /// Cursor moved over the timeline. `x` is relative to its left edge.
    TimelineMoved { x: f32, width: f32 },
    /// Primary button pressed on the timeline.
    TimelinePressed,
    /// Primary button released, on the timeline or anywhere in the window.
    TimelineReleased,
    /// Cursor left the timeline.
    TimelineExited,
    /// Cursor moved anywhere in the window. `x` is in window coordinates.
    CursorMoved { x: f32 },
    /// Cursor left the window.
    CursorLeftWindow,
}

/// Last known pointer position relative to the timeline.
///
/// Press and release events carry no coordinates, so they reuse the
/// position of the most recent move. Once a drag leaves the bar only
/// window-level moves arrive; `origin` maps those back onto the timeline.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TimelinePointer {
    x: f32,
    held: bool,
    /// Timeline left edge in window coordinates.
    origin: Option<f32>,
    /// Timeline-relative X still waiting for its window-level move.
    unpaired: Option<f32>,
}

impl TimelinePointer {
    #[must_use]
    pub fn is_held(&self) -> bool {
        self.held
    }
}

/// Applies one control message and handles the notifications it caused.
pub fn update<A: MediaElement>(
    controller: &mut Controller<A>,
    pointer: &mut TimelinePointer,
    message: Message,
) {
    match message {
        Message::TogglePlayback => controller.toggle_playback(),
        Message::SetVolume(value) => controller.set_volume(value),
        Message::ToggleMute => controller.toggle_mute(),
        Message::CycleSpeed => controller.cycle_playback_speed(),
        Message::ToggleCaptions => controller.toggle_captions(),
        Message::ToggleMiniPlayer => controller.toggle_mini_player(),
        Message::ToggleTheater => controller.toggle_theater_mode(),
        Message::ToggleFullscreen => controller.toggle_fullscreen(),
        Message::TimelineMoved { x, width } => {
            controller.set_timeline_bounds(TimelineBounds::new(0.0, width));
            pointer.x = x;
            pointer.unpaired = Some(x);
            controller.pointer_move(PointerSample {
                x,
                primary_held: pointer.held,
            });
        }
        Message::CursorMoved { x: window_x } => {
            // Widget messages for an event are handled before the window-level one
            if let Some(local) = pointer.unpaired.take() {
                pointer.origin = Some(window_x - local);
            }
            match pointer.origin {
                Some(origin) if pointer.held => {
                    pointer.x = window_x - origin;
                    controller.pointer_move(PointerSample::pressed(pointer.x));
                }
                _ => {}
            }
        }
        Message::CursorLeftWindow => {
            // The release may happen where the window cannot see it
            if pointer.held {
                pointer.held = false;
                controller.pointer_move(PointerSample::released(pointer.x));
            }
        }
        Message::TimelinePressed => {
            pointer.held = true;
            controller.pointer_down(PointerSample::pressed(pointer.x));
        }
        Message::TimelineReleased => {
            if pointer.held {
                pointer.held = false;
                controller.pointer_up(PointerSample::released(pointer.x));
            }
        }
        Message::TimelineExited => controller.pointer_leave(),
    }
    controller.pump();
}

/// Renders the controls for the given player state.
pub fn view(state: &PlayerState) -> Element<'_, Message> {
    let play_button = if state.is_paused() {
        control_button("Play", "Play", Message::TogglePlayback, false)
    } else {
        control_button("Pause", "Pause", Message::TogglePlayback, false)
    };

    let volume_label = match state.volume_level() {
        VolumeLevel::Muted => "Muted",
        VolumeLevel::Low => "Vol -",
        VolumeLevel::High => "Vol +",
    };
    let mute_button = control_button(
        volume_label,
        "Mute",
        Message::ToggleMute,
        state.volume_level().is_muted(),
    );

    let volume_slider = slider(0.0..=1.0, state.volume_slider(), Message::SetVolume)
        .step(VOLUME_STEP)
        .width(Length::Fixed(VOLUME_SLIDER_WIDTH));

    let time_display = text(format!(
        "{} / {}",
        state.current_time_text(),
        state.total_time_text()
    ));

    let mode = state.ui_mode();
    let controls: Row<'_, Message> = row![
        play_button,
        mute_button,
        volume_slider,
        time_display,
        Space::new().width(Length::Fill),
        control_button(
            state.playback_speed().label(),
            "Playback speed",
            Message::CycleSpeed,
            false
        ),
        control_button(
            "CC",
            "Captions",
            Message::ToggleCaptions,
            state.captions_visible()
        ),
        control_button(
            "Mini",
            "Mini player",
            Message::ToggleMiniPlayer,
            mode == UiMode::MiniPlayer
        ),
        control_button(
            "Theater",
            "Theater mode",
            Message::ToggleTheater,
            state.is_theater()
        ),
        control_button(
            "Full",
            "Full screen",
            Message::ToggleFullscreen,
            mode == UiMode::Fullscreen
        ),
    ]
    .spacing(SPACING)
    .align_y(Alignment::Center);

    let mut content = Column::new().spacing(SPACING).width(Length::Fill);
    if let Some(path) = state.scrub_thumbnail() {
        content = content.push(thumbnail_at(path, state.preview_fraction(), SCRUB_PREVIEW_WIDTH));
    } else if let Some(path) = state.preview_thumbnail() {
        content = content.push(thumbnail_at(path, state.preview_fraction(), PREVIEW_WIDTH));
    }
    content = content.push(timeline(state.progress_fraction())).push(controls);

    container(content)
        .width(Length::Fill)
        .padding(SPACING)
        .into()
}

fn control_button<'a>(
    label: impl Into<String>,
    tip: &'static str,
    message: Message,
    active: bool,
) -> Element<'a, Message> {
    let base = button(text(label.into())).on_press(message).padding(SPACING / 2.0);
    let styled = if active {
        base.style(button::primary)
    } else {
        base.style(button::secondary)
    };
    tooltip(styled, Text::new(tip), tooltip::Position::Top)
        .gap(4)
        .into()
}

/// Timeline bar. Pointer X is reported relative to the bar together with its
/// current width, so the controller can map it to a fraction.
fn timeline<'a>(progress: Fraction) -> Element<'a, Message> {
    let progress = progress.value() as f32;
    let bar = responsive(move |size: Size| {
        let width = size.width;
        mouse_area(progress_bar(0.0..=1.0, progress))
            .on_move(move |point: Point| Message::TimelineMoved { x: point.x, width })
            .on_press(Message::TimelinePressed)
            .on_release(Message::TimelineReleased)
            .on_exit(Message::TimelineExited)
            .into()
    });

    container(bar)
        .width(Length::Fill)
        .height(Length::Fixed(TIMELINE_HEIGHT))
        .into()
}

/// Thumbnail positioned horizontally at `fraction` of the timeline.
fn thumbnail_at<'a>(path: &Path, fraction: Fraction, width: f32) -> Element<'a, Message> {
    let before = thumbnail_offset_portion(fraction);
    let thumbnail = Image::new(Handle::from_path(path)).width(Length::Fixed(width));

    row![
        Space::new().width(Length::FillPortion(before)),
        thumbnail,
        Space::new().width(Length::FillPortion(102 - before)),
    ]
    .width(Length::Fill)
    .into()
}

/// Fill portion left of the thumbnail, in `1..=101` so neither side collapses.
fn thumbnail_offset_portion(fraction: Fraction) -> u16 {
    (fraction.value() * 100.0).round() as u16 + 1
}
