// SPDX-License-Identifier: MPL-2.0
//! Preview window for generated thumbnails.
//!
//! Mounts the player controls on a [`SimulatedMediaElement`] of the source
//! video's length, so hovering and scrubbing the timeline shows exactly the
//! thumbnails the player would pick. Nothing is decoded.

mod subscription;

use std::cell::RefCell;
use std::time::Instant;

use iced::widget::{column, container, text};
use iced::{window, Element, Length, Subscription, Task};
use tracing::info;

use crate::config::PlayerConfig;
use crate::domain::video::{ThumbnailSet, UiMode};
use crate::infrastructure::SimulatedMediaElement;
use crate::player::Controller;
use crate::ui::controls::{self, TimelinePointer};

const WINDOW_DEFAULT_WIDTH: f32 = 960.0;
const WINDOW_DEFAULT_HEIGHT: f32 = 640.0;
const NORMAL_MAX_WIDTH: f32 = 960.0;
const MINI_PLAYER_MAX_WIDTH: f32 = 400.0;

/// Startup parameters for the preview window.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    pub thumbnails: ThumbnailSet,
    pub duration_secs: f64,
    pub player: PlayerConfig,
}

#[derive(Debug, Clone)]
pub enum Message {
    Controls(controls::Message),
    /// Primary button released somewhere in the window.
    PointerReleased,
    Tick(Instant),
    WindowOpened(window::Id),
}

pub struct App {
    controller: Controller<SimulatedMediaElement>,
    pointer: TimelinePointer,
    window_id: Option<window::Id>,
    /// Whether the OS window is currently fullscreen.
    window_fullscreen: bool,
    last_tick: Option<Instant>,
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 requires Fn for boot; flags are consumed on the single call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || App::new(boot_state.borrow_mut().take().unwrap_or_default());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> Self {
        let mut media = SimulatedMediaElement::new();
        media.load(flags.duration_secs);

        let mut controller = Controller::mount(media, flags.thumbnails);
        controller.apply_player_config(&flags.player);
        controller.pump();
        info!(duration_secs = flags.duration_secs, "Preview window ready");

        Self {
            controller,
            pointer: TimelinePointer::default(),
            window_id: None,
            window_fullscreen: false,
            last_tick: None,
        }
    }

    fn title(&self) -> String {
        format!(
            "Iced Reel - {}",
            self.controller.thumbnails().dir().display()
        )
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_pointer_subscription(),
            subscription::create_tick_subscription(!self.controller.state().is_paused()),
            subscription::create_window_subscription(),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Controls(message) => {
                controls::update(&mut self.controller, &mut self.pointer, message);
            }
            Message::PointerReleased => {
                if self.pointer.is_held() {
                    controls::update(
                        &mut self.controller,
                        &mut self.pointer,
                        controls::Message::TimelineReleased,
                    );
                }
            }
            Message::Tick(now) => {
                let elapsed = self
                    .last_tick
                    .replace(now)
                    .map_or(0.0, |previous| now.duration_since(previous).as_secs_f64());
                self.controller.media_mut().advance(elapsed);
                self.controller.pump();
            }
            Message::WindowOpened(id) => self.window_id = Some(id),
        }

        if self.controller.state().is_paused() {
            self.last_tick = None;
        }
        self.sync_window_mode()
    }

    /// Mirrors the element's fullscreen flag onto the OS window.
    fn sync_window_mode(&mut self) -> Task<Message> {
        let desired = self.controller.state().ui_mode() == UiMode::Fullscreen;
        if self.window_fullscreen == desired {
            return Task::none();
        }
        let Some(window_id) = self.window_id else {
            return Task::none();
        };

        self.window_fullscreen = desired;
        let mode = if desired {
            window::Mode::Fullscreen
        } else {
            window::Mode::Windowed
        };
        window::set_mode(window_id, mode)
    }

    fn view(&self) -> Element<'_, Message> {
        let state = self.controller.state();
        let max_width = match state.ui_mode() {
            UiMode::Normal => NORMAL_MAX_WIDTH,
            UiMode::MiniPlayer => MINI_PLAYER_MAX_WIDTH,
            UiMode::Theater | UiMode::Fullscreen => f32::INFINITY,
        };

        let screen = container(text(if state.is_paused() { "Paused" } else { "Playing" }))
            .center(Length::Fill);

        let player = column![screen, controls::view(state).map(Message::Controls)]
            .width(Length::Fill)
            .max_width(max_width);

        container(player).center_x(Length::Fill).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::MediaElement;

    fn app() -> App {
        App::new(Flags {
            thumbnails: ThumbnailSet::new("previewImgs", "thumbnail", 5),
            duration_secs: 120.0,
            player: PlayerConfig::default(),
        })
    }

    #[test]
    fn new_loads_duration() {
        let app = app();
        assert_eq!(app.controller.state().total_time_text(), "2:00");
        assert!(app.controller.state().is_paused());
    }

    #[test]
    fn autoplay_starts_playback() {
        let app = App::new(Flags {
            duration_secs: 30.0,
            player: PlayerConfig {
                autoplay: true,
                ..PlayerConfig::default()
            },
            ..Flags::default()
        });
        assert!(!app.controller.state().is_paused());
    }

    #[test]
    fn ticks_advance_playback() {
        let mut app = app();
        let _ = app.update(Message::Controls(controls::Message::TogglePlayback));
        let start = Instant::now();
        let _ = app.update(Message::Tick(start));
        let _ = app.update(Message::Tick(start + std::time::Duration::from_secs(2)));
        assert!((app.controller.media().current_time() - 2.0).abs() < 1e-9);
        assert_eq!(app.controller.state().current_time_text(), "0:02");
    }

    #[test]
    fn window_release_ends_scrub() {
        let mut app = app();
        let _ = app.update(Message::Controls(controls::Message::TimelineMoved {
            x: 25.0,
            width: 100.0,
        }));
        let _ = app.update(Message::Controls(controls::Message::TimelinePressed));
        assert!(app.controller.state().is_scrubbing());

        let _ = app.update(Message::PointerReleased);
        assert!(!app.controller.state().is_scrubbing());
        assert!((app.controller.media().current_time() - 30.0).abs() < 1e-9);
    }

    #[test]
    fn window_moves_carry_drag_off_the_timeline() {
        let mut app = app();
        let _ = app.update(Message::Controls(controls::Message::TimelineMoved {
            x: 90.0,
            width: 100.0,
        }));
        let _ = app.update(Message::Controls(controls::Message::CursorMoved { x: 110.0 }));
        let _ = app.update(Message::Controls(controls::Message::TimelinePressed));
        let _ = app.update(Message::Controls(controls::Message::CursorMoved { x: 300.0 }));

        let _ = app.update(Message::PointerReleased);
        assert!(!app.controller.state().is_scrubbing());
        assert!((app.controller.media().current_time() - 120.0).abs() < 1e-9);
    }

    #[test]
    fn fullscreen_without_window_is_deferred() {
        let mut app = app();
        let _ = app.update(Message::Controls(controls::Message::ToggleFullscreen));
        assert_eq!(app.controller.state().ui_mode(), UiMode::Fullscreen);
        assert!(!app.window_fullscreen);
    }

    #[test]
    fn view_renders() {
        let app = app();
        let _element = app.view();
    }
}
