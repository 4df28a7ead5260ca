// SPDX-License-Identifier: MPL-2.0
//! End-to-end player scenarios against the simulated media element.
//!
//! Each test mounts a controller, drives it the way the controls view would,
//! and checks the mirrored state after the element's notifications are handled.

use approx::assert_abs_diff_eq;
use iced_reel::application::port::{CaptionMode, MediaElement, MediaEvent};
use iced_reel::domain::video::{format_duration, Fraction, ThumbnailSet, UiMode, VolumeLevel};
use iced_reel::infrastructure::{HostCapabilities, SimulatedMediaElement};
use iced_reel::player::{Controller, PointerSample, ScrubState, TimelineBounds};
use std::path::PathBuf;

fn thumbnails() -> ThumbnailSet {
    ThumbnailSet::new("previewImgs", "thumbnail", 5)
}

fn player(duration: f64) -> Controller<SimulatedMediaElement> {
    let mut controller = Controller::mount(SimulatedMediaElement::new(), thumbnails());
    controller.media_mut().load(duration);
    controller.pump();
    controller
}

#[test]
fn seek_to_half_of_two_minutes() {
    let mut player = player(120.0);
    player.seek_to(0.5);
    player.pump();

    assert_abs_diff_eq!(player.media().current_time(), 60.0);
    assert_eq!(player.state().current_time_text(), "1:00");
    assert_eq!(player.state().total_time_text(), "2:00");
}

#[test]
fn seek_then_time_update_matches_fraction() {
    let mut player = player(97.0);
    for fraction in [0.0, 0.13, 0.5, 0.999, 1.0] {
        player.seek_to(fraction);
        player.pump();
        assert_abs_diff_eq!(
            player.state().progress_fraction().value(),
            fraction,
            epsilon = 1e-9
        );
    }
}

#[test]
fn eight_speed_cycles_return_to_start() {
    let mut player = player(60.0);
    player.media_mut().set_playback_rate(0.25);
    player.cycle_playback_speed();
    for _ in 0..7 {
        player.cycle_playback_speed();
    }
    assert_abs_diff_eq!(player.state().playback_speed().value(), 0.25);
}

#[test]
fn volume_bucket_boundaries() {
    let mut player = player(60.0);

    player.set_volume(0.49);
    player.pump();
    assert_eq!(player.state().volume_level(), VolumeLevel::Low);

    player.set_volume(0.5);
    player.pump();
    assert_eq!(player.state().volume_level(), VolumeLevel::High);

    player.set_volume(0.0);
    player.pump();
    assert_eq!(player.state().volume_level(), VolumeLevel::Muted);

    player.set_volume(0.9);
    player.toggle_mute();
    player.pump();
    assert_eq!(player.state().volume_level(), VolumeLevel::Muted);
}

#[test]
fn scrub_captures_paused_flag_before_pausing() {
    let mut player = player(120.0);
    player.toggle_playback();
    player.pump();
    assert!(!player.state().is_paused());

    player.begin_scrub(0.3);
    assert_eq!(player.state().scrub(), ScrubState::Scrubbing { was_paused: false });
    assert!(player.media().is_paused());

    player.end_scrub(0.6);
    player.pump();
    assert!(!player.media().is_paused());
    assert_abs_diff_eq!(player.media().current_time(), 72.0);
}

#[test]
fn scrub_while_paused_does_not_resume() {
    let mut player = player(120.0);
    player.begin_scrub(0.3);
    assert_eq!(player.state().scrub(), ScrubState::Scrubbing { was_paused: true });
    player.end_scrub(0.6);
    player.pump();
    assert!(player.media().is_paused());
    assert!(player.state().is_paused());
}

#[test]
fn drag_across_timeline_last_write_wins() {
    let mut player = player(200.0);
    player.set_timeline_bounds(TimelineBounds::new(50.0, 500.0));

    player.pointer_down(PointerSample::pressed(100.0));
    for x in [120.0, 300.0, 480.0, 200.0] {
        player.pointer_move(PointerSample::pressed(x));
    }
    assert_abs_diff_eq!(player.state().progress_fraction().value(), 0.3, epsilon = 1e-6);
    assert_eq!(
        player.state().scrub_thumbnail(),
        Some(PathBuf::from("previewImgs/thumbnail-12.jpg").as_path())
    );

    player.pointer_up(PointerSample::released(200.0));
    player.pump();
    assert_abs_diff_eq!(player.media().current_time(), 60.0, epsilon = 1e-3);
}

#[test]
fn pointer_beyond_timeline_clamps() {
    let mut player = player(100.0);
    player.set_timeline_bounds(TimelineBounds::new(0.0, 400.0));
    player.pointer_down(PointerSample::pressed(-30.0));
    assert_eq!(player.state().progress_fraction(), Fraction::ZERO);
    player.pointer_up(PointerSample::released(900.0));
    player.pump();
    assert_abs_diff_eq!(player.media().current_time(), 100.0);
}

#[test]
fn preview_bucket_is_never_zero() {
    let mut player = player(120.0);
    player.set_timeline_bounds(TimelineBounds::new(0.0, 1000.0));
    for x in [0.0, 1.0, 20.0, 41.0] {
        player.pointer_move(PointerSample::released(x));
        assert_eq!(
            player.state().preview_thumbnail(),
            Some(PathBuf::from("previewImgs/thumbnail-1.jpg").as_path())
        );
    }
}

#[test]
fn unknown_duration_skips_dependent_work() {
    let mut player = Controller::mount(SimulatedMediaElement::new(), thumbnails());
    player.pointer_move(PointerSample::released(0.5));
    assert!(player.state().preview_thumbnail().is_none());

    player.pointer_down(PointerSample::pressed(0.5));
    player.pointer_up(PointerSample::released(0.7));
    player.pump();
    assert_abs_diff_eq!(player.media().current_time(), 0.0);
    assert_eq!(player.state().total_time_text(), "0:00");
}

#[test]
fn unmount_deregisters_every_listener() {
    let player = player(60.0);
    assert_eq!(player.media().listener_count(), MediaEvent::ALL.len());
    let media = player.unmount();
    assert_eq!(media.listener_count(), 0);
}

#[test]
fn borrowed_element_is_released_on_drop() {
    let mut media = SimulatedMediaElement::new();
    media.load(30.0);
    {
        let mut player = Controller::mount(&mut media, thumbnails());
        player.toggle_playback();
        player.pump();
        assert!(!player.state().is_paused());
    }
    assert_eq!(media.listener_count(), 0);
    assert!(!media.is_paused());
}

#[test]
fn playback_runs_to_end_and_pauses() {
    let mut player = player(10.0);
    player.toggle_playback();
    for _ in 0..12 {
        player.media_mut().advance(1.0);
    }
    player.pump();
    assert!(player.state().is_paused());
    assert_eq!(player.state().current_time_text(), format_duration(10.0));
    assert_abs_diff_eq!(player.state().progress_fraction().value(), 1.0);
}

#[test]
fn modes_follow_host_and_rejections_are_harmless() {
    let media = SimulatedMediaElement::new()
        .with_capabilities(HostCapabilities {
            fullscreen: false,
            ..HostCapabilities::default()
        })
        .with_caption_track(CaptionMode::Showing);
    let mut player = Controller::mount(media, thumbnails());
    assert!(player.state().captions_visible());

    player.toggle_fullscreen();
    player.pump();
    assert_eq!(player.state().ui_mode(), UiMode::Normal);

    player.toggle_mini_player();
    player.pump();
    assert_eq!(player.state().ui_mode(), UiMode::MiniPlayer);

    player.media_mut().host_close_picture_in_picture();
    player.pump();
    assert_eq!(player.state().ui_mode(), UiMode::Normal);

    player.toggle_captions();
    assert!(!player.state().captions_visible());
}

#[tokio::test]
async fn async_loop_processes_in_order() {
    let mut player = player(30.0);
    player.toggle_playback();
    player.set_volume(0.2);

    assert_eq!(player.process_next().await, Some(MediaEvent::Play));
    assert!(!player.state().is_paused());
    assert_eq!(player.process_next().await, Some(MediaEvent::VolumeChange));
    assert_eq!(player.state().volume_level(), VolumeLevel::Low);
}
