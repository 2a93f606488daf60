// Host-side tests for the music toggle state.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod music {
    include!("../src/model/music.rs");
}

use constants::{LABEL_PAUSE, LABEL_PLAY};
use music::*;

#[test]
fn initial_state_is_paused_with_play_label() {
    let state = MusicState::new(true);
    assert!(!state.is_playing());
    assert!(!state.is_ready());
    assert_eq!(state.label(), LABEL_PLAY);
    assert_eq!(state.aria_pressed(), "false");
}

#[test]
fn successful_play_switches_to_pause_label() {
    let mut state = MusicState::new(true);
    assert_eq!(state.request_toggle(true), MusicAction::Play);
    state.play_succeeded();
    assert!(state.is_playing());
    assert_eq!(state.label(), LABEL_PAUSE);
    assert_eq!(state.aria_pressed(), "true");
    assert_eq!(state.alerts_shown(), 0);
}

#[test]
fn failed_play_reverts_and_alerts_once() {
    let mut state = MusicState::new(true);
    assert_eq!(state.request_toggle(true), MusicAction::Play);
    assert!(state.play_failed());
    assert!(!state.is_playing());
    assert_eq!(state.label(), LABEL_PLAY);
    assert_eq!(state.aria_pressed(), "false");
    assert_eq!(state.alerts_shown(), 1);
}

#[test]
fn user_can_retry_after_failure() {
    let mut state = MusicState::new(true);
    assert!(state.play_failed());
    assert_eq!(state.request_toggle(true), MusicAction::Play);
    state.play_succeeded();
    assert!(state.is_playing());
    assert_eq!(state.alerts_shown(), 1);
}

#[test]
fn toggling_while_playing_pauses() {
    let mut state = MusicState::new(true);
    state.play_succeeded();
    assert_eq!(state.request_toggle(false), MusicAction::Pause);
    state.paused();
    assert!(!state.is_playing());
    assert_eq!(state.label(), LABEL_PLAY);
}

#[test]
fn missing_source_ignores_activation() {
    let state = MusicState::new(false);
    assert_eq!(state.request_toggle(true), MusicAction::Ignore);
    assert_eq!(state.request_toggle(false), MusicAction::Ignore);
}

#[test]
fn readiness_does_not_gate_playback() {
    let mut state = MusicState::new(true);
    assert_eq!(state.request_toggle(true), MusicAction::Play);
    state.mark_ready();
    assert!(state.is_ready());
    assert_eq!(state.request_toggle(true), MusicAction::Play);
}

#[test]
fn every_failure_asks_for_exactly_one_alert() {
    let mut state = MusicState::new(true);
    let mut shown = 0;
    for _ in 0..3 {
        if state.play_failed() {
            shown += 1;
        }
    }
    assert_eq!(shown, 3);
    assert_eq!(state.alerts_shown(), shown);
}
