// Host-side tests for the reveal-on-scroll state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod reveal {
    include!("../src/model/reveal.rs");
}

use proptest::prelude::*;
use reveal::*;

#[test]
fn element_reveals_once_when_threshold_is_crossed() {
    let mut tracker = RevealTracker::default();
    let a = tracker.register();
    let b = tracker.register();
    assert_eq!(tracker.pending(), 2);

    assert!(tracker.observe(a, true, 0.5));
    assert!(tracker.is_revealed(a));
    assert!(!tracker.is_revealed(b));
    assert_eq!(tracker.pending(), 1);

    // later samples, visible or not, never report a second transition
    assert!(!tracker.observe(a, true, 1.0));
    assert!(!tracker.observe(a, false, 0.0));
    assert!(tracker.is_revealed(a));
}

#[test]
fn below_threshold_stays_pending() {
    let mut tracker = RevealTracker::new(0.12);
    let i = tracker.register();
    assert!(!tracker.observe(i, true, 0.05));
    assert!(!tracker.observe(i, true, 0.119));
    assert!(!tracker.is_revealed(i));
    assert!(tracker.observe(i, true, 0.12));
}

#[test]
fn not_intersecting_never_reveals() {
    let mut tracker = RevealTracker::default();
    let i = tracker.register();
    assert!(!tracker.observe(i, false, 0.9));
    assert_eq!(tracker.pending(), 1);
}

#[test]
fn unknown_index_is_ignored() {
    let mut tracker = RevealTracker::default();
    assert!(tracker.is_empty());
    assert!(!tracker.observe(3, true, 1.0));
    assert!(!tracker.is_revealed(3));
}

#[test]
fn revealed_state_is_sticky() {
    let mut state = RevealState::Revealed;
    assert!(!state.observe(true, 1.0, 0.12));
    assert_eq!(state, RevealState::Revealed);
}

#[test]
fn element_taller_than_threshold_allows_reveals_on_intersect() {
    let mut tracker = RevealTracker::new(0.12);
    let i = tracker.register();
    // 10 viewports tall: at most 10% can ever be visible
    let reach = reachable_ratio(800.0, 8000.0);
    assert!(reach < 0.12);
    assert!(!tracker.observe_with_reach(i, false, 0.0, reach));
    assert!(tracker.observe_with_reach(i, true, 0.01, reach));
    assert!(tracker.is_revealed(i));
}

#[test]
fn element_that_fits_still_waits_for_threshold() {
    let mut tracker = RevealTracker::new(0.12);
    let i = tracker.register();
    let reach = reachable_ratio(800.0, 400.0);
    assert_eq!(reach, 1.0);
    assert!(!tracker.observe_with_reach(i, true, 0.05, reach));
    assert!(tracker.observe_with_reach(i, true, 0.2, reach));
}

#[test]
fn unknown_sizes_assume_the_element_fits() {
    assert_eq!(reachable_ratio(0.0, 500.0), 1.0);
    assert_eq!(reachable_ratio(800.0, 0.0), 1.0);
}

proptest! {
    // Whatever the sample sequence, an element transitions at most once and
    // only on a sample at or above the threshold.
    #[test]
    fn at_most_one_transition(samples in prop::collection::vec((any::<bool>(), 0.0f64..=1.0), 0..64)) {
        let mut tracker = RevealTracker::default();
        let i = tracker.register();
        let mut transitions = 0;
        for (hit, ratio) in samples {
            if tracker.observe(i, hit, ratio) {
                prop_assert!(hit);
                prop_assert!(ratio >= constants::REVEAL_THRESHOLD);
                transitions += 1;
            }
        }
        prop_assert!(transitions <= 1);
        prop_assert_eq!(tracker.is_revealed(i), transitions == 1);
    }
}
