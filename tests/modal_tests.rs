// Host-side tests for the surprise dialog state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod modal {
    include!("../src/model/modal.rs");
}

use modal::*;
use proptest::prelude::*;

fn opened() -> ModalState {
    let mut state = ModalState::default();
    assert_eq!(state.apply(ModalEvent::Trigger), Some(FocusTarget::CloseControl));
    assert!(state.is_open());
    state
}

#[test]
fn starts_closed() {
    assert_eq!(ModalState::default(), ModalState::Closed);
}

#[test]
fn each_close_path_returns_focus_to_trigger() {
    for event in [
        ModalEvent::CloseControl,
        ModalEvent::Backdrop,
        ModalEvent::Escape,
    ] {
        let mut state = opened();
        assert_eq!(state.apply(event), Some(FocusTarget::Trigger), "{:?}", event);
        assert_eq!(state, ModalState::Closed);
    }
}

#[test]
fn panel_click_never_closes() {
    let mut state = opened();
    assert_eq!(state.apply(ModalEvent::PanelClick), None);
    assert!(state.is_open());
}

#[test]
fn escape_while_closed_is_ignored() {
    let mut state = ModalState::default();
    assert_eq!(state.apply(ModalEvent::Escape), None);
    assert_eq!(state.apply(ModalEvent::Backdrop), None);
    assert!(!state.is_open());
}

#[test]
fn trigger_while_open_refocuses_close_control() {
    let mut state = opened();
    assert_eq!(state.apply(ModalEvent::Trigger), Some(FocusTarget::CloseControl));
    assert!(state.is_open());
}

#[test]
fn click_classification() {
    assert_eq!(
        ModalEvent::from_click(Some("true"), "modal__backdrop"),
        ModalEvent::Backdrop
    );
    assert_eq!(
        ModalEvent::from_click(Some("true"), "modal__close"),
        ModalEvent::CloseControl
    );
    assert_eq!(
        ModalEvent::from_click(None, "modal__title"),
        ModalEvent::PanelClick
    );
    assert_eq!(
        ModalEvent::from_click(Some("false"), "modal__close"),
        ModalEvent::PanelClick
    );
}

fn any_event() -> impl Strategy<Value = ModalEvent> {
    prop_oneof![
        Just(ModalEvent::Trigger),
        Just(ModalEvent::CloseControl),
        Just(ModalEvent::Backdrop),
        Just(ModalEvent::Escape),
        Just(ModalEvent::PanelClick),
    ]
}

proptest! {
    #[test]
    fn panel_clicks_do_not_change_state(events in prop::collection::vec(any_event(), 0..40)) {
        let mut state = ModalState::default();
        for ev in events {
            let before = state;
            let focus = state.apply(ev);
            if ev == ModalEvent::PanelClick {
                prop_assert_eq!(state, before);
                prop_assert_eq!(focus, None);
            }
            match focus {
                Some(FocusTarget::CloseControl) => prop_assert!(state.is_open()),
                Some(FocusTarget::Trigger) => prop_assert!(!state.is_open()),
                None => prop_assert_eq!(state, before),
            }
        }
    }
}
