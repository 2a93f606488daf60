// Host-side tests for the navigation panel state and fragment parsing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod nav {
    include!("../src/model/nav.rs");
}

use nav::*;
use proptest::prelude::*;

#[test]
fn toggle_flips_and_reports_aria_state() {
    let mut menu = NavMenu::default();
    assert!(!menu.is_open());
    assert_eq!(menu.aria_expanded(), "false");

    assert!(menu.toggle());
    assert_eq!(menu.aria_expanded(), "true");
    assert!(!menu.toggle());
    assert_eq!(menu.aria_expanded(), "false");
}

#[test]
fn outside_click_closes_open_panel() {
    let mut menu = NavMenu::default();
    menu.toggle();
    assert!(menu.on_document_click(false));
    assert!(!menu.is_open());
    // already closed: nothing to do
    assert!(!menu.on_document_click(false));
}

#[test]
fn inside_click_keeps_panel_open() {
    let mut menu = NavMenu::default();
    menu.toggle();
    assert!(!menu.on_document_click(true));
    assert!(menu.is_open());
}

#[test]
fn close_reports_previous_state() {
    let mut menu = NavMenu::default();
    assert!(!menu.close());
    menu.toggle();
    assert!(menu.close());
    assert!(!menu.is_open());
}

#[test]
fn fragment_id_resolves_same_page_links() {
    assert_eq!(fragment_id("#story"), Some("story"));
    assert_eq!(fragment_id("#a-b_c"), Some("a-b_c"));
}

#[test]
fn fragment_id_rejects_bare_hash_and_other_links() {
    assert_eq!(fragment_id("#"), None);
    assert_eq!(fragment_id(""), None);
    assert_eq!(fragment_id("page.html#story"), None);
    assert_eq!(fragment_id("https://example.com/"), None);
}

proptest! {
    #[test]
    fn toggle_parity(n in 0usize..200) {
        let mut menu = NavMenu::default();
        for _ in 0..n {
            menu.toggle();
        }
        prop_assert_eq!(menu.is_open(), n % 2 == 1);
    }

    #[test]
    fn outside_click_always_closes(n in 0usize..50) {
        let mut menu = NavMenu::default();
        for _ in 0..n {
            menu.toggle();
        }
        menu.on_document_click(false);
        prop_assert!(!menu.is_open());
        prop_assert_eq!(menu.aria_expanded(), "false");
    }
}
