// Host-side tests for page configuration parsing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod error {
    include!("../src/error.rs");
}
mod model {
    pub mod markup {
        include!("../src/model/markup.rs");
    }
}
mod config {
    include!("../src/config.rs");
}

use config::*;

#[test]
fn empty_or_missing_block_gives_defaults() {
    assert_eq!(PageConfig::from_json("").unwrap(), PageConfig::default());
    assert_eq!(PageConfig::from_json("  \n").unwrap(), PageConfig::default());
    let (cfg, err) = PageConfig::from_optional_json(None);
    assert_eq!(cfg, PageConfig::default());
    assert!(err.is_none());
}

#[test]
fn defaults_point_at_bundled_track() {
    let cfg = PageConfig::default();
    assert_eq!(cfg.music_src, constants::DEFAULT_MUSIC_SRC);
    assert!(cfg.has_music());
    assert_eq!(cfg.log_level(), log::Level::Info);
    assert!(cfg.playback_alert.contains("assets/music.mp3"));
}

#[test]
fn partial_block_overrides_only_given_fields() {
    let cfg = PageConfig::from_json(
        r#"{ "music_src": "assets/song.ogg", "surprise": { "title": "Hi" } }"#,
    )
    .unwrap();
    assert_eq!(cfg.music_src, "assets/song.ogg");
    assert_eq!(cfg.surprise.title, "Hi");
    // untouched nested fields keep their defaults
    assert_eq!(cfg.surprise.paragraphs.len(), 2);
    assert_eq!(cfg.footer, model::markup::FooterContent::default());
}

#[test]
fn empty_music_src_disables_music() {
    let cfg = PageConfig::from_json(r#"{ "music_src": "" }"#).unwrap();
    assert!(!cfg.has_music());
}

#[test]
fn log_level_parses_and_falls_back() {
    let cfg = PageConfig::from_json(r#"{ "log_level": "debug" }"#).unwrap();
    assert_eq!(cfg.log_level(), log::Level::Debug);
    let cfg = PageConfig::from_json(r#"{ "log_level": "chatty" }"#).unwrap();
    assert_eq!(cfg.log_level(), log::Level::Info);
}

#[test]
fn malformed_block_reports_error_and_uses_defaults() {
    assert!(matches!(
        PageConfig::from_json("{ not json"),
        Err(error::PageError::Config(_))
    ));
    let (cfg, err) = PageConfig::from_optional_json(Some("[1, 2"));
    assert_eq!(cfg, PageConfig::default());
    let err = err.expect("parse error");
    assert!(err.to_string().starts_with("invalid page config"));
}
