pub mod hearts;
pub mod lifecycle;
pub mod modal;
pub mod music;
pub mod nav;
pub mod reveal;

pub use hearts::{wire_ambient_hearts, wire_click_hearts};
pub use lifecycle::wire_teardown;
pub use modal::wire_modal;
pub use music::wire_music_toggle;
pub use nav::{wire_anchors, wire_nav_toggle};
pub use reveal::wire_reveal;
