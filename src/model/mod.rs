pub mod hearts;
pub mod markup;
pub mod modal;
pub mod music;
pub mod nav;
pub mod reveal;
pub mod scheduler;

pub use hearts::{AmbientStream, ClickHeart, ClickThrottle, FloatingHeart};
pub use modal::{FocusTarget, ModalEvent, ModalState};
pub use music::{MusicAction, MusicState};
pub use nav::{fragment_id, NavMenu};
pub use reveal::{reachable_ratio, RevealTracker};
