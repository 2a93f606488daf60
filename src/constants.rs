/// Page behavior tuning constants.
///
/// Timings, random ranges and the DOM hooks the page markup is expected to
/// provide. Keeping them here keeps magic numbers and selector strings out of
/// the wiring code.
use std::time::Duration;

// Reveal-on-scroll: fraction of the element that must be visible
pub const REVEAL_THRESHOLD: f64 = 0.12;

// Ambient hearts stream
pub const AMBIENT_SPAWN_PERIOD: Duration = Duration::from_millis(650);
pub const AMBIENT_STARTUP_BURST: usize = 10;
// Extra time a floating heart stays in the DOM after its animation ends
pub const AMBIENT_REMOVAL_GRACE: Duration = Duration::from_secs(1);

// Random ranges for floating hearts (half-open, min..max)
pub const HEART_LEFT_PCT: (f64, f64) = (0.0, 100.0);
pub const HEART_SIZE_PX: (f64, f64) = (10.0, 32.0);
pub const HEART_DURATION_SEC: (f64, f64) = (10.0, 20.0);
pub const HEART_DRIFT_PX: (f64, f64) = (-50.0, 50.0);
pub const HEART_SCALE: (f64, f64) = (0.85, 1.75);

// Click hearts
pub const CLICK_HEART_LIFETIME: Duration = Duration::from_millis(1100);
pub const CLICK_THROTTLE: Duration = Duration::from_millis(80);

// Element ids
pub const NAV_TOGGLE_ID: &str = "navToggle";
pub const NAV_LINKS_ID: &str = "navLinks";
pub const MUSIC_TOGGLE_ID: &str = "musicToggle";
pub const MUSIC_LABEL_ID: &str = "musicLabel";
pub const BG_HEARTS_ID: &str = "bgHearts";
pub const SURPRISE_BUTTON_ID: &str = "surpriseBtn";
pub const PAGE_CONFIG_ID: &str = "page-config";

// Selectors and class names
pub const REVEAL_SELECTOR: &str = ".reveal";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const MODAL_PANEL_SELECTOR: &str = ".modal__panel";
pub const MODAL_CLOSE_SELECTOR: &str = ".modal__close";
pub const CLASS_VISIBLE: &str = "is-visible";
pub const CLASS_OPEN: &str = "is-open";
pub const CLASS_FLOATING_HEART: &str = "floating-heart";
pub const CLASS_CLICK_HEART: &str = "click-heart";
pub const CLASS_MODAL_BACKDROP: &str = "modal__backdrop";
pub const DATA_CLOSE_ATTR: &str = "data-close";
pub const REVEAL_INDEX_ATTR: &str = "data-reveal-index";

// Music
pub const DEFAULT_MUSIC_SRC: &str = "assets/music4.mp3";
pub const LABEL_PLAY: &str = "Play music";
pub const LABEL_PAUSE: &str = "Pause music";
