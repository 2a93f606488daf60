use crate::constants::{
    AMBIENT_REMOVAL_GRACE, AMBIENT_STARTUP_BURST, CLICK_HEART_LIFETIME, CLICK_THROTTLE,
    HEART_DRIFT_PX, HEART_DURATION_SEC, HEART_LEFT_PCT, HEART_SCALE, HEART_SIZE_PX,
};
use glam::Vec2;
use instant::Instant;
use rand::Rng;
use std::time::Duration;

/// Randomized parameters of one ambient floating heart.
///
/// Fields:
/// - `left_pct`: horizontal position as a percentage of the container width
/// - `size_px`: font size of the glyph
/// - `duration_sec`: rise animation length
/// - `drift_px`: signed horizontal drift over the animation
/// - `scale`: extra scale applied by the stylesheet
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatingHeart {
    pub left_pct: f64,
    pub size_px: f64,
    pub duration_sec: f64,
    pub drift_px: f64,
    pub scale: f64,
}

impl FloatingHeart {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            left_pct: rng.gen_range(HEART_LEFT_PCT.0..HEART_LEFT_PCT.1),
            size_px: rng.gen_range(HEART_SIZE_PX.0..HEART_SIZE_PX.1),
            duration_sec: rng.gen_range(HEART_DURATION_SEC.0..HEART_DURATION_SEC.1),
            drift_px: rng.gen_range(HEART_DRIFT_PX.0..HEART_DRIFT_PX.1),
            scale: rng.gen_range(HEART_SCALE.0..HEART_SCALE.1),
        }
    }

    /// Time after spawning at which the node is removed: a little past the
    /// end of its animation.
    pub fn removal_delay(&self) -> Duration {
        Duration::from_secs_f64(self.duration_sec) + AMBIENT_REMOVAL_GRACE
    }

    /// Inline style properties to set on the spawned node.
    pub fn style_properties(&self) -> [(&'static str, String); 5] {
        [
            ("left", format!("{:.2}%", self.left_pct)),
            ("animation-duration", format!("{:.2}s", self.duration_sec)),
            ("--drift", format!("{:.2}px", self.drift_px)),
            ("--scale", format!("{:.3}", self.scale)),
            ("font-size", format!("{:.2}px", self.size_px)),
        ]
    }
}

/// Gate for the ambient spawn interval.
///
/// A tick that was already queued when the page started unloading still
/// reaches the handler; once stopped, ticks spawn nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct AmbientStream {
    active: bool,
    spawned: u64,
}

impl AmbientStream {
    /// Activate the stream and return how many hearts to spawn immediately.
    pub fn start(&mut self) -> usize {
        self.active = true;
        AMBIENT_STARTUP_BURST
    }

    /// Returns `true` if a heart should be spawned now.
    pub fn tick(&mut self) -> bool {
        if self.active {
            self.spawned += 1;
        }
        self.active
    }

    pub fn stop(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Hearts admitted by `tick` so far.
    pub fn spawned(&self) -> u64 {
        self.spawned
    }
}

/// A heart spawned at the pointer position of a document click.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickHeart {
    pub position: Vec2,
}

impl ClickHeart {
    pub fn at(position: Vec2) -> Self {
        Self { position }
    }

    pub fn lifetime(&self) -> Duration {
        CLICK_HEART_LIFETIME
    }

    pub fn style_properties(&self) -> [(&'static str, String); 2] {
        [
            ("left", format!("{}px", self.position.x)),
            ("top", format!("{}px", self.position.y)),
        ]
    }
}

/// Rejects clicks that follow the last accepted one too closely.
#[derive(Clone, Copy, Debug)]
pub struct ClickThrottle {
    min_gap: Duration,
    last_accepted: Option<Instant>,
}

impl Default for ClickThrottle {
    fn default() -> Self {
        Self::new(CLICK_THROTTLE)
    }
}

impl ClickThrottle {
    pub fn new(min_gap: Duration) -> Self {
        Self {
            min_gap,
            last_accepted: None,
        }
    }

    /// Returns `true` and records `now` if the click is far enough from the
    /// previous accepted one. Rejected clicks leave the state untouched.
    pub fn accept(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_accepted {
            let elapsed = if now > last { now - last } else { Duration::ZERO };
            if elapsed < self.min_gap {
                return false;
            }
        }
        self.last_accepted = Some(now);
        true
    }

    /// Whether a document click spawns a heart. The throttle runs first, so
    /// an accepted click inside the dialog panel takes the slot but spawns
    /// nothing.
    pub fn admit(&mut self, now: Instant, in_panel: bool) -> bool {
        self.accept(now) && !in_panel
    }
}
