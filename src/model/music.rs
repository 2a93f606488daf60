use crate::constants::{LABEL_PAUSE, LABEL_PLAY};

/// What the music toggle should do for one activation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MusicAction {
    /// No source configured; do nothing.
    Ignore,
    /// Media is paused: request playback and wait for the outcome.
    Play,
    /// Media is playing: pause right away.
    Pause,
}

/// UI-facing state of the background music toggle.
///
/// `playing` mirrors the media element; `ready` records that the browser
/// reported `canplaythrough`. Readiness is informational only and never
/// gates a play request.
#[derive(Clone, Debug, Default)]
pub struct MusicState {
    has_source: bool,
    playing: bool,
    ready: bool,
    alerts_shown: u32,
}

impl MusicState {
    pub fn new(has_source: bool) -> Self {
        Self {
            has_source,
            ..Self::default()
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn alerts_shown(&self) -> u32 {
        self.alerts_shown
    }

    pub fn mark_ready(&mut self) {
        self.ready = true;
    }

    /// Decide the action for a toggle activation, given the media element's
    /// current `paused` flag.
    pub fn request_toggle(&self, media_paused: bool) -> MusicAction {
        if !self.has_source {
            MusicAction::Ignore
        } else if media_paused {
            MusicAction::Play
        } else {
            MusicAction::Pause
        }
    }

    pub fn play_succeeded(&mut self) {
        self.playing = true;
    }

    /// Playback was rejected. Reverts to not-playing and returns whether the
    /// caller must show the failure alert; each failure yields exactly one.
    #[must_use]
    pub fn play_failed(&mut self) -> bool {
        self.playing = false;
        self.alerts_shown += 1;
        true
    }

    /// Media was paused (toggle or page teardown).
    pub fn paused(&mut self) {
        self.playing = false;
    }

    pub fn label(&self) -> &'static str {
        if self.playing {
            LABEL_PAUSE
        } else {
            LABEL_PLAY
        }
    }

    /// Value for the toggle's `aria-pressed` attribute.
    pub fn aria_pressed(&self) -> &'static str {
        if self.playing {
            "true"
        } else {
            "false"
        }
    }
}
