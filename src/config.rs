use crate::constants::DEFAULT_MUSIC_SRC;
use crate::error::PageError;
use crate::model::markup::{FooterContent, SurpriseMessage};
use serde::Deserialize;

/// Page-level settings, read from an optional inline JSON block:
///
/// ```html
/// <script type="application/json" id="page-config">
///   { "music_src": "assets/music.mp3", "log_level": "debug" }
/// </script>
/// ```
///
/// Every field is optional; missing ones keep their defaults.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Background music location. Empty disables the music toggle.
    pub music_src: String,
    /// Alert shown when playback is refused or the file is missing.
    pub playback_alert: String,
    pub log_level: String,
    pub surprise: SurpriseMessage,
    pub footer: FooterContent,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            music_src: DEFAULT_MUSIC_SRC.to_string(),
            playback_alert: "เบราว์เซอร์บล็อกการเล่นอัตโนมัติ หรือยังไม่มีไฟล์เพลงครับ 😅\n\
                             ใส่ไฟล์เพลงที่ assets/music.mp3 แล้วลองกดอีกครั้ง"
                .to_string(),
            log_level: "info".to_string(),
            surprise: SurpriseMessage::default(),
            footer: FooterContent::default(),
        }
    }
}

impl PageConfig {
    pub fn from_json(text: &str) -> Result<Self, PageError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(text)?)
    }

    /// Parse the inline block if present, falling back to defaults on a
    /// malformed one. The warning is returned because logging may not be
    /// initialized yet.
    pub fn from_optional_json(text: Option<&str>) -> (Self, Option<PageError>) {
        match text.map(Self::from_json) {
            None => (Self::default(), None),
            Some(Ok(cfg)) => (cfg, None),
            Some(Err(e)) => (Self::default(), Some(e)),
        }
    }

    pub fn has_music(&self) -> bool {
        !self.music_src.trim().is_empty()
    }

    /// Configured log level; unknown names fall back to `Info`.
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
