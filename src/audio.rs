use crate::dom;
use crate::error::PageError;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Looping background track backed by an `<audio>` element.
#[derive(Clone)]
pub struct BackgroundMusic {
    element: web::HtmlAudioElement,
}

impl BackgroundMusic {
    pub fn new(src: &str) -> Result<Self, PageError> {
        let element = web::HtmlAudioElement::new_with_src(src)?;
        element.set_loop(true);
        element.set_preload("auto");
        Ok(Self { element })
    }

    pub fn is_paused(&self) -> bool {
        self.element.paused()
    }

    /// Request playback and wait for the browser's answer. Fails when the
    /// file is missing, cannot be decoded, or autoplay policy refuses it.
    pub async fn play(&self) -> Result<(), PageError> {
        let promise = self.element.play()?;
        JsFuture::from(promise).await?;
        Ok(())
    }

    pub fn pause(&self) {
        if let Err(e) = self.element.pause() {
            log::warn!("[music] pause failed: {:?}", e);
        }
    }

    /// Run `handler` once the browser reports it can play through.
    pub fn on_can_play_through(&self, handler: impl FnMut(web::Event) + 'static) {
        dom::add_listener(&self.element, "canplaythrough", handler);
    }
}
