use crate::context::PageContext;
use crate::dom;
use crate::model::MusicAction;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub fn wire_music_toggle(ctx: &Rc<PageContext>) -> bool {
    let Some(toggle) = ctx.elements.music_toggle.clone() else {
        log::debug!("[music] no toggle; skipped");
        return false;
    };

    if let Some(audio) = &ctx.audio {
        let c = ctx.clone();
        audio.on_can_play_through(move |_ev: web::Event| {
            c.music.borrow_mut().mark_ready();
            log::debug!("[music] ready to play through");
        });
    }

    let c = ctx.clone();
    dom::add_listener(&toggle, "click", move |_ev: web::MouseEvent| {
        let media_paused = c.audio.as_ref().map(|a| a.is_paused()).unwrap_or(true);
        let action = c.music.borrow().request_toggle(media_paused);
        let Some(audio) = c.audio.clone() else {
            return;
        };
        match action {
            MusicAction::Ignore => {}
            MusicAction::Pause => {
                audio.pause();
                c.music.borrow_mut().paused();
                c.sync_music_ui();
                log::info!("[music] paused");
            }
            MusicAction::Play => {
                // readiness is not checked; the play request decides
                let c = c.clone();
                spawn_local(async move {
                    match audio.play().await {
                        Ok(()) => {
                            c.music.borrow_mut().play_succeeded();
                            log::info!("[music] playing");
                        }
                        Err(e) => {
                            log::warn!("[music] playback refused: {}", e);
                            let alert = c.music.borrow_mut().play_failed();
                            if alert {
                                _ = c.window.alert_with_message(&c.config.playback_alert);
                            }
                        }
                    }
                    c.sync_music_ui();
                });
            }
        }
    });
    true
}
