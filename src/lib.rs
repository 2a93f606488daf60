#![cfg(target_arch = "wasm32")]
use crate::config::PageConfig;
use crate::constants::PAGE_CONFIG_ID;
use crate::context::PageContext;
use std::fmt::Display;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod config;
mod constants;
mod context;
mod dom;
mod error;
mod events;
mod input;
mod model;
mod overlay;
mod timers;

/// Log a behavior that failed to wire; the others keep going.
fn report<T, E: Display>(behavior: &str, result: Result<T, E>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            log::error!("[init] {} disabled: {}", behavior, e);
            None
        }
    }
}

fn read_config(document: Option<&web::Document>) -> (PageConfig, Option<error::PageError>) {
    let text = document
        .and_then(|d| d.get_element_by_id(PAGE_CONFIG_ID))
        .and_then(|el| el.text_content());
    PageConfig::from_optional_json(text.as_deref())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let document = dom::window_document();
    let (config, config_err) = read_config(document.as_ref());
    console_log::init_with_level(config.log_level()).ok();
    if let Some(e) = config_err {
        log::warn!("[init] {}; using defaults", e);
    }
    log::info!("valentine-web starting");

    if let Err(e) = init(config) {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init(config: PageConfig) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let ctx = Rc::new(PageContext::new(window, document, config));

    if let Some(n) = report("reveal", events::wire_reveal(&ctx)) {
        log::info!("[reveal] tracking {} elements", n);
    }
    let anchors = events::wire_anchors(&ctx);
    log::debug!("[nav] {} in-page links", anchors);
    events::wire_nav_toggle(&ctx);
    events::wire_music_toggle(&ctx);
    report("ambient hearts", events::wire_ambient_hearts(&ctx));
    events::wire_click_hearts(&ctx);
    report("surprise dialog", events::wire_modal(&ctx));
    report("footer", overlay::mount_footer(&ctx.document, &ctx.config));
    events::wire_teardown(&ctx);
    Ok(())
}
