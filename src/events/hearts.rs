use crate::constants::{AMBIENT_SPAWN_PERIOD, CLASS_CLICK_HEART, CLASS_FLOATING_HEART};
use crate::context::PageContext;
use crate::dom;
use crate::error::PageError;
use crate::input;
use crate::model::{ClickHeart, FloatingHeart};
use crate::timers::Interval;
use instant::Instant;
use std::rc::Rc;
use web_sys as web;

fn spawn_floating_heart(ctx: &PageContext) -> Result<(), PageError> {
    let Some(container) = &ctx.elements.bg_hearts else {
        return Ok(());
    };
    let heart = FloatingHeart::random(&mut *ctx.rng.borrow_mut());
    let el = dom::create_div(&ctx.document, CLASS_FLOATING_HEART)?;
    dom::set_styles(&el, &heart.style_properties());
    container.append_child(&el)?;
    ctx.scheduler.remove_after(el.into(), heart.removal_delay())?;
    Ok(())
}

fn spawn_click_heart(ctx: &PageContext, heart: &ClickHeart) -> Result<(), PageError> {
    let body = ctx
        .document
        .body()
        .ok_or(PageError::MissingElement("body"))?;
    let el = dom::create_div(&ctx.document, CLASS_CLICK_HEART)?;
    dom::set_styles(&el, &heart.style_properties());
    body.append_child(&el)?;
    ctx.scheduler.remove_after(el.into(), heart.lifetime())?;
    Ok(())
}

/// Start the ambient stream: an initial burst plus one heart per period.
pub fn wire_ambient_hearts(ctx: &Rc<PageContext>) -> Result<(), PageError> {
    if ctx.elements.bg_hearts.is_none() {
        log::debug!("[hearts] no container; ambient stream disabled");
        return Ok(());
    }

    let burst = ctx.ambient.borrow_mut().start();
    let c = ctx.clone();
    let interval = Interval::start(&ctx.window, AMBIENT_SPAWN_PERIOD, move || {
        let admit = c.ambient.borrow_mut().tick();
        if admit {
            if let Err(e) = spawn_floating_heart(&c) {
                log::warn!("[hearts] spawn failed: {}", e);
            }
        }
    })?;
    *ctx.ambient_interval.borrow_mut() = Some(interval);

    for _ in 0..burst {
        let admit = ctx.ambient.borrow_mut().tick();
        if admit {
            if let Err(e) = spawn_floating_heart(ctx) {
                log::warn!("[hearts] spawn failed: {}", e);
            }
        }
    }
    log::info!("[hearts] ambient stream started ({} initial)", burst);
    Ok(())
}

/// Spawn a short-lived heart at every accepted document click, except
/// clicks inside the dialog panel.
pub fn wire_click_hearts(ctx: &Rc<PageContext>) {
    let c = ctx.clone();
    dom::add_listener(&ctx.document, "click", move |ev: web::MouseEvent| {
        let target = dom::event_target_element(&ev);
        let in_panel = c
            .modal_elements
            .borrow()
            .as_ref()
            .and_then(|m| m.panel.as_ref())
            .map(|panel| dom::contains(panel, target.as_ref()))
            .unwrap_or(false);
        if !c.click_throttle.borrow_mut().admit(Instant::now(), in_panel) {
            return;
        }
        let heart = ClickHeart::at(input::click_point(&ev));
        if let Err(e) = spawn_click_heart(&c, &heart) {
            log::warn!("[hearts] click heart failed: {}", e);
        }
    });
}
