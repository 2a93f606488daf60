use crate::constants::{CLASS_VISIBLE, REVEAL_INDEX_ATTR, REVEAL_SELECTOR};
use crate::context::PageContext;
use crate::dom;
use crate::error::PageError;
use crate::model::reachable_ratio;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Observe every `.reveal` element and mark it visible once it crosses the
/// threshold. Returns how many elements are being tracked.
pub fn wire_reveal(ctx: &Rc<PageContext>) -> Result<usize, PageError> {
    let targets = dom::query_all(&ctx.document, REVEAL_SELECTOR);
    if targets.is_empty() {
        return Ok(0);
    }

    let c = ctx.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = target
                    .get_attribute(REVEAL_INDEX_ATTR)
                    .and_then(|v| v.parse::<usize>().ok())
                else {
                    continue;
                };
                let viewport = entry.root_bounds().map(|r| r.height()).unwrap_or(0.0);
                let reach = reachable_ratio(viewport, entry.bounding_client_rect().height());
                let revealed = c.reveal.borrow_mut().observe_with_reach(
                    index,
                    entry.is_intersecting(),
                    entry.intersection_ratio(),
                    reach,
                );
                if revealed {
                    _ = target.class_list().add_1(CLASS_VISIBLE);
                    observer.unobserve(&target);
                    log::debug!(
                        "[reveal] element {} visible, {} pending",
                        index,
                        c.reveal.borrow().pending()
                    );
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    // 0.0 as well, so elements taller than the threshold allows still get
    // a callback when they start to intersect
    let thresholds = js_sys::Array::of2(
        &JsValue::from_f64(0.0),
        &JsValue::from_f64(ctx.reveal.borrow().threshold()),
    );
    init.set_threshold(&thresholds);
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();

    for el in &targets {
        let index = ctx.reveal.borrow_mut().register();
        el.set_attribute(REVEAL_INDEX_ATTR, &index.to_string())?;
        observer.observe(el);
    }
    Ok(targets.len())
}
