use crate::context::PageContext;
use crate::dom;
use std::rc::Rc;
use web_sys as web;

/// Stop timers and audio when the page is being unloaded.
pub fn wire_teardown(ctx: &Rc<PageContext>) {
    let c = ctx.clone();
    dom::add_listener(&ctx.window, "beforeunload", move |_ev: web::Event| {
        c.teardown();
    });
}
