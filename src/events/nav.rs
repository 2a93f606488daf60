use crate::constants::ANCHOR_SELECTOR;
use crate::context::PageContext;
use crate::dom;
use crate::model::fragment_id;
use std::rc::Rc;
use web_sys as web;

/// Wire the mobile navigation toggle and the outside-click close. Returns
/// `false` when either the toggle or the panel is missing.
pub fn wire_nav_toggle(ctx: &Rc<PageContext>) -> bool {
    let (Some(toggle), Some(links)) = (
        ctx.elements.nav_toggle.clone(),
        ctx.elements.nav_links.clone(),
    ) else {
        log::debug!("[nav] toggle or panel missing; skipped");
        return false;
    };

    let c = ctx.clone();
    dom::add_listener(&toggle, "click", move |_ev: web::MouseEvent| {
        let open = c.nav.borrow_mut().toggle();
        c.sync_nav();
        log::debug!("[nav] open={}", open);
    });

    // close when tapping outside (mobile)
    let c = ctx.clone();
    dom::add_listener(&ctx.document, "click", move |ev: web::MouseEvent| {
        let target = dom::event_target_element(&ev);
        let inside =
            dom::contains(&links, target.as_ref()) || dom::contains(&toggle, target.as_ref());
        if c.nav.borrow_mut().on_document_click(inside) {
            c.sync_nav();
        }
    });
    true
}

/// Replace jump navigation of same-page links with a smooth scroll. Links
/// whose fragment does not resolve keep the browser default.
pub fn wire_anchors(ctx: &Rc<PageContext>) -> usize {
    let anchors = dom::query_all(&ctx.document, ANCHOR_SELECTOR);
    for a in &anchors {
        let c = ctx.clone();
        let anchor = a.clone();
        dom::add_listener(a, "click", move |ev: web::MouseEvent| {
            let href = anchor.get_attribute("href").unwrap_or_default();
            let Some(id) = fragment_id(&href) else {
                return;
            };
            let Some(target) = c.document.get_element_by_id(id) else {
                log::debug!("[nav] no element for #{}", id);
                return;
            };
            ev.prevent_default();
            let opts = web::ScrollIntoViewOptions::new();
            opts.set_behavior(web::ScrollBehavior::Smooth);
            opts.set_block(web::ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&opts);
            c.close_nav();
        });
    }
    anchors.len()
}
