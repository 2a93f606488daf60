use crate::constants::{DATA_CLOSE_ATTR, MODAL_CLOSE_SELECTOR, MODAL_PANEL_SELECTOR};
use crate::context::{ModalElements, PageContext};
use crate::dom;
use crate::error::PageError;
use crate::input;
use crate::model::{FocusTarget, ModalEvent};
use crate::overlay;
use std::rc::Rc;
use web_sys as web;

/// Feed one event to the dialog state and apply the resulting visibility
/// and focus change.
pub fn dispatch(ctx: &PageContext, event: ModalEvent) {
    let Some(focus) = ctx.modal.borrow_mut().apply(event) else {
        return;
    };
    let modal_elements = ctx.modal_elements.borrow();
    let Some(m) = modal_elements.as_ref() else {
        return;
    };
    match focus {
        FocusTarget::CloseControl => {
            overlay::show(&m.root);
            if let Some(close) = &m.close {
                dom::focus(close);
            }
            log::info!("[modal] open");
        }
        FocusTarget::Trigger => {
            overlay::hide(&m.root);
            if let Some(trigger) = &ctx.elements.surprise_button {
                dom::focus(trigger);
            }
            log::info!("[modal] closed via {:?}", event);
        }
    }
}

/// Inject the surprise dialog and wire its trigger, close controls and the
/// Escape key.
pub fn wire_modal(ctx: &Rc<PageContext>) -> Result<(), PageError> {
    let root = overlay::mount_dialog(&ctx.document, &ctx.config)?;
    let panel = root.query_selector(MODAL_PANEL_SELECTOR)?;
    let close = root.query_selector(MODAL_CLOSE_SELECTOR)?;
    *ctx.modal_elements.borrow_mut() = Some(ModalElements {
        root: root.clone(),
        panel,
        close,
    });

    match &ctx.elements.surprise_button {
        Some(trigger) => {
            let c = ctx.clone();
            dom::add_listener(trigger, "click", move |_ev: web::MouseEvent| {
                dispatch(&c, ModalEvent::Trigger);
            });
        }
        None => log::debug!("[modal] no trigger; dialog can never open"),
    }

    let c = ctx.clone();
    dom::add_listener(&root, "click", move |ev: web::MouseEvent| {
        let Some(target) = dom::event_target_element(&ev) else {
            return;
        };
        let event = ModalEvent::from_click(
            target.get_attribute(DATA_CLOSE_ATTR).as_deref(),
            &target.class_name(),
        );
        dispatch(&c, event);
    });

    let c = ctx.clone();
    dom::add_listener(&ctx.document, "keydown", move |ev: web::KeyboardEvent| {
        if input::is_escape(&ev) {
            dispatch(&c, ModalEvent::Escape);
        }
    });
    Ok(())
}
