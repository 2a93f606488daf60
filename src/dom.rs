use crate::error::PageError;
use crate::model::markup::{ElementNode, Node};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Attach a long-lived listener; the closure lives for the page's lifetime.
pub fn add_listener<E: FromWasmAbi + 'static>(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("[dom] bad selector {}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

/// Element the event was dispatched to, if it is an element.
#[inline]
pub fn event_target_element(ev: &web::Event) -> Option<web::Element> {
    ev.target().and_then(|t| t.dyn_into::<web::Element>().ok())
}

/// True when `target` is `container` or one of its descendants.
#[inline]
pub fn contains(container: &web::Element, target: Option<&web::Element>) -> bool {
    target
        .map(|t| container.contains(Some(t.as_ref())))
        .unwrap_or(false)
}

pub fn set_styles(el: &web::HtmlElement, props: &[(&'static str, String)]) {
    let style = el.style();
    for (name, value) in props {
        if let Err(e) = style.set_property(name, value) {
            log::debug!("[dom] style {} rejected: {:?}", name, e);
        }
    }
}

pub fn create_div(document: &web::Document, class: &str) -> Result<web::HtmlElement, PageError> {
    let el = document.create_element("div")?;
    el.set_class_name(class);
    el.dyn_into::<web::HtmlElement>()
        .map_err(|_| PageError::Js("div is not an HtmlElement".to_string()))
}

#[inline]
pub fn focus(el: &web::Element) {
    if let Some(h) = el.dyn_ref::<web::HtmlElement>() {
        _ = h.focus();
    }
}

/// Build real DOM nodes for a markup tree.
pub fn build(document: &web::Document, node: &ElementNode) -> Result<web::Element, PageError> {
    let el = document.create_element(node.tag)?;
    for (name, value) in &node.attrs {
        el.set_attribute(name, value)?;
    }
    for child in &node.children {
        match child {
            Node::Text(t) => {
                let text = document.create_text_node(t);
                el.append_child(&text)?;
            }
            Node::Element(e) => {
                let c = build(document, e)?;
                el.append_child(&c)?;
            }
        }
    }
    Ok(el)
}

/// Build `node` and append it to `<body>`.
pub fn mount(document: &web::Document, node: &ElementNode) -> Result<web::Element, PageError> {
    let body = document.body().ok_or(PageError::MissingElement("body"))?;
    let el = build(document, node)?;
    body.append_child(&el)?;
    Ok(el)
}
