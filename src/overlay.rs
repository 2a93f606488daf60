use crate::config::PageConfig;
use crate::constants::CLASS_OPEN;
use crate::dom;
use crate::error::PageError;
use crate::model::markup;
use web_sys as web;

/// Append the surprise dialog (hidden until opened) to `<body>`.
pub fn mount_dialog(document: &web::Document, config: &PageConfig) -> Result<web::Element, PageError> {
    let dialog = markup::surprise_dialog(&config.surprise);
    log::debug!("[modal] mounting {}", dialog.to_html());
    dom::mount(document, &dialog)
}

/// Append the footer with the current calendar year.
pub fn mount_footer(document: &web::Document, config: &PageConfig) -> Result<web::Element, PageError> {
    let year = js_sys::Date::new_0().get_full_year();
    dom::mount(document, &markup::footer(&config.footer, year))
}

#[inline]
pub fn show(el: &web::Element) {
    _ = el.class_list().add_1(CLASS_OPEN);
}

#[inline]
pub fn hide(el: &web::Element) {
    _ = el.class_list().remove_1(CLASS_OPEN);
}
