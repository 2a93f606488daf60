/// Open/closed state of the collapsible mobile navigation panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the panel and return the new open state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the panel. Returns `true` if it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// A click somewhere in the document; `inside` is true when it landed on
    /// the toggle or the panel. Returns `true` if the panel was closed.
    pub fn on_document_click(&mut self, inside: bool) -> bool {
        if inside {
            false
        } else {
            self.close()
        }
    }

    /// Value for the toggle's `aria-expanded` attribute.
    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }
}

/// Element id targeted by a same-page link, e.g. `"#story"` -> `"story"`.
///
/// Returns `None` for anything that is not a fragment link or for the bare
/// `"#"`, in which case the browser's default navigation is left alone.
#[inline]
pub fn fragment_id(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(id),
        _ => None,
    }
}
