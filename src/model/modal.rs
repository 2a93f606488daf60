use crate::constants::CLASS_MODAL_BACKDROP;

/// Open/closed state of the surprise dialog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

/// Inputs that can drive the dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalEvent {
    /// The trigger control was activated.
    Trigger,
    /// The dialog's close control was activated.
    CloseControl,
    /// A click on the backdrop around the panel.
    Backdrop,
    /// The Escape key.
    Escape,
    /// A click inside the content panel.
    PanelClick,
}

/// Where input focus moves after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusTarget {
    CloseControl,
    Trigger,
}

impl ModalEvent {
    /// Classify a click inside the dialog from its target's `data-close`
    /// attribute and class name.
    pub fn from_click(data_close: Option<&str>, class_name: &str) -> Self {
        if data_close != Some("true") {
            return ModalEvent::PanelClick;
        }
        // any other node marked with data-close acts like the close control
        if class_name
            .split_whitespace()
            .any(|c| c == CLASS_MODAL_BACKDROP)
        {
            ModalEvent::Backdrop
        } else {
            ModalEvent::CloseControl
        }
    }
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        *self == ModalState::Open
    }

    /// Apply one event and return the focus move the caller should perform,
    /// if any. Panel clicks and close requests while closed change nothing.
    pub fn apply(&mut self, event: ModalEvent) -> Option<FocusTarget> {
        match (*self, event) {
            (_, ModalEvent::Trigger) => {
                *self = ModalState::Open;
                Some(FocusTarget::CloseControl)
            }
            (
                ModalState::Open,
                ModalEvent::CloseControl | ModalEvent::Backdrop | ModalEvent::Escape,
            ) => {
                *self = ModalState::Closed;
                Some(FocusTarget::Trigger)
            }
            _ => None,
        }
    }
}
