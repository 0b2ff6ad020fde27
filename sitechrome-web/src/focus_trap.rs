//! Keyboard focus trap for the open menu

use crate::dom::{self, EventBinding};
use sitechrome_core::{ChromeConfig, wrap_target};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, KeyboardEvent};

/// Cycles Tab focus between the first and last focusable descendant of the
/// header while the menu is open.
///
/// Reads the header's open-class on every keypress and never writes menu
/// state; that class is the only thing shared with the menu controller.
/// Every other Tab press falls through to the browser's default order.
pub struct FocusTrap {
    binding: EventBinding,
}

impl FocusTrap {
    /// Wire the trap against `document`, or return `None` when the page has
    /// no header.
    #[must_use]
    pub fn attach(document: &Document, config: &ChromeConfig) -> Option<Self> {
        let Some(header) = dom::query(document, &config.header_selector) else {
            log::debug!("header not found; focus trap inactive");
            return None;
        };
        let open_class = config.menu_open_class.clone();
        let doc = document.clone();

        let binding = EventBinding::listen(
            document,
            "keydown",
            Box::new(move |event| {
                let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if key_event.key() != "Tab" || !header.class_list().contains(&open_class) {
                    return;
                }
                let focusables = dom::focusables_in(&header);
                if focusables.is_empty() {
                    return;
                }
                let position = doc.active_element().and_then(|active| {
                    focusables.iter().position(|el| {
                        let el: &Element = el;
                        *el == active
                    })
                });
                let Some(target) = wrap_target(position, focusables.len(), key_event.shift_key())
                else {
                    return;
                };
                event.prevent_default();
                let _ = focusables[target].focus();
            }),
        );

        log::debug!("focus trap attached");
        Some(Self { binding })
    }

    /// Remove the trap's listener.
    pub fn detach(self) {
        drop(self);
    }

    /// Leak the listener so the trap stays wired for the page lifetime.
    pub fn forget(self) {
        self.binding.forget();
    }
}
