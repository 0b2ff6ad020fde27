//! Mobile menu controller

use crate::dom::{self, EventBinding};
use sitechrome_core::{ChromeConfig, MenuState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, FocusOptions, KeyboardEvent};

/// Opens and closes the navigation panel.
///
/// Requires the header container, the toggle button and the panel; when any
/// is absent the controller declines to attach and the page keeps its
/// static markup. The open flag lives in [`MenuState`]; the header class,
/// the toggle's `aria-expanded` and the panel's `aria-hidden` are all
/// rendered from that one flag after every transition, so the three can
/// never disagree.
pub struct MenuController {
    inner: Rc<RefCell<MenuInner>>,
    bindings: Vec<EventBinding>,
}

struct MenuInner {
    state: MenuState,
    header: Element,
    toggle: Element,
    panel: Element,
    open_class: String,
}

impl MenuInner {
    fn render(&self) {
        let open = self.state.is_open();
        let classes = self.header.class_list();
        let _ = if open {
            classes.add_1(&self.open_class)
        } else {
            classes.remove_1(&self.open_class)
        };
        let _ = self
            .toggle
            .set_attribute("aria-expanded", dom::bool_attr(open));
        let _ = self
            .panel
            .set_attribute("aria-hidden", dom::bool_attr(!open));
        if open {
            self.focus_first_link();
        }
    }

    // Move focus into the panel without scrolling the viewport. Closing
    // leaves focus where it is.
    fn focus_first_link(&self) {
        let Ok(Some(link)) = self.panel.query_selector("a") else {
            return;
        };
        if let Ok(link) = link.dyn_into::<web_sys::HtmlElement>() {
            let options = FocusOptions::new();
            options.set_prevent_scroll(true);
            let _ = link.focus_with_options(&options);
        }
    }
}

impl MenuController {
    /// Wire the menu against `document`, or return `None` when this page
    /// does not carry the menu markup.
    #[must_use]
    pub fn attach(document: &Document, config: &ChromeConfig) -> Option<Self> {
        let (Some(header), Some(toggle), Some(panel)) = (
            dom::query(document, &config.header_selector),
            dom::query(document, &config.toggle_selector),
            document.get_element_by_id(&config.panel_id),
        ) else {
            log::debug!("menu markup not found; controller inactive");
            return None;
        };

        let inner = Rc::new(RefCell::new(MenuInner {
            state: MenuState::new(),
            header,
            toggle: toggle.clone(),
            panel: panel.clone(),
            open_class: config.menu_open_class.clone(),
        }));

        let mut bindings = Vec::with_capacity(3);

        let on_toggle = {
            let inner = Rc::clone(&inner);
            EventBinding::listen(
                &toggle,
                "click",
                Box::new(move |_event| {
                    let mut menu = inner.borrow_mut();
                    menu.state.toggle();
                    menu.render();
                }),
            )
        };
        bindings.push(on_toggle);

        // Activating a nav link always closes, whatever the prior state.
        let on_panel_click = {
            let inner = Rc::clone(&inner);
            EventBinding::listen(
                &panel,
                "click",
                Box::new(move |event| {
                    if !targets_link(&event) {
                        return;
                    }
                    let mut menu = inner.borrow_mut();
                    menu.state.close();
                    menu.render();
                }),
            )
        };
        bindings.push(on_panel_click);

        // Escape closes from anywhere in the document, even when already
        // closed; the close rendering still runs.
        let on_escape = {
            let inner = Rc::clone(&inner);
            EventBinding::listen(
                document,
                "keydown",
                Box::new(move |event| {
                    let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    if key_event.key() != "Escape" {
                        return;
                    }
                    let mut menu = inner.borrow_mut();
                    menu.state.close();
                    menu.render();
                }),
            )
        };
        bindings.push(on_escape);

        log::debug!("menu controller attached");
        Some(Self { inner, bindings })
    }

    /// Whether the controller currently considers the menu open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.inner.borrow().state.is_open()
    }

    /// Remove the controller's listeners, leaving the page static.
    pub fn detach(self) {
        drop(self);
    }

    /// Leak the listeners so the menu stays wired for the page lifetime.
    pub fn forget(self) {
        for binding in self.bindings {
            binding.forget();
        }
    }
}

fn targets_link(event: &web_sys::Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|el| el.closest("a").ok().flatten())
        .is_some()
}
