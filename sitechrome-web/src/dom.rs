//! Browser plumbing shared by the chrome components.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, EventTarget, HtmlElement, Window};

// Elements reachable via sequential keyboard navigation.
const FOCUSABLE_SELECTOR: &str = r#"a,button,[tabindex]:not([tabindex="-1"])"#;

/// Retrieve the global `window` object, absent outside a browser context.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    web_sys::window().and_then(|win| win.document())
}

/// First element matching `selector`, with missing markup and invalid
/// selectors both folding to `None`.
#[must_use]
pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

/// The ordered focusable descendants of `root`, computed fresh per call so
/// content changed after attach is honored.
#[must_use]
pub fn focusables_in(root: &Element) -> Vec<HtmlElement> {
    let Ok(list) = root.query_selector_all(FOCUSABLE_SELECTOR) else {
        return Vec::new();
    };
    let mut focusables = Vec::with_capacity(list.length() as usize);
    for index in 0..list.length() {
        if let Some(el) = list
            .item(index)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        {
            focusables.push(el);
        }
    }
    focusables
}

/// Render a boolean as an ARIA attribute value.
#[must_use]
pub const fn bool_attr(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// A registered DOM event listener.
///
/// Owns the closure for as long as the listener is attached: dropping the
/// binding removes the listener again, [`EventBinding::forget`] leaks it
/// for the page lifetime. Every listener in this crate is registered
/// through here so attach and detach stay symmetric.
pub struct EventBinding {
    target: EventTarget,
    event: &'static str,
    closure: Option<Closure<dyn FnMut(web_sys::Event)>>,
}

impl EventBinding {
    pub fn listen(
        target: &EventTarget,
        event: &'static str,
        handler: Box<dyn FnMut(web_sys::Event)>,
    ) -> Self {
        let closure = Closure::wrap(handler);
        if let Err(err) =
            target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            console_error(&format!(
                "failed to attach {event} listener: {}",
                js_error_message(&err)
            ));
        }
        Self {
            target: target.clone(),
            event,
            closure: Some(closure),
        }
    }

    /// Leak the closure, keeping the listener attached for the page view.
    pub fn forget(mut self) {
        if let Some(closure) = self.closure.take() {
            closure.forget();
        }
    }
}

impl Drop for EventBinding {
    fn drop(&mut self) {
        if let Some(closure) = self.closure.take() {
            let _ = self
                .target
                .remove_event_listener_with_callback(self.event, closure.as_ref().unchecked_ref());
        }
    }
}
