#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod accordion;
pub mod dom;
pub mod focus_trap;
pub mod menu;

pub use accordion::FooterAccordion;
pub use focus_trap::FocusTrap;
pub use menu::MenuController;
pub use sitechrome_core::{AccordionState, ChromeConfig, MenuState, ViewportMode};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    enhance_page();
}

/// Wire every chrome component against the live document for the rest of
/// the page view. Components whose markup is absent on this page stay
/// inert; nothing is reported above debug level.
pub fn enhance_page() {
    let Some(document) = dom::document() else {
        return;
    };
    let config = ChromeConfig::load_from_static();
    if let Some(menu) = MenuController::attach(&document, &config) {
        menu.forget();
    }
    if let Some(trap) = FocusTrap::attach(&document, &config) {
        trap.forget();
    }
    if let Some(accordion) = FooterAccordion::attach(&document, &config) {
        accordion.forget();
    }
}
