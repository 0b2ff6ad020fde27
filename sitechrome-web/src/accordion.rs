//! Footer accordion, active below the mobile breakpoint

use crate::dom::{self, EventBinding};
use sitechrome_core::{AccordionState, ChromeConfig, ViewportMode};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, MediaQueryListEvent};

/// Makes footer sections collapsible while the viewport is at or below the
/// breakpoint, and static and expanded above it.
///
/// The handler pair attached to each title during mobile mode lives in an
/// explicit per-section table owned by this component, never on the
/// elements themselves. Entering a mode drops any previous pair before
/// binding anew, so repeated breakpoint crossings never stack listeners.
pub struct FooterAccordion {
    inner: Rc<RefCell<AccordionInner>>,
    media: Option<EventBinding>,
}

struct AccordionInner {
    state: AccordionState,
    sections: Vec<SectionDom>,
    open_class: String,
}

struct SectionDom {
    container: Element,
    title: Option<HtmlElement>,
    handlers: Vec<EventBinding>,
}

impl FooterAccordion {
    /// Wire the accordion against `document`, or return `None` when the
    /// page has no footer sections (or no usable media query support).
    #[must_use]
    pub fn attach(document: &Document, config: &ChromeConfig) -> Option<Self> {
        let list = document
            .query_selector_all(&config.footer_section_selector)
            .ok()?;
        if list.length() == 0 {
            log::debug!("footer markup not found; accordion inactive");
            return None;
        }

        let mut sections = Vec::with_capacity(list.length() as usize);
        for index in 0..list.length() {
            let Some(container) = list
                .item(index)
                .and_then(|node| node.dyn_into::<Element>().ok())
            else {
                continue;
            };
            // Sections without a title are carried but never rendered or
            // bound.
            let title = container
                .query_selector(&config.footer_title_selector)
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<HtmlElement>().ok());
            sections.push(SectionDom {
                container,
                title,
                handlers: Vec::new(),
            });
        }

        let mql = dom::window()?
            .match_media(&config.media_query())
            .ok()
            .flatten()?;

        let inner = Rc::new(RefCell::new(AccordionInner {
            state: AccordionState::new(sections.len()),
            sections,
            open_class: config.footer_open_class.clone(),
        }));

        let media = {
            let weak = Rc::downgrade(&inner);
            EventBinding::listen(
                &mql,
                "change",
                Box::new(move |event| {
                    let Some(inner) = weak.upgrade() else {
                        return;
                    };
                    let Some(change) = event.dyn_ref::<MediaQueryListEvent>() else {
                        return;
                    };
                    apply_mode(&inner, ViewportMode::from_media_matches(change.matches()));
                }),
            )
        };

        apply_mode(&inner, ViewportMode::from_media_matches(mql.matches()));

        log::debug!("footer accordion attached");
        Some(Self {
            inner,
            media: Some(media),
        })
    }

    /// Apply a viewport mode directly, exactly as the media-query listener
    /// does on a breakpoint crossing.
    pub fn set_mode(&self, mode: ViewportMode) {
        apply_mode(&self.inner, mode);
    }

    /// Remove the media-query listener and every section handler.
    pub fn detach(self) {
        drop(self);
    }

    /// Leak the listeners so the accordion stays wired for the page
    /// lifetime. Handler pairs created by later breakpoint crossings stay
    /// owned by the leaked section table.
    pub fn forget(self) {
        let Self { inner, media } = self;
        if let Some(binding) = media {
            binding.forget();
        }
        std::mem::forget(inner);
    }
}

fn apply_mode(inner: &Rc<RefCell<AccordionInner>>, mode: ViewportMode) {
    let mut acc = inner.borrow_mut();
    acc.state.set_mode(mode);
    for index in 0..acc.sections.len() {
        let Some(title) = acc.sections[index].title.clone() else {
            continue;
        };
        // Drop the handler pair from any previous mobile entry before
        // rendering; re-entering a mode must never stack listeners.
        acc.sections[index].handlers.clear();
        render_section(&acc, index);
        if mode == ViewportMode::Mobile {
            acc.sections[index].handlers = bind_title(inner, &title, index);
        }
    }
    log::debug!("footer accordion entered {mode:?} mode");
}

fn bind_title(
    inner: &Rc<RefCell<AccordionInner>>,
    title: &HtmlElement,
    index: usize,
) -> Vec<EventBinding> {
    let on_click = {
        let weak = Rc::downgrade(inner);
        EventBinding::listen(
            title,
            "click",
            Box::new(move |_event| {
                if let Some(inner) = weak.upgrade() {
                    toggle_section(&inner, index);
                }
            }),
        )
    };
    let on_key = {
        let weak = Rc::downgrade(inner);
        EventBinding::listen(
            title,
            "keydown",
            Box::new(move |event| {
                let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                let key = key_event.key();
                if key != "Enter" && key != " " {
                    return;
                }
                event.prevent_default();
                if let Some(inner) = weak.upgrade() {
                    toggle_section(&inner, index);
                }
            }),
        )
    };
    vec![on_click, on_key]
}

fn toggle_section(inner: &Rc<RefCell<AccordionInner>>, index: usize) {
    let mut acc = inner.borrow_mut();
    if acc.state.toggle(index).is_none() {
        return;
    }
    render_section(&acc, index);
}

fn render_section(acc: &AccordionInner, index: usize) {
    let Some(section) = acc.sections.get(index) else {
        return;
    };
    let Some(title) = &section.title else {
        return;
    };
    let expanded = acc.state.is_expanded(index);
    let _ = title.set_attribute("aria-expanded", dom::bool_attr(expanded));
    let classes = section.container.class_list();
    let _ = if expanded {
        classes.add_1(&acc.open_class)
    } else {
        classes.remove_1(&acc.open_class)
    };
}
