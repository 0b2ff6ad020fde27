//! Sitechrome state logic
//!
//! Platform-agnostic state for the sitechrome page-enhancement library:
//! menu open/closed tracking, focus-wrap computation and the footer
//! accordion's per-section state. This crate owns every decision; the web
//! layer only renders the outcome into DOM classes and attributes.

pub mod accordion;
pub mod config;
pub mod focus;
pub mod menu;

// Re-export commonly used types
pub use accordion::{AccordionState, ViewportMode};
pub use config::{ChromeConfig, ConfigError};
pub use focus::wrap_target;
pub use menu::MenuState;
