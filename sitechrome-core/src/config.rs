//! Chrome configuration
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_CHROME_DATA: &str =
    include_str!("../../sitechrome-web/static/assets/data/chrome.json");

/// Selectors, class names and the mobile breakpoint the library operates on.
///
/// The defaults describe the host page contract; a page with different
/// markup supplies its own values through the embedded asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChromeConfig {
    #[serde(default = "default_breakpoint_px")]
    pub breakpoint_px: u32,
    #[serde(default = "default_header_selector")]
    pub header_selector: String,
    #[serde(default = "default_toggle_selector")]
    pub toggle_selector: String,
    #[serde(default = "default_panel_id")]
    pub panel_id: String,
    #[serde(default = "default_menu_open_class")]
    pub menu_open_class: String,
    #[serde(default = "default_footer_section_selector")]
    pub footer_section_selector: String,
    #[serde(default = "default_footer_title_selector")]
    pub footer_title_selector: String,
    #[serde(default = "default_footer_open_class")]
    pub footer_open_class: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: default_breakpoint_px(),
            header_selector: default_header_selector(),
            toggle_selector: default_toggle_selector(),
            panel_id: default_panel_id(),
            menu_open_class: default_menu_open_class(),
            footer_section_selector: default_footer_section_selector(),
            footer_title_selector: default_footer_title_selector(),
            footer_open_class: default_footer_open_class(),
        }
    }
}

impl ChromeConfig {
    /// Parse a configuration from JSON.
    ///
    /// # Errors
    /// Returns an error when the input is not valid JSON for this shape.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn load_from_static() -> Self {
        serde_json::from_str(DEFAULT_CHROME_DATA).unwrap_or_default()
    }

    /// The media condition separating mobile from desktop behavior.
    #[must_use]
    pub fn media_query(&self) -> String {
        format!("(max-width: {}px)", self.breakpoint_px)
    }
}

fn default_breakpoint_px() -> u32 {
    768
}

fn default_header_selector() -> String {
    ".header".to_owned()
}

fn default_toggle_selector() -> String {
    ".header__menu-toggle".to_owned()
}

fn default_panel_id() -> String {
    "primary-nav".to_owned()
}

fn default_menu_open_class() -> String {
    "header--open".to_owned()
}

fn default_footer_section_selector() -> String {
    ".footer__section".to_owned()
}

fn default_footer_title_selector() -> String {
    ".footer__title".to_owned()
}

fn default_footer_open_class() -> String {
    "footer__section--open".to_owned()
}
