//! Page configuration.
//!
//! Every field has a default matching the stock site markup, so most pages
//! carry no configuration at all. A page that renames its anchors can embed
//! a JSON block and override only the fields it needs:
//!
//! ```html
//! <script type="application/json" id="pagekit-config">
//!   { "storage_key": "site-theme", "debug": true }
//! </script>
//! ```
//!
//! The block is read twice. The first read happens as soon as the module
//! runs, so `storage_key`, `theme_attribute`, `year_ids` and `debug` only take
//! effect if the block appears before the loader script. The second read
//! happens once the DOM is parsed and drives every other feature, so the
//! remaining fields work wherever the block sits.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;
use web_sys::Document;

use crate::consts::{CONFIG_ELEMENT_ID, LIGHTBOX_CLASS};
use crate::error::PageError;

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// `localStorage` key holding the theme preference.
    pub storage_key: String,
    /// Attribute on `<html>` carrying the active theme.
    pub theme_attribute: String,
    pub theme_toggle_id: String,
    /// Container that receives the floating shapes.
    pub canvas_id: String,
    /// Elements whose text becomes the current year.
    pub year_ids: Vec<String>,
    pub nav_link_selector: String,
    pub gallery_selector: String,
    /// Thumbnail images, relative to the gallery container.
    pub thumb_selector: String,
    /// Log at debug level instead of info.
    pub debug: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            theme_attribute: DEFAULT_THEME_ATTRIBUTE.to_owned(),
            theme_toggle_id: "theme-toggle".to_owned(),
            canvas_id: "visual-canvas".to_owned(),
            year_ids: vec!["year".to_owned(), "year2".to_owned(), "year3".to_owned()],
            nav_link_selector: ".main-nav .nav-link".to_owned(),
            gallery_selector: ".gallery".to_owned(),
            thumb_selector: ".thumb img".to_owned(),
            debug: false,
        }
    }
}

impl PageConfig {
    /// Parse a JSON configuration block. Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw).map_err(|e| PageError::Config(e.to_string()))
    }

    /// Read the configuration block from `document`, if the page has one.
    pub fn load(document: &Document) -> Result<Self, PageError> {
        match block_text(document) {
            Some(raw) => Self::from_json(&raw),
            None => Ok(Self::default()),
        }
    }

    /// Configuration after re-reading the page's block. No block, or a block
    /// that fails to parse, keeps `self`.
    #[must_use]
    pub fn reload(&self, block: Option<&str>) -> Self {
        let Some(raw) = block else {
            return self.clone();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("page config ignored: {err}");
                self.clone()
            }
        }
    }

    /// [`reload`](Self::reload) from the block currently in `document`.
    #[must_use]
    pub fn reload_from(&self, document: &Document) -> Self {
        self.reload(block_text(document).as_deref())
    }

    #[must_use]
    pub fn log_level(&self) -> log::Level {
        if self.debug { log::Level::Debug } else { log::Level::Info }
    }

    /// Selector covering every image that gets copy protection.
    #[must_use]
    pub fn protected_image_selector(&self) -> String {
        self.gallery_selector
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| format!("{part} img"))
            .chain(std::iter::once(format!(".{LIGHTBOX_CLASS} img")))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn block_text(document: &Document) -> Option<String> {
    document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .map(|el| el.text_content().unwrap_or_default())
}
