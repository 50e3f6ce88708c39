//! Light/dark theme with a persisted preference.
//!
//! The theme lives in an attribute on `<html>` (`data-theme` by default) so
//! stylesheets can key off it, and is mirrored into the preference store.
//! The attribute is applied as soon as the module starts, before the toggle
//! button exists, to avoid a flash of the wrong theme.
//!
//! [`ThemeController`] holds the logic and talks to the page through
//! [`ThemeDocument`], so it can be tested without a browser.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element};

use crate::config::PageConfig;
use crate::consts::{MOON_GLYPH, SUN_GLYPH};
use crate::dom;
use crate::error::PageError;
use crate::store::{KeyValueStore, LocalStorage, PreferenceStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored preference. Unknown values are `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The theme a toggle switches to, given the live root attribute.
    ///
    /// A missing attribute counts as light; anything that is not `light`
    /// switches back to light.
    #[must_use]
    pub fn toggled_from(attr: Option<&str>) -> Self {
        match attr.unwrap_or("light") {
            "light" => Self::Dark,
            _ => Self::Light,
        }
    }

    /// Toggle button glyph: moon while light, sun while dark.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => MOON_GLYPH,
            Self::Dark => SUN_GLYPH,
        }
    }
}

/// The parts of the page the theme controller reads and writes.
pub trait ThemeDocument {
    /// Current value of the root theme attribute.
    fn root_theme(&self) -> Option<String>;
    fn set_root_theme(&self, theme: Theme) -> Result<(), PageError>;
    /// Show `glyph` on the toggle control. No-op without a toggle.
    fn set_icon(&self, glyph: &str);
}

pub struct ThemeController<S, D> {
    prefs: PreferenceStore<S>,
    doc: D,
    current: Theme,
}

impl<S: KeyValueStore, D: ThemeDocument> ThemeController<S, D> {
    /// Load the stored preference and apply it to the root element.
    pub fn init(prefs: PreferenceStore<S>, doc: D) -> Self {
        let current = prefs.get().as_deref().and_then(Theme::parse).unwrap_or_default();
        let controller = Self { prefs, doc, current };
        controller.apply(current);
        controller
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn document(&self) -> &D {
        &self.doc
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.doc
    }

    /// Bring the toggle glyph in line with the current theme.
    pub fn sync_icon(&self) {
        self.doc.set_icon(self.current.icon());
    }

    /// Flip the theme read from the live root attribute, then persist it.
    pub fn toggle(&mut self) {
        let live = self.doc.root_theme();
        let next = Theme::toggled_from(live.as_deref());
        log::debug!("theme {} -> {}", live.as_deref().unwrap_or("(unset)"), next.as_str());

        self.current = next;
        self.apply(next);
        self.doc.set_icon(next.icon());
        self.prefs.set(next.as_str());
    }

    fn apply(&self, theme: Theme) {
        if let Err(err) = self.doc.set_root_theme(theme) {
            log::error!("theme attribute not applied: {err}");
        }
    }
}

// =============================================================
// Browser binding
// =============================================================

/// `<html>` plus the toggle button, once the DOM is ready.
pub struct DomThemeDocument {
    root: Element,
    attribute: String,
    toggle: Option<Element>,
}

impl DomThemeDocument {
    pub fn set_toggle(&mut self, toggle: Element) {
        self.toggle = Some(toggle);
    }
}

impl ThemeDocument for DomThemeDocument {
    fn root_theme(&self) -> Option<String> {
        self.root.get_attribute(&self.attribute)
    }

    fn set_root_theme(&self, theme: Theme) -> Result<(), PageError> {
        self.root.set_attribute(&self.attribute, theme.as_str()).map_err(PageError::dom)
    }

    fn set_icon(&self, glyph: &str) {
        if let Some(toggle) = &self.toggle {
            toggle.set_text_content(Some(glyph));
        }
    }
}

pub type PageTheme = ThemeController<LocalStorage, DomThemeDocument>;

/// Apply the stored theme to `<html>`. Runs before the DOM is ready.
pub fn install(document: &Document, config: &PageConfig) -> Result<Rc<RefCell<PageTheme>>, PageError> {
    let root = document.document_element().ok_or_else(|| PageError::missing("html"))?;
    let doc = DomThemeDocument { root, attribute: config.theme_attribute.clone(), toggle: None };
    let prefs = PreferenceStore::new(LocalStorage, config.storage_key.clone());
    let controller = ThemeController::init(prefs, doc);
    log::debug!("theme applied: {}", controller.current().as_str());
    Ok(Rc::new(RefCell::new(controller)))
}

/// Bind the toggle button. A page without one keeps its theme fixed.
pub fn attach_toggle(
    document: &Document,
    config: &PageConfig,
    controller: &Rc<RefCell<PageTheme>>,
) -> Result<(), PageError> {
    let Some(toggle) = document.get_element_by_id(&config.theme_toggle_id) else {
        log::warn!("theme toggle #{} not found", config.theme_toggle_id);
        return Ok(());
    };

    {
        let mut theme = controller.borrow_mut();
        theme.document_mut().set_toggle(toggle.clone());
        theme.sync_icon();
    }

    let controller = Rc::clone(controller);
    dom::listen(&toggle, "click", move |event| {
        event.prevent_default();
        controller.borrow_mut().toggle();
    })
}
