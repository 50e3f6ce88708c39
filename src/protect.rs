//! Copy-protection deterrents for gallery images.
//!
//! Suppresses the context menu and drag-start on protected images, the
//! context menu on image targets inside the gallery container, and the
//! Ctrl/Cmd+S save shortcut. This only discourages casual saving; the image
//! URLs remain visible to anyone who opens the developer tools.

#[cfg(test)]
#[path = "protect_test.rs"]
mod protect_test;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, KeyboardEvent};

use crate::consts::PROTECTED_ATTR;
use crate::dom;
use crate::error::PageError;

/// Whether a key press is the browser's "save page" shortcut. Only a
/// lowercase `s` counts, so Ctrl+Shift+S still reaches the browser.
#[must_use]
pub fn is_save_shortcut(key: &str, ctrl: bool, meta: bool) -> bool {
    (ctrl || meta) && key == "s"
}

/// Whether an event target's tag name is an image.
#[must_use]
pub fn is_image_tag(tag_name: &str) -> bool {
    tag_name.eq_ignore_ascii_case("img")
}

/// Protect every image matching `selector`. Safe to call repeatedly.
pub fn guard_images(document: &Document, selector: &str) -> Result<usize, PageError> {
    let images: Vec<Element> = dom::query_all(document, selector)?;
    let mut guarded = 0;
    for image in &images {
        if guard_image(image)? {
            guarded += 1;
        }
    }
    if guarded > 0 {
        log::debug!("protected {guarded} image(s)");
    }
    Ok(guarded)
}

/// Attach the context-menu and drag-start blockers to `image` once.
///
/// Returns `false` when the image was already protected.
pub fn guard_image(image: &Element) -> Result<bool, PageError> {
    if image.has_attribute(PROTECTED_ATTR) {
        return Ok(false);
    }
    dom::listen(image, "contextmenu", |event| event.prevent_default())?;
    dom::listen(image, "dragstart", |event| event.prevent_default())?;
    image.set_attribute(PROTECTED_ATTR, "").map_err(PageError::dom)?;
    Ok(true)
}

/// Block the context menu on images inside `container`, including images
/// whose own listener has not been attached yet.
pub fn guard_container(container: &Element) -> Result<(), PageError> {
    dom::listen(container, "contextmenu", |event| {
        let on_image = event.target().is_some_and(|target| {
            target.dyn_ref::<Element>().is_some_and(|el| is_image_tag(&el.tag_name()))
        });
        if on_image {
            event.prevent_default();
        }
    })
}

/// Swallow Ctrl/Cmd+S for the whole document.
pub fn block_save_shortcut(document: &Document) -> Result<(), PageError> {
    dom::listen(document, "keydown", |event| {
        let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if is_save_shortcut(&key_event.key(), key_event.ctrl_key(), key_event.meta_key()) {
            event.prevent_default();
        }
    })
}
