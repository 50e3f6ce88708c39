//! Active-link marker for the main navigation.
//!
//! Purely cosmetic: the click still follows the link, and the marker is not
//! remembered across page loads.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use std::rc::Rc;

use web_sys::{Document, Element};

use crate::config::PageConfig;
use crate::consts::ACTIVE_CLASS;
use crate::dom;
use crate::error::PageError;

/// Marker state for `count` links after link `clicked` is activated.
#[must_use]
pub fn active_flags(count: usize, clicked: usize) -> Vec<bool> {
    (0..count).map(|i| i == clicked).collect()
}

/// Bind every nav link. Returns how many links were found.
pub fn install(document: &Document, config: &PageConfig) -> Result<usize, PageError> {
    let links: Rc<Vec<Element>> = Rc::new(dom::query_all(document, &config.nav_link_selector)?);
    for (index, link) in links.iter().enumerate() {
        let siblings = Rc::clone(&links);
        dom::listen(link, "click", move |_| activate(&siblings, index))?;
    }
    log::debug!("nav highlighter bound {} link(s)", links.len());
    Ok(links.len())
}

fn activate(links: &[Element], clicked: usize) {
    for (link, active) in links.iter().zip(active_flags(links.len(), clicked)) {
        if let Err(err) = link.class_list().toggle_with_force(ACTIVE_CLASS, active) {
            log::error!("nav marker not updated: {}", PageError::dom(err));
        }
    }
}
