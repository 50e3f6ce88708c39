//! Footer year stamping.

use js_sys::Date;
use web_sys::Document;

use crate::config::PageConfig;

/// Current calendar year from the browser clock.
#[must_use]
pub fn current_year() -> u32 {
    Date::new_0().get_full_year()
}

/// Write `year` into each placeholder present on the page.
pub fn stamp(document: &Document, config: &PageConfig, year: u32) -> usize {
    let text = year.to_string();
    let mut stamped = 0;
    for id in &config.year_ids {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(&text));
            stamped += 1;
        }
    }
    stamped
}
