//! Small web-sys helpers shared by the page features.
//!
//! Event listeners registered here live for the page lifetime, so their
//! closures are leaked with [`Closure::forget`].

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, NodeList, Window};

use crate::error::PageError;

pub fn window() -> Result<Window, PageError> {
    web_sys::window().ok_or(PageError::NoWindow)
}

pub fn document() -> Result<Document, PageError> {
    window()?.document().ok_or(PageError::NoDocument)
}

/// All elements in `document` matching `selector`, cast to `T`.
///
/// Nodes that are not a `T` are skipped.
pub fn query_all<T: JsCast>(document: &Document, selector: &str) -> Result<Vec<T>, PageError> {
    let list = document.query_selector_all(selector).map_err(PageError::dom)?;
    Ok(collect(&list))
}

/// All descendants of `root` matching `selector`, cast to `T`.
pub fn query_all_in<T: JsCast>(root: &Element, selector: &str) -> Result<Vec<T>, PageError> {
    let list = root.query_selector_all(selector).map_err(PageError::dom)?;
    Ok(collect(&list))
}

/// First descendant of `root` matching `selector`, which must exist.
pub fn require_in<T: JsCast>(root: &Element, selector: &str) -> Result<T, PageError> {
    let Some(el) = root.query_selector(selector).map_err(PageError::dom)? else {
        return Err(PageError::missing(selector));
    };
    el.dyn_into::<T>().map_err(|_| PageError::missing(selector))
}

fn collect<T: JsCast>(list: &NodeList) -> Vec<T> {
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(node) = list.item(i) {
            if let Ok(item) = node.dyn_into::<T>() {
                out.push(item);
            }
        }
    }
    out
}

/// Register `handler` for `event` on `target` for the page lifetime.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), PageError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(PageError::dom)?;
    closure.forget();
    Ok(())
}
