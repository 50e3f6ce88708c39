//! Client-side decoration for a static website.
//!
//! This crate is compiled to WebAssembly and loaded by plain HTML pages. On
//! start it stamps footer years and applies the persisted theme before the
//! page paints, then installs the remaining features once the DOM is ready.
//! Each feature anchors on optional elements and skips itself quietly when
//! they are absent, so a page can opt into any subset.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`boot`] | Start hook, logging setup, ready-state sequencing |
//! | [`config`] | Page configuration with defaults for the DOM contract |
//! | [`store`] | Preference store over `localStorage` |
//! | [`theme`] | Light/dark theme and the testable [`theme::ThemeController`] |
//! | [`lightbox`] | Gallery overlay and the testable [`lightbox::LightboxCore`] |
//! | [`protect`] | Context-menu, drag and save-shortcut suppression for images |
//! | [`animator`] | Floating SVG shapes driven by `requestAnimationFrame` |
//! | [`nav`] | Active-link highlighting in the main navigation |
//! | [`year`] | Footer year stamping |
//! | [`dom`] | Small web-sys helpers shared by the features |
//! | [`error`] | Crate error type |
//! | [`consts`] | Class names, glyphs, markup and timing constants |

pub mod animator;
pub mod boot;
pub mod config;
pub mod consts;
pub mod dom;
pub mod error;
pub mod lightbox;
pub mod nav;
pub mod protect;
pub mod store;
pub mod theme;
pub mod year;

use wasm_bindgen::prelude::wasm_bindgen;

/// WASM entry point, run by the generated JS glue when the module loads.
#[wasm_bindgen(start)]
pub fn start() {
    boot::run();
}
