//! Start-up sequencing.
//!
//! Year stamping and the theme attribute run as soon as the module loads.
//! Everything else waits for `DOMContentLoaded`, or runs right away when the
//! document has already been parsed. Each feature is installed on its own;
//! a failure is logged and the next feature still runs. The theme keeps the
//! configuration read at start; the later features use the block as parsed
//! with the rest of the page.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Document;

use crate::config::PageConfig;
use crate::error::PageError;
use crate::theme::{self, PageTheme};
use crate::{animator, dom, lightbox, nav, year};

pub fn run() {
    console_error_panic_hook::set_once();

    let document = match dom::document() {
        Ok(document) => document,
        Err(err) => {
            init_logging(log::Level::Info);
            log::error!("page features not started: {err}");
            return;
        }
    };

    let (config, config_err) = match PageConfig::load(&document) {
        Ok(config) => (config, None),
        Err(err) => (PageConfig::default(), Some(err)),
    };
    init_logging(config.log_level());
    if let Some(err) = config_err {
        log::warn!("page config ignored: {err}");
    }

    let stamped = year::stamp(&document, &config, year::current_year());
    log::debug!("stamped year into {stamped} placeholder(s)");

    let theme = match theme::install(&document, &config) {
        Ok(theme) => Some(theme),
        Err(err) => {
            log::error!("theme not applied: {err}");
            None
        }
    };

    let result = on_ready(&document, move |document| ready(&document, &config, theme.as_ref()));
    report("ready hook", result);
}

fn init_logging(level: log::Level) {
    if console_log::init_with_level(level).is_err() {
        log::debug!("logger already installed");
    }
}

/// Install the features that need the parsed DOM. The config block is read
/// again here, since it may sit after the loader script.
fn ready(document: &Document, early: &PageConfig, theme: Option<&Rc<RefCell<PageTheme>>>) {
    let config = &early.reload_from(document);
    if let Some(theme) = theme {
        report("theme toggle", theme::attach_toggle(document, config, theme));
    }
    report("animator", animator::install(document, config));
    report("nav highlighter", nav::install(document, config));
    report("lightbox", lightbox::install(document, config));
    log::info!("page features ready");
}

fn report<T>(feature: &str, result: Result<T, PageError>) {
    if let Err(err) = result {
        log::error!("{feature} not installed: {err}");
    }
}

/// Run `f` once the DOM is parsed.
fn on_ready<F>(document: &Document, f: F) -> Result<(), PageError>
where
    F: FnOnce(Document) + 'static,
{
    if document.ready_state() != "loading" {
        f(document.clone());
        return Ok(());
    }

    let mut pending = Some(f);
    let doc = document.clone();
    dom::listen(document, "DOMContentLoaded", move |_| {
        if let Some(f) = pending.take() {
            f(doc.clone());
        }
    })
}
