//! WASM entry points and DOM event wiring.
//!
//! Module instantiation (`start`) installs logging, creates the page's single
//! [`ThemeSession`] with the default config, puts DarkReader in auto mode and
//! registers the page-ready handler. Including the script is enough:
//!
//! ```js
//! import init from "./pkg/docs_darkmode_toggle.js";
//! await init();
//! ```
//!
//! Pages that need other keys or another header call `installWithConfig`
//! right after `init()`; it swaps the session's config as long as the
//! page-ready handler has not run yet.
//!
//! Async module init can finish after `load` has fired, so `start` runs the
//! page-ready handler immediately when the document is already complete.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use crate::config::ToggleConfig;
use crate::cookie::DocumentCookieJar;
use crate::error::{ToggleError, js_message};
use crate::header::DomHeader;
use crate::session::ThemeSession;
use crate::theme::{DarkReader, ThemeCall};

type BrowserSession = Rc<RefCell<ThemeSession<DarkReader, DocumentCookieJar>>>;

thread_local! {
    static SESSION: RefCell<Option<BrowserSession>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        // The host page installed its own logger; records go there instead.
        log::debug!("console logger not installed: {err}");
    }

    if let Err(err) = install_default() {
        log::warn!("dark mode toggle not installed: {err}");
        if let Err(err) = ThemeCall::Auto.apply(&mut DarkReader) {
            log::debug!("initial auto theme skipped: {err}");
        }
    }
}

/// Replace the default config with a JSON object; omitted fields keep their
/// defaults. Must be called before the page-ready handler runs.
#[wasm_bindgen(js_name = installWithConfig)]
pub fn install_with_config(config: &str) -> Result<(), JsValue> {
    reconfigure(config).map_err(|err| JsValue::from_str(&err.to_string()))
}

fn reconfigure(raw: &str) -> Result<(), ToggleError> {
    let config = ToggleConfig::from_json(raw)?;
    if !config.keys_match() {
        log::debug!(
            "preference read key {:?} differs from write key {:?}; stored choices will not be restored",
            config.read_key,
            config.write_key
        );
    }
    let session = SESSION.with(|slot| slot.borrow().clone()).ok_or(ToggleError::NotStarted)?;
    session.borrow_mut().reconfigure(config)
}

fn install_default() -> Result<(), ToggleError> {
    let window = web_sys::window().ok_or(ToggleError::NoWindow)?;
    let document = window.document().ok_or(ToggleError::NoDocument)?;
    let jar = DocumentCookieJar::new(&document)?;
    let session: BrowserSession = Rc::new(RefCell::new(ThemeSession::new(DarkReader, jar, ToggleConfig::default())));
    session.borrow_mut().on_script_start();
    SESSION.with(|slot| *slot.borrow_mut() = Some(Rc::clone(&session)));

    if document.ready_state() == "complete" {
        on_page_ready(&document, &session);
        return Ok(());
    }

    let handler = Closure::<dyn FnMut()>::new(move || on_page_ready(&document, &session));
    window
        .add_event_listener_with_callback("load", handler.as_ref().unchecked_ref())
        .map_err(|err| ToggleError::Dom(js_message(&err)))?;
    // The page outlives the handler registration.
    handler.forget();
    Ok(())
}

fn on_page_ready(document: &web_sys::Document, session: &BrowserSession) {
    let selector = session.borrow().config().header_selector.clone();
    let mut host = match DomHeader::locate(document, &selector) {
        Ok(host) => Some(host),
        Err(err) => {
            log::debug!("header lookup failed: {err}");
            None
        }
    };

    let ready = session.borrow_mut().on_page_ready(host.as_mut());
    if let (Some(ready), Some(host)) = (ready, host.as_ref()) {
        if ready.mounted {
            if let Err(err) = attach_click(host, session) {
                log::warn!("dark mode toggle not clickable: {err}");
            }
        }
    }
}

fn attach_click(host: &DomHeader, session: &BrowserSession) -> Result<(), ToggleError> {
    let button = host.toggle_button()?;
    let session = Rc::clone(session);
    let handler = Closure::<dyn FnMut()>::new(move || {
        let next = session.borrow_mut().on_toggle_click();
        log::debug!("dark mode toggled: {next}");
    });
    button
        .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
        .map_err(|err| ToggleError::Dom(js_message(&err)))?;
    handler.forget();
    Ok(())
}
