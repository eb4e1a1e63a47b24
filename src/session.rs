//! Page-level toggle session.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `ThemeSession` exists per page view. It owns the theme engine handle,
//! the preference store and the config, and exposes one method per host
//! event: script start, page ready, and toggle click. The header is passed
//! in as a [`HeaderHost`], so the whole page-ready sequence runs natively in
//! tests; the browser module only locates the element and wires listeners.
//!
//! Engine failures are logged and dropped so the page keeps its default
//! theme when DarkReader is missing.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::config::ToggleConfig;
use crate::cookie::{CookieJar, PreferenceStore};
use crate::error::ToggleError;
use crate::header::{self, HeaderHost};
use crate::preference::Preference;
use crate::theme::{ThemeCall, ThemeController};

/// The theme call and preference to persist when the toggle is clicked
/// while dark mode is (`true`) or is not applied.
#[must_use]
pub fn toggle_transition(is_enabled: bool) -> (ThemeCall, Preference) {
    let next = Preference::from_enabled(!is_enabled);
    (ThemeCall::for_preference(next), next)
}

/// Outcome of the page-ready handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageReady {
    /// Whether the toggle button was appended and the header revealed.
    pub mounted: bool,
    /// The theme call made for the stored preference.
    pub call: ThemeCall,
}

pub struct ThemeSession<T, J> {
    theme: T,
    store: PreferenceStore<J>,
    config: ToggleConfig,
    ready: bool,
}

impl<T: ThemeController, J: CookieJar> ThemeSession<T, J> {
    #[must_use]
    pub fn new(theme: T, jar: J, config: ToggleConfig) -> Self {
        Self { theme, store: PreferenceStore::new(jar), config, ready: false }
    }

    #[must_use]
    pub fn config(&self) -> &ToggleConfig {
        &self.config
    }

    /// Replace the config. Only allowed before the page-ready handler ran,
    /// since the mounted button and read key would no longer match it.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::AlreadyMounted`] once the page is ready.
    pub fn reconfigure(&mut self, config: ToggleConfig) -> Result<(), ToggleError> {
        if self.ready {
            return Err(ToggleError::AlreadyMounted);
        }
        self.config = config;
        Ok(())
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    #[must_use]
    pub fn theme(&self) -> &T {
        &self.theme
    }

    #[must_use]
    pub fn store(&self) -> &PreferenceStore<J> {
        &self.store
    }

    /// Script start: follow the system scheme until the page is ready.
    pub fn on_script_start(&mut self) -> ThemeCall {
        self.dispatch(ThemeCall::Auto);
        ThemeCall::Auto
    }

    /// Page ready: mount the toggle into `header` (append, then reveal),
    /// then apply the stored preference. A missing header is logged and
    /// skipped; the preference is applied regardless.
    ///
    /// Runs once per session. Later calls return `None` and touch nothing,
    /// so a second load event cannot mount a second button.
    pub fn on_page_ready<H: HeaderHost + ?Sized>(&mut self, header: Option<&mut H>) -> Option<PageReady> {
        if self.ready {
            log::debug!("page ready already handled");
            return None;
        }
        self.ready = true;

        let mounted = match header {
            Some(host) => match header::mount(host, &self.config) {
                Ok(()) => true,
                Err(err) => {
                    log::warn!("dark mode toggle not mounted: {err}");
                    false
                }
            },
            None => {
                log::warn!("dark mode toggle not mounted: header container not found: {}", self.config.header_selector);
                false
            }
        };
        let call = self.apply_stored_preference();
        Some(PageReady { mounted, call })
    }

    /// Apply the preference stored under the read key.
    pub fn apply_stored_preference(&mut self) -> ThemeCall {
        let stored = self.store.read_preference(&self.config.read_key);
        let call = ThemeCall::for_preference(stored);
        log::debug!("stored={stored} call={call:?}");
        self.dispatch(call);
        call
    }

    /// Toggle click: flip the theme and persist the new preference under the
    /// write key. Returns the persisted preference.
    pub fn on_toggle_click(&mut self) -> Preference {
        let is_enabled = self.theme.is_enabled().unwrap_or_else(|err| {
            log::debug!("theme state unavailable, treating as disabled: {err}");
            false
        });
        let (call, next) = toggle_transition(is_enabled);
        self.dispatch(call);
        self.store.write_preference(&self.config.write_key, next, self.config.ttl_days);
        next
    }

    fn dispatch(&mut self, call: ThemeCall) {
        if let Err(err) = call.apply(&mut self.theme) {
            log::debug!("theme call {call:?} ignored: {err}");
        }
    }
}
