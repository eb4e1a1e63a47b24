//! Theme engine seam.
//!
//! The page loads DarkReader as a plain script and exposes it as the global
//! `DarkReader`. This crate never restyles anything itself; it only chooses
//! between the engine's `enable`, `disable` and `auto` calls.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::error::ToggleError;
use crate::preference::Preference;

/// The operations this crate needs from a dark-mode engine.
pub trait ThemeController {
    /// Force dark mode on.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::Theme`] if the engine is unavailable or throws.
    fn enable(&mut self) -> Result<(), ToggleError>;

    /// Force dark mode off.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::Theme`] if the engine is unavailable or throws.
    fn disable(&mut self) -> Result<(), ToggleError>;

    /// Follow the system color scheme.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::Theme`] if the engine is unavailable or throws.
    fn auto(&mut self) -> Result<(), ToggleError>;

    /// Whether dark mode is currently applied.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::Theme`] if the engine is unavailable or throws.
    fn is_enabled(&self) -> Result<bool, ToggleError>;
}

/// One call into the theme engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeCall {
    Enable,
    Disable,
    Auto,
}

impl ThemeCall {
    /// The call that applies a stored preference on page load.
    #[must_use]
    pub fn for_preference(preference: Preference) -> Self {
        match preference {
            Preference::Dark => Self::Enable,
            Preference::Light => Self::Disable,
            Preference::Unset => Self::Auto,
        }
    }

    /// Invoke this call on `theme`.
    ///
    /// # Errors
    ///
    /// Propagates the engine's error.
    pub fn apply<T: ThemeController + ?Sized>(self, theme: &mut T) -> Result<(), ToggleError> {
        match self {
            Self::Enable => theme.enable(),
            Self::Disable => theme.disable(),
            Self::Auto => theme.auto(),
        }
    }
}

#[cfg(feature = "browser")]
mod dark_reader {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(catch, js_namespace = DarkReader, js_name = enable)]
        pub fn enable() -> Result<(), JsValue>;

        #[wasm_bindgen(catch, js_namespace = DarkReader, js_name = disable)]
        pub fn disable() -> Result<(), JsValue>;

        #[wasm_bindgen(catch, js_namespace = DarkReader, js_name = auto)]
        pub fn auto() -> Result<(), JsValue>;

        #[wasm_bindgen(catch, js_namespace = DarkReader, js_name = isEnabled)]
        pub fn is_enabled() -> Result<bool, JsValue>;
    }
}

/// The page's global `DarkReader` object.
///
/// Every call is wrapped in a JS `try`, so a page that failed to load the
/// engine yields [`ToggleError::Theme`] instead of a trap.
#[cfg(feature = "browser")]
#[derive(Debug, Clone, Copy, Default)]
pub struct DarkReader;

#[cfg(feature = "browser")]
fn theme_error(err: &wasm_bindgen::JsValue) -> ToggleError {
    ToggleError::Theme(crate::error::js_message(err))
}

#[cfg(feature = "browser")]
impl ThemeController for DarkReader {
    fn enable(&mut self) -> Result<(), ToggleError> {
        dark_reader::enable().map_err(|err| theme_error(&err))
    }

    fn disable(&mut self) -> Result<(), ToggleError> {
        dark_reader::disable().map_err(|err| theme_error(&err))
    }

    fn auto(&mut self) -> Result<(), ToggleError> {
        dark_reader::auto().map_err(|err| theme_error(&err))
    }

    fn is_enabled(&self) -> Result<bool, ToggleError> {
        dark_reader::is_enabled().map_err(|err| theme_error(&err))
    }
}
