//! Error type shared by every fallible operation in the crate.

/// Failure raised while reading config, touching the DOM, or calling the
/// theme engine.
///
/// None of these escape to the page: the handlers log them and carry on,
/// leaving the page in whatever theme it already had.
#[derive(Debug, thiserror::Error)]
pub enum ToggleError {
    /// No element matched the configured header selector.
    #[error("header container not found: {selector}")]
    HeaderMissing { selector: String },
    /// `window` is not available (not running in a browser main thread).
    #[error("no window available")]
    NoWindow,
    /// `window.document` is not available.
    #[error("no document available")]
    NoDocument,
    /// The theme engine global is missing or one of its calls threw.
    #[error("theme engine call failed: {0}")]
    Theme(String),
    /// A DOM call threw.
    #[error("dom operation failed: {0}")]
    Dom(String),
    /// Config JSON could not be parsed.
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
    /// The cookie expiry falls outside the representable date range.
    #[error("cookie expiry out of range: {ttl_days} days")]
    ExpiryOutOfRange { ttl_days: u32 },
    /// The page-ready handler already ran; the toggle can no longer be
    /// reconfigured.
    #[error("toggle already mounted")]
    AlreadyMounted,
    /// `installWithConfig` was called before module start created a session.
    #[error("toggle not started")]
    NotStarted,
    /// The host clock reported an instant outside the representable range.
    #[error("clock out of range: {0}")]
    Clock(#[from] time::error::ComponentRange),
}

/// Best-effort text of a thrown JS value.
#[cfg(feature = "browser")]
pub(crate) fn js_message(value: &wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
