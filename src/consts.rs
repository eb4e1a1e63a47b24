//! Default values for [`crate::config::ToggleConfig`].

// ── Cookie ──────────────────────────────────────────────────────

/// Key the stored preference is looked up under on page load.
///
/// Differs in case from [`WRITE_KEY`], so a stored choice is never found
/// again by a case-sensitive lookup. Kept as deployed; configure both keys
/// identically to honor stored preferences.
pub const READ_KEY: &str = "darkmode";

/// Key a toggle click persists the preference under.
pub const WRITE_KEY: &str = "darkMode";

/// Lifetime of the preference cookie, in days.
pub const TTL_DAYS: u32 = 365;

/// Path scope of the preference cookie.
pub const COOKIE_PATH: &str = "/";

// ── Header ──────────────────────────────────────────────────────

/// Header region the toggle button is appended to.
pub const HEADER_SELECTOR: &str = ".header-article__right";

/// Accessible label and tooltip text of the toggle button.
pub const LABEL: &str = "Toggle dark mode";

/// Font Awesome icon class shown inside the button.
pub const ICON_CLASS: &str = "fas fa-moon";

/// Marker attribute used to find the injected button again.
pub const TOGGLE_MARKER: &str = "data-darkmode-toggle";
