//! The stored dark-mode preference.

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

use std::fmt;

/// The reader's stored theme choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preference {
    /// Cookie value `"true"`: force dark mode.
    Dark,
    /// Cookie value `"false"`: force light mode.
    Light,
    /// Absent or unrecognized: follow the system color scheme.
    #[default]
    Unset,
}

impl Preference {
    /// Interpret a raw cookie value. Only the exact literals `"true"` and
    /// `"false"` are recognized.
    #[must_use]
    pub fn from_cookie_value(raw: &str) -> Self {
        match raw {
            "true" => Self::Dark,
            "false" => Self::Light,
            _ => Self::Unset,
        }
    }

    /// The value written to the cookie, or `None` for [`Preference::Unset`],
    /// which is never persisted.
    #[must_use]
    pub fn cookie_value(self) -> Option<&'static str> {
        match self {
            Self::Dark => Some("true"),
            Self::Light => Some("false"),
            Self::Unset => None,
        }
    }

    /// Preference recorded after the theme is switched on (`true`) or off.
    #[must_use]
    pub fn from_enabled(enabled: bool) -> Self {
        if enabled { Self::Dark } else { Self::Light }
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Unset => "unset",
        })
    }
}
