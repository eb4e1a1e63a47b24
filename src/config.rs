//! Toggle configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Defaults reproduce the deployed docs-site behavior. Pages that need a
//! different header, label, or cookie key pass a JSON object to
//! `install_with_config`; omitted fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts;
use crate::error::ToggleError;

/// Everything the toggle needs to know about its host page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToggleConfig {
    /// Cookie key looked up on page load.
    pub read_key: String,
    /// Cookie key written on toggle.
    pub write_key: String,
    /// Cookie lifetime in days.
    pub ttl_days: u32,
    /// CSS selector of the header container.
    pub header_selector: String,
    /// Button aria-label and tooltip.
    pub label: String,
    /// Icon class list.
    pub icon_class: String,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            read_key: consts::READ_KEY.to_owned(),
            write_key: consts::WRITE_KEY.to_owned(),
            ttl_days: consts::TTL_DAYS,
            header_selector: consts::HEADER_SELECTOR.to_owned(),
            label: consts::LABEL.to_owned(),
            icon_class: consts::ICON_CLASS.to_owned(),
        }
    }
}

impl ToggleConfig {
    /// Parse a JSON object, filling omitted fields from the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::Config`] for malformed JSON, unknown fields, or
    /// mistyped values.
    pub fn from_json(raw: &str) -> Result<Self, ToggleError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Whether a stored preference can be found again on the next load.
    #[must_use]
    pub fn keys_match(&self) -> bool {
        self.read_key == self.write_key
    }
}
