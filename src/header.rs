//! Header container host.
//!
//! The docs theme renders the header region hidden (opacity 0) so the
//! toggle does not pop in after load. Mounting appends the button and then
//! reveals the region.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use crate::config::ToggleConfig;
use crate::error::ToggleError;
use crate::markup;

/// The header element the toggle is mounted into.
pub trait HeaderHost {
    /// Append an HTML fragment after the existing children.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::Dom`] if the fragment cannot be inserted.
    fn append_html(&mut self, html: &str) -> Result<(), ToggleError>;

    /// Make the header fully opaque.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::Dom`] if the style cannot be set.
    fn reveal(&mut self) -> Result<(), ToggleError>;
}

/// Append the toggle button to `header`, then reveal it.
///
/// # Errors
///
/// Returns the first host error; the header stays hidden if the append fails.
pub fn mount<H: HeaderHost + ?Sized>(header: &mut H, config: &ToggleConfig) -> Result<(), ToggleError> {
    header.append_html(&markup::toggle_button(config))?;
    header.reveal()
}

/// A header element found in the live document.
#[cfg(feature = "browser")]
#[derive(Debug, Clone)]
pub struct DomHeader {
    element: web_sys::HtmlElement,
}

#[cfg(feature = "browser")]
impl DomHeader {
    /// Find the first element matching `selector`.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::HeaderMissing`] if nothing matches, or
    /// [`ToggleError::Dom`] if the selector is invalid or the match is not
    /// an HTML element.
    pub fn locate(document: &web_sys::Document, selector: &str) -> Result<Self, ToggleError> {
        use wasm_bindgen::JsCast;

        let element = document
            .query_selector(selector)
            .map_err(|err| ToggleError::Dom(crate::error::js_message(&err)))?
            .ok_or_else(|| ToggleError::HeaderMissing { selector: selector.to_owned() })?;
        element
            .dyn_into::<web_sys::HtmlElement>()
            .map(|element| Self { element })
            .map_err(|_| ToggleError::Dom(format!("{selector} is not an HTML element")))
    }

    /// The injected toggle button.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::Dom`] if the button has not been mounted.
    pub fn toggle_button(&self) -> Result<web_sys::Element, ToggleError> {
        let selector = markup::toggle_selector();
        self.element
            .query_selector(&selector)
            .map_err(|err| ToggleError::Dom(crate::error::js_message(&err)))?
            .ok_or_else(|| ToggleError::Dom(format!("{selector} not mounted")))
    }
}

#[cfg(feature = "browser")]
impl HeaderHost for DomHeader {
    fn append_html(&mut self, html: &str) -> Result<(), ToggleError> {
        self.element
            .insert_adjacent_html("beforeend", html)
            .map_err(|err| ToggleError::Dom(crate::error::js_message(&err)))
    }

    fn reveal(&mut self) -> Result<(), ToggleError> {
        self.element
            .style()
            .set_property("opacity", "1")
            .map_err(|err| ToggleError::Dom(crate::error::js_message(&err)))
    }
}
