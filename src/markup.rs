//! Toggle button markup.
//!
//! The attributes match the header buttons the docs theme already renders
//! (`headerbtn`, Bootstrap tooltip data attributes) so the injected button
//! picks up the theme's styling and tooltip behavior.

#[cfg(test)]
#[path = "markup_test.rs"]
mod markup_test;

use maud::html;

use crate::config::ToggleConfig;

/// Render the button fragment appended to the header container.
#[must_use]
pub fn toggle_button(config: &ToggleConfig) -> String {
    html! {
        button
            type="button"
            class="headerbtn"
            data-toggle="tooltip"
            data-placement="bottom"
            aria-label=(config.label)
            title=""
            data-original-title=(config.label)
            data-darkmode-toggle="" {
            span class="headerbtn__icon-container" {
                i class=(config.icon_class) {}
            }
        }
    }
    .into_string()
}

/// Selector matching the rendered button.
#[must_use]
pub fn toggle_selector() -> String {
    format!("[{}]", crate::consts::TOGGLE_MARKER)
}
