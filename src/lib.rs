//! Dark-mode toggle for documentation sites.
//!
//! This crate is compiled to WebAssembly and loaded by a docs page alongside
//! the DarkReader script. It injects a toggle button into the page header,
//! restores the reader's stored preference on load, and persists every toggle
//! to a year-long cookie. DarkReader does all of the actual restyling; this
//! crate only decides which of its calls to make.
//!
//! Everything except the `browser` glue compiles natively so the decision
//! logic is testable without a browser.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`session`] | [`session::ThemeSession`]: page-ready and toggle-click handlers |
//! | [`cookie`] | Cookie parsing/serialization and the [`cookie::PreferenceStore`] |
//! | [`preference`] | The stored [`preference::Preference`] value |
//! | [`theme`] | [`theme::ThemeController`] seam and the DarkReader binding |
//! | [`header`] | Header host seam and button mounting |
//! | [`markup`] | Toggle button HTML fragment |
//! | [`config`] | [`config::ToggleConfig`] and its JSON loader |
//! | [`consts`] | Default keys, selectors and labels |
//! | [`error`] | [`error::ToggleError`] |
//! | `browser` | WASM entry points and DOM event wiring (`browser` feature) |

#[cfg(feature = "browser")]
pub mod browser;
pub mod config;
pub mod consts;
pub mod cookie;
pub mod error;
pub mod header;
pub mod markup;
pub mod preference;
pub mod session;
pub mod theme;
