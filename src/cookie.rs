//! Preference cookie store.
//!
//! Parsing and serialization are pure functions over the raw
//! `document.cookie` string so they run natively in tests. The
//! [`CookieJar`] trait is the seam between those functions and the browser:
//! [`DocumentCookieJar`] talks to `document.cookie`, [`MemoryCookieJar`]
//! reproduces its assignment semantics in memory.
//!
//! TRADE-OFFS
//! ==========
//! Writes are fire-and-forget. A cookie that cannot be written only costs
//! the reader their preference on the next load, so failures are logged and
//! swallowed rather than surfaced to the click handler.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

use ::cookie::Cookie;
use percent_encoding::percent_decode_str;
use time::{Duration, OffsetDateTime};

use crate::consts::COOKIE_PATH;
use crate::error::ToggleError;
use crate::preference::Preference;

/// Raw access to a client-local cookie store.
pub trait CookieJar {
    /// The full `name=value; name=value` string visible to the page.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store cannot be read.
    fn raw(&self) -> Result<String, ToggleError>;

    /// Assign one serialized cookie (`name=value; Attr=...; Attr=...`).
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store rejects the write.
    fn set_raw(&mut self, cookie: &str) -> Result<(), ToggleError>;
}

/// Return the value of the first `name=` entry in a raw cookie string.
///
/// The whole string is percent-decoded first, then split on `;`. Leading
/// spaces are stripped from each entry before the case-sensitive prefix
/// match. Returns an empty string when no entry matches.
#[must_use]
pub fn lookup(cookies: &str, name: &str) -> String {
    let decoded = percent_decode_str(cookies).decode_utf8_lossy();
    let prefix = format!("{name}=");
    decoded
        .split(';')
        .map(|entry| entry.trim_start_matches(' '))
        .find_map(|entry| entry.strip_prefix(prefix.as_str()))
        .map(str::to_owned)
        .unwrap_or_default()
}

/// Serialize `name=value` with an expiry `ttl_days` after `now` and a
/// site-wide path, e.g. `darkMode=true; Path=/; Expires=Tue, 19 Oct 2027 08:30:00 GMT`.
///
/// # Errors
///
/// Returns [`ToggleError::ExpiryOutOfRange`] if the expiry overflows the
/// supported date range.
pub fn serialize(name: &str, value: &str, ttl_days: u32, now: OffsetDateTime) -> Result<String, ToggleError> {
    let expires = now
        .checked_add(Duration::days(i64::from(ttl_days)))
        .ok_or(ToggleError::ExpiryOutOfRange { ttl_days })?;
    let cookie = Cookie::build((name, value)).path(COOKIE_PATH).expires(expires).build();
    Ok(cookie.to_string())
}

/// Reads and writes named preference values through a [`CookieJar`].
#[derive(Debug, Default)]
pub struct PreferenceStore<J> {
    jar: J,
}

impl<J: CookieJar> PreferenceStore<J> {
    #[must_use]
    pub fn new(jar: J) -> Self {
        Self { jar }
    }

    /// The underlying jar.
    #[must_use]
    pub fn jar(&self) -> &J {
        &self.jar
    }

    /// Value stored under `name`, or an empty string if absent or unreadable.
    #[must_use]
    pub fn read(&self, name: &str) -> String {
        match self.jar.raw() {
            Ok(raw) => lookup(&raw, name),
            Err(err) => {
                log::warn!("cookie read failed: name={name} err={err}");
                String::new()
            }
        }
    }

    /// Store `name=value` for `ttl_days`, logging instead of failing.
    pub fn write(&mut self, name: &str, value: &str, ttl_days: u32) {
        if let Err(err) = now_utc().and_then(|now| self.write_at(name, value, ttl_days, now)) {
            log::warn!("cookie write failed: name={name} err={err}");
        }
    }

    /// Store `name=value` with an expiry computed from an explicit `now`.
    ///
    /// # Errors
    ///
    /// Propagates serialization and jar errors.
    pub fn write_at(&mut self, name: &str, value: &str, ttl_days: u32, now: OffsetDateTime) -> Result<(), ToggleError> {
        let cookie = serialize(name, value, ttl_days, now)?;
        self.jar.set_raw(&cookie)
    }

    /// Stored preference under `name`.
    #[must_use]
    pub fn read_preference(&self, name: &str) -> Preference {
        Preference::from_cookie_value(&self.read(name))
    }

    /// Persist `preference` under `name`. [`Preference::Unset`] is ignored.
    pub fn write_preference(&mut self, name: &str, preference: Preference, ttl_days: u32) {
        if let Some(value) = preference.cookie_value() {
            self.write(name, value, ttl_days);
        }
    }
}

#[cfg(not(feature = "browser"))]
fn now_utc() -> Result<OffsetDateTime, ToggleError> {
    Ok(OffsetDateTime::now_utc())
}

#[cfg(feature = "browser")]
fn now_utc() -> Result<OffsetDateTime, ToggleError> {
    #[allow(clippy::cast_possible_truncation)]
    let millis = js_sys::Date::now() as i128;
    Ok(OffsetDateTime::from_unix_timestamp_nanos(millis * 1_000_000)?)
}

/// In-memory jar with browser assignment semantics: one entry per name,
/// last write wins, attributes are accepted but not echoed back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryCookieJar {
    entries: Vec<(String, String)>,
}

impl MemoryCookieJar {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a jar from a `name=value; name=value` string.
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        let mut jar = Self::new();
        for entry in raw.split(';') {
            jar.assign(entry);
        }
        jar
    }

    /// Number of distinct cookies held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn assign(&mut self, pair: &str) {
        let Some((name, value)) = pair.trim().split_once('=') else {
            return;
        };
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        let value = value.trim().to_owned();
        match self.entries.iter_mut().find(|(existing, _)| existing == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name.to_owned(), value)),
        }
    }
}

impl CookieJar for MemoryCookieJar {
    fn raw(&self) -> Result<String, ToggleError> {
        Ok(self
            .entries
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("; "))
    }

    fn set_raw(&mut self, cookie: &str) -> Result<(), ToggleError> {
        let pair = cookie.split(';').next().unwrap_or_default();
        self.assign(pair);
        Ok(())
    }
}

/// Jar backed by `document.cookie`.
#[cfg(feature = "browser")]
#[derive(Debug, Clone)]
pub struct DocumentCookieJar {
    document: web_sys::HtmlDocument,
}

#[cfg(feature = "browser")]
impl DocumentCookieJar {
    /// Wrap the page document.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::Dom`] if the document is not an HTML document
    /// (and so has no cookie property).
    pub fn new(document: &web_sys::Document) -> Result<Self, ToggleError> {
        use wasm_bindgen::JsCast;

        document
            .clone()
            .dyn_into::<web_sys::HtmlDocument>()
            .map(|document| Self { document })
            .map_err(|_| ToggleError::Dom("document has no cookie store".to_owned()))
    }
}

#[cfg(feature = "browser")]
impl CookieJar for DocumentCookieJar {
    fn raw(&self) -> Result<String, ToggleError> {
        self.document.cookie().map_err(|err| ToggleError::Dom(crate::error::js_message(&err)))
    }

    fn set_raw(&mut self, cookie: &str) -> Result<(), ToggleError> {
        self.document
            .set_cookie(cookie)
            .map_err(|err| ToggleError::Dom(crate::error::js_message(&err)))
    }
}
