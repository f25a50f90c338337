//! # localStorage preferences — browser-side persistence
//!
//! [`LocalStoragePreferences`] is the [`Preferences`] implementation used on
//! the web platform. It is a zero-size handle that looks up
//! `window.localStorage` on every call, so it can be created freely.
//!
//! Errors are swallowed: storage can be disabled (private browsing, blocked
//! cookies) and a missing theme flag just falls back to the system
//! preference.

use crate::prefs::Preferences;

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStoragePreferences;

impl LocalStoragePreferences {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl Preferences for LocalStoragePreferences {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!(key, "localStorage unavailable");
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            tracing::warn!(key, "failed to write localStorage: {e:?}");
        }
    }
}
