//! # Theme preference
//!
//! The only state the browser persists is a single `theme` flag. Storage is
//! abstracted behind [`Preferences`] so the resolution and toggle rules can be
//! tested against [`crate::MemoryPreferences`]; the web build uses
//! `LocalStoragePreferences` over `window.localStorage`.

pub const THEME_KEY: &str = "theme";

/// A string key-value store.
///
/// Writes are best-effort: a full or disabled storage silently keeps the old
/// value.
pub trait Preferences {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// A saved `"dark"` wins; any other saved value means light. With nothing
    /// saved, follow the system colour scheme.
    pub fn resolve(saved: Option<&str>, system_prefers_dark: bool) -> Self {
        match saved {
            Some("dark") => Theme::Dark,
            Some(s) if !s.is_empty() => Theme::Light,
            _ if system_prefers_dark => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Theme::Dark
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Read the saved theme, falling back to the system preference.
pub fn load_theme(prefs: &impl Preferences, system_prefers_dark: bool) -> Theme {
    let saved = prefs.get(THEME_KEY);
    Theme::resolve(saved.as_deref(), system_prefers_dark)
}

/// Flip `current`, persist the result, and return it.
pub fn toggle_theme(prefs: &impl Preferences, current: Theme) -> Theme {
    let next = current.toggled();
    prefs.set(THEME_KEY, next.as_str());
    tracing::info!(theme = next.as_str(), "theme changed");
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryPreferences;

    #[test]
    fn test_resolve() {
        assert_eq!(Theme::resolve(Some("dark"), false), Theme::Dark);
        assert_eq!(Theme::resolve(Some("light"), true), Theme::Light);
        assert_eq!(Theme::resolve(None, true), Theme::Dark);
        assert_eq!(Theme::resolve(None, false), Theme::Light);
        assert_eq!(Theme::resolve(Some(""), true), Theme::Dark);
    }

    #[test]
    fn test_toggle_persists() {
        let prefs = MemoryPreferences::new();
        let theme = load_theme(&prefs, false);
        assert_eq!(theme, Theme::Light);

        let theme = toggle_theme(&prefs, theme);
        assert!(theme.is_dark());
        assert_eq!(prefs.get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(load_theme(&prefs, false), Theme::Dark);

        let theme = toggle_theme(&prefs, theme);
        assert_eq!(theme, Theme::Light);
        assert_eq!(load_theme(&prefs, true), Theme::Light);
    }
}
