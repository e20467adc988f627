//! Light/dark theme state and application.
//!
//! Reads the stored preference from `localStorage`, falling back to the
//! system `prefers-color-scheme` query. Applying a theme sets a
//! `data-theme` attribute on `<html>` and a class on `<body>`; the toggle
//! writes the new preference back. Requires a browser environment; SSR-free
//! native builds no-op.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::util::storage;

/// Application color theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Stored string form (`"light"` / `"dark"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse the stored string form. Unknown values are rejected so a
    /// corrupted preference falls back to the default.
    pub fn parse(raw: &str) -> Option<Theme> {
        match raw {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// Body class applied alongside the `data-theme` attribute.
    pub fn body_class(self) -> &'static str {
        match self {
            Theme::Light => "light-theme",
            Theme::Dark => "dark-theme",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Read the theme preference: stored value first, then the system
/// preference, then light.
pub fn read_preference() -> Theme {
    if let Some(theme) = storage::load_string(storage::THEME_KEY).and_then(|raw| Theme::parse(&raw)) {
        return theme;
    }
    if system_prefers_dark() { Theme::Dark } else { Theme::Light }
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Apply the theme to the document: `data-theme` on `<html>` and a class on
/// `<body>`.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", theme.as_str());
            }
            if let Some(body) = doc.body() {
                body.set_class_name(theme.body_class());
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Toggle the theme, apply it, and persist the new preference.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    storage::save_string(storage::THEME_KEY, next.as_str());
    next
}
