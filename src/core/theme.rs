//! Theme preference and its initialization precedence.

use std::fmt;

/// UI theme variant.
///
/// The active variant gets full visual emphasis in the theme selector;
/// the inactive one is dimmed. That emphasis is derived data, so
/// adapters just compare against the controller's current theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Stable lowercase name, matching the persisted format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted theme name.
    ///
    /// Unrecognized names yield `None`, so a malformed stored value
    /// falls through to the initialization defaults.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Resolve the startup theme.
    ///
    /// An explicit saved preference wins, then the OS-level dark-mode
    /// signal, then `Light`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tally::core::Theme;
    ///
    /// assert_eq!(Theme::resolve(Some(Theme::Light), true), Theme::Light);
    /// assert_eq!(Theme::resolve(None, true), Theme::Dark);
    /// assert_eq!(Theme::resolve(None, false), Theme::Light);
    /// ```
    pub fn resolve(saved: Option<Theme>, prefers_dark: bool) -> Theme {
        match saved {
            Some(theme) => theme,
            None if prefers_dark => Theme::Dark,
            None => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
