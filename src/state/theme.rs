//! Light/dark theme preference.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Effective page theme. Exactly one of the two body classes is applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Resolve the theme at page load.
    ///
    /// A non-empty stored value wins and selects `Light` only when it is the
    /// literal `"light"`. Without one, the OS light-scheme signal decides;
    /// otherwise the page is dark.
    pub fn resolve(stored: Option<&str>, system_prefers_light: bool) -> Self {
        match stored {
            Some(value) if !value.is_empty() => {
                if value == "light" {
                    Self::Light
                } else {
                    Self::Dark
                }
            }
            _ => {
                if system_prefers_light {
                    Self::Light
                } else {
                    Self::Dark
                }
            }
        }
    }

    /// Theme shown by a body that does or does not carry the `light` class.
    pub fn from_body_class(has_light: bool) -> Self {
        if has_light { Self::Light } else { Self::Dark }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Value persisted to local storage; also the body class name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_light(self) -> bool {
        self == Self::Light
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "🌤️",
            Self::Dark => "🌙",
        }
    }
}
