//! Typed `data-action` identifiers.
//!
//! DESIGN
//! ======
//! Markup names what a control does with a `data-action` string. The string is
//! resolved once into [`Action`] at the dispatcher, and every handler below it
//! matches on the enum instead of comparing strings.

#[cfg(test)]
#[path = "action_test.rs"]
mod action_test;

use crate::state::interaction::InteractionKind;

/// Selector matching any element that carries an action identifier.
pub const ACTION_SELECTOR: &str = "[data-action]";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    ToggleTheme,
    OpenComposer,
    CloseComposer,
    Clap,
    Refill,
}

impl Action {
    pub const ALL: [Self; 5] = [Self::ToggleTheme, Self::OpenComposer, Self::CloseComposer, Self::Clap, Self::Refill];

    /// Resolve a `data-action` value. Unknown identifiers yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "toggle-theme" => Some(Self::ToggleTheme),
            "open-composer" => Some(Self::OpenComposer),
            "close-composer" => Some(Self::CloseComposer),
            "clap" => Some(Self::Clap),
            "refill" => Some(Self::Refill),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ToggleTheme => "toggle-theme",
            Self::OpenComposer => "open-composer",
            Self::CloseComposer => "close-composer",
            Self::Clap => "clap",
            Self::Refill => "refill",
        }
    }

    /// Selector for controls carrying exactly this action.
    pub fn selector(self) -> String {
        format!("[data-action=\"{}\"]", self.as_str())
    }

    /// Feed interaction this action toggles, if it is one.
    pub fn interaction_kind(self) -> Option<InteractionKind> {
        match self {
            Self::Clap => Some(InteractionKind::Clap),
            Self::Refill => Some(InteractionKind::Refill),
            Self::ToggleTheme | Self::OpenComposer | Self::CloseComposer => None,
        }
    }
}
