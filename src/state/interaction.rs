//! Clap/refill toggle state for feed items.
//!
//! DESIGN
//! ======
//! Toggle state is keyed by a stable scope key and held here rather than in
//! markup attributes. The base count is recorded on the first toggle and is
//! authoritative from then on; the displayed count is always derived from it,
//! never read back from rendered text.
//!
//! Markup seeds a scope exactly once, through [`MarkupSeed`].

#[cfg(test)]
#[path = "interaction_test.rs"]
mod interaction_test;

use std::collections::HashMap;

use crate::util::count_text::{parse_count_attr, parse_count_digits};

/// Active flag on a button that has no enclosing scope.
pub const BUTTON_ACTIVE_ATTR: &str = "data-active";
/// Key stamped on scopes that carry no item id.
pub const SCOPE_KEY_ATTR: &str = "data-interaction-key";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InteractionKind {
    Clap,
    Refill,
}

impl InteractionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Clap => "clap",
            Self::Refill => "refill",
        }
    }

    /// Classes applied to the button while the interaction is active.
    pub fn active_classes(self) -> &'static [&'static str] {
        match self {
            Self::Clap => &["text-blue-400", "bg-blue-500/10", "border", "border-blue-500/30"],
            Self::Refill => &["text-green-400", "bg-green-500/10", "border", "border-green-500/30"],
        }
    }

    /// Scope attribute mirroring the recorded base count.
    pub fn base_attr(self) -> &'static str {
        match self {
            Self::Clap => "data-clap-base",
            Self::Refill => "data-refill-base",
        }
    }

    /// Scope attribute mirroring the active flag.
    pub fn active_attr(self) -> &'static str {
        match self {
            Self::Clap => "data-clap-active",
            Self::Refill => "data-refill-active",
        }
    }
}

/// Identity of the element that scopes a toggle.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScopeKey {
    /// Feed item carrying a `data-lit-id`.
    Item(String),
    /// Any other scope, by the key stamped on it at first toggle.
    Stamped(String),
}

impl ScopeKey {
    /// Key for a scope, preferring its item id over a stamped key.
    /// Empty values count as absent.
    pub fn from_markup(item_id: Option<&str>, stamped: Option<&str>) -> Option<Self> {
        match (item_id, stamped) {
            (Some(id), _) if !id.is_empty() => Some(Self::Item(id.to_owned())),
            (_, Some(key)) if !key.is_empty() => Some(Self::Stamped(key.to_owned())),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToggleState {
    pub active: bool,
    pub base: u64,
}

impl ToggleState {
    pub fn displayed(self) -> u64 {
        self.base.saturating_add(u64::from(self.active))
    }
}

/// Outcome of a toggle, ready to be mirrored to the DOM.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub active: bool,
    pub base: u64,
    pub count: u64,
    /// `true` on the first toggle of this scope, when the base was just recorded.
    pub base_recorded: bool,
}

/// Raw markup read before the first toggle of a scope.
#[derive(Clone, Copy, Debug, Default)]
pub struct MarkupSeed<'a> {
    /// The scope's `data-<kind>-active`, or the button's `data-active` when unscoped.
    pub active: Option<&'a str>,
    /// The scope's `data-<kind>-base`. Always `None` when unscoped.
    pub scope_base: Option<&'a str>,
    pub button_base: Option<&'a str>,
    pub button_count: Option<&'a str>,
    /// Rendered count text.
    pub text: Option<&'a str>,
}

impl MarkupSeed<'_> {
    /// Base comes from the first attribute that parses, in order scope base,
    /// button base, button count; otherwise every digit of the text, else 0.
    pub fn state(&self) -> ToggleState {
        let active = self.active.is_some_and(|v| v == "true");
        let base = [self.scope_base, self.button_base, self.button_count]
            .into_iter()
            .flatten()
            .find_map(parse_count_attr)
            .unwrap_or_else(|| self.text.map_or(0, parse_count_digits));
        ToggleState { active, base }
    }
}

#[derive(Clone, Debug, Default)]
pub struct InteractionStore {
    entries: HashMap<(ScopeKey, InteractionKind), ToggleState>,
}

impl InteractionStore {
    pub fn get(&self, scope: &ScopeKey, kind: InteractionKind) -> Option<ToggleState> {
        self.entries.get(&(scope.clone(), kind)).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flip the active flag for `scope`/`kind`.
    ///
    /// `seed` runs only when nothing is recorded yet and supplies the state
    /// found in the markup (pre-set active flag and base count).
    pub fn toggle(&mut self, scope: ScopeKey, kind: InteractionKind, seed: impl FnOnce() -> ToggleState) -> ToggleOutcome {
        let mut base_recorded = false;
        let entry = self.entries.entry((scope, kind)).or_insert_with(|| {
            base_recorded = true;
            seed()
        });
        entry.active = !entry.active;
        ToggleOutcome { active: entry.active, base: entry.base, count: entry.displayed(), base_recorded }
    }
}
