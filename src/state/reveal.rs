//! One-shot reveal bookkeeping for scroll and page-load animations.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::HashSet;

pub const ANIMATE_SELECTOR: &str = "[data-animate]";
pub const ANIMATE_ON_LOAD_SELECTOR: &str = "[data-animate-on-load], [data-animate-on-ready]";
pub const REVEAL_CLASS: &str = "fade-slide-in";
pub const PAGE_READY_CLASS: &str = "spill-page-ready";

/// Indices of observed elements that have already been revealed.
#[derive(Clone, Debug, Default)]
pub struct RevealSet {
    revealed: HashSet<usize>,
}

impl RevealSet {
    /// Record an intersection for `index`. Returns `true` only the first time
    /// the element becomes visible.
    pub fn on_intersection(&mut self, index: usize, is_intersecting: bool) -> bool {
        is_intersecting && self.revealed.insert(index)
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}
