//! Utility helpers shared across controllers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from controller logic
//! to improve reuse and testability.

pub mod count_text;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod preference;
pub mod ripple_math;
