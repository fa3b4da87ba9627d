//! # spill-ui
//!
//! WASM interactivity layer for the statically rendered Spill page.
//! Attaches to server-less markup at load time and drives theme switching,
//! the composer modal, clap/refill feed toggles, navigation highlighting and
//! reveal animations. Also owns the design-token table consumed by the CSS
//! utility build.
//!
//! Pure state and parsing live in `action`, `state`, `tokens` and `util` and
//! build on any target. Browser glue (`app`, `components`) is compiled only
//! with the `hydrate` feature.

pub mod action;
pub mod config;
pub mod error;
pub mod state;
pub mod tokens;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod app;
#[cfg(feature = "hydrate")]
pub mod components;
