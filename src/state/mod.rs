//! Page-local interaction state.
//!
//! DESIGN
//! ======
//! State is split by feature (`theme`, `modal`, `interaction`, etc.) and kept
//! free of DOM types so each model can be unit-tested natively. Browser
//! controllers in `components` own one instance each and mirror it to markup.

pub mod interaction;
pub mod modal;
pub mod nav;
pub mod reveal;
pub mod theme;
