//! Browser controllers attached to the static page markup.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each controller owns one feature's state and mirrors it to the DOM. Body
//! clicks reach them through the single [`dispatcher::Dispatcher`]; keyboard,
//! scroll and navigation events are bound by the controller that needs them.

pub mod dispatcher;
pub mod feed_toggle;
pub mod modal;
pub mod nav;
pub mod page_load;
pub mod ripple;
pub mod scroll_reveal;
pub mod theme_switcher;
