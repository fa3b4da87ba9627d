//! Theme preference persistence.
//!
//! Reads the stored theme from `localStorage` (falling back to the system
//! `prefers-color-scheme` signal) and writes it back on toggle. Requires a
//! browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: storage can be disabled or full. Native builds
//! no-op so the pure theme logic stays testable.

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

use crate::state::theme::Theme;

/// Read the stored theme preference for `key`, if any.
pub fn read_stored(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        match window.local_storage() {
            Ok(Some(storage)) => match storage.get_item(key) {
                Ok(value) => value,
                Err(err) => {
                    log::debug!("theme preference unreadable: {err:?}");
                    None
                }
            },
            _ => None,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Whether the OS reports a light color scheme.
pub fn system_prefers_light() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: light)").unwrap_or(None))
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Resolve the effective theme at load.
pub fn read_preference(key: &str) -> Theme {
    Theme::resolve(read_stored(key).as_deref(), system_prefers_light())
}

/// Persist `theme` under `key`.
pub fn persist(key: &str, theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Ok(Some(storage)) = window.local_storage() {
            if let Err(err) = storage.set_item(key, theme.as_str()) {
                log::warn!("theme preference not saved: {err:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, theme);
    }
}
