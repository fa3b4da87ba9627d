//! Error type shared by browser glue and token serialization.
//!
//! DESIGN
//! ======
//! Components never surface these to the page. The entry point logs them per
//! component and moves on, so a broken control degrades to "does nothing".

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum UiError {
    /// No global `window` (not running in a browser main thread).
    #[error("window is not available")]
    NoWindow,

    /// The window has no document.
    #[error("document is not available")]
    NoDocument,

    /// The document has no `<body>` yet.
    #[error("document body is not available")]
    NoBody,

    /// A DOM or JS call threw; the exception rendered to text.
    #[error("js error: {0}")]
    Js(String),

    /// Style tokens could not be serialized.
    #[error("token serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for UiError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        let text = value.as_string().unwrap_or_else(|| format!("{value:?}"));
        Self::Js(text)
    }
}
