//! Geometry for the click ripple effect.

#[cfg(test)]
#[path = "ripple_math_test.rs"]
mod ripple_math_test;

pub const RIPPLE_SELECTOR: &str = "[data-ripple]";
pub const RIPPLE_CLASS: &str = "ripple";

/// Bounding box of the clicked element in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Square ripple positioned relative to the clicked element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    /// Square covering the element's longer side, centred on the click.
    pub fn at(bounds: Bounds, client_x: f64, client_y: f64) -> Self {
        let size = bounds.width.max(bounds.height);
        Self { size, left: client_x - bounds.left - size / 2.0, top: client_y - bounds.top - size / 2.0 }
    }

    /// CSS `(property, value)` pairs for the ripple span.
    pub fn style(self) -> [(&'static str, String); 4] {
        [
            ("width", px(self.size)),
            ("height", px(self.size)),
            ("left", px(self.left)),
            ("top", px(self.top)),
        ]
    }
}

fn px(v: f64) -> String {
    format!("{v}px")
}
