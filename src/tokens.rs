//! Design tokens for the CSS utility build.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page's utility CSS framework reads a config object with the palette,
//! spacing, radii, shadows and animation bindings. This module is the single
//! source of that table. It serializes to the framework's expected JSON shape
//! and, in the browser build, is published as `window.TAILWIND_CONFIG`.

#[cfg(test)]
#[path = "tokens_test.rs"]
mod tokens_test;

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

use crate::error::UiError;

/// Global the CSS build looks for.
pub const CONFIG_GLOBAL: &str = "TAILWIND_CONFIG";

type Table = BTreeMap<&'static str, &'static str>;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleTokens {
    pub theme: ThemeSection,
    pub dark_mode: DarkMode,
    /// Globs scanned for class names.
    pub content: Vec<&'static str>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ThemeSection {
    pub extend: ThemeExtend,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeExtend {
    pub colors: Colors,
    pub border_radius: Table,
    pub spacing: Table,
    pub box_shadow: Table,
    pub keyframes: BTreeMap<&'static str, Keyframes>,
    pub animation: BTreeMap<&'static str, Animation>,
    pub transition_timing_function: Table,
    pub font_size: BTreeMap<&'static str, FontSize>,
    pub container: Container,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Colors {
    pub neutral: BTreeMap<u16, &'static str>,
    pub black: &'static str,
    pub white: &'static str,
}

/// Keyframe stops (`"0%"`, `"0%, 100%"`) to CSS declarations.
pub type Keyframes = BTreeMap<&'static str, Table>;

/// Animation shorthand bound to a named keyframe set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Animation {
    pub keyframes: &'static str,
    /// Duration, easing and iteration, e.g. `"0.5s ease-out"`.
    pub timing: &'static str,
}

impl Serialize for Animation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{} {}", self.keyframes, self.timing))
    }
}

/// Font size with its line height; serialized as `[size, { lineHeight }]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FontSize(pub &'static str, pub LineHeight);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineHeight {
    pub line_height: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Container {
    pub center: bool,
    pub padding: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DarkMode {
    /// Dark styles keyed off a `dark` class, which the theme switcher sets.
    Class,
    Media,
}

fn table(pairs: &[(&'static str, &'static str)]) -> Table {
    pairs.iter().copied().collect()
}

fn keyframes(stops: &[(&'static str, &[(&'static str, &'static str)])]) -> Keyframes {
    stops.iter().map(|(stop, decls)| (*stop, table(decls))).collect()
}

fn font(size: &'static str, line_height: &'static str) -> FontSize {
    FontSize(size, LineHeight { line_height })
}

impl StyleTokens {
    /// The Spill page token table.
    pub fn spill() -> Self {
        let neutral = [
            (50, "#fafafa"),
            (100, "#f5f5f5"),
            (200, "#e5e5e5"),
            (300, "#d4d4d4"),
            (400, "#a3a3a3"),
            (500, "#737373"),
            (600, "#525252"),
            (700, "#404040"),
            (800, "#262626"),
            (900, "#171717"),
            (950, "#0a0a0a"),
        ]
        .into_iter()
        .collect();

        let border_radius = table(&[
            ("pill", "9999px"),
            ("bubble", "24px"),
            ("xs", "4px"),
            ("sm", "8px"),
            ("md", "12px"),
            ("lg", "16px"),
            ("xl", "20px"),
        ]);

        let spacing = table(&[
            ("0", "0"),
            ("1", "0.25rem"),
            ("2", "0.5rem"),
            ("3", "0.75rem"),
            ("4", "1rem"),
            ("5", "1.25rem"),
            ("6", "1.5rem"),
            ("8", "2rem"),
            ("10", "2.5rem"),
            ("12", "3rem"),
            ("16", "4rem"),
            ("20", "5rem"),
            ("24", "6rem"),
            ("32", "8rem"),
            ("40", "10rem"),
            ("48", "12rem"),
        ]);

        let box_shadow = table(&[
            ("bubble", "0 4px 16px rgba(0, 0, 0, 0.4)"),
            ("bubble-hover", "0 8px 24px rgba(0, 0, 0, 0.6)"),
            ("glass", "0 8px 32px rgba(0, 0, 0, 0.3)"),
            ("sm", "0 1px 2px rgba(0, 0, 0, 0.3)"),
            ("md", "0 4px 8px rgba(0, 0, 0, 0.4)"),
            ("lg", "0 10px 20px rgba(0, 0, 0, 0.5)"),
            ("xl", "0 20px 40px rgba(0, 0, 0, 0.6)"),
            ("inner", "inset 0 2px 4px rgba(0, 0, 0, 0.4)"),
        ]);

        let frames = BTreeMap::from([
            (
                "fadeInSlide",
                keyframes(&[
                    ("0%", &[("opacity", "0"), ("transform", "translateY(8px)")]),
                    ("100%", &[("opacity", "1"), ("transform", "translateY(0)")]),
                ]),
            ),
            ("fadeIn", keyframes(&[("0%", &[("opacity", "0")]), ("100%", &[("opacity", "1")])])),
            (
                "slideInLeft",
                keyframes(&[
                    ("0%", &[("opacity", "0"), ("transform", "translateX(-16px)")]),
                    ("100%", &[("opacity", "1"), ("transform", "translateX(0)")]),
                ]),
            ),
            (
                "slideInRight",
                keyframes(&[
                    ("0%", &[("opacity", "0"), ("transform", "translateX(16px)")]),
                    ("100%", &[("opacity", "1"), ("transform", "translateX(0)")]),
                ]),
            ),
            (
                "slideInUp",
                keyframes(&[
                    ("0%", &[("opacity", "0"), ("transform", "translateY(16px)")]),
                    ("100%", &[("opacity", "1"), ("transform", "translateY(0)")]),
                ]),
            ),
            ("pulse", keyframes(&[("0%, 100%", &[("opacity", "1")]), ("50%", &[("opacity", "0.5")])])),
            (
                "bounce",
                keyframes(&[
                    ("0%, 100%", &[("transform", "translateY(0)")]),
                    ("50%", &[("transform", "translateY(-10px)")]),
                ]),
            ),
            (
                "shimmer",
                keyframes(&[
                    ("0%", &[("backgroundPosition", "-1000px 0")]),
                    ("100%", &[("backgroundPosition", "1000px 0")]),
                ]),
            ),
        ]);

        let animation = BTreeMap::from([
            ("fade-in-slide", Animation { keyframes: "fadeInSlide", timing: "0.5s ease-out" }),
            ("fade-in", Animation { keyframes: "fadeIn", timing: "0.4s ease-out" }),
            ("slide-in-left", Animation { keyframes: "slideInLeft", timing: "0.4s ease-out" }),
            ("slide-in-right", Animation { keyframes: "slideInRight", timing: "0.4s ease-out" }),
            ("slide-in-up", Animation { keyframes: "slideInUp", timing: "0.4s ease-out" }),
            ("pulse", Animation { keyframes: "pulse", timing: "2s cubic-bezier(0.4, 0, 0.6, 1) infinite" }),
            ("bounce", Animation { keyframes: "bounce", timing: "1s infinite" }),
            ("shimmer", Animation { keyframes: "shimmer", timing: "2s infinite" }),
        ]);

        let transition_timing_function = table(&[
            ("spring", "cubic-bezier(0.34, 1.56, 0.64, 1)"),
            ("bounce", "cubic-bezier(0.68, -0.55, 0.265, 1.55)"),
        ]);

        let font_size = BTreeMap::from([
            ("xs", font("0.75rem", "1rem")),
            ("sm", font("0.875rem", "1.25rem")),
            ("base", font("1rem", "1.5rem")),
            ("lg", font("1.125rem", "1.75rem")),
            ("xl", font("1.25rem", "1.75rem")),
            ("2xl", font("1.5rem", "2rem")),
            ("3xl", font("1.875rem", "2.25rem")),
            ("4xl", font("2.25rem", "2.5rem")),
            ("5xl", font("3rem", "1")),
        ]);

        Self {
            theme: ThemeSection {
                extend: ThemeExtend {
                    colors: Colors { neutral, black: "#000000", white: "#ffffff" },
                    border_radius,
                    spacing,
                    box_shadow,
                    keyframes: frames,
                    animation,
                    transition_timing_function,
                    font_size,
                    container: Container { center: true, padding: "1rem" },
                },
            },
            dark_mode: DarkMode::Class,
            content: vec!["./**/*.html", "./assets/js/**/*.js"],
        }
    }

    /// Animation names whose keyframe set is not declared.
    pub fn dangling_animations(&self) -> Vec<&'static str> {
        let extend = &self.theme.extend;
        extend
            .animation
            .iter()
            .filter(|(_, anim)| !extend.keyframes.contains_key(anim.keyframes))
            .map(|(name, _)| *name)
            .collect()
    }

    pub fn to_value(&self) -> Result<serde_json::Value, UiError> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_json(&self) -> Result<String, UiError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Assign the token table to `window.TAILWIND_CONFIG`.
    #[cfg(feature = "hydrate")]
    pub fn publish(&self) -> Result<(), UiError> {
        let window = crate::util::dom::window()?;
        let value = js_sys::JSON::parse(&self.to_json()?)?;
        js_sys::Reflect::set(&window, &wasm_bindgen::JsValue::from_str(CONFIG_GLOBAL), &value)?;
        log::debug!("published style tokens to window.{CONFIG_GLOBAL}");
        Ok(())
    }
}
