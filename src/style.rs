use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use crate::dispatch::canonical_key;
use crate::timebase::{resolve_color, OPAQUE_BLACK, OPAQUE_WHITE};

// @module: Style configuration and anchor geometry

// A StyleConfig is the record the preset editor hands to the renderer. Every
// field is optional and defaulted where it is read.

/// Preset used when a style names none
pub const DEFAULT_PRESET: &str = "word-pop";

/// Font used when a style names none
pub const DEFAULT_FONT: &str = "Inter";

/// Font size in pixels used when a style names none
pub const DEFAULT_FONT_SIZE: i64 = 60;

/// Style configuration for one render call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Preset identifier (e.g. "matrix-rain")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Font family, possibly a comma-separated fallback list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,

    /// Font size in pixels
    #[serde(default, deserialize_with = "lenient_int", skip_serializing_if = "Option::is_none")]
    pub font_size: Option<i64>,

    /// Fill colour spec
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,

    /// Outline colour spec
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline_color: Option<String>,

    /// Numpad-style anchor code (2 bottom, 5 middle, 8 top)
    #[serde(default, deserialize_with = "lenient_int", skip_serializing_if = "Option::is_none")]
    pub alignment: Option<i64>,
}

impl StyleConfig {
    // @creates: Style seeded from the preset catalog
    pub fn for_preset(id: &str) -> Self {
        let mut style = match catalog_entry(id) {
            Some(defaults) => Self {
                id: None,
                font: Some(defaults.font.to_string()),
                font_size: Some(defaults.font_size),
                primary_color: Some(defaults.primary_color.to_string()),
                outline_color: Some(defaults.outline_color.to_string()),
                alignment: None,
            },
            None => Self::default(),
        };
        style.id = Some(id.to_string());
        style
    }

    /// Overlay the fields set on `self` on top of `base`
    pub fn over(self, base: StyleConfig) -> StyleConfig {
        StyleConfig {
            id: self.id.or(base.id),
            font: self.font.or(base.font),
            font_size: self.font_size.or(base.font_size),
            primary_color: self.primary_color.or(base.primary_color),
            outline_color: self.outline_color.or(base.outline_color),
            alignment: self.alignment.or(base.alignment),
        }
    }

    // @returns: Preset identifier or the default preset
    pub fn preset_id(&self) -> &str {
        self.id.as_deref().unwrap_or(DEFAULT_PRESET)
    }

    /// First entry of the font fallback list
    pub fn font_family(&self) -> String {
        let family = self
            .font
            .as_deref()
            .and_then(|font| font.split(',').next())
            .map(str::trim)
            .unwrap_or_default();

        if family.is_empty() {
            DEFAULT_FONT.to_string()
        } else {
            family.to_string()
        }
    }

    // @returns: Font size in pixels, defaulted when absent or non-positive
    pub fn font_size_px(&self) -> i64 {
        self.font_size.filter(|size| *size > 0).unwrap_or(DEFAULT_FONT_SIZE)
    }

    // @returns: Native primary colour token
    pub fn primary_native(&self) -> String {
        resolve_color(self.primary_color.as_deref(), OPAQUE_WHITE)
    }

    // @returns: Native outline colour token
    pub fn outline_native(&self) -> String {
        resolve_color(self.outline_color.as_deref(), OPAQUE_BLACK)
    }

    // @returns: Vertical placement derived from the alignment code
    pub fn placement(&self) -> Placement {
        Placement::from_code(self.alignment.unwrap_or(2))
    }
}

// Numeric fields arrive as numbers or as strings ("64") depending on which
// tool wrote the record; anything unreadable is treated as absent.
fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }))
}

/// Output canvas in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

/// Vertical placement of the text anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Top,
    Middle,
    Bottom,
}

impl Placement {
    // @param code: alignment code; only 8 and 5 are special
    pub fn from_code(code: i64) -> Self {
        match code {
            8 => Self::Top,
            5 => Self::Middle,
            _ => Self::Bottom,
        }
    }
}

/// Screen point every effect centres on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub x: i64,
    pub y: i64,
}

impl Anchor {
    /// Compute the anchor for a placement on a canvas
    ///
    /// `edge_margin` is the distance from the top or bottom edge for
    /// top/bottom placement.
    pub fn locate(placement: Placement, canvas: Canvas, edge_margin: u32) -> Self {
        let height = i64::from(canvas.height);
        let margin = i64::from(edge_margin);
        let y = match placement {
            Placement::Top => margin,
            Placement::Middle => height / 2,
            Placement::Bottom => height - margin,
        };

        Self {
            x: i64::from(canvas.width) / 2,
            y,
        }
    }
}

/// Default look paired with a built-in preset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetDefaults {
    pub id: &'static str,
    pub font: &'static str,
    pub font_size: i64,
    pub primary_color: &'static str,
    pub outline_color: &'static str,
}

/// Catalog of default looks for the built-in presets
pub static PRESET_CATALOG: &[PresetDefaults] = &[
    PresetDefaults { id: "matrix-rain", font: "Monigue", font_size: 54, primary_color: "#00FF00", outline_color: "#000000" },
    PresetDefaults { id: "electric-shock", font: "Chunko Bold", font_size: 66, primary_color: "#FFFF00", outline_color: "#000000" },
    PresetDefaults { id: "smoke-trail", font: "Brume", font_size: 58, primary_color: "#CCCCCC", outline_color: "#666666" },
    PresetDefaults { id: "pixel-glitch", font: "Tallica", font_size: 60, primary_color: "#FFFFFF", outline_color: "#FF0000" },
    PresetDefaults { id: "neon-sign", font: "Oslla", font_size: 64, primary_color: "#FF00FF", outline_color: "#FF00FF" },
    PresetDefaults { id: "karaoke-classic", font: "Marble", font_size: 62, primary_color: "#FFFFFF", outline_color: "#000000" },
    PresetDefaults { id: "fade-in-out", font: "Folkies Vantage", font_size: 56, primary_color: "#FFFFFF", outline_color: "#333333" },
    PresetDefaults { id: "slide-up", font: "Sink", font_size: 60, primary_color: "#FFAA00", outline_color: "#000000" },
    PresetDefaults { id: "zoom-burst", font: "RoseMask", font_size: 64, primary_color: "#FF69B4", outline_color: "#000000" },
    PresetDefaults { id: "word-pop", font: "Komika Axis", font_size: 60, primary_color: "#FFFFFF", outline_color: "#333333" },
];

// @returns: Catalog entry whose id matches after canonicalization
pub fn catalog_entry(id: &str) -> Option<&'static PresetDefaults> {
    let key = canonical_key(id);
    PRESET_CATALOG.iter().find(|entry| canonical_key(entry.id) == key)
}
