//! Element model: placeable page elements, their kinds, and sparse updates.
//!
//! This module defines the core data types that describe what is on a page
//! (`Element`, `ElementKind`), a sparse-update type for incremental edits
//! (`PartialElement`), and a typed accessor for the open-ended `styles` JSON
//! bag (`StyleBag`).
//!
//! Geometry is carried as real numbers: `x`, `y`, `width`, `height` are `f64`
//! canvas pixels, never `"42px"` strings. Everything presentational (colors,
//! fonts, borders, clip paths) lives in the opaque `styles` bag, which the
//! engine passes through without interpreting — only the renderer reads it.

#[cfg(test)]
#[path = "element_test.rs"]
mod element_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a page element.
pub type ElementId = Uuid;

/// The kind of a page element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Inline-editable text run.
    Text,
    /// Image placeholder; `content` holds the source URL.
    Image,
    /// Generic box that can hold multi-line template content.
    Container,
    /// Clickable pill with a short label.
    Button,
    /// Vector rectangle.
    Rectangle,
    /// Vector ellipse inscribed in the bounding box.
    Oval,
    /// Vector triangle inscribed in the bounding box.
    Polygon,
    /// Vector five-point star inscribed in the bounding box.
    Star,
    /// Vector freeform path (rendered with asymmetric rounded corners).
    Path,
}

impl ElementKind {
    /// Whether this kind is a vector shape (rectangle, oval, polygon, star, path).
    #[must_use]
    pub fn is_vector(self) -> bool {
        matches!(self, Self::Rectangle | Self::Oval | Self::Polygon | Self::Star | Self::Path)
    }

    /// Whether this kind supports inline text editing.
    #[must_use]
    pub fn is_text(self) -> bool {
        matches!(self, Self::Text)
    }

    /// Default display name for a freshly created element of this kind.
    #[must_use]
    pub fn default_name(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Image => "Image",
            Self::Container => "Container",
            Self::Button => "Button",
            Self::Rectangle => "Rectangle",
            Self::Oval => "Oval",
            Self::Polygon => "Polygon",
            Self::Star => "Star",
            Self::Path => "Path",
        }
    }
}

/// A page element as stored in the document and handed to the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    /// Unique identifier, assigned at creation and never reused.
    pub id: ElementId,
    /// Element kind; constrains which styles are meaningful.
    pub kind: ElementKind,
    /// Human-editable label shown in layers/outline views.
    pub name: String,
    /// Optional textual payload: plain text, image URL, or a multi-line
    /// rendering hint for composite template elements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Left edge in canvas pixels.
    pub x: f64,
    /// Top edge in canvas pixels.
    pub y: f64,
    /// Bounding-box width in canvas pixels.
    pub width: f64,
    /// Bounding-box height in canvas pixels.
    pub height: f64,
    /// Open-ended presentation attributes (colors, fonts, borders, clip
    /// paths). Opaque to the engine; read only by the renderer.
    pub styles: serde_json::Value,
    /// Set when the element was just created by the text tool and has not yet
    /// been selected. Consumed exactly once to open inline editing; never
    /// persisted.
    #[serde(skip)]
    pub just_created: bool,
}

impl Element {
    /// Create an element of `kind` at the given position and size, with the
    /// kind's default name, no content, and an empty style bag.
    #[must_use]
    pub fn new(kind: ElementKind, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            name: kind.default_name().to_owned(),
            content: None,
            x,
            y,
            width,
            height,
            styles: serde_json::json!({}),
            just_created: false,
        }
    }

    /// Typed access to the style bag.
    #[must_use]
    pub fn style_bag(&self) -> StyleBag<'_> {
        StyleBag::new(&self.styles)
    }

    /// Apply a sparse update in place. Style keys merge; a JSON `null` value
    /// removes the key.
    pub fn apply(&mut self, partial: &PartialElement) {
        if let Some(ref name) = partial.name {
            self.name.clone_from(name);
        }
        if let Some(ref content) = partial.content {
            self.content = Some(content.clone());
        }
        if let Some(x) = partial.x {
            self.x = x;
        }
        if let Some(y) = partial.y {
            self.y = y;
        }
        if let Some(w) = partial.width {
            self.width = w;
        }
        if let Some(h) = partial.height {
            self.height = h;
        }
        if let Some(ref styles) = partial.styles {
            let Some(incoming) = styles.as_object() else {
                return;
            };

            if !self.styles.is_object() {
                self.styles = serde_json::json!({});
            }

            if let Some(existing) = self.styles.as_object_mut() {
                for (k, v) in incoming {
                    if v.is_null() {
                        existing.remove(k);
                    } else {
                        existing.insert(k.clone(), v.clone());
                    }
                }
            }
        }
    }
}

/// Sparse update for an element. Only present fields are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartialElement {
    /// New display name, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New content payload, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// New left edge, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// New top edge, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// New width, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// New height, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Style keys to merge or remove (null values delete keys).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<serde_json::Value>,
}

impl PartialElement {
    /// A partial carrying only a position change.
    #[must_use]
    pub fn position(x: f64, y: f64) -> Self {
        Self { x: Some(x), y: Some(y), ..Self::default() }
    }

    /// A partial carrying a full geometry change (position and size).
    #[must_use]
    pub fn geometry(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            width: Some(width),
            height: Some(height),
            ..Self::default()
        }
    }
}

/// Typed access to common style keys from an `Element.styles` JSON value.
///
/// Pixel-valued keys may be stored either as numbers or as `"NNpx"` strings
/// (template and AI tables keep the original CSS-flavored form); both parse.
pub struct StyleBag<'a> {
    value: &'a serde_json::Value,
}

impl<'a> StyleBag<'a> {
    /// Wrap a reference to a `styles` JSON value for typed access.
    #[must_use]
    pub fn new(value: &'a serde_json::Value) -> Self {
        Self { value }
    }

    fn str_key(&self, key: &str) -> Option<&'a str> {
        self.value.get(key).and_then(|v| v.as_str())
    }

    fn px_key(&self, key: &str) -> Option<f64> {
        let v = self.value.get(key)?;
        if let Some(n) = v.as_f64() {
            return Some(n);
        }
        let s = v.as_str()?;
        match s.trim().trim_end_matches("px").parse::<f64>() {
            Ok(n) => Some(n),
            Err(_) => None,
        }
    }

    /// Background color as a CSS color string, if set.
    #[must_use]
    pub fn background_color(&self) -> Option<&'a str> {
        self.str_key("backgroundColor")
    }

    /// Text color as a CSS color string. Defaults to near-black when absent.
    #[must_use]
    pub fn color(&self) -> &'a str {
        self.str_key("color").unwrap_or("#1f2937")
    }

    /// Font size in pixels, if set.
    #[must_use]
    pub fn font_size(&self) -> Option<f64> {
        self.px_key("fontSize")
    }

    /// Border radius in pixels, if set. Percentage and multi-corner values
    /// (e.g. `"50%"`, `"20px 0px 20px 0px"`) do not parse and return `None`.
    #[must_use]
    pub fn border_radius(&self) -> Option<f64> {
        self.px_key("borderRadius")
    }

    /// Border color, parsed from a CSS shorthand like `"2px solid #1e40af"`.
    #[must_use]
    pub fn border_color(&self) -> Option<&'a str> {
        let border = self.str_key("border")?;
        border.split_whitespace().last().filter(|c| c.starts_with('#'))
    }

    /// Border width in pixels, parsed from the CSS shorthand's first token.
    #[must_use]
    pub fn border_width(&self) -> Option<f64> {
        let border = self.str_key("border")?;
        let first = border.split_whitespace().next()?;
        match first.trim_end_matches("px").parse::<f64>() {
            Ok(n) => Some(n),
            Err(_) => None,
        }
    }
}
