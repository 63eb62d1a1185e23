//! Viewport model: breakpoint presets, zoom, and coordinate conversions.
//!
//! The canvas is not an infinite surface; it is a fixed page sized by the
//! active [`Breakpoint`] and scaled by a zoom percentage. Pointer events
//! arrive in screen space (CSS pixels relative to the canvas origin) and are
//! converted to canvas space before any hit-testing or geometry math.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use serde::{Deserialize, Serialize};

/// A point in either screen or canvas space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Fixed page dimensions in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

/// A named responsive viewport preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    /// 1200 × 800.
    #[default]
    Desktop,
    /// 834 × 1194.
    Tablet,
    /// 390 × 844.
    Phone,
}

impl Breakpoint {
    /// Parse a breakpoint tag. Unrecognized tags fall back to desktop —
    /// there is no error path here by design.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "tablet" => Self::Tablet,
            "phone" => Self::Phone,
            _ => Self::Desktop,
        }
    }

    /// The fixed canvas size for this breakpoint.
    #[must_use]
    pub fn canvas_size(self) -> CanvasSize {
        match self {
            Self::Desktop => CanvasSize { width: 1200.0, height: 800.0 },
            Self::Tablet => CanvasSize { width: 834.0, height: 1194.0 },
            Self::Phone => CanvasSize { width: 390.0, height: 844.0 },
        }
    }
}

/// Zoom percentage bounds.
const MIN_ZOOM_PERCENT: f64 = 10.0;
const MAX_ZOOM_PERCENT: f64 = 400.0;

/// The visible page: a breakpoint-sized canvas scaled by a zoom percentage.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub breakpoint: Breakpoint,
    /// Zoom as a percentage; 100.0 = actual size.
    pub zoom_percent: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { breakpoint: Breakpoint::Desktop, zoom_percent: 100.0 }
    }
}

impl Viewport {
    /// The zoom scale factor (1.0 = no zoom).
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.zoom_percent / 100.0
    }

    /// Set the zoom percentage, clamped to sane bounds.
    pub fn set_zoom_percent(&mut self, percent: f64) {
        self.zoom_percent = percent.clamp(MIN_ZOOM_PERCENT, MAX_ZOOM_PERCENT);
    }

    /// Canvas size for the active breakpoint, unscaled.
    #[must_use]
    pub fn canvas_size(&self) -> CanvasSize {
        self.breakpoint.canvas_size()
    }

    /// Convert a screen-space point (CSS pixels from the canvas origin) to
    /// canvas coordinates.
    #[must_use]
    pub fn screen_to_canvas(&self, screen: Point) -> Point {
        let s = self.scale();
        Point { x: screen.x / s, y: screen.y / s }
    }

    /// Convert a canvas-space point to screen coordinates.
    #[must_use]
    pub fn canvas_to_screen(&self, canvas: Point) -> Point {
        let s = self.scale();
        Point { x: canvas.x * s, y: canvas.y * s }
    }

    /// Convert a screen-space distance (pixels) to canvas-space distance.
    #[must_use]
    pub fn screen_dist_to_canvas(&self, screen_dist: f64) -> f64 {
        screen_dist / self.scale()
    }
}
