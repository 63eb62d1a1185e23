//! Shared numeric constants for the builder canvas crate.

// ── Geometry ────────────────────────────────────────────────────

/// Minimum element width/height in canvas pixels. Resize never goes below this.
pub const MIN_ELEMENT_SIZE: f64 = 20.0;

/// Default side length for vector shapes dropped by the vector tool.
pub const DEFAULT_SHAPE_SIZE: f64 = 100.0;

/// Default bounding box for a freshly created text element.
pub const DEFAULT_TEXT_WIDTH: f64 = 160.0;
pub const DEFAULT_TEXT_HEIGHT: f64 = 32.0;

/// Default insertion point for elements not placed by a pointer click.
pub const DEFAULT_INSERT_X: f64 = 50.0;
pub const DEFAULT_INSERT_Y: f64 = 50.0;

/// Offset applied to a duplicated element so the copy is visibly distinct.
pub const DUPLICATE_OFFSET: f64 = 20.0;

// ── Hit-testing ─────────────────────────────────────────────────

/// Screen-space hit slop in pixels for resize handles.
pub const HANDLE_RADIUS_PX: f64 = 8.0;

// ── Rendering ───────────────────────────────────────────────────

/// Alignment grid step in canvas pixels.
pub const GRID_STEP: f64 = 20.0;

/// π / 5 (36°) — angular step for a 10-vertex star polygon.
pub const FRAC_PI_5: f64 = std::f64::consts::PI / 5.0;

/// Inner-to-outer radius ratio for the 5-point star shape.
pub const STAR_INNER_RATIO: f64 = 0.5;

// ── Text editing ────────────────────────────────────────────────

/// Content seeded into a text element created by the text tool. The host shows
/// this until the user types over it; edit-mode entry is driven by the
/// element's `just_created` flag, not by matching this string.
pub const PLACEHOLDER_TEXT: &str = "Type something";

/// Default font size in pixels when the style bag carries none.
pub const DEFAULT_FONT_SIZE: f64 = 16.0;
