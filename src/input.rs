//! Input model: tools, modifier keys, mouse buttons, and the gesture state machine.
//!
//! `Tool` and `VectorShape` capture the user's intent at the time of a pointer
//! event. `UiState` is the persistent editor state visible to the renderer
//! (active tool, selection, edit mode). `InputState` is the active gesture
//! being tracked between pointer-down and pointer-up, carrying all context
//! needed to compute deltas, restore geometry on cancel, and emit final
//! document mutations on release.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_SHAPE_SIZE;
use crate::element::{Element, ElementId, ElementKind};
use crate::hit::ResizeAnchor;
use crate::viewport::Point;

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Pointer / selection tool (default).
    #[default]
    Select,
    /// Click to place an inline-editable text element.
    Text,
    /// Click to place the currently chosen vector shape.
    Vector,
}

/// Vector shape chosen in the vector tool's flyout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VectorShape {
    Rectangle,
    Oval,
    Polygon,
    Star,
    Path,
}

impl VectorShape {
    /// The element kind this shape creates.
    #[must_use]
    pub fn kind(self) -> ElementKind {
        match self {
            Self::Rectangle => ElementKind::Rectangle,
            Self::Oval => ElementKind::Oval,
            Self::Polygon => ElementKind::Polygon,
            Self::Star => ElementKind::Star,
            Self::Path => ElementKind::Path,
        }
    }

    /// Default presentation styles for a freshly dropped shape: blue fill,
    /// darker blue border, and the shape-specific clip or radius.
    #[must_use]
    pub fn default_styles(self) -> serde_json::Value {
        let mut styles = serde_json::json!({
            "backgroundColor": "#3b82f6",
            "border": "2px solid #1e40af",
        });
        let extra = match self {
            Self::Rectangle => serde_json::json!({"borderRadius": "0px"}),
            Self::Oval => serde_json::json!({"borderRadius": "50%"}),
            Self::Polygon => serde_json::json!({
                "clipPath": "polygon(50% 0%, 0% 100%, 100% 100%)",
                "borderRadius": "0px",
            }),
            Self::Star => serde_json::json!({
                "clipPath": "polygon(50% 0%, 61% 35%, 98% 35%, 68% 57%, 79% 91%, 50% 70%, 21% 91%, 32% 57%, 2% 35%, 39% 35%)",
                "borderRadius": "0px",
            }),
            Self::Path => serde_json::json!({"borderRadius": "20px 0px 20px 0px"}),
        };
        if let (Some(bag), Some(add)) = (styles.as_object_mut(), extra.as_object()) {
            for (k, v) in add {
                bag.insert(k.clone(), v.clone());
            }
        }
        styles
    }

    /// Build the element this shape drops at `position`.
    #[must_use]
    pub fn build_element(self, position: Point) -> Element {
        let mut element = Element::new(
            self.kind(),
            position.x,
            position.y,
            DEFAULT_SHAPE_SIZE,
            DEFAULT_SHAPE_SIZE,
        );
        element.styles = self.default_styles();
        element
    }
}

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// A keyboard key.
///
/// The inner string holds the key name as reported by the browser (e.g.
/// `"Delete"`, `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

/// Persistent UI state visible to the renderer.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Currently active tool.
    pub tool: Tool,
    /// Shape armed in the vector tool, if any.
    pub vector_shape: Option<VectorShape>,
    /// The id of the currently selected element, if any.
    pub selected_id: Option<ElementId>,
    /// The text element currently in inline-edit mode, if any. When set it
    /// always equals `selected_id`.
    pub editing_id: Option<ElementId>,
}

/// Internal state for the input state machine.
///
/// Each active variant carries gesture context needed to compute deltas,
/// restore geometry on Escape, and emit final actions on pointer-up.
#[derive(Debug, Clone)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    Idle,
    /// The user is moving an element across the canvas.
    DraggingElement {
        /// Id of the element being dragged.
        id: ElementId,
        /// Canvas-space pointer position at the previous event. Deltas are
        /// incremental: each move measures from here, then advances it.
        last: Point,
        /// Element x at the start of the drag, restored on cancel.
        orig_x: f64,
        /// Element y at the start of the drag, restored on cancel.
        orig_y: f64,
    },
    /// The user is resizing an element by dragging one of its eight handles.
    ResizingElement {
        /// Id of the element being resized.
        id: ElementId,
        /// Which corner/edge handle is being dragged.
        anchor: ResizeAnchor,
        /// Canvas-space pointer position at the start of the resize. Deltas
        /// are origin-anchored: every move measures from here.
        start: Point,
        /// Element x at the start of the resize.
        orig_x: f64,
        /// Element y at the start of the resize.
        orig_y: f64,
        /// Element width at the start of the resize.
        orig_w: f64,
        /// Element height at the start of the resize.
        orig_h: f64,
    },
}

impl Default for InputState {
    fn default() -> Self {
        Self::Idle
    }
}
