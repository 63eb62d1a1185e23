//! Hit-testing against page elements and the selected element's resize handles.
//!
//! Handles exist only on the selected element, so they are tested first; body
//! hits then walk the element list topmost-first (paint order is list order,
//! with the selected element drawn above everything).

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::element::ElementId;
use crate::page::Page;
use crate::viewport::Point;

/// Which part of an element was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    Body,
    ResizeHandle(ResizeAnchor),
}

/// Anchor position for resize handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeAnchor {
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
    Nw,
}

impl ResizeAnchor {
    /// CSS cursor name for hovering this handle.
    #[must_use]
    pub fn cursor(self) -> &'static str {
        match self {
            Self::N | Self::S => "ns-resize",
            Self::E | Self::W => "ew-resize",
            Self::Ne | Self::Sw => "nesw-resize",
            Self::Nw | Self::Se => "nwse-resize",
        }
    }
}

/// Result of a hit test.
#[derive(Debug, Clone, Copy)]
pub struct Hit {
    pub element_id: ElementId,
    pub part: HitPart,
}

/// Canvas-space positions of the eight resize handles for a bounding box.
#[must_use]
pub fn resize_handle_positions(x: f64, y: f64, w: f64, h: f64) -> [(ResizeAnchor, Point); 8] {
    let cx = x + w / 2.0;
    let cy = y + h / 2.0;
    [
        (ResizeAnchor::N, Point::new(cx, y)),
        (ResizeAnchor::Ne, Point::new(x + w, y)),
        (ResizeAnchor::E, Point::new(x + w, cy)),
        (ResizeAnchor::Se, Point::new(x + w, y + h)),
        (ResizeAnchor::S, Point::new(cx, y + h)),
        (ResizeAnchor::Sw, Point::new(x, y + h)),
        (ResizeAnchor::W, Point::new(x, cy)),
        (ResizeAnchor::Nw, Point::new(x, y)),
    ]
}

/// Test which element (if any) is under `pt`, checking the selected element's
/// handles first, then its body, then the remaining elements topmost-first.
///
/// `handle_slop` is the half-size of a handle's hit box in canvas units
/// (screen slop divided by the viewport scale).
#[must_use]
pub fn hit_test(
    pt: Point,
    page: &Page,
    selected_id: Option<ElementId>,
    handle_slop: f64,
) -> Option<Hit> {
    // Handles and body of the selected element win over everything beneath.
    if let Some(sel_id) = selected_id {
        if let Some(sel) = page.get(&sel_id) {
            let handles = resize_handle_positions(sel.x, sel.y, sel.width, sel.height);
            for (anchor, pos) in handles {
                if (pt.x - pos.x).abs() <= handle_slop && (pt.y - pos.y).abs() <= handle_slop {
                    return Some(Hit { element_id: sel_id, part: HitPart::ResizeHandle(anchor) });
                }
            }
            if point_in_box(pt, sel.x, sel.y, sel.width, sel.height) {
                return Some(Hit { element_id: sel_id, part: HitPart::Body });
            }
        }
    }

    // Remaining elements, topmost (last inserted) first.
    for element in page.elements().iter().rev() {
        if selected_id == Some(element.id) {
            continue;
        }
        if point_in_box(pt, element.x, element.y, element.width, element.height) {
            return Some(Hit { element_id: element.id, part: HitPart::Body });
        }
    }

    None
}

fn point_in_box(pt: Point, x: f64, y: f64, w: f64, h: f64) -> bool {
    pt.x >= x && pt.x <= x + w && pt.y >= y && pt.y <= y + h
}
