//! Rendering: draws the page scene to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives read-only views of the page, UI state, and viewport and produces
//! pixels — it does not mutate any application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{DEFAULT_FONT_SIZE, FRAC_PI_5, GRID_STEP, HANDLE_RADIUS_PX, STAR_INNER_RATIO};
use crate::element::{Element, ElementKind, StyleBag};
use crate::hit;
use crate::input::UiState;
use crate::page::Page;
use crate::viewport::Viewport;

/// Selection dash segment length in screen pixels.
const SELECTION_DASH_PX: f64 = 4.0;

/// Inner padding for text inside containers and buttons.
const CONTENT_PAD: f64 = 12.0;

/// Fallback fill for vector shapes with no background in their style bag.
const VECTOR_FILL: &str = "#3b82f6";

/// Draw the full scene: page surface, elements, and selection UI.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    page: &Page,
    ui: &UiState,
    viewport: &Viewport,
) -> Result<(), JsValue> {
    let size = viewport.canvas_size();
    let scale = viewport.scale();

    // Layer 1: clear and set up the zoom transform.
    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, size.width * scale, size.height * scale);
    ctx.scale(scale, scale)?;

    // Layer 2: the page surface.
    ctx.set_fill_style_str("#ffffff");
    ctx.fill_rect(0.0, 0.0, size.width, size.height);
    ctx.set_stroke_style_str("#e5e7eb");
    ctx.set_line_width(1.0 / scale);
    ctx.stroke_rect(0.0, 0.0, size.width, size.height);

    // The alignment grid would fight with the selection overlay visually, so
    // it is only shown while nothing is selected.
    if ui.selected_id.is_none() {
        draw_grid(ctx, size.width, size.height, scale);
    }

    // Layer 3: elements in paint order, with the selected one drawn last.
    for element in page.elements() {
        if ui.selected_id == Some(element.id) {
            continue;
        }
        draw_element(ctx, element)?;
    }
    if let Some(selected) = ui.selected_id.and_then(|id| page.get(&id)) {
        draw_element(ctx, selected)?;
        draw_selection(ctx, selected, scale)?;
    }

    Ok(())
}

fn draw_grid(ctx: &CanvasRenderingContext2d, width: f64, height: f64, scale: f64) {
    ctx.set_stroke_style_str("rgba(0, 0, 0, 0.04)");
    ctx.set_line_width(1.0 / scale);
    ctx.begin_path();

    let mut x = GRID_STEP;
    while x < width {
        ctx.move_to(x, 0.0);
        ctx.line_to(x, height);
        x += GRID_STEP;
    }
    let mut y = GRID_STEP;
    while y < height {
        ctx.move_to(0.0, y);
        ctx.line_to(width, y);
        y += GRID_STEP;
    }
    ctx.stroke();
}

// =============================================================
// Element dispatch
// =============================================================

fn draw_element(ctx: &CanvasRenderingContext2d, element: &Element) -> Result<(), JsValue> {
    if element.width <= 0.0 || element.height <= 0.0 {
        return Ok(());
    }
    let bag = element.style_bag();

    match element.kind {
        ElementKind::Text => draw_text_element(ctx, element, &bag),
        ElementKind::Image => draw_image_placeholder(ctx, element, &bag),
        ElementKind::Container => draw_container(ctx, element, &bag),
        ElementKind::Button => draw_button(ctx, element, &bag),
        ElementKind::Rectangle => draw_rectangle(ctx, element, &bag),
        ElementKind::Oval => draw_oval(ctx, element, &bag),
        ElementKind::Polygon => draw_polygon(ctx, element, &bag),
        ElementKind::Star => draw_star(ctx, element, &bag),
        ElementKind::Path => draw_path_shape(ctx, element, &bag),
    }
}

// =============================================================
// Text, containers, buttons, images
// =============================================================

fn draw_text_element(
    ctx: &CanvasRenderingContext2d,
    element: &Element,
    bag: &StyleBag<'_>,
) -> Result<(), JsValue> {
    let Some(content) = element.content.as_deref() else {
        return Ok(());
    };
    if let Some(bg) = bag.background_color() {
        ctx.set_fill_style_str(bg);
        ctx.fill_rect(element.x, element.y, element.width, element.height);
    }
    draw_content_lines(ctx, content, bag, element.x, element.y)
}

fn draw_container(
    ctx: &CanvasRenderingContext2d,
    element: &Element,
    bag: &StyleBag<'_>,
) -> Result<(), JsValue> {
    let radius = bag.border_radius().unwrap_or(0.0);
    rounded_rect_path(ctx, element.x, element.y, element.width, element.height, radius);

    ctx.set_fill_style_str(bag.background_color().unwrap_or("#f3f4f6"));
    ctx.fill();

    if let Some(border_color) = bag.border_color() {
        ctx.set_stroke_style_str(border_color);
        ctx.set_line_width(bag.border_width().unwrap_or(1.0));
        ctx.stroke();
    }

    if let Some(content) = element.content.as_deref() {
        ctx.save();
        rounded_rect_path(ctx, element.x, element.y, element.width, element.height, radius);
        ctx.clip();
        draw_content_lines(ctx, content, bag, element.x + CONTENT_PAD, element.y + CONTENT_PAD)?;
        ctx.restore();
    }
    Ok(())
}

fn draw_button(
    ctx: &CanvasRenderingContext2d,
    element: &Element,
    bag: &StyleBag<'_>,
) -> Result<(), JsValue> {
    let radius = bag.border_radius().unwrap_or(8.0);
    rounded_rect_path(ctx, element.x, element.y, element.width, element.height, radius);

    ctx.set_fill_style_str(bag.background_color().unwrap_or(VECTOR_FILL));
    ctx.fill();

    if let Some(border_color) = bag.border_color() {
        ctx.set_stroke_style_str(border_color);
        ctx.set_line_width(bag.border_width().unwrap_or(1.0));
        ctx.stroke();
    }

    let label = element.content.as_deref().unwrap_or("Button");
    let font_size = bag.font_size().unwrap_or(DEFAULT_FONT_SIZE);
    ctx.set_fill_style_str(if bag.background_color().is_some() { bag.color() } else { "#ffffff" });
    ctx.set_font(&format!("{font_size}px sans-serif"));
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.fill_text(
        label,
        element.x + element.width / 2.0,
        element.y + element.height / 2.0,
    )?;
    Ok(())
}

fn draw_image_placeholder(
    ctx: &CanvasRenderingContext2d,
    element: &Element,
    bag: &StyleBag<'_>,
) -> Result<(), JsValue> {
    ctx.set_fill_style_str(bag.background_color().unwrap_or("#e5e7eb"));
    ctx.fill_rect(element.x, element.y, element.width, element.height);

    // Crossed diagonals mark the frame as an image placeholder.
    ctx.set_stroke_style_str("#9ca3af");
    ctx.set_line_width(1.0);
    ctx.begin_path();
    ctx.move_to(element.x, element.y);
    ctx.line_to(element.x + element.width, element.y + element.height);
    ctx.move_to(element.x + element.width, element.y);
    ctx.line_to(element.x, element.y + element.height);
    ctx.stroke();
    ctx.stroke_rect(element.x, element.y, element.width, element.height);

    ctx.set_fill_style_str("#6b7280");
    ctx.set_font(&format!("{DEFAULT_FONT_SIZE}px sans-serif"));
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.fill_text(
        element.content.as_deref().unwrap_or("Image"),
        element.x + element.width / 2.0,
        element.y + element.height / 2.0,
    )?;
    Ok(())
}

fn draw_content_lines(
    ctx: &CanvasRenderingContext2d,
    content: &str,
    bag: &StyleBag<'_>,
    x: f64,
    y: f64,
) -> Result<(), JsValue> {
    let font_size = bag.font_size().unwrap_or(DEFAULT_FONT_SIZE);
    let line_height = font_size * 1.4;

    ctx.set_fill_style_str(bag.color());
    ctx.set_font(&format!("{font_size}px sans-serif"));
    ctx.set_text_align("left");
    ctx.set_text_baseline("top");

    for (idx, line) in content.lines().enumerate() {
        ctx.fill_text(line, x, (idx as f64).mul_add(line_height, y))?;
    }
    Ok(())
}

// =============================================================
// Vector shapes
// =============================================================

fn fill_and_stroke(ctx: &CanvasRenderingContext2d, bag: &StyleBag<'_>) {
    ctx.set_fill_style_str(bag.background_color().unwrap_or(VECTOR_FILL));
    ctx.fill();
    if let Some(border_color) = bag.border_color() {
        ctx.set_stroke_style_str(border_color);
        ctx.set_line_width(bag.border_width().unwrap_or(1.0));
        ctx.stroke();
    }
}

fn draw_rectangle(
    ctx: &CanvasRenderingContext2d,
    element: &Element,
    bag: &StyleBag<'_>,
) -> Result<(), JsValue> {
    let radius = bag.border_radius().unwrap_or(0.0);
    rounded_rect_path(ctx, element.x, element.y, element.width, element.height, radius);
    fill_and_stroke(ctx, bag);
    Ok(())
}

fn draw_oval(
    ctx: &CanvasRenderingContext2d,
    element: &Element,
    bag: &StyleBag<'_>,
) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.ellipse(
        element.x + element.width / 2.0,
        element.y + element.height / 2.0,
        element.width / 2.0,
        element.height / 2.0,
        0.0,
        0.0,
        2.0 * PI,
    )?;
    fill_and_stroke(ctx, bag);
    Ok(())
}

fn draw_polygon(
    ctx: &CanvasRenderingContext2d,
    element: &Element,
    bag: &StyleBag<'_>,
) -> Result<(), JsValue> {
    // Triangle inscribed in the bounding box, apex at the top midpoint.
    ctx.begin_path();
    ctx.move_to(element.x + element.width / 2.0, element.y);
    ctx.line_to(element.x, element.y + element.height);
    ctx.line_to(element.x + element.width, element.y + element.height);
    ctx.close_path();
    fill_and_stroke(ctx, bag);
    Ok(())
}

#[allow(clippy::similar_names)]
fn draw_star(
    ctx: &CanvasRenderingContext2d,
    element: &Element,
    bag: &StyleBag<'_>,
) -> Result<(), JsValue> {
    let cx = element.x + element.width / 2.0;
    let cy = element.y + element.height / 2.0;
    let rx_outer = element.width / 2.0;
    let ry_outer = element.height / 2.0;
    let rx_inner = rx_outer * STAR_INNER_RATIO;
    let ry_inner = ry_outer * STAR_INNER_RATIO;
    let offset = std::f64::consts::FRAC_PI_2;

    ctx.begin_path();
    for i in 0..10 {
        let angle = FRAC_PI_5.mul_add(f64::from(i), -offset);
        let (rx, ry) = if i % 2 == 0 { (rx_outer, ry_outer) } else { (rx_inner, ry_inner) };
        let px = rx.mul_add(angle.cos(), cx);
        let py = ry.mul_add(angle.sin(), cy);
        if i == 0 {
            ctx.move_to(px, py);
        } else {
            ctx.line_to(px, py);
        }
    }
    ctx.close_path();
    fill_and_stroke(ctx, bag);
    Ok(())
}

fn draw_path_shape(
    ctx: &CanvasRenderingContext2d,
    element: &Element,
    bag: &StyleBag<'_>,
) -> Result<(), JsValue> {
    // Asymmetric leaf shape: opposing corners rounded, the others square.
    let r = (element.width.min(element.height) * 0.2).min(20.0);
    let (x, y, w, h) = (element.x, element.y, element.width, element.height);

    ctx.begin_path();
    ctx.move_to(x + r, y);
    ctx.line_to(x + w, y);
    ctx.line_to(x + w, y + h - r);
    ctx.quadratic_curve_to(x + w, y + h, x + w - r, y + h);
    ctx.line_to(x, y + h);
    ctx.line_to(x, y + r);
    ctx.quadratic_curve_to(x, y, x + r, y);
    ctx.close_path();
    fill_and_stroke(ctx, bag);
    Ok(())
}

// =============================================================
// Selection UI
// =============================================================

fn draw_selection(
    ctx: &CanvasRenderingContext2d,
    element: &Element,
    scale: f64,
) -> Result<(), JsValue> {
    ctx.save();

    // Dashed bounding box.
    let dash = SELECTION_DASH_PX / scale;
    let dash_array = js_sys::Array::new();
    dash_array.push(&dash.into());
    dash_array.push(&dash.into());
    ctx.set_line_dash(&dash_array)?;
    ctx.set_stroke_style_str("#1E90FF");
    ctx.set_line_width(1.0 / scale);
    ctx.stroke_rect(element.x, element.y, element.width, element.height);
    ctx.set_line_dash(&js_sys::Array::new())?;

    // Name label above the top-left corner.
    let label_size = 11.0 / scale;
    ctx.set_fill_style_str("#1E90FF");
    ctx.set_font(&format!("{label_size}px sans-serif"));
    ctx.set_text_align("left");
    ctx.set_text_baseline("bottom");
    ctx.fill_text(&element.name, element.x, element.y - (4.0 / scale))?;

    // Resize handles, kept at a constant screen size.
    let half = HANDLE_RADIUS_PX / scale / 2.0;
    ctx.set_fill_style_str("#fff");
    for (_, pos) in hit::resize_handle_positions(element.x, element.y, element.width, element.height)
    {
        ctx.fill_rect(pos.x - half, pos.y - half, half * 2.0, half * 2.0);
        ctx.stroke_rect(pos.x - half, pos.y - half, half * 2.0, half * 2.0);
    }

    ctx.restore();
    Ok(())
}

/// Trace a rounded-rectangle path. A zero radius degenerates to a plain rect.
fn rounded_rect_path(ctx: &CanvasRenderingContext2d, x: f64, y: f64, w: f64, h: f64, radius: f64) {
    let r = radius.clamp(0.0, w.min(h) / 2.0);
    ctx.begin_path();
    if r <= 0.0 {
        ctx.rect(x, y, w, h);
        return;
    }
    ctx.move_to(x + r, y);
    ctx.line_to(x + w - r, y);
    ctx.quadratic_curve_to(x + w, y, x + w, y + r);
    ctx.line_to(x + w, y + h - r);
    ctx.quadratic_curve_to(x + w, y + h, x + w - r, y + h);
    ctx.line_to(x + r, y + h);
    ctx.quadratic_curve_to(x, y + h, x, y + h - r);
    ctx.line_to(x, y + r);
    ctx.quadratic_curve_to(x, y, x + r, y);
    ctx.close_path();
}
