//! Top-level engine: pointer/keyboard handlers, element operations, and the
//! browser-facing wrapper.
//!
//! `EngineCore` holds all state and logic that does not depend on a canvas
//! element, so the gesture machine and element operations are testable without
//! a browser. Every handler returns a `Vec<Action>` describing what the host
//! must do in response: persist a mutation, update the cursor, open the inline
//! text editor, or repaint. The engine never talks to the DOM directly except
//! through `Engine::render`.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::ai;
use crate::consts::{
    DEFAULT_INSERT_X, DEFAULT_INSERT_Y, DEFAULT_SHAPE_SIZE, DEFAULT_TEXT_HEIGHT,
    DEFAULT_TEXT_WIDTH, DUPLICATE_OFFSET, HANDLE_RADIUS_PX, MIN_ELEMENT_SIZE, PLACEHOLDER_TEXT,
};
use crate::element::{Element, ElementId, ElementKind, PartialElement};
use crate::hit::{self, HitPart, ResizeAnchor};
use crate::input::{Button, InputState, Key, Modifiers, Tool, UiState, VectorShape};
use crate::page::{PageId, Project};
use crate::render;
use crate::templates;
use crate::viewport::{Breakpoint, Point, Viewport};

/// Actions returned from handlers for the host to process.
#[derive(Debug, Clone)]
pub enum Action {
    /// A new element was added to the current page.
    ElementCreated(Element),
    /// An element's fields changed; `fields` carries only what changed.
    ElementUpdated { id: ElementId, fields: PartialElement },
    /// An element was removed from the current page.
    ElementDeleted { id: ElementId },
    /// The selection changed (possibly to nothing).
    SelectionChanged(Option<ElementId>),
    /// The host should open its inline text editor over the element,
    /// pre-filled with `content`.
    EditTextRequested { id: ElementId, content: String },
    /// The host should set the CSS cursor on the canvas.
    SetCursor(String),
    /// The scene changed; the host should schedule a repaint.
    RenderNeeded,
}

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub project: Project,
    pub ui: UiState,
    pub viewport: Viewport,
    pub input: InputState,
    cursor: String,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            project: Project::new("Untitled"),
            ui: UiState::default(),
            viewport: Viewport::default(),
            input: InputState::default(),
            cursor: "default".to_owned(),
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Pointer events ---

    /// Handle a pointer-down on the canvas.
    ///
    /// Only the primary button starts anything. The active tool decides what
    /// an empty-canvas click means; clicks on elements always select.
    pub fn on_pointer_down(
        &mut self,
        screen_pt: Point,
        button: Button,
        _modifiers: Modifiers,
    ) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }

        let pt = self.viewport.screen_to_canvas(screen_pt);
        let slop = self.viewport.screen_dist_to_canvas(HANDLE_RADIUS_PX);
        let hit = match self.project.current_page() {
            Some(page) => hit::hit_test(pt, page, self.ui.selected_id, slop),
            None => None,
        };

        match hit {
            Some(h) => match h.part {
                HitPart::ResizeHandle(anchor) => self.begin_resize(h.element_id, anchor, pt),
                HitPart::Body => {
                    // Clicking inside the element being edited keeps the
                    // editor open; the click belongs to the host's editor.
                    if self.ui.editing_id == Some(h.element_id) {
                        return Vec::new();
                    }
                    let mut actions = self.select_element(Some(h.element_id));
                    self.begin_drag(h.element_id, pt);
                    actions.extend(self.set_cursor("move"));
                    actions
                }
            },
            None => match (self.ui.tool, self.ui.vector_shape) {
                (Tool::Text, _) => self.add_text_at(pt),
                (Tool::Vector, Some(shape)) => self.add_vector_shape_at(shape, pt),
                _ => self.clear_selection(),
            },
        }
    }

    /// Handle a pointer move. Drives active drag/resize gestures; when idle,
    /// only updates the hover cursor.
    pub fn on_pointer_move(&mut self, screen_pt: Point, _modifiers: Modifiers) -> Vec<Action> {
        let pt = self.viewport.screen_to_canvas(screen_pt);

        match self.input.clone() {
            InputState::DraggingElement { id, last, orig_x, orig_y } => {
                let Some(page) = self.project.current_page_mut() else {
                    self.input = InputState::Idle;
                    return Vec::new();
                };
                let Some(element) = page.get(&id) else {
                    log::debug!("drag target {id} vanished mid-gesture");
                    self.input = InputState::Idle;
                    return Vec::new();
                };

                // Incremental deltas: measure from the previous event, clamp
                // to the page origin, then advance the reference point.
                let x = (element.x + (pt.x - last.x)).max(0.0);
                let y = (element.y + (pt.y - last.y)).max(0.0);
                page.set_position(&id, x, y);
                self.input = InputState::DraggingElement { id, last: pt, orig_x, orig_y };
                vec![Action::RenderNeeded]
            }
            InputState::ResizingElement { id, anchor, start, orig_x, orig_y, orig_w, orig_h } => {
                let Some(page) = self.project.current_page_mut() else {
                    self.input = InputState::Idle;
                    return Vec::new();
                };
                if page.get(&id).is_none() {
                    log::debug!("resize target {id} vanished mid-gesture");
                    self.input = InputState::Idle;
                    return Vec::new();
                }

                // Origin-anchored deltas: every move measures from the
                // pointer-down point against the original geometry.
                let (x, y, w, h) = resize_geometry(
                    anchor,
                    pt.x - start.x,
                    pt.y - start.y,
                    orig_x,
                    orig_y,
                    orig_w,
                    orig_h,
                );
                page.set_position(&id, x, y);
                page.set_size(&id, w, h);
                vec![Action::RenderNeeded]
            }
            InputState::Idle => self.hover_cursor(pt),
        }
    }

    /// Handle pointer-up: finalize any active gesture with a single document
    /// mutation carrying the settled geometry.
    pub fn on_pointer_up(
        &mut self,
        _screen_pt: Point,
        _button: Button,
        _modifiers: Modifiers,
    ) -> Vec<Action> {
        self.finish_gesture()
    }

    /// The pointer left the canvas. Treated exactly like pointer-up so an
    /// element is never stranded mid-gesture.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.finish_gesture()
    }

    // --- Keyboard events ---

    /// Handle a key-down.
    ///
    /// Delete/Backspace remove the selection (unless inline editing, where
    /// they belong to the text editor). Escape cancels an active gesture,
    /// restoring the element's original geometry, or exits edit mode.
    pub fn on_key_down(&mut self, key: &Key, _modifiers: Modifiers) -> Vec<Action> {
        match key.0.as_str() {
            "Delete" | "Backspace" => {
                if self.ui.editing_id.is_some() {
                    return Vec::new();
                }
                match self.ui.selected_id {
                    Some(id) => self.delete_element(&id),
                    None => Vec::new(),
                }
            }
            "Escape" => {
                if !matches!(self.input, InputState::Idle) {
                    return self.cancel_gesture();
                }
                if self.ui.editing_id.take().is_some() {
                    return vec![Action::RenderNeeded];
                }
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    // --- Element operations ---

    /// Select an element, or pass `None` to deselect.
    ///
    /// Selecting exits edit mode on any previously edited element. Selecting
    /// a just-created text element consumes its creation flag and opens
    /// inline editing immediately.
    pub fn select_element(&mut self, id: Option<ElementId>) -> Vec<Action> {
        let Some(id) = id else {
            return self.clear_selection();
        };
        let mut actions = Vec::new();

        if self.ui.selected_id != Some(id) {
            self.ui.selected_id = Some(id);
            self.ui.editing_id = None;
            actions.push(Action::SelectionChanged(Some(id)));
        }

        let Some(page) = self.project.current_page_mut() else {
            return actions;
        };
        if let Some(element) = page.get_mut(&id) {
            if element.just_created && element.kind.is_text() {
                element.just_created = false;
                self.ui.editing_id = Some(id);
                actions.push(Action::EditTextRequested {
                    id,
                    content: element.content.clone().unwrap_or_default(),
                });
            }
        }

        actions.push(Action::RenderNeeded);
        actions
    }

    /// Apply a sparse update to an element.
    pub fn update_element(&mut self, id: &ElementId, fields: PartialElement) -> Vec<Action> {
        let Some(page) = self.project.current_page_mut() else {
            return Vec::new();
        };
        if !page.apply_partial(id, &fields) {
            log::debug!("update for unknown element {id}");
            return Vec::new();
        }
        vec![Action::ElementUpdated { id: *id, fields }, Action::RenderNeeded]
    }

    /// Move an element to an absolute position, clamped to the page origin.
    pub fn update_element_position(&mut self, id: &ElementId, x: f64, y: f64) -> Vec<Action> {
        self.update_element(id, PartialElement::position(x.max(0.0), y.max(0.0)))
    }

    /// Resize an element in place, floored at the minimum size.
    pub fn update_element_size(&mut self, id: &ElementId, width: f64, height: f64) -> Vec<Action> {
        let fields = PartialElement {
            width: Some(width.max(MIN_ELEMENT_SIZE)),
            height: Some(height.max(MIN_ELEMENT_SIZE)),
            ..PartialElement::default()
        };
        self.update_element(id, fields)
    }

    /// Delete an element, clearing selection and edit mode if it was involved.
    pub fn delete_element(&mut self, id: &ElementId) -> Vec<Action> {
        let Some(page) = self.project.current_page_mut() else {
            return Vec::new();
        };
        if page.remove(id).is_none() {
            log::debug!("delete for unknown element {id}");
            return Vec::new();
        }

        let mut actions = vec![Action::ElementDeleted { id: *id }];
        if self.ui.selected_id == Some(*id) {
            self.ui.selected_id = None;
            self.ui.editing_id = None;
            actions.push(Action::SelectionChanged(None));
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Duplicate an element with a fresh id, offset so the copy is visible,
    /// and select the copy.
    pub fn duplicate_element(&mut self, id: &ElementId) -> Vec<Action> {
        let Some(page) = self.project.current_page_mut() else {
            return Vec::new();
        };
        let Some(source) = page.get(id) else {
            log::debug!("duplicate for unknown element {id}");
            return Vec::new();
        };

        let mut copy = source.clone();
        copy.id = ElementId::new_v4();
        copy.x += DUPLICATE_OFFSET;
        copy.y += DUPLICATE_OFFSET;
        copy.name.push_str(" Copy");
        copy.just_created = false;
        self.insert_and_select(copy)
    }

    /// Add a basic element of `kind` at the default insertion point.
    pub fn add_basic_element(&mut self, kind: ElementKind) -> Vec<Action> {
        let (w, h) = if kind.is_text() {
            (DEFAULT_TEXT_WIDTH, DEFAULT_TEXT_HEIGHT)
        } else {
            (DEFAULT_SHAPE_SIZE, DEFAULT_SHAPE_SIZE)
        };
        let mut element = Element::new(kind, DEFAULT_INSERT_X, DEFAULT_INSERT_Y, w, h);
        element.content = match kind {
            ElementKind::Text => Some(PLACEHOLDER_TEXT.to_owned()),
            ElementKind::Button => Some("Button".to_owned()),
            _ => None,
        };
        self.insert_and_select(element)
    }

    /// Add a composite template element.
    ///
    /// `element_type` routes to a template family: `"menu"` and `"navigation"`
    /// use the named variant tables, `"ai-generated"` treats `template_name`
    /// as a JSON payload from the generation service. Anything else falls back
    /// to a plain container.
    pub fn add_template_element(&mut self, element_type: &str, template_name: &str) -> Vec<Action> {
        let element = match element_type {
            "menu" => templates::menu(template_name),
            "navigation" => templates::navigation(template_name),
            "ai-generated" => ai::element_from_payload(template_name),
            other => {
                log::debug!("unknown template type {other:?}, using container");
                let mut element = Element::new(
                    ElementKind::Container,
                    DEFAULT_INSERT_X,
                    DEFAULT_INSERT_Y,
                    200.0,
                    100.0,
                );
                element.name = template_name.to_owned();
                element.content = Some(template_name.to_owned());
                element.styles = serde_json::json!({
                    "backgroundColor": "#f3f4f6",
                    "borderRadius": "8px",
                    "padding": "16px",
                });
                element
            }
        };
        self.insert_and_select(element)
    }

    /// Add an element generated from a free-text prompt via the keyword table.
    pub fn add_ai_element(&mut self, prompt: &str) -> Vec<Action> {
        self.insert_and_select(ai::generate(prompt))
    }

    /// Commit text from the host's inline editor and leave edit mode.
    pub fn commit_text(&mut self, id: &ElementId, content: String) -> Vec<Action> {
        if self.ui.editing_id == Some(*id) {
            self.ui.editing_id = None;
        }
        let fields = PartialElement { content: Some(content), ..PartialElement::default() };
        self.update_element(id, fields)
    }

    // --- Tool / viewport ---

    /// Set the active tool. Leaving the vector tool disarms the shape.
    pub fn set_tool(&mut self, tool: Tool) {
        self.ui.tool = tool;
        if tool != Tool::Vector {
            self.ui.vector_shape = None;
        }
    }

    /// Arm a vector shape, activating the vector tool.
    pub fn set_vector_shape(&mut self, shape: VectorShape) {
        self.ui.tool = Tool::Vector;
        self.ui.vector_shape = Some(shape);
    }

    /// Switch the responsive breakpoint. Geometry is shared across
    /// breakpoints, so the selection is cleared to avoid stale overlays. Any
    /// in-flight gesture is cancelled, restoring the original geometry.
    pub fn set_breakpoint(&mut self, breakpoint: Breakpoint) -> Vec<Action> {
        self.viewport.breakpoint = breakpoint;
        let mut actions = self.cancel_gesture();
        actions.extend(self.clear_selection());
        actions.retain(|a| !matches!(a, Action::RenderNeeded));
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Set the zoom percentage (clamped to the viewport's bounds).
    pub fn set_zoom(&mut self, percent: f64) -> Vec<Action> {
        self.viewport.set_zoom_percent(percent);
        vec![Action::RenderNeeded]
    }

    // --- Pages ---

    /// Append a new empty page. Does not switch to it.
    pub fn add_page(&mut self, name: impl Into<String>) -> PageId {
        self.project.add_page(name)
    }

    /// Switch the current page, dropping the selection. Any in-flight gesture
    /// is cancelled first, so the element on the outgoing page keeps its
    /// pre-gesture geometry.
    pub fn switch_page(&mut self, id: &PageId) -> Vec<Action> {
        if !self.project.pages().iter().any(|p| &p.id == id) {
            log::debug!("switch to unknown page {id}");
            return Vec::new();
        }
        let mut actions = self.cancel_gesture();
        self.project.switch_page(id);
        actions.extend(self.clear_selection());
        actions.retain(|a| !matches!(a, Action::RenderNeeded));
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Rename a page.
    pub fn rename_page(&mut self, id: &PageId, name: impl Into<String>) -> bool {
        self.project.rename_page(id, name)
    }

    // --- Queries ---

    /// The currently selected element, if any.
    #[must_use]
    pub fn selection(&self) -> Option<ElementId> {
        self.ui.selected_id
    }

    /// The element currently in inline-edit mode, if any.
    #[must_use]
    pub fn editing(&self) -> Option<ElementId> {
        self.ui.editing_id
    }

    /// Look up an element on the current page.
    #[must_use]
    pub fn element(&self, id: &ElementId) -> Option<&Element> {
        self.project.current_page().and_then(|p| p.get(id))
    }

    // --- Internals ---

    fn begin_drag(&mut self, id: ElementId, pt: Point) {
        let Some(element) = self.element(&id) else {
            return;
        };
        self.input = InputState::DraggingElement {
            id,
            last: pt,
            orig_x: element.x,
            orig_y: element.y,
        };
    }

    fn begin_resize(&mut self, id: ElementId, anchor: ResizeAnchor, pt: Point) -> Vec<Action> {
        let Some(element) = self.element(&id) else {
            return Vec::new();
        };
        self.input = InputState::ResizingElement {
            id,
            anchor,
            start: pt,
            orig_x: element.x,
            orig_y: element.y,
            orig_w: element.width,
            orig_h: element.height,
        };
        self.set_cursor(anchor.cursor())
    }

    /// Drop a text element at a canvas point, seeded with placeholder content.
    ///
    /// Reverts the active tool to [`Tool::Select`]; selecting the fresh
    /// element also puts it into edit mode.
    pub fn add_text_at(&mut self, pt: Point) -> Vec<Action> {
        let mut element =
            Element::new(ElementKind::Text, pt.x, pt.y, DEFAULT_TEXT_WIDTH, DEFAULT_TEXT_HEIGHT);
        element.content = Some(PLACEHOLDER_TEXT.to_owned());
        element.just_created = true;
        self.ui.tool = Tool::Select;
        self.insert_and_select(element)
    }

    /// Drop a vector shape at a canvas point and select it.
    ///
    /// Reverts the active tool to [`Tool::Select`] and disarms the shape.
    pub fn add_vector_shape_at(&mut self, shape: VectorShape, pt: Point) -> Vec<Action> {
        let element = shape.build_element(pt);
        self.ui.tool = Tool::Select;
        self.ui.vector_shape = None;
        self.insert_and_select(element)
    }

    fn insert_and_select(&mut self, element: Element) -> Vec<Action> {
        let id = element.id;
        let created = element.clone();
        let Some(page) = self.project.current_page_mut() else {
            return Vec::new();
        };
        page.insert(element);

        let mut actions = vec![Action::ElementCreated(created)];
        actions.extend(self.select_element(Some(id)));
        actions
    }

    fn clear_selection(&mut self) -> Vec<Action> {
        self.ui.editing_id = None;
        if self.ui.selected_id.take().is_some() {
            vec![Action::SelectionChanged(None), Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    fn finish_gesture(&mut self) -> Vec<Action> {
        let state = std::mem::take(&mut self.input);
        let mut actions = match state {
            InputState::Idle => Vec::new(),
            InputState::DraggingElement { id, orig_x, orig_y, .. } => {
                match self.element(&id) {
                    Some(el) if el.x != orig_x || el.y != orig_y => {
                        vec![Action::ElementUpdated {
                            id,
                            fields: PartialElement::position(el.x, el.y),
                        }]
                    }
                    _ => Vec::new(),
                }
            }
            InputState::ResizingElement { id, orig_x, orig_y, orig_w, orig_h, .. } => {
                match self.element(&id) {
                    Some(el)
                        if el.x != orig_x
                            || el.y != orig_y
                            || el.width != orig_w
                            || el.height != orig_h =>
                    {
                        vec![Action::ElementUpdated {
                            id,
                            fields: PartialElement::geometry(el.x, el.y, el.width, el.height),
                        }]
                    }
                    _ => Vec::new(),
                }
            }
        };
        actions.extend(self.set_cursor("default"));
        actions
    }

    fn cancel_gesture(&mut self) -> Vec<Action> {
        let state = std::mem::take(&mut self.input);
        let restored = match state {
            InputState::Idle => false,
            InputState::DraggingElement { id, orig_x, orig_y, .. } => self
                .project
                .current_page_mut()
                .is_some_and(|p| p.set_position(&id, orig_x, orig_y)),
            InputState::ResizingElement { id, orig_x, orig_y, orig_w, orig_h, .. } => {
                match self.project.current_page_mut() {
                    Some(page) => {
                        page.set_position(&id, orig_x, orig_y);
                        page.set_size(&id, orig_w, orig_h)
                    }
                    None => false,
                }
            }
        };

        let mut actions = self.set_cursor("default");
        if restored {
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    fn hover_cursor(&mut self, pt: Point) -> Vec<Action> {
        let slop = self.viewport.screen_dist_to_canvas(HANDLE_RADIUS_PX);
        let hit = match self.project.current_page() {
            Some(page) => hit::hit_test(pt, page, self.ui.selected_id, slop),
            None => None,
        };
        let cursor = match hit.map(|h| h.part) {
            Some(HitPart::ResizeHandle(anchor)) => anchor.cursor(),
            Some(HitPart::Body) => "move",
            None => "default",
        };
        self.set_cursor(cursor)
    }

    fn set_cursor(&mut self, cursor: &str) -> Vec<Action> {
        if self.cursor == cursor {
            return Vec::new();
        }
        self.cursor = cursor.to_owned();
        vec![Action::SetCursor(cursor.to_owned())]
    }
}

/// Compute resized geometry for a handle drag.
///
/// The edge or corner opposite the dragged handle stays fixed. Dimensions are
/// floored at the minimum size; if clamping the position to the page origin
/// would move the anchored edge, the overshoot is absorbed by the dimension
/// instead.
fn resize_geometry(
    anchor: ResizeAnchor,
    dx: f64,
    dy: f64,
    orig_x: f64,
    orig_y: f64,
    orig_w: f64,
    orig_h: f64,
) -> (f64, f64, f64, f64) {
    let grows_right = matches!(anchor, ResizeAnchor::Ne | ResizeAnchor::E | ResizeAnchor::Se);
    let grows_left = matches!(anchor, ResizeAnchor::Nw | ResizeAnchor::W | ResizeAnchor::Sw);
    let grows_down = matches!(anchor, ResizeAnchor::Se | ResizeAnchor::S | ResizeAnchor::Sw);
    let grows_up = matches!(anchor, ResizeAnchor::Nw | ResizeAnchor::N | ResizeAnchor::Ne);

    let (mut x, mut w) = if grows_right {
        (orig_x, (orig_w + dx).max(MIN_ELEMENT_SIZE))
    } else if grows_left {
        let w = (orig_w - dx).max(MIN_ELEMENT_SIZE);
        (orig_x + orig_w - w, w)
    } else {
        (orig_x, orig_w)
    };

    let (mut y, mut h) = if grows_down {
        (orig_y, (orig_h + dy).max(MIN_ELEMENT_SIZE))
    } else if grows_up {
        let h = (orig_h - dy).max(MIN_ELEMENT_SIZE);
        (orig_y + orig_h - h, h)
    } else {
        (orig_y, orig_h)
    };

    // Clamping at the origin must not move the anchored right/bottom edge.
    if x < 0.0 {
        w = (w + x).max(MIN_ELEMENT_SIZE);
        x = 0.0;
    }
    if y < 0.0 {
        h = (h + y).max(MIN_ELEMENT_SIZE);
        y = 0.0;
    }

    (x, y, w, h)
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas, core: EngineCore::new() }
    }

    // --- Delegated input events ---

    pub fn on_pointer_down(
        &mut self,
        screen_pt: Point,
        button: Button,
        modifiers: Modifiers,
    ) -> Vec<Action> {
        self.core.on_pointer_down(screen_pt, button, modifiers)
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_pointer_move(screen_pt, modifiers)
    }

    pub fn on_pointer_up(
        &mut self,
        screen_pt: Point,
        button: Button,
        modifiers: Modifiers,
    ) -> Vec<Action> {
        self.core.on_pointer_up(screen_pt, button, modifiers)
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.core.on_pointer_leave()
    }

    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_key_down(key, modifiers)
    }

    // --- Delegated element operations ---

    /// Select an element, or pass `None` to deselect.
    pub fn select_element(&mut self, id: Option<ElementId>) -> Vec<Action> {
        self.core.select_element(id)
    }

    // --- Render ---

    /// Draw the current page to the canvas.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx: CanvasRenderingContext2d = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into()?;

        let Some(page) = self.core.project.current_page() else {
            return Ok(());
        };
        render::draw(&ctx, page, &self.core.ui, &self.core.viewport)
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn selection(&self) -> Option<ElementId> {
        self.core.selection()
    }

    #[must_use]
    pub fn element(&self, id: &ElementId) -> Option<&Element> {
        self.core.element(id)
    }
}
