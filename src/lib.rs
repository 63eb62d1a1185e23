//! Canvas element-manipulation engine for the visual page builder.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! full lifecycle of the builder canvas: translating raw DOM input events into
//! page mutations, maintaining the breakpoint/zoom viewport, hit-testing
//! elements and their resize handles, and rendering the scene. The host layer
//! is responsible only for wiring DOM events to the engine and persisting the
//! resulting [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`element`] | Element model, sparse updates, and the style bag |
//! | [`page`] | Page and project model (ordered element lists) |
//! | [`viewport`] | Breakpoint presets, zoom, and coordinate conversions |
//! | [`input`] | Input event types and the gesture state machine |
//! | [`hit`] | Hit-testing against elements and resize handles |
//! | [`render`] | Scene rendering to the 2D context |
//! | [`templates`] | Menu and navigation template elements |
//! | [`ai`] | Prompt-driven element generation |
//! | [`consts`] | Shared numeric constants (sizes, floors, grid step) |

pub mod ai;
pub mod consts;
pub mod element;
pub mod engine;
pub mod hit;
pub mod input;
pub mod page;
pub mod render;
pub mod templates;
pub mod viewport;
