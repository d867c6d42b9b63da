//! Rendering utilities for human surfaces (Markdown, console text).
//!
//! Renderers work on small renderable models built by the app layer, never
//! on domain types directly, and are fully deterministic.

#![forbid(unsafe_code)]

mod console;
mod datetime;
mod markdown;
mod model;

pub use console::{render_decision_text, render_state_text};
pub use datetime::format_ms_string;
pub use markdown::render_markdown;
pub use model::{
    RenderableDecision, RenderableMethod, RenderablePastAction, RenderablePolicy,
    RenderableSession, RenderableState, RenderableStatus, RenderableUser,
};
