//! Output Renderers
//!
//! Two read-only projections of the aggregate model; exactly one runs per
//! invocation, chosen by [`crate::config::OutputMode`].

pub mod dot;
pub mod text;

pub use dot::render_dot;
pub use text::render_text;
