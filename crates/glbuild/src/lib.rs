//! Shader program build utilities shared by the GL lessons.
//!
//! The crate turns shader-stage source text into linked GPU programs over an
//! abstract [`RenderingContext`] and keeps a rendering surface's backing
//! pixel store in step with the size it is displayed at. The overall flow is:
//!
//! ```text
//!   lesson code
//!        │ tagged sources + attribute bindings
//!        ▼
//!   create_program_from_sources ──▶ compile_shader (per stage)
//!        │                                │ failure: report + delete
//!        ▼                                ▼
//!   link_program ◀── compiled shaders ────┘
//!        │ failure: report + delete
//!        ▼
//!   Program handle ──▶ caller's own draw calls
//! ```
//!
//! Every operation is synchronous, stateless, and driven entirely by the
//! caller: the context is borrowed for the duration of one call and no handle
//! is retained past the return that produced it. Failure is data — a
//! [`BuildError`] carrying the driver log verbatim — and the convenience
//! entry point converts it into "report the diagnostic, return `None`" so
//! lesson code can treat a missing program as the sole failure signal.
//!
//! The `glow` feature implements [`RenderingContext`] for [`glow::Context`]
//! so callers with a live GL session can use the builder directly.

pub mod compile;
pub mod context;
pub mod surface;
pub mod types;

#[cfg(feature = "glow")]
pub mod glow_backend;

#[cfg(test)]
pub(crate) mod fake;

pub use compile::{
    compile_shader, create_program_from_sources, link_program, program_from_sources, ErrorCallback,
};
pub use context::{RenderingContext, ShaderStage};
pub use surface::{resize_to_display, DisplaySurface};
pub use types::{AttributeBinding, BuildError, ShaderSource};
