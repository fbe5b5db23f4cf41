//! Driver seam between the program builder and whatever GL-flavoured API
//! owns the actual GPU session.
//!
//! [`RenderingContext`] replaces the lessons' old host-global utility object
//! with explicit dependency injection: the caller owns the context and passes
//! it by reference into every build call. The trait deliberately mirrors the
//! relevant slice of `glow::HasContext` so the `glow` feature can delegate
//! one-to-one, while tests drive a scripted fake driver instead.

use std::fmt;
use std::hash::Hash;

/// One compilation unit of the graphics pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// The subset of driver entry points the program builder needs.
///
/// Handles are opaque `Copy` values owned by the caller; the builder never
/// stores one past the call that produced it. Object creation reports driver
/// failures as plain message strings, matching `glow`; everything else is
/// fire-and-forget with status queried separately, the way the underlying GL
/// entry points behave.
pub trait RenderingContext {
    /// Opaque compiled-shader handle.
    type Shader: Copy + Eq + Hash + fmt::Debug;
    /// Opaque linked-program handle.
    type Program: Copy + Eq + Hash + fmt::Debug;

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String>;
    fn shader_source(&self, shader: Self::Shader, source: &str);
    fn compile_shader(&self, shader: Self::Shader);
    fn compile_succeeded(&self, shader: Self::Shader) -> bool;
    fn shader_info_log(&self, shader: Self::Shader) -> String;
    fn delete_shader(&self, shader: Self::Shader);

    fn create_program(&self) -> Result<Self::Program, String>;
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn detach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn bind_attrib_location(&self, program: Self::Program, location: u32, name: &str);
    fn link_program(&self, program: Self::Program);
    fn link_succeeded(&self, program: Self::Program) -> bool;
    fn program_info_log(&self, program: Self::Program) -> String;
    fn delete_program(&self, program: Self::Program);

    /// Location the linked program assigned to a vertex attribute, if the
    /// attribute is active in the program.
    fn attrib_location(&self, program: Self::Program, name: &str) -> Option<u32>;
}
