//! Compiles shader-stage source and links it into executable programs.
//!
//! Functions:
//!
//! - `compile_shader` turns one source string into a compiled shader object
//!   or a [`BuildError::Compile`] carrying the driver log.
//! - `link_program` combines compiled shaders into a linked program, applying
//!   explicit attribute bindings ahead of the link step.
//! - `create_program_from_sources` is the entry point lesson code uses: it
//!   compiles every tagged source, links, and converts any failure into
//!   "report the diagnostic, return `None`".
//! - `program_from_sources` keeps the old positional vertex/fragment calling
//!   convention alive for existing call sites.
//!
//! Failure policy: the first failure short-circuits, its diagnostic always
//! surfaces (caller callback or the tracing sink), and no GPU handle survives
//! a failed step.

use tracing::{debug, error};

use crate::context::{RenderingContext, ShaderStage};
use crate::types::{AttributeBinding, BuildError, ShaderSource};

/// Caller-supplied channel for build diagnostics.
pub type ErrorCallback<'a> = &'a mut dyn FnMut(&str);

/// Compiles `source` as a shader of the given stage.
///
/// A failed compile deletes the shader object before returning, so no handle
/// outlives the failure; the returned error carries the driver's compile log.
pub fn compile_shader<C: RenderingContext>(
    gl: &C,
    stage: ShaderStage,
    source: &str,
) -> Result<C::Shader, BuildError> {
    let shader = gl
        .create_shader(stage)
        .map_err(|log| BuildError::Compile { stage, log })?;
    gl.shader_source(shader, source);
    gl.compile_shader(shader);
    if gl.compile_succeeded(shader) {
        return Ok(shader);
    }

    let log = gl.shader_info_log(shader);
    gl.delete_shader(shader);
    debug!(%stage, "shader compile failed; deleted shader object");
    Err(BuildError::Compile { stage, log })
}

/// Links previously compiled shaders into a program.
///
/// Shaders are attached in the given order and every explicit attribute
/// binding is applied before the link step. A failed link deletes the program
/// object before returning; on success the attached shaders stay alive and
/// may be detached and released by the caller at will.
pub fn link_program<C: RenderingContext>(
    gl: &C,
    shaders: &[C::Shader],
    bindings: &[AttributeBinding],
) -> Result<C::Program, BuildError> {
    debug_assert!(
        !shaders.is_empty(),
        "link_program needs at least one compiled shader"
    );

    let program = gl.create_program().map_err(|log| BuildError::Link { log })?;
    for &shader in shaders {
        gl.attach_shader(program, shader);
    }
    // Explicit locations must land before the link step; the driver ignores
    // bind_attrib_location calls made after it.
    for binding in bindings {
        if let Some(location) = binding.location {
            gl.bind_attrib_location(program, location, &binding.name);
        }
    }
    gl.link_program(program);
    if gl.link_succeeded(program) {
        return Ok(program);
    }

    let log = gl.program_info_log(program);
    gl.delete_program(program);
    debug!("program link failed; deleted program object");
    Err(BuildError::Link { log })
}

/// Builds a linked program straight from tagged source text.
///
/// The first compile failure short-circuits: remaining stages are not
/// compiled, the diagnostic is reported exactly once, stage objects created
/// so far are deleted, and the result is `None` — no partial program. A link
/// failure is reported the same way. On success the intermediate shaders are
/// detached and deleted, since the link has already captured what it needs.
///
/// With no callback supplied, diagnostics go to the `tracing` error sink;
/// they are never silently dropped.
pub fn create_program_from_sources<C: RenderingContext>(
    gl: &C,
    sources: &[ShaderSource<'_>],
    bindings: &[AttributeBinding],
    mut on_error: Option<ErrorCallback<'_>>,
) -> Option<C::Program> {
    let mut shaders = Vec::with_capacity(sources.len());
    for source in sources {
        match compile_shader(gl, source.stage, source.text) {
            Ok(shader) => shaders.push(shader),
            Err(err) => {
                report(on_error.take(), &err.to_string());
                for &shader in &shaders {
                    gl.delete_shader(shader);
                }
                return None;
            }
        }
    }

    match link_program(gl, &shaders, bindings) {
        Ok(program) => {
            for &shader in &shaders {
                gl.detach_shader(program, shader);
                gl.delete_shader(shader);
            }
            Some(program)
        }
        Err(err) => {
            report(on_error.take(), &err.to_string());
            for &shader in &shaders {
                gl.delete_shader(shader);
            }
            None
        }
    }
}

/// Builds a program from positional sources: index 0 is the vertex stage,
/// index 1 the fragment stage, matching the lessons' calling convention.
pub fn program_from_sources<C: RenderingContext>(
    gl: &C,
    sources: &[&str],
    bindings: &[AttributeBinding],
    mut on_error: Option<ErrorCallback<'_>>,
) -> Option<C::Program> {
    if sources.len() != 2 {
        report(
            on_error.take(),
            &format!(
                "expected one vertex and one fragment source, got {}",
                sources.len()
            ),
        );
        return None;
    }

    let tagged = [
        ShaderSource::vertex(sources[0]),
        ShaderSource::fragment(sources[1]),
    ];
    create_program_from_sources(gl, &tagged, bindings, on_error)
}

/// Delivers a diagnostic through the caller's callback, or to the tracing
/// sink when no callback was supplied.
fn report(on_error: Option<ErrorCallback<'_>>, diagnostic: &str) {
    match on_error {
        Some(callback) => callback(diagnostic),
        None => error!(target: "glbuild", "{diagnostic}"),
    }
}
