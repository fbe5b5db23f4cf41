//! Scripted stand-in for a GPU driver.
//!
//! Build behaviour becomes observable without a GL session: the fake keeps
//! live-object accounting for leak checks, records attach order and attribute
//! bindings, and decides compile/link verdicts from markers embedded in the
//! source text. `FakeSurface` plays the same role for the surface resizer.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::context::{RenderingContext, ShaderStage};
use crate::surface::DisplaySurface;

/// Sources containing this marker fail to compile.
pub(crate) const BAD_SOURCE: &str = "#error";
/// Programs with an attached stage whose source carries this marker fail to
/// link.
pub(crate) const BAD_LINK: &str = "varying_mismatch";

#[derive(Clone)]
struct ShaderRecord {
    stage: ShaderStage,
    source: String,
    compile_ok: bool,
}

#[derive(Default)]
struct ProgramRecord {
    /// Stage snapshots taken at attach time, in attach order.
    attached: Vec<ShaderRecord>,
    /// Explicit bindings requested before the link step.
    bound: HashMap<String, u32>,
    /// Attribute locations frozen at link time.
    locations: HashMap<String, u32>,
    link_ok: bool,
}

#[derive(Default)]
struct State {
    next_id: u32,
    shaders: HashMap<u32, ShaderRecord>,
    programs: HashMap<u32, ProgramRecord>,
    shaders_created: usize,
    programs_created: usize,
}

/// In-memory driver with GL-shaped object bookkeeping.
#[derive(Default)]
pub(crate) struct FakeContext {
    state: RefCell<State>,
}

impl FakeContext {
    pub(crate) fn live_shaders(&self) -> usize {
        self.state.borrow().shaders.len()
    }

    pub(crate) fn live_programs(&self) -> usize {
        self.state.borrow().programs.len()
    }

    pub(crate) fn shaders_created(&self) -> usize {
        self.state.borrow().shaders_created
    }

    pub(crate) fn programs_created(&self) -> usize {
        self.state.borrow().programs_created
    }
}

/// Pulls attribute names out of vertex source in order of first appearance.
/// Anything shaped like an identifier starting with `a_` counts.
fn attribute_names(source: &str) -> Vec<String> {
    let mut names = Vec::new();
    for token in source.split(|c: char| !c.is_ascii_alphanumeric() && c != '_') {
        if token.starts_with("a_") && !names.iter().any(|known| known == token) {
            names.push(token.to_string());
        }
    }
    names
}

impl ProgramRecord {
    /// Mimics the driver's location assignment: explicit bindings win, every
    /// other active attribute gets the lowest free slot in appearance order.
    fn assign_locations(&mut self) {
        self.locations.clear();
        let mut taken: Vec<u32> = Vec::new();
        for record in &self.attached {
            if record.stage != ShaderStage::Vertex {
                continue;
            }
            for name in attribute_names(&record.source) {
                if let Some(&location) = self.bound.get(&name) {
                    self.locations.insert(name, location);
                    taken.push(location);
                }
            }
        }
        let mut next = 0u32;
        for record in &self.attached {
            if record.stage != ShaderStage::Vertex {
                continue;
            }
            for name in attribute_names(&record.source) {
                if self.locations.contains_key(&name) {
                    continue;
                }
                while taken.contains(&next) {
                    next += 1;
                }
                self.locations.insert(name, next);
                taken.push(next);
            }
        }
    }
}

impl RenderingContext for FakeContext {
    type Shader = u32;
    type Program = u32;

    fn create_shader(&self, stage: ShaderStage) -> Result<u32, String> {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        let id = state.next_id;
        state.shaders.insert(
            id,
            ShaderRecord {
                stage,
                source: String::new(),
                compile_ok: false,
            },
        );
        state.shaders_created += 1;
        Ok(id)
    }

    fn shader_source(&self, shader: u32, source: &str) {
        let mut state = self.state.borrow_mut();
        let record = state.shaders.get_mut(&shader).expect("unknown shader");
        record.source = source.to_string();
    }

    fn compile_shader(&self, shader: u32) {
        let mut state = self.state.borrow_mut();
        let record = state.shaders.get_mut(&shader).expect("unknown shader");
        record.compile_ok = !record.source.contains(BAD_SOURCE);
    }

    fn compile_succeeded(&self, shader: u32) -> bool {
        self.state.borrow().shaders[&shader].compile_ok
    }

    fn shader_info_log(&self, shader: u32) -> String {
        let state = self.state.borrow();
        let record = &state.shaders[&shader];
        if record.compile_ok {
            String::new()
        } else {
            format!("0:1: '{BAD_SOURCE}' : {} compilation failed", record.stage)
        }
    }

    fn delete_shader(&self, shader: u32) {
        self.state.borrow_mut().shaders.remove(&shader);
    }

    fn create_program(&self) -> Result<u32, String> {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        let id = state.next_id;
        state.programs.insert(id, ProgramRecord::default());
        state.programs_created += 1;
        Ok(id)
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        let mut state = self.state.borrow_mut();
        let record = state.shaders[&shader].clone();
        state
            .programs
            .get_mut(&program)
            .expect("unknown program")
            .attached
            .push(record);
    }

    fn detach_shader(&self, _program: u32, _shader: u32) {}

    fn bind_attrib_location(&self, program: u32, location: u32, name: &str) {
        let mut state = self.state.borrow_mut();
        state
            .programs
            .get_mut(&program)
            .expect("unknown program")
            .bound
            .insert(name.to_string(), location);
    }

    fn link_program(&self, program: u32) {
        let mut state = self.state.borrow_mut();
        let record = state.programs.get_mut(&program).expect("unknown program");
        record.link_ok = !record.attached.is_empty()
            && record.attached.iter().all(|shader| shader.compile_ok)
            && !record
                .attached
                .iter()
                .any(|shader| shader.source.contains(BAD_LINK));
        if record.link_ok {
            record.assign_locations();
        }
    }

    fn link_succeeded(&self, program: u32) -> bool {
        self.state.borrow().programs[&program].link_ok
    }

    fn program_info_log(&self, program: u32) -> String {
        if self.state.borrow().programs[&program].link_ok {
            String::new()
        } else {
            "varying mismatch between stages: link failed".to_string()
        }
    }

    fn delete_program(&self, program: u32) {
        self.state.borrow_mut().programs.remove(&program);
    }

    fn attrib_location(&self, program: u32, name: &str) -> Option<u32> {
        self.state.borrow().programs[&program]
            .locations
            .get(name)
            .copied()
    }
}

/// Surface whose displayed and backing sizes are plain fields.
pub(crate) struct FakeSurface {
    pub(crate) display: (f64, f64),
    pub(crate) backing: (u32, u32),
}

impl DisplaySurface for FakeSurface {
    fn display_size(&self) -> (f64, f64) {
        self.display
    }

    fn backing_size(&self) -> (u32, u32) {
        self.backing
    }

    fn set_backing_size(&mut self, width: u32, height: u32) {
        self.backing = (width, height);
    }
}
