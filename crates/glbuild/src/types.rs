//! Build vocabulary shared by the compiler and linker.
//!
//! Types:
//!
//! - `ShaderSource` tags source text with the stage it targets, replacing the
//!   lessons' implicit "index 0 is the vertex shader" convention.
//! - `AttributeBinding` pairs an attribute name with an optional explicit
//!   location, replacing the parallel name/location arrays the lesson call
//!   sites used to pass.
//! - `BuildError` classifies the two ways a build can fail, each carrying the
//!   driver log verbatim.

use thiserror::Error;

use crate::context::ShaderStage;

/// Source text for one shader stage.
#[derive(Clone, Copy, Debug)]
pub struct ShaderSource<'a> {
    pub stage: ShaderStage,
    pub text: &'a str,
}

impl<'a> ShaderSource<'a> {
    /// Tags `text` as vertex-stage source.
    pub fn vertex(text: &'a str) -> Self {
        Self {
            stage: ShaderStage::Vertex,
            text,
        }
    }

    /// Tags `text` as fragment-stage source.
    pub fn fragment(text: &'a str) -> Self {
        Self {
            stage: ShaderStage::Fragment,
            text,
        }
    }
}

/// Associates a vertex attribute name with an optional explicit location.
///
/// A binding without a location leaves the slot assignment to the driver;
/// one with a location is applied before the link step so the program ends
/// up with the requested slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeBinding {
    pub name: String,
    pub location: Option<u32>,
}

impl AttributeBinding {
    /// Binding that keeps the driver-assigned location.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: None,
        }
    }

    /// Binding that requests an explicit location.
    pub fn at(name: impl Into<String>, location: u32) -> Self {
        Self {
            name: name.into(),
            location: Some(location),
        }
    }

    /// Pairs names with locations positionally, the way the lessons' parallel
    /// arrays did. Names past the end of `locations` keep driver-assigned
    /// locations.
    pub fn zip(names: &[&str], locations: &[u32]) -> Vec<Self> {
        names
            .iter()
            .enumerate()
            .map(|(index, name)| Self {
                name: (*name).to_string(),
                location: locations.get(index).copied(),
            })
            .collect()
    }
}

/// A failed shader build.
///
/// Both kinds are terminal for the requested operation: source text is
/// static, so retrying without changing it cannot succeed.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The driver rejected one stage's source; `log` is the compile log.
    #[error("{stage} shader failed to compile: {log}")]
    Compile { stage: ShaderStage, log: String },

    /// The driver refused to link the attached stages; `log` is the link log.
    #[error("program failed to link: {log}")]
    Link { log: String },
}

impl BuildError {
    /// Driver-reported diagnostic text, verbatim.
    pub fn log(&self) -> &str {
        match self {
            BuildError::Compile { log, .. } | BuildError::Link { log } => log,
        }
    }
}
