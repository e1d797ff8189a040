//! Manifest assembly and rendering
//!
//! Turns an environment store and a build profile into the resolved build
//! configuration, then substitutes `${NAME}` tokens in manifest templates.

pub mod assembler;
pub mod renderer;

pub use assembler::{ManifestAssembler, ResolvedBuildConfig};
pub use renderer::{ManifestRenderer, RenderError};
