//! Class blueprint synthesis for PHP sources.
//!
//! Callers assemble a [`model::Blueprint`] member by member, then resolve
//! it into a [`model::ResolvedBlueprint`] and render that to text. The
//! model never parses existing code.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`generation`] - Import bookkeeping (ImportSet, shorten_type)
//! - [`language`] - PHP line classification for method bodies
//! - [`model`] - Blueprint, members, comments and the member registry

pub mod builder;
pub mod generation;
pub mod language;
pub mod model;

mod config;
mod error;
mod file;

pub use config::RenderOptions;
pub use error::{Error, MemberKind, Result};
pub use file::PhpFile;
