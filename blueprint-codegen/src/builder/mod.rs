//! Code generation building blocks.
//!
//! This module provides the core primitives every renderer goes through:
//! - [`CodeBuilder`] - Indentation-aware line writer
//! - [`CodeFragment`] - Intermediate representation for code pieces
//! - [`Renderable`] - Trait for types that can be converted to code fragments
//! - [`Indent`] - Indentation configuration

mod code_builder;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};

/// Render a node to text with the given indentation unit.
///
/// The result carries no trailing newline.
pub fn render_to_string(node: &impl Renderable, indent: Indent) -> String {
    let mut builder = CodeBuilder::new(indent);
    builder.emit(node);
    builder.finish()
}
