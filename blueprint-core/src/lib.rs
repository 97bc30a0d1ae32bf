//! Core text utilities for the blueprint code generator.
//!
//! This crate provides the small string toolbox the generator relies on:
//! namespace path splitting and identifier checks.

mod path;
mod utils;

// Namespace paths
pub use path::{NAMESPACE_SEPARATOR, after_last, has_namespace, is_type_path};
// String utilities
pub use utils::is_identifier;
