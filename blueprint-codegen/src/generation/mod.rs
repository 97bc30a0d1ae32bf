//! Import bookkeeping for generated sources.
//!
//! - [`ImportSet`] - Fully-qualified path registry and deduplication
//! - [`shorten_type`] - Rewrites type expressions to their short names

mod imports;

pub use imports::{ImportSet, shorten_type};
