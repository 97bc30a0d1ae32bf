//! PHP language rules used while rendering method bodies.
//!
//! - [`classify`] - Decides whether a body line receives a `;` terminator
//! - [`ends_with_special`] / [`starts_with_special`] - Continuation detection

mod lines;

pub use lines::{
    CONTINUATION_CHARACTERS, LineKind, classify, ends_with_special, is_block, is_comment,
    starts_with_special, terminate,
};
