//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! Model nodes describe their output as fragments; [`CodeBuilder`] turns the
//! fragments into text.
//!
//! [`CodeBuilder`]: super::CodeBuilder

/// Represents a fragment of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// A blank line. Never receives indentation.
    Blank,
    /// A block with header, body fragments, and optional closing line.
    ///
    /// The body is indented by one unit relative to the header.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// Prefix every line of the contained fragments with a literal string.
    Prefixed {
        prefix: String,
        body: Vec<CodeFragment>,
    },
    /// A `/** ... */` doc block, one entry per inner line.
    DocBlock(Vec<String>),
    /// Consecutive `//` comment lines.
    LineComments(Vec<String>),
}

impl CodeFragment {
    /// Create a line fragment.
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// Create a block fragment.
    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: Option<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }

    /// Create a prefixed fragment sequence.
    pub fn prefixed(prefix: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::Prefixed {
            prefix: prefix.into(),
            body,
        }
    }
}

/// Trait for types that can be rendered to code fragments.
///
/// Implement this trait for model nodes to render them through
/// [`CodeBuilder`](super::CodeBuilder) without direct coupling.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

/// Blanket implementation for references.
impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}
