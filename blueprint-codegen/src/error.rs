use std::{fmt, path::PathBuf};

use miette::Diagnostic;
use thiserror::Error;

/// Result type for blueprint operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The kind of class member involved in a collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    Method,
    Property,
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Method => f.write_str("method"),
            Self::Property => f.write_str("property"),
        }
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("expected {expected}, found '{found}'")]
    #[diagnostic(code(blueprint::invalid_element))]
    InvalidElementKind {
        expected: &'static str,
        found: String,
    },

    #[error("duplicate {kind} definition '{name}'")]
    #[diagnostic(
        code(blueprint::duplicate_member),
        help("rename the {kind} or drop one of the definitions")
    )]
    DuplicateMember { kind: MemberKind, name: String },

    #[error("duplicate parameter '{name}' in method '{method}'")]
    #[diagnostic(code(blueprint::duplicate_parameter))]
    DuplicateParameter { method: String, name: String },

    #[error("failed to read '{path}'")]
    #[diagnostic(code(blueprint::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse render options")]
    #[diagnostic(code(blueprint::config))]
    Config {
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    pub(crate) fn invalid(expected: &'static str, found: impl Into<String>) -> Self {
        Self::InvalidElementKind {
            expected,
            found: found.into(),
        }
    }
}
