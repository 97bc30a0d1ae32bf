//! Rendering options.

use std::path::Path;

use serde::Deserialize;

use crate::{Error, Result, builder::Indent, model::CommentStyle};

/// Options controlling how a resolved blueprint is printed.
///
/// Every field has a default, so a TOML document only needs the keys it
/// changes:
///
/// ```
/// use blueprint_codegen::{RenderOptions, builder::Indent, model::CommentStyle};
///
/// let options = RenderOptions::from_toml_str(
///     r#"
///     indent = { spaces = 2 }
///     comment_style = "single"
///     "#,
/// )
/// .unwrap();
/// assert_eq!(options.indent, Indent::Spaces(2));
/// assert_eq!(options.comment_style, CommentStyle::Single);
/// assert!(options.docblocks);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptions {
    /// Indentation unit for class bodies and method bodies.
    pub indent: Indent,
    /// Style of synthesized member comments.
    pub comment_style: CommentStyle,
    /// Synthesize `@param` / `@throws` / `@return` / `@var` annotations.
    ///
    /// When disabled only caller-supplied descriptions are printed.
    pub docblocks: bool,
    /// Emit the `<?php` open tag in file output.
    pub open_tag: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: Indent::PSR,
            comment_style: CommentStyle::Multi,
            docblocks: true,
            open_tag: true,
        }
    }
}

impl RenderOptions {
    /// Parse options from a TOML document.
    pub fn from_toml_str(src: &str) -> Result<Self> {
        toml::from_str(src).map_err(|source| Error::Config { source })
    }

    /// Read options from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&src)
    }

    /// Set the indentation unit.
    pub fn indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// Set the comment style.
    pub fn comment_style(mut self, style: CommentStyle) -> Self {
        self.comment_style = style;
        self
    }

    /// Enable or disable annotation synthesis.
    pub fn docblocks(mut self, enabled: bool) -> Self {
        self.docblocks = enabled;
        self
    }

    /// Enable or disable the `<?php` open tag.
    pub fn open_tag(mut self, enabled: bool) -> Self {
        self.open_tag = enabled;
        self
    }
}
