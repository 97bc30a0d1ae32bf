//! Comments and doc block synthesis.

use std::fmt;

use serde::Deserialize;

use super::{Indentation, Parameter, ReturnType};
use crate::{
    builder::{CodeFragment, Indent, Renderable, render_to_string},
    generation::ImportSet,
};

/// How a comment is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentStyle {
    /// A `/** ... */` block.
    #[default]
    Multi,
    /// One `//` line per comment line.
    Single,
}

/// A comment attached to a blueprint or member.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comment {
    lines: Vec<String>,
    style: CommentStyle,
    indentation: Indentation,
}

impl Comment {
    /// Create a comment from lines of text.
    pub fn new(lines: impl IntoIterator<Item = impl Into<String>>, style: CommentStyle) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            style,
            indentation: Indentation::default(),
        }
    }

    /// Create a `/** ... */` comment.
    pub fn multi(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::new(lines, CommentStyle::Multi)
    }

    /// Create a `//` comment.
    pub fn single(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::new(lines, CommentStyle::Single)
    }

    /// Prefix every printed line with `prefix`.
    pub fn with_indentation(mut self, prefix: impl Into<String>) -> Self {
        self.indentation.set(prefix);
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn style(&self) -> CommentStyle {
        self.style
    }

    pub fn indentation(&self) -> Option<&str> {
        self.indentation.get()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Renderable for Comment {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.lines.is_empty() {
            return Vec::new();
        }
        let fragment = match self.style {
            CommentStyle::Multi => CodeFragment::DocBlock(self.lines.clone()),
            CommentStyle::Single => CodeFragment::LineComments(self.lines.clone()),
        };
        self.indentation.wrap(vec![fragment])
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_to_string(self, Indent::default()))
    }
}

/// Build a method comment from its description and signature.
///
/// Produces the description (followed by a blank line when present), one
/// `@param` line per parameter in declared order, one `@throws` line per
/// exception and a final `@return` line. Qualified exception names are
/// registered in `imports` and printed by short name.
pub fn synthesize(
    description: &[String],
    params: &[Parameter],
    return_type: &ReturnType,
    exceptions: &[String],
    imports: &mut ImportSet,
    style: CommentStyle,
) -> Comment {
    let mut lines: Vec<String> = description.iter().filter(|l| !l.is_empty()).cloned().collect();
    if !lines.is_empty() {
        lines.push(String::new());
    }
    for param in params {
        lines.push(format!(
            "@param {} {}",
            param.ty().unwrap_or("mixed"),
            param.name()
        ));
    }
    for exception in exceptions {
        lines.push(format!("@throws {}", imports.register(exception)));
    }
    if let Some(ty) = return_type.render() {
        lines.push(format!("@return {}", ty));
    }
    Comment::new(lines, style)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_multi_line_render() {
        let comment = Comment::multi(["Finds a user.", "", "@return User"]);
        assert_eq!(
            comment.to_string(),
            "/**\n * Finds a user.\n *\n * @return User\n */"
        );
    }

    #[test]
    fn test_single_line_render() {
        let comment = Comment::single(["first", "second"]);
        assert_eq!(comment.to_string(), "// first\n// second");
    }

    #[test]
    fn test_indentation_applies_to_every_line() {
        let comment = Comment::multi(["a", "b"]).with_indentation("    ");
        assert_eq!(
            comment.to_string(),
            "    /**\n     * a\n     * b\n     */"
        );
    }

    #[test]
    fn test_empty_comment_renders_nothing() {
        assert_eq!(Comment::multi(Vec::<String>::new()).to_string(), "");
        assert!(Comment::default().to_fragments().is_empty());
    }

    #[test]
    fn test_synthesize_full() {
        let mut imports = ImportSet::new();
        let params = vec![
            Parameter::new("id").typed("int"),
            Parameter::new("options"),
        ];
        let comment = synthesize(
            &strings(&["Load a record."]),
            &params,
            &ReturnType::single("Record"),
            &strings(&["App\\Exceptions\\NotFound", "RuntimeException"]),
            &mut imports,
            CommentStyle::Multi,
        );

        assert_eq!(
            comment.lines(),
            &strings(&[
                "Load a record.",
                "",
                "@param int id",
                "@param mixed options",
                "@throws NotFound",
                "@throws RuntimeException",
                "@return Record",
            ])
        );
        assert!(imports.contains("App\\Exceptions\\NotFound"));
        assert_eq!(imports.len(), 1);
    }

    #[test]
    fn test_synthesize_without_description() {
        let mut imports = ImportSet::new();
        let comment = synthesize(
            &[],
            &[Parameter::new("name").typed("string")],
            &ReturnType::None,
            &[],
            &mut imports,
            CommentStyle::Single,
        );
        assert_eq!(comment.lines(), &strings(&["@param string name"]));
        assert_eq!(comment.style(), CommentStyle::Single);
    }

    #[test]
    fn test_synthesize_union_return() {
        let mut imports = ImportSet::new();
        let comment = synthesize(
            &[],
            &[],
            &ReturnType::union(["int", "null"]),
            &[],
            &mut imports,
            CommentStyle::Multi,
        );
        assert_eq!(comment.lines(), &strings(&["@return int|null"]));
    }
}
