//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Line writer that tracks indentation levels and literal line prefixes.
///
/// Every non-empty line is written as `<prefixes><indent * level><text>`.
/// Empty lines are written as a bare newline so generated output never
/// carries trailing whitespace.
///
/// # Example
///
/// ```
/// use blueprint_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::psr();
/// builder
///     .push_line("{")
///     .push_indent()
///     .push_line("return 1;")
///     .push_dedent()
///     .push_line("}");
/// assert_eq!(builder.build(), "{\n    return 1;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    prefixes: Vec<String>,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            prefixes: Vec::new(),
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation.
    pub fn psr() -> Self {
        Self::new(Indent::PSR)
    }

    /// Add a line of code with current indentation.
    ///
    /// Text containing newlines is written as several lines, each indented.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        for line in s.split('\n') {
            if line.is_empty() {
                self.push_blank();
            } else {
                self.write_indent();
                self.buffer.push_str(line);
                self.buffer.push('\n');
            }
        }
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Start prefixing lines with a literal string.
    pub fn push_prefix(&mut self, prefix: &str) -> &mut Self {
        self.prefixes.push(prefix.to_string());
        self
    }

    /// Stop using the innermost prefix.
    pub fn pop_prefix(&mut self) -> &mut Self {
        self.prefixes.pop();
        self
    }

    /// Add a `/** ... */` doc block.
    pub fn push_doc_block(&mut self, lines: &[String]) -> &mut Self {
        self.push_line("/**");
        for line in lines.iter().flat_map(|l| l.split('\n')) {
            if line.is_empty() {
                self.push_line(" *");
            } else {
                self.push_line(&format!(" * {}", line));
            }
        }
        self.push_line(" */")
    }

    /// Add `//` comment lines.
    pub fn push_line_comments(&mut self, lines: &[String]) -> &mut Self {
        for line in lines.iter().flat_map(|l| l.split('\n')) {
            if line.is_empty() {
                self.push_line("//");
            } else {
                self.push_line(&format!("// {}", line));
            }
        }
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Prefixed { prefix, body } => {
                self.push_prefix(&prefix);
                for f in body {
                    self.apply_fragment(f);
                }
                self.pop_prefix();
            }
            CodeFragment::DocBlock(lines) => {
                self.push_doc_block(&lines);
            }
            CodeFragment::LineComments(lines) => {
                self.push_line_comments(&lines);
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Consume the builder and return the generated code without the final
    /// newline.
    pub fn finish(self) -> String {
        let mut buffer = self.buffer;
        if buffer.ends_with('\n') {
            buffer.pop();
        }
        buffer
    }

    fn write_indent(&mut self) {
        for prefix in &self.prefixes {
            self.buffer.push_str(prefix);
        }
        for _ in 0..self.indent_level {
            self.buffer.push_str(&self.indent.unit());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::psr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let mut builder = CodeBuilder::psr();
        builder.push_line("$x = 1;");
        assert_eq!(builder.build(), "$x = 1;\n");
    }

    #[test]
    fn test_indentation() {
        let mut builder = CodeBuilder::new(Indent::COMPACT);
        builder
            .push_line("{")
            .push_indent()
            .push_line("return 1;")
            .push_dedent()
            .push_line("}");
        assert_eq!(builder.build(), "{\n  return 1;\n}\n");
    }

    #[test]
    fn test_blank_line_has_no_indentation() {
        let mut builder = CodeBuilder::psr();
        builder
            .push_prefix("  ")
            .push_indent()
            .push_line("a")
            .push_line("")
            .push_blank()
            .push_line("b");
        assert_eq!(builder.build(), "      a\n\n\n      b\n");
    }

    #[test]
    fn test_prefix_stack() {
        let mut builder = CodeBuilder::psr();
        builder
            .push_prefix(">")
            .push_prefix("-")
            .push_line("x")
            .pop_prefix()
            .push_line("y")
            .pop_prefix()
            .push_line("z");
        assert_eq!(builder.build(), ">-x\n>y\nz\n");
    }

    #[test]
    fn test_doc_block() {
        let mut builder = CodeBuilder::psr();
        builder.push_doc_block(&["Summary".to_string(), String::new(), "@return int".to_string()]);
        assert_eq!(builder.build(), "/**\n * Summary\n *\n * @return int\n */\n");
    }

    #[test]
    fn test_line_comments() {
        let mut builder = CodeBuilder::psr();
        builder.push_line_comments(&["first".to_string(), String::new()]);
        assert_eq!(builder.build(), "// first\n//\n");
    }

    #[test]
    fn test_multi_line_text_is_indented_per_line() {
        let mut builder = CodeBuilder::psr();
        builder
            .push_prefix("  ")
            .push_indent()
            .push_line("$a = 1;\n\n$b = 2;")
            .push_doc_block(&["first\nsecond".to_string()])
            .push_line_comments(&["one\ntwo".to_string()]);
        assert_eq!(
            builder.build(),
            "      $a = 1;\n\n      $b = 2;\n      /**\n       * first\n       * second\n       */\n      // one\n      // two\n"
        );
    }

    #[test]
    fn test_finish_strips_final_newline() {
        let mut builder = CodeBuilder::psr();
        builder.push_line("a").push_line("b");
        assert_eq!(builder.finish(), "a\nb");
    }

    #[test]
    fn test_emit_with_fragments() {
        struct SimpleNode;
        impl Renderable for SimpleNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![
                    CodeFragment::Line("// comment".to_string()),
                    CodeFragment::Line("$x = 1;".to_string()),
                ]
            }
        }

        let mut builder = CodeBuilder::psr();
        builder.emit(&SimpleNode);
        assert_eq!(builder.build(), "// comment\n$x = 1;\n");
    }

    #[test]
    fn test_emit_block_inside_prefix() {
        struct MethodNode;
        impl Renderable for MethodNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::prefixed(
                    "    ",
                    vec![
                        CodeFragment::line("public function run()"),
                        CodeFragment::block(
                            "{",
                            vec![CodeFragment::line("return;")],
                            Some("}".to_string()),
                        ),
                    ],
                )]
            }
        }

        let mut builder = CodeBuilder::psr();
        builder.emit(&MethodNode);
        assert_eq!(
            builder.build(),
            "    public function run()\n    {\n        return;\n    }\n"
        );
    }
}
