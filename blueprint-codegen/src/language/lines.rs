//! Body line classification.
//!
//! Statements written into a method body are supplied without their `;`.
//! Before a line is emitted it is classified: lines that open or close a
//! block and comment lines are emitted untouched, everything else is a
//! statement and gets terminated.

/// Characters that mark a line as continuing onto the next one.
pub const CONTINUATION_CHARACTERS: [char; 6] = ['[', ',', ':', '}', '{', '?'];

/// Classification of a single line of body content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Opens or closes a block (`if (...) {`, `}`, `case 1:`, `foo(`).
    Block,
    /// A comment line (`// ...`, `# ...`, `/* ...`, ` * ...`, `... */`).
    Comment,
    /// A statement that needs a terminator.
    Plain,
    /// Empty or whitespace-only.
    Empty,
}

/// Classify a line of body content.
pub fn classify(line: &str) -> LineKind {
    if line.trim().is_empty() {
        LineKind::Empty
    } else if is_block(line) {
        LineKind::Block
    } else if is_comment(line) {
        LineKind::Comment
    } else {
        LineKind::Plain
    }
}

/// Check whether a line opens or closes a block.
///
/// True when the trimmed line ends with `{`, `}`, `:` or `(`, or is wrapped
/// in parentheses.
pub fn is_block(line: &str) -> bool {
    let line = line.trim();
    if line.is_empty() {
        return false;
    }
    line.ends_with(['{', '}', ':', '('])
        || (line.starts_with('{') && line.ends_with('{'))
        || (line.starts_with('}') && line.ends_with('}'))
        || (line.starts_with(':') && line.ends_with(':'))
        || (line.starts_with('(') && line.ends_with(')'))
}

/// Check whether a line is a comment.
pub fn is_comment(line: &str) -> bool {
    let line = line.trim();
    !line.is_empty()
        && (line.starts_with('*')
            || line.starts_with("/*")
            || line.ends_with("*/")
            || line.starts_with("//")
            || line.starts_with('#'))
}

/// Render a body line, appending `;` to statements.
///
/// Trailing whitespace is dropped and a statement that already ends with
/// `;` is not terminated twice.
pub fn terminate(line: &str) -> String {
    let line = line.trim_end();
    match classify(line) {
        LineKind::Plain => format!("{};", line.trim_end_matches(';')),
        LineKind::Empty => String::new(),
        LineKind::Block | LineKind::Comment => line.to_string(),
    }
}

/// Check whether the right-trimmed line ends with one of
/// [`CONTINUATION_CHARACTERS`] or one of `extra`.
pub fn ends_with_special(line: &str, extra: &[char]) -> bool {
    let line = line.trim_end();
    line.ends_with(CONTINUATION_CHARACTERS) || line.ends_with(extra)
}

/// Check whether the left-trimmed line starts with one of
/// [`CONTINUATION_CHARACTERS`] or one of `extra`.
pub fn starts_with_special(line: &str, extra: &[char]) -> bool {
    let line = line.trim_start();
    line.starts_with(CONTINUATION_CHARACTERS) || line.starts_with(extra)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_lines() {
        for line in [
            "if ($a) {",
            "}",
            "} else {",
            "    {",
            "case 1:",
            "default:",
            "$this->call(",
            "($a && $b)",
            "foreach ($items as $item) {",
        ] {
            assert_eq!(classify(line), LineKind::Block, "{line:?}");
        }
    }

    #[test]
    fn test_comment_lines() {
        for line in [
            "// note",
            "# shell style",
            "/* open",
            " * middle",
            "end */",
            "/** doc */",
        ] {
            assert_eq!(classify(line), LineKind::Comment, "{line:?}");
        }
    }

    #[test]
    fn test_plain_lines() {
        for line in [
            "$this->name = $name",
            "return $value",
            "parent::__construct()",
            "$x = ($a)",
            "this.name = name",
        ] {
            assert_eq!(classify(line), LineKind::Plain, "{line:?}");
        }
    }

    #[test]
    fn test_empty_lines() {
        assert_eq!(classify(""), LineKind::Empty);
        assert_eq!(classify("   \t"), LineKind::Empty);
    }

    #[test]
    fn test_parenthesised_line_needs_both_ends() {
        assert_eq!(classify("($a)"), LineKind::Block);
        assert_eq!(classify("($a) + 1"), LineKind::Plain);
        assert_eq!(classify("call($a)"), LineKind::Plain);
    }

    #[test]
    fn test_terminate() {
        assert_eq!(terminate("return $x"), "return $x;");
        assert_eq!(terminate("return $x;"), "return $x;");
        assert_eq!(terminate("if ($x) {  "), "if ($x) {");
        assert_eq!(terminate("// keep;"), "// keep;");
        assert_eq!(terminate("    "), "");
        assert_eq!(terminate("    $indented = true"), "    $indented = true;");
    }

    #[test]
    fn test_special_characters() {
        assert!(ends_with_special("$values = [", &[]));
        assert!(ends_with_special("'a' => 1,  ", &[]));
        assert!(ends_with_special("$x ?", &[]));
        assert!(!ends_with_special("$x = 1", &[]));
        assert!(ends_with_special("$x .", &['.']));

        assert!(starts_with_special("  ? $a : $b", &[]));
        assert!(starts_with_special("-> call()", &['-']));
        assert!(!starts_with_special("$a", &[]));
    }
}
