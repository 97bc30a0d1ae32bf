//! Indentation configuration for code generation.

use std::borrow::Cow;

use serde::Deserialize;

const SPACES: &str = "        ";

/// Indentation style for generated code.
///
/// In TOML configuration this reads as `indent = { spaces = 2 }` or
/// `indent = "tab"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Indent {
    /// Spaces with the specified width.
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation (PSR-12).
    pub const PSR: Self = Self::Spaces(4);

    /// 2-space indentation.
    pub const COMPACT: Self = Self::Spaces(2);

    /// The text of one indent level.
    pub fn unit(&self) -> Cow<'static, str> {
        match self {
            Self::Spaces(width) => {
                let width = usize::from(*width);
                match SPACES.get(..width) {
                    Some(spaces) => Cow::Borrowed(spaces),
                    None => Cow::Owned(" ".repeat(width)),
                }
            }
            Self::Tab => Cow::Borrowed("\t"),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::PSR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_unit() {
        assert_eq!(Indent::Spaces(2).unit(), "  ");
        assert_eq!(Indent::Spaces(4).unit(), "    ");
        assert_eq!(Indent::Spaces(3).unit(), "   ");
        assert_eq!(Indent::Spaces(0).unit(), "");
        assert_eq!(Indent::Tab.unit(), "\t");
    }

    #[test]
    fn test_wide_indent_keeps_its_width() {
        assert_eq!(Indent::Spaces(8).unit(), " ".repeat(8));
        assert_eq!(Indent::Spaces(12).unit(), " ".repeat(12));
    }

    #[test]
    fn test_default() {
        assert_eq!(Indent::default(), Indent::PSR);
        assert_eq!(Indent::COMPACT, Indent::Spaces(2));
    }
}
