//! Indentation carried by every renderable node.

use crate::builder::CodeFragment;

/// Optional literal prefix applied to every line a node produces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Indentation(Option<String>);

impl Indentation {
    /// Set the prefix.
    pub fn set(&mut self, prefix: impl Into<String>) {
        self.0 = Some(prefix.into());
    }

    /// Get the prefix, if any.
    pub fn get(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Wrap fragments so every line carries the prefix.
    pub fn wrap(&self, fragments: Vec<CodeFragment>) -> Vec<CodeFragment> {
        match self.get() {
            Some(prefix) if !prefix.is_empty() && !fragments.is_empty() => {
                vec![CodeFragment::prefixed(prefix, fragments)]
            }
            _ => fragments,
        }
    }
}
