//! Import collection and short-name resolution.

use blueprint_core::{NAMESPACE_SEPARATOR, after_last, has_namespace};
use indexmap::IndexSet;

/// Tracks fully-qualified class paths and deduplicates them.
///
/// Maintains insertion order for deterministic `use` statements. Two
/// different paths ending in the same short name are both kept; callers
/// see the same short name for each.
///
/// # Example
///
/// ```
/// use blueprint_codegen::generation::ImportSet;
///
/// let mut imports = ImportSet::new();
/// assert_eq!(imports.register("App\\Services\\Mailer"), "Mailer");
/// assert_eq!(imports.register("App\\Services\\Mailer"), "Mailer");
/// assert_eq!(imports.register("string"), "string");
/// assert_eq!(imports.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSet {
    paths: IndexSet<String>,
}

impl ImportSet {
    /// Create a new empty import set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type reference and return the name to use in code.
    ///
    /// References without a namespace separator are returned unchanged and
    /// not recorded.
    pub fn register(&mut self, path: &str) -> String {
        if !has_namespace(path) {
            return path.to_string();
        }
        let path = path.trim_start_matches(NAMESPACE_SEPARATOR);
        let short = after_last(path, NAMESPACE_SEPARATOR);
        if has_namespace(path) && self.paths.insert(path.to_string()) {
            tracing::trace!(path, short, "registered import");
        }
        short.to_string()
    }

    /// Record a path without using its short name.
    ///
    /// Returns `true` if the path was newly added.
    pub fn add_path(&mut self, path: &str) -> bool {
        let path = path.trim_start_matches(NAMESPACE_SEPARATOR);
        has_namespace(path) && self.paths.insert(path.to_string())
    }

    /// Merge another set into this one, keeping first-seen order.
    pub fn merge(&mut self, other: &ImportSet) {
        for path in &other.paths {
            self.paths.insert(path.clone());
        }
    }

    /// Check if a path is imported.
    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path.trim_start_matches(NAMESPACE_SEPARATOR))
    }

    /// Iterate over all paths in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Get the number of imported paths.
    pub fn len(&self) -> usize {
        self.paths.len()
    }
}

/// Shorten every qualified class in a type expression, registering each one.
///
/// Handles nullable (`?App\User`) and union (`App\User|null`) expressions.
pub fn shorten_type(ty: &str, imports: &mut ImportSet) -> String {
    if !has_namespace(ty) {
        return ty.to_string();
    }
    ty.split('|')
        .map(|part| match part.strip_prefix('?') {
            Some(inner) => format!("?{}", imports.register(inner)),
            None => imports.register(part),
        })
        .collect::<Vec<_>>()
        .join("|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_is_idempotent() {
        let mut imports = ImportSet::new();
        let first = imports.register("App\\Services\\Mailer");
        let second = imports.register("App\\Services\\Mailer");

        assert_eq!(first, "Mailer");
        assert_eq!(second, "Mailer");
        assert_eq!(imports.len(), 1);
        assert!(imports.contains("App\\Services\\Mailer"));
    }

    #[test]
    fn test_register_plain_name() {
        let mut imports = ImportSet::new();
        assert_eq!(imports.register("Countable"), "Countable");
        assert!(imports.is_empty());
    }

    #[test]
    fn test_register_global_class() {
        let mut imports = ImportSet::new();
        assert_eq!(imports.register("\\RuntimeException"), "RuntimeException");
        assert!(imports.is_empty());

        assert_eq!(imports.register("\\App\\User"), "User");
        assert!(imports.contains("App\\User"));
    }

    #[test]
    fn test_same_short_name_is_not_deduplicated() {
        let mut imports = ImportSet::new();
        assert_eq!(imports.register("App\\Mail\\Mailer"), "Mailer");
        assert_eq!(imports.register("Vendor\\Mailer"), "Mailer");
        assert_eq!(imports.len(), 2);
    }

    #[test]
    fn test_merge_keeps_order() {
        let mut a = ImportSet::new();
        a.register("App\\A");
        a.register("App\\B");

        let mut b = ImportSet::new();
        b.register("App\\C");
        b.register("App\\A");

        a.merge(&b);
        assert_eq!(a.iter().collect::<Vec<_>>(), vec!["App\\A", "App\\B", "App\\C"]);
    }

    #[test]
    fn test_add_path() {
        let mut imports = ImportSet::new();
        assert!(imports.add_path("Illuminate\\Support\\Str"));
        assert!(!imports.add_path("Illuminate\\Support\\Str"));
        assert!(!imports.add_path("Str"));
        assert_eq!(imports.len(), 1);
    }

    #[test]
    fn test_shorten_type() {
        let mut imports = ImportSet::new();
        assert_eq!(shorten_type("string", &mut imports), "string");
        assert_eq!(shorten_type("?App\\Models\\User", &mut imports), "?User");
        assert_eq!(
            shorten_type("App\\Models\\User|App\\Models\\Guest|null", &mut imports),
            "User|Guest|null"
        );
        assert_eq!(imports.len(), 2);
    }
}
