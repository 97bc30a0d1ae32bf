//! Class properties and constants.

use std::fmt;

use super::{Comment, DefaultValue, Indentation, Member, Visibility};
use crate::{
    RenderOptions,
    builder::{CodeFragment, Renderable, render_to_string},
    generation::{ImportSet, shorten_type},
};

/// A property or class constant.
///
/// # Example
///
/// ```
/// use blueprint_codegen::model::Property;
///
/// let property = Property::new("status").typed("string").default_value("'draft'");
/// assert_eq!(property.to_string(), "/**\n * @var string\n */\npublic string $status = 'draft';");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    name: String,
    visibility: Visibility,
    ty: Option<String>,
    default: Option<DefaultValue>,
    constant: bool,
    is_static: bool,
    description: Vec<String>,
    comment: Option<Comment>,
    indentation: Indentation,
}

impl Property {
    /// Create a new public, untyped property without a default.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            ty: None,
            default: None,
            constant: false,
            is_static: false,
            description: Vec::new(),
            comment: None,
            indentation: Indentation::default(),
        }
    }

    /// Set the property type.
    pub fn typed(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    /// Set a literal default value.
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(DefaultValue::literal(value));
        self
    }

    /// Default the property to `null`.
    pub fn default_null(mut self) -> Self {
        self.default = Some(DefaultValue::Null);
        self
    }

    /// Render as a class constant. The name is printed upper-cased.
    pub fn as_constant(mut self) -> Self {
        self.constant = true;
        self
    }

    /// Mark the property static.
    pub fn as_static(mut self, value: bool) -> Self {
        self.is_static = value;
        self
    }

    /// Set visibility.
    pub fn with_visibility(mut self, vis: Visibility) -> Self {
        self.visibility = vis;
        self
    }

    pub fn protected(self) -> Self {
        self.with_visibility(Visibility::Protected)
    }

    pub fn private(self) -> Self {
        self.with_visibility(Visibility::Private)
    }

    /// Add a description line to the property comment.
    pub fn doc(mut self, line: impl AsRef<str>) -> Self {
        self.description.extend(line.as_ref().split('\n').map(str::to_string));
        self
    }

    /// Prefix every printed line with `prefix`.
    pub fn with_indentation(mut self, prefix: impl Into<String>) -> Self {
        self.indentation.set(prefix);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn ty(&self) -> Option<&str> {
        self.ty.as_deref()
    }

    pub fn default(&self) -> Option<&DefaultValue> {
        self.default.as_ref()
    }

    pub fn is_constant(&self) -> bool {
        self.constant
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    /// The comment produced by the last resolution, if any.
    pub fn comment(&self) -> Option<&Comment> {
        self.comment.as_ref()
    }

    /// Copy of this property with its type shortened and its comment built.
    ///
    /// The comment holds the description followed, when annotations are
    /// enabled, by a `@var` line for typed non-constant properties.
    pub fn resolve(&self, imports: &mut ImportSet, options: &RenderOptions) -> Self {
        let ty = self.ty.as_deref().map(|ty| shorten_type(ty, imports));

        let mut lines: Vec<String> = self.description.clone();
        if let Some(ty) = ty.as_deref().filter(|_| options.docblocks && !self.constant) {
            if !lines.is_empty() {
                lines.push(String::new());
            }
            lines.push(format!("@var {}", ty));
        }
        let mut comment = Comment::new(lines, options.comment_style);
        if let Some(prefix) = self.indentation.get() {
            comment = comment.with_indentation(prefix);
        }

        Self {
            ty,
            comment: (!comment.is_empty()).then_some(comment),
            ..self.clone()
        }
    }

    fn declaration(&self) -> String {
        let mut declaration = if self.constant {
            format!("{} const {}", self.visibility, self.name.to_uppercase())
        } else {
            let static_kw = if self.is_static { " static" } else { "" };
            match &self.ty {
                Some(ty) => format!("{}{} {} ${}", self.visibility, static_kw, ty, self.name),
                None => format!("{}{} ${}", self.visibility, static_kw, self.name),
            }
        };
        if let Some(default) = &self.default {
            declaration.push_str(" = ");
            declaration.push_str(&default.render());
        }
        declaration.push(';');
        declaration
    }
}

impl Member for Property {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Renderable for Property {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = self
            .comment
            .as_ref()
            .map(Renderable::to_fragments)
            .unwrap_or_default();
        fragments.extend(self.indentation.wrap(vec![CodeFragment::Line(self.declaration())]));
        fragments
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let options = RenderOptions::default();
        let resolved = self.resolve(&mut ImportSet::new(), &options);
        f.write_str(&render_to_string(&resolved, options.indent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(property: &Property) -> String {
        let options = RenderOptions::default().docblocks(false);
        let resolved = property.resolve(&mut ImportSet::new(), &options);
        render_to_string(&resolved, options.indent)
    }

    #[test]
    fn test_typed_property() {
        let property = Property::new("name").typed("string");
        assert_eq!(render(&property), "public string $name;");
    }

    #[test]
    fn test_untyped_private_property() {
        let property = Property::new("cache").private().default_value("[]");
        assert_eq!(render(&property), "private $cache = [];");
    }

    #[test]
    fn test_quoted_null_default() {
        let property = Property::new("deletedAt").typed("?string").default_value("\"null\"");
        assert_eq!(render(&property), "public ?string $deletedAt = null;");
        assert!(!render(&property).contains("\"null\""));
    }

    #[test]
    fn test_null_marker_default() {
        let property = Property::new("owner").protected().default_null();
        assert_eq!(render(&property), "protected $owner = null;");
    }

    #[test]
    fn test_static_property() {
        let property = Property::new("instances").as_static(true).typed("int").default_value("0");
        assert_eq!(render(&property), "public static int $instances = 0;");
    }

    #[test]
    fn test_constant() {
        let property = Property::new("maxRetries")
            .typed("int")
            .default_value("3")
            .as_constant();
        assert_eq!(render(&property), "public const MAXRETRIES = 3;");
        assert_eq!(property.to_string(), "public const MAXRETRIES = 3;");
    }

    #[test]
    fn test_quoted_array_default_is_unwrapped() {
        let property = Property::new("fillable").protected().default_value("'['name', 'email']'");
        assert_eq!(render(&property), "protected $fillable = ['name', 'email'];");
    }

    #[test]
    fn test_resolve_shortens_type_and_builds_comment() {
        let property = Property::new("mailer")
            .private()
            .typed("App\\Services\\Mailer")
            .doc("Outgoing mail transport.")
            .with_indentation("    ");

        let mut imports = ImportSet::new();
        let resolved = property.resolve(&mut imports, &RenderOptions::default());
        assert_eq!(resolved.ty(), Some("Mailer"));
        assert!(imports.contains("App\\Services\\Mailer"));
        assert_eq!(
            render_to_string(&resolved, Default::default()),
            "    /**\n     * Outgoing mail transport.\n     *\n     * @var Mailer\n     */\n    private Mailer $mailer;"
        );
    }

    #[test]
    fn test_description_without_annotations() {
        let property = Property::new("count").typed("int").doc("How many.");
        assert_eq!(render(&property), "/**\n * How many.\n */\npublic int $count;");
    }
}
