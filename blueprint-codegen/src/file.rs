//! Whole-file rendering.

use crate::{
    builder::{CodeBuilder, CodeFragment, Indent, Renderable},
    generation::ImportSet,
    model::ResolvedBlueprint,
};

/// A PHP source file holding one resolved class.
///
/// Combines the namespace declaration and `use` statements collected
/// during resolution with the rendered class.
///
/// # Example
///
/// ```
/// use blueprint_codegen::{PhpFile, model::Blueprint};
///
/// let resolved = Blueprint::new("User")
///     .unwrap()
///     .in_namespace("App\\Models")
///     .extends("Illuminate\\Database\\Eloquent\\Model")
///     .unwrap()
///     .resolve();
///
/// assert_eq!(
///     PhpFile::from(&resolved).render(),
///     "<?php\n\nnamespace App\\Models;\n\nuse Illuminate\\Database\\Eloquent\\Model;\n\nclass User extends Model {\n}\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct PhpFile<'a> {
    namespace: Option<&'a str>,
    imports: &'a ImportSet,
    class: &'a ResolvedBlueprint,
    open_tag: bool,
    indent: Indent,
}

impl<'a> PhpFile<'a> {
    /// Create a file for a resolved blueprint using its render options.
    pub fn new(class: &'a ResolvedBlueprint) -> Self {
        Self {
            namespace: class.blueprint().namespace(),
            imports: class.imports(),
            class,
            open_tag: class.options().open_tag,
            indent: class.options().indent,
        }
    }

    /// Override whether the `<?php` tag is printed.
    pub fn open_tag(mut self, enabled: bool) -> Self {
        self.open_tag = enabled;
        self
    }

    /// Check whether any `use` statements will be printed.
    pub fn has_imports(&self) -> bool {
        !self.imports.is_empty()
    }

    /// Render the file, terminated by a newline.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::new(self.indent);
        builder.emit(self);
        builder.build()
    }
}

impl<'a> From<&'a ResolvedBlueprint> for PhpFile<'a> {
    fn from(class: &'a ResolvedBlueprint) -> Self {
        Self::new(class)
    }
}

impl Renderable for PhpFile<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if self.open_tag {
            fragments.push(CodeFragment::line("<?php"));
            fragments.push(CodeFragment::Blank);
        }
        if let Some(namespace) = self.namespace.filter(|ns| !ns.is_empty()) {
            fragments.push(CodeFragment::Line(format!("namespace {};", namespace)));
            fragments.push(CodeFragment::Blank);
        }
        if self.has_imports() {
            fragments.extend(
                self.imports
                    .iter()
                    .map(|path| CodeFragment::Line(format!("use {};", path))),
            );
            fragments.push(CodeFragment::Blank);
        }
        fragments.extend(self.class.to_fragments());
        fragments
    }
}
