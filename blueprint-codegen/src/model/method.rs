//! Class and interface methods.

use std::fmt;

use blueprint_core::{is_identifier, is_type_path};

use super::{
    Comment, Indentation, Member, MemberRegistry, Parameter, Visibility, param::render_params,
    synthesize,
};
use crate::{
    Error, RenderOptions, Result,
    builder::{CodeFragment, Renderable, render_to_string},
    generation::{ImportSet, shorten_type},
    language::{LineKind, classify, ends_with_special, terminate},
};

/// Name of the constructor method.
pub const CONSTRUCTOR: &str = "__construct";

/// Declared return type of a method.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ReturnType {
    #[default]
    None,
    Single(String),
    Union(Vec<String>),
}

impl ReturnType {
    pub fn single(ty: impl Into<String>) -> Self {
        Self::Single(ty.into())
    }

    pub fn union(types: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::Union(types.into_iter().map(Into::into).collect())
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Render as source text, unions joined with `|`.
    pub fn render(&self) -> Option<String> {
        match self {
            Self::None => None,
            Self::Single(ty) => Some(ty.clone()),
            Self::Union(types) if types.is_empty() => None,
            Self::Union(types) => Some(types.join("|")),
        }
    }

    /// Copy with every qualified type shortened through `imports`.
    pub fn resolve(&self, imports: &mut ImportSet) -> Self {
        match self {
            Self::None => Self::None,
            Self::Single(ty) => Self::Single(shorten_type(ty, imports)),
            Self::Union(types) => {
                Self::Union(types.iter().map(|ty| shorten_type(ty, imports)).collect())
            }
        }
    }
}

/// A line of method body content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyLine {
    /// Classified on output; plain statements receive `;`.
    Statement(String),
    /// Emitted as written.
    Verbatim(String),
}

impl BodyLine {
    fn render(&self) -> String {
        match self {
            Self::Statement(line) => terminate(line),
            Self::Verbatim(line) => line.trim_end().to_string(),
        }
    }
}

/// A method definition.
///
/// # Example
///
/// ```
/// use blueprint_codegen::model::{Method, Parameter};
///
/// let method = Method::new("greet")
///     .add_param(Parameter::new("name").typed("string"))
///     .unwrap()
///     .returns("string")
///     .add_line("return 'Hello ' . $name");
///
/// assert!(method.to_string().contains("public function greet(string $name): string"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Method {
    name: String,
    visibility: Visibility,
    description: Vec<String>,
    params: MemberRegistry<Parameter>,
    return_type: ReturnType,
    exceptions: Vec<String>,
    is_static: bool,
    body: Vec<BodyLine>,
    interface_method: bool,
    comment: Option<Comment>,
    indentation: Indentation,
}

impl Method {
    /// Create a new public method with an empty body.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            description: Vec::new(),
            params: MemberRegistry::new(),
            return_type: ReturnType::None,
            exceptions: Vec::new(),
            is_static: false,
            body: Vec::new(),
            interface_method: false,
            comment: None,
            indentation: Indentation::default(),
        }
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

    /// Add a description line to the method comment. Text spanning
    /// several lines adds one comment line per physical line.
    pub fn doc(mut self, line: impl AsRef<str>) -> Self {
        self.description.extend(line.as_ref().split('\n').map(str::to_string));
        self
    }

    /// Add a parameter.
    pub fn add_param(mut self, param: Parameter) -> Result<Self> {
        self.try_add_param(param)?;
        Ok(self)
    }

    /// Add several parameters, stopping at the first duplicate.
    pub fn add_params(mut self, params: impl IntoIterator<Item = Parameter>) -> Result<Self> {
        for param in params {
            self.try_add_param(param)?;
        }
        Ok(self)
    }

    /// Add a parameter in place. On error the method is unchanged.
    pub fn try_add_param(&mut self, param: Parameter) -> Result<()> {
        if !is_identifier(param.name()) {
            return Err(Error::invalid("a parameter name", param.name()));
        }
        self.params
            .push(param)
            .map_err(|rejected| Error::DuplicateParameter {
                method: self.name.clone(),
                name: rejected.name().to_string(),
            })
    }

    /// Set a single return type.
    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = ReturnType::single(ty);
        self
    }

    /// Set a union return type.
    pub fn returns_union(mut self, types: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.return_type = ReturnType::union(types);
        self
    }

    /// Declare thrown exceptions, plain or fully-qualified class names.
    pub fn throws(
        mut self,
        exceptions: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self> {
        let exceptions: Vec<String> = exceptions.into_iter().map(Into::into).collect();
        if let Some(bad) = exceptions.iter().find(|e| !is_type_path(e)) {
            return Err(Error::invalid("an exception class name", bad.as_str()));
        }
        self.exceptions.extend(exceptions);
        Ok(self)
    }

    /// Mark the method static. Ignored for the constructor.
    pub fn as_static(mut self, value: bool) -> Self {
        self.is_static = value && self.name != CONSTRUCTOR;
        self
    }

    /// Render as a signature without a body.
    pub fn as_interface_method(mut self) -> Self {
        self.interface_method = true;
        self
    }

    /// Add a body line. Statements are given without their `;`.
    ///
    /// Text spanning several lines is classified line by line.
    pub fn add_line(mut self, line: impl AsRef<str>) -> Self {
        self.body.extend(
            line.as_ref()
                .split('\n')
                .map(|line| BodyLine::Statement(line.to_string())),
        );
        self
    }

    /// Add a body line that is emitted exactly as written.
    pub fn add_raw_line(mut self, line: impl AsRef<str>) -> Self {
        self.body.extend(
            line.as_ref()
                .split('\n')
                .map(|line| BodyLine::Verbatim(line.to_string())),
        );
        self
    }

    /// Add multi-line body content.
    ///
    /// Trailing `;` are dropped and each line is classified like
    /// [`Method::add_line`], except that lines continuing an expression onto
    /// the next line (ending in `[`, `,`, `?` and similar) are kept
    /// unterminated.
    pub fn add_contents(mut self, contents: &str) -> Self {
        for line in contents.lines() {
            let line = line.trim_end().trim_end_matches(';');
            let line = if classify(line) == LineKind::Plain && ends_with_special(line, &[]) {
                BodyLine::Verbatim(line.to_string())
            } else {
                BodyLine::Statement(line.to_string())
            };
            self.body.push(line);
        }
        self
    }

    /// Prefix every printed line with `prefix`.
    pub fn with_indentation(mut self, prefix: impl Into<String>) -> Self {
        self.indentation.set(prefix);
        self
    }

    pub(crate) fn set_static(&mut self, value: bool) {
        self.is_static = value;
    }

    pub(crate) fn set_interface_method(&mut self) {
        self.interface_method = true;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn params(&self) -> &[Parameter] {
        self.params.as_slice()
    }

    pub fn return_type(&self) -> &ReturnType {
        &self.return_type
    }

    pub fn exceptions(&self) -> &[String] {
        &self.exceptions
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn is_interface_method(&self) -> bool {
        self.interface_method
    }

    pub fn body(&self) -> &[BodyLine] {
        &self.body
    }

    /// The comment produced by the last resolution, if any.
    pub fn comment(&self) -> Option<&Comment> {
        self.comment.as_ref()
    }

    /// Copy of this method with its types shortened, its comment
    /// synthesized and its indentation handed to the comment.
    pub fn resolve(&self, imports: &mut ImportSet, options: &RenderOptions) -> Self {
        let params = self.params.map(|p| p.resolve(imports));
        let return_type = self.return_type.resolve(imports);
        let exceptions: Vec<String> = self.exceptions.iter().map(|e| imports.register(e)).collect();

        let comment = if options.docblocks {
            synthesize(
                &self.description,
                params.as_slice(),
                &return_type,
                &exceptions,
                imports,
                options.comment_style,
            )
        } else {
            Comment::new(self.description.iter().cloned(), options.comment_style)
        };
        let comment = match self.indentation.get() {
            Some(prefix) => comment.with_indentation(prefix),
            None => comment,
        };

        Self {
            params,
            return_type,
            exceptions,
            comment: (!comment.is_empty()).then_some(comment),
            ..self.clone()
        }
    }

    fn signature(&self) -> String {
        let visibility = if self.interface_method {
            Visibility::Public
        } else {
            self.visibility
        };
        let static_kw = if self.is_static { " static" } else { "" };
        let mut signature = format!(
            "{}{} function {}({})",
            visibility,
            static_kw,
            self.name,
            render_params(self.params.as_slice())
        );
        if let Some(ty) = self.return_type.render() {
            signature.push_str(": ");
            signature.push_str(&ty);
        }
        signature
    }
}

impl Member for Method {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Renderable for Method {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = self
            .comment
            .as_ref()
            .map(Renderable::to_fragments)
            .unwrap_or_default();

        let declaration = if self.interface_method {
            vec![CodeFragment::Line(format!("{};", self.signature()))]
        } else {
            let body = self
                .body
                .iter()
                .map(|line| CodeFragment::Line(line.render()))
                .collect();
            vec![
                CodeFragment::Line(self.signature()),
                CodeFragment::block("{", body, Some("}".to_string())),
            ]
        };
        fragments.extend(self.indentation.wrap(declaration));
        fragments
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let options = RenderOptions::default();
        let resolved = self.resolve(&mut ImportSet::new(), &options);
        f.write_str(&render_to_string(&resolved, options.indent))
    }
}
