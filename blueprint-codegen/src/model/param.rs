//! Method parameters and signature rendering.

use std::fmt;

use super::Member;
use crate::generation::{ImportSet, shorten_type};

/// A default value for a parameter or property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultValue {
    /// The `null` keyword.
    Null,
    /// Literal source text, e.g. `'draft'`, `10`, `[]`.
    Literal(String),
}

impl DefaultValue {
    /// Create a literal default from source text.
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }

    /// Render the value as source text.
    ///
    /// A quoted `"null"` becomes the `null` keyword and an array literal
    /// wrapped in single quotes (`'[1, 2]'`) loses its quotes.
    pub fn render(&self) -> String {
        match self {
            Self::Null => "null".to_string(),
            Self::Literal(text) => {
                let text = text.trim();
                if text == "\"null\"" {
                    "null".to_string()
                } else if text.len() >= 4 && text.starts_with("'[") && text.ends_with("]'") {
                    text[1..text.len() - 1].trim_end().replace(" ]", "]")
                } else {
                    text.to_string()
                }
            }
        }
    }
}

impl fmt::Display for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// A method parameter.
///
/// A parameter is optional when it has a default value or was marked with
/// [`Parameter::as_optional`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    name: String,
    ty: Option<String>,
    default: Option<DefaultValue>,
    optional: bool,
}

impl Parameter {
    /// Create a new required, untyped parameter.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
            default: None,
            optional: false,
        }
    }

    /// Set the parameter type.
    pub fn typed(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    /// Set a literal default value.
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(DefaultValue::literal(value));
        self
    }

    /// Default the parameter to `null`.
    pub fn default_null(mut self) -> Self {
        self.default = Some(DefaultValue::Null);
        self
    }

    /// Mark the parameter optional. Without an explicit default it defaults
    /// to `null`.
    pub fn as_optional(mut self) -> Self {
        self.optional = true;
        if self.default.is_none() {
            self.default = Some(DefaultValue::Null);
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> Option<&str> {
        self.ty.as_deref()
    }

    pub fn default(&self) -> Option<&DefaultValue> {
        self.default.as_ref()
    }

    pub fn is_optional(&self) -> bool {
        self.optional || self.default.is_some()
    }

    /// Copy of this parameter with its type shortened through `imports`.
    pub fn resolve(&self, imports: &mut ImportSet) -> Self {
        Self {
            ty: self.ty.as_deref().map(|ty| shorten_type(ty, imports)),
            ..self.clone()
        }
    }

    /// Render as it appears in a signature: `Type $name = default`.
    pub fn render(&self) -> String {
        let mut out = match &self.ty {
            Some(ty) => format!("{} ${}", ty, self.name),
            None => format!("${}", self.name),
        };
        if let Some(default) = &self.default {
            out.push_str(" = ");
            out.push_str(&default.render());
        }
        out
    }
}

impl Member for Parameter {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Order parameters for a signature: required first, then optional, each
/// group keeping insertion order.
pub fn ordered(params: &[Parameter]) -> Vec<&Parameter> {
    let (required, optional): (Vec<_>, Vec<_>) = params.iter().partition(|p| !p.is_optional());
    required.into_iter().chain(optional).collect()
}

/// Render a parameter list in signature order, joined with `, `.
pub fn render_params(params: &[Parameter]) -> String {
    ordered(params)
        .into_iter()
        .map(Parameter::render)
        .collect::<Vec<_>>()
        .join(", ")
}
