//! The class blueprint aggregate.

use std::fmt;

use blueprint_core::{is_identifier, is_type_path};
use indexmap::IndexSet;

use super::{
    CONSTRUCTOR, Comment, Indentation, MemberRegistry, Method, Property, ResolvedBlueprint,
};
use crate::{
    Error, MemberKind, RenderOptions, Result,
    generation::{ImportSet, shorten_type},
};

/// Whether a blueprint renders as a class or an interface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlueprintKind {
    #[default]
    Class,
    Interface,
}

/// Class-level modifier keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassModifier {
    Final,
    Abstract,
}

impl ClassModifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Final => "final",
            Self::Abstract => "abstract",
        }
    }
}

impl fmt::Display for ClassModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A class or interface under construction.
///
/// Members pass through a [`MemberRegistry`], so method names and property
/// names are unique. The constructor always iterates first.
///
/// # Example
///
/// ```
/// use blueprint_codegen::model::{Blueprint, Method, Parameter, Property};
///
/// let blueprint = Blueprint::new("Greeter")
///     .unwrap()
///     .add_property(Property::new("name").typed("string"))
///     .unwrap()
///     .add_method(
///         Method::new("__construct")
///             .add_param(Parameter::new("name").typed("string"))
///             .unwrap()
///             .add_line("$this->name = $name"),
///     )
///     .unwrap();
///
/// let output = blueprint.to_string();
/// assert!(output.starts_with("class Greeter {"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Blueprint {
    name: String,
    kind: BlueprintKind,
    modifier: Option<ClassModifier>,
    namespace: Option<String>,
    base: Option<String>,
    interfaces: IndexSet<String>,
    traits: IndexSet<String>,
    methods: MemberRegistry<Method>,
    properties: MemberRegistry<Property>,
    imports: ImportSet,
    description: Vec<String>,
    constructor_name: String,
    indentation: Indentation,
}

impl Blueprint {
    /// Create an empty class blueprint.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Self::with_kind(name.into(), BlueprintKind::Class)
    }

    /// Create an empty interface blueprint.
    pub fn interface(name: impl Into<String>) -> Result<Self> {
        Self::with_kind(name.into(), BlueprintKind::Interface)
    }

    fn with_kind(name: String, kind: BlueprintKind) -> Result<Self> {
        if !is_identifier(&name) {
            return Err(Error::invalid("a class name", name));
        }
        Ok(Self {
            name,
            kind,
            modifier: None,
            namespace: None,
            base: None,
            interfaces: IndexSet::new(),
            traits: IndexSet::new(),
            methods: MemberRegistry::new(),
            properties: MemberRegistry::new(),
            imports: ImportSet::new(),
            description: Vec::new(),
            constructor_name: CONSTRUCTOR.to_string(),
            indentation: Indentation::default(),
        })
    }

    /// Set the namespace the class is declared in.
    pub fn in_namespace(mut self, namespace: impl Into<String>) -> Self {
        let namespace = namespace.into();
        self.namespace = Some(namespace.trim_matches('\\').to_string());
        self
    }

    /// Declare the class `final` or `abstract`. Ignored for interfaces.
    pub fn with_modifier(mut self, modifier: ClassModifier) -> Self {
        if self.kind == BlueprintKind::Class {
            self.modifier = Some(modifier);
        }
        self
    }

    /// Set the parent class.
    ///
    /// Interfaces have no parent class, so for an interface this adds an
    /// extended interface instead.
    pub fn extends(mut self, base: impl Into<String>) -> Result<Self> {
        let base = base.into();
        if !is_type_path(&base) {
            return Err(Error::invalid("a class path", base));
        }
        match self.kind {
            BlueprintKind::Class => self.base = Some(base),
            BlueprintKind::Interface => {
                self.interfaces.insert(base);
            }
        }
        Ok(self)
    }

    /// Add an implemented (or, for interfaces, extended) interface.
    pub fn add_interface(mut self, interface: impl Into<String>) -> Result<Self> {
        let interface = interface.into();
        if !is_type_path(&interface) {
            return Err(Error::invalid("an interface path", interface));
        }
        self.interfaces.insert(interface);
        Ok(self)
    }

    /// Add a used trait.
    pub fn add_trait(mut self, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if self.kind == BlueprintKind::Interface || !is_type_path(&name) {
            return Err(Error::invalid("a trait path on a class", name));
        }
        self.traits.insert(name);
        Ok(self)
    }

    /// Add a method.
    pub fn add_method(mut self, method: Method) -> Result<Self> {
        self.try_add_method(method)?;
        Ok(self)
    }

    /// Add a method in place. On error the blueprint is unchanged.
    ///
    /// A method named like the constructor is moved to the front and is
    /// never static. On an interface every method becomes a bodiless
    /// signature.
    pub fn try_add_method(&mut self, mut method: Method) -> Result<()> {
        if !is_identifier(method.name()) {
            return Err(Error::invalid("a method name", method.name()));
        }
        if self.kind == BlueprintKind::Interface {
            method.set_interface_method();
        }

        let inserted = if method.name() == self.constructor_name {
            method.set_static(false);
            self.methods.push_front(method)
        } else {
            self.methods.push(method)
        };

        match inserted {
            Ok(()) => {
                tracing::debug!(class = %self.name, count = self.methods.len(), "added method");
                Ok(())
            }
            Err(rejected) => {
                tracing::debug!(
                    class = %self.name,
                    method = rejected.name(),
                    "rejected duplicate method"
                );
                Err(Error::DuplicateMember {
                    kind: MemberKind::Method,
                    name: rejected.name().to_string(),
                })
            }
        }
    }

    /// Add a property or constant.
    pub fn add_property(mut self, property: Property) -> Result<Self> {
        self.try_add_property(property)?;
        Ok(self)
    }

    /// Add a property in place. On error the blueprint is unchanged.
    ///
    /// Interfaces only accept constants.
    pub fn try_add_property(&mut self, property: Property) -> Result<()> {
        if !is_identifier(property.name()) {
            return Err(Error::invalid("a property name", property.name()));
        }
        if self.kind == BlueprintKind::Interface && !property.is_constant() {
            return Err(Error::invalid("a constant on an interface", property.name()));
        }

        match self.properties.push(property) {
            Ok(()) => {
                tracing::debug!(
                    class = %self.name,
                    count = self.properties.len(),
                    "added property"
                );
                Ok(())
            }
            Err(rejected) => {
                tracing::debug!(
                    class = %self.name,
                    property = rejected.name(),
                    "rejected duplicate property"
                );
                Err(Error::DuplicateMember {
                    kind: MemberKind::Property,
                    name: rejected.name().to_string(),
                })
            }
        }
    }

    /// Add a public class constant. The name is printed upper-cased.
    pub fn add_constant(self, name: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        self.add_property(Property::new(name).default_value(value).as_constant())
    }

    /// Import a class path without referencing it from any member.
    pub fn add_class_path(mut self, path: impl AsRef<str>) -> Self {
        self.imports.add_path(path.as_ref());
        self
    }

    /// Add a line to the class comment.
    pub fn doc(mut self, line: impl AsRef<str>) -> Self {
        self.description.extend(line.as_ref().split('\n').map(str::to_string));
        self
    }

    /// Prefix every printed line with `prefix`.
    pub fn with_indentation(mut self, prefix: impl Into<String>) -> Self {
        self.indentation.set(prefix);
        self
    }

    /// Use a different method name as the constructor.
    ///
    /// An already added method with that name moves to the front and loses
    /// its static flag.
    pub fn with_constructor_name(mut self, name: impl Into<String>) -> Self {
        self.constructor_name = name.into();
        if let Some(constructor) = self.methods.move_to_front(&self.constructor_name) {
            constructor.set_static(false);
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> BlueprintKind {
        self.kind
    }

    pub fn modifier(&self) -> Option<ClassModifier> {
        self.modifier
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn base(&self) -> Option<&str> {
        self.base.as_deref()
    }

    pub fn interfaces(&self) -> impl Iterator<Item = &str> {
        self.interfaces.iter().map(String::as_str)
    }

    pub fn traits(&self) -> impl Iterator<Item = &str> {
        self.traits.iter().map(String::as_str)
    }

    /// Methods in iteration order, constructor first.
    pub fn methods(&self) -> &[Method] {
        self.methods.as_slice()
    }

    pub fn properties(&self) -> &[Property] {
        self.properties.as_slice()
    }

    pub fn imports(&self) -> &ImportSet {
        &self.imports
    }

    pub fn description(&self) -> &[String] {
        &self.description
    }

    pub fn indentation(&self) -> Option<&str> {
        self.indentation.get()
    }

    /// Resolve with default [`RenderOptions`].
    pub fn resolve(&self) -> ResolvedBlueprint {
        self.resolve_with(RenderOptions::default())
    }

    /// Produce a render-ready snapshot.
    ///
    /// Every type reference in the class header and its members is
    /// shortened through the import set, member comments are synthesized
    /// and member indentation becomes the class prefix plus one indent
    /// unit. `self` is left untouched.
    pub fn resolve_with(&self, options: RenderOptions) -> ResolvedBlueprint {
        let mut imports = ImportSet::new();
        let prefix = self.indentation.get().unwrap_or_default();
        let member_prefix = format!("{}{}", prefix, options.indent.unit());

        let base = self.base.as_deref().map(|b| imports.register(b));
        let interfaces = self.interfaces.iter().map(|i| imports.register(i)).collect();
        let traits = self.traits.iter().map(|t| imports.register(t)).collect();
        let properties = self.properties.map(|p| {
            p.clone()
                .with_indentation(member_prefix.as_str())
                .resolve(&mut imports, &options)
        });
        let methods = self.methods.map(|m| {
            m.clone()
                .with_indentation(member_prefix.as_str())
                .resolve(&mut imports, &options)
        });

        let mut merged = self.imports.clone();
        merged.merge(&imports);
        tracing::debug!(
            class = %self.name,
            imports = merged.len(),
            methods = methods.len(),
            properties = properties.len(),
            "resolved blueprint"
        );

        let blueprint = Self {
            base,
            interfaces,
            traits,
            properties,
            methods,
            imports: merged,
            ..self.clone()
        };
        ResolvedBlueprint::new(blueprint, options)
    }

    /// The class comment, indented like the declaration.
    pub(crate) fn comment(&self, options: &RenderOptions) -> Option<Comment> {
        if self.description.is_empty() {
            return None;
        }
        let comment = Comment::new(self.description.iter().cloned(), options.comment_style);
        Some(match self.indentation.get() {
            Some(prefix) => comment.with_indentation(prefix),
            None => comment,
        })
    }

    /// The opening declaration line, e.g. `final class Foo extends Bar {`.
    pub(crate) fn declaration(&self) -> String {
        let interfaces: Vec<&str> = self.interfaces().collect();
        match self.kind {
            BlueprintKind::Interface => {
                let mut line = format!("interface {}", self.name);
                if !interfaces.is_empty() {
                    line.push_str(" extends ");
                    line.push_str(&interfaces.join(", "));
                }
                line.push_str(" {");
                line
            }
            BlueprintKind::Class => {
                let mut line = match self.modifier {
                    Some(modifier) => format!("{} class {}", modifier, self.name),
                    None => format!("class {}", self.name),
                };
                if let Some(base) = &self.base {
                    line.push_str(" extends ");
                    line.push_str(base);
                }
                if !interfaces.is_empty() {
                    line.push_str(" implements ");
                    line.push_str(&interfaces.join(", "));
                }
                line.push_str(" {");
                line
            }
        }
    }

    pub(crate) fn indentation_node(&self) -> &Indentation {
        &self.indentation
    }

    /// Shorten a single type reference against this blueprint's imports.
    ///
    /// Useful for callers writing body lines that mention a class: the
    /// path is registered so the resolved file imports it.
    pub fn import_type(&mut self, ty: &str) -> String {
        shorten_type(ty, &mut self.imports)
    }
}

impl fmt::Display for Blueprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.resolve().render())
    }
}
