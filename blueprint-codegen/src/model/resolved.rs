//! Import-resolved blueprints, ready to print.

use std::fmt;

use super::Blueprint;
use crate::{
    PhpFile, RenderOptions,
    builder::{CodeFragment, Renderable, render_to_string},
    generation::ImportSet,
};

/// A snapshot produced by [`Blueprint::resolve`].
///
/// Every type reference inside it is already shortened and every member
/// comment synthesized, so rendering is a pure read.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedBlueprint {
    blueprint: Blueprint,
    options: RenderOptions,
}

impl ResolvedBlueprint {
    pub(crate) fn new(blueprint: Blueprint, options: RenderOptions) -> Self {
        Self { blueprint, options }
    }

    pub fn blueprint(&self) -> &Blueprint {
        &self.blueprint
    }

    /// Every path the rendered class refers to by short name.
    pub fn imports(&self) -> &ImportSet {
        self.blueprint.imports()
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Give back the resolved model. Resolving it again yields the same
    /// imports and output.
    pub fn into_blueprint(self) -> Blueprint {
        self.blueprint
    }

    /// Render the class declaration.
    pub fn render(&self) -> String {
        tracing::debug!(class = self.blueprint.name(), "rendering blueprint");
        render_to_string(self, self.options.indent)
    }

    /// Render a complete source file: open tag, namespace, imports, class.
    pub fn render_file(&self) -> String {
        PhpFile::from(self).render()
    }

    fn member_prefix(&self) -> String {
        format!(
            "{}{}",
            self.blueprint.indentation().unwrap_or_default(),
            self.options.indent.unit()
        )
    }
}

impl Renderable for ResolvedBlueprint {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let blueprint = &self.blueprint;
        let wrap = |fragments| blueprint.indentation_node().wrap(fragments);

        let mut fragments = blueprint
            .comment(&self.options)
            .map(|comment| comment.to_fragments())
            .unwrap_or_default();
        fragments.extend(wrap(vec![CodeFragment::Line(blueprint.declaration())]));

        let mut sections: Vec<Vec<CodeFragment>> = Vec::new();
        let traits: Vec<&str> = blueprint.traits().collect();
        if !traits.is_empty() {
            sections.push(vec![CodeFragment::prefixed(
                self.member_prefix(),
                vec![CodeFragment::Line(format!("use {};", traits.join(", ")))],
            )]);
        }
        sections.extend(blueprint.properties().iter().map(Renderable::to_fragments));
        sections.extend(blueprint.methods().iter().map(Renderable::to_fragments));

        for (index, section) in sections.into_iter().enumerate() {
            if index > 0 {
                fragments.push(CodeFragment::Blank);
            }
            fragments.extend(section);
        }

        fragments.extend(wrap(vec![CodeFragment::line("}")]));
        fragments
    }
}

impl fmt::Display for ResolvedBlueprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
