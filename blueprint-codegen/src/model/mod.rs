//! The class blueprint model.
//!
//! - [`Blueprint`] - A class or interface and its members
//! - [`Method`], [`Property`], [`Parameter`] - Members and their parts
//! - [`Comment`] - Doc blocks and line comments, plus [`synthesize`]
//! - [`MemberRegistry`] - Ordered storage that rejects duplicate names
//! - [`ResolvedBlueprint`] - Import-resolved snapshot ready for rendering

mod blueprint;
mod comment;
mod method;
mod node;
mod param;
mod property;
mod registry;
mod resolved;
mod visibility;

pub use blueprint::{Blueprint, BlueprintKind, ClassModifier};
pub use comment::{Comment, CommentStyle, synthesize};
pub use method::{BodyLine, CONSTRUCTOR, Method, ReturnType};
pub use node::Indentation;
pub use param::{DefaultValue, Parameter, ordered, render_params};
pub use property::Property;
pub use registry::{Member, MemberRegistry, Probe, probe_search};
pub use resolved::ResolvedBlueprint;
pub use visibility::Visibility;
