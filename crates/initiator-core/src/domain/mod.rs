//! Core domain layer for Initiator.
//!
//! Pure values and validation rules. Nothing here touches the filesystem,
//! spawns processes or prompts; that is done through the ports in
//! `crate::application::ports`.

pub mod error;
pub mod flavor;
pub mod manifest;
pub mod project;
pub mod template;
pub mod tool;

pub use error::DomainError;
pub use flavor::{FLAVOR_REGISTRY, FlavorDef, ProjectFlavor, Stack, list_flavors};
pub use manifest::{
    DEFAULT_CONTAINER_PORT, DEFAULT_NAMESPACE, ManifestKind, ManifestSpec, ManifestSpecBuilder,
};
pub use project::{ProjectDescriptor, ProjectName, VcsFailurePolicy, validate_name};
pub use template::{RenderContext, TemplateId};
pub use tool::{DEFAULT_TOOLS, ToolCheckResult, ToolInvocation, ToolSpec, VersionFormat};
