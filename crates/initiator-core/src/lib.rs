//! Initiator Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Initiator
//! project scaffolder, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          initiator-cli (CLI)            │
//! │   (argument parsing, prompts, output)   │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (ScaffoldService, ManifestService,      │
//! │  ToolProbe, step plans per flavor)      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Application Ports (Traits)       │
//! │ (Filesystem, ProcessRunner, Chooser...) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    initiator-adapters (Infrastructure)  │
//! │ (LocalFilesystem, SystemProcessRunner)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ProjectFlavor, ProjectDescriptor,      │
//! │  ManifestSpec, ToolSpec)                │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use initiator_core::{
//!     application::ScaffoldService,
//!     domain::{ProjectDescriptor, ProjectFlavor, ProjectName},
//! };
//!
//! let name = ProjectName::parse("my-api").unwrap();
//! let descriptor =
//!     ProjectDescriptor::new(name, "/work/my-api", ProjectFlavor::GoWeb, true).unwrap();
//!
//! // Adapters are injected by the caller.
//! let service = ScaffoldService::new(filesystem, runner, templates);
//! service.build(&descriptor, &progress).unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        BuildReport, ManifestService, PrepareOutcome, ScaffoldService, ToolProbe,
        ports::{
            Chooser, Confirmer, Filesystem, Invocation, ProcessOutput, ProcessRunner,
            ProgressReporter, TemplateStore, ToolLocator,
        },
    };
    pub use crate::domain::{
        FlavorDef, ManifestKind, ManifestSpec, ProjectDescriptor, ProjectFlavor, ProjectName,
        Stack, TemplateId, ToolCheckResult, ToolSpec, VcsFailurePolicy,
    };
    pub use crate::error::{InitiatorError, InitiatorResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
