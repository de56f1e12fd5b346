//! Application layer for Initiator.
//!
//! This layer contains:
//! - **Services**: use case orchestration (scaffolding, manifests, tool probing)
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    BuildReport, BuildStep, ManifestService, PrepareOutcome, ScaffoldService, StepContext,
    StepPlan, ToolProbe, plan_for, prepare_target_dir, resolve_flavor,
};

pub use ports::{
    Chooser, Confirmer, Filesystem, ProcessRunner, ProgressReporter, TemplateStore, ToolLocator,
};

pub use error::ApplicationError;
