//! Infrastructure adapters for Initiator.
//!
//! This crate implements the ports defined in
//! `initiator_core::application::ports`. It contains all direct I/O: the
//! filesystem, child processes, PATH lookups and line-based prompts.

pub mod builtin_templates;
pub mod filesystem;
pub mod process;
pub mod prompt;

// Re-export commonly used adapters
pub use builtin_templates::BuiltinTemplates;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::{PathLocator, SystemProcessRunner};
pub use prompt::{LinePrompter, Unattended};
