//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `initiator-adapters` implement
//! them.
//!
//! ## Port Types
//!
//! - `Filesystem`: file operations
//! - `ProcessRunner` / `ToolLocator`: external programs
//! - `TemplateStore`: built-in template bodies
//! - `Chooser` / `Confirmer`: user prompts
//! - `ProgressReporter`: per-step feedback

pub mod output;

pub use output::{
    ChoiceOption, Chooser, Confirmer, Filesystem, Invocation, ProcessOutput, ProcessRunner,
    ProgressReporter, SilentProgress, TemplateStore, ToolLocator, UNLISTED_DIRS,
};

#[cfg(test)]
pub use output::{
    MockChooser, MockConfirmer, MockFilesystem, MockProcessRunner, MockTemplateStore,
    MockToolLocator,
};
