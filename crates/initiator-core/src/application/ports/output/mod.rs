//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from the outside world.
//! The `initiator-adapters` crate provides implementations; the CLI adds the
//! terminal-bound ones (spinner progress, dialoguer prompts).

use std::fmt;
use std::path::{Path, PathBuf};

use crate::application::ApplicationError;
use crate::domain::TemplateId;
use crate::error::InitiatorResult;

/// Directories whose contents `Filesystem::list_files` leaves out:
/// installed dependencies and version control metadata.
pub const UNLISTED_DIRS: &[&str] = &["node_modules", ".git"];

/// Port for filesystem operations.
///
/// Implemented by:
/// - `initiator_adapters::filesystem::LocalFilesystem` (production)
/// - `initiator_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> InitiatorResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> InitiatorResult<()>;

    fn read_to_string(&self, path: &Path) -> InitiatorResult<String>;

    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    fn remove_file(&self, path: &Path) -> InitiatorResult<()>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> InitiatorResult<()>;

    /// All regular files below `root`, recursively, skipping [`UNLISTED_DIRS`].
    fn list_files(&self, root: &Path) -> InitiatorResult<Vec<PathBuf>>;
}

/// A fully described external command.
///
/// The working directory is part of the invocation; nothing in the
/// application changes the process-wide current directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
    pub env: Vec<(String, String)>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            env: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// `program arg1 arg2`, for logs and error messages.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

/// Captured result of a finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    pub success: bool,
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    /// Turn an unsuccessful exit into `ProcessFailed`.
    pub fn check(self, invocation: &Invocation) -> InitiatorResult<Self> {
        if self.success {
            return Ok(self);
        }
        let status = match self.code {
            Some(code) => format!("exit code {code}"),
            None => "signal".to_string(),
        };
        Err(ApplicationError::ProcessFailed {
            command: invocation.command_line(),
            status,
            stderr: self.stderr,
        }
        .into())
    }
}

/// Port for running external programs.
///
/// Implemented by:
/// - `initiator_adapters::process::SystemProcessRunner` (std::process)
///
/// Returns `Err` only when the program could not be started; a non-zero exit
/// is reported through `ProcessOutput::success`.
#[cfg_attr(test, mockall::automock)]
pub trait ProcessRunner: Send + Sync {
    fn run(&self, invocation: &Invocation) -> InitiatorResult<ProcessOutput>;
}

/// Port for finding executables on PATH without running them.
///
/// Implemented by:
/// - `initiator_adapters::process::PathLocator` (`which`)
#[cfg_attr(test, mockall::automock)]
pub trait ToolLocator: Send + Sync {
    fn locate(&self, program: &str) -> Option<PathBuf>;
}

/// Port for built-in template bodies.
///
/// Implemented by:
/// - `initiator_adapters::BuiltinTemplates`
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    fn template(&self, id: TemplateId) -> InitiatorResult<String>;
}

/// An entry shown by a [`Chooser`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOption {
    pub label: String,
    pub description: String,
}

impl ChoiceOption {
    pub fn new(label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: description.into(),
        }
    }
}

/// Port for picking one entry from a list.
///
/// Implemented by:
/// - `initiator_adapters::prompt::LinePrompter` (numbered list over any reader)
/// - the CLI's dialoguer prompter (interactive terminals)
#[cfg_attr(test, mockall::automock)]
pub trait Chooser {
    /// Index into `options`. Callers re-ask on out-of-range answers.
    fn choose(&self, prompt: &str, options: &[ChoiceOption]) -> InitiatorResult<usize>;
}

/// Port for yes/no questions.
///
/// Implemented by:
/// - `initiator_adapters::prompt::LinePrompter`
/// - `initiator_adapters::prompt::Unattended` (answers with the default)
/// - the CLI's dialoguer prompter
#[cfg_attr(test, mockall::automock)]
pub trait Confirmer {
    fn confirm(&self, prompt: &str, default: bool) -> InitiatorResult<bool>;
}

/// Port for step progress feedback.
///
/// Implemented by:
/// - the CLI's spinner reporter (`indicatif`)
/// - [`SilentProgress`] (no output)
pub trait ProgressReporter {
    /// `index` is 1-based.
    fn step_started(&self, index: usize, total: usize, label: &str);

    fn step_succeeded(&self, message: &str);

    fn step_failed(&self, label: &str, error: &str);
}

/// Reporter that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn step_started(&self, _index: usize, _total: usize, _label: &str) {}

    fn step_succeeded(&self, _message: &str) {}

    fn step_failed(&self, _label: &str, _error: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invocation_builder_collects_everything() {
        let inv = Invocation::new("npx")
            .args(["create-remix@latest", "."])
            .arg("--typescript")
            .current_dir("/tmp/app")
            .env("npm_config_yes", "true");

        assert_eq!(inv.command_line(), "npx create-remix@latest . --typescript");
        assert_eq!(inv.cwd.as_deref(), Some(Path::new("/tmp/app")));
        assert_eq!(inv.env, vec![("npm_config_yes".into(), "true".into())]);
    }

    #[test]
    fn check_maps_failure_to_process_failed() {
        let inv = Invocation::new("git").arg("init");
        let out = ProcessOutput {
            success: false,
            code: Some(128),
            stdout: String::new(),
            stderr: "fatal: nope".into(),
        };

        let err = out.check(&inv).unwrap_err();
        assert_eq!(err.to_string(), "`git init` exited with exit code 128: fatal: nope");
    }
}
