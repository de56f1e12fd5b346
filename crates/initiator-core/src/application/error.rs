//! Application layer errors.
//!
//! These errors represent failures in orchestration, not validation.
//! Validation errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while preparing directories, running steps or prompting.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A build step failed; later steps were not run.
    #[error("Step {index}/{total} '{step}' failed: {reason}")]
    StepFailed {
        step: String,
        index: usize,
        total: usize,
        target: PathBuf,
        reason: String,
    },

    /// An external command ran but exited unsuccessfully.
    #[error("`{command}` exited with {status}{}", stderr_suffix(.stderr))]
    ProcessFailed {
        command: String,
        status: String,
        stderr: String,
    },

    /// An external command could not be started at all.
    #[error("Could not run `{command}`: {reason}")]
    ProcessSpawn { command: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Target path exists but is a file.
    #[error("{path} exists and is not a directory")]
    NotADirectory { path: PathBuf },

    /// Target directory was created but cannot be written to.
    #[error("{path} is not writable: {reason}")]
    NotWritable { path: PathBuf, reason: String },

    /// The user declined to continue.
    #[error("Operation cancelled: {reason}")]
    Cancelled { reason: String },

    /// Prompt input could not be read.
    #[error("Prompt failed: {reason}")]
    PromptFailed { reason: String },

    /// A choice was required but prompting is disabled.
    #[error("A selection is required for '{prompt}' but prompting is disabled")]
    NoChoice { prompt: String },

    /// A generated `package.json` could not be patched.
    #[error("Cannot update package.json: {reason}")]
    PackageJson { reason: String },

    /// The configured template override directory does not exist.
    #[error("Template directory not found: {}", path.display())]
    TemplateDirMissing { path: PathBuf },

    /// Shared adapter state lock was poisoned.
    #[error("Internal lock poisoned")]
    LockPoisoned,
}

fn stderr_suffix(stderr: &str) -> String {
    let last = stderr.lines().rev().map(str::trim).find(|l| !l.is_empty());
    match last {
        Some(line) => format!(": {line}"),
        None => String::new(),
    }
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::StepFailed { target, .. } => vec![
                format!("The project at {} was left as-is", target.display()),
                "Delete that directory and run the command again".into(),
                "Run 'initiator doctor' to check required tools".into(),
            ],
            Self::ProcessSpawn { command, .. } => vec![
                format!("Make sure the program for `{}` is installed and on PATH", command),
                "Run 'initiator doctor' to check required tools".into(),
            ],
            Self::ProcessFailed { stderr, .. } if !stderr.trim().is_empty() => {
                vec!["Re-run with -vv to see the full command output".into()]
            }
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::NotADirectory { path } => vec![
                format!("Remove or rename the file at {}", path.display()),
                "Or choose a different --dir".into(),
            ],
            Self::NotWritable { path, .. } => vec![
                format!("Check permissions on {}", path.display()),
                "Choose a different --dir".into(),
            ],
            Self::Cancelled { .. } => vec![
                "Use --force to overwrite an existing directory".into(),
                "Or choose a different project name".into(),
            ],
            Self::TemplateDirMissing { .. } => vec![
                "Check templates.dir in the config file or $INITIATOR_TEMPLATES_DIR".into(),
                "Unset it to use the built-in templates".into(),
            ],
            Self::NoChoice { .. } => vec![
                "Pass --flavor explicitly, e.g. --flavor go-web".into(),
                "Run 'initiator list' to see available flavors".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::StepFailed { .. } | Self::ProcessFailed { .. } | Self::ProcessSpawn { .. } => {
                ErrorCategory::Execution
            }
            Self::NotADirectory { .. } | Self::NotWritable { .. } | Self::Cancelled { .. } => {
                ErrorCategory::Precondition
            }
            Self::NoChoice { .. } | Self::PromptFailed { .. } => ErrorCategory::Validation,
            Self::TemplateDirMissing { .. } => ErrorCategory::NotFound,
            Self::FilesystemError { .. } | Self::PackageJson { .. } | Self::LockPoisoned => {
                ErrorCategory::Internal
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_failure_shows_last_stderr_line() {
        let err = ApplicationError::ProcessFailed {
            command: "go mod tidy".into(),
            status: "exit code 1".into(),
            stderr: "go: downloading\ngo: module not found\n\n".into(),
        };

        assert_eq!(
            err.to_string(),
            "`go mod tidy` exited with exit code 1: go: module not found"
        );
    }

    #[test]
    fn process_failure_without_stderr() {
        let err = ApplicationError::ProcessFailed {
            command: "npm init -y".into(),
            status: "signal".into(),
            stderr: String::new(),
        };

        assert_eq!(err.to_string(), "`npm init -y` exited with signal");
    }
}
