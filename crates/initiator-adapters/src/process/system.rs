//! Child process runner on top of `std::process::Command`.

use std::process::{Command, Stdio};

use initiator_core::{
    application::{
        ApplicationError,
        ports::{Invocation, ProcessOutput, ProcessRunner},
    },
    error::InitiatorResult,
};
use tracing::{debug, instrument, trace};

/// Runs programs to completion, capturing stdout and stderr.
///
/// Stdin is closed so generators that would prompt fail fast instead of
/// hanging. There is no timeout.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemProcessRunner {
    #[instrument(skip_all, fields(command = %invocation))]
    fn run(&self, invocation: &Invocation) -> InitiatorResult<ProcessOutput> {
        let mut command = Command::new(&invocation.program);
        command
            .args(&invocation.args)
            .envs(invocation.env.iter().map(|(k, v)| (k, v)))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        if let Some(dir) = &invocation.cwd {
            command.current_dir(dir);
        }

        debug!(cwd = ?invocation.cwd, "Spawning");

        let output = command
            .output()
            .map_err(|e| ApplicationError::ProcessSpawn {
                command: invocation.command_line(),
                reason: e.to_string(),
            })?;

        let result = ProcessOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        debug!(success = result.success, code = ?result.code, "Finished");
        trace!(stdout = %result.stdout, stderr = %result.stderr, "Captured output");

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_is_a_spawn_error() {
        let err = SystemProcessRunner::new()
            .run(&Invocation::new("initiator-no-such-tool-7c1f"))
            .unwrap_err();
        assert!(err.to_string().contains("Could not run"));
    }

    #[cfg(unix)]
    #[test]
    fn captures_output_and_status_in_cwd() {
        let dir = tempfile::tempdir().unwrap();
        let out = SystemProcessRunner::new()
            .run(
                &Invocation::new("sh")
                    .args(["-c", "pwd; echo oops >&2; exit 3"])
                    .current_dir(dir.path()),
            )
            .unwrap();

        assert!(!out.success);
        assert_eq!(out.code, Some(3));
        assert_eq!(out.stderr.trim(), "oops");
        let reported = std::path::PathBuf::from(out.stdout.trim());
        assert_eq!(
            reported.canonicalize().unwrap(),
            dir.path().canonicalize().unwrap()
        );
    }

    #[cfg(unix)]
    #[test]
    fn passes_environment() {
        let out = SystemProcessRunner::new()
            .run(
                &Invocation::new("sh")
                    .args(["-c", "printf %s \"$npm_config_yes\""])
                    .env("npm_config_yes", "true"),
            )
            .unwrap();
        assert!(out.success);
        assert_eq!(out.stdout, "true");
    }
}
