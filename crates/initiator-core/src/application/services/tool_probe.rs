//! Presence and version checks for external tools.
//!
//! Probing never fails: a tool that cannot be found or run is reported as
//! missing, and one that runs but prints something unexpected is reported
//! as installed with an unknown version.

use tracing::{debug, instrument};

use crate::application::ports::{Invocation, ProcessRunner, ToolLocator};
use crate::domain::{ToolCheckResult, ToolInvocation, ToolSpec};

pub struct ToolProbe {
    locator: Box<dyn ToolLocator>,
    runner: Box<dyn ProcessRunner>,
}

impl ToolProbe {
    pub fn new(locator: Box<dyn ToolLocator>, runner: Box<dyn ProcessRunner>) -> Self {
        Self { locator, runner }
    }

    /// PATH lookup only, except for subcommand candidates, which must answer.
    pub fn is_installed(&self, spec: &ToolSpec) -> bool {
        spec.candidates.iter().any(|c| {
            self.locator.locate(c.program).is_some() && (!c.subcommand || self.answer(c).is_some())
        })
    }

    /// Version from the first candidate whose answer parses.
    pub fn get_version(&self, spec: &ToolSpec) -> Option<String> {
        spec.candidates
            .iter()
            .filter(|c| self.locator.locate(c.program).is_some())
            .find_map(|c| {
                let output = self.answer(c)?;
                let version = spec.format.parse(&output);
                if version.is_none() {
                    debug!(program = c.program, "Unrecognised version output");
                }
                version
            })
    }

    #[instrument(skip_all, fields(tool = spec.name))]
    pub fn check(&self, spec: &ToolSpec) -> ToolCheckResult {
        if !self.is_installed(spec) {
            debug!("Not found");
            return ToolCheckResult::missing(spec);
        }
        let version = self.get_version(spec);
        debug!(?version, "Found");
        ToolCheckResult::found(spec, version)
    }

    pub fn check_all(&self, specs: &[ToolSpec]) -> Vec<ToolCheckResult> {
        specs.iter().map(|s| self.check(s)).collect()
    }

    /// Output of a successful run; stderr when stdout is empty.
    fn answer(&self, candidate: &ToolInvocation) -> Option<String> {
        let invocation = Invocation::new(candidate.program).args(candidate.args.iter().copied());
        match self.runner.run(&invocation) {
            Ok(out) if out.success => {
                if out.stdout.trim().is_empty() {
                    Some(out.stderr)
                } else {
                    Some(out.stdout)
                }
            }
            Ok(out) => {
                debug!(command = %invocation, code = ?out.code, "Version command failed");
                None
            }
            Err(e) => {
                debug!(command = %invocation, error = %e, "Version command did not start");
                None
            }
        }
    }
}
