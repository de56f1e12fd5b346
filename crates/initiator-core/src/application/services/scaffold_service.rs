//! Scaffold Service - main application orchestrator.
//!
//! Coordinates one project creation:
//! 1. Prepare the target directory (overwrite policy, write probe)
//! 2. Run the flavor's step plan
//! 3. Optionally initialize version control
//!
//! Failures leave whatever was already written in place.

use std::path::Path;

use tracing::{info, instrument, warn};

use crate::application::ports::{Confirmer, Filesystem, ProcessRunner, ProgressReporter, TemplateStore};
use crate::application::services::project_builder::{
    BuildReport, StepContext, StepCursor, StepPlan, execute_from,
};
use crate::application::services::recipes::{plan_for, vcs};
use crate::application::services::workspace::{PrepareOutcome, prepare_target_dir};
use crate::domain::{ProjectDescriptor, VcsFailurePolicy};
use crate::error::InitiatorResult;

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    runner: Box<dyn ProcessRunner>,
    templates: Box<dyn TemplateStore>,
    vcs_policy: VcsFailurePolicy,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        runner: Box<dyn ProcessRunner>,
        templates: Box<dyn TemplateStore>,
    ) -> Self {
        Self {
            filesystem,
            runner,
            templates,
            vcs_policy: VcsFailurePolicy::default(),
        }
    }

    pub fn with_vcs_policy(mut self, policy: VcsFailurePolicy) -> Self {
        self.vcs_policy = policy;
        self
    }

    /// Make the target an empty, writable directory.
    pub fn prepare_target(
        &self,
        path: &Path,
        force: bool,
        confirmer: &dyn Confirmer,
    ) -> InitiatorResult<PrepareOutcome> {
        prepare_target_dir(self.filesystem.as_ref(), confirmer, path, force)
    }

    /// Steps that [`build`](Self::build) would run before version control.
    pub fn plan(&self, descriptor: &ProjectDescriptor) -> StepPlan {
        plan_for(descriptor.flavor())
    }

    /// Run the flavor plan, then version control setup if requested.
    ///
    /// The target directory must already exist.
    #[instrument(
        skip_all,
        fields(
            project = %descriptor.name(),
            flavor = %descriptor.flavor(),
            target = %descriptor.target_dir().display()
        )
    )]
    pub fn build(
        &self,
        descriptor: &ProjectDescriptor,
        progress: &dyn ProgressReporter,
    ) -> InitiatorResult<BuildReport> {
        let plan = self.plan(descriptor);
        let vcs_plan = descriptor.init_vcs().then(vcs::plan);
        let total = plan.len() + vcs_plan.as_ref().map_or(0, StepPlan::len);

        info!(steps = total, "Building project");

        let ctx = StepContext::new(
            descriptor,
            self.filesystem.as_ref(),
            self.runner.as_ref(),
            self.templates.as_ref(),
        );
        let mut cursor = StepCursor::new(total);
        let mut report = BuildReport::default();

        execute_from(&plan, &ctx, progress, &mut cursor, &mut report)?;

        if let Some(vcs_plan) = vcs_plan {
            if let Err(e) = execute_from(&vcs_plan, &ctx, progress, &mut cursor, &mut report) {
                match self.vcs_policy {
                    VcsFailurePolicy::Fatal => return Err(e),
                    VcsFailurePolicy::Advisory => {
                        warn!(error = %e, "Version control setup failed, continuing");
                        report.vcs_warning = Some(e.to_string());
                    }
                }
            }
        }

        info!(completed = report.completed.len(), "Project built");
        Ok(report)
    }

    /// Prepare the directory and build the project in one go.
    pub fn create(
        &self,
        descriptor: &ProjectDescriptor,
        force: bool,
        confirmer: &dyn Confirmer,
        progress: &dyn ProgressReporter,
    ) -> InitiatorResult<BuildReport> {
        self.prepare_target(descriptor.target_dir(), force, confirmer)?;
        self.build(descriptor, progress)
    }

    /// Number of regular files below the project root.
    pub fn count_files(&self, descriptor: &ProjectDescriptor) -> InitiatorResult<usize> {
        Ok(self.filesystem.list_files(descriptor.target_dir())?.len())
    }
}
