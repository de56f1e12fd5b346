//! Step plans and their sequential executor.
//!
//! A [`StepPlan`] is an ordered list of [`BuildStep`]s produced by a pure
//! function of the flavor (see `recipes`). Execution walks the plan once,
//! in order, and stops at the first failure. Nothing is rolled back.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::application::ApplicationError;
use crate::application::ports::{
    Filesystem, Invocation, ProcessOutput, ProcessRunner, ProgressReporter, TemplateStore,
};
use crate::domain::{ProjectDescriptor, RenderContext, TemplateId};
use crate::error::InitiatorResult;

type StepAction = Box<dyn Fn(&StepContext<'_>) -> InitiatorResult<()> + Send + Sync>;

/// One named unit of work.
pub struct BuildStep {
    label: String,
    success_message: String,
    action: StepAction,
}

impl BuildStep {
    pub fn new<F>(label: impl Into<String>, success_message: impl Into<String>, action: F) -> Self
    where
        F: Fn(&StepContext<'_>) -> InitiatorResult<()> + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            success_message: success_message.into(),
            action: Box::new(action),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn success_message(&self) -> &str {
        &self.success_message
    }

    pub fn run(&self, ctx: &StepContext<'_>) -> InitiatorResult<()> {
        (self.action)(ctx)
    }
}

impl fmt::Debug for BuildStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuildStep")
            .field("label", &self.label)
            .field("success_message", &self.success_message)
            .finish_non_exhaustive()
    }
}

/// Ordered steps for one project.
#[derive(Debug, Default)]
pub struct StepPlan {
    steps: Vec<BuildStep>,
}

impl StepPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(mut self, step: BuildStep) -> Self {
        self.steps.push(step);
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[BuildStep] {
        &self.steps
    }

    pub fn labels(&self) -> Vec<&str> {
        self.steps.iter().map(BuildStep::label).collect()
    }
}

/// What a step can see and do.
///
/// Relative paths are resolved against the project directory, and every
/// command built through [`StepContext::command`] runs there.
pub struct StepContext<'a> {
    descriptor: &'a ProjectDescriptor,
    fs: &'a dyn Filesystem,
    runner: &'a dyn ProcessRunner,
    templates: &'a dyn TemplateStore,
}

impl<'a> StepContext<'a> {
    pub fn new(
        descriptor: &'a ProjectDescriptor,
        fs: &'a dyn Filesystem,
        runner: &'a dyn ProcessRunner,
        templates: &'a dyn TemplateStore,
    ) -> Self {
        Self {
            descriptor,
            fs,
            runner,
            templates,
        }
    }

    pub fn descriptor(&self) -> &ProjectDescriptor {
        self.descriptor
    }

    pub fn root(&self) -> &Path {
        self.descriptor.target_dir()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.fs.exists(&self.path(relative))
    }

    pub fn create_dirs(&self, relatives: &[&str]) -> InitiatorResult<()> {
        for rel in relatives {
            self.fs.create_dir_all(&self.path(rel))?;
        }
        Ok(())
    }

    pub fn read(&self, relative: &str) -> InitiatorResult<String> {
        self.fs.read_to_string(&self.path(relative))
    }

    /// Write a file, creating its parent directories.
    pub fn write(&self, relative: &str, content: &str) -> InitiatorResult<()> {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            self.fs.create_dir_all(parent)?;
        }
        self.fs.write_file(&path, content)
    }

    /// Render a built-in template with the project variables and write it.
    pub fn write_template(&self, relative: &str, id: TemplateId) -> InitiatorResult<()> {
        let body = self.templates.template(id)?;
        let rendered = self.render_context().render(&body);
        self.write(relative, &rendered)
    }

    pub fn render_context(&self) -> RenderContext {
        RenderContext::new()
            .with("project_name", self.descriptor.name().as_str())
            .with("flavor", self.descriptor.flavor().as_str())
    }

    /// Start an invocation rooted in the project directory.
    pub fn command(&self, program: &str) -> Invocation {
        Invocation::new(program).current_dir(self.root())
    }

    /// Run and require a successful exit.
    pub fn run(&self, invocation: Invocation) -> InitiatorResult<ProcessOutput> {
        debug!(command = %invocation, "Running step command");
        self.runner.run(&invocation)?.check(&invocation)
    }
}

/// Record of a finished build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub completed: Vec<String>,
    /// Set when version control setup failed under the advisory policy.
    pub vcs_warning: Option<String>,
}

/// Position of the next step within the whole run.
#[derive(Debug, Clone, Copy)]
pub(crate) struct StepCursor {
    pub next: usize,
    pub total: usize,
}

impl StepCursor {
    pub(crate) fn new(total: usize) -> Self {
        Self { next: 1, total }
    }
}

/// Run `plan` in order, stopping at the first failure.
pub fn execute(
    plan: &StepPlan,
    ctx: &StepContext<'_>,
    progress: &dyn ProgressReporter,
) -> InitiatorResult<BuildReport> {
    let mut cursor = StepCursor::new(plan.len());
    let mut report = BuildReport::default();
    execute_from(plan, ctx, progress, &mut cursor, &mut report)?;
    Ok(report)
}

#[instrument(skip_all, fields(project = %ctx.descriptor().name(), steps = plan.len()))]
pub(crate) fn execute_from(
    plan: &StepPlan,
    ctx: &StepContext<'_>,
    progress: &dyn ProgressReporter,
    cursor: &mut StepCursor,
    report: &mut BuildReport,
) -> InitiatorResult<()> {
    for step in plan.steps() {
        let index = cursor.next;
        progress.step_started(index, cursor.total, step.label());
        info!(index, total = cursor.total, step = step.label(), "Running step");

        if let Err(e) = step.run(ctx) {
            let reason = e.to_string();
            warn!(step = step.label(), error = %reason, "Step failed");
            progress.step_failed(step.label(), &reason);
            return Err(ApplicationError::StepFailed {
                step: step.label().to_string(),
                index,
                total: cursor.total,
                target: ctx.root().to_path_buf(),
                reason,
            }
            .into());
        }

        progress.step_succeeded(step.success_message());
        report.completed.push(step.label().to_string());
        cursor.next += 1;
    }

    Ok(())
}
