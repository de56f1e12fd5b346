//! Implementation of the `initiator create` command.
//!
//! Responsibility: turn CLI arguments and configuration into a
//! `ProjectDescriptor`, ask the questions that are still open, call the
//! core scaffold service and display results. No business logic lives here.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use initiator_adapters::{BuiltinTemplates, LocalFilesystem, SystemProcessRunner};
use initiator_core::{
    application::{BuildReport, PrepareOutcome, ScaffoldService, resolve_flavor},
    domain::{ProjectDescriptor, ProjectName},
    error::InitiatorError,
};

use crate::{
    cli::CreateArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    progress::SpinnerProgress,
    prompt,
};

pub const GIT_PROMPT: &str = "Initialize a git repository?";

/// Execute the `initiator create` command.
///
/// 1. Validate the name (nothing on disk is touched before this)
/// 2. Resolve the flavor and the git question
/// 3. Prepare the target directory (overwrite prompt, write probe)
/// 4. Run the build steps with a spinner per step
/// 5. Print the summary and next steps
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(args: CreateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let name = ProjectName::parse(args.name.as_str()).map_err(InitiatorError::from)?;

    let parent = args
        .dir
        .clone()
        .or_else(|| config.defaults.directory.clone())
        .unwrap_or_else(|| PathBuf::from("."));
    let target = absolute(&parent)?.join(name.as_str());

    let prompter = prompt::select(args.yes);

    let explicit = args.flavor.as_deref().or(config.defaults.flavor.as_deref());
    let flavor = resolve_flavor(explicit, prompter.chooser())?;

    let init_vcs = if args.no_git {
        false
    } else if let Some(answer) = config.defaults.init_git {
        answer
    } else {
        prompter.confirmer().confirm(GIT_PROMPT, true)?
    };

    if !init_vcs {
        output.info("Skipping git repository initialization")?;
    }

    let descriptor =
        ProjectDescriptor::new(name, target, flavor, init_vcs).map_err(InitiatorError::from)?;

    debug!(
        flavor = %descriptor.flavor(),
        target = %descriptor.target_dir().display(),
        init_vcs,
        "Descriptor resolved"
    );

    let service = ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(SystemProcessRunner::new()),
        Box::new(BuiltinTemplates::new().with_override_dir(config.templates_dir())),
    )
    .with_vcs_policy(config.vcs.on_failure);

    let outcome = service.prepare_target(
        descriptor.target_dir(),
        args.force,
        prompter.confirmer(),
    )?;
    if outcome == PrepareOutcome::Replaced {
        output.warning(&format!(
            "Replaced existing directory {}",
            descriptor.target_dir().display()
        ))?;
    }

    output.header(&format!(
        "Creating {} project '{}'...",
        descriptor.flavor().display_name(),
        descriptor.name()
    ))?;
    info!(project = %descriptor.name(), "Build started");

    let report = {
        let progress = SpinnerProgress::for_output(&output);
        service.build(&descriptor, &progress)?
    };

    info!(steps = report.completed.len(), "Build completed");

    let files = service.count_files(&descriptor)?;
    print_summary(&output, &descriptor, &report, files)
}

/// Make `path` absolute against the current directory.
fn absolute(path: &Path) -> CliResult<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().map_err(|e| CliError::IoError {
        message: "Cannot determine the current directory".into(),
        source: e,
    })?;
    Ok(normalize(&cwd.join(path)))
}

/// Drop `.` components left by joining `./dir` onto the cwd.
fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, std::path::Component::CurDir))
        .collect()
}

fn print_summary(
    output: &OutputManager,
    descriptor: &ProjectDescriptor,
    report: &BuildReport,
    files: usize,
) -> CliResult<()> {
    if let Some(warning) = &report.vcs_warning {
        output.warning(&format!("Git setup skipped: {warning}"))?;
    }

    output.success(&format!("Project '{}' created!", descriptor.name()))?;
    output.print("")?;
    output.print("Project info:")?;
    output.print(&format!("  Name:     {}", descriptor.name()))?;
    output.print(&format!("  Location: {}", descriptor.target_dir().display()))?;
    output.print(&format!(
        "  Type:     {} ({})",
        descriptor.flavor().display_name(),
        descriptor.flavor()
    ))?;
    output.print(&format!("  Files:    {files}"))?;

    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!("  cd {}", descriptor.target_dir().display()))?;
    for step in descriptor.flavor().next_steps() {
        output.print(&format!("  {step}"))?;
    }

    Ok(())
}
