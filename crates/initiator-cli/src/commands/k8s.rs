//! Implementation of the `initiator k8s` command.

use tracing::instrument;

use initiator_adapters::{BuiltinTemplates, LocalFilesystem};
use initiator_core::{
    application::ManifestService, domain::ManifestSpec, error::InitiatorError,
};

use crate::{cli::K8sArgs, config::AppConfig, error::CliResult, output::OutputManager};

/// Render the requested manifests into `<output>/k8s/`.
///
/// Flags win over the `[k8s]` config section.
#[instrument(skip_all, fields(app = %args.app_name))]
pub fn execute(args: K8sArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let spec = build_spec(&args, &config)?;

    let service = ManifestService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(BuiltinTemplates::new().with_override_dir(config.templates_dir())),
    );
    let written = service.generate(&spec, &args.output)?;

    output.success(&format!(
        "Generated {} manifest(s) for '{}' in namespace '{}'",
        written.len(),
        spec.app_name(),
        spec.namespace()
    ))?;
    for path in &written {
        output.print(&format!("  {}", path.display()))?;
    }
    output.print("")?;
    output.print("Apply them with:")?;
    output.print(&format!("  kubectl apply -f {}", args.output.join("k8s").display()))?;

    Ok(())
}

fn build_spec(args: &K8sArgs, config: &AppConfig) -> CliResult<ManifestSpec> {
    let spec = ManifestSpec::builder(args.app_name.as_str())
        .namespace(
            args.namespace
                .clone()
                .unwrap_or_else(|| config.k8s.namespace.clone()),
        )
        .container_port(args.port.unwrap_or(config.k8s.port))
        .container_name(args.container_name.clone())
        .project_label(args.project_name.clone())
        .service(args.service)
        .ingress(args.ingress)
        .build()
        .map_err(InitiatorError::from)?;
    Ok(spec)
}
