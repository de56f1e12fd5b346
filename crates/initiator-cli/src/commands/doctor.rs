//! Implementation of the `initiator doctor` command.

use tracing::{info, instrument};

use initiator_adapters::{PathLocator, SystemProcessRunner};
use initiator_core::{
    application::ToolProbe,
    domain::{DEFAULT_TOOLS, ToolCheckResult},
};

use crate::{error::CliResult, output::OutputManager};

pub const HEADERS: [&str; 4] = ["Dependency", "Status", "Version", "Installation URL"];

/// Probe every known tool and print one table row each.
///
/// Missing tools never make the command fail.
#[instrument(skip_all)]
pub fn execute(output: OutputManager) -> CliResult<()> {
    output.header("Checking required dependencies...")?;

    let probe = ToolProbe::new(
        Box::new(PathLocator::new()),
        Box::new(SystemProcessRunner::new()),
    );
    let results = probe.check_all(DEFAULT_TOOLS);

    let missing = results.iter().filter(|r| !r.installed).count();
    info!(checked = results.len(), missing, "Dependency check finished");

    let rows: Vec<Vec<String>> = results.iter().map(|r| row(r, &output)).collect();
    output.table(&HEADERS, &rows)?;

    if missing > 0 {
        output.print("")?;
        output.warning(&format!(
            "{missing} of {} tools are missing; see the installation URLs above",
            results.len()
        ))?;
    }
    Ok(())
}

fn row(result: &ToolCheckResult, output: &OutputManager) -> Vec<String> {
    if result.installed {
        vec![
            result.tool_name.clone(),
            output.good("\u{2713} Installed"),
            result
                .version
                .clone()
                .unwrap_or_else(|| "unknown".to_string()),
            String::new(),
        ]
    } else {
        vec![
            result.tool_name.clone(),
            output.bad("\u{2717} Not installed"),
            "N/A".to_string(),
            result.install_url.clone(),
        ]
    }
}
