//! Implementation of the `initiator version` command.

use crate::{error::CliResult, output::OutputManager};

/// Release version of this binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Commit hash, stamped in at build time via `INITIATOR_GIT_COMMIT`.
pub const COMMIT: &str = match option_env!("INITIATOR_GIT_COMMIT") {
    Some(commit) => commit,
    None => "unknown",
};

/// Build date, stamped in at build time via `INITIATOR_BUILD_DATE`.
pub const BUILD_DATE: &str = match option_env!("INITIATOR_BUILD_DATE") {
    Some(date) => date,
    None => "unknown",
};

pub fn execute(output: OutputManager) -> CliResult<()> {
    output.header("Initiator CLI Tool")?;
    for line in version_lines() {
        output.print(&line)?;
    }
    Ok(())
}

fn version_lines() -> [String; 3] {
    [
        format!("Version:    {VERSION}"),
        format!("Commit:     {COMMIT}"),
        format!("Build Date: {BUILD_DATE}"),
    ]
}
