//! Implementation of the `initiator list` command.

use initiator_core::domain::list_flavors;

use crate::{error::CliResult, output::OutputManager};

pub fn execute(output: OutputManager) -> CliResult<()> {
    output.header("Available project flavors:")?;

    let rows: Vec<Vec<String>> = list_flavors()
        .iter()
        .map(|def| {
            vec![
                def.flavor.to_string(),
                def.name.to_string(),
                def.description.to_string(),
            ]
        })
        .collect();
    output.table(&["Flavor", "Name", "Description"], &rows)?;

    output.print("")?;
    output.print("Use one with: initiator create <name> --flavor <flavor>")?;
    Ok(())
}
