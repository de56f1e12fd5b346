//! Choosing the project flavor.

use tracing::{debug, instrument, warn};

use crate::application::ports::{ChoiceOption, Chooser};
use crate::domain::{FlavorDef, ProjectFlavor, list_flavors};
use crate::error::InitiatorResult;

pub const FLAVOR_PROMPT: &str = "Select a project type";

impl From<&FlavorDef> for ChoiceOption {
    fn from(def: &FlavorDef) -> Self {
        ChoiceOption::new(def.name, def.description)
    }
}

/// Return the explicit flavor when it names one, otherwise ask.
///
/// An unrecognised explicit value is logged and treated as absent. The
/// chooser is asked again until it returns an index inside the list.
#[instrument(skip(chooser))]
pub fn resolve_flavor(
    explicit: Option<&str>,
    chooser: &dyn Chooser,
) -> InitiatorResult<ProjectFlavor> {
    if let Some(raw) = explicit {
        match raw.parse::<ProjectFlavor>() {
            Ok(flavor) => {
                debug!(%flavor, "Using explicit flavor");
                return Ok(flavor);
            }
            Err(e) => warn!(value = raw, error = %e, "Ignoring unknown flavor"),
        }
    }

    let defs = list_flavors();
    let options: Vec<ChoiceOption> = defs.iter().map(ChoiceOption::from).collect();

    loop {
        let index = chooser.choose(FLAVOR_PROMPT, &options)?;
        match defs.get(index) {
            Some(def) => return Ok(def.flavor),
            None => warn!(index, max = defs.len(), "Selection out of range"),
        }
    }
}
