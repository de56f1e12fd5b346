//! Target directory preparation.

use std::path::Path;

use tracing::{info, instrument};

use crate::application::ApplicationError;
use crate::application::ports::{Confirmer, Filesystem};
use crate::domain::DomainError;
use crate::error::InitiatorResult;

/// File created and removed to prove the target is writable.
pub const WRITE_PROBE: &str = ".initiator-write-probe";

/// What [`prepare_target_dir`] did to the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrepareOutcome {
    Created,
    Replaced,
}

/// Make `path` an empty, writable directory.
///
/// An existing directory is only replaced after confirmation (default no)
/// unless `force` is set. Nothing is touched when the user declines.
#[instrument(skip(fs, confirmer), fields(path = %path.display()))]
pub fn prepare_target_dir(
    fs: &dyn Filesystem,
    confirmer: &dyn Confirmer,
    path: &Path,
    force: bool,
) -> InitiatorResult<PrepareOutcome> {
    if path.as_os_str().is_empty() {
        return Err(DomainError::InvalidDescriptor("target directory cannot be empty".into()).into());
    }

    let mut outcome = PrepareOutcome::Created;

    if fs.exists(path) {
        if !fs.is_dir(path) {
            return Err(ApplicationError::NotADirectory {
                path: path.to_path_buf(),
            }
            .into());
        }

        let overwrite = force
            || confirmer.confirm(
                &format!("Directory {} already exists. Overwrite it?", path.display()),
                false,
            )?;

        if !overwrite {
            return Err(ApplicationError::Cancelled {
                reason: format!("{} already exists", path.display()),
            }
            .into());
        }

        info!("Removing existing directory");
        fs.remove_dir_all(path)?;
        outcome = PrepareOutcome::Replaced;
    }

    fs.create_dir_all(path)?;
    probe_writable(fs, path)?;

    Ok(outcome)
}

fn probe_writable(fs: &dyn Filesystem, dir: &Path) -> InitiatorResult<()> {
    let probe = dir.join(WRITE_PROBE);
    let not_writable = |e: crate::error::InitiatorError| ApplicationError::NotWritable {
        path: dir.to_path_buf(),
        reason: e.to_string(),
    };

    fs.write_file(&probe, "").map_err(not_writable)?;
    fs.remove_file(&probe).map_err(not_writable)?;
    Ok(())
}
