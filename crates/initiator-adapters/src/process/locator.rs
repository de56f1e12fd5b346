//! PATH lookup via the `which` crate.

use std::path::PathBuf;

use initiator_core::application::ports::ToolLocator;
use tracing::trace;

/// Finds executables on `PATH` without running them.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathLocator;

impl PathLocator {
    pub fn new() -> Self {
        Self
    }
}

impl ToolLocator for PathLocator {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        let found = which::which(program).ok();
        trace!(program, ?found, "PATH lookup");
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_program_is_not_found() {
        let locator = PathLocator::new();
        assert!(locator.locate("initiator-no-such-tool-7c1f").is_none());
    }
}
