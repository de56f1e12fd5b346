//! Application services (use case orchestration).

mod flavor_resolver;
mod manifest_service;
mod project_builder;
pub mod recipes;
mod scaffold_service;
mod tool_probe;
mod workspace;

pub use flavor_resolver::{FLAVOR_PROMPT, resolve_flavor};
pub use manifest_service::{K8S_DIR, ManifestService};
pub use project_builder::{BuildReport, BuildStep, StepContext, StepPlan, execute};
pub use recipes::plan_for;
pub use scaffold_service::ScaffoldService;
pub use tool_probe::ToolProbe;
pub use workspace::{PrepareOutcome, WRITE_PROBE, prepare_target_dir};
