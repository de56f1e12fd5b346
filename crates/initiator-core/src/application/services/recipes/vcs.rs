//! Version control setup, run after the flavor plan.

use crate::application::services::project_builder::{BuildStep, StepPlan};
use crate::domain::TemplateId;

pub const VCS_STEP: &str = "Initialize git repository";

/// `git init` in the project, plus a `.gitignore` when none was generated.
pub fn plan() -> StepPlan {
    StepPlan::new().step(BuildStep::new(
        VCS_STEP,
        "Git repository initialized",
        |ctx| {
            ctx.run(ctx.command("git").arg("init"))?;
            if !ctx.exists(".gitignore") {
                ctx.write_template(".gitignore", TemplateId::GitIgnore)?;
            }
            Ok(())
        },
    ))
}
