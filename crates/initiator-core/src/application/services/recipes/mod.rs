//! Step plans per flavor.
//!
//! `plan_for` is a pure function of the flavor. The `match` is exhaustive,
//! so a new flavor cannot be added without a plan.

mod go;
mod node;
pub mod vcs;

pub use node::patch_scripts;

use crate::application::services::project_builder::StepPlan;
use crate::domain::ProjectFlavor;

use go::GoVariant;
use node::Generator;

pub fn plan_for(flavor: ProjectFlavor) -> StepPlan {
    match flavor {
        ProjectFlavor::GoPlain => go::plan(GoVariant::Plain),
        ProjectFlavor::GoWeb => go::plan(GoVariant::Web),
        ProjectFlavor::NodeTypeScript => node::typescript(),
        ProjectFlavor::NodeExpress => node::express(),
        ProjectFlavor::NodeNextJs => node::generated(Generator::NextJs),
        ProjectFlavor::NodeRemix => node::generated(Generator::Remix),
        ProjectFlavor::NodeNestJs => node::generated(Generator::NestJs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::list_flavors;

    #[test]
    fn every_flavor_has_a_non_empty_plan() {
        for def in list_flavors() {
            assert!(!plan_for(def.flavor).is_empty(), "{} has no steps", def.flavor);
        }
    }

    #[test]
    fn go_plain_order() {
        assert_eq!(
            plan_for(ProjectFlavor::GoPlain).labels(),
            vec![
                "Initialize Go module",
                "Create project layout",
                "Write entrypoint",
                "Write README",
                "Tidy modules"
            ]
        );
    }

    #[test]
    fn go_web_installs_before_tidy() {
        let plan = plan_for(ProjectFlavor::GoWeb);
        let labels = plan.labels();
        assert_eq!(labels.len(), 6);
        assert_eq!(labels[4], "Install web dependencies");
        assert_eq!(labels[5], "Tidy modules");
    }

    #[test]
    fn typescript_starts_with_npm_init() {
        let plan = plan_for(ProjectFlavor::NodeTypeScript);
        let labels = plan.labels();
        assert_eq!(labels.first(), Some(&"Initialize npm package"));
        assert_eq!(labels.last(), Some(&"Configure npm scripts"));
    }

    #[test]
    fn vcs_plan_is_one_step() {
        assert_eq!(vcs::plan().labels(), vec![vcs::VCS_STEP]);
    }
}
