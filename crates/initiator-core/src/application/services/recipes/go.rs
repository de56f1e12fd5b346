//! Go project plans.

use crate::application::services::project_builder::{BuildStep, StepPlan};
use crate::domain::TemplateId;

const BASE_LAYOUT: &[&str] = &["cmd", "internal", "pkg", "docs", "test"];

const WEB_LAYOUT: &[&str] = &[
    "internal/handlers",
    "internal/middleware",
    "internal/models",
    "internal/routes",
    "internal/services",
];

const WEB_DEPENDENCIES: &[&str] = &["github.com/labstack/echo/v4", "github.com/joho/godotenv"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GoVariant {
    Plain,
    Web,
}

pub(crate) fn plan(variant: GoVariant) -> StepPlan {
    let (main, readme) = match variant {
        GoVariant::Plain => (TemplateId::GoPlainMain, TemplateId::GoPlainReadme),
        GoVariant::Web => (TemplateId::GoWebMain, TemplateId::GoWebReadme),
    };

    let mut plan = StepPlan::new()
        .step(BuildStep::new(
            "Initialize Go module",
            "Go module initialized",
            |ctx| {
                let module = ctx.descriptor().name().as_str().to_string();
                ctx.run(ctx.command("go").args(["mod", "init"]).arg(module))?;
                Ok(())
            },
        ))
        .step(BuildStep::new(
            "Create project layout",
            "Project directories created",
            move |ctx| {
                ctx.create_dirs(BASE_LAYOUT)?;
                if variant == GoVariant::Web {
                    ctx.create_dirs(WEB_LAYOUT)?;
                }
                Ok(())
            },
        ))
        .step(BuildStep::new(
            "Write entrypoint",
            "cmd/main.go created",
            move |ctx| ctx.write_template("cmd/main.go", main),
        ))
        .step(BuildStep::new("Write README", "README.md created", move |ctx| {
            ctx.write_template("README.md", readme)
        }));

    if variant == GoVariant::Web {
        plan = plan.step(BuildStep::new(
            "Install web dependencies",
            "Echo and godotenv installed, .env created",
            |ctx| {
                for dep in WEB_DEPENDENCIES {
                    ctx.run(ctx.command("go").arg("get").arg(*dep))?;
                }
                ctx.write_template(".env", TemplateId::GoWebEnv)
            },
        ));
    }

    plan.step(BuildStep::new("Tidy modules", "Dependencies tidied", |ctx| {
        ctx.run(ctx.command("go").args(["mod", "tidy"]))?;
        Ok(())
    }))
}
