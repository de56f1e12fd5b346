//! Node/TypeScript project plans.

use crate::application::ApplicationError;
use crate::application::services::project_builder::{BuildStep, StepPlan};
use crate::domain::TemplateId;
use crate::error::InitiatorResult;

const TS_DEV_DEPENDENCIES: &[&str] = &["typescript", "@types/node", "ts-node"];

const SCRIPTS: &[(&str, &str)] = &[
    ("start", "node dist/index.js"),
    ("dev", "ts-node src/index.ts"),
    ("build", "tsc"),
    ("watch", "tsc -w"),
];

/// Frameworks that bring their own generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Generator {
    NextJs,
    Remix,
    NestJs,
}

impl Generator {
    fn args(self) -> &'static [&'static str] {
        match self {
            Self::NextJs => &[
                "create-next-app@latest",
                ".",
                "--typescript",
                "--eslint",
                "--tailwind",
                "--app",
                "--src-dir",
                "--import-alias",
                "@/*",
                "--use-npm",
            ],
            Self::Remix => &["create-remix@latest", ".", "--typescript", "--install"],
            Self::NestJs => &[
                "@nestjs/cli",
                "new",
                ".",
                "--package-manager",
                "npm",
                "--language",
                "ts",
                "--skip-git",
            ],
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::NextJs => "Next.js",
            Self::Remix => "Remix",
            Self::NestJs => "NestJS",
        }
    }
}

/// Plain TypeScript project: npm init, config, entrypoint, tooling, scripts.
pub(crate) fn typescript() -> StepPlan {
    typescript_with(TemplateId::NodeTsIndex, None)
}

/// TypeScript project with an Express server entrypoint.
pub(crate) fn express() -> StepPlan {
    typescript_with(
        TemplateId::NodeExpressIndex,
        Some(BuildStep::new(
            "Install Express",
            "Express installed",
            |ctx| {
                ctx.run(
                    ctx.command("npm")
                        .args(["install", "express", "@types/express", "--save"]),
                )?;
                Ok(())
            },
        )),
    )
}

fn typescript_with(entrypoint: TemplateId, framework: Option<BuildStep>) -> StepPlan {
    let mut plan = StepPlan::new()
        .step(BuildStep::new(
            "Initialize npm package",
            "package.json created",
            |ctx| {
                ctx.run(ctx.command("npm").args(["init", "-y"]))?;
                Ok(())
            },
        ))
        .step(BuildStep::new(
            "Write TypeScript sources",
            "tsconfig.json and src/index.ts created",
            move |ctx| {
                ctx.write_template("tsconfig.json", TemplateId::NodeTsConfig)?;
                ctx.write_template("src/index.ts", entrypoint)
            },
        ))
        .step(BuildStep::new(
            "Install TypeScript tooling",
            "TypeScript dependencies installed",
            |ctx| {
                ctx.run(
                    ctx.command("npm")
                        .args(["install", "--save-dev"])
                        .args(TS_DEV_DEPENDENCIES.iter().copied()),
                )?;
                Ok(())
            },
        ));

    if let Some(step) = framework {
        plan = plan.step(step);
    }

    plan.step(BuildStep::new(
        "Configure npm scripts",
        "npm scripts configured",
        |ctx| {
            let manifest = ctx.read("package.json")?;
            let patched = patch_scripts(&manifest)?;
            ctx.write("package.json", &patched)
        },
    ))
}

/// One-step plan delegating to a framework generator run in place.
pub(crate) fn generated(generator: Generator) -> StepPlan {
    StepPlan::new().step(BuildStep::new(
        format!("Run {} generator", generator.name()),
        format!("{} project generated", generator.name()),
        move |ctx| {
            ctx.run(
                ctx.command("npx")
                    .args(generator.args().iter().copied())
                    .env("npm_config_yes", "true"),
            )?;
            Ok(())
        },
    ))
}

/// Replace the `"scripts"` object of a package.json by text substitution.
///
/// The rest of the document keeps its formatting. The result is parsed once
/// to make sure it is still valid JSON.
pub fn patch_scripts(package_json: &str) -> InitiatorResult<String> {
    let invalid = |reason: &str| ApplicationError::PackageJson {
        reason: reason.to_string(),
    };

    let key = package_json
        .find("\"scripts\"")
        .ok_or_else(|| invalid("no \"scripts\" section"))?;
    let open = package_json[key..]
        .find('{')
        .map(|i| key + i)
        .ok_or_else(|| invalid("\"scripts\" is not an object"))?;
    let close = matching_brace(package_json, open)
        .ok_or_else(|| invalid("unterminated \"scripts\" object"))?;

    let mut patched = String::with_capacity(package_json.len() + 128);
    patched.push_str(&package_json[..open]);
    patched.push_str(&scripts_block());
    patched.push_str(&package_json[close + 1..]);

    serde_json::from_str::<serde_json::Value>(&patched)
        .map_err(|e| invalid(&format!("result is not valid JSON: {e}")))?;

    Ok(patched)
}

fn scripts_block() -> String {
    let entries: Vec<String> = SCRIPTS
        .iter()
        .map(|(name, cmd)| format!("    \"{name}\": \"{cmd}\""))
        .collect();
    format!("{{\n{}\n  }}", entries.join(",\n"))
}

/// Byte index of the `}` closing the `{` at `open`, skipping string literals.
fn matching_brace(text: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text[open..].char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + i);
                }
            }
            _ => {}
        }
    }
    None
}
