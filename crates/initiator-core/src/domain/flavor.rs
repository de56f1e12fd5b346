//! Project flavors and their registry.
//!
//! Each flavor is described exactly once in [`FLAVOR_REGISTRY`]. Prompting,
//! `initiator list` and argument parsing all read from it; the step plan for
//! a flavor lives in `application::services::recipes`.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Stack ────────────────────────────────────────────────────────────────────

/// Toolchain family a flavor belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stack {
    Go,
    Node,
}

impl Stack {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Go => "go",
            Self::Node => "node",
        }
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ProjectFlavor ────────────────────────────────────────────────────────────

/// A concrete project type the scaffolder can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectFlavor {
    GoPlain,
    GoWeb,
    #[serde(rename = "node-typescript")]
    NodeTypeScript,
    #[serde(rename = "node-nextjs")]
    NodeNextJs,
    NodeRemix,
    NodeExpress,
    #[serde(rename = "node-nestjs")]
    NodeNestJs,
}

impl ProjectFlavor {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GoPlain => "go-plain",
            Self::GoWeb => "go-web",
            Self::NodeTypeScript => "node-typescript",
            Self::NodeNextJs => "node-nextjs",
            Self::NodeRemix => "node-remix",
            Self::NodeExpress => "node-express",
            Self::NodeNestJs => "node-nestjs",
        }
    }

    pub const fn stack(&self) -> Stack {
        match self {
            Self::GoPlain | Self::GoWeb => Stack::Go,
            _ => Stack::Node,
        }
    }

    /// Registry entry for this flavor.
    pub fn def(&self) -> &'static FlavorDef {
        // Every variant has exactly one registry entry (see registry tests).
        FLAVOR_REGISTRY
            .iter()
            .find(|d| d.flavor == *self)
            .unwrap_or(&FLAVOR_REGISTRY[0])
    }

    pub fn display_name(&self) -> &'static str {
        self.def().name
    }

    pub fn description(&self) -> &'static str {
        self.def().description
    }

    /// Commands a user typically runs right after creation.
    pub fn next_steps(&self) -> &'static [&'static str] {
        match self {
            Self::GoPlain | Self::GoWeb => &["go run ./cmd/main.go", "go build ./cmd/..."],
            Self::NodeTypeScript | Self::NodeExpress => &["npm run dev", "npm run build"],
            Self::NodeNextJs | Self::NodeRemix => &["npm run dev"],
            Self::NodeNestJs => &["npm run start:dev"],
        }
    }
}

impl fmt::Display for ProjectFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectFlavor {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "go-plain" | "go" | "plain" => Ok(Self::GoPlain),
            "go-web" | "web" | "echo" => Ok(Self::GoWeb),
            "node-typescript" | "typescript" | "ts" => Ok(Self::NodeTypeScript),
            "node-nextjs" | "nextjs" | "next" => Ok(Self::NodeNextJs),
            "node-remix" | "remix" => Ok(Self::NodeRemix),
            "node-express" | "express" => Ok(Self::NodeExpress),
            "node-nestjs" | "nestjs" | "nest" => Ok(Self::NodeNestJs),
            other => Err(DomainError::UnknownFlavor(other.to_string())),
        }
    }
}

// ── Registry ─────────────────────────────────────────────────────────────────

/// Display metadata for one flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlavorDef {
    pub flavor: ProjectFlavor,
    pub name: &'static str,
    pub description: &'static str,
}

/// Single source of truth for the available flavors, in prompt order.
pub static FLAVOR_REGISTRY: &[FlavorDef] = &[
    FlavorDef {
        flavor: ProjectFlavor::GoPlain,
        name: "Plain Go Project",
        description: "Basic Go project with standard structure",
    },
    FlavorDef {
        flavor: ProjectFlavor::GoWeb,
        name: "Web Project",
        description: "Go web project with Echo framework, middleware, and API structure",
    },
    FlavorDef {
        flavor: ProjectFlavor::NodeTypeScript,
        name: "TypeScript Basic",
        description: "A simple TypeScript project with minimal configuration",
    },
    FlavorDef {
        flavor: ProjectFlavor::NodeNextJs,
        name: "Next.js",
        description: "React framework with server-side rendering and static site generation",
    },
    FlavorDef {
        flavor: ProjectFlavor::NodeRemix,
        name: "Remix",
        description: "Full stack web framework focusing on web standards and modern UX",
    },
    FlavorDef {
        flavor: ProjectFlavor::NodeExpress,
        name: "Express",
        description: "Fast, unopinionated, minimalist web framework for Node.js",
    },
    FlavorDef {
        flavor: ProjectFlavor::NodeNestJs,
        name: "NestJS",
        description: "Progressive Node.js framework for building server-side applications",
    },
];

/// All flavors in stable order.
pub fn list_flavors() -> &'static [FlavorDef] {
    FLAVOR_REGISTRY
}
