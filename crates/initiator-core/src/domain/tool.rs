//! Developer tools checked by `initiator doctor`.

/// One way of asking a tool for its version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolInvocation {
    pub program: &'static str,
    pub args: &'static [&'static str],
    /// The program alone says nothing (e.g. `docker compose` is a plugin of
    /// `docker`); presence requires the command itself to succeed.
    pub subcommand: bool,
}

impl ToolInvocation {
    pub const fn binary(program: &'static str, args: &'static [&'static str]) -> Self {
        Self {
            program,
            args,
            subcommand: false,
        }
    }

    pub const fn plugin(program: &'static str, args: &'static [&'static str]) -> Self {
        Self {
            program,
            args,
            subcommand: true,
        }
    }
}

/// How to pull a version number out of a tool's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionFormat {
    /// `git version 2.43.0` -> `2.43.0`; trailing commas are dropped.
    ThirdField,
    /// `v20.11.0` -> `20.11.0`.
    LeadingV,
    /// First line as-is.
    Plain,
    /// `Client Version: v1.29.0` -> `1.29.0`, searching every line. A Go
    /// struct dump after the label (`version.Info{... GitVersion:"v1.27.3" ...}`)
    /// yields its `GitVersion`.
    Labeled(&'static str),
}

impl VersionFormat {
    pub fn parse(self, output: &str) -> Option<String> {
        let first = output.lines().map(str::trim).find(|l| !l.is_empty())?;

        let version = match self {
            Self::ThirdField => first
                .split_whitespace()
                .nth(2)?
                .trim_end_matches(',')
                .to_string(),
            Self::LeadingV => strip_v(first).to_string(),
            Self::Plain => first.to_string(),
            Self::Labeled(label) => {
                let line = output
                    .lines()
                    .map(str::trim)
                    .find_map(|l| l.strip_prefix(label))?;
                let value = line.trim();
                let value = if value.starts_with("version.Info{") {
                    quoted_field(value, "GitVersion")?
                } else {
                    value
                };
                strip_v(value).to_string()
            }
        };

        if version.is_empty() {
            None
        } else {
            Some(version)
        }
    }
}

/// `name:"value"` inside a Go `%#v`-style dump.
fn quoted_field<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    let start = s.find(&format!("{name}:\""))? + name.len() + 2;
    let rest = &s[start..];
    rest.find('"').map(|end| &rest[..end])
}

fn strip_v(s: &str) -> &str {
    s.strip_prefix('v').unwrap_or(s)
}

/// Static description of a probed tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolSpec {
    pub name: &'static str,
    /// Tried in order; the first that answers wins.
    pub candidates: &'static [ToolInvocation],
    pub format: VersionFormat,
    pub install_url: &'static str,
}

/// Tools listed by `initiator doctor`, in display order.
pub static DEFAULT_TOOLS: &[ToolSpec] = &[
    ToolSpec {
        name: "Go",
        candidates: &[ToolInvocation::binary("go", &["version"])],
        format: VersionFormat::ThirdField,
        install_url: "https://golang.org/dl/",
    },
    ToolSpec {
        name: "Node.js",
        candidates: &[ToolInvocation::binary("node", &["--version"])],
        format: VersionFormat::LeadingV,
        install_url: "https://nodejs.org/",
    },
    ToolSpec {
        name: "npm",
        candidates: &[ToolInvocation::binary("npm", &["--version"])],
        format: VersionFormat::Plain,
        install_url: "https://docs.npmjs.com/downloading-and-installing-node-js-and-npm",
    },
    ToolSpec {
        name: "Git",
        candidates: &[ToolInvocation::binary("git", &["--version"])],
        format: VersionFormat::ThirdField,
        install_url: "https://git-scm.com/downloads",
    },
    ToolSpec {
        name: "Docker",
        candidates: &[ToolInvocation::binary("docker", &["--version"])],
        format: VersionFormat::ThirdField,
        install_url: "https://www.docker.com/get-started",
    },
    ToolSpec {
        name: "Docker Compose",
        candidates: &[
            ToolInvocation::binary("docker-compose", &["version", "--short"]),
            ToolInvocation::plugin("docker", &["compose", "version", "--short"]),
        ],
        format: VersionFormat::LeadingV,
        install_url: "https://docs.docker.com/compose/install/",
    },
    ToolSpec {
        name: "kubectl",
        candidates: &[ToolInvocation::binary("kubectl", &["version", "--client"])],
        format: VersionFormat::Labeled("Client Version:"),
        install_url: "https://kubernetes.io/docs/tasks/tools/",
    },
];

/// Outcome of probing one tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCheckResult {
    pub tool_name: String,
    pub installed: bool,
    /// Only ever `Some` when `installed` is true.
    pub version: Option<String>,
    pub install_url: String,
}

impl ToolCheckResult {
    pub fn missing(spec: &ToolSpec) -> Self {
        Self {
            tool_name: spec.name.to_string(),
            installed: false,
            version: None,
            install_url: spec.install_url.to_string(),
        }
    }

    pub fn found(spec: &ToolSpec, version: Option<String>) -> Self {
        Self {
            tool_name: spec.name.to_string(),
            installed: true,
            version,
            install_url: spec.install_url.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn third_field_handles_go_git_docker() {
        let f = VersionFormat::ThirdField;
        assert_eq!(
            f.parse("go version go1.22.1 linux/amd64\n").as_deref(),
            Some("go1.22.1")
        );
        assert_eq!(f.parse("git version 2.43.0").as_deref(), Some("2.43.0"));
        assert_eq!(
            f.parse("Docker version 24.0.7, build afdd53b").as_deref(),
            Some("24.0.7")
        );
    }

    #[test]
    fn leading_v_is_stripped() {
        assert_eq!(
            VersionFormat::LeadingV.parse("v20.11.0\n").as_deref(),
            Some("20.11.0")
        );
        assert_eq!(
            VersionFormat::LeadingV.parse("2.24.5").as_deref(),
            Some("2.24.5")
        );
    }

    #[test]
    fn labeled_searches_all_lines() {
        let out = "Client Version: v1.29.0\nKustomize Version: v5.0.4-0.20230601165947\n";
        assert_eq!(
            VersionFormat::Labeled("Client Version:").parse(out).as_deref(),
            Some("1.29.0")
        );
    }

    #[test]
    fn labeled_reads_git_version_from_struct_dump() {
        let out = "Client Version: version.Info{Major:\"1\", Minor:\"27\", GitVersion:\"v1.27.3\", GitCommit:\"25b4e43\"}\nKustomize Version: v5.0.1\n";
        assert_eq!(
            VersionFormat::Labeled("Client Version:").parse(out).as_deref(),
            Some("1.27.3")
        );
        assert_eq!(
            VersionFormat::Labeled("Client Version:")
                .parse("Client Version: version.Info{Major:\"1\"}"),
            None
        );
    }

    #[test]
    fn unparseable_output_yields_none() {
        assert_eq!(VersionFormat::ThirdField.parse("garbage"), None);
        assert_eq!(VersionFormat::Plain.parse("  \n"), None);
        assert_eq!(VersionFormat::Labeled("Client Version:").parse("nope"), None);
    }

    #[test]
    fn every_default_tool_has_a_candidate() {
        for spec in DEFAULT_TOOLS {
            assert!(!spec.candidates.is_empty(), "{} has no candidates", spec.name);
            assert!(spec.install_url.starts_with("https://"));
        }
    }

    #[test]
    fn missing_result_has_no_version() {
        let r = ToolCheckResult::missing(&DEFAULT_TOOLS[0]);
        assert!(!r.installed);
        assert!(r.version.is_none());
    }
}
