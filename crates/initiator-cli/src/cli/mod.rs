//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "initiator",
    bin_name = "initiator",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f680} Scaffold Go and Node projects, render Kubernetes manifests",
    long_about = "Initiator creates Go and Node/TypeScript projects by driving the \
                  real toolchains (go, npm, npx, git), renders Kubernetes manifests \
                  and checks which developer tools are installed.",
    after_help = "EXAMPLES:\n\
        \x20 initiator create my-api --flavor go-web\n\
        \x20 initiator create web --flavor node-nextjs --dir ~/code --no-git\n\
        \x20 initiator k8s shop --service --ingress --port 3000\n\
        \x20 initiator doctor",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new project.
    #[command(
        visible_alias = "new",
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 initiator create my-tool                      # prompts for a flavor\n\
            \x20 initiator create my-api --flavor go-web\n\
            \x20 initiator create site --flavor nextjs --yes --force"
    )]
    Create(CreateArgs),

    /// Render Kubernetes manifests.
    #[command(
        about = "Generate Kubernetes manifests",
        after_help = "EXAMPLES:\n\
            \x20 initiator k8s shop                         # k8s/deployment.yaml\n\
            \x20 initiator k8s shop -s -i -n prod -p 3000   # deployment, service, ingress\n\
            \x20 initiator k8s shop -c shop-api -o deploy"
    )]
    K8s(K8sArgs),

    /// Check installed developer tools.
    #[command(about = "Check required developer tools")]
    Doctor,

    /// List available project flavors.
    #[command(visible_alias = "ls", about = "List available project flavors")]
    List,

    /// Print version information.
    #[command(about = "Show version, commit and build date")]
    Version,

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 initiator completions bash > ~/.local/share/bash-completion/completions/initiator\n\
            \x20 initiator completions zsh  > ~/.zfunc/_initiator\n\
            \x20 initiator completions fish > ~/.config/fish/completions/initiator.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Initiator configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 initiator config init\n\
            \x20 initiator config get vcs.on_failure\n\
            \x20 initiator config list"
    )]
    Config(ConfigCommands),
}

// ── create ────────────────────────────────────────────────────────────────────

/// Arguments for `initiator create`.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Project name: letters, digits, '-' and '_' only.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: String,

    /// Parent directory for the project (default: configured or current directory).
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIR",
        help = "Directory to create the project in"
    )]
    pub dir: Option<PathBuf>,

    /// Flavor tag or alias; unknown values fall back to the prompt.
    #[arg(
        short = 'f',
        long = "flavor",
        value_name = "FLAVOR",
        help = "Project flavor (see `initiator list`)"
    )]
    pub flavor: Option<String>,

    /// Skip `git init`.
    #[arg(long = "no-git", help = "Do not initialize a git repository")]
    pub no_git: bool,

    /// Replace an existing directory without asking.
    #[arg(long = "force", help = "Overwrite existing directory")]
    pub force: bool,

    /// Answer every question with its default.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Do not prompt; use defaults (requires --flavor)"
    )]
    pub yes: bool,
}

// ── k8s ───────────────────────────────────────────────────────────────────────

/// Arguments for `initiator k8s`.
#[derive(Debug, Args)]
pub struct K8sArgs {
    /// Application name, used for resource names and the ingress host.
    #[arg(value_name = "APP_NAME")]
    pub app_name: String,

    #[arg(
        short = 'n',
        long = "namespace",
        value_name = "NAMESPACE",
        help = "Kubernetes namespace [default: from config, else \"default\"]"
    )]
    pub namespace: Option<String>,

    #[arg(short = 's', long = "service", help = "Also generate a Service")]
    pub service: bool,

    #[arg(short = 'i', long = "ingress", help = "Also generate an Ingress")]
    pub ingress: bool,

    #[arg(
        short = 'p',
        long = "port",
        value_name = "PORT",
        help = "Container port [default: from config, else 8080]"
    )]
    pub port: Option<u16>,

    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        default_value = ".",
        help = "Directory that receives k8s/"
    )]
    pub output: PathBuf,

    #[arg(
        short = 'c',
        long = "container-name",
        value_name = "NAME",
        help = "Container and image name [default: APP_NAME]"
    )]
    pub container_name: Option<String>,

    #[arg(
        short = 'r',
        long = "project-name",
        value_name = "NAME",
        help = "Value of the `app` label [default: APP_NAME]"
    )]
    pub project_name: Option<String>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `initiator completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `initiator config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.flavor`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
    /// Write a configuration file with the default values.
    Init {
        /// Overwrite an existing file.
        #[arg(short = 'f', long = "force")]
        force: bool,
    },
}

// ── tests ─────────────────────────────────────────────────────────────────────
