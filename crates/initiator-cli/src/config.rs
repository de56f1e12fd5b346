//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `INITIATOR__SECTION__KEY`, e.g.
//!    `INITIATOR__VCS__ON_FAILURE=fatal`
//! 3. Config file (`--config`, else [`AppConfig::config_path`])
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use initiator_core::domain::{DEFAULT_CONTAINER_PORT, DEFAULT_NAMESPACE, VcsFailurePolicy};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Environment variable that points at a template override directory.
pub const TEMPLATES_DIR_ENV: &str = "INITIATOR_TEMPLATES_DIR";

const ENV_PREFIX: &str = "INITIATOR";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// Version control behaviour.
    pub vcs: VcsConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Defaults for `initiator k8s`.
    pub k8s: K8sConfig,
    /// Template overrides.
    pub templates: TemplateConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Flavor used when `--flavor` is absent; skips the prompt.
    pub flavor: Option<String>,
    /// Parent directory used when `--dir` is absent.
    pub directory: Option<PathBuf>,
    /// Answer to "Initialize a git repository?" when set.
    pub init_git: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VcsConfig {
    pub on_failure: VcsFailurePolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct K8sConfig {
    pub namespace: String,
    pub port: u16,
}

impl Default for K8sConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.into(),
            port: DEFAULT_CONTAINER_PORT,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Files here replace built-in templates with the same relative path.
    pub dir: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration: defaults, then the file, then the environment.
    ///
    /// With `must_exist`, an explicit `config_file` has to be present. The
    /// default location is always optional.
    pub fn load(config_file: Option<&PathBuf>, must_exist: bool) -> anyhow::Result<Self> {
        let defaults = config::Config::try_from(&Self::default())
            .context("Failed to build default configuration")?;

        let file = match config_file {
            Some(path) => config::File::from(path.as_path()).required(must_exist),
            None => config::File::from(Self::config_path().as_path()).required(false),
        };

        let loaded: Self = config::Config::builder()
            .add_source(defaults)
            .add_source(file.format(config::FileFormat::Toml))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")?;

        debug!(config = ?loaded, "Configuration loaded");
        Ok(loaded)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.initiator.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "initiator", "initiator")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".initiator.toml"))
    }

    /// `--config` when given, otherwise the default location.
    pub fn active_path(explicit: Option<&PathBuf>) -> PathBuf {
        explicit.cloned().unwrap_or_else(Self::config_path)
    }

    /// Template override directory: the environment beats the file.
    pub fn templates_dir(&self) -> Option<PathBuf> {
        std::env::var_os(TEMPLATES_DIR_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(|| self.templates.dir.clone())
    }

    /// Serialise as TOML, the format `config init` writes.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("Failed to serialise configuration")
    }

    /// Look up a dotted key such as `vcs.on_failure`.
    ///
    /// Unset optional values come back as an empty string.
    pub fn get(&self, key: &str) -> Option<String> {
        let root = serde_json::to_value(self).ok()?;
        let value = key
            .split('.')
            .try_fold(&root, |node, part| node.as_object()?.get(part))?;

        match value {
            serde_json::Value::Object(_) => None,
            serde_json::Value::Null => Some(String::new()),
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// Write `content` to `path`, creating parent directories.
pub fn write_config_file(path: &Path, content: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_manifest_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.k8s.namespace, "default");
        assert_eq!(cfg.k8s.port, 8080);
        assert_eq!(cfg.vcs.on_failure, VcsFailurePolicy::Advisory);
        assert!(!cfg.output.no_color);
        assert!(cfg.defaults.flavor.is_none());
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[vcs]\non_failure = \"fatal\"\n\n[k8s]\nport = 3000\n\n[defaults]\nflavor = \"go-web\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path), true).unwrap();
        assert_eq!(cfg.vcs.on_failure, VcsFailurePolicy::Fatal);
        assert_eq!(cfg.k8s.port, 3000);
        assert_eq!(cfg.k8s.namespace, "default");
        assert_eq!(cfg.defaults.flavor.as_deref(), Some("go-web"));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        assert!(AppConfig::load(Some(&path), true).is_err());
    }

    #[test]
    fn missing_file_is_fine_when_not_required() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("later.toml");
        assert_eq!(AppConfig::load(Some(&path), false).unwrap(), AppConfig::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[k8s]\nport = \"not a number\"\n").unwrap();
        assert!(AppConfig::load(Some(&path), true).is_err());
    }

    #[test]
    fn toml_round_trips_through_loader() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/config.toml");
        write_config_file(&path, &AppConfig::default().to_toml().unwrap()).unwrap();

        assert_eq!(AppConfig::load(Some(&path), true).unwrap(), AppConfig::default());
    }

    #[test]
    fn get_dotted_keys() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.get("vcs.on_failure").as_deref(), Some("advisory"));
        assert_eq!(cfg.get("k8s.port").as_deref(), Some("8080"));
        assert_eq!(cfg.get("k8s.namespace").as_deref(), Some("default"));
        assert_eq!(cfg.get("output.no_color").as_deref(), Some("false"));
        assert_eq!(cfg.get("defaults.flavor").as_deref(), Some(""));
    }

    #[test]
    fn get_rejects_unknown_and_section_keys() {
        let cfg = AppConfig::default();
        assert!(cfg.get("does.not.exist").is_none());
        assert!(cfg.get("k8s").is_none());
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
