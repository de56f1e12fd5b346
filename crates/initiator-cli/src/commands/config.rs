//! `initiator config` - inspect and initialise configuration.

use std::path::PathBuf;

use tracing::info;

use crate::{
    cli::ConfigCommands,
    config::{AppConfig, write_config_file},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
///
/// `explicit` is the `--config` path, if any.
pub fn execute(
    cmd: ConfigCommands,
    explicit: Option<PathBuf>,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&value)?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised = config
                .to_toml()
                .map_err(|e| CliError::config("Failed to serialise config", e))?;
            output.print(serialised.trim_end())?;
        }

        ConfigCommands::Path => {
            output.print(&AppConfig::active_path(explicit.as_ref()).display().to_string())?;
        }

        ConfigCommands::Init { force } => {
            let path = AppConfig::active_path(explicit.as_ref());
            init_config_file(&path, force)?;
            info!(path = %path.display(), "Configuration file written");
            output.success(&format!("Wrote default configuration to {}", path.display()))?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    config.get(key).ok_or_else(|| CliError::ConfigError {
        message: format!("Unknown config key: '{key}'"),
        source: None,
    })
}

fn init_config_file(path: &std::path::Path, force: bool) -> CliResult<()> {
    if path.exists() && !force {
        return Err(CliError::ConfigExists {
            path: path.to_path_buf(),
        });
    }
    let content = AppConfig::default()
        .to_toml()
        .map_err(|e| CliError::config("Failed to serialise config", e))?;
    write_config_file(path, &content)
        .map_err(|e| CliError::config("Failed to write config file", e))
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_known_key() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "k8s.namespace").unwrap(), "default");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn init_refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "# mine\n").unwrap();

        let err = init_config_file(&path, false).unwrap_err();
        assert!(matches!(err, CliError::ConfigExists { .. }));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine\n");

        init_config_file(&path, true).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("[k8s]"));
    }

    #[test]
    fn init_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a/b/config.toml");
        init_config_file(&path, false).unwrap();
        assert!(path.is_file());
    }
}
