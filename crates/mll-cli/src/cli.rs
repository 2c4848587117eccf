//! CLI configuration loading.

use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use mll_toolchain::ToolchainConfig;

use crate::error::{CliError, Result};

/// Project-local configuration file name.
pub const PROJECT_CONFIG: &str = "Mll.toml";

/// How the backend is chosen for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ModeSelection {
    /// Probe the host toolchain once and pick accordingly.
    #[default]
    Auto,
    /// Always run tools on the host.
    Native,
    /// Always run tools inside the container.
    Container,
}

/// Run behavior not owned by the toolchain itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunSettings {
    pub mode: ModeSelection,
}

/// On-disk CLI configuration.
///
/// Search order: an explicit `--config` path, `Mll.toml` in the current
/// directory, then `<config-dir>/mll/config.toml`. The first file found
/// wins; with none, built-in defaults apply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub toolchain: ToolchainConfig,
    pub run: RunSettings,
}

impl CliConfig {
    /// Loads configuration, preferring `override_path` when given.
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = override_path {
            return Self::load_from_file(path);
        }
        let project = Path::new(PROJECT_CONFIG);
        if project.is_file() {
            return Self::load_from_file(project);
        }
        if let Some(path) = Self::default_config_path() {
            if path.is_file() {
                return Self::load_from_file(&path);
            }
        }
        Ok(Self::default())
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|err| CliError::Config(format!("cannot read {}: {err}", path.display())))?;
        toml::from_str(&content)
            .map_err(|err| CliError::Config(format!("cannot parse {}: {err}", path.display())))
    }

    /// `~/.config/mll/config.toml` on Linux, the platform equivalent
    /// elsewhere.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("mll").join("config.toml"))
    }

    /// Writes the configuration out as TOML, creating parent directories
    /// as needed.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|err| CliError::Config(format!("cannot serialize configuration: {err}")))?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mll_toolchain::ExitPolicy;

    #[test]
    fn parses_a_partial_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(
            file.path(),
            "[toolchain]\nopt = \"opt-18\"\nexit_policy = \"strict\"\n\n[run]\nmode = \"container\"\n",
        )
        .unwrap();

        let config = CliConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.toolchain.opt, "opt-18");
        assert_eq!(config.toolchain.exit_policy, ExitPolicy::Strict);
        assert_eq!(config.run.mode, ModeSelection::Container);
        assert_eq!(config.toolchain.clang, "clang");
    }

    #[test]
    fn save_then_load_round_trips() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        let mut config = CliConfig::default();
        config.toolchain.container_name = "mll_test".to_string();
        config.run.mode = ModeSelection::Native;
        config.save_to_file(&path).unwrap();

        let loaded = CliConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = CliConfig::load_from_file(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), "[toolchain\nopt=").unwrap();
        let err = CliConfig::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn explicit_path_wins_over_search() {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), "[toolchain]\nclang = \"clang-18\"\n").unwrap();
        let config = CliConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.toolchain.clang, "clang-18");
    }
}
