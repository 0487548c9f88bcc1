//! Configuration file (trevarn.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use trevarn_catalog::{Catalog, CatalogConfig};

/// Config format version this build understands.
pub const CONFIG_VERSION: u32 = 1;

/// Configuration file structure (trevarn.toml).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub dir: PathBuf,
    pub cache: bool,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            server: ServerSettings::default(),
            catalog: CatalogConfig::default(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            dir: PathBuf::from("."),
            cache: false,
        }
    }
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

impl ConfigFile {
    /// Compile the catalog tables.
    pub fn catalog(&self) -> Result<Catalog> {
        Catalog::new(self.catalog.clone()).context("Invalid [catalog] configuration")
    }

    /// Site directory, preferring a command-line override.
    pub fn site_dir(&self, dir: Option<PathBuf>) -> PathBuf {
        dir.unwrap_or_else(|| self.server.dir.clone())
    }
}

/// Parse config file contents.
pub fn parse_config(content: &str) -> Result<ConfigFile> {
    let config: ConfigFile = toml::from_str(content)?;
    if config.version != CONFIG_VERSION {
        anyhow::bail!(
            "Unsupported config version {} (expected {})",
            config.version,
            CONFIG_VERSION
        );
    }
    Ok(config)
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        tracing::debug!("No {} found, using built-in catalog", path.display());
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config =
        parse_config(&content).with_context(|| format!("Failed to parse {}", path.display()))?;
    tracing::info!("Loaded config from {}", path.display());

    Ok(config)
}

/// Render the built-in configuration as TOML.
pub fn default_config_toml() -> Result<String> {
    let body = toml::to_string_pretty(&ConfigFile::default())
        .context("Failed to serialize default config")?;
    Ok(format!(
        "# Trevarn site configuration\n#\n# Every key is optional. Omitted keys use the built-in values below;\n# tables such as `order` and `meta` replace the built-in ones wholesale.\n\n{}",
        body
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_uses_defaults() {
        let temp = tempdir().unwrap();

        let config = load_config(&temp.path().join("trevarn.toml")).unwrap();

        assert_eq!(config, ConfigFile::default());
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn partial_file_overrides_only_given_keys() {
        let config = parse_config(
            r#"
[server]
port = 9000

[catalog]
secondary_marker = "fra-"
"#,
        )
        .unwrap();

        assert_eq!(config.version, CONFIG_VERSION);
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.catalog.secondary_marker, "fra-");
        assert_eq!(config.catalog.prefix, "trevarn-");
    }

    #[test]
    fn rejects_unknown_version() {
        assert!(parse_config("version = 2").is_err());
    }

    #[test]
    fn rejects_malformed_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("trevarn.toml");
        fs::write(&path, "[server\nport = ").unwrap();

        assert!(load_config(&path).is_err());
    }

    #[test]
    fn default_toml_round_trips() {
        let toml = default_config_toml().unwrap();

        assert_eq!(parse_config(&toml).unwrap(), ConfigFile::default());
    }

    #[test]
    fn cli_dir_overrides_config() {
        let config = ConfigFile::default();

        assert_eq!(config.site_dir(None), PathBuf::from("."));
        assert_eq!(
            config.site_dir(Some(PathBuf::from("site"))),
            PathBuf::from("site")
        );
    }
}
