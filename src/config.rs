//! Configuration file support for eol-watch.
//!
//! Provides YAML-based configuration through `eol-watch.config.yml` files,
//! including data structures, file loading, validation and the merge with
//! command-line arguments (CLI flags win).

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::adapters::outbound::network::endoflife_client::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECONDS,
};
use crate::application::dto::snapshot_request::DEFAULT_MAX_CONCURRENCY;
use crate::application::dto::OutputFormat;
use crate::cli::Args;
use crate::eol_tracking::domain::RiskLevel;
use crate::shared::Result;

const CONFIG_FILENAME: &str = "eol-watch.config.yml";

/// Default inventory file name, looked up in the working directory.
pub const DEFAULT_INVENTORY: &str = "inventory.toml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub inventory: Option<String>,
    pub format: Option<String>,
    pub source_url: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub max_concurrency: Option<usize>,
    pub fail_on: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        return Ok(None);
    }
    load_config_from_path(&config_path).map(Some)
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(format) = &config.format {
        OutputFormat::from_str(format).map_err(|e| anyhow::anyhow!(e))?;
    }

    if let Some(fail_on) = &config.fail_on {
        RiskLevel::from_str(fail_on).map_err(|e| anyhow::anyhow!(e))?;
    }

    if let Some(timeout) = config.timeout_seconds {
        if timeout == 0 {
            bail!("Config error: timeout_seconds must be greater than zero");
        }
    }

    if let Some(concurrency) = config.max_concurrency {
        if concurrency == 0 {
            bail!("Config error: max_concurrency must be greater than zero");
        }
    }

    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config key '{}' in {} will be ignored.",
            key, CONFIG_FILENAME
        );
    }
}

/// Effective settings after merging CLI arguments over config values over
/// built-in defaults.
#[derive(Debug)]
pub struct Settings {
    pub inventory: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub product_filter: Option<String>,
    pub source_url: String,
    pub timeout_seconds: u64,
    pub max_concurrency: usize,
    pub fail_on: Option<RiskLevel>,
}

impl Settings {
    pub fn resolve(args: &Args, config: ConfigFile) -> Result<Self> {
        let format = match (&args.format, &config.format) {
            (Some(format), _) => *format,
            (None, Some(text)) => OutputFormat::from_str(text).map_err(|e| anyhow::anyhow!(e))?,
            (None, None) => OutputFormat::Table,
        };

        let fail_on = match (&args.fail_on, &config.fail_on) {
            (Some(risk), _) => Some(*risk),
            (None, Some(text)) => Some(RiskLevel::from_str(text).map_err(|e| anyhow::anyhow!(e))?),
            (None, None) => None,
        };

        Ok(Self {
            inventory: args
                .inventory
                .clone()
                .or_else(|| config.inventory.clone())
                .unwrap_or_else(|| DEFAULT_INVENTORY.to_string())
                .into(),
            format,
            output: args.output.clone().map(PathBuf::from),
            product_filter: args.product.clone(),
            source_url: args
                .source_url
                .clone()
                .or_else(|| config.source_url.clone())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout_seconds: args
                .timeout
                .or(config.timeout_seconds)
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
            max_concurrency: args
                .concurrency
                .or(config.max_concurrency)
                .unwrap_or(DEFAULT_MAX_CONCURRENCY),
            fail_on,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn args(argv: &[&str]) -> Args {
        let mut full = vec!["eol-watch"];
        full.extend_from_slice(argv);
        Args::parse_from(full)
    }

    #[test]
    fn test_load_config_from_path_valid() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(
            &path,
            "format: markdown\ntimeout_seconds: 5\nmax_concurrency: 4\n",
        )
        .unwrap();

        let config = load_config_from_path(&path).unwrap();
        assert_eq!(config.format.as_deref(), Some("markdown"));
        assert_eq!(config.timeout_seconds, Some(5));
        assert_eq!(config.max_concurrency, Some(4));
    }

    #[test]
    fn test_load_config_from_path_missing() {
        let dir = TempDir::new().unwrap();
        let result = load_config_from_path(&dir.path().join("missing.yml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_invalid_yaml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "format: [unclosed").unwrap();
        assert!(load_config_from_path(&path).is_err());
    }

    #[test]
    fn test_load_config_rejects_zero_timeout() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "timeout_seconds: 0\n").unwrap();
        let result = load_config_from_path(&path);
        assert!(result.is_err());
        assert!(format!("{}", result.unwrap_err()).contains("timeout_seconds"));
    }

    #[test]
    fn test_load_config_rejects_invalid_format() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "format: xml\n").unwrap();
        assert!(load_config_from_path(&path).is_err());
    }

    #[test]
    fn test_discover_config_absent() {
        let dir = TempDir::new().unwrap();
        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_discover_config_present() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "fail_on: expired\n").unwrap();
        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.fail_on.as_deref(), Some("expired"));
    }

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::resolve(&args(&[]), ConfigFile::default()).unwrap();
        assert_eq!(settings.inventory, PathBuf::from(DEFAULT_INVENTORY));
        assert_eq!(settings.format, OutputFormat::Table);
        assert_eq!(settings.source_url, DEFAULT_BASE_URL);
        assert_eq!(settings.timeout_seconds, DEFAULT_TIMEOUT_SECONDS);
        assert_eq!(settings.max_concurrency, DEFAULT_MAX_CONCURRENCY);
        assert!(settings.fail_on.is_none());
    }

    #[test]
    fn test_settings_config_fills_gaps() {
        let config = ConfigFile {
            inventory: Some("fleet.toml".to_string()),
            format: Some("json".to_string()),
            fail_on: Some("warning".to_string()),
            timeout_seconds: Some(3),
            ..Default::default()
        };
        let settings = Settings::resolve(&args(&[]), config).unwrap();
        assert_eq!(settings.inventory, PathBuf::from("fleet.toml"));
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.fail_on, Some(RiskLevel::Warning));
        assert_eq!(settings.timeout_seconds, 3);
    }

    #[test]
    fn test_settings_cli_overrides_config() {
        let config = ConfigFile {
            inventory: Some("fleet.toml".to_string()),
            format: Some("json".to_string()),
            ..Default::default()
        };
        let settings = Settings::resolve(
            &args(&["--inventory", "other.toml", "--format", "markdown"]),
            config,
        )
        .unwrap();
        assert_eq!(settings.inventory, PathBuf::from("other.toml"));
        assert_eq!(settings.format, OutputFormat::Markdown);
    }
}
