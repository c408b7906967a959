//! # Configuration Loader / 配置加载器
//!
//! Reads the optional TOML config file into [`AppConfig`]. Missing keys fall
//! back to the [`AppConfig`] defaults; there is no further validation.

use anyhow::Context;
use rc_core::AppConfig;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "RICHCLIP_CONFIG";

/// Where the config file is looked up, and whether it has to exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLocation {
    /// Named by the user; a missing file is an error
    Explicit(PathBuf),
    /// Per-user default; a missing file means defaults
    Default(PathBuf),
}

/// `$RICHCLIP_CONFIG` if set, else `<config_dir>/richclip/config.toml`.
///
/// Returns `None` when no config directory exists for the current user.
pub fn resolve_config_path() -> Option<ConfigLocation> {
    match std::env::var_os(CONFIG_PATH_ENV) {
        Some(path) if !path.is_empty() => Some(ConfigLocation::Explicit(PathBuf::from(path))),
        _ => dirs::config_dir()
            .map(|dir| ConfigLocation::Default(dir.join("richclip").join("config.toml"))),
    }
}

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// # Errors / 错误
///
/// Returns error if the file cannot be read or is not valid TOML for [`AppConfig`].
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", config_path.display()))
}

/// Load the config at `location`, using defaults when there is nothing to load.
pub fn load_config_or_default(location: Option<ConfigLocation>) -> anyhow::Result<AppConfig> {
    match location {
        Some(ConfigLocation::Explicit(path)) => load_config(&path),
        Some(ConfigLocation::Default(path)) if path.is_file() => load_config(&path),
        _ => Ok(AppConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rc_core::FormatId;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Test that valid TOML is parsed correctly
    #[test]
    fn test_load_config_reads_valid_toml() {
        let toml_content = r#"
            plain_text_type = "UTF8_STRING"
            default_type = "text/plain;charset=utf-8"
            log_level = "debug"
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = load_config(temp_file.path()).unwrap();

        assert_eq!(config.plain_text_type, FormatId::from("UTF8_STRING"));
        assert_eq!(config.default_type, FormatId::from("text/plain;charset=utf-8"));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_load_config_rejects_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"plain_text_type = [unterminated").unwrap();

        let err = load_config(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_missing_default_config_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let location = ConfigLocation::Default(dir.path().join("absent.toml"));

        let config = load_config_or_default(Some(location)).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let location = ConfigLocation::Explicit(dir.path().join("absent.toml"));

        let err = load_config_or_default(Some(location)).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_no_location_yields_defaults() {
        assert_eq!(load_config_or_default(None).unwrap(), AppConfig::default());
    }
}
