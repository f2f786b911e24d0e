//! CLI configuration: defaults, then a TOML file, then `COURSEDESK_*`
//! environment variables, then command-line overrides

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use coursedesk_core::ClientConfig;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Resolve the data directory: flag, then `COURSEDESK_DATA_DIR`, then the
/// platform data dir
pub fn resolve_data_dir(data_dir: Option<PathBuf>) -> PathBuf {
    data_dir.unwrap_or_else(|| {
        if let Ok(dir) = std::env::var("COURSEDESK_DATA_DIR") {
            PathBuf::from(dir)
        } else {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("coursedesk")
        }
    })
}

/// Load the client configuration.
///
/// An explicit `config_path` must exist; the default `<data dir>/config.toml`
/// is optional.
pub fn load_config(
    config_path: Option<&Path>,
    data_dir: &Path,
    api_url: Option<String>,
) -> Result<ClientConfig> {
    let mut builder = Config::builder().add_source(
        Config::try_from(&ClientConfig::default()).context("Failed to encode default config")?,
    );

    builder = match config_path {
        Some(path) => builder.add_source(File::from(path).required(true)),
        None => builder.add_source(File::from(data_dir.join(CONFIG_FILE_NAME)).required(false)),
    };

    builder = builder.add_source(Environment::with_prefix("COURSEDESK").try_parsing(true));

    let mut config: ClientConfig = builder
        .build()
        .context("Failed to load configuration")?
        .try_deserialize()
        .context("Invalid configuration")?;

    if let Some(api_url) = api_url {
        config.api_url = api_url;
    }

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_file() {
        let dir = TempDir::new().unwrap();
        let config = load_config(None, dir.path(), None).unwrap();
        assert_eq!(config.timeout_secs, ClientConfig::DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.session_key, "studentId");
    }

    #[test]
    fn test_file_in_data_dir_then_flag_override() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "api_url = \"http://courses.example.com:8080\"\ntimeout_secs = 3\nsession_key = \"learnerId\"\n",
        )
        .unwrap();

        let config = load_config(None, dir.path(), None).unwrap();
        assert_eq!(config.api_url, "http://courses.example.com:8080");
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.session_key, "learnerId");

        let config =
            load_config(None, dir.path(), Some("http://localhost:9000".into())).unwrap();
        assert_eq!(config.api_url, "http://localhost:9000");
        assert_eq!(config.timeout_secs, 3);
    }

    #[test]
    fn test_explicit_file_must_exist() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(load_config(Some(&missing), dir.path(), None).is_err());
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        let dir = TempDir::new().unwrap();
        let err = load_config(None, dir.path(), Some("ftp://example.com".into())).unwrap_err();
        assert!(err.to_string().contains("api_url"));
    }

    #[test]
    fn test_explicit_data_dir_wins() {
        assert_eq!(
            resolve_data_dir(Some(PathBuf::from("/tmp/cd"))),
            PathBuf::from("/tmp/cd")
        );
    }
}
