use std::path::{Path, PathBuf};

use reqwest::Url;

use crate::config::schema::ClientConfig;
use crate::error::ConfigError;

/// Environment variable that overrides the configured API base URL.
pub const API_URL_ENV: &str = "DOCSEARCH_API_URL";

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ClientConfig, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    load_config_from_str(&content)
}

pub fn load_config_from_str(content: &str) -> Result<ClientConfig, ConfigError> {
    let config: ClientConfig = serde_json::from_str(content)?;

    validate_config(&config)?;

    Ok(config)
}

/// `<platform config dir>/docsearch/config.json`, if the platform has one.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("docsearch").join("config.json"))
}

pub(crate) fn validate_config(config: &ClientConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.api_base_url).map_err(|e| ConfigError::Validation {
        message: format!("Invalid api_base_url '{}': {}", config.api_base_url, e),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::Validation {
            message: format!(
                "Unsupported api_base_url scheme '{}': expected http or https",
                url.scheme()
            ),
        });
    }

    if config.suggestion_min_chars == 0 {
        return Err(ConfigError::Validation {
            message: "suggestion_min_chars must be at least 1".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = load_config_from_str("{}").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api_base_url, "http://localhost:8000/api");
        assert_eq!(config.suggestion_min_chars, 2);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"api_base_url": "https://docs.example.com/api"}}"#).unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.api_base_url, "https://docs.example.com/api");
    }

    #[test]
    fn test_missing_file() {
        let result = load_config("/nonexistent/docsearch/config.json");
        assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
    }

    #[test]
    #[serial]
    fn test_env_override() {
        std::env::set_var(API_URL_ENV, "http://10.0.0.5:8000/api");
        let mut config = ClientConfig::default();
        config.apply_env_overrides();
        assert_eq!(config.api_base_url, "http://10.0.0.5:8000/api");
        std::env::remove_var(API_URL_ENV);
    }

    #[test]
    #[serial]
    fn test_blank_env_override_ignored() {
        std::env::set_var(API_URL_ENV, "  ");
        let mut config = ClientConfig::default();
        config.apply_env_overrides();
        assert_eq!(config.api_base_url, "http://localhost:8000/api");
        std::env::remove_var(API_URL_ENV);
    }
}
