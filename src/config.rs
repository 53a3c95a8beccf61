//! Startup configuration.
//!
//! The only setting is the prediction service base URL. It comes from the
//! `RUL_PREDICT_API_URL` environment variable, falling back to
//! `[service] base_url` in `config.toml` inside the app directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::app_dirs;

pub use crate::app_dirs::CONFIG_FILE_NAME;
pub const BASE_URL_ENV: &str = "RUL_PREDICT_API_URL";

/// Errors that may occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The app directory could not be resolved or created.
    #[error("Config directory unavailable: {0}")]
    Directory(#[from] app_dirs::AppDirError),
    /// Failed to read the config file.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The config file is not valid TOML for [`AppSettings`].
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// Neither the environment nor the config file named a base URL.
    #[error("No prediction service URL configured; set RUL_PREDICT_API_URL or [service] base_url in {path}")]
    MissingBaseUrl { path: PathBuf },
    /// The configured base URL could not be used.
    #[error("Invalid prediction service URL {value:?}: {reason}")]
    InvalidBaseUrl { value: String, reason: String },
}

/// Contents of `config.toml`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub service: ServiceSettings,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    pub base_url: Option<String>,
}

/// Validated configuration handed to the app.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub base_url: Url,
}

/// Load and validate configuration.
///
/// A non-blank `RUL_PREDICT_API_URL` is used as-is and the config file is
/// not read at all.
pub fn load() -> Result<AppConfig, ConfigError> {
    let env_value = std::env::var(BASE_URL_ENV).ok();
    load_with_env(env_value.as_deref())
}

fn load_with_env(env_value: Option<&str>) -> Result<AppConfig, ConfigError> {
    if let Some(raw) = non_blank(env_value) {
        return Ok(AppConfig {
            base_url: parse_base_url(raw)?,
        });
    }
    let path = app_dirs::config_file_path()?;
    let settings = load_settings_from(&path)?;
    resolve(&settings, None, &path)
}

/// Read settings from `path`, returning defaults when the file is absent.
pub fn load_settings_from(path: &Path) -> Result<AppSettings, ConfigError> {
    if !path.exists() {
        return Ok(AppSettings::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Pick the effective base URL. A non-blank environment value wins.
pub fn resolve(
    settings: &AppSettings,
    env_value: Option<&str>,
    path: &Path,
) -> Result<AppConfig, ConfigError> {
    let raw = non_blank(env_value)
        .or_else(|| non_blank(settings.service.base_url.as_deref()))
        .ok_or_else(|| ConfigError::MissingBaseUrl {
            path: path.to_path_buf(),
        })?;
    Ok(AppConfig {
        base_url: parse_base_url(raw)?,
    })
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        value: raw.to_string(),
        reason,
    };
    let url = Url::parse(raw).map_err(|err| invalid(err.to_string()))?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme `{other}`"))),
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("query and fragment are not allowed".to_string()));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_dirs::{APP_DIR_NAME, OverrideGuard};
    use tempfile::tempdir;

    fn write_config(base: &Path, contents: &str) {
        let root = base.join(APP_DIR_NAME);
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(root.join(CONFIG_FILE_NAME), contents).unwrap();
    }

    fn settings_with(base_url: Option<&str>) -> AppSettings {
        AppSettings {
            service: ServiceSettings {
                base_url: base_url.map(str::to_string),
            },
        }
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let settings = load_settings_from(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn reads_base_url_from_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[service]\nbase_url = \"http://127.0.0.1:3000\"\n").unwrap();
        let settings = load_settings_from(&path).unwrap();
        let config = resolve(&settings, None, &path).unwrap();
        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:3000/");
    }

    #[test]
    fn malformed_toml_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[service\nbase_url = 1").unwrap();
        let err = load_settings_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseToml { .. }));
        assert!(err.to_string().contains(CONFIG_FILE_NAME));
    }

    #[test]
    fn environment_overrides_file() {
        let settings = settings_with(Some("http://from-file:3000"));
        let config = resolve(
            &settings,
            Some("https://from-env.example.com"),
            Path::new(CONFIG_FILE_NAME),
        )
        .unwrap();
        assert_eq!(config.base_url.host_str(), Some("from-env.example.com"));
    }

    #[test]
    fn blank_environment_falls_back_to_file() {
        let settings = settings_with(Some("http://from-file:3000"));
        let config = resolve(&settings, Some("  "), Path::new(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config.base_url.host_str(), Some("from-file"));
    }

    #[test]
    fn base_url_is_required() {
        let err = resolve(&settings_with(None), None, Path::new(CONFIG_FILE_NAME)).unwrap_err();
        assert!(matches!(err, ConfigError::MissingBaseUrl { .. }));
        assert!(err.to_string().contains(BASE_URL_ENV));
    }

    #[test]
    fn rejects_unusable_urls() {
        for raw in ["not a url", "ftp://host/", "http://host/?q=1"] {
            let err = resolve(&settings_with(Some(raw)), None, Path::new(CONFIG_FILE_NAME))
                .unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidBaseUrl { .. }),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn environment_wins_over_malformed_file() {
        let base = tempdir().unwrap();
        let _guard = OverrideGuard::set(base.path().to_path_buf());
        write_config(base.path(), "[service\nbase_url = 1");

        let config = load_with_env(Some("http://127.0.0.1:3000")).unwrap();
        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:3000/");
    }

    #[test]
    fn malformed_file_fails_without_environment() {
        let base = tempdir().unwrap();
        let _guard = OverrideGuard::set(base.path().to_path_buf());
        write_config(base.path(), "[service\nbase_url = 1");

        for env_value in [None, Some(""), Some("   ")] {
            let err = load_with_env(env_value).unwrap_err();
            assert!(matches!(err, ConfigError::ParseToml { .. }), "{err:?}");
        }
    }

    #[test]
    fn loads_base_url_from_app_dir_file() {
        let base = tempdir().unwrap();
        let _guard = OverrideGuard::set(base.path().to_path_buf());
        write_config(base.path(), "[service]\nbase_url = \"https://rul.example.com/api/\"\n");

        let config = load_with_env(None).unwrap();
        assert_eq!(config.base_url.as_str(), "https://rul.example.com/api/");
    }

    #[test]
    fn missing_file_and_environment_names_config_path() {
        let base = tempdir().unwrap();
        let _guard = OverrideGuard::set(base.path().to_path_buf());

        let err = load_with_env(None).unwrap_err();
        match err {
            ConfigError::MissingBaseUrl { path } => {
                assert_eq!(path, base.path().join(APP_DIR_NAME).join(CONFIG_FILE_NAME));
            }
            other => panic!("expected MissingBaseUrl, got {other:?}"),
        }
    }
}
