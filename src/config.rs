//! Configuration management for basicpage using the prefer crate.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::page::{Layout, PageConfig};

/// Lottie animation shown in the right column.
pub const DEFAULT_ASSET_URL: &str =
    "https://lottie.host/2011bba0-0444-4c05-92e2-9e1ec63fef08/2CGPse9h3m.json";

/// Target of the "Learn More" link.
pub const DEFAULT_LEARN_MORE_URL: &str = "https://www.streamlit.io";

/// Stylesheet path, relative to the config file directory or CWD.
pub const DEFAULT_STYLESHEET: &str = "style/style.css";

/// Browser-side Lottie player script.
pub const DEFAULT_PLAYER_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/lottie-web/5.12.2/lottie.min.js";

/// Default request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT: u64 = 10;

/// Default server bind address.
pub const DEFAULT_BIND: &str = "127.0.0.1:8501";

/// Prefix for environment overrides.
const ENV_PREFIX: &str = "BASICPAGE_";

/// Errors loading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

/// Effective application settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// URL of the remote animation document.
    pub asset_url: String,
    /// Local stylesheet path.
    pub stylesheet: PathBuf,
    /// Request timeout in seconds.
    pub request_timeout: u64,
    /// User agent for HTTP requests (None = default).
    pub user_agent: Option<String>,
    /// Target of the "Learn More" link.
    pub learn_more_url: String,
    /// Lottie player script URL.
    pub player_url: String,
    /// Page title and layout.
    pub page: PageConfig,
    /// Server bind address.
    pub bind: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            asset_url: DEFAULT_ASSET_URL.to_string(),
            stylesheet: PathBuf::from(DEFAULT_STYLESHEET),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            user_agent: None,
            learn_more_url: DEFAULT_LEARN_MORE_URL.to_string(),
            player_url: DEFAULT_PLAYER_URL.to_string(),
            page: PageConfig::default(),
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

impl Settings {
    /// Request timeout as a duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    /// Apply `BASICPAGE_*` overrides using `lookup` to read variables.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(&format!("{}{}", ENV_PREFIX, name)).filter(|s| !s.trim().is_empty())
        };

        if let Some(url) = var("ASSET_URL") {
            tracing::debug!("Using {}ASSET_URL from environment: {}", ENV_PREFIX, url);
            self.asset_url = url;
        }
        if let Some(path) = var("STYLESHEET") {
            self.stylesheet = PathBuf::from(shellexpand::tilde(&path).as_ref());
        }
        if let Some(timeout) = var("REQUEST_TIMEOUT") {
            match timeout.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => self.request_timeout = secs,
                _ => tracing::warn!(
                    "Ignoring invalid {}REQUEST_TIMEOUT: {}",
                    ENV_PREFIX,
                    timeout
                ),
            }
        }
    }
}

/// `[page]` section of the config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
}

/// Configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Remote animation URL.
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "lottie_url")]
    pub asset_url: Option<String>,
    /// Stylesheet path.
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "css_file")]
    pub stylesheet: Option<String>,
    /// Request timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<u64>,
    /// User agent string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// "Learn More" link target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learn_more_url: Option<String>,
    /// Lottie player script URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_url: Option<String>,
    /// Server bind address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bind: Option<String>,
    /// Page title and layout.
    #[serde(default)]
    pub page: PageSection,
    /// Path to the config file this was loaded from (not serialized).
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration using prefer crate for discovery.
    /// Automatically discovers basicpage config files in standard locations.
    pub async fn load() -> Self {
        match prefer::load("basicpage").await {
            Ok(pref_config) => {
                if let Some(path) = pref_config.source_path() {
                    match Self::load_from_path(path).await {
                        Ok(config) => config,
                        Err(e) => {
                            tracing::warn!("{}; using defaults", e);
                            Self::default()
                        }
                    }
                } else {
                    Self::default()
                }
            }
            Err(_) => Self::default(),
        }
    }

    /// Load configuration from a specific file path.
    /// Supports JSON, TOML and YAML based on file extension.
    pub async fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let mut config = Self::parse(path, &contents)?;
        config.source_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Parse config contents, picking the format from the path extension.
    pub fn parse(path: &Path, contents: &str) -> Result<Self, ConfigError> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");
        let parse_err = |message: String| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        };

        let config: Self = match ext {
            "toml" => toml::from_str(contents).map_err(|e| parse_err(e.to_string()))?,
            "yaml" | "yml" => {
                serde_yaml::from_str(contents).map_err(|e| parse_err(e.to_string()))?
            }
            _ => serde_json::from_str(contents).map_err(|e| parse_err(e.to_string()))?,
        };

        // Zero would make every request time out before it is sent.
        if config.request_timeout == Some(0) {
            return Err(parse_err(
                "request_timeout must be at least 1 second".to_string(),
            ));
        }

        Ok(config)
    }

    /// Get the base directory for resolving relative paths.
    /// Returns the config file's parent directory if available, otherwise None.
    pub fn base_dir(&self) -> Option<PathBuf> {
        self.source_path
            .as_ref()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    /// Resolve a path that may be relative to the config file.
    /// - Absolute paths are returned as-is
    /// - Paths starting with ~ are expanded
    /// - Relative paths are resolved relative to `base_dir`
    pub fn resolve_path(&self, path_str: &str, base_dir: &Path) -> PathBuf {
        let expanded = shellexpand::tilde(path_str);
        let path = Path::new(expanded.as_ref());

        if path.is_absolute() {
            path.to_path_buf()
        } else {
            base_dir.join(path)
        }
    }

    /// Apply configuration to settings.
    pub fn apply_to_settings(&self, settings: &mut Settings, base_dir: &Path) {
        if let Some(ref url) = self.asset_url {
            settings.asset_url = url.clone();
        }
        if let Some(ref stylesheet) = self.stylesheet {
            settings.stylesheet = self.resolve_path(stylesheet, base_dir);
        }
        if let Some(timeout) = self.request_timeout {
            settings.request_timeout = timeout;
        }
        if let Some(ref user_agent) = self.user_agent {
            settings.user_agent = Some(user_agent.clone());
        }
        if let Some(ref url) = self.learn_more_url {
            settings.learn_more_url = url.clone();
        }
        if let Some(ref url) = self.player_url {
            settings.player_url = url.clone();
        }
        if let Some(ref bind) = self.bind {
            settings.bind = bind.clone();
        }
        if let Some(ref title) = self.page.title {
            settings.page.title = title.clone();
        }
        if let Some(layout) = self.page.layout {
            settings.page.layout = layout;
        }
    }
}

/// Options for loading settings.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Explicit config file path (overrides auto-discovery).
    pub config_path: Option<PathBuf>,
    /// Use CWD for relative paths instead of config file location.
    pub use_cwd: bool,
}

/// Load settings with explicit options.
///
/// Precedence: defaults < config file < `BASICPAGE_*` environment.
/// An explicit config path that cannot be loaded is an error; a discovered
/// one falls back to defaults.
pub async fn load_settings_with_options(
    options: LoadOptions,
) -> Result<(Settings, Config), ConfigError> {
    let config = match options.config_path {
        Some(ref path) => Config::load_from_path(path).await?,
        None => Config::load().await,
    };

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let base_dir = if options.use_cwd {
        cwd.clone()
    } else {
        config.base_dir().unwrap_or_else(|| cwd.clone())
    };

    let mut settings = Settings::default();
    if config.stylesheet.is_none() {
        settings.stylesheet = base_dir.join(DEFAULT_STYLESHEET);
    }
    config.apply_to_settings(&mut settings, &base_dir);
    settings.apply_env_overrides(|name| std::env::var(name).ok());

    Ok((settings, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.asset_url, DEFAULT_ASSET_URL);
        assert_eq!(settings.timeout(), Duration::from_secs(10));
        assert_eq!(settings.page.title, "Basic Webpage");
        assert_eq!(settings.page.layout, Layout::Wide);
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
asset_url = "https://example.com/a.json"
request_timeout = 3

[page]
title = "Demo"
layout = "centered"
"#;
        let config = Config::parse(Path::new("basicpage.toml"), toml).unwrap();
        assert_eq!(config.asset_url.as_deref(), Some("https://example.com/a.json"));
        assert_eq!(config.request_timeout, Some(3));
        assert_eq!(config.page.title.as_deref(), Some("Demo"));
        assert_eq!(config.page.layout, Some(Layout::Centered));
    }

    #[test]
    fn test_parse_yaml_and_json() {
        let yaml = "stylesheet: css/site.css\npage:\n  layout: wide\n";
        let config = Config::parse(Path::new("basicpage.yaml"), yaml).unwrap();
        assert_eq!(config.stylesheet.as_deref(), Some("css/site.css"));
        assert_eq!(config.page.layout, Some(Layout::Wide));

        let json = r#"{"lottie_url": "https://example.com/b.json"}"#;
        let config = Config::parse(Path::new("basicpage.json"), json).unwrap();
        assert_eq!(config.asset_url.as_deref(), Some("https://example.com/b.json"));
    }

    #[test]
    fn test_parse_rejects_unknown_layout() {
        let toml = "[page]\nlayout = \"sideways\"\n";
        let err = Config::parse(Path::new("basicpage.toml"), toml).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_apply_to_settings_resolves_relative_stylesheet() {
        let config = Config {
            stylesheet: Some("css/site.css".to_string()),
            request_timeout: Some(2),
            ..Default::default()
        };
        let mut settings = Settings::default();
        config.apply_to_settings(&mut settings, Path::new("/srv/site"));

        assert_eq!(settings.stylesheet, PathBuf::from("/srv/site/css/site.css"));
        assert_eq!(settings.request_timeout, 2);
    }

    #[test]
    fn test_resolve_path_absolute_untouched() {
        let config = Config::default();
        let resolved = config.resolve_path("/etc/style.css", Path::new("/srv"));
        assert_eq!(resolved, PathBuf::from("/etc/style.css"));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("BASICPAGE_ASSET_URL", "https://example.com/env.json"),
            ("BASICPAGE_REQUEST_TIMEOUT", "4"),
            ("BASICPAGE_STYLESHEET", ""),
        ]
        .into_iter()
        .collect();

        let mut settings = Settings::default();
        settings.apply_env_overrides(|name| env.get(name).map(|v| v.to_string()));

        assert_eq!(settings.asset_url, "https://example.com/env.json");
        assert_eq!(settings.request_timeout, 4);
        assert_eq!(settings.stylesheet, PathBuf::from(DEFAULT_STYLESHEET));
    }

    #[test]
    fn test_env_invalid_timeout_ignored() {
        let mut settings = Settings::default();
        settings.apply_env_overrides(|name| {
            (name == "BASICPAGE_REQUEST_TIMEOUT").then(|| "soon".to_string())
        });
        assert_eq!(settings.request_timeout, DEFAULT_REQUEST_TIMEOUT);
    }

    #[test]
    fn test_env_zero_timeout_ignored() {
        let mut settings = Settings::default();
        settings.apply_env_overrides(|name| {
            (name == "BASICPAGE_REQUEST_TIMEOUT").then(|| "0".to_string())
        });
        assert_eq!(settings.request_timeout, DEFAULT_REQUEST_TIMEOUT);
        assert!(settings.timeout() > Duration::ZERO);
    }

    #[test]
    fn test_parse_rejects_zero_timeout() {
        let err = Config::parse(Path::new("basicpage.toml"), "request_timeout = 0\n").unwrap_err();
        match err {
            ConfigError::Parse { message, .. } => assert!(message.contains("request_timeout")),
            other => panic!("expected parse error, got {:?}", other),
        }

        let err = Config::parse(Path::new("basicpage.json"), r#"{"request_timeout": 0}"#);
        assert!(matches!(err, Err(ConfigError::Parse { .. })));
    }

    #[tokio::test]
    async fn test_load_settings_rejects_zero_timeout_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("basicpage.yaml");
        std::fs::write(&path, "request_timeout: 0\n").unwrap();

        let options = LoadOptions {
            config_path: Some(path),
            use_cwd: false,
        };
        let err = load_settings_with_options(options).await.unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[tokio::test]
    async fn test_load_settings_from_explicit_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("basicpage.toml");
        std::fs::write(&path, "stylesheet = \"theme.css\"\nbind = \"0.0.0.0:9000\"\n").unwrap();

        let options = LoadOptions {
            config_path: Some(path.clone()),
            use_cwd: false,
        };
        let (settings, config) = load_settings_with_options(options).await.unwrap();

        assert_eq!(config.source_path, Some(path));
        assert_eq!(settings.stylesheet, dir.path().join("theme.css"));
        assert_eq!(settings.bind, "0.0.0.0:9000");
    }

    #[tokio::test]
    async fn test_load_settings_missing_explicit_file() {
        let dir = tempdir().unwrap();
        let options = LoadOptions {
            config_path: Some(dir.path().join("nope.toml")),
            use_cwd: false,
        };
        let err = load_settings_with_options(options).await.unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
