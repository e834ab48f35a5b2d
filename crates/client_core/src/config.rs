use std::{fs, path::Path, time::Duration};

use serde::Deserialize;
use thiserror::Error;
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_SPEECH_LOCALE: &str = "id-ID";
pub const SETTINGS_FILE_NAME: &str = "buddytext.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid API base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("API base URL '{0}' must use http or https")]
    UnsupportedScheme(String),
    #[error("request timeout must be greater than zero")]
    ZeroTimeout,
    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientSettings {
    pub api_base_url: String,
    pub request_timeout: Duration,
    pub speech_locale: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            speech_locale: DEFAULT_SPEECH_LOCALE.into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    api_url: Option<String>,
    request_timeout_secs: Option<u64>,
    speech_locale: Option<String>,
}

impl ClientSettings {
    /// Overrides the base URL, ignoring blank input.
    pub fn with_api_base_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|value| !value.trim().is_empty()) {
            self.api_base_url = url;
        }
        self
    }

    pub fn with_timeout_secs(mut self, secs: Option<u64>) -> Self {
        if let Some(secs) = secs {
            self.request_timeout = Duration::from_secs(secs);
        }
        self
    }

    /// Checks the settings and returns them with the base URL normalized.
    pub fn validated(mut self) -> Result<Self, ConfigError> {
        self.api_base_url = normalize_base_url(&self.api_base_url)?;
        if self.request_timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(self)
    }
}

/// Defaults, then `buddytext.toml` in the working directory, then the process environment.
pub fn load_settings() -> ClientSettings {
    load_settings_from(Path::new(SETTINGS_FILE_NAME), |name| std::env::var(name).ok())
}

pub fn load_settings_from<F>(file: &Path, env: F) -> ClientSettings
where
    F: Fn(&str) -> Option<String>,
{
    let mut settings = ClientSettings::default();

    if let Ok(raw) = fs::read_to_string(file) {
        match toml::from_str::<FileSettings>(&raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.api_url.filter(|v| !v.trim().is_empty()) {
                    settings.api_base_url = v;
                }
                if let Some(v) = file_cfg.request_timeout_secs {
                    settings.request_timeout = Duration::from_secs(v);
                }
                if let Some(v) = file_cfg.speech_locale.filter(|v| !v.trim().is_empty()) {
                    settings.speech_locale = v;
                }
            }
            Err(err) => {
                tracing::warn!(path = %file.display(), "ignoring unreadable settings file: {err}");
            }
        }
    }

    let non_empty = |name: &str| env(name).filter(|value| !value.trim().is_empty());

    if let Some(v) = non_empty("BUDDYTEXT_API_URL") {
        settings.api_base_url = v;
    }
    if let Some(v) = non_empty("APP__API_URL") {
        settings.api_base_url = v;
    }

    if let Some(v) = non_empty("APP__REQUEST_TIMEOUT_SECS") {
        match v.trim().parse::<u64>() {
            Ok(parsed) => settings.request_timeout = Duration::from_secs(parsed),
            Err(err) => tracing::warn!("ignoring APP__REQUEST_TIMEOUT_SECS='{v}': {err}"),
        }
    }

    if let Some(v) = non_empty("APP__SPEECH_LOCALE") {
        settings.speech_locale = v;
    }

    settings
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed = Url::parse(trimmed).map_err(|source| ConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        source,
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedScheme(raw.to_string()));
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
