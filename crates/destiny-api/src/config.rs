//! Client configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use crate::error::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://www.bungie.net/Platform";
pub const DEFAULT_CONTENT_URL: &str = "https://www.bungie.net";
pub const DEFAULT_MANIFEST_DIR: &str = "./manifest";

const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_DOWNLOAD_TIMEOUT_SECS: u64 = 300;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    /// Platform API root; endpoint paths are appended to it
    pub base_url: String,

    /// Host serving manifest content files
    pub content_url: String,

    /// Destination directory for extracted manifest content
    pub manifest_dir: PathBuf,

    /// Connection timeout
    pub connect_timeout: Duration,

    /// Timeout for a single API request
    pub request_timeout: Duration,

    /// Timeout for a manifest archive download
    pub download_timeout: Duration,

    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            content_url: DEFAULT_CONTENT_URL.to_string(),
            manifest_dir: PathBuf::from(DEFAULT_MANIFEST_DIR),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            download_timeout: Duration::from_secs(DEFAULT_DOWNLOAD_TIMEOUT_SECS),
            user_agent: concat!("destiny-api/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Create configuration from environment variables.
    ///
    /// Absent or malformed values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let secs = |key: &str, default: u64| {
            Duration::from_secs(
                lookup(key)
                    .and_then(|s| s.trim().parse().ok())
                    .unwrap_or(default),
            )
        };

        Self {
            base_url: lookup("DESTINY_BASE_URL").unwrap_or(defaults.base_url),
            content_url: lookup("DESTINY_CONTENT_URL").unwrap_or(defaults.content_url),
            manifest_dir: lookup("DESTINY_MANIFEST_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.manifest_dir),
            connect_timeout: secs("DESTINY_CONNECT_TIMEOUT", DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout: secs("DESTINY_REQUEST_TIMEOUT", DEFAULT_REQUEST_TIMEOUT_SECS),
            download_timeout: secs("DESTINY_DOWNLOAD_TIMEOUT", DEFAULT_DOWNLOAD_TIMEOUT_SECS),
            user_agent: defaults.user_agent,
        }
    }

    /// Set the API base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the content host URL
    #[must_use]
    pub fn with_content_url(mut self, url: impl Into<String>) -> Self {
        self.content_url = url.into();
        self
    }

    /// Set the manifest destination directory
    #[must_use]
    pub fn with_manifest_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.manifest_dir = dir.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Set the download timeout
    #[must_use]
    pub fn with_download_timeout(mut self, timeout: Duration) -> Self {
        self.download_timeout = timeout;
        self
    }

    /// Check that both URLs parse and use http(s).
    pub fn validate(&self) -> Result<()> {
        self.parsed_base_url()?;
        self.parsed_content_url()?;
        if self.user_agent.is_empty() {
            return Err(Error::configuration("user agent must not be empty"));
        }
        Ok(())
    }

    pub(crate) fn parsed_base_url(&self) -> Result<Url> {
        parse_http_url("base_url", &self.base_url)
    }

    pub(crate) fn parsed_content_url(&self) -> Result<Url> {
        parse_http_url("content_url", &self.content_url)
    }
}

fn parse_http_url(field: &str, raw: &str) -> Result<Url> {
    let url =
        Url::parse(raw).map_err(|e| Error::configuration(format!("invalid {field} {raw:?}: {e}")))?;
    match url.scheme() {
        "http" | "https" if !url.cannot_be_a_base() => Ok(url),
        _ => Err(Error::configuration(format!(
            "{field} must be an http(s) URL, got {raw:?}"
        ))),
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://www.bungie.net/Platform");
        assert_eq!(config.content_url, "https://www.bungie.net");
        assert_eq!(config.manifest_dir, PathBuf::from("./manifest"));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.download_timeout, Duration::from_secs(300));
        assert!(config.user_agent.starts_with("destiny-api/"));
        config.validate().expect("Operation should succeed");
    }

    #[test]
    fn test_env_overrides() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("DESTINY_BASE_URL", "http://localhost:8080/Platform"),
            ("DESTINY_CONTENT_URL", "http://localhost:8081"),
            ("DESTINY_MANIFEST_DIR", "/tmp/destiny"),
            ("DESTINY_CONNECT_TIMEOUT", "3"),
            ("DESTINY_REQUEST_TIMEOUT", "7"),
            ("DESTINY_DOWNLOAD_TIMEOUT", "60"),
        ]));

        assert_eq!(config.base_url, "http://localhost:8080/Platform");
        assert_eq!(config.content_url, "http://localhost:8081");
        assert_eq!(config.manifest_dir, PathBuf::from("/tmp/destiny"));
        assert_eq!(config.connect_timeout, Duration::from_secs(3));
        assert_eq!(config.request_timeout, Duration::from_secs(7));
        assert_eq!(config.download_timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_malformed_env_values() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("DESTINY_CONNECT_TIMEOUT", "invalid"),
            ("DESTINY_REQUEST_TIMEOUT", "-1"),
        ]));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_validate_rejects_bad_urls() {
        let err = ClientConfig::default()
            .with_base_url("not a url")
            .validate()
            .expect_err("invalid base URL should fail");
        assert!(matches!(err, Error::Configuration(_)));

        let err = ClientConfig::default()
            .with_content_url("ftp://example.com")
            .validate()
            .expect_err("non-http content URL should fail");
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = ClientConfig::default().with_manifest_dir("/var/lib/destiny");
        let json = serde_json::to_string(&config).expect("Operation should succeed");
        let deserialized: ClientConfig =
            serde_json::from_str(&json).expect("Operation should succeed");
        assert_eq!(config, deserialized);
    }
}
