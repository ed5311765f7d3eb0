//! External file-host coordination.
//!
//! Item photos live on a separate file-hosting service; the database only
//! stores their URLs. When an item with a photo is deleted, the orphaned
//! file is removed through the host's HTTP API. That cleanup is best-effort:
//! it runs after the database transaction commits and its failures are
//! logged, never surfaced.

use async_trait::async_trait;
use core_config::{env_or_default, env_required, ConfigError, FromEnv};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FileStoreError {
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    #[error("File host returned status {0}")]
    UnexpectedStatus(reqwest::StatusCode),
}

/// Extract the file key from a hosted-file URL.
///
/// Keys are the path segment following `/f/`, e.g.
/// `https://files.example.com/f/abc123` -> `abc123`. Returns `None` when the
/// URL carries no extractable key, in which case cleanup is skipped.
pub fn file_key_from_url(url: &str) -> Option<&str> {
    let (_, rest) = url.split_once("/f/")?;
    let key = rest
        .split(|c| c == '/' || c == '?' || c == '#')
        .next()
        .unwrap_or("");
    (!key.is_empty()).then_some(key)
}

/// Deletes hosted files by key
#[async_trait]
pub trait FileStore: Send + Sync {
    async fn delete(&self, key: &str) -> Result<(), FileStoreError>;
}

/// File-host API configuration.
///
/// Loaded from environment variables:
/// - `FILE_STORAGE_API_URL` (required)
/// - `FILE_STORAGE_API_KEY` (required)
/// - `FILE_STORAGE_TIMEOUT_SECS` (default: 10)
#[derive(Clone, Debug)]
pub struct FileStoreConfig {
    pub api_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl FromEnv for FileStoreConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let timeout_secs = env_or_default("FILE_STORAGE_TIMEOUT_SECS", "10")
            .parse::<u64>()
            .map_err(|e| ConfigError::ParseError {
                key: "FILE_STORAGE_TIMEOUT_SECS".to_string(),
                details: e.to_string(),
            })?;

        Ok(Self {
            api_url: env_required("FILE_STORAGE_API_URL")?,
            api_key: env_required("FILE_STORAGE_API_KEY")?,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Production file store talking to the file host over HTTP.
///
/// Holds one pooled client; requests are bounded by the configured timeout.
#[derive(Clone)]
pub struct HttpFileStore {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl HttpFileStore {
    pub fn new(config: &FileStoreConfig) -> Result<Self, FileStoreError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl FileStore for HttpFileStore {
    async fn delete(&self, key: &str) -> Result<(), FileStoreError> {
        let response = self
            .client
            .delete(format!("{}/{}", self.api_url, key))
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FileStoreError::UnexpectedStatus(response.status()));
        }

        tracing::debug!(file_key = %key, "Deleted hosted file");
        Ok(())
    }
}

/// File store that discards every request (for tests and local development
/// without a file host)
#[derive(Debug, Default, Clone)]
pub struct NoopFileStore;

#[async_trait]
impl FileStore for NoopFileStore {
    async fn delete(&self, key: &str) -> Result<(), FileStoreError> {
        tracing::debug!(file_key = %key, "Noop file store: skipping delete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_key_from_url() {
        assert_eq!(
            file_key_from_url("https://files.example.com/f/abc123"),
            Some("abc123")
        );
    }

    #[test]
    fn test_file_key_stops_at_query_and_fragment() {
        assert_eq!(
            file_key_from_url("https://files.example.com/f/abc123?size=large"),
            Some("abc123")
        );
        assert_eq!(
            file_key_from_url("https://files.example.com/f/abc123#top"),
            Some("abc123")
        );
        assert_eq!(
            file_key_from_url("https://files.example.com/f/abc123/raw"),
            Some("abc123")
        );
    }

    #[test]
    fn test_file_key_missing_marker() {
        assert_eq!(file_key_from_url("https://example.com/img/abc123"), None);
        assert_eq!(file_key_from_url("https://files.example.com/f/"), None);
        assert_eq!(file_key_from_url(""), None);
    }

    #[test]
    fn test_config_from_env() {
        temp_env::with_vars(
            [
                (
                    "FILE_STORAGE_API_URL",
                    Some("https://files.example.com/api"),
                ),
                ("FILE_STORAGE_API_KEY", Some("secret-key")),
                ("FILE_STORAGE_TIMEOUT_SECS", Some("5")),
            ],
            || {
                let config = FileStoreConfig::from_env().unwrap();
                assert_eq!(config.api_url, "https://files.example.com/api");
                assert_eq!(config.timeout, Duration::from_secs(5));
            },
        );
    }

    #[test]
    fn test_config_requires_url() {
        temp_env::with_vars(
            [
                ("FILE_STORAGE_API_URL", None),
                ("FILE_STORAGE_API_KEY", Some("secret-key")),
            ],
            || {
                assert!(FileStoreConfig::from_env().is_err());
            },
        );
    }
}
