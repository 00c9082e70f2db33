use std::env;
use std::time::Duration;

use thiserror::Error;
use url::Url;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
pub const DEFAULT_TIME_LIMIT_MINUTES: u32 = 10;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
    #[error("invalid api url: {0}")]
    Url(#[from] url::ParseError),
}

/// How a failed submission is retried before the failure is surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RetryPolicy {
    #[default]
    None,
    Fixed { attempts: u32, delay: Duration },
}

impl RetryPolicy {
    /// Total attempts including the first one.
    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        match self {
            RetryPolicy::None => 1,
            RetryPolicy::Fixed { attempts, .. } => attempts.saturating_add(1),
        }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        match self {
            RetryPolicy::None => Duration::ZERO,
            RetryPolicy::Fixed { delay, .. } => *delay,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
    pub request_timeout: Duration,
    pub submit_retry: RetryPolicy,
    pub default_time_limit_minutes: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            submit_retry: RetryPolicy::None,
            default_time_limit_minutes: DEFAULT_TIME_LIMIT_MINUTES,
        }
    }
}

impl ApiConfig {
    /// Read `LEARN_API_URL`, `LEARN_API_TIMEOUT_SECS`, `LEARN_SUBMIT_RETRIES`
    /// and `LEARN_SUBMIT_RETRY_DELAY_MS`, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env`, reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a value is present but cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(raw) = read("LEARN_API_URL") {
            config.base_url = parse_base_url(&raw)?;
        }
        if let Some(raw) = read("LEARN_API_TIMEOUT_SECS") {
            let secs = parse_number("LEARN_API_TIMEOUT_SECS", &raw)?;
            if secs == 0 {
                return Err(ConfigError::InvalidValue {
                    key: "LEARN_API_TIMEOUT_SECS",
                    value: raw,
                });
            }
            config.request_timeout = Duration::from_secs(secs);
        }
        let retries = read("LEARN_SUBMIT_RETRIES")
            .map(|raw| parse_number("LEARN_SUBMIT_RETRIES", &raw))
            .transpose()?
            .unwrap_or(0);
        let delay_ms = read("LEARN_SUBMIT_RETRY_DELAY_MS")
            .map(|raw| parse_number("LEARN_SUBMIT_RETRY_DELAY_MS", &raw))
            .transpose()?
            .unwrap_or(1_000);
        if retries > 0 {
            config.submit_retry = RetryPolicy::Fixed {
                attempts: u32::try_from(retries).unwrap_or(u32::MAX),
                delay: Duration::from_millis(delay_ms),
            };
        }
        Ok(config)
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_submit_retry(mut self, policy: RetryPolicy) -> Self {
        self.submit_retry = policy;
        self
    }
}

/// Validate an API root and strip trailing slashes.
///
/// # Errors
///
/// Returns `url::ParseError` for an invalid URL.
pub fn parse_base_url(raw: &str) -> Result<String, url::ParseError> {
    let trimmed = raw.trim().trim_end_matches('/');
    Url::parse(trimmed)?;
    Ok(trimmed.to_string())
}

fn parse_number(key: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidValue {
            key,
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_env() {
        let config = ApiConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:8000/api");
        assert_eq!(config.request_timeout, Duration::from_secs(15));
        assert_eq!(config.submit_retry, RetryPolicy::None);
        assert_eq!(config.submit_retry.max_attempts(), 1);
        assert_eq!(config.default_time_limit_minutes, 10);
    }

    #[test]
    fn reads_overrides() {
        let config = ApiConfig::from_lookup(lookup(&[
            ("LEARN_API_URL", "https://school.example/api/"),
            ("LEARN_API_TIMEOUT_SECS", "5"),
            ("LEARN_SUBMIT_RETRIES", "2"),
            ("LEARN_SUBMIT_RETRY_DELAY_MS", "250"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "https://school.example/api");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(
            config.submit_retry,
            RetryPolicy::Fixed {
                attempts: 2,
                delay: Duration::from_millis(250)
            }
        );
        assert_eq!(config.submit_retry.max_attempts(), 3);
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            ApiConfig::from_lookup(lookup(&[("LEARN_SUBMIT_RETRIES", "lots")])),
            Err(ConfigError::InvalidValue {
                key: "LEARN_SUBMIT_RETRIES",
                ..
            })
        ));
        assert!(ApiConfig::from_lookup(lookup(&[("LEARN_API_TIMEOUT_SECS", "0")])).is_err());
        assert!(ApiConfig::from_lookup(lookup(&[("LEARN_API_URL", "not a url")])).is_err());
    }
}
