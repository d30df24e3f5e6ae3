//! Configuration for the courses API client.

use courses_http::{HttpClientConfig, HttpError, InvalidUriKind, TransportSecurity};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Courses API client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoursesClientConfig {
    /// Backend root; API paths such as `/api/courses` are resolved against it.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout, e.g. `"10s"` or `"1m 30s"`.
    #[serde(default = "default_request_timeout", with = "humantime_duration")]
    pub request_timeout: Duration,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Maximum accepted response body size in bytes.
    #[serde(default = "default_max_body_size")]
    pub max_body_size: usize,

    /// Permit plain `http://` backends (local development, mock servers).
    #[serde(default)]
    pub allow_insecure_http: bool,
}

fn default_base_url() -> String {
    "http://localhost:9000".to_owned()
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_user_agent() -> String {
    concat!("courses-sdk/", env!("CARGO_PKG_VERSION")).to_owned()
}

fn default_max_body_size() -> usize {
    courses_http::DEFAULT_MAX_BODY_SIZE
}

impl Default for CoursesClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout: default_request_timeout(),
            user_agent: default_user_agent(),
            max_body_size: default_max_body_size(),
            allow_insecure_http: false,
        }
    }
}

impl CoursesClientConfig {
    /// Parsed backend root.
    ///
    /// # Errors
    /// Returns `HttpError::InvalidUri` if `base_url` is not an absolute URL.
    pub fn parsed_base_url(&self) -> Result<Url, HttpError> {
        Url::parse(&self.base_url).map_err(|e| HttpError::InvalidUri {
            url: self.base_url.clone(),
            kind: InvalidUriKind::ParseError,
            reason: e.to_string(),
        })
    }

    /// Transport settings derived from this configuration.
    #[must_use]
    pub fn http_config(&self) -> HttpClientConfig {
        HttpClientConfig {
            request_timeout: self.request_timeout,
            max_body_size: self.max_body_size,
            user_agent: self.user_agent.clone(),
            transport: if self.allow_insecure_http {
                TransportSecurity::AllowInsecureHttp
            } else {
                TransportSecurity::TlsOnly
            },
            ..HttpClientConfig::default()
        }
    }
}

/// `Duration` as a humantime string (`"30s"`).
mod humantime_duration {
    use serde::{Deserialize, Deserializer, Serializer, de};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&humantime::format_duration(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let raw = String::deserialize(d)?;
        humantime::parse_duration(&raw).map_err(de::Error::custom)
    }
}
