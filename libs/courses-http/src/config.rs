use std::time::Duration;

/// `User-Agent` sent when the caller configures none
pub const DEFAULT_USER_AGENT: &str = concat!("courses-http/", env!("CARGO_PKG_VERSION"));

/// Largest response body read into memory (`10 * 1024 * 1024` bytes)
pub const DEFAULT_MAX_BODY_SIZE: usize = 10 * 1024 * 1024;

/// Where trusted root certificates come from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum TlsRootConfig {
    /// Bundled Mozilla roots
    #[default]
    WebPki,
    /// The operating system's certificate store
    Native,
}

/// Which URL schemes the client will dial
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum TransportSecurity {
    /// `https://` only
    #[default]
    TlsOnly,
    /// `https://` and plain `http://`, for local backends and mock servers
    AllowInsecureHttp,
}

/// Transport settings consumed by [`HttpClientBuilder`](crate::HttpClientBuilder)
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Applies to the whole exchange, connect through last response byte
    pub request_timeout: Duration,
    pub max_body_size: usize,
    pub user_agent: String,
    pub transport: TransportSecurity,
    pub tls_roots: TlsRootConfig,
    /// Requests queued for the pooled client; one more fails with `HttpError::Overloaded`
    pub buffer_capacity: usize,
    /// `None` keeps idle pooled connections open indefinitely
    pub pool_idle_timeout: Option<Duration>,
    pub pool_max_idle_per_host: usize,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            max_body_size: DEFAULT_MAX_BODY_SIZE,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            transport: TransportSecurity::TlsOnly,
            tls_roots: TlsRootConfig::WebPki,
            buffer_capacity: 1024,
            pool_idle_timeout: Some(Duration::from_secs(90)),
            pool_max_idle_per_host: 32,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_tls_only_with_bounded_body() {
        let config = HttpClientConfig::default();
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.max_body_size, DEFAULT_MAX_BODY_SIZE);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.transport, TransportSecurity::TlsOnly);
        assert_eq!(config.tls_roots, TlsRootConfig::WebPki);
        assert_eq!(config.buffer_capacity, 1024);
        assert_eq!(config.pool_idle_timeout, Some(Duration::from_secs(90)));
    }

    #[test]
    fn test_default_user_agent_names_this_crate() {
        assert!(DEFAULT_USER_AGENT.starts_with("courses-http/"));
    }
}
