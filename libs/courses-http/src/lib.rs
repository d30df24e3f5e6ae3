#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![warn(warnings)]

//! HTTP transport for the courses API client
//!
//! A hyper-based client with:
//! - Automatic TLS via rustls (HTTPS only by default)
//! - Connection pooling
//! - Per-request timeout
//! - `User-Agent` / `Accept` defaults
//! - Transparent response decompression (gzip, brotli, deflate)
//! - Base URL resolution for paths starting with `/`
//! - Query string composition from any `serde::Serialize` value
//!
//! There is no retry layer: every call issues exactly one request.
//!
//! # Example
//!
//! ```ignore
//! use courses_http::HttpClient;
//! use url::Url;
//!
//! let client = HttpClient::builder()
//!     .base_url(Url::parse("https://courses.example.com")?)
//!     .build()?;
//!
//! let lessons: serde_json::Value = client
//!     .get("/api/lessons")
//!     .query(&[("courseId", "12"), ("pageSize", "3")])
//!     .send()
//!     .await?
//!     .json()
//!     .await?;
//! ```

mod builder;
mod client;
mod config;
mod error;
mod layers;
mod request;
mod response;
mod tls;

pub use builder::HttpClientBuilder;
pub use client::HttpClient;
pub use config::{
    DEFAULT_MAX_BODY_SIZE, DEFAULT_USER_AGENT, HttpClientConfig, TlsRootConfig, TransportSecurity,
};
pub use error::{HttpError, InvalidUriKind};
pub use layers::{DefaultHeadersLayer, DefaultHeadersService};
pub use request::RequestBuilder;
pub use response::{ERROR_BODY_PREVIEW_LIMIT, HttpResponse, ResponseBody};

/// Re-exported so callers can match on status codes without a direct `http` dependency.
pub use http::StatusCode;
