use crate::builder::HttpClientBuilder;
use crate::config::TransportSecurity;
use crate::error::{HttpError, InvalidUriKind};
use crate::request::RequestBuilder;
use crate::response::ResponseBody;
use bytes::Bytes;
use http::{Request, Response};
use http_body_util::Full;
use std::future::Future;
use std::pin::Pin;
use tower::Service;
use tower::buffer::Buffer;
use url::Url;

/// Future type of the inner service
pub type ServiceFuture =
    Pin<Box<dyn Future<Output = Result<Response<ResponseBody>, HttpError>> + Send>>;

/// Buffered service shared by every clone of the client
pub type BufferedService = Buffer<Request<Full<Bytes>>, ServiceFuture>;

/// HTTP client over a tower service stack (timeout, default headers,
/// decompression).
///
/// `HttpClient` is `Clone + Send + Sync`; clones share one connection pool
/// through `tower::buffer::Buffer`, so no external locking is needed.
///
/// Paths that start with `/` are resolved against the configured base URL:
///
/// ```ignore
/// let client = HttpClient::builder()
///     .base_url(Url::parse("https://courses.example.com")?)
///     .build()?;
///
/// let course: Course = client.get("/api/courses/12").send().await?.json().await?;
/// ```
#[derive(Clone)]
pub struct HttpClient {
    pub(crate) service: BufferedService,
    pub(crate) max_body_size: usize,
    pub(crate) transport_security: TransportSecurity,
    pub(crate) base_url: Option<Url>,
}

impl HttpClient {
    /// Create a builder for configuring the HTTP client
    #[must_use]
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::new()
    }

    /// Base URL used to resolve relative paths, if any
    #[must_use]
    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    /// Create a GET request builder
    pub fn get(&self, url: &str) -> RequestBuilder {
        self.request(http::Method::GET, url)
    }

    /// Create a PUT request builder
    pub fn put(&self, url: &str) -> RequestBuilder {
        self.request(http::Method::PUT, url)
    }

    /// Create a request builder for an arbitrary method
    ///
    /// `url` is either absolute (`https://host/path`) or a path starting
    /// with `/`, which requires a base URL and is appended to its path.
    pub fn request(&self, method: http::Method, url: &str) -> RequestBuilder {
        RequestBuilder::new(
            self.service.clone(),
            self.max_body_size,
            method,
            self.resolve(url),
            self.transport_security,
        )
    }

    fn resolve(&self, url: &str) -> Result<String, HttpError> {
        if !url.starts_with('/') {
            return Ok(url.to_owned());
        }

        let base = self.base_url.as_ref().ok_or_else(|| HttpError::InvalidUri {
            url: url.to_owned(),
            kind: InvalidUriKind::MissingBaseUrl,
            reason: "relative path requires a base URL".to_owned(),
        })?;

        // The path is appended under the base path, so `https://host/backend`
        // + `/api/courses` is `https://host/backend/api/courses`.
        let url = url.split_once('#').map_or(url, |(url, _)| url);
        let (path, query) = match url.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (url, None),
        };
        let mut resolved = base.clone();
        resolved.set_path(&format!("{}{path}", base.path().trim_end_matches('/')));
        resolved.set_query(query);
        resolved.set_fragment(None);
        Ok(resolved.into())
    }
}

/// Map buffer errors to `HttpError`
///
/// Errors from the inner service are passed through; anything else means
/// the buffer worker is gone.
pub fn map_buffer_error(err: tower::BoxError) -> HttpError {
    match err.downcast::<HttpError>() {
        Ok(http_err) => *http_err,
        Err(err) => {
            tracing::error!(
                error = %err,
                "buffer worker closed unexpectedly; service unavailable"
            );
            HttpError::ServiceClosed
        }
    }
}

/// Claim a buffer slot without waiting.
///
/// A full buffer yields `HttpError::Overloaded` immediately.
pub async fn try_acquire_buffer_slot(service: &mut BufferedService) -> Result<(), HttpError> {
    use std::task::Poll;

    let poll_result = std::future::poll_fn(|cx| match service.poll_ready(cx) {
        Poll::Ready(result) => Poll::Ready(Some(result)),
        Poll::Pending => Poll::Ready(None),
    })
    .await;

    match poll_result {
        Some(Ok(())) => Ok(()),
        Some(Err(e)) => Err(map_buffer_error(e)),
        None => Err(HttpError::Overloaded),
    }
}
