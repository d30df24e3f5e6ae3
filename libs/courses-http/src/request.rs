use crate::client::{BufferedService, map_buffer_error, try_acquire_buffer_slot};
use crate::config::TransportSecurity;
use crate::error::{HttpError, InvalidUriKind};
use crate::response::{HttpResponse, ResponseBody};
use bytes::Bytes;
use http::{Request, Response};
use http_body_util::Full;
use serde::Serialize;
use tower::Service;

/// Body type for the request builder
#[derive(Clone, Debug)]
enum BodyKind {
    Empty,
    /// JSON-serialized body (stored as bytes after serialization)
    Json(Bytes),
}

/// HTTP request builder with fluent API
///
/// Created by [`HttpClient::get`](crate::HttpClient::get) and friends.
/// Errors raised while building (bad header, unencodable query) are held
/// back and returned from [`send()`](RequestBuilder::send).
///
/// # Example
///
/// ```ignore
/// let lessons: Payload<Lesson> = client
///     .get("/api/lessons")
///     .query(&[("courseId", "12"), ("pageSize", "3")])
///     .send()
///     .await?
///     .json()
///     .await?;
/// ```
#[must_use = "RequestBuilder does nothing until .send() is called"]
pub struct RequestBuilder {
    service: BufferedService,
    max_body_size: usize,
    method: http::Method,
    url: String,
    query: Option<String>,
    headers: Vec<(http::header::HeaderName, http::header::HeaderValue)>,
    body: BodyKind,
    error: Option<HttpError>,
    transport_security: TransportSecurity,
}

impl RequestBuilder {
    pub(crate) fn new(
        service: BufferedService,
        max_body_size: usize,
        method: http::Method,
        url: Result<String, HttpError>,
        transport_security: TransportSecurity,
    ) -> Self {
        let (url, error) = match url {
            Ok(url) => (url, None),
            Err(e) => (String::new(), Some(e)),
        };
        Self {
            service,
            max_body_size,
            method,
            url,
            query: None,
            headers: Vec::new(),
            body: BodyKind::Empty,
            error,
            transport_security,
        }
    }

    /// Add a single header to the request
    pub fn header(mut self, name: &str, value: &str) -> Self {
        if self.error.is_some() {
            return self;
        }

        match (
            http::header::HeaderName::try_from(name),
            http::header::HeaderValue::try_from(value),
        ) {
            (Ok(name), Ok(value)) => self.headers.push((name, value)),
            (Err(e), _) => self.error = Some(HttpError::InvalidHeaderName(e)),
            (_, Err(e)) => self.error = Some(HttpError::InvalidHeaderValue(e)),
        }
        self
    }

    /// Append URL-encoded query parameters
    ///
    /// Accepts anything `serde_urlencoded` can serialize: a struct with named
    /// fields, a map, or a slice of pairs. Repeated calls accumulate in order.
    /// Empty values are kept (`filter=`), not dropped.
    pub fn query<T: Serialize + ?Sized>(mut self, params: &T) -> Self {
        if self.error.is_some() {
            return self;
        }

        match serde_urlencoded::to_string(params) {
            Ok(encoded) if encoded.is_empty() => {}
            Ok(encoded) => {
                self.query = Some(match self.query.take() {
                    Some(existing) => format!("{existing}&{encoded}"),
                    None => encoded,
                });
            }
            Err(e) => self.error = Some(HttpError::QueryEncode(e)),
        }
        self
    }

    /// Set request body as JSON
    ///
    /// Sets `content-type: application/json` unless one was already provided.
    ///
    /// # Errors
    /// Returns `HttpError::Json` if serialization fails, or any error
    /// deferred from earlier builder calls.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, HttpError> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }

        self.body = BodyKind::Json(Bytes::from(serde_json::to_vec(body)?));
        Ok(self)
    }

    /// Full target URL including the query string, without any fragment
    fn target(&self) -> String {
        let url = self.url.split_once('#').map_or(self.url.as_str(), |(url, _)| url);
        match &self.query {
            Some(query) if url.contains('?') => format!("{url}&{query}"),
            Some(query) => format!("{url}?{query}"),
            None => url.to_owned(),
        }
    }

    /// Parse the target and check its scheme against the transport security mode.
    fn validate_url(&self) -> Result<http::Uri, HttpError> {
        let target = self.target();
        let uri: http::Uri = target
            .parse()
            .map_err(|e: http::uri::InvalidUri| HttpError::InvalidUri {
                url: target.clone(),
                kind: InvalidUriKind::ParseError,
                reason: e.to_string(),
            })?;

        if uri.authority().is_none() {
            return Err(HttpError::InvalidUri {
                url: target,
                kind: InvalidUriKind::MissingAuthority,
                reason: "missing host/authority".to_owned(),
            });
        }

        match uri.scheme_str() {
            Some("https") => Ok(uri),
            Some("http") => match self.transport_security {
                TransportSecurity::AllowInsecureHttp => Ok(uri),
                TransportSecurity::TlsOnly => Err(HttpError::InvalidScheme {
                    scheme: "http".to_owned(),
                    reason: "HTTPS required (transport security is TlsOnly)".to_owned(),
                }),
            },
            Some(scheme) => Err(HttpError::InvalidScheme {
                scheme: scheme.to_owned(),
                reason: "only http:// and https:// schemes are supported".to_owned(),
            }),
            None => Err(HttpError::InvalidUri {
                url: target,
                kind: InvalidUriKind::MissingScheme,
                reason: "missing scheme".to_owned(),
            }),
        }
    }

    /// Send the request and return the response
    ///
    /// Resolves with `Ok` for every HTTP status; use
    /// [`HttpResponse::json`] or [`HttpResponse::error_for_status`] to turn
    /// non-2xx into an error.
    ///
    /// # Errors
    ///
    /// Returns `HttpError` if:
    /// - Request building failed (invalid header, URL, query)
    /// - URL scheme is invalid for the transport security mode
    /// - Network/transport error or timeout
    /// - The request buffer is full (`Overloaded`)
    pub async fn send(mut self) -> Result<HttpResponse, HttpError> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }

        let uri = self.validate_url()?;
        tracing::debug!(method = %self.method, uri = %uri, "sending request");

        let mut builder = Request::builder().method(self.method).uri(uri);

        let has_content_type = self
            .headers
            .iter()
            .any(|(name, _)| name == http::header::CONTENT_TYPE);
        if !has_content_type && matches!(self.body, BodyKind::Json(_)) {
            builder = builder.header(http::header::CONTENT_TYPE, "application/json");
        }

        for (name, value) in self.headers {
            builder = builder.header(name, value);
        }

        let body = match self.body {
            BodyKind::Empty => Bytes::new(),
            BodyKind::Json(b) => b,
        };
        let request = builder.body(Full::new(body))?;

        try_acquire_buffer_slot(&mut self.service).await?;

        let inner: Response<ResponseBody> =
            self.service.call(request).await.map_err(map_buffer_error)?;

        tracing::debug!(status = %inner.status(), "response received");

        Ok(HttpResponse {
            inner,
            max_body_size: self.max_body_size,
        })
    }
}
