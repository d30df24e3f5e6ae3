use crate::error::HttpError;
use http::header::{ACCEPT, HeaderName, USER_AGENT};
use http::{HeaderValue, Request};
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::{Layer, Service};

/// `Accept` value sent when the caller did not choose one
const DEFAULT_ACCEPT: &str = "application/json, text/plain, */*";

/// Tower layer that fills in default request headers
///
/// Headers already present on the request are left untouched.
#[derive(Clone)]
pub struct DefaultHeadersLayer {
    defaults: Arc<[(HeaderName, HeaderValue)]>,
}

impl DefaultHeadersLayer {
    /// Create a layer that sets `User-Agent` to `user_agent` and a JSON-first `Accept`
    ///
    /// # Errors
    /// Returns `HttpError::InvalidHeaderValue` if the user agent string is not valid
    pub fn try_new(user_agent: impl AsRef<str>) -> Result<Self, HttpError> {
        let user_agent =
            HeaderValue::from_str(user_agent.as_ref()).map_err(HttpError::InvalidHeaderValue)?;
        Ok(Self {
            defaults: Arc::from(vec![
                (USER_AGENT, user_agent),
                (ACCEPT, HeaderValue::from_static(DEFAULT_ACCEPT)),
            ]),
        })
    }
}

impl<S> Layer<S> for DefaultHeadersLayer {
    type Service = DefaultHeadersService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        DefaultHeadersService {
            inner,
            defaults: Arc::clone(&self.defaults),
        }
    }
}

/// Service that fills in default request headers
#[derive(Clone)]
pub struct DefaultHeadersService<S> {
    inner: S,
    defaults: Arc<[(HeaderName, HeaderValue)]>,
}

impl<S, ReqBody> Service<Request<ReqBody>> for DefaultHeadersService<S>
where
    S: Service<Request<ReqBody>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<ReqBody>) -> Self::Future {
        let headers = req.headers_mut();
        for (name, value) in &*self.defaults {
            if !headers.contains_key(name) {
                headers.insert(name.clone(), value.clone());
            }
        }
        self.inner.call(req)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use bytes::Bytes;
    use http::{HeaderMap, Method, Response, StatusCode};
    use http_body_util::Full;
    use tower::ServiceExt;

    /// Echoes the request headers back so the test can inspect them.
    #[derive(Clone)]
    struct EchoHeaders;

    impl Service<Request<Full<Bytes>>> for EchoHeaders {
        type Response = Response<HeaderMap>;
        type Error = std::convert::Infallible;
        type Future = std::future::Ready<Result<Self::Response, Self::Error>>;

        fn poll_ready(&mut self, _: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }

        fn call(&mut self, req: Request<Full<Bytes>>) -> Self::Future {
            let mut resp = Response::new(req.headers().clone());
            *resp.status_mut() = StatusCode::OK;
            std::future::ready(Ok(resp))
        }
    }

    fn request(headers: &[(HeaderName, &'static str)]) -> Request<Full<Bytes>> {
        let mut builder = Request::builder()
            .method(Method::GET)
            .uri("http://courses.local/api/courses");
        for (name, value) in headers {
            builder = builder.header(name, *value);
        }
        builder.body(Full::new(Bytes::new())).unwrap()
    }

    #[tokio::test]
    async fn test_defaults_added() {
        let service = DefaultHeadersLayer::try_new("courses-test/1.0")
            .unwrap()
            .layer(EchoHeaders);

        let headers = service.oneshot(request(&[])).await.unwrap().into_body();

        assert_eq!(headers.get(USER_AGENT).unwrap(), "courses-test/1.0");
        assert_eq!(headers.get(ACCEPT).unwrap(), DEFAULT_ACCEPT);
    }

    #[tokio::test]
    async fn test_caller_headers_not_overwritten() {
        let service = DefaultHeadersLayer::try_new("courses-test/1.0")
            .unwrap()
            .layer(EchoHeaders);

        let req = request(&[(USER_AGENT, "custom-agent/2.0"), (ACCEPT, "text/csv")]);
        let headers = service.oneshot(req).await.unwrap().into_body();

        assert_eq!(headers.get(USER_AGENT).unwrap(), "custom-agent/2.0");
        assert_eq!(headers.get(ACCEPT).unwrap(), "text/csv");
        assert_eq!(headers.get_all(USER_AGENT).iter().count(), 1);
    }

    #[test]
    fn test_invalid_user_agent_rejected() {
        // Control characters are invalid in header values
        let result = DefaultHeadersLayer::try_new("invalid\x00agent");
        assert!(matches!(result, Err(HttpError::InvalidHeaderValue(_))));
    }
}
