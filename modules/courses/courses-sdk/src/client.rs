//! HTTP implementation of [`CoursesClientV1`]

use async_trait::async_trait;
use courses_http::{HttpClient, HttpClientBuilder, HttpError};
use tracing::instrument;

use crate::api::{CoursesClientV1, CoursesError};
use crate::config::CoursesClientConfig;
use crate::models::{Course, CoursePatch, Lesson, LessonsQuery, Payload};

const COURSES_PATH: &str = "/api/courses";
const LESSONS_PATH: &str = "/api/lessons";

/// Courses client over [`HttpClient`].
///
/// Requests go to paths relative to the client's base URL. `HttpClient` is
/// `Clone + Send + Sync`, so one instance can be shared freely.
#[derive(Clone)]
pub struct HttpCoursesClient {
    client: HttpClient,
}

impl HttpCoursesClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    /// Returns an error if the base URL is invalid or the transport cannot be
    /// initialized (TLS roots, user agent).
    pub fn new(config: &CoursesClientConfig) -> Result<Self, CoursesError> {
        let base_url = config.parsed_base_url()?;
        let client = HttpClientBuilder::with_config(config.http_config())
            .base_url(base_url)
            .build()?;
        Ok(Self { client })
    }

    /// Wrap an already configured transport. It must carry a base URL.
    ///
    /// # Errors
    /// Returns `CoursesError::InvalidRequest` if `client` has no base URL.
    pub fn from_http(client: HttpClient) -> Result<Self, CoursesError> {
        if client.base_url().is_none() {
            return Err(CoursesError::InvalidRequest(HttpError::InvalidUri {
                url: COURSES_PATH.to_owned(),
                kind: courses_http::InvalidUriKind::MissingBaseUrl,
                reason: "courses client requires a base URL".to_owned(),
            }));
        }
        Ok(Self { client })
    }

    /// Backend root the client talks to.
    #[must_use]
    pub fn base_url(&self) -> Option<&url::Url> {
        self.client.base_url()
    }
}

fn course_path(id: u64) -> String {
    format!("{COURSES_PATH}/{id}")
}

#[async_trait]
impl CoursesClientV1 for HttpCoursesClient {
    #[instrument(skip_all)]
    async fn find_all_courses(&self) -> Result<Vec<Course>, CoursesError> {
        let payload: Payload<Course> = self.client.get(COURSES_PATH).send().await?.json().await?;
        tracing::debug!(count = payload.payload.len(), "courses loaded");
        Ok(payload.into_inner())
    }

    #[instrument(skip_all, fields(course_id = id))]
    async fn find_course_by_id(&self, id: u64) -> Result<Course, CoursesError> {
        let course = self.client.get(&course_path(id)).send().await?.json().await?;
        Ok(course)
    }

    #[instrument(skip_all, fields(course_id = id))]
    async fn save_course(&self, id: u64, patch: &CoursePatch) -> Result<Course, CoursesError> {
        let course = self
            .client
            .put(&course_path(id))
            .json(patch)?
            .send()
            .await?
            .json()
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "save course failed"))?;
        Ok(course)
    }

    #[instrument(
        skip_all,
        fields(
            course_id = query.course_id,
            page_number = query.page_number,
            page_size = query.page_size
        )
    )]
    async fn find_lessons(&self, query: &LessonsQuery) -> Result<Vec<Lesson>, CoursesError> {
        let payload: Payload<Lesson> = self
            .client
            .get(LESSONS_PATH)
            .query(query)
            .send()
            .await?
            .json()
            .await?;
        tracing::debug!(count = payload.payload.len(), "lessons loaded");
        Ok(payload.into_inner())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_course_path() {
        assert_eq!(course_path(12), "/api/courses/12");
    }

    #[tokio::test]
    async fn test_from_http_requires_base_url() {
        let http = HttpClient::builder().build().unwrap();
        assert!(matches!(
            HttpCoursesClient::from_http(http),
            Err(CoursesError::InvalidRequest(_))
        ));
    }

    #[tokio::test]
    async fn test_new_rejects_bad_base_url() {
        let config = CoursesClientConfig {
            base_url: "::not-a-url".to_owned(),
            ..Default::default()
        };
        assert!(matches!(
            HttpCoursesClient::new(&config),
            Err(CoursesError::InvalidRequest(_))
        ));
    }

    #[tokio::test]
    async fn test_new_keeps_base_url() {
        let config = CoursesClientConfig {
            base_url: "https://courses.example.com".to_owned(),
            ..Default::default()
        };
        let client = HttpCoursesClient::new(&config).unwrap();
        assert_eq!(
            client.base_url().map(url::Url::as_str),
            Some("https://courses.example.com/")
        );
    }

    #[test]
    fn test_client_is_object_safe() {
        fn assert_dyn(_: &dyn CoursesClientV1) {}
        let _ = assert_dyn;
    }
}
