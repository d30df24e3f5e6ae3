//! Courses API trait and error type

use async_trait::async_trait;
use courses_http::HttpError;

use crate::models::{Course, CoursePatch, Lesson, LessonsQuery};

/// Courses API trait
///
/// Each call issues exactly one request and resolves once, with either the
/// decoded value or an error.
///
/// # Errors
/// - `CoursesError::Http`: the server answered with a non-2xx status
/// - `CoursesError::Decode`: the body did not match the expected shape
/// - `Transport` / `InvalidRequest`: no response was obtained
#[async_trait]
pub trait CoursesClientV1: Send + Sync {
    /// List every course (`GET /api/courses`).
    ///
    /// # Errors
    /// See the trait documentation.
    async fn find_all_courses(&self) -> Result<Vec<Course>, CoursesError>;

    /// Fetch one course (`GET /api/courses/{id}`).
    ///
    /// # Errors
    /// `CoursesError::Http` with status 404 when the course does not exist.
    async fn find_course_by_id(&self, id: u64) -> Result<Course, CoursesError>;

    /// Apply a partial update (`PUT /api/courses/{id}`) and return the
    /// course as stored by the server.
    ///
    /// # Errors
    /// `CoursesError::Http` carrying the status when the server rejects the update.
    async fn save_course(&self, id: u64, patch: &CoursePatch) -> Result<Course, CoursesError>;

    /// List one page of a course's lessons (`GET /api/lessons`).
    ///
    /// # Errors
    /// See the trait documentation.
    async fn find_lessons(&self, query: &LessonsQuery) -> Result<Vec<Lesson>, CoursesError>;
}

/// Error type for courses operations
#[derive(thiserror::Error, Debug)]
pub enum CoursesError {
    /// The server answered with a non-2xx status.
    #[error("HTTP {status} {status_text}: {message}")]
    Http {
        status: u16,
        status_text: String,
        message: String,
    },

    #[error("transport error: {0}")]
    Transport(#[source] HttpError),

    #[error("failed to decode response: {0}")]
    Decode(#[source] HttpError),

    #[error("invalid request: {0}")]
    InvalidRequest(#[source] HttpError),
}

impl CoursesError {
    /// HTTP status code, when the server produced one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Status text (e.g. `Internal Server Error`), when the server produced one.
    #[must_use]
    pub fn status_text(&self) -> Option<&str> {
        match self {
            Self::Http { status_text, .. } => Some(status_text),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl From<HttpError> for CoursesError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::HttpStatus {
                status,
                status_text,
                body_preview,
                ..
            } => Self::Http {
                status: status.as_u16(),
                status_text,
                message: body_preview,
            },
            e @ (HttpError::Json(_) | HttpError::BodyTooLarge { .. }) => Self::Decode(e),
            e @ (HttpError::RequestBuild(_)
            | HttpError::InvalidHeaderName(_)
            | HttpError::InvalidHeaderValue(_)
            | HttpError::QueryEncode(_)
            | HttpError::InvalidUri { .. }
            | HttpError::InvalidScheme { .. }) => Self::InvalidRequest(e),
            e => Self::Transport(e),
        }
    }
}
