//! Courses SDK
//!
//! Everything needed to consume the courses API:
//! - API trait (`CoursesClientV1`)
//! - Error type (`CoursesError`)
//! - Models (`Course`, `CoursePatch`, `Lesson`, `LessonsQuery`)
//! - HTTP implementation (`HttpCoursesClient`) and its configuration
//!
//! ## Usage
//!
//! ```ignore
//! use courses_sdk::{CoursesClientConfig, CoursesClientV1, HttpCoursesClient, LessonsQuery};
//!
//! let client = HttpCoursesClient::new(&CoursesClientConfig::default())?;
//! let courses = client.find_all_courses().await?;
//! let lessons = client.find_lessons(&LessonsQuery::for_course(12)).await?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === API TRAIT AND TYPES ===
mod api;
pub use api::{CoursesClientV1, CoursesError};

pub mod models;
pub use models::{
    Course, CoursePatch, CourseTitles, DEFAULT_LESSONS_PAGE_SIZE, Lesson, LessonsQuery, Payload,
    SortOrder,
};

// === HTTP CLIENT ===
mod client;
mod config;
pub use client::HttpCoursesClient;
pub use config::CoursesClientConfig;
