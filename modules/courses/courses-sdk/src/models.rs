//! Public models for the courses API.
//!
//! Wire names are `camelCase` to match the backend's JSON.

use serde::{Deserialize, Serialize};

/// Default page size used when listing lessons.
pub const DEFAULT_LESSONS_PAGE_SIZE: u32 = 3;

/// Course titles block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseTitles {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
}

impl CourseTitles {
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            long_description: None,
        }
    }
}

/// Course entity as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: u64,
    pub titles: CourseTitles,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lessons_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seq_no: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ux_design: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// Partial update data for a course.
///
/// Only the fields that are `Some` end up in the request body.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub titles: Option<CourseTitles>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lessons_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seq_no: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ux_design: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl CoursePatch {
    /// `true` when no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Lesson entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: u64,
    pub description: String,
    pub duration: String,
    pub seq_no: u32,
    pub course_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
}

/// Response envelope wrapping a collection under `payload`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payload<T> {
    pub payload: Vec<T>,
}

impl<T> Payload<T> {
    #[must_use]
    pub fn into_inner(self) -> Vec<T> {
        self.payload
    }
}

/// Lesson sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(format!("unknown sort order '{other}', expected asc or desc")),
        }
    }
}

/// Query parameters for `GET /api/lessons`.
///
/// Every field is sent, including an empty `filter`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonsQuery {
    pub course_id: u64,
    pub filter: String,
    pub sort_order: SortOrder,
    pub page_number: u32,
    pub page_size: u32,
}

impl LessonsQuery {
    /// First page of a course's lessons: no filter, ascending, 3 per page.
    #[must_use]
    pub fn for_course(course_id: u64) -> Self {
        Self {
            course_id,
            filter: String::new(),
            sort_order: SortOrder::Asc,
            page_number: 0,
            page_size: DEFAULT_LESSONS_PAGE_SIZE,
        }
    }

    #[must_use]
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    #[must_use]
    pub fn sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
    }

    #[must_use]
    pub fn page_number(mut self, page_number: u32) -> Self {
        self.page_number = page_number;
        self
    }

    #[must_use]
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_course_uses_camel_case() {
        let course: Course = serde_json::from_value(json!({
            "id": 12,
            "titles": {
                "description": "Angular Testing Course",
                "longDescription": "In-depth guide to Unit Testing and E2E Testing of Angular Applications"
            },
            "iconUrl": "https://example.com/angular-testing-small.png",
            "category": "BEGINNER",
            "lessonsCount": 10,
            "seqNo": 0,
            "uxDesign": true
        }))
        .unwrap();

        assert_eq!(course.id, 12);
        assert_eq!(course.titles.description, "Angular Testing Course");
        assert_eq!(course.lessons_count, Some(10));
        assert_eq!(course.ux_design, Some(true));
        assert_eq!(course.price, None);
    }

    #[test]
    fn test_patch_serializes_only_set_fields() {
        let patch = CoursePatch {
            titles: Some(CourseTitles::new("Testing Course")),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!({"titles": {"description": "Testing Course"}})
        );
        assert!(!patch.is_empty());
        assert!(CoursePatch::default().is_empty());
    }

    #[test]
    fn test_lessons_query_defaults() {
        let query = LessonsQuery::for_course(12);
        assert_eq!(query.filter, "");
        assert_eq!(query.sort_order, SortOrder::Asc);
        assert_eq!(query.page_number, 0);
        assert_eq!(query.page_size, 3);
    }

    #[test]
    fn test_lessons_query_url_encoding() {
        let query = LessonsQuery::for_course(12);
        assert_eq!(
            serde_urlencoded::to_string(&query).unwrap(),
            "courseId=12&filter=&sortOrder=asc&pageNumber=0&pageSize=3"
        );

        let query = LessonsQuery::for_course(4)
            .filter("intro")
            .sort_order(SortOrder::Desc)
            .page_number(2)
            .page_size(10);
        assert_eq!(
            serde_urlencoded::to_string(&query).unwrap(),
            "courseId=4&filter=intro&sortOrder=desc&pageNumber=2&pageSize=10"
        );
    }

    #[test]
    fn test_sort_order_from_str() {
        assert_eq!("asc".parse::<SortOrder>(), Ok(SortOrder::Asc));
        assert_eq!("DESC".parse::<SortOrder>(), Ok(SortOrder::Desc));
        assert!("sideways".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_payload_envelope() {
        let payload: Payload<Lesson> = serde_json::from_value(json!({
            "payload": [{
                "id": 1,
                "description": "Angular Testing Course - Helicopter View",
                "duration": "4:17",
                "seqNo": 1,
                "courseId": 12
            }]
        }))
        .unwrap();

        let lessons = payload.into_inner();
        assert_eq!(lessons.len(), 1);
        assert_eq!(lessons[0].course_id, 12);
        assert_eq!(lessons[0].video_id, None);
    }
}
