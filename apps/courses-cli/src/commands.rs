use anyhow::{Context, Result, bail};
use clap::Subcommand;
use courses_sdk::{
    CoursePatch, CourseTitles, CoursesClientV1, DEFAULT_LESSONS_PAGE_SIZE, LessonsQuery, SortOrder,
};
use serde_json::Value;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List every course
    Courses,
    /// Show a single course
    Course { id: u64 },
    /// Update fields of a course
    Save {
        id: u64,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, requires = "description")]
        long_description: Option<String>,
        #[arg(long)]
        category: Option<String>,
    },
    /// List one page of a course's lessons
    Lessons {
        course_id: u64,
        #[arg(long, default_value = "")]
        filter: String,
        #[arg(long, default_value = "asc")]
        sort_order: SortOrder,
        #[arg(long, default_value_t = 0)]
        page_number: u32,
        #[arg(long, default_value_t = DEFAULT_LESSONS_PAGE_SIZE)]
        page_size: u32,
    },
}

/// Run one command and return its result as JSON.
pub async fn run(client: &dyn CoursesClientV1, command: Command) -> Result<Value> {
    let value = match command {
        Command::Courses => {
            let courses = client
                .find_all_courses()
                .await
                .context("failed to list courses")?;
            tracing::info!(count = courses.len(), "listed courses");
            serde_json::to_value(courses)?
        }
        Command::Course { id } => {
            let course = client
                .find_course_by_id(id)
                .await
                .with_context(|| format!("failed to load course {id}"))?;
            serde_json::to_value(course)?
        }
        Command::Save {
            id,
            description,
            long_description,
            category,
        } => {
            let patch = CoursePatch {
                titles: description.map(|description| CourseTitles {
                    description,
                    long_description,
                }),
                category,
                ..Default::default()
            };
            if patch.is_empty() {
                bail!("nothing to save: pass --description or --category");
            }
            let course = client
                .save_course(id, &patch)
                .await
                .with_context(|| format!("failed to save course {id}"))?;
            tracing::info!(course_id = id, "course saved");
            serde_json::to_value(course)?
        }
        Command::Lessons {
            course_id,
            filter,
            sort_order,
            page_number,
            page_size,
        } => {
            let query = LessonsQuery::for_course(course_id)
                .filter(filter)
                .sort_order(sort_order)
                .page_number(page_number)
                .page_size(page_size);
            let lessons = client
                .find_lessons(&query)
                .await
                .with_context(|| format!("failed to list lessons of course {course_id}"))?;
            serde_json::to_value(lessons)?
        }
    };
    Ok(value)
}
