//! Course and lesson catalogue served by the mock backend.
#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

use httpmock::MockServer;
use serde_json::{Value, json};

use courses_sdk::{CoursesClientConfig, HttpCoursesClient};

pub const TESTING_COURSE_ID: u64 = 12;

/// Client pointed at `server` over plain HTTP.
pub fn client_for(server: &MockServer) -> HttpCoursesClient {
    let config = CoursesClientConfig {
        base_url: server.base_url(),
        allow_insecure_http: true,
        ..Default::default()
    };
    HttpCoursesClient::new(&config).expect("client should build")
}

fn course(id: u64, description: &str, long_description: &str, category: &str, lessons: u32) -> Value {
    json!({
        "id": id,
        "titles": {
            "description": description,
            "longDescription": long_description
        },
        "iconUrl": format!("https://cdn.courses.example/course-{id}.png"),
        "category": category,
        "lessonsCount": lessons,
        "seqNo": id
    })
}

/// The twelve courses, ordered by id.
pub fn courses() -> Vec<Value> {
    vec![
        course(1, "Serverless Angular with Firebase Course", "Serveless Angular with Firestore, Firebase Storage & Hosting, Firebase Cloud Functions & AngularFire", "BEGINNER", 10),
        course(2, "Angular Core Deep Dive", "A detailed walk-through of the most important part of Angular - the Core and Common modules", "BEGINNER", 10),
        course(3, "RxJs In Practice Course", "Understand the RxJs Observable pattern, learn the RxJs Operators via practical examples", "BEGINNER", 10),
        course(4, "NgRx In Depth", "Learn the modern Ngrx Ecosystem, including NgRx Data, Store, Effects, Router Store, Ngrx Entity, and Dev Tools.", "ADVANCED", 10),
        course(5, "Angular for Beginners", "Establish a solid layer of fundamentals, learn what's under the hood of Angular", "BEGINNER", 10),
        course(6, "Angular Security Course - Web Security Fundamentals", "Learn Web Security Fundamentals and apply them to defend an Angular / Node Application from multiple types of attacks.", "ADVANCED", 11),
        course(7, "Angular PWA - Progressive Web Apps Course", "Learn Angular Progressive Web Applications, build the future of the Web Today.", "ADVANCED", 8),
        course(8, "Angular Advanced Library Laboratory: Build Your Own Library", "Learn Advanced Angular functionality typically used in Library Development. Advanced Components, Directives, Testing, Npm", "ADVANCED", 14),
        course(9, "The Complete Typescript Course", "Complete Guide to Typescript From Scratch: Learn the language in-depth and use it to build a Node REST API.", "BEGINNER", 15),
        course(10, "Rxjs and Reactive Patterns Angular Architecture Course", "Learn the core RxJs Observable Pattern as well and many other Design Patterns for building Reactive Angular Applications.", "BEGINNER", 40),
        course(11, "Angular Material Course", "Build Applications with the official Angular Widget Library", "BEGINNER", 12),
        course(12, "Angular Testing Course", "In-depth guide to Unit Testing and E2E Testing of Angular Applications", "BEGINNER", 10),
    ]
}

pub fn course_by_id(id: u64) -> Value {
    courses()
        .into_iter()
        .find(|c| c["id"] == json!(id))
        .expect("course should exist in the catalogue")
}

fn lesson(id: u64, description: &str, duration: &str, seq_no: u32, course_id: u64) -> Value {
    json!({
        "id": id,
        "description": description,
        "duration": duration,
        "seqNo": seq_no,
        "courseId": course_id
    })
}

/// Every lesson in the catalogue.
pub fn lessons() -> Vec<Value> {
    vec![
        lesson(1, "Angular Tutorial For Beginners - Build Your First App - Hello World Step By Step", "4:17", 1, 5),
        lesson(2, "Building Your First Component - Component Composition", "2:07", 2, 5),
        lesson(3, "Component @Input - How To Pass Input Data To an Component", "2:33", 3, 5),
        lesson(48, "Angular Testing Course - Helicopter View", "08:19", 1, 12),
        lesson(49, "Setting Up the Development Environment", "04:17", 2, 12),
        lesson(50, "Angular Testing Fundamentals", "06:37", 3, 12),
        lesson(51, "Angular Testing Utilities", "05:15", 4, 12),
        lesson(52, "Testing Services with Dependencies", "07:41", 5, 12),
        lesson(53, "Testing HTTP Services", "10:01", 6, 12),
        lesson(54, "Testing Angular Components", "08:09", 7, 12),
        lesson(55, "Testing Asynchronous Code", "09:53", 8, 12),
        lesson(56, "End to End Testing with Cypress", "06:32", 9, 12),
        lesson(57, "Continuous Integration with Travis CI", "04:44", 10, 12),
    ]
}

/// Lessons of one course in `seqNo` order.
pub fn find_lessons_for_course(course_id: u64) -> Vec<Value> {
    let mut found: Vec<Value> = lessons()
        .into_iter()
        .filter(|l| l["courseId"] == json!(course_id))
        .collect();
    found.sort_by_key(|l| l["seqNo"].as_u64());
    found
}
