#![allow(dead_code)]

use taskorder::model::{ScheduleRequest, ScheduleResponse};

pub use taskorder_test_utils::init_tracing;

/// Position of `title` in the order; panics if it is missing.
pub fn index_of(response: &ScheduleResponse, title: &str) -> usize {
    response
        .position_of(title)
        .unwrap_or_else(|| panic!("{title} missing from order {:?}", response.recommended_order))
}

/// Assert that every dependency that names a task of the request is placed
/// before its dependent.
pub fn assert_respects_dependencies(request: &ScheduleRequest, response: &ScheduleResponse) {
    for task in &request.tasks {
        for dep in &task.dependencies {
            if request.tasks.iter().any(|t| &t.title == dep) {
                assert!(
                    index_of(response, dep) < index_of(response, &task.title),
                    "{dep} must precede {} in {:?}",
                    task.title,
                    response.recommended_order
                );
            }
        }
    }
}
