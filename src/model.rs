// src/model.rs

//! Request and response shapes for a scheduling call.
//!
//! Field names follow the JSON wire format (`estimatedHours`, `dueDate`,
//! `recommendedOrder`); the snake_case spellings are accepted as aliases so
//! the same types load from TOML request files.

use serde::{Deserialize, Serialize};

/// A single task descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Identity key; dependency references name other tasks by title.
    pub title: String,

    /// Estimated effort in hours. Carried for the caller; the ordering does
    /// not consult it.
    #[serde(rename = "estimatedHours", alias = "estimated_hours")]
    pub estimated_hours: f64,

    /// Opaque due date. Carried for the caller; the ordering does not
    /// consult it.
    #[serde(rename = "dueDate", alias = "due_date")]
    pub due_date: String,

    /// Titles of the tasks that must come before this one.
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl Task {
    pub fn new(title: impl Into<String>, estimated_hours: f64, due_date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            estimated_hours,
            due_date: due_date.into(),
            dependencies: Vec::new(),
        }
    }

    pub fn with_dependencies<I, S>(mut self, deps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies.extend(deps.into_iter().map(Into::into));
        self
    }
}

/// Ordered task list handed to the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    #[serde(default, alias = "task")]
    pub tasks: Vec<Task>,
}

impl ScheduleRequest {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Successful scheduling result: every task title exactly once, each after
/// all of its materialized prerequisites.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResponse {
    #[serde(rename = "recommendedOrder", alias = "recommended_order")]
    pub recommended_order: Vec<String>,
}

impl ScheduleResponse {
    /// Position of `title` in the order, if present.
    pub fn position_of(&self, title: &str) -> Option<usize> {
        self.recommended_order.iter().position(|t| t == title)
    }
}
