// src/config/model.rs

use std::path::Path;

use serde::Deserialize;

use crate::model::{ScheduleRequest, Task};
use crate::types::ScheduleOptions;

/// Top-level request file as read from disk.
///
/// TOML form:
///
/// ```toml
/// [config]
/// unresolved_dependencies = "ignore"
/// duplicate_titles = "reject"
///
/// [[task]]
/// title = "A"
/// estimated_hours = 2.5
/// due_date = "2024-06-01"
///
/// [[task]]
/// title = "B"
/// estimated_hours = 1.0
/// due_date = "2024-06-02"
/// dependencies = ["A"]
/// ```
///
/// JSON form uses the service wire names:
/// `{"tasks": [{"title": "A", "estimatedHours": 2.5, "dueDate": "...", "dependencies": []}]}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRequestFile {
    /// Scheduling policies from `[config]`.
    #[serde(default)]
    pub config: ScheduleOptions,

    /// Tasks in request order.
    #[serde(default, alias = "task")]
    pub tasks: Vec<Task>,
}

/// A request file whose tasks passed structural validation.
///
/// Construct via `TryFrom<RawRequestFile>` (see `validate.rs`).
#[derive(Debug, Clone)]
pub struct RequestFile {
    pub options: ScheduleOptions,
    pub request: ScheduleRequest,
}

impl RequestFile {
    pub(crate) fn new_unchecked(options: ScheduleOptions, tasks: Vec<Task>) -> Self {
        Self {
            options,
            request: ScheduleRequest::new(tasks),
        }
    }
}

/// On-disk encoding of a request file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestFormat {
    Toml,
    Json,
}

impl RequestFormat {
    /// Pick a format from the file extension; anything but `.json` is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => RequestFormat::Json,
            _ => RequestFormat::Toml,
        }
    }
}
