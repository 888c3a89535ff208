// src/config/validate.rs

use crate::config::model::{RawRequestFile, RequestFile};
use crate::errors::{Result, TaskorderError};
use crate::model::Task;

impl TryFrom<RawRequestFile> for RequestFile {
    type Error = TaskorderError;

    fn try_from(raw: RawRequestFile) -> std::result::Result<Self, Self::Error> {
        for (pos, task) in raw.tasks.iter().enumerate() {
            validate_task(pos, task)?;
        }
        Ok(RequestFile::new_unchecked(raw.config, raw.tasks))
    }
}

/// Structural checks on a single task descriptor.
///
/// `pos` is the task's position in the request and only used for messages.
pub fn validate_task(pos: usize, task: &Task) -> Result<()> {
    if task.title.trim().is_empty() {
        return Err(TaskorderError::InvalidTask(format!(
            "task #{} has an empty title",
            pos + 1
        )));
    }

    if !task.estimated_hours.is_finite() || task.estimated_hours <= 0.0 {
        return Err(TaskorderError::InvalidTask(format!(
            "task '{}': estimated hours must be greater than 0 (got {})",
            task.title, task.estimated_hours
        )));
    }

    if task.due_date.trim().is_empty() {
        return Err(TaskorderError::InvalidTask(format!(
            "task '{}' has no due date",
            task.title
        )));
    }

    Ok(())
}
