#![allow(dead_code)]

use taskorder::model::{ScheduleRequest, Task};

/// Builder for `ScheduleRequest` to simplify test setup.
pub struct RequestBuilder {
    tasks: Vec<Task>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    /// Shorthand for a task with default metadata and the given deps.
    pub fn task(self, title: &str, deps: &[&str]) -> Self {
        let mut builder = TaskBuilder::new(title);
        for dep in deps {
            builder = builder.after(dep);
        }
        self.with_task(builder.build())
    }

    pub fn build(self) -> ScheduleRequest {
        ScheduleRequest::new(self.tasks)
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `Task`.
pub struct TaskBuilder {
    task: Task,
}

impl TaskBuilder {
    pub fn new(title: &str) -> Self {
        Self {
            task: Task::new(title, 1.0, "2030-01-01"),
        }
    }

    pub fn after(mut self, dep: &str) -> Self {
        self.task.dependencies.push(dep.to_string());
        self
    }

    pub fn hours(mut self, hours: f64) -> Self {
        self.task.estimated_hours = hours;
        self
    }

    pub fn due(mut self, date: &str) -> Self {
        self.task.due_date = date.to_string();
        self
    }

    pub fn build(self) -> Task {
        self.task
    }
}
