// src/errors.rs

//! Crate-wide error type and result alias.

use std::fmt;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskorderError {
    #[error("Circular dependencies detected in task schedule: {0}")]
    CycleDetected(CycleReport),

    #[error("task '{task}' depends on '{dependency}', which is not part of the request")]
    UnresolvedDependency { task: String, dependency: String },

    #[error("Duplicate task title: {0}")]
    DuplicateTitle(String),

    #[error("Invalid task: {0}")]
    InvalidTask(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TaskorderError>;

/// Details of a failed linearization.
///
/// `residual` lists every task whose in-degree never reached zero, which
/// includes tasks that merely sit downstream of a cycle. `cycles` narrows
/// that down to the strongly connected components that actually loop.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CycleReport {
    pub residual: Vec<String>,
    pub cycles: Vec<Vec<String>>,
}

impl CycleReport {
    /// Whether `title` is a member of one of the localized cycles.
    pub fn is_on_cycle(&self, title: &str) -> bool {
        self.cycles.iter().flatten().any(|t| t == title)
    }
}

impl fmt::Display for CycleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} unschedulable task(s) [{}]", self.residual.len(), self.residual.join(", "))?;
        if !self.cycles.is_empty() {
            let cycles: Vec<String> = self
                .cycles
                .iter()
                .map(|c| format!("{{{}}}", c.join(", ")))
                .collect();
            write!(f, "; cycles: {}", cycles.join(" "))?;
        }
        Ok(())
    }
}
