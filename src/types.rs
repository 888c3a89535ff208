use std::str::FromStr;
use serde::Deserialize;

/// What to do with a dependency reference naming a title that is not part of
/// the request.
///
/// - `Ignore`: drop the reference; the task is treated as if it did not
///   declare it (default behaviour).
/// - `Reject`: fail the whole request with `UnresolvedDependency`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnresolvedPolicy {
    Ignore,
    Reject,
}

impl Default for UnresolvedPolicy {
    fn default() -> Self {
        UnresolvedPolicy::Ignore
    }
}

impl FromStr for UnresolvedPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ignore" => Ok(UnresolvedPolicy::Ignore),
            "reject" => Ok(UnresolvedPolicy::Reject),
            other => Err(format!(
                "invalid unresolved_dependencies: {other} (expected \"ignore\" or \"reject\")"
            )),
        }
    }
}

/// What to do when two tasks in one request share a title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Fail the request with `DuplicateTitle` (default).
    Reject,
    /// Collapse colliding entries into a single node. The node keeps the
    /// position of the first entry; the last entry's descriptor and
    /// dependency list win.
    Merge,
}

impl Default for DuplicatePolicy {
    fn default() -> Self {
        DuplicatePolicy::Reject
    }
}

impl FromStr for DuplicatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reject" => Ok(DuplicatePolicy::Reject),
            "merge" => Ok(DuplicatePolicy::Merge),
            other => Err(format!(
                "invalid duplicate_titles: {other} (expected \"reject\" or \"merge\")"
            )),
        }
    }
}

/// Knobs for a single scheduling call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct ScheduleOptions {
    #[serde(default, rename = "unresolved_dependencies")]
    pub unresolved: UnresolvedPolicy,
    #[serde(default, rename = "duplicate_titles")]
    pub duplicates: DuplicatePolicy,
}
