mod common;
use crate::common::init_tracing;

use std::error::Error;
use std::io::Write;
use std::path::PathBuf;

use tempfile::{Builder, NamedTempFile};
use taskorder::config::{load_and_validate, load_from_str, RequestFormat};
use taskorder::engine::ScheduleService;
use taskorder::errors::TaskorderError;
use taskorder::types::{DuplicatePolicy, UnresolvedPolicy};

type TestResult = Result<(), Box<dyn Error>>;

fn demo(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos").join(name)
}

#[test]
fn release_toml_schedules_and_drops_external_reference() -> TestResult {
    init_tracing();

    let file = load_and_validate(demo("release.toml"), None)?;
    assert_eq!(file.options.unresolved, UnresolvedPolicy::Ignore);
    assert_eq!(file.options.duplicates, DuplicatePolicy::Reject);
    assert_eq!(file.request.tasks.len(), 5);
    assert_eq!(file.request.tasks[1].estimated_hours, 16.0);
    assert_eq!(file.request.tasks[4].due_date, "2024-05-15");

    let service = ScheduleService::new(file.options);
    let graph = service.graph(&file.request)?;
    assert_eq!(graph.dropped_references().len(), 1);
    assert_eq!(graph.dropped_references()[0].dependency, "legal-signoff");

    let response = service.generate(&file.request)?;
    assert_eq!(
        response.recommended_order,
        vec!["design", "implement", "docs", "test", "release"]
    );
    Ok(())
}

#[test]
fn diamond_json_uses_wire_field_names() -> TestResult {
    init_tracing();

    let file = load_and_validate(demo("diamond.json"), None)?;
    assert_eq!(file.request.tasks[3].dependencies, vec!["B", "C"]);

    let response = ScheduleService::new(file.options).generate(&file.request)?;
    assert_eq!(response.recommended_order, vec!["A", "B", "C", "D"]);

    let json = serde_json::to_string(&response)?;
    assert_eq!(json, r#"{"recommendedOrder":["A","B","C","D"]}"#);
    Ok(())
}

#[test]
fn cycle_toml_loads_but_fails_to_schedule() -> TestResult {
    init_tracing();

    let file = load_and_validate(demo("cycle.toml"), None)?;
    match ScheduleService::new(file.options).generate(&file.request) {
        Err(TaskorderError::CycleDetected(report)) => {
            assert_eq!(report.residual, vec!["parse", "index", "publish"]);
            assert_eq!(report.cycles, vec![vec!["parse", "index"]]);
        }
        other => panic!("expected CycleDetected, got {other:?}"),
    }
    Ok(())
}

#[test]
fn config_section_sets_policies() -> TestResult {
    init_tracing();

    let raw = load_from_str(
        r#"
[config]
unresolved_dependencies = "reject"
duplicate_titles = "merge"

[[task]]
title = "A"
estimated_hours = 1.0
due_date = "2024-01-01"
"#,
        RequestFormat::Toml,
    )?;

    assert_eq!(raw.config.unresolved, UnresolvedPolicy::Reject);
    assert_eq!(raw.config.duplicates, DuplicatePolicy::Merge);
    Ok(())
}

#[test]
fn missing_config_section_uses_defaults() -> TestResult {
    init_tracing();

    let raw = load_from_str(r#"{"tasks": []}"#, RequestFormat::Json)?;
    assert_eq!(raw.config.unresolved, UnresolvedPolicy::Ignore);
    assert_eq!(raw.config.duplicates, DuplicatePolicy::Reject);
    assert!(raw.tasks.is_empty());
    Ok(())
}

#[test]
fn json_extension_is_detected() -> TestResult {
    init_tracing();

    let mut file = Builder::new().suffix(".json").tempfile()?;
    write!(
        file,
        r#"{{"tasks": [{{"title": "solo", "estimatedHours": 0.5, "dueDate": "2024-03-01"}}]}}"#
    )?;

    let loaded = load_and_validate(file.path(), None)?;
    assert_eq!(loaded.request.tasks[0].title, "solo");
    assert!(loaded.request.tasks[0].dependencies.is_empty());
    Ok(())
}

#[test]
fn explicit_format_overrides_extension() -> TestResult {
    init_tracing();

    let mut file = NamedTempFile::new()?;
    write!(
        file,
        r#"{{"tasks": [{{"title": "solo", "estimatedHours": 2, "dueDate": "2024-03-01"}}]}}"#
    )?;

    let loaded = load_and_validate(file.path(), Some(RequestFormat::Json))?;
    assert_eq!(loaded.request.tasks[0].estimated_hours, 2.0);
    Ok(())
}

#[test]
fn non_positive_effort_is_rejected() {
    init_tracing();

    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[[task]]
title = "A"
estimated_hours = 0.0
due_date = "2024-01-01"
"#
    )
    .unwrap();

    match load_and_validate(file.path(), Some(RequestFormat::Toml)) {
        Err(TaskorderError::InvalidTask(msg)) => {
            assert!(msg.contains("'A'"));
            assert!(msg.contains("greater than 0"));
        }
        other => panic!("expected InvalidTask, got {other:?}"),
    }
}

#[test]
fn blank_title_is_rejected() {
    init_tracing();

    let raw = load_from_str(
        r#"{"tasks": [{"title": "  ", "estimatedHours": 1.0, "dueDate": "2024-01-01"}]}"#,
        RequestFormat::Json,
    )
    .unwrap();

    match taskorder::config::RequestFile::try_from(raw) {
        Err(TaskorderError::InvalidTask(msg)) => assert!(msg.contains("task #1")),
        other => panic!("expected InvalidTask, got {other:?}"),
    }
}

#[test]
fn empty_due_date_is_rejected() {
    init_tracing();

    let raw = load_from_str(
        r#"{"tasks": [{"title": "A", "estimatedHours": 1.0, "dueDate": ""}]}"#,
        RequestFormat::Json,
    )
    .unwrap();

    assert!(matches!(
        taskorder::config::RequestFile::try_from(raw),
        Err(TaskorderError::InvalidTask(_))
    ));
}

#[test]
fn missing_required_field_is_a_parse_error() {
    init_tracing();

    let result = load_from_str(
        r#"
[[task]]
title = "A"
due_date = "2024-01-01"
"#,
        RequestFormat::Toml,
    );

    assert!(matches!(result, Err(TaskorderError::TomlError(_))));
}

#[test]
fn missing_file_is_an_io_error() {
    init_tracing();

    let result = load_and_validate(demo("does-not-exist.toml"), None);
    assert!(matches!(result, Err(TaskorderError::IoError(_))));
}
