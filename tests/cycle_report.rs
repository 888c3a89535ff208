mod common;
use crate::common::init_tracing;

use taskorder::dag::{topological_order, DependencyGraph};
use taskorder::errors::{CycleReport, TaskorderError};
use taskorder::types::ScheduleOptions;
use taskorder_test_utils::builders::RequestBuilder;

fn report_for(builder: RequestBuilder) -> CycleReport {
    let request = builder.build();
    let graph = DependencyGraph::build(&request.tasks, &ScheduleOptions::default()).unwrap();
    match topological_order(&graph) {
        Err(TaskorderError::CycleDetected(report)) => report,
        other => panic!("expected CycleDetected, got {other:?}"),
    }
}

#[test]
fn residual_includes_tasks_downstream_of_a_cycle() {
    init_tracing();

    let report = report_for(
        RequestBuilder::new()
            .task("fetch", &[])
            .task("parse", &["fetch", "index"])
            .task("index", &["parse"])
            .task("publish", &["index"]),
    );

    assert_eq!(report.residual, vec!["parse", "index", "publish"]);
    assert_eq!(report.cycles, vec![vec!["parse", "index"]]);
    assert!(!report.is_on_cycle("publish"));
    assert!(!report.is_on_cycle("fetch"));
}

#[test]
fn disjoint_cycles_are_reported_separately() {
    init_tracing();

    let report = report_for(
        RequestBuilder::new()
            .task("A", &["B"])
            .task("B", &["A"])
            .task("ok", &[])
            .task("C", &["D"])
            .task("D", &["C"]),
    );

    assert_eq!(report.residual, vec!["A", "B", "C", "D"]);
    assert_eq!(report.cycles, vec![vec!["A", "B"], vec!["C", "D"]]);
}

#[test]
fn long_cycle_lists_members_in_request_order() {
    init_tracing();

    let report = report_for(
        RequestBuilder::new()
            .task("w", &["z"])
            .task("x", &["w"])
            .task("y", &["x"])
            .task("z", &["y"]),
    );

    assert_eq!(report.cycles, vec![vec!["w", "x", "y", "z"]]);
}

#[test]
fn self_loop_next_to_a_healthy_chain() {
    init_tracing();

    let report = report_for(
        RequestBuilder::new()
            .task("a", &[])
            .task("b", &["a"])
            .task("stuck", &["a", "stuck"]),
    );

    assert_eq!(report.residual, vec!["stuck"]);
    assert_eq!(report.cycles, vec![vec!["stuck"]]);
}

#[test]
fn successful_sort_does_not_mutate_graph() {
    init_tracing();

    let request = RequestBuilder::new()
        .task("a", &[])
        .task("b", &["a"])
        .build();
    let graph = DependencyGraph::build(&request.tasks, &ScheduleOptions::default()).unwrap();

    let first = topological_order(&graph).unwrap();
    let second = topological_order(&graph).unwrap();
    assert_eq!(first, second);
    assert_eq!(graph.in_degree_of("b"), Some(1));
}
