// src/dag/sorter.rs

//! Kahn's-algorithm linearization of a [`DependencyGraph`].

use std::collections::VecDeque;

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use tracing::{debug, warn};

use crate::dag::graph::{DependencyGraph, NodeId};
use crate::errors::{CycleReport, Result, TaskorderError};

/// Compute a topological order of every node in `graph`.
///
/// The frontier starts with all zero in-degree nodes in first-appearance
/// order and is consumed FIFO; a successor is enqueued as soon as its last
/// prerequisite has been emitted. If some nodes are never emitted the graph
/// has a cycle and a [`CycleReport`] is returned instead of a partial order.
pub fn topological_order(graph: &DependencyGraph) -> Result<Vec<NodeId>> {
    let mut in_degree = graph.in_degrees().to_vec();
    let mut frontier: VecDeque<NodeId> = graph.roots().collect();
    let mut order = Vec::with_capacity(graph.node_count());

    debug!(frontier = frontier.len(), "sorter: initial frontier");

    while let Some(id) = frontier.pop_front() {
        order.push(id);

        for &succ in graph.successors(id) {
            let remaining = &mut in_degree[succ.index()];
            *remaining -= 1;
            if *remaining == 0 {
                frontier.push_back(succ);
            }
        }
    }

    if order.len() == graph.node_count() {
        return Ok(order);
    }

    let report = cycle_report(graph, &in_degree);
    warn!(
        scheduled = order.len(),
        total = graph.node_count(),
        residual = ?report.residual,
        "sorter: dependency cycle prevents a complete order"
    );
    Err(TaskorderError::CycleDetected(report))
}

/// Same as [`topological_order`] but yields titles.
pub fn topological_titles(graph: &DependencyGraph) -> Result<Vec<String>> {
    let order = topological_order(graph)?;
    Ok(order
        .into_iter()
        .map(|id| graph.title(id).to_string())
        .collect())
}

/// Build the failure report from the in-degrees left after the sort.
///
/// Cycles are the strongly connected components of the residual subgraph
/// that contain more than one node or a self edge.
fn cycle_report(graph: &DependencyGraph, in_degree: &[usize]) -> CycleReport {
    let residual: Vec<NodeId> = graph
        .node_ids()
        .filter(|id| in_degree[id.index()] > 0)
        .collect();

    let mut sub: DiGraph<NodeId, ()> = DiGraph::new();
    let mut mapping: Vec<Option<NodeIndex>> = vec![None; graph.node_count()];
    for &id in &residual {
        mapping[id.index()] = Some(sub.add_node(id));
    }
    for &id in &residual {
        let Some(from) = mapping[id.index()] else { continue };
        for succ in graph.successors(id) {
            if let Some(to) = mapping[succ.index()] {
                sub.add_edge(from, to, ());
            }
        }
    }

    let mut cycles: Vec<Vec<NodeId>> = tarjan_scc(&sub)
        .into_iter()
        .map(|component| {
            let mut ids: Vec<NodeId> = component.into_iter().map(|ix| sub[ix]).collect();
            ids.sort();
            ids
        })
        .filter(|ids| ids.len() > 1 || graph.successors(ids[0]).contains(&ids[0]))
        .collect();
    cycles.sort();

    CycleReport {
        residual: residual
            .iter()
            .map(|&id| graph.title(id).to_string())
            .collect(),
        cycles: cycles
            .into_iter()
            .map(|ids| ids.into_iter().map(|id| graph.title(id).to_string()).collect())
            .collect(),
    }
}
