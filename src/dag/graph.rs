// src/dag/graph.rs

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::errors::{Result, TaskorderError};
use crate::model::Task;
use crate::types::{DuplicatePolicy, ScheduleOptions, UnresolvedPolicy};

/// Stable per-request node index, assigned in order of first appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A dependency reference that did not resolve to a task in the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedReference {
    pub task: String,
    pub dependency: String,
}

/// Internal node structure: stores immediate deps and dependents by index.
#[derive(Debug, Clone)]
struct DagNode {
    title: String,
    /// Position in the request of the descriptor that defines this node.
    source: usize,
    /// Materialized prerequisites, in declaration order.
    deps: Vec<NodeId>,
    /// Tasks that depend on this one, in edge insertion order.
    dependents: Vec<NodeId>,
}

/// Dependency graph for a single request.
///
/// Nodes live in an arena indexed by [`NodeId`]; the in-degree of each node
/// is the number of materialized prerequisite edges pointing into it.
/// Building does not check for cycles, that is the sorter's job.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    nodes: Vec<DagNode>,
    in_degree: Vec<usize>,
    index: HashMap<String, NodeId>,
    edge_count: usize,
    dropped: Vec<DroppedReference>,
}

impl DependencyGraph {
    /// Build the graph from an ordered task list.
    pub fn build(tasks: &[Task], options: &ScheduleOptions) -> Result<Self> {
        let mut graph = DependencyGraph::default();

        // First pass: assign node indices.
        for (pos, task) in tasks.iter().enumerate() {
            match graph.index.get(&task.title) {
                Some(&id) => match options.duplicates {
                    DuplicatePolicy::Reject => {
                        return Err(TaskorderError::DuplicateTitle(task.title.clone()));
                    }
                    DuplicatePolicy::Merge => {
                        debug!(task = %task.title, "duplicate title; later entry replaces earlier one");
                        graph.nodes[id.0].source = pos;
                    }
                },
                None => {
                    let id = NodeId(graph.nodes.len());
                    graph.index.insert(task.title.clone(), id);
                    graph.nodes.push(DagNode {
                        title: task.title.clone(),
                        source: pos,
                        deps: Vec::new(),
                        dependents: Vec::new(),
                    });
                }
            }
        }
        graph.in_degree = vec![0; graph.nodes.len()];

        // Second pass: materialize edges prerequisite -> dependent.
        for id in 0..graph.nodes.len() {
            let task = &tasks[graph.nodes[id].source];
            for dep in task.dependencies.iter() {
                match graph.index.get(dep).copied() {
                    Some(dep_id) => {
                        graph.nodes[dep_id.0].dependents.push(NodeId(id));
                        graph.nodes[id].deps.push(dep_id);
                        graph.in_degree[id] += 1;
                        graph.edge_count += 1;
                    }
                    None => match options.unresolved {
                        UnresolvedPolicy::Ignore => {
                            warn!(
                                task = %task.title,
                                dependency = %dep,
                                "dependency not present in request; ignoring"
                            );
                            graph.dropped.push(DroppedReference {
                                task: task.title.clone(),
                                dependency: dep.clone(),
                            });
                        }
                        UnresolvedPolicy::Reject => {
                            return Err(TaskorderError::UnresolvedDependency {
                                task: task.title.clone(),
                                dependency: dep.clone(),
                            });
                        }
                    },
                }
            }
        }

        debug!(
            nodes = graph.nodes.len(),
            edges = graph.edge_count,
            dropped = graph.dropped.len(),
            "built dependency graph"
        );

        Ok(graph)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All titles in first-appearance order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.title.as_str())
    }

    /// All node ids in first-appearance order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    pub fn node_id(&self, title: &str) -> Option<NodeId> {
        self.index.get(title).copied()
    }

    pub fn title(&self, id: NodeId) -> &str {
        &self.nodes[id.0].title
    }

    /// Position in the request of the descriptor that defines `id`.
    pub fn source_index(&self, id: NodeId) -> usize {
        self.nodes[id.0].source
    }

    /// Initial in-degree, indexed by node.
    pub fn in_degrees(&self) -> &[usize] {
        &self.in_degree
    }

    pub fn in_degree_of(&self, title: &str) -> Option<usize> {
        self.node_id(title).map(|id| self.in_degree[id.0])
    }

    /// Nodes that depend on `id`, in edge insertion order.
    pub fn successors(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].dependents
    }

    /// Materialized prerequisites of `id`, in declaration order.
    pub fn predecessors(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].deps
    }

    /// Titles of the tasks that depend on `title`.
    pub fn successors_of(&self, title: &str) -> Vec<&str> {
        self.node_id(title)
            .map(|id| self.successors(id).iter().map(|&s| self.title(s)).collect())
            .unwrap_or_default()
    }

    /// Titles of the materialized prerequisites of `title`.
    pub fn dependencies_of(&self, title: &str) -> Vec<&str> {
        self.node_id(title)
            .map(|id| self.predecessors(id).iter().map(|&p| self.title(p)).collect())
            .unwrap_or_default()
    }

    /// Nodes with no materialized prerequisites, in first-appearance order.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.in_degree
            .iter()
            .enumerate()
            .filter(|(_, d)| **d == 0)
            .map(|(i, _)| NodeId(i))
    }

    /// Every materialized edge as `(prerequisite, dependent)`.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes.iter().enumerate().flat_map(|(i, n)| {
            n.dependents.iter().map(move |&d| (NodeId(i), d))
        })
    }

    /// References dropped under [`UnresolvedPolicy::Ignore`].
    pub fn dropped_references(&self) -> &[DroppedReference] {
        &self.dropped
    }
}
