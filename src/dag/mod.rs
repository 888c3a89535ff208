// src/dag/mod.rs

//! Dependency graph construction and ordering.
//!
//! - [`graph`] turns an ordered task list into an index-addressed graph with
//!   per-node successor lists and in-degrees.
//! - [`sorter`] linearizes that graph with Kahn's algorithm and localizes
//!   cycles when no complete order exists.

pub mod graph;
pub mod sorter;

pub use graph::{DependencyGraph, DroppedReference, NodeId};
pub use sorter::{topological_order, topological_titles};
