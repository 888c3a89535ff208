// src/engine/service.rs

use tracing::{debug, info};

use crate::dag::{topological_titles, DependencyGraph};
use crate::errors::Result;
use crate::model::{ScheduleRequest, ScheduleResponse};
use crate::types::ScheduleOptions;

/// Computes a recommended execution order for a [`ScheduleRequest`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ScheduleService {
    options: ScheduleOptions,
}

impl ScheduleService {
    pub fn new(options: ScheduleOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ScheduleOptions {
        &self.options
    }

    /// Build the dependency graph for `request` without ordering it.
    pub fn graph(&self, request: &ScheduleRequest) -> Result<DependencyGraph> {
        DependencyGraph::build(&request.tasks, &self.options)
    }

    /// Order every task of `request` so that each comes after all of its
    /// prerequisites present in the request.
    ///
    /// Ties are broken by request order. Fails with `CycleDetected` when the
    /// materialized dependencies loop; no partial order is returned.
    pub fn generate(&self, request: &ScheduleRequest) -> Result<ScheduleResponse> {
        debug!(
            tasks = request.tasks.len(),
            unresolved = ?self.options.unresolved,
            duplicates = ?self.options.duplicates,
            "generating schedule"
        );

        let graph = self.graph(request)?;
        let recommended_order = topological_titles(&graph)?;

        info!(
            tasks = recommended_order.len(),
            edges = graph.edge_count(),
            "schedule generated"
        );

        Ok(ScheduleResponse { recommended_order })
    }
}

/// Convenience wrapper around [`ScheduleService::generate`].
pub fn generate_schedule(
    request: &ScheduleRequest,
    options: &ScheduleOptions,
) -> Result<ScheduleResponse> {
    ScheduleService::new(*options).generate(request)
}
