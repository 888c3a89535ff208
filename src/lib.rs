// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod engine;
pub mod errors;
pub mod logging;
pub mod model;
pub mod types;

use std::fmt::Write as _;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::cli::{CliArgs, OutputFormat};
use crate::config::load_and_validate;
use crate::dag::DependencyGraph;
use crate::engine::ScheduleService;
use crate::model::ScheduleResponse;
use crate::types::ScheduleOptions;

pub use crate::engine::generate_schedule;
pub use crate::errors::{CycleReport, TaskorderError};
pub use crate::model::{ScheduleRequest, Task};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - request file loading + validation
/// - policy resolution (file `[config]`, then CLI overrides)
/// - graph building and ordering
/// - printing the result to stdout
pub fn run(args: CliArgs) -> Result<()> {
    let file = load_and_validate(&args.request, args.format.map(Into::into))
        .with_context(|| format!("loading request file {:?}", args.request))?;
    let options = resolve_options(file.options, &args);
    info!(
        tasks = file.request.tasks.len(),
        ?options,
        "loaded scheduling request"
    );

    let service = ScheduleService::new(options);

    if args.dry_run {
        let graph = service.graph(&file.request)?;
        print!("{}", render_dry_run(&file.request, &options, &graph)?);
        debug!("dry-run complete (no ordering)");
        return Ok(());
    }

    let response = service.generate(&file.request)?;
    print!("{}", render_order(&response, args.output)?);
    Ok(())
}

/// Apply CLI policy overrides on top of the file's `[config]` section.
pub fn resolve_options(file_options: ScheduleOptions, args: &CliArgs) -> ScheduleOptions {
    ScheduleOptions {
        unresolved: args.unresolved.unwrap_or(file_options.unresolved),
        duplicates: args.duplicates.unwrap_or(file_options.duplicates),
    }
}

/// Render a computed order for stdout.
pub fn render_order(response: &ScheduleResponse, output: OutputFormat) -> Result<String> {
    match output {
        OutputFormat::Text => {
            let mut out = String::new();
            for (i, title) in response.recommended_order.iter().enumerate() {
                writeln!(out, "{:>3}. {title}", i + 1)?;
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(response)?;
            out.push('\n');
            Ok(out)
        }
    }
}

/// Simple dry-run output: tasks, metadata, materialized dependencies and
/// dropped references.
pub fn render_dry_run(
    request: &ScheduleRequest,
    options: &ScheduleOptions,
    graph: &DependencyGraph,
) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "taskorder dry-run")?;
    writeln!(out, "  config.unresolved_dependencies = {:?}", options.unresolved)?;
    writeln!(out, "  config.duplicate_titles = {:?}", options.duplicates)?;
    writeln!(out)?;

    writeln!(
        out,
        "tasks ({}, {} edge(s)):",
        graph.node_count(),
        graph.edge_count()
    )?;
    for id in graph.node_ids() {
        let task = &request.tasks[graph.source_index(id)];
        writeln!(out, "  - {}", task.title)?;
        writeln!(out, "      estimated_hours: {}", task.estimated_hours)?;
        writeln!(out, "      due_date: {}", task.due_date)?;
        let deps = graph.dependencies_of(&task.title);
        if !deps.is_empty() {
            writeln!(out, "      after: {:?}", deps)?;
        }
        writeln!(out, "      in_degree: {}", graph.in_degrees()[id.index()])?;
    }

    let dropped = graph.dropped_references();
    if !dropped.is_empty() {
        writeln!(out)?;
        writeln!(out, "dropped references ({}):", dropped.len())?;
        for r in dropped {
            writeln!(out, "  - {} -> {}", r.task, r.dependency)?;
        }
    }

    Ok(out)
}
