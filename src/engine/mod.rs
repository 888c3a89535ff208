// src/engine/mod.rs

//! Scheduling engine: one request in, one order (or cycle failure) out.
//!
//! [`service`] wires the graph builder and the sorter together behind
//! [`ScheduleService`]. Nothing here holds state between calls, so a single
//! service can be shared across threads freely.

pub mod service;

pub use service::{generate_schedule, ScheduleService};
