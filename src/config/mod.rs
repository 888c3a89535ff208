// src/config/mod.rs

//! Request file loading and validation.
//!
//! Responsibilities:
//! - Define the file-backed data model (`model.rs`).
//! - Load a TOML or JSON request file from disk (`loader.rs`).
//! - Validate the structural invariants of each task (`validate.rs`).
//!
//! Graph shape (cycles, unresolved references) is left to the engine.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, load_from_str};
pub use model::{RawRequestFile, RequestFile, RequestFormat};
pub use validate::validate_task;
