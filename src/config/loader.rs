// src/config/loader.rs

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::model::{RawRequestFile, RequestFile, RequestFormat};
use crate::errors::Result;

/// Parse request file contents in the given format.
///
/// Only deserialization happens here; see [`load_and_validate`] for the
/// structural checks.
pub fn load_from_str(contents: &str, format: RequestFormat) -> Result<RawRequestFile> {
    let raw: RawRequestFile = match format {
        RequestFormat::Toml => toml::from_str(contents)?,
        RequestFormat::Json => serde_json::from_str(contents)?,
    };
    Ok(raw)
}

/// Load a request file from a given path and return the raw `RawRequestFile`.
///
/// When `format` is `None` it is picked from the file extension.
pub fn load_from_path(path: impl AsRef<Path>, format: Option<RequestFormat>) -> Result<RawRequestFile> {
    let path = path.as_ref();
    let format = format.unwrap_or_else(|| RequestFormat::from_path(path));
    debug!(path = %path.display(), ?format, "loading request file");

    let contents = fs::read_to_string(path)?;
    load_from_str(&contents, format)
}

/// Load a request file from path and validate every task.
///
/// This is the recommended entry point for callers:
///
/// - Reads TOML or JSON.
/// - Applies policy defaults (handled by `serde` + `Default` impls).
/// - Checks every task for a non-empty title, positive effort and a due date.
pub fn load_and_validate(path: impl AsRef<Path>, format: Option<RequestFormat>) -> Result<RequestFile> {
    let raw = load_from_path(&path, format)?;
    let file = RequestFile::try_from(raw)?;
    Ok(file)
}
