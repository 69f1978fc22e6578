//! Loading and exporting content tables.
//!
//! Tables on disk use the same shape renderers consume:
//!
//! ```json
//! { "intro": [ { "title": "Welcome" }, { "title": "Agenda", "ul": ["a", "b"] } ] }
//! ```
//!
//! TOML files express each topic as an array of tables (`[[intro]]`).
//! Everything loaded is validated before it is returned.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use lectern_core::{Error, Result};

use crate::slide::Slide;
use crate::table::ContentTable;

/// File extensions the loader understands.
pub const SUPPORTED_EXTENSIONS: [&str; 2] = ["json", "toml"];

impl ContentTable {
    /// Parse and validate a JSON content table.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let topics: BTreeMap<String, Vec<Slide>> = serde_json::from_str(s)
            .map_err(|e| Error::serialization(format!("invalid JSON content: {e}")))?;
        Self::from_map(topics)
    }

    /// Parse and validate a TOML content table.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let topics: BTreeMap<String, Vec<Slide>> = toml::from_str(s)
            .map_err(|e| Error::serialization(format!("invalid TOML content: {e}")))?;
        Self::from_map(topics)
    }

    /// Export as a JSON value in the renderer shape.
    pub fn to_json_value(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| Error::serialization(e.to_string()))
    }

    /// Export as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::serialization(e.to_string()))
    }
}

/// Load a single content file, choosing the format from its extension.
pub fn load_file(path: &Path) -> Result<ContentTable> {
    let parse: fn(&str) -> Result<ContentTable> = match content_extension(path).as_deref() {
        Some("json") => ContentTable::from_json_str,
        Some("toml") => ContentTable::from_toml_str,
        _ => {
            return Err(Error::invalid_data(format!(
                "unsupported content file {} (expected .json or .toml)",
                path.display()
            )));
        }
    };

    let text = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
    let table = parse(&text).map_err(|e| with_file_context(e, path))?;
    log::debug!(
        "Loaded {} topic(s) from {}",
        table.len(),
        path.display()
    );
    Ok(table)
}

/// Load and merge every `*.json` and `*.toml` file directly inside `dir`.
///
/// Files are read in path order. A topic defined in two files is an error,
/// as is a directory with no content files.
pub fn load_dir(dir: &Path) -> Result<ContentTable> {
    let files = content_files(dir)?;
    if files.is_empty() {
        return Err(Error::invalid_data(format!(
            "no content files found in {}",
            dir.display()
        )));
    }

    let mut table = ContentTable::default();
    for file in &files {
        let loaded = load_file(file)?;
        table = table.merge(loaded).map_err(|e| with_file_context(e, file))?;
    }

    log::info!(
        "Loaded {} topic(s) from {} file(s) in {}",
        table.len(),
        files.len(),
        dir.display()
    );
    Ok(table)
}

/// Load a file or a directory of files.
pub fn load_path(path: &Path) -> Result<ContentTable> {
    if path.is_dir() {
        load_dir(path)
    } else {
        load_file(path)
    }
}

/// List content files in `dir`, sorted by path.
///
/// Extensions match case-insensitively, the same way [`load_file`] picks a
/// format, so `INTRO.JSON` is listed and loaded.
pub fn content_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::io_with_path(
            std::io::Error::new(std::io::ErrorKind::NotFound, "not a directory"),
            dir,
        ));
    }

    let pattern = format!("{}/*", glob::Pattern::escape(&dir.to_string_lossy()));
    let paths = glob::glob(&pattern).map_err(|e| {
        Error::invalid_data(format!("bad content directory {}: {e}", dir.display()))
    })?;

    let mut files = Vec::new();
    for entry in paths {
        match entry {
            Ok(path) if path.is_file() && content_extension(&path).is_some() => files.push(path),
            Ok(_) => {}
            Err(e) => log::warn!("Skipping unreadable entry: {e}"),
        }
    }
    files.sort();
    Ok(files)
}

/// The lowercased extension of `path`, if it is one the loader reads.
fn content_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .filter(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
}

fn with_file_context(err: Error, path: &Path) -> Error {
    match err {
        Error::InvalidData(msg) => Error::InvalidData(format!("{}: {msg}", path.display())),
        Error::Serialization(msg) => Error::Serialization(format!("{}: {msg}", path.display())),
        other => other,
    }
}
