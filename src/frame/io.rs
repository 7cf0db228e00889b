//! Reading node and edge tables from JSON or YAML files

use super::rows::{EdgeFrame, EdgeRow, NodeFrame, NodeRow};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading a table file
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported table format: {0} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),
}

/// Result type for table loading
pub type FrameResult<T> = Result<T, FrameError>;

/// Read a node table: an array of row objects
///
/// Every key other than `id`, `type` and `label` becomes a column, even
/// when all of its cells are `null`.
pub fn read_node_rows(path: &Path) -> FrameResult<NodeFrame> {
    let (columns, rows) = read_rows::<NodeRow>(path, &["id", "type", "label"])?;
    Ok(NodeFrame { columns, rows })
}

/// Read an edge table: an array of row objects
pub fn read_edge_rows(path: &Path) -> FrameResult<EdgeFrame> {
    let (columns, rows) = read_rows::<EdgeRow>(path, &["id", "from", "to", "rel"])?;
    Ok(EdgeFrame { columns, rows })
}

fn read_rows<T: DeserializeOwned>(
    path: &Path,
    reserved: &[&str],
) -> FrameResult<(Vec<String>, Vec<T>)> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    let cells: Vec<Map<String, Value>> = match extension.as_str() {
        "json" => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        "yaml" | "yml" => serde_yaml::from_str(&std::fs::read_to_string(path)?)?,
        _ => return Err(FrameError::UnsupportedFormat(path.display().to_string())),
    };

    let mut columns: Vec<String> = Vec::new();
    for key in cells.iter().flat_map(|row| row.keys()) {
        if !reserved.contains(&key.as_str()) && !columns.contains(key) {
            columns.push(key.clone());
        }
    }

    let rows = cells
        .into_iter()
        .map(|row| serde_json::from_value(Value::Object(row)))
        .collect::<Result<Vec<T>, _>>()?;
    Ok((columns, rows))
}
