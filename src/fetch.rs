//! Dataset loading
//!
//! Remote datasets arrive over HTTP as JSON ([`dataset`]); local files go
//! through [`file`] for offline use. Both return the raw wire shape; the
//! tree boundary validates it separately.

use crate::dataset::Dataset;
use crate::tree::RawNode;
use anyhow::{Context, Result};
use std::path::Path;

/// Download and decode a dataset's JSON tree. Non-success HTTP statuses are
/// errors, not empty charts.
pub fn dataset(dataset: &Dataset) -> Result<RawNode> {
    let response = reqwest::blocking::get(dataset.url)
        .and_then(|r| r.error_for_status())
        .with_context(|| format!("fetching {}", dataset.url))?;
    response
        .json::<RawNode>()
        .with_context(|| format!("decoding {}", dataset.url))
}

/// Load a dataset tree from a local JSON file.
pub fn file<P: AsRef<Path>>(path: P) -> Result<RawNode> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("decoding {}", path.display()))
}
