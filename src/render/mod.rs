//! Chart output writers
//!
//! Three formats, picked by file extension:
//!
//! - **HTML**: the full standalone page with legend, tooltip, and hover
//!   script
//! - **SVG**: the tile canvas alone, for embedding
//! - **JSON**: the chart model, for programmatic consumption
//!
//! # Usage
//!
//! ```ignore
//! use treetile::render;
//!
//! // Picks the format from the extension; anything else gets HTML
//! render::generate("chart.html", &chart)?;
//! render::generate("chart.svg", &chart)?;
//! render::generate("chart.json", &chart)?;
//! ```

pub mod html;
pub mod json;
pub mod svg;

use crate::chart::Chart;
use crate::tooltip::format_value;
use std::io;
use std::path::Path;

/// Write a chart in the format matching the file extension.
pub fn generate<P: AsRef<Path>>(path: P, chart: &Chart) -> io::Result<()> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let mut file = std::fs::File::create(path)?;

    match ext.as_str() {
        "svg" => svg::write(&mut file, chart),
        "json" => json::write(&mut file, chart),
        _ => html::write(&mut file, chart),
    }
}

/// Escape text for element content and double-quoted attributes.
pub(crate) fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Numbers in markup render like the datasets carry them: integral values
/// without a decimal point.
pub(crate) fn num(value: f64) -> String {
    format_value(value)
}
