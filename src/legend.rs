//! Legend panel layout
//!
//! One entry per distinct leaf category, in order of first appearance among
//! the drawn tiles, each with the same color its tiles use. Entries flow
//! into a grid of three columns; the panel height follows the row count.

use serde::Serialize;

pub const SWATCH_SIZE: f64 = 15.0;
pub const COLUMN_SPACING: f64 = 150.0;
pub const ROW_SPACING: f64 = 10.0;
pub const LABELS_PER_ROW: usize = 3;

#[derive(Debug, Clone, Serialize)]
pub struct LegendEntry {
    pub category: String,
    pub color: String,
    /// Swatch position within the legend panel.
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Legend {
    pub entries: Vec<LegendEntry>,
    /// Panel height for the computed row count.
    pub height: f64,
}

impl Legend {
    /// Build from `(category, color)` pairs already in first-appearance
    /// order (the [`ColorScale`](crate::color::ColorScale) mapping).
    pub fn build(mapping: &[(String, String)]) -> Legend {
        let entries = mapping
            .iter()
            .enumerate()
            .map(|(i, (category, color))| LegendEntry {
                category: category.clone(),
                color: color.clone(),
                x: (i % LABELS_PER_ROW) as f64 * COLUMN_SPACING,
                y: (i / LABELS_PER_ROW) as f64 * (SWATCH_SIZE + ROW_SPACING),
            })
            .collect::<Vec<_>>();

        let rows = entries.len().div_ceil(LABELS_PER_ROW);
        Legend {
            entries,
            height: rows as f64 * (SWATCH_SIZE + ROW_SPACING),
        }
    }
}
