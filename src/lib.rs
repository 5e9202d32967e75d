//! Treetile - Render treemap charts of hierarchical category data
//!
//! Treetile turns a nested JSON tree of categorized values (video game
//! sales, movie grosses, kickstarter pledges) into a treemap: one rectangle
//! per leaf, area proportional to value, colored by category, with a legend
//! and a hover tooltip. The whole chart is computed natively and written
//! out as a standalone HTML page, a bare SVG, or the chart model as JSON.
//!
//! # Pipeline
//!
//! 1. **Select**: pick a dataset descriptor by key; unknown keys fall back
//!    to the default ([`dataset`])
//! 2. **Fetch**: download the dataset JSON, or read it from disk ([`fetch`])
//! 3. **Validate**: turn the raw wire shape into a tagged tree, rejecting
//!    malformed nodes at the boundary ([`tree`])
//! 4. **Weigh**: sum leaf values bottom-up and fix the sibling order
//!    ([`hierarchy`])
//! 5. **Tile**: squarified layout onto the canvas ([`layout`])
//! 6. **Color**: ordinal palette per category ([`color`]), legend to match
//!    ([`legend`])
//! 7. **Render**: assemble ([`chart`]) and write ([`render`])
//!
//! # Quick Start
//!
//! ```no_run
//! use treetile::{dataset, fetch, Chart, ChartConfig};
//!
//! let ds = dataset::select(Some("movie"));
//! let root = fetch::dataset(ds)?.validate()?;
//! let chart = Chart::build(ds, &root, &ChartConfig::default());
//!
//! treetile::render::generate("movies.html", &chart)?;
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! # Modules
//!
//! - [`chart`]: render-session context tying the pieces together
//! - [`layout`]: the squarified tiling algorithm
//! - [`tooltip`]: the hover state machine, testable without a DOM
//! - [`serve`]: interactive mode rendering charts per HTTP request
//! - [`render`]: output writers (HTML, SVG, JSON)

pub mod chart;
pub mod color;
pub mod dataset;
pub mod fetch;
pub mod hierarchy;
pub mod layout;
pub mod legend;
pub mod render;
pub mod serve;
pub mod tooltip;
pub mod tree;

pub use chart::{Chart, ChartConfig, Tile};
pub use dataset::Dataset;
pub use hierarchy::Hierarchy;
pub use layout::{Rect, TreemapLayout};
pub use legend::Legend;
pub use tooltip::{Tooltip, TooltipState};
pub use tree::{Node, RawNode};

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // PUBLIC API TESTS
    // ==========================================================================
    //
    // These tests verify the public API surface is correct and documented.
    // ==========================================================================

    #[test]
    fn test_public_exports() {
        // Verify core types are re-exported from crate root
        let _: TooltipState = TooltipState::Hidden;
        let _tooltip = Tooltip::new();
        let _config = ChartConfig::default();
        let _layout = TreemapLayout::new(960.0, 570.0);
    }

    #[test]
    fn test_dataset_table_accessible() {
        // Selection should be reachable from the crate root
        let ds: &Dataset = dataset::select(None);
        assert_eq!(ds.key, dataset::DEFAULT_KEY);
    }

    #[test]
    fn test_chart_builds_from_validated_tree() {
        let raw: RawNode = serde_json::from_str(
            r#"{"name":"root","children":[
                {"name":"A","category":"c","value":30},
                {"name":"B","category":"c","value":70}
            ]}"#,
        )
        .unwrap();
        let root = raw.validate().unwrap();
        let chart = Chart::build(dataset::select(None), &root, &ChartConfig::default());
        assert_eq!(chart.tiles.len(), 2);
    }
}
