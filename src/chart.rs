//! Chart assembly and hit testing
//!
//! [`Chart`] is the render-session context: one immutable value holding the
//! dataset descriptor, canvas size, positioned tiles, and legend. Renderers
//! and event handlers receive it explicitly instead of reading page-level
//! state, so several charts can coexist in one process and hover behavior
//! is testable without a rendering surface.

use crate::color::ColorScale;
use crate::dataset::Dataset;
use crate::hierarchy::Hierarchy;
use crate::layout::{Rect, TreemapLayout};
use crate::legend::Legend;
use crate::tree::Node;
use serde::Serialize;

/// Canvas geometry for one chart.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    pub padding_inner: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 570.0,
            padding_inner: 1.0,
        }
    }
}

/// One positioned leaf: everything a renderer needs to draw it.
#[derive(Debug, Clone, Serialize)]
pub struct Tile {
    pub name: String,
    pub category: String,
    pub value: f64,
    pub rect: Rect,
    pub color: String,
    /// Name split at word boundaries for multi-line labels inside the tile.
    pub label_lines: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Chart {
    pub dataset: Dataset,
    pub width: f64,
    pub height: f64,
    pub tiles: Vec<Tile>,
    pub legend: Legend,
}

impl Chart {
    /// Run the full pipeline on a validated tree: weigh, sort, tile, color,
    /// and lay out the legend.
    pub fn build(dataset: &Dataset, root: &Node, config: &ChartConfig) -> Chart {
        let hierarchy = Hierarchy::build(root);
        let rects = TreemapLayout::new(config.width, config.height)
            .with_padding_inner(config.padding_inner)
            .layout(&hierarchy);

        let mut scale = ColorScale::new();
        let mut tiles = Vec::with_capacity(rects.len());
        for (leaf, rect) in hierarchy.leaves().into_iter().zip(rects) {
            let Some(data) = &leaf.leaf else { continue };
            tiles.push(Tile {
                name: leaf.name.clone(),
                category: data.category.clone(),
                value: data.value,
                rect,
                color: scale.color_for(&data.category),
                label_lines: split_label(&leaf.name),
            });
        }

        Chart {
            dataset: dataset.clone(),
            width: config.width,
            height: config.height,
            legend: Legend::build(scale.mapping()),
            tiles,
        }
    }

    /// Tile under the given canvas point, if any. Gaps between tiles (the
    /// inner padding) belong to no tile.
    pub fn tile_at(&self, x: f64, y: f64) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.rect.contains(x, y))
    }
}

/// Split a name before each capital that starts a new word, so long names
/// wrap inside their rectangle: "DonkeyKong" becomes "Donkey", "Kong",
/// while runs of capitals ("UNICEF") stay together. A trailing space stays
/// with the word before it, matching the charted datasets.
pub fn split_label(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    let mut lines = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        let starts_word = i > 0
            && c.is_ascii_uppercase()
            && chars.get(i + 1).is_some_and(|n| !n.is_ascii_uppercase());
        if starts_word && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        current.push(c);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset;
    use crate::tooltip::{Tooltip, TooltipState};
    use crate::tree::Node;

    // ==========================================================================
    // CHART ASSEMBLY TESTS
    // ==========================================================================
    //
    // Chart::build wires hierarchy, layout, colors, and legend together; the
    // end-to-end hover scenario drives tile_at + the tooltip machine the way
    // a rendering surface would.
    // ==========================================================================

    fn leaf(name: &str, category: &str, value: f64) -> Node {
        Node::Leaf {
            name: name.to_string(),
            category: category.to_string(),
            value,
        }
    }

    fn two_leaf_chart() -> Chart {
        let root = Node::Internal {
            name: "root".to_string(),
            children: vec![leaf("A", "games", 30.0), leaf("B", "games", 70.0)],
        };
        let config = ChartConfig {
            width: 100.0,
            height: 100.0,
            padding_inner: 0.0,
        };
        Chart::build(dataset::select(None), &root, &config)
    }

    #[test]
    fn test_two_leaf_areas_in_weight_ratio() {
        let chart = two_leaf_chart();
        assert_eq!(chart.tiles.len(), 2);

        // Sorted order draws B (70) first.
        let b = &chart.tiles[0];
        let a = &chart.tiles[1];
        assert_eq!(b.name, "B");
        assert_eq!(a.name, "A");
        assert!((a.rect.area() / b.rect.area() - 3.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_one_category_one_legend_entry() {
        let chart = two_leaf_chart();
        assert_eq!(chart.legend.entries.len(), 1);
        assert_eq!(chart.legend.entries[0].category, "games");
        assert_eq!(chart.legend.entries[0].color, chart.tiles[0].color);
    }

    #[test]
    fn test_tiles_in_same_category_share_color() {
        let chart = two_leaf_chart();
        assert_eq!(chart.tiles[0].color, chart.tiles[1].color);
    }

    #[test]
    fn test_tile_at_hits_and_misses() {
        let chart = two_leaf_chart();
        // The canvas is fully covered at zero padding, so every interior
        // point hits a tile; outside the canvas nothing does.
        assert!(chart.tile_at(50.0, 50.0).is_some());
        assert!(chart.tile_at(-1.0, 50.0).is_none());
        assert!(chart.tile_at(50.0, 200.0).is_none());
    }

    #[test]
    fn test_padding_gap_belongs_to_no_tile() {
        let root = Node::Internal {
            name: "root".to_string(),
            children: vec![leaf("A", "c", 50.0), leaf("B", "c", 50.0)],
        };
        let config = ChartConfig {
            width: 100.0,
            height: 100.0,
            padding_inner: 2.0,
        };
        let chart = Chart::build(dataset::select(None), &root, &config);

        // Equal weights split the square down the middle; the midline sits
        // inside the gap.
        assert!(chart.tile_at(50.0, 50.0).is_none());
    }

    #[test]
    fn test_hover_scenario_end_to_end() {
        let chart = two_leaf_chart();
        let mut tip = Tooltip::new();

        // Find where tile A actually landed and hover its center.
        let a = chart
            .tiles
            .iter()
            .find(|t| t.name == "A")
            .expect("tile A exists");
        let (cx, cy) = ((a.rect.x0 + a.rect.x1) / 2.0, (a.rect.y0 + a.rect.y1) / 2.0);

        let hit = chart.tile_at(cx, cy).expect("center of A hits A");
        assert_eq!(hit.name, "A");

        tip.pointer_enter(&hit.name, &hit.category, hit.value, cx, cy);
        match tip.state() {
            TooltipState::Visible { content, .. } => {
                assert!(content.contains("A"));
                assert!(content.contains("games"));
                assert!(content.contains("30"));
            }
            TooltipState::Hidden => panic!("tooltip should be visible over a tile"),
        }

        tip.pointer_leave();
        assert!(!tip.is_visible());
    }

    #[test]
    fn test_default_config_matches_page_canvas() {
        let config = ChartConfig::default();
        assert_eq!(config.width, 960.0);
        assert_eq!(config.height, 570.0);
        assert_eq!(config.padding_inner, 1.0);
    }

    #[test]
    fn test_chart_carries_dataset_descriptor() {
        let chart = two_leaf_chart();
        assert_eq!(chart.dataset.title, "Video Game Sales");
    }

    // ==========================================================================
    // LABEL SPLITTING TESTS
    // ==========================================================================

    #[test]
    fn test_split_label_camel_case() {
        assert_eq!(split_label("DonkeyKong"), vec!["Donkey", "Kong"]);
    }

    #[test]
    fn test_split_label_keeps_spaces_with_preceding_word() {
        assert_eq!(split_label("Wii Sports"), vec!["Wii ", "Sports"]);
    }

    #[test]
    fn test_split_label_capital_runs_stay_together() {
        assert_eq!(split_label("UNICEF"), vec!["UNICEF"]);
        assert_eq!(split_label("ABCdef"), vec!["AB", "Cdef"]);
    }

    #[test]
    fn test_split_label_no_capitals() {
        assert_eq!(split_label("minecraft"), vec!["minecraft"]);
    }

    #[test]
    fn test_split_label_single_word() {
        assert_eq!(split_label("Tetris"), vec!["Tetris"]);
    }

    #[test]
    fn test_split_label_empty() {
        assert!(split_label("").is_empty());
    }
}
