//! Squarified treemap tiling
//!
//! Partitions a fixed canvas into one rectangle per leaf, with areas
//! proportional to aggregated weight.
//!
//! # How the Tiling Works
//!
//! Children of a node are consumed in their sorted order and grouped into
//! rows. A row is laid along the shorter side of the remaining free
//! rectangle and absorbs children while doing so improves the worst aspect
//! ratio in the row, measured against a golden-ratio target. Once a child
//! would make the row worse, the row is frozen:
//!
//! - **dice**: the free rectangle is wider than tall → the row becomes a
//!   horizontal strip, children side by side along x
//! - **slice**: taller than wide → vertical strip, children stacked along y
//!
//! The strip thickness is `remaining extent * row weight / remaining
//! weight`, so every child's area ends up `canvas area * weight / total`.
//!
//! # Inner Padding
//!
//! `padding_inner` separates adjacent siblings by a fixed gap while keeping
//! outer edges flush with the parent: the tiling region of an internal node
//! is expanded by half the gap on all sides, and every child rectangle is
//! shrunk by the same half gap. Two adjacent children therefore sit exactly
//! `padding_inner` apart, and a child on the parent's boundary lands back on
//! the boundary.
//!
//! Rectangles never get negative extents: a shrink past zero collapses the
//! rectangle to its midpoint. A subtree with zero total weight collapses to
//! degenerate rectangles rather than erroring.

use crate::hierarchy::{Hierarchy, WeightedNode};
use serde::Serialize;

/// Golden ratio, the aspect-ratio target for rows.
const RATIO: f64 = 1.618033988749895;

/// Axis-aligned rectangle as two corners, matching the drawing convention
/// (`x1 >= x0`, `y1 >= y0`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Rect {
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Half-open containment: a point on the right/bottom edge belongs to
    /// the next tile over, so adjacent tiles never both claim a point.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x0 && x < self.x1 && y >= self.y0 && y < self.y1
    }

    /// Grow by `d` on every side (negative `d` shrinks). Inverted extents
    /// collapse to the midpoint.
    fn inset(&self, d: f64) -> Rect {
        let mut r = Rect {
            x0: self.x0 - d,
            y0: self.y0 - d,
            x1: self.x1 + d,
            y1: self.y1 + d,
        };
        if r.x1 < r.x0 {
            let mid = (r.x0 + r.x1) / 2.0;
            r.x0 = mid;
            r.x1 = mid;
        }
        if r.y1 < r.y0 {
            let mid = (r.y0 + r.y1) / 2.0;
            r.y0 = mid;
            r.y1 = mid;
        }
        r
    }

    fn collapsed(x: f64, y: f64) -> Rect {
        Rect { x0: x, y0: y, x1: x, y1: y }
    }
}

/// Treemap layout configuration: canvas size plus sibling gap.
#[derive(Debug, Clone)]
pub struct TreemapLayout {
    width: f64,
    height: f64,
    padding_inner: f64,
}

impl TreemapLayout {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            padding_inner: 0.0,
        }
    }

    pub fn with_padding_inner(mut self, padding: f64) -> Self {
        self.padding_inner = padding;
        self
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Compute one rectangle per leaf, in the same order as
    /// [`Hierarchy::leaves`].
    pub fn layout(&self, hierarchy: &Hierarchy) -> Vec<Rect> {
        let mut out = Vec::with_capacity(hierarchy.leaves().len());
        let canvas = Rect {
            x0: 0.0,
            y0: 0.0,
            x1: self.width,
            y1: self.height,
        };
        self.layout_node(hierarchy.root(), canvas, &mut out);
        out
    }

    fn layout_node(&self, node: &WeightedNode, rect: Rect, out: &mut Vec<Rect>) {
        if node.is_leaf() {
            out.push(rect);
            return;
        }

        let half = self.padding_inner / 2.0;
        let region = rect.inset(half);
        let child_rects = squarify(&node.children, node.weight, region);

        for (child, r) in node.children.iter().zip(child_rects) {
            self.layout_node(child, r.inset(-half), out);
        }
    }
}

/// One squarified pass over a sibling list. Returns a rectangle per child,
/// index-aligned with `nodes`.
fn squarify(nodes: &[WeightedNode], total: f64, region: Rect) -> Vec<Rect> {
    let n = nodes.len();
    let mut rects = vec![Rect::collapsed(region.x0, region.y0); n];

    let mut x0 = region.x0;
    let mut y0 = region.y0;
    let x1 = region.x1;
    let y1 = region.y1;
    let mut value = total;
    let mut i0 = 0;

    while i0 < n {
        if value <= 0.0 {
            for rect in rects.iter_mut().take(n).skip(i0) {
                *rect = Rect::collapsed(x0, y0);
            }
            break;
        }

        let dx = x1 - x0;
        let dy = y1 - y0;

        // Start the row at the next node with weight, carrying any leading
        // zero-weight nodes along in the same row.
        let mut i1 = i0;
        let mut sum = 0.0;
        loop {
            sum = nodes[i1].weight;
            i1 += 1;
            if sum > 0.0 || i1 >= n {
                break;
            }
        }

        if sum <= 0.0 {
            // Only zero-weight nodes remain.
            for rect in rects.iter_mut().take(n).skip(i0) {
                *rect = Rect::collapsed(x0, y0);
            }
            break;
        }

        let mut min_v = sum;
        let mut max_v = sum;
        let alpha = (dy / dx).max(dx / dy) / (value * RATIO);
        let mut beta = sum * sum * alpha;
        let mut worst = (max_v / beta).max(beta / min_v);

        // Absorb children while the worst aspect ratio in the row improves.
        while i1 < n {
            let v = nodes[i1].weight;
            let next_sum = sum + v;
            let next_min = min_v.min(v);
            let next_max = max_v.max(v);
            beta = next_sum * next_sum * alpha;
            let next_worst = if next_min > 0.0 {
                (next_max / beta).max(beta / next_min)
            } else {
                f64::INFINITY
            };
            if next_worst > worst {
                break;
            }
            sum = next_sum;
            min_v = next_min;
            max_v = next_max;
            worst = next_worst;
            i1 += 1;
        }

        // Freeze the row as a strip along the shorter free side.
        if dx < dy {
            let strip_y1 = y0 + dy * sum / value;
            dice(&nodes[i0..i1], sum, x0, y0, x1, strip_y1, &mut rects[i0..i1]);
            y0 = strip_y1;
        } else {
            let strip_x1 = x0 + dx * sum / value;
            slice(&nodes[i0..i1], sum, x0, y0, strip_x1, y1, &mut rects[i0..i1]);
            x0 = strip_x1;
        }

        value -= sum;
        i0 = i1;
    }

    rects
}

/// Lay a row side by side along x.
fn dice(nodes: &[WeightedNode], sum: f64, x0: f64, y0: f64, x1: f64, y1: f64, out: &mut [Rect]) {
    let k = if sum > 0.0 { (x1 - x0) / sum } else { 0.0 };
    let mut x = x0;
    for (node, rect) in nodes.iter().zip(out.iter_mut()) {
        let next = x + node.weight * k;
        *rect = Rect { x0: x, y0, x1: next, y1 };
        x = next;
    }
}

/// Stack a row along y.
fn slice(nodes: &[WeightedNode], sum: f64, x0: f64, y0: f64, x1: f64, y1: f64, out: &mut [Rect]) {
    let k = if sum > 0.0 { (y1 - y0) / sum } else { 0.0 };
    let mut y = y0;
    for (node, rect) in nodes.iter().zip(out.iter_mut()) {
        let next = y + node.weight * k;
        *rect = Rect { x0, y0: y, x1, y1: next };
        y = next;
    }
}
