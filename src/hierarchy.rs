//! Weighted hierarchy construction
//!
//! Takes a validated [`Node`](crate::tree::Node) tree and computes the
//! quantities the tiling step needs:
//!
//! 1. **weight**: every node's weight is the sum of its descendant leaf
//!    values (a leaf's weight is its own value)
//! 2. **height**: edge count to the deepest leaf below (leaves are 0)
//! 3. **sibling order**: children sorted by height descending, then weight
//!    descending
//!
//! The sort is applied once at build time and is stable, so ties keep their
//! input order and identical input always produces identical visual order.

use crate::tree::Node;

/// A node annotated with aggregate weight and subtree height. Leaves carry
/// their category and value; internal nodes only aggregate.
#[derive(Debug, Clone)]
pub struct WeightedNode {
    pub name: String,
    pub weight: f64,
    pub height: u32,
    pub children: Vec<WeightedNode>,
    pub leaf: Option<LeafData>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeafData {
    pub category: String,
    pub value: f64,
}

impl WeightedNode {
    pub fn is_leaf(&self) -> bool {
        self.leaf.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct Hierarchy {
    root: WeightedNode,
}

impl Hierarchy {
    pub fn build(node: &Node) -> Hierarchy {
        Hierarchy { root: weigh(node) }
    }

    pub fn root(&self) -> &WeightedNode {
        &self.root
    }

    /// Total aggregated weight (sum of all leaf values).
    pub fn total_weight(&self) -> f64 {
        self.root.weight
    }

    /// All leaves in preorder, i.e. the order the treemap will draw them in.
    pub fn leaves(&self) -> Vec<&WeightedNode> {
        let mut out = Vec::new();
        collect_leaves(&self.root, &mut out);
        out
    }
}

fn weigh(node: &Node) -> WeightedNode {
    match node {
        Node::Leaf { name, category, value } => WeightedNode {
            name: name.clone(),
            weight: *value,
            height: 0,
            children: Vec::new(),
            leaf: Some(LeafData {
                category: category.clone(),
                value: *value,
            }),
        },
        Node::Internal { name, children } => {
            let mut children: Vec<WeightedNode> = children.iter().map(weigh).collect();
            let weight = children.iter().map(|c| c.weight).sum();
            let height = children.iter().map(|c| c.height).max().unwrap_or(0) + 1;

            // Taller subtrees first, heavier subtrees first within a height.
            // Stable sort, so equal (height, weight) pairs keep input order.
            children.sort_by(|a, b| {
                b.height
                    .cmp(&a.height)
                    .then(b.weight.partial_cmp(&a.weight).unwrap_or(std::cmp::Ordering::Equal))
            });

            WeightedNode {
                name: name.clone(),
                weight,
                height,
                children,
                leaf: None,
            }
        }
    }
}

fn collect_leaves<'a>(node: &'a WeightedNode, out: &mut Vec<&'a WeightedNode>) {
    if node.is_leaf() {
        out.push(node);
        return;
    }
    for child in &node.children {
        collect_leaves(child, out);
    }
}
