//! Dataset tree parsing and validation
//!
//! The wire format is a nested JSON tree where internal nodes carry `name`
//! and `children`, and leaves carry `name`, `category`, and `value`:
//!
//! ```text
//! {
//!   "name": "Video Game Sales",
//!   "children": [
//!     { "name": "Wii", "children": [
//!       { "name": "Wii Sports", "category": "Wii", "value": 82.53 },
//!       ...
//!     ]},
//!     ...
//!   ]
//! }
//! ```
//!
//! Everything is optional on the wire ([`RawNode`]), so a malformed dataset
//! can't be told apart from a valid one by shape alone. [`RawNode::validate`]
//! converts the raw tree into the tagged [`Node`] variant at the boundary,
//! rejecting leaves without a category, negative or non-finite values, and
//! nodes that are neither internal nor leaf. Layout math only ever sees a
//! validated tree.

use anyhow::{bail, Result};
use serde::Deserialize;

/// Node shape as it appears on the wire. All fields beyond `name` are
/// optional until validated.
#[derive(Debug, Clone, Deserialize)]
pub struct RawNode {
    pub name: String,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub value: Option<f64>,

    #[serde(default)]
    pub children: Option<Vec<RawNode>>,
}

/// Validated dataset tree. The discriminator is explicit: a node is either
/// an aggregate of children or a leaf with a category and value, never both.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Internal { name: String, children: Vec<Node> },
    Leaf { name: String, category: String, value: f64 },
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::Internal { name, .. } => name,
            Node::Leaf { name, .. } => name,
        }
    }

    /// Count of leaves in this subtree.
    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { children, .. } => children.iter().map(Node::leaf_count).sum(),
        }
    }
}

impl RawNode {
    /// Validate the raw tree into the tagged form.
    ///
    /// Rules:
    /// - a node with `children` is internal; `category`/`value` on an
    ///   internal node are rejected (ambiguous weight)
    /// - a node with `value` is a leaf and must also carry `category`
    /// - leaf values must be finite and non-negative
    /// - internal nodes must have at least one child
    pub fn validate(&self) -> Result<Node> {
        match (&self.children, self.value) {
            (Some(children), None) => {
                if children.is_empty() {
                    bail!("internal node '{}' has no children", self.name);
                }
                if self.category.is_some() {
                    bail!("internal node '{}' carries a category", self.name);
                }
                let children = children
                    .iter()
                    .map(RawNode::validate)
                    .collect::<Result<Vec<_>>>()?;
                Ok(Node::Internal {
                    name: self.name.clone(),
                    children,
                })
            }
            (None, Some(value)) => {
                if !value.is_finite() {
                    bail!("leaf '{}' has non-finite value", self.name);
                }
                if value < 0.0 {
                    bail!("leaf '{}' has negative value {}", self.name, value);
                }
                let Some(category) = &self.category else {
                    bail!("leaf '{}' is missing a category", self.name);
                };
                Ok(Node::Leaf {
                    name: self.name.clone(),
                    category: category.clone(),
                    value,
                })
            }
            (Some(_), Some(_)) => {
                bail!("node '{}' has both children and a value", self.name)
            }
            (None, None) => {
                bail!("node '{}' has neither children nor a value", self.name)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // TREE VALIDATION TESTS
    // ==========================================================================
    //
    // The wire format is fully optional; validate() is the only gate between
    // remote JSON and layout math, so every malformed shape must be rejected
    // here rather than surfacing as zero-area rectangles downstream.
    // ==========================================================================

    fn leaf(name: &str, category: &str, value: f64) -> RawNode {
        RawNode {
            name: name.to_string(),
            category: Some(category.to_string()),
            value: Some(value),
            children: None,
        }
    }

    fn internal(name: &str, children: Vec<RawNode>) -> RawNode {
        RawNode {
            name: name.to_string(),
            category: None,
            value: None,
            children: Some(children),
        }
    }

    #[test]
    fn test_valid_two_level_tree() {
        let raw = internal("root", vec![leaf("A", "Wii", 30.0), leaf("B", "Wii", 70.0)]);
        let node = raw.validate().unwrap();

        match node {
            Node::Internal { ref name, ref children } => {
                assert_eq!(name, "root");
                assert_eq!(children.len(), 2);
            }
            Node::Leaf { .. } => panic!("root should be internal"),
        }
        assert_eq!(node.leaf_count(), 2);
    }

    #[test]
    fn test_leaf_missing_category_rejected() {
        let raw = RawNode {
            name: "A".to_string(),
            category: None,
            value: Some(30.0),
            children: None,
        };
        let err = raw.validate().unwrap_err();
        assert!(err.to_string().contains("missing a category"));
    }

    #[test]
    fn test_negative_value_rejected() {
        let err = leaf("A", "Wii", -1.0).validate().unwrap_err();
        assert!(err.to_string().contains("negative value"));
    }

    #[test]
    fn test_non_finite_value_rejected() {
        assert!(leaf("A", "Wii", f64::NAN).validate().is_err());
        assert!(leaf("A", "Wii", f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_zero_value_leaf_allowed() {
        // Zero weight is legal; it tiles to a degenerate rectangle, not an error.
        assert!(leaf("A", "Wii", 0.0).validate().is_ok());
    }

    #[test]
    fn test_empty_internal_rejected() {
        let err = internal("root", vec![]).validate().unwrap_err();
        assert!(err.to_string().contains("no children"));
    }

    #[test]
    fn test_both_children_and_value_rejected() {
        let raw = RawNode {
            name: "X".to_string(),
            category: None,
            value: Some(1.0),
            children: Some(vec![leaf("A", "Wii", 1.0)]),
        };
        assert!(raw.validate().is_err());
    }

    #[test]
    fn test_neither_children_nor_value_rejected() {
        let raw = RawNode {
            name: "X".to_string(),
            category: None,
            value: None,
            children: None,
        };
        assert!(raw.validate().is_err());
    }

    #[test]
    fn test_nested_error_carries_leaf_name() {
        let raw = internal("root", vec![internal("mid", vec![leaf("bad", "Wii", -5.0)])]);
        let err = raw.validate().unwrap_err();
        assert!(err.to_string().contains("bad"));
    }

    #[test]
    fn test_deserialize_wire_shape() {
        let json = r#"{
            "name": "root",
            "children": [
                { "name": "A", "category": "Wii", "value": 30 },
                { "name": "B", "category": "Wii", "value": 70 }
            ]
        }"#;
        let raw: RawNode = serde_json::from_str(json).unwrap();
        let node = raw.validate().unwrap();
        assert_eq!(node.leaf_count(), 2);
    }
}
