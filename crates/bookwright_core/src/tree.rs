//! Generic labeled tree used for display.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A node of the display tree.
///
/// Branch nodes always carry a (possibly empty) child list. Leaves have none,
/// and omit the `children` key when serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct TreeNode {
    /// Dotted position path, or the book title for the root
    id: String,
    /// Human-readable label
    description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    children: Option<Vec<TreeNode>>,
}

impl TreeNode {
    /// Creates a node that can hold children.
    pub fn branch(
        id: impl Into<String>,
        description: impl Into<String>,
        children: Vec<TreeNode>,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            children: Some(children),
        }
    }

    /// Creates a leaf node.
    pub fn leaf(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            children: None,
        }
    }

    /// True for nodes created with [`TreeNode::leaf`].
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Child nodes; empty for leaves.
    pub fn child_nodes(&self) -> &[TreeNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + count_nodes(self.child_nodes())
    }

    /// Depth-first search by id.
    pub fn find(&self, id: &str) -> Option<&TreeNode> {
        if self.id == id {
            return Some(self);
        }
        self.child_nodes().iter().find_map(|child| child.find(id))
    }
}

/// Number of nodes in a forest.
pub fn count_nodes(nodes: &[TreeNode]) -> usize {
    nodes.iter().map(TreeNode::count).sum()
}
