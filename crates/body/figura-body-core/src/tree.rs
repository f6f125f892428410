//! The per-node container and its world/local space conversion.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::node::BodyNode;
use crate::transform::Transform;

/// Which reference frame a transform tree is expressed in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Space {
    /// Every value is relative to a single shared origin.
    World,
    /// Every value is relative to the node's parent.
    Local,
}

/// Full mapping from every [`BodyNode`] to a value of type `T`.
///
/// Storage is a flat array indexed by catalog position; the parent relation
/// lives in the catalog ([`BodyNode::parent`]), not in the tree, so instances
/// are plain copyable data with no interior pointers. There are no partial
/// trees: construction always covers the whole catalog.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BodyTree<T> {
    values: [T; BodyNode::COUNT],
}

impl<T: Default + Copy> BodyTree<T> {
    /// A tree with every node set to `T::default()` (the identity transform
    /// for `BodyTree<Transform>`).
    pub fn new() -> Self {
        BodyTree {
            values: [T::default(); BodyNode::COUNT],
        }
    }
}

impl<T: Default + Copy> Default for BodyTree<T> {
    fn default() -> Self {
        BodyTree::new()
    }
}

impl<T> BodyTree<T> {
    #[inline]
    pub fn get(&self, node: BodyNode) -> &T {
        &self.values[node.index()]
    }

    #[inline]
    pub fn set(&mut self, node: BodyNode, value: T) {
        self.values[node.index()] = value;
    }

    /// Visit every node and its value in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (BodyNode, &T)> {
        BodyNode::ALL.iter().map(move |&n| (n, &self.values[n.index()]))
    }
}

impl<T> Index<BodyNode> for BodyTree<T> {
    type Output = T;

    #[inline]
    fn index(&self, node: BodyNode) -> &T {
        &self.values[node.index()]
    }
}

impl<T> IndexMut<BodyNode> for BodyTree<T> {
    #[inline]
    fn index_mut(&mut self, node: BodyNode) -> &mut T {
        &mut self.values[node.index()]
    }
}

impl BodyTree<Transform> {
    /// Re-express every node's transform in `target` space, leaving the
    /// source tree untouched.
    ///
    /// Converting to [`Space::Local`] treats the source as world-space and
    /// composes each node with the inverse of its parent's world transform;
    /// converting to [`Space::World`] treats the source as parent-relative
    /// and accumulates down the hierarchy. Catalog order guarantees a parent
    /// is resolved before any of its children. Roots pass through unchanged.
    pub fn converted(&self, target: Space) -> BodyTree<Transform> {
        let mut out = *self;
        match target {
            Space::Local => {
                for node in BodyNode::ALL {
                    if let Some(parent) = node.parent() {
                        out[node] = self[parent].inverse().then(&self[node]);
                    }
                }
            }
            Space::World => {
                for node in BodyNode::ALL {
                    if let Some(parent) = node.parent() {
                        out[node] = out[parent].then(&self[node]);
                    }
                }
            }
        }
        out
    }
}
