//! Figura body data model (engine-agnostic)
//!
//! This crate defines the closed catalog of skeletal locations ([`BodyNode`]),
//! the rigid [`Transform`] type, and the flat per-node container
//! ([`BodyTree`]) with its world/local space conversion. Generation and
//! dispatch live in the sibling crates; everything here is plain data.

pub mod node;
pub mod transform;
pub mod tree;

pub use node::BodyNode;
pub use transform::Transform;
pub use tree::{BodyTree, Space};
