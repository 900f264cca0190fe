//! Element tree navigation for trellis documents.
//!
//! The tree is an adjacency map from element id to ordered child ids,
//! rooted at a fixed sentinel. It is built once per render pass from an
//! externally supplied flat node list and read-only during resolution.

mod tree;

pub use tree::{root_layout, ElementNode, ElementTree, ROOT_ID};
