//! The element adjacency map and its navigation queries.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use trellis_core::{ColorValue, ContainerLayout, ElementLayoutConfig, ElementType, PickerValue, SizeItemConfig};

/// Sentinel id of the page's top-level container.
pub const ROOT_ID: &str = "ROOT";

/// The layout configuration of the root sentinel: a full-height container
/// with an opaque white background.
pub fn root_layout() -> ElementLayoutConfig {
    let mut layout = ContainerLayout::initial();
    layout.size.height = SizeItemConfig::Relative { value: Some(100.0) };
    layout.style.background = Some(PickerValue::Color(ColorValue::opaque("#ffffff")));
    ElementLayoutConfig::Container(layout)
}

/// One record of the externally supplied flat node list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementNode {
    pub id: String,
    /// Parent element id. Nodes without a parent sit directly under the
    /// root sentinel.
    pub parent: Option<String>,
    #[serde(rename = "elementType")]
    pub element_type: ElementType,
}

/// Read-only element tree for one render pass.
///
/// Only containers may own children; a container always has an adjacency
/// entry, even when empty, so lookups never distinguish "no children yet"
/// from "key absent".
#[derive(Debug, Clone, Default)]
pub struct ElementTree {
    children: IndexMap<String, Vec<String>>,
    types: IndexMap<String, ElementType>,
}

impl ElementTree {
    /// Build the adjacency map from a flat node list.
    pub fn build(nodes: &[ElementNode]) -> Self {
        let mut children: IndexMap<String, Vec<String>> = IndexMap::new();
        let mut types: IndexMap<String, ElementType> = IndexMap::new();
        children.insert(ROOT_ID.to_string(), Vec::new());
        types.insert(ROOT_ID.to_string(), ElementType::Container);

        for node in nodes {
            types.insert(node.id.clone(), node.element_type);
            if node.element_type == ElementType::Container {
                children.entry(node.id.clone()).or_default();
            }
            let parent = node.parent.as_deref().unwrap_or(ROOT_ID);
            children.entry(parent.to_string()).or_default().push(node.id.clone());
        }

        Self { children, types }
    }

    /// Ordered child ids of an element. Empty for non-containers.
    pub fn children_of(&self, id: &str) -> &[String] {
        self.children.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The element's type tag, if the id is known.
    pub fn element_type(&self, id: &str) -> Option<ElementType> {
        self.types.get(id).copied()
    }

    /// All known element ids, root sentinel first, in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    /// Parent of an element, found by breadth-first search from the root.
    ///
    /// Returns `None` for the root itself and for unreachable ids. O(n)
    /// per call, which is fine at page-level element counts.
    pub fn parent_of(&self, id: &str) -> Option<&str> {
        if id == ROOT_ID {
            return None;
        }
        let mut queue: VecDeque<&str> = VecDeque::from([ROOT_ID]);
        while let Some(node) = queue.pop_front() {
            let children = self.children_of(node);
            if children.iter().any(|child| child == id) {
                return self.resolve_key(node);
            }
            queue.extend(children.iter().map(String::as_str));
        }
        None
    }

    /// Ancestor chain of an element, nearest parent first, ending at the
    /// root sentinel. A cyclic adjacency map is a precondition violation,
    /// not handled defensively.
    pub fn ancestors_of(&self, id: &str) -> Vec<&str> {
        let mut ancestors = Vec::new();
        let mut current = self.parent_of(id);
        while let Some(parent) = current {
            ancestors.push(parent);
            current = self.parent_of(parent);
        }
        ancestors
    }

    /// All ids below an element, recursively. Empty for non-containers,
    /// which by construction never have children. Order beyond
    /// depth-first traversal is not part of the contract.
    pub fn descendants_of(&self, id: &str) -> Vec<String> {
        if self.element_type(id) != Some(ElementType::Container) {
            return Vec::new();
        }
        let mut descendants = Vec::new();
        for child in self.children_of(id) {
            descendants.push(child.clone());
            descendants.extend(self.descendants_of(child));
        }
        descendants
    }

    /// Map a borrowed lookup key back to the map-owned string so the
    /// returned reference outlives the BFS queue.
    fn resolve_key(&self, id: &str) -> Option<&str> {
        self.children
            .get_key_value(id)
            .map(|(key, _)| key.as_str())
            .or_else(|| self.types.get_key_value(id).map(|(key, _)| key.as_str()))
    }
}
