//! The resource boundary: where trees come from and leaf entries go.

use confmap_tree::{Map, Node, Path};

use crate::leaf::LeafEntry;

/// A materialized configuration resource.
///
/// Concrete text formats live behind this trait: a reader produces the
/// tree, a writer consumes flattened leaf entries. The mapping engine only
/// ever talks to the tree, never to a format.
pub trait PropertyResource {
    /// The whole backing tree.
    fn read_tree(&self) -> &Node;

    /// The node at `path`, if present. The root path is the whole tree.
    fn get(&self, path: &Path) -> Option<&Node>;

    /// Writes a node at `path`, creating intermediate mappings.
    fn set(&mut self, path: &Path, value: Node);

    /// Replaces the backing tree with the given flattened entries.
    fn write_leaf_entries(&mut self, entries: &[LeafEntry]);

    /// Whether a node exists at `path`.
    fn contains(&self, path: &Path) -> bool {
        self.get(path).is_some()
    }

    /// The text scalar at `path`, if present.
    fn get_string(&self, path: &Path) -> Option<&str> {
        self.get(path).and_then(Node::as_text)
    }

    /// The integer scalar at `path`, if present.
    fn get_int(&self, path: &Path) -> Option<i64> {
        self.get(path).and_then(Node::as_int)
    }

    /// The numeric scalar at `path` as a float, if present.
    fn get_float(&self, path: &Path) -> Option<f64> {
        self.get(path).and_then(Node::as_float)
    }

    /// The boolean scalar at `path`, if present.
    fn get_bool(&self, path: &Path) -> Option<bool> {
        self.get(path).and_then(Node::as_bool)
    }

    /// The sequence at `path`, if present.
    fn get_list(&self, path: &Path) -> Option<&[Node]> {
        self.get(path).and_then(Node::as_sequence)
    }

    /// The mapping at `path`, if present.
    fn get_map(&self, path: &Path) -> Option<&Map> {
        self.get(path).and_then(Node::as_mapping)
    }
}

/// An in-memory resource over a plain tree.
///
/// Used by tests and anywhere no backing file format is involved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TreeResource {
    root: Node,
}

impl TreeResource {
    /// Wraps an existing tree.
    pub fn new(root: Node) -> Self {
        Self { root }
    }

    /// An empty resource (an empty root mapping).
    pub fn empty() -> Self {
        Self {
            root: Node::Mapping(Map::new()),
        }
    }
}

impl PropertyResource for TreeResource {
    fn read_tree(&self) -> &Node {
        &self.root
    }

    fn get(&self, path: &Path) -> Option<&Node> {
        self.root.get_path(path)
    }

    fn set(&mut self, path: &Path, value: Node) {
        self.root.set_path(path, value);
    }

    fn write_leaf_entries(&mut self, entries: &[LeafEntry]) {
        log::debug!("rewriting resource from {} leaf entries", entries.len());
        self.root = Node::Mapping(Map::new());
        for entry in entries {
            self.root.set_path(entry.path(), entry.value().clone());
        }
    }
}
