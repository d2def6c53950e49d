//! The untyped tree node and its scalar leaves.

use core::fmt;

use indexmap::IndexMap;

use crate::Path;

/// Insertion-ordered string-keyed mapping of child nodes.
pub type Map = IndexMap<String, Node>;

/// A scalar leaf value.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// Text value.
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(value) => write!(f, "{value}"),
            Scalar::Int(value) => write!(f, "{value}"),
            Scalar::Float(value) => write!(f, "{value}"),
            Scalar::Text(value) => f.write_str(value),
        }
    }
}

/// One node of an untyped configuration tree.
///
/// Produced by a format reader (or by hand via [`tree!`](crate::tree)),
/// consumed by the typed mapping engine. Trees are not mutated by the
/// import direction; [`Node::set_path`] exists for the write-back side.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// Explicit null / absent value.
    Null,
    /// Scalar leaf.
    Scalar(Scalar),
    /// Ordered sequence of nodes.
    Sequence(Vec<Node>),
    /// Ordered string-keyed mapping of nodes.
    Mapping(Map),
}

impl Node {
    /// Shorthand for a text scalar node.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Scalar(Scalar::Text(value.into()))
    }

    /// Whether this node is `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    /// The scalar leaf, if this node is one.
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Node::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// The text value, if this node is a text scalar.
    pub fn as_text(&self) -> Option<&str> {
        match self.as_scalar() {
            Some(Scalar::Text(value)) => Some(value),
            _ => None,
        }
    }

    /// The integer value, if this node is an integer scalar.
    pub fn as_int(&self) -> Option<i64> {
        match self.as_scalar() {
            Some(Scalar::Int(value)) => Some(*value),
            _ => None,
        }
    }

    /// The floating point value, if this node is a numeric scalar.
    pub fn as_float(&self) -> Option<f64> {
        match self.as_scalar() {
            Some(Scalar::Float(value)) => Some(*value),
            Some(Scalar::Int(value)) => Some(*value as f64),
            _ => None,
        }
    }

    /// The boolean value, if this node is a boolean scalar.
    pub fn as_bool(&self) -> Option<bool> {
        match self.as_scalar() {
            Some(Scalar::Bool(value)) => Some(*value),
            _ => None,
        }
    }

    /// The elements, if this node is a sequence.
    pub fn as_sequence(&self) -> Option<&[Node]> {
        match self {
            Node::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// The entries, if this node is a mapping.
    pub fn as_mapping(&self) -> Option<&Map> {
        match self {
            Node::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    /// Looks up a direct child by exact key.
    pub fn child(&self, key: &str) -> Option<&Node> {
        self.as_mapping().and_then(|entries| entries.get(key))
    }

    /// Looks up a direct child by key, ignoring ASCII case.
    ///
    /// An exact match wins over a case-insensitive one.
    pub fn child_ignore_case(&self, key: &str) -> Option<&Node> {
        let entries = self.as_mapping()?;
        entries.get(key).or_else(|| {
            entries
                .iter()
                .find(|(candidate, _)| candidate.eq_ignore_ascii_case(key))
                .map(|(_, node)| node)
        })
    }

    /// Navigates to the node addressed by `path`.
    ///
    /// The root path returns the node itself. Lookup is by exact key.
    pub fn get_path(&self, path: &Path) -> Option<&Node> {
        let mut current = self;
        for segment in path.segments() {
            current = current.child(segment)?;
        }
        Some(current)
    }

    /// Writes `value` at `path`, creating intermediate mappings as needed.
    ///
    /// Intermediate nodes that are not mappings are replaced by mappings.
    /// The root path replaces the whole tree.
    pub fn set_path(&mut self, path: &Path, value: Node) {
        let segments = path.segments();
        let Some((last, parents)) = segments.split_last() else {
            *self = value;
            return;
        };
        let mut current = self;
        for segment in parents {
            if !matches!(current, Node::Mapping(_)) {
                *current = Node::Mapping(Map::new());
            }
            let Node::Mapping(entries) = current else {
                unreachable!("node was just replaced by a mapping")
            };
            current = entries
                .entry(segment.clone())
                .or_insert_with(|| Node::Mapping(Map::new()));
        }
        if !matches!(current, Node::Mapping(_)) {
            *current = Node::Mapping(Map::new());
        }
        let Node::Mapping(entries) = current else {
            unreachable!("node was just replaced by a mapping")
        };
        entries.insert(last.clone(), value);
    }
}

impl Default for Node {
    /// The default node is `Null`.
    fn default() -> Self {
        Node::Null
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Node::Scalar(Scalar::Bool(value))
    }
}

impl From<i64> for Node {
    fn from(value: i64) -> Self {
        Node::Scalar(Scalar::Int(value))
    }
}

impl From<i32> for Node {
    fn from(value: i32) -> Self {
        Node::Scalar(Scalar::Int(value.into()))
    }
}

impl From<u32> for Node {
    fn from(value: u32) -> Self {
        Node::Scalar(Scalar::Int(value.into()))
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Node::Scalar(Scalar::Float(value))
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::text(value)
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Scalar(Scalar::Text(value))
    }
}

impl From<Scalar> for Node {
    fn from(value: Scalar) -> Self {
        Node::Scalar(value)
    }
}

/// Builds a [`Node`] tree from a literal.
///
/// Mappings use `{ "key": value }` syntax, sequences use `[ ... ]`, and
/// `null` produces [`Node::Null`]. Leaf expressions go through
/// [`Node::from`]; compound leaf expressions need parentheses.
///
/// # Example
///
/// ```
/// use confmap_tree::{Node, tree};
///
/// let root = tree!({
///     "name": "confmap",
///     "tags": ["a", "b"],
///     "extra": null,
/// });
/// assert!(root.child("extra").unwrap().is_null());
/// ```
#[macro_export]
macro_rules! tree {
    (null) => { $crate::Node::Null };
    ([ $($element:tt),* $(,)? ]) => {
        $crate::Node::Sequence(::std::vec![ $( $crate::tree!($element) ),* ])
    };
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        #[allow(unused_mut)]
        let mut entries = $crate::Map::new();
        $( entries.insert(::std::string::String::from($key), $crate::tree!($value)); )*
        $crate::Node::Mapping(entries)
    }};
    ($other:expr) => { $crate::Node::from($other) };
}
