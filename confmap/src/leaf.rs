//! The export direction: typed values into ordered leaf entries.

use core::any::Any;

use confmap_tree::{Map, Node, Path};

use crate::descriptor::TypeDescriptor;
use crate::error::MappingError;
use crate::mapped::Mapped;

type Result<T> = core::result::Result<T, MappingError>;

/// One exported leaf: a path and the node to write there.
///
/// The node is a scalar, a whole sequence, or an empty mapping; maps with
/// entries and records are decomposed into deeper entries instead.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafEntry {
    path: Path,
    value: Node,
}

impl LeafEntry {
    /// Creates a leaf entry.
    pub fn new(path: Path, value: Node) -> Self {
        Self { path, value }
    }

    /// Where to write the value.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The value to write.
    pub fn value(&self) -> &Node {
        &self.value
    }
}

/// Flattens typed value graphs into ordered [`LeafEntry`] sequences.
///
/// Traversal is pre-order in declared field order, so repeated export of an
/// unchanged value yields an identical entry sequence. Sequences are
/// exported as one opaque entry each, never element by element; maps
/// recurse per key (an empty map still contributes one entry, so the key
/// survives the round trip); present optionals are flattened away; empty
/// optionals contribute nothing.
#[derive(Debug, Default)]
pub struct LeafPropertiesGenerator;

impl LeafPropertiesGenerator {
    /// Creates a generator.
    pub fn new() -> Self {
        Self
    }

    /// Flattens `value`, rooted at `path`, into leaf entries.
    ///
    /// Errs when a record type with no mappable fields is reached:
    /// exporting such a type is a programmer error, not a data error.
    pub fn generate<T: Mapped>(&self, value: &T, path: &Path) -> Result<Vec<LeafEntry>> {
        log::trace!(
            "exporting {} rooted at '{path}'",
            core::any::type_name::<T>()
        );
        let descriptor = T::descriptor();
        let mut entries = Vec::new();
        collect(value, &descriptor, path.clone(), &mut entries)?;
        Ok(entries)
    }
}

fn collect(
    value: &dyn Any,
    descriptor: &TypeDescriptor,
    path: Path,
    out: &mut Vec<LeafEntry>,
) -> Result<()> {
    match descriptor {
        TypeDescriptor::Scalar(scalar) => {
            if let Some(scalar) = scalar.to_scalar(value) {
                out.push(LeafEntry::new(path, Node::Scalar(scalar)));
            }
        }
        TypeDescriptor::Enum(descriptor) => {
            out.push(LeafEntry::new(path, Node::text(descriptor.name_of(value))));
        }
        TypeDescriptor::Sequence(_) => {
            // One opaque entry for the whole collection.
            if let Some(node) = value_to_node(value, descriptor) {
                out.push(LeafEntry::new(path, node));
            }
        }
        TypeDescriptor::StringMap(map) => {
            let entries = map.entries(value);
            if entries.is_empty() {
                out.push(LeafEntry::new(path, Node::Mapping(Map::new())));
            } else {
                for (key, value) in entries {
                    collect(value, map.value(), path.child(key), out)?;
                }
            }
        }
        TypeDescriptor::Optional(optional) => {
            if let Some(inner) = optional.project(value) {
                collect(inner, optional.inner(), path, out)?;
            }
        }
        TypeDescriptor::Record(record) => {
            if record.fields().is_empty() {
                return Err(MappingError::no_writable_fields(record.type_name()));
            }
            for field in record.fields() {
                collect(
                    field.value(value),
                    field.descriptor(),
                    path.child(field.name()),
                    out,
                )?;
            }
        }
    }
    Ok(())
}

/// Converts a typed value into an untyped node.
///
/// The typed counterpart of decoding: scalars and enum constants become
/// scalar nodes, sequences and maps convert their contents recursively,
/// empty optionals become `Null`. Inconvertible values yield `None`.
pub fn to_node<T: Mapped>(value: &T) -> Option<Node> {
    let descriptor = T::descriptor();
    value_to_node(value, &descriptor)
}

pub(crate) fn value_to_node(value: &dyn Any, descriptor: &TypeDescriptor) -> Option<Node> {
    match descriptor {
        TypeDescriptor::Scalar(scalar) => scalar.to_scalar(value).map(Node::Scalar),
        TypeDescriptor::Enum(descriptor) => Some(Node::text(descriptor.name_of(value))),
        TypeDescriptor::Sequence(sequence) => {
            let items = sequence
                .elements(value)
                .into_iter()
                .filter_map(|item| value_to_node(item, sequence.element()))
                .collect();
            Some(Node::Sequence(items))
        }
        TypeDescriptor::StringMap(map) => {
            let entries = map
                .entries(value)
                .into_iter()
                .filter_map(|(key, value)| {
                    value_to_node(value, map.value()).map(|node| (key.to_string(), node))
                })
                .collect();
            Some(Node::Mapping(entries))
        }
        TypeDescriptor::Optional(optional) => match optional.project(value) {
            Some(inner) => value_to_node(inner, optional.inner()),
            None => Some(Node::Null),
        },
        TypeDescriptor::Record(record) => {
            let mut entries = Map::new();
            for field in record.fields() {
                if let Some(node) = value_to_node(field.value(value), field.descriptor()) {
                    entries.insert(field.name().to_string(), node);
                }
            }
            Some(Node::Mapping(entries))
        }
    }
}
