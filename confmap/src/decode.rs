//! The import direction: untyped nodes into typed values.
//!
//! [`decode_node`] converts one [`Node`] against one [`TypeDescriptor`],
//! recursing into nested shapes. Shape mismatches are not errors: they
//! yield [`DecodeResult::UseDefault`], telling the enclosing level to keep
//! its pre-existing default. The fallback policy is asymmetric on purpose:
//! a record tolerates bad fields one by one (each keeps its own default),
//! while a single bad element rejects a whole sequence or map. Hand-edited
//! files thus degrade gracefully per field, but corrupt collections are
//! never silently truncated.

use core::any::Any;

use confmap_tree::{Map, Node};

use crate::descriptor::{RecordDescriptor, TypeDescriptor};
use crate::error::MappingError;

type Result<T> = core::result::Result<T, MappingError>;

/// Outcome of decoding one node against one shape.
pub enum DecodeResult {
    /// The node matched; here is the typed value.
    Decoded(Box<dyn Any>),
    /// The node was missing or shaped wrong; keep the enclosing default.
    UseDefault,
}

impl DecodeResult {
    /// Whether this result carries a decoded value.
    pub fn is_decoded(&self) -> bool {
        matches!(self, DecodeResult::Decoded(_))
    }
}

impl core::fmt::Debug for DecodeResult {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DecodeResult::Decoded(_) => f.write_str("Decoded(..)"),
            DecodeResult::UseDefault => f.write_str("UseDefault"),
        }
    }
}

/// Decodes `node` against `target`.
///
/// `node` is `None` when the addressed child does not exist; only optional
/// shapes treat that as a value (the empty optional). Errs only on
/// structural problems (a field-less record type); every data-shape
/// mismatch comes back as [`DecodeResult::UseDefault`].
pub fn decode_node(node: Option<&Node>, target: &TypeDescriptor) -> Result<DecodeResult> {
    match target {
        TypeDescriptor::Scalar(scalar) => Ok(match node {
            Some(Node::Scalar(value)) => scalar
                .parse(value)
                .map_or(DecodeResult::UseDefault, DecodeResult::Decoded),
            _ => DecodeResult::UseDefault,
        }),
        TypeDescriptor::Enum(descriptor) => Ok(match node.and_then(Node::as_text) {
            Some(name) => descriptor
                .decode_name(name)
                .map_or(DecodeResult::UseDefault, DecodeResult::Decoded),
            None => DecodeResult::UseDefault,
        }),
        TypeDescriptor::Optional(optional) => match node {
            None | Some(Node::Null) => Ok(DecodeResult::Decoded(optional.empty())),
            Some(inner) => match decode_node(Some(inner), optional.inner())? {
                DecodeResult::Decoded(value) => {
                    Ok(DecodeResult::Decoded(optional.wrap_value(value)))
                }
                DecodeResult::UseDefault => Ok(DecodeResult::UseDefault),
            },
        },
        TypeDescriptor::Sequence(sequence) => match node.and_then(Node::as_sequence) {
            Some(items) => {
                let mut decoded = Vec::with_capacity(items.len());
                for item in items {
                    match decode_node(Some(item), sequence.element())? {
                        DecodeResult::Decoded(value) => decoded.push(value),
                        // One unparsable element rejects the whole sequence.
                        DecodeResult::UseDefault => return Ok(DecodeResult::UseDefault),
                    }
                }
                Ok(DecodeResult::Decoded(sequence.build(decoded)))
            }
            None => Ok(DecodeResult::UseDefault),
        },
        TypeDescriptor::StringMap(map) => match node.and_then(Node::as_mapping) {
            Some(entries) => {
                let mut decoded = Vec::with_capacity(entries.len());
                for (key, value) in entries {
                    match decode_node(Some(value), map.value())? {
                        DecodeResult::Decoded(value) => decoded.push((key.clone(), value)),
                        // Same policy as sequences: any bad entry rejects the map.
                        DecodeResult::UseDefault => return Ok(DecodeResult::UseDefault),
                    }
                }
                Ok(DecodeResult::Decoded(map.build(decoded)))
            }
            None => Ok(DecodeResult::UseDefault),
        },
        TypeDescriptor::Record(record) => match node.and_then(Node::as_mapping) {
            Some(entries) => decode_record(entries, record).map(DecodeResult::Decoded),
            None => Ok(DecodeResult::UseDefault),
        },
    }
}

/// Populates a fresh default instance of `record` from mapping entries.
///
/// Fields decode independently: an absent or mismatched child leaves that
/// field at its default-instance value and never fails the record.
fn decode_record(entries: &Map, record: &RecordDescriptor) -> Result<Box<dyn Any>> {
    if record.fields().is_empty() {
        return Err(MappingError::no_writable_fields(record.type_name()));
    }
    log::trace!("decoding record type {}", record.type_name());
    let mut instance = record.instantiate();
    for field in record.fields() {
        let child = lookup(entries, field.name());
        match decode_node(child, field.descriptor())? {
            DecodeResult::Decoded(value) => field.set_value(instance.as_mut(), value),
            DecodeResult::UseDefault => {
                log::trace!(
                    "field '{}' of {} keeps its default value",
                    field.name(),
                    record.type_name()
                );
            }
        }
    }
    Ok(instance)
}

/// Case-insensitive child lookup; an exact key match wins.
fn lookup<'a>(entries: &'a Map, name: &str) -> Option<&'a Node> {
    entries.get(name).or_else(|| {
        entries
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, node)| node)
    })
}
