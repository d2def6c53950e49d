use core::fmt;

/// Errors raised by the mapping engine.
///
/// Only structural programmer errors surface here. Data-shape mismatches
/// between a tree and a target type never error; they degrade to default
/// values (records, field by field) or reject the enclosing container
/// (sequences and maps) and fall back one level up.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MappingError {
    /// A record type exposes no mappable fields. Such a type can neither be
    /// populated on import nor flattened on export.
    NoWritableFields {
        /// Name of the offending record type.
        type_name: &'static str,
    },
}

impl MappingError {
    pub(crate) fn no_writable_fields(type_name: &'static str) -> Self {
        MappingError::NoWritableFields { type_name }
    }
}

impl fmt::Display for MappingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MappingError::NoWritableFields { type_name } => {
                write!(f, "record type '{type_name}' has no mappable fields")
            }
        }
    }
}

impl core::error::Error for MappingError {}
