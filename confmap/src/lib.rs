//! Typed, two-way binding between untyped configuration trees and nested
//! record types.
//!
//! The import direction reconstructs a typed object graph from a
//! [`Node`](confmap_tree::Node) tree, with per-field default fallback for
//! records and strict all-or-nothing decoding for sequences and maps. The
//! export direction flattens a typed value back into an ordered sequence
//! of path-to-leaf entries, ready for a format writer.
//!
//! Record and enum types register themselves with the [`record!`] and
//! [`mapped_enum!`] macros; scalars, `Option<T>`, `Vec<T>`, and
//! string-keyed maps are built in.
//!
//! # Example
//!
//! ```
//! use confmap::{BeanMapper, Path, record, tree};
//!
//! record! {
//!     /// Message-of-the-day settings.
//!     pub struct Motd {
//!         pub text: String = String::from("welcome"),
//!         pub lines: i64 = 1,
//!     }
//! }
//!
//! let root = tree!({
//!     "motd": {
//!         "text": "hello",
//!         "lines": "not a number",
//!     },
//! });
//!
//! let motd: Motd = BeanMapper::new()
//!     .map(&root, &"motd".parse::<Path>().unwrap())
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(motd.text, "hello");
//! // The bad field fell back to its default; the good one did not.
//! assert_eq!(motd.lines, 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]

mod decode;
mod descriptor;
mod error;
mod impls;
mod leaf;
mod macros;
mod mapped;
mod mapper;
mod migration;
mod property;
mod resource;
mod settings;

pub use decode::{DecodeResult, decode_node};
pub use descriptor::{
    BuildMapFn, BuildSequenceFn, ElementsFn, EntriesFn, EnumDescriptor, FieldDescriptor,
    FromNameFn, GetFieldFn, InstantiateFn, MapDescriptor, NameOfFn, OptionalDescriptor,
    ParseScalarFn, ProjectOptionalFn, RecordDescriptor, ScalarDescriptor, ScalarKind,
    SequenceDescriptor, SetFieldFn, ToScalarFn, TypeDescriptor, WrapOptionalFn,
};
pub use error::MappingError;
pub use leaf::{LeafEntry, LeafPropertiesGenerator, to_node};
pub use mapped::Mapped;
pub use mapper::{BeanMapper, from_node};
pub use migration::{MigrationService, PlainMigrationService};
pub use property::{
    BeanProperty, BooleanProperty, ConfigurationData, IntProperty, Property, PropertyEntry,
    StringKeyMapProperty, StringListProperty, StringProperty,
};
pub use resource::{PropertyResource, TreeResource};
pub use settings::SettingsManager;

pub use confmap_tree::{Map, Node, Path, PathError, Scalar, tree};
