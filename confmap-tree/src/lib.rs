//! Format-agnostic untyped configuration tree.
//!
//! This crate defines the intermediate representation that sits between a
//! configuration text format (YAML, TOML, ...) and the typed mapping engine
//! in `confmap`: a [`Node`] tree of scalars, sequences, and string-keyed
//! mappings, plus the dot-separated [`Path`] type used to address nodes
//! within it.
//!
//! A reader for a concrete text format produces a `Node`; a writer consumes
//! one. Nothing in this crate depends on any particular format.
//!
//! # Example
//!
//! ```
//! use confmap_tree::{Node, Path, tree};
//!
//! let root = tree!({
//!     "server": {
//!         "host": "localhost",
//!         "port": 8080,
//!     },
//! });
//!
//! let path: Path = "server.port".parse().unwrap();
//! assert_eq!(root.get_path(&path).and_then(Node::as_int), Some(8080));
//! ```

#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]

mod node;
mod path;

pub use node::{Map, Node, Scalar};
pub use path::{Path, PathError};
