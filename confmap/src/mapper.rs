//! The import orchestrator.

use confmap_tree::{Node, Path};

use crate::decode::{DecodeResult, decode_node};
use crate::error::MappingError;
use crate::mapped::Mapped;

type Result<T> = core::result::Result<T, MappingError>;

/// Maps subtrees of an untyped tree onto typed values.
///
/// Stateless; the descriptor cache it relies on is global.
///
/// # Example
///
/// ```
/// use confmap::{BeanMapper, Path, record, tree};
///
/// record! {
///     pub struct Limits {
///         pub retries: u32 = 3,
///         pub timeout: u32 = 30,
///     }
/// }
///
/// let root = tree!({ "limits": { "retries": 5 } });
/// let path: Path = "limits".parse().unwrap();
/// let limits: Limits = BeanMapper::new()
///     .map(&root, &path)
///     .unwrap()
///     .unwrap();
/// assert_eq!(limits.retries, 5);
/// assert_eq!(limits.timeout, 30);
/// ```
#[derive(Debug, Default)]
pub struct BeanMapper;

impl BeanMapper {
    /// Creates a mapper.
    pub fn new() -> Self {
        Self
    }

    /// Maps the subtree of `root` at `path` onto a `B`.
    ///
    /// The root path uses the whole tree as the backing node. Returns
    /// `Ok(None)` when the subtree is absent or does not match `B`'s shape
    /// at the top level; the caller supplies its default in that case.
    /// Errs only for structural problems (field-less record types).
    pub fn map<B: Mapped>(&self, root: &Node, path: &Path) -> Result<Option<B>> {
        log::trace!(
            "mapping subtree at '{path}' onto {}",
            core::any::type_name::<B>()
        );
        let node = if path.is_root() {
            Some(root)
        } else {
            root.get_path(path)
        };
        let Some(node) = node else {
            log::trace!("no subtree at '{path}', caller default applies");
            return Ok(None);
        };
        from_node(node)
    }
}

/// Decodes a single node directly onto a `T`.
///
/// Returns `Ok(None)` on a top-level shape mismatch.
pub fn from_node<T: Mapped>(node: &Node) -> Result<Option<T>> {
    let descriptor = T::descriptor();
    match decode_node(Some(node), &descriptor)? {
        DecodeResult::Decoded(value) => Ok(Some(
            *value
                .downcast::<T>()
                .expect("descriptor produced a value of a different type"),
        )),
        DecodeResult::UseDefault => Ok(None),
    }
}
