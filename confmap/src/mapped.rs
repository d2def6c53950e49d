//! The [`Mapped`] trait and the global descriptor cache.

use core::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use crate::descriptor::TypeDescriptor;

/// A type that can be mapped to and from an untyped configuration tree.
///
/// Built-in implementations cover scalars (`bool`, integers, floats,
/// `String`), `Option<T>`, `Vec<T>`, and string-keyed `IndexMap`/`BTreeMap`.
/// User-defined record and enum types implement it through the
/// [`record!`](crate::record) and [`mapped_enum!`](crate::mapped_enum)
/// macros.
///
/// Record graphs must be acyclic: a record field whose type leads back to
/// an ancestor record would recurse without bound while its descriptor is
/// being built.
pub trait Mapped: Any + Sized {
    /// Builds this type's descriptor. Called at most a handful of times per
    /// type; use [`Mapped::descriptor`] to get the cached copy.
    fn describe() -> TypeDescriptor;

    /// The memoized descriptor for this type.
    fn descriptor() -> Arc<TypeDescriptor> {
        descriptor_of::<Self>()
    }
}

static DESCRIPTOR_CACHE: LazyLock<RwLock<HashMap<TypeId, Arc<TypeDescriptor>>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// Looks up (or lazily computes) the descriptor for `T`.
///
/// Computation happens outside the lock, so two threads racing on the same
/// type may both build a descriptor; the first insert wins and the loser's
/// copy is dropped. A partially built descriptor is never visible.
fn descriptor_of<T: Mapped>() -> Arc<TypeDescriptor> {
    let type_id = TypeId::of::<T>();
    {
        let cache = DESCRIPTOR_CACHE
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(descriptor) = cache.get(&type_id) {
            return Arc::clone(descriptor);
        }
    }
    let computed = Arc::new(T::describe());
    let mut cache = DESCRIPTOR_CACHE
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    Arc::clone(cache.entry(type_id).or_insert(computed))
}
