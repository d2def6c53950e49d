//! The property facade: typed, defaulted access to paths of a resource.

use std::sync::Arc;

use confmap_tree::Path;
use indexmap::IndexMap;

use crate::error::MappingError;
use crate::leaf::{LeafEntry, LeafPropertiesGenerator};
use crate::mapped::Mapped;
use crate::mapper::BeanMapper;
use crate::resource::PropertyResource;

type Result<T> = core::result::Result<T, MappingError>;

/// A typed property: a path, a target type, and a default value.
///
/// Reading goes through the mapping engine, so `T` may be anything
/// [`Mapped`]: a scalar, a collection, or a whole record graph. When the
/// path is absent or its subtree does not match `T`, reading yields the
/// default instead of failing.
///
/// # Example
///
/// ```
/// use confmap::{Property, PropertyResource, TreeResource, tree};
///
/// let resource = TreeResource::new(tree!({ "port": 8080 }));
/// let port = Property::new("port".parse().unwrap(), 25565i64);
/// let missing = Property::new("motd".parse().unwrap(), String::from("hi"));
///
/// assert_eq!(port.get_value(&resource).unwrap(), 8080);
/// assert_eq!(missing.get_value(&resource).unwrap(), "hi");
/// assert!(!missing.is_present(&resource));
/// ```
#[derive(Debug, Clone)]
pub struct Property<T> {
    path: Path,
    default: T,
}

impl<T: Mapped + Clone> Property<T> {
    /// Creates a property.
    pub fn new(path: Path, default: T) -> Self {
        Self { path, default }
    }

    /// The property's path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The property's default value.
    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Reads the property's value from `resource`, falling back to the
    /// default when the path is absent or shaped wrong. Errs only on
    /// structural mapping problems.
    pub fn get_value(&self, resource: &dyn PropertyResource) -> Result<T> {
        match BeanMapper::new().map::<T>(resource.read_tree(), &self.path)? {
            Some(value) => Ok(value),
            None => Ok(self.default.clone()),
        }
    }

    /// Whether the property's path exists in `resource`.
    pub fn is_present(&self, resource: &dyn PropertyResource) -> bool {
        resource.contains(&self.path)
    }

    /// Flattens the property's current value into leaf entries for export.
    pub fn export_entries(&self, resource: &dyn PropertyResource) -> Result<Vec<LeafEntry>> {
        let value = self.get_value(resource)?;
        LeafPropertiesGenerator::new().generate(&value, &self.path)
    }
}

/// String-valued property.
pub type StringProperty = Property<String>;
/// Integer-valued property.
pub type IntProperty = Property<i64>;
/// Boolean-valued property.
pub type BooleanProperty = Property<bool>;
/// Property holding a list of strings.
pub type StringListProperty = Property<Vec<String>>;
/// Property holding a string-keyed map of `V` values.
pub type StringKeyMapProperty<V> = Property<IndexMap<String, V>>;
/// Property holding a whole record graph.
pub type BeanProperty<B> = Property<B>;

/// A type-erased property, as held by a [`ConfigurationData`] list.
pub trait PropertyEntry {
    /// The property's path.
    fn path(&self) -> &Path;

    /// Whether the property's path exists in `resource`.
    fn is_present(&self, resource: &dyn PropertyResource) -> bool;

    /// Flattens the property's current value into leaf entries.
    fn export_entries(&self, resource: &dyn PropertyResource) -> Result<Vec<LeafEntry>>;
}

impl<T: Mapped + Clone> PropertyEntry for Property<T> {
    fn path(&self) -> &Path {
        Property::path(self)
    }

    fn is_present(&self, resource: &dyn PropertyResource) -> bool {
        Property::is_present(self, resource)
    }

    fn export_entries(&self, resource: &dyn PropertyResource) -> Result<Vec<LeafEntry>> {
        Property::export_entries(self, resource)
    }
}

/// The ordered list of properties a configuration knows about.
///
/// Declaration order is preserved; it drives export order and the
/// migration check.
#[derive(Clone, Default)]
pub struct ConfigurationData {
    properties: Vec<Arc<dyn PropertyEntry>>,
}

impl ConfigurationData {
    /// Creates a configuration from its property list.
    pub fn new(properties: Vec<Arc<dyn PropertyEntry>>) -> Self {
        Self { properties }
    }

    /// The known properties, in declaration order.
    pub fn properties(&self) -> &[Arc<dyn PropertyEntry>] {
        &self.properties
    }
}

impl core::fmt::Debug for ConfigurationData {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ConfigurationData")
            .field("properties", &self.properties.len())
            .finish()
    }
}
