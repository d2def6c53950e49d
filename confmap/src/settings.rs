//! The top-level facade wiring a resource, a property list, and a
//! migration check together.

use crate::error::MappingError;
use crate::leaf::{LeafEntry, to_node};
use crate::mapped::Mapped;
use crate::migration::MigrationService;
use crate::property::{ConfigurationData, Property};
use crate::resource::PropertyResource;

type Result<T> = core::result::Result<T, MappingError>;

/// Typed access to a configuration resource.
///
/// Construction runs the migration check; an incomplete resource is
/// immediately rewritten with every known property, so defaults for
/// missing paths become persistent.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use confmap::{
///     ConfigurationData, PlainMigrationService, Property, SettingsManager, TreeResource, tree,
/// };
///
/// let port = Property::new("server.port".parse().unwrap(), 8080i64);
/// let data = ConfigurationData::new(vec![Arc::new(port.clone())]);
/// let resource = TreeResource::new(tree!({ "server": { "port": 9000 } }));
///
/// let mut settings = SettingsManager::new(resource, data, PlainMigrationService).unwrap();
/// assert_eq!(settings.get(&port).unwrap(), 9000);
///
/// settings.set(&port, 9001);
/// assert_eq!(settings.get(&port).unwrap(), 9001);
/// ```
#[derive(Debug)]
pub struct SettingsManager<R, M> {
    resource: R,
    data: ConfigurationData,
    migration: M,
}

impl<R: PropertyResource, M: MigrationService> SettingsManager<R, M> {
    /// Wires a resource, its property list, and a migration check.
    ///
    /// Runs the check right away and saves when migration is needed.
    pub fn new(resource: R, data: ConfigurationData, migration: M) -> Result<Self> {
        let mut manager = Self {
            resource,
            data,
            migration,
        };
        manager.reload()?;
        Ok(manager)
    }

    /// Reads a property's value.
    pub fn get<T: Mapped + Clone>(&self, property: &Property<T>) -> Result<T> {
        property.get_value(&self.resource)
    }

    /// Writes a property's value into the resource tree.
    ///
    /// Only the in-memory tree changes; call [`SettingsManager::save`] to
    /// flatten the full property list back into the resource.
    pub fn set<T: Mapped + Clone>(&mut self, property: &Property<T>, value: T) {
        if let Some(node) = to_node(&value) {
            self.resource.set(property.path(), node);
        }
    }

    /// Re-runs the migration check against the current resource state,
    /// rewriting it when anything is missing.
    ///
    /// Useful after the backing resource was replaced or mutated behind the
    /// manager's back.
    pub fn reload(&mut self) -> Result<()> {
        if self.migration.needs_migration(&self.resource, &self.data) {
            log::info!("configuration is incomplete, rewriting the resource");
            self.save()?;
        }
        Ok(())
    }

    /// Rewrites the resource from the full property list.
    pub fn save(&mut self) -> Result<()> {
        let mut entries: Vec<LeafEntry> = Vec::new();
        for property in self.data.properties() {
            entries.extend(property.export_entries(&self.resource)?);
        }
        self.resource.write_leaf_entries(&entries);
        Ok(())
    }

    /// The backing resource.
    pub fn resource(&self) -> &R {
        &self.resource
    }

    /// Mutable access to the backing resource.
    ///
    /// Call [`SettingsManager::reload`] afterwards if the mutation may have
    /// removed known paths.
    pub fn resource_mut(&mut self) -> &mut R {
        &mut self.resource
    }

    /// The known properties.
    pub fn configuration_data(&self) -> &ConfigurationData {
        &self.data
    }
}
