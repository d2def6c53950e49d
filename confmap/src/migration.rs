//! Deciding whether a loaded resource needs to be rewritten.

use crate::property::ConfigurationData;
use crate::resource::PropertyResource;

/// Decides whether a freshly loaded resource must be migrated (rewritten).
pub trait MigrationService {
    /// Whether `resource` is missing anything `data` knows about.
    fn needs_migration(&self, resource: &dyn PropertyResource, data: &ConfigurationData) -> bool;
}

/// Migration check requiring every known property path to be present.
///
/// A resource missing any known path gets fully rewritten, which fills in
/// the missing paths with their default values.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainMigrationService;

impl MigrationService for PlainMigrationService {
    fn needs_migration(&self, resource: &dyn PropertyResource, data: &ConfigurationData) -> bool {
        for property in data.properties() {
            if !property.is_present(resource) {
                log::debug!("path '{}' is missing, migration required", property.path());
                return true;
            }
        }
        false
    }
}
