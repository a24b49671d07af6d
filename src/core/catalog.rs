use crate::core::entity::PnpEntity;
use crate::core::property::DeviceProperty;
use crate::core::query::EntityFilter;
use crate::error::Result;

/// Live handle to a device record, able to read its properties.
///
/// Every call goes to the backend; implementations must not cache.
pub trait PropertySource {
    /// Fetch one property by key or key name.
    ///
    /// Returns `Ok(None)` when the device does not know the key.
    fn fetch_property(&self, key: &str) -> Result<Option<DeviceProperty>>;
}

/// Catalog of PnP device records
pub trait DeviceCatalog {
    /// All records matching the filter, in catalog order
    fn query(&self, filter: &EntityFilter) -> Result<Vec<PnpEntity>>;

    /// First record matching the filter
    fn first(&self, filter: &EntityFilter) -> Result<Option<PnpEntity>> {
        Ok(self.query(filter)?.into_iter().next())
    }
}
