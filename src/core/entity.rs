use crate::core::catalog::{DeviceCatalog, PropertySource};
use crate::core::property::DeviceProperty;
use crate::core::query::EntityFilter;
use crate::core::validation::validate_property_key;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Descriptive fields of a `Win32_PnPEntity`. WMI may return NULL for any of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub class_guid: Option<String>,
    #[serde(default)]
    pub device_id: Option<String>,
    #[serde(default)]
    pub pnp_device_id: Option<String>,
}

/// A located PnP device record together with its live management handle
pub struct PnpEntity {
    record: EntityRecord,
    source: Box<dyn PropertySource>,
}

impl PnpEntity {
    pub fn new(record: EntityRecord, source: Box<dyn PropertySource>) -> Self {
        Self { record, source }
    }

    pub fn record(&self) -> &EntityRecord {
        &self.record
    }

    pub fn name(&self) -> Option<&str> {
        self.record.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.record.description.as_deref()
    }

    pub fn class_guid(&self) -> Option<&str> {
        self.record.class_guid.as_deref()
    }

    pub fn device_id(&self) -> Option<&str> {
        self.record.device_id.as_deref()
    }

    pub fn pnp_device_id(&self) -> Option<&str> {
        self.record.pnp_device_id.as_deref()
    }

    /// Find exactly one entity by its friendly name
    pub fn by_friendly_name<C>(catalog: &C, name: &str) -> Result<Option<PnpEntity>>
    where
        C: DeviceCatalog + ?Sized,
    {
        Self::first_matching(catalog, EntityFilter::friendly_name(name))
    }

    /// Find an entity whose `DeviceID` or `PNPDeviceID` equals `id`.
    /// Backslashes in `id` are doubled for the query.
    pub fn by_device_id<C>(catalog: &C, id: &str) -> Result<Option<PnpEntity>>
    where
        C: DeviceCatalog + ?Sized,
    {
        Self::first_matching(catalog, EntityFilter::device_id(id))
    }

    /// Same as [`PnpEntity::by_device_id`] for an id already escaped for WQL
    pub fn by_device_id_raw<C>(catalog: &C, id: &str) -> Result<Option<PnpEntity>>
    where
        C: DeviceCatalog + ?Sized,
    {
        Self::first_matching(catalog, EntityFilter::device_id_raw(id))
    }

    /// Find every entity whose friendly name contains `name`
    pub fn like_friendly_name<C>(catalog: &C, name: &str) -> Result<Vec<PnpEntity>>
    where
        C: DeviceCatalog + ?Sized,
    {
        let filter = EntityFilter::friendly_name_like(name);
        filter.validate()?;
        log::debug!("Querying PnP entities: {}", filter.to_wql());

        catalog.query(&filter)
    }

    fn first_matching<C>(catalog: &C, filter: EntityFilter) -> Result<Option<PnpEntity>>
    where
        C: DeviceCatalog + ?Sized,
    {
        filter.validate()?;
        log::debug!("Querying PnP entity: {}", filter.to_wql());

        let entity = catalog.first(&filter)?;
        if entity.is_none() {
            log::debug!("No PnP entity matches {}", filter.predicate());
        }
        Ok(entity)
    }

    /// Read a device property by key (`{GUID} pid`) or key name.
    ///
    /// `None` when the key is unknown, the type is Empty or no value is set.
    pub fn device_property(&self, key: &str) -> Result<Option<DeviceProperty>> {
        validate_property_key(key)?;

        let property = self
            .source
            .fetch_property(key)?
            .filter(DeviceProperty::has_value);

        if property.is_none() {
            log::debug!(
                "Property {} has no value on {}",
                key,
                self.name().unwrap_or("<unnamed>")
            );
        }
        Ok(property)
    }

    /// Refresh `property.data` from the device. Left untouched when the
    /// device no longer reports a value.
    pub fn update_property(&self, property: &mut DeviceProperty) -> Result<()> {
        if let Some(fresh) = self.device_property(&property.key)? {
            property.data = fresh.data;
        }
        Ok(())
    }
}

impl fmt::Debug for PnpEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PnpEntity")
            .field("record", &self.record)
            .finish_non_exhaustive()
    }
}
