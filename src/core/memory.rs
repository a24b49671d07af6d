// In-memory device catalog and JSON snapshots of PnP devices

use crate::core::catalog::{DeviceCatalog, PropertySource};
use crate::core::entity::{EntityRecord, PnpEntity};
use crate::core::property::DeviceProperty;
use crate::core::query::EntityFilter;
use crate::error::{PnpError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fs;
use std::path::Path;
use std::rc::Rc;

struct MemoryDevice {
    record: EntityRecord,
    properties: RefCell<Vec<DeviceProperty>>,
}

impl MemoryDevice {
    fn has_id(&self, id: &str) -> bool {
        [&self.record.device_id, &self.record.pnp_device_id]
            .into_iter()
            .flatten()
            .any(|candidate| candidate.eq_ignore_ascii_case(id))
    }
}

/// Handle shared with the catalog, so later property changes are visible
struct MemoryHandle(Rc<MemoryDevice>);

impl PropertySource for MemoryHandle {
    fn fetch_property(&self, key: &str) -> Result<Option<DeviceProperty>> {
        Ok(self
            .0
            .properties
            .borrow()
            .iter()
            .find(|p| p.is_named(key))
            .cloned())
    }
}

/// Device catalog held in memory, evaluating filters natively
#[derive(Default)]
pub struct MemoryCatalog {
    devices: Vec<Rc<MemoryDevice>>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: DeviceSnapshot) -> Self {
        let mut catalog = Self::new();
        for device in snapshot.devices {
            catalog.add_device(device.record, device.properties);
        }
        catalog
    }

    pub fn add_device(&mut self, record: EntityRecord, properties: Vec<DeviceProperty>) {
        self.devices.push(Rc::new(MemoryDevice {
            record,
            properties: RefCell::new(properties),
        }));
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Insert or replace a property on the device with the given id
    pub fn set_property(&self, device_id: &str, property: DeviceProperty) -> Result<()> {
        let device = self.device(device_id)?;
        let mut properties = device.properties.borrow_mut();

        match properties.iter_mut().find(|p| p.key.eq_ignore_ascii_case(&property.key)) {
            Some(existing) => *existing = property,
            None => properties.push(property),
        }
        Ok(())
    }

    /// Remove a property; returns whether it existed
    pub fn remove_property(&self, device_id: &str, key: &str) -> Result<bool> {
        let device = self.device(device_id)?;
        let mut properties = device.properties.borrow_mut();
        let before = properties.len();
        properties.retain(|p| !p.is_named(key));
        Ok(properties.len() != before)
    }

    fn device(&self, device_id: &str) -> Result<&Rc<MemoryDevice>> {
        self.devices
            .iter()
            .find(|d| d.has_id(device_id))
            .ok_or_else(|| PnpError::not_found(format!("No device with id {}", device_id)))
    }
}

impl DeviceCatalog for MemoryCatalog {
    fn query(&self, filter: &EntityFilter) -> Result<Vec<PnpEntity>> {
        Ok(self
            .devices
            .iter()
            .filter(|d| filter.matches(&d.record))
            .map(|d| PnpEntity::new(d.record.clone(), Box::new(MemoryHandle(Rc::clone(d)))))
            .collect())
    }
}

/// One device inside a snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotDevice {
    #[serde(flatten)]
    pub record: EntityRecord,
    #[serde(default)]
    pub properties: Vec<DeviceProperty>,
}

/// Point-in-time copy of PnP records and selected properties
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceSnapshot {
    #[serde(default)]
    pub captured_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub devices: Vec<SnapshotDevice>,
}

impl DeviceSnapshot {
    /// Copy every entity matching `filter`, with the listed property keys
    pub fn capture<C>(catalog: &C, filter: &EntityFilter, keys: &[String]) -> Result<Self>
    where
        C: DeviceCatalog + ?Sized,
    {
        filter.validate()?;

        let mut devices = Vec::new();
        for entity in catalog.query(filter)? {
            let mut properties = Vec::new();
            for key in keys {
                match entity.device_property(key)? {
                    Some(property) => properties.push(property),
                    None => log::debug!(
                        "Skipping {} on {}: no value",
                        key,
                        entity.name().unwrap_or("<unnamed>")
                    ),
                }
            }
            devices.push(SnapshotDevice {
                record: entity.record().clone(),
                properties,
            });
        }

        Ok(Self {
            captured_at: Some(Utc::now()),
            devices,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        let snapshot = serde_json::from_str(&data)?;
        Ok(snapshot)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }
}
