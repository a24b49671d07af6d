// Core PnP lookup and property logic

pub mod catalog;
pub mod cim_datetime;
pub mod config;
pub mod entity;
pub mod headset;
pub mod memory;
pub mod property;
pub mod query;
pub mod validation;

// Re-export commonly used items
pub use catalog::{DeviceCatalog, PropertySource};
pub use config::Config;
pub use entity::{EntityRecord, PnpEntity};
pub use headset::{Headset, HeadsetStatus};
pub use memory::{DeviceSnapshot, MemoryCatalog, SnapshotDevice};
pub use property::{DataType, DeviceProperty, PropertyValue};
pub use query::EntityFilter;
