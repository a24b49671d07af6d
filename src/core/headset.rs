use crate::core::catalog::DeviceCatalog;
use crate::core::cim_datetime::parse_cim_datetime;
use crate::core::entity::PnpEntity;
use crate::core::property::{PropertyValue, BATTERY_LEVEL, IS_CONNECTED, LAST_CONNECTED_TIME};
use crate::error::{PnpError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Friendly name of the hands-free node, which reports the battery level
pub const HANDS_FREE_FRIENDLY_NAME: &str = "WH-1000XM4 Hands-Free AG";

/// Friendly name of the headphones node, which reports the connection state
pub const HEADPHONES_FRIENDLY_NAME: &str = "WH-1000XM4";

/// Sony WH-1000XM4 headset, composed of its two PnP nodes.
///
/// Every accessor reads the device again; nothing is cached.
#[derive(Debug)]
pub struct Headset {
    hands_free: PnpEntity,
    headphones: PnpEntity,
}

/// One-pass reading of all headset values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadsetStatus {
    pub battery_level: Option<u8>,
    pub connected: Option<bool>,
    pub last_connected_time: Option<DateTime<Utc>>,
}

impl Headset {
    /// Locate both nodes by their default friendly names
    pub fn create<C>(catalog: &C) -> Result<Self>
    where
        C: DeviceCatalog + ?Sized,
    {
        Self::create_by(catalog, HANDS_FREE_FRIENDLY_NAME, HEADPHONES_FRIENDLY_NAME)
    }

    /// Locate both nodes by exact friendly names
    pub fn create_by<C>(catalog: &C, hands_free_name: &str, headphones_name: &str) -> Result<Self>
    where
        C: DeviceCatalog + ?Sized,
    {
        let hands_free = PnpEntity::by_friendly_name(catalog, hands_free_name)?.ok_or_else(|| {
            PnpError::not_found(format!("Can not create {} entity", hands_free_name))
        })?;

        let headphones = PnpEntity::by_friendly_name(catalog, headphones_name)?.ok_or_else(|| {
            PnpError::not_found(format!("Can not create {} entity", headphones_name))
        })?;

        log::debug!(
            "Headset nodes: battery={:?} state={:?}",
            hands_free.device_id(),
            headphones.device_id()
        );

        Ok(Self::from_entities(hands_free, headphones))
    }

    /// Build from already located nodes without any lookup
    pub fn from_entities(battery_entity: PnpEntity, state_entity: PnpEntity) -> Self {
        Self {
            hands_free: battery_entity,
            headphones: state_entity,
        }
    }

    pub fn hands_free(&self) -> &PnpEntity {
        &self.hands_free
    }

    pub fn headphones(&self) -> &PnpEntity {
        &self.headphones
    }

    /// Battery charge in percent
    pub fn battery_level(&self) -> Result<u8> {
        let property = self
            .hands_free
            .device_property(BATTERY_LEVEL)?
            .ok_or_else(|| PnpError::not_found("Can not find `BatteryLevel` property"))?;

        property
            .data
            .as_ref()
            .and_then(PropertyValue::as_u8)
            .ok_or_else(|| {
                PnpError::property_value(format!("battery level {:?} is not a byte", property.data))
            })
    }

    pub fn is_connected(&self) -> Result<bool> {
        let property = self
            .headphones
            .device_property(IS_CONNECTED)?
            .ok_or_else(|| PnpError::not_found("Can not find `IsConnected` property"))?;

        property
            .data
            .as_ref()
            .and_then(PropertyValue::as_bool)
            .ok_or_else(|| {
                PnpError::property_value(format!(
                    "connection flag {:?} is not a boolean",
                    property.data
                ))
            })
    }

    /// Last time the headset connected, in UTC. Windows drops the property
    /// while the headset is connected.
    pub fn last_connected_time(&self) -> Result<DateTime<Utc>> {
        let property = self.headphones.device_property(LAST_CONNECTED_TIME)?.ok_or_else(|| {
            PnpError::not_found(
                "Can not find `LastConnectedTime` property. It is possible the device is still connected.",
            )
        })?;

        let text = property
            .data
            .as_ref()
            .and_then(|v| v.as_str())
            .ok_or_else(|| PnpError::property_value("last connected time is not a CIM datetime"))?;

        parse_cim_datetime(text)
    }

    pub fn status(&self) -> HeadsetStatus {
        HeadsetStatus {
            battery_level: log_failure("battery level", self.battery_level()),
            connected: log_failure("connection state", self.is_connected()),
            last_connected_time: log_failure("last connected time", self.last_connected_time()),
        }
    }
}

fn log_failure<T>(what: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(PnpError::NotFound(msg)) => {
            log::debug!("{}: {}", what, msg);
            None
        }
        Err(e) => {
            log::warn!("Failed to read {}: {}", what, e);
            None
        }
    }
}
