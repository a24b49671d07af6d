use crate::core::{
    DataType, DeviceCatalog, DeviceProperty, EntityFilter, EntityRecord, PnpEntity,
    PropertySource, PropertyValue,
};
use crate::error::{PnpError, Result};
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use wmi::{Variant, WMIConnection};

const GET_DEVICE_PROPERTIES_METHOD: &str = "GetDeviceProperties";

#[derive(Deserialize, Debug)]
#[serde(rename = "Win32_PnPEntity")]
#[serde(rename_all = "PascalCase")]
struct Win32PnPEntity {
    name: Option<String>,
    description: Option<String>,
    class_guid: Option<String>,
    #[serde(rename = "DeviceID")]
    device_id: Option<String>,
    #[serde(rename = "PNPDeviceID")]
    pnp_device_id: Option<String>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GetDevicePropertiesInput {
    device_property_keys: Vec<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GetDevicePropertiesOutput {
    #[serde(default)]
    device_properties: Option<Vec<Win32PnPDeviceProperty>>,
}

#[derive(Deserialize, Debug)]
#[serde(rename = "Win32_PnPDeviceProperty")]
struct Win32PnPDeviceProperty {
    #[serde(rename = "DeviceID")]
    device_id: Option<String>,
    key: Option<String>,
    #[serde(rename = "KeyName")]
    key_name: Option<String>,
    #[serde(rename = "Type")]
    type_code: Option<u32>,
    #[serde(rename = "Data")]
    data: Option<Variant>,
}

/// `Win32_PnPEntity` catalog over a WMI connection to `root\cimv2`
pub struct WmiCatalog {
    connection: Rc<WMIConnection>,
}

impl WmiCatalog {
    pub fn new() -> Result<Self> {
        let connection = WMIConnection::new()
            .map_err(|e| PnpError::wmi(format!("Failed to connect to WMI: {}", e)))?;

        Ok(Self {
            connection: Rc::new(connection),
        })
    }
}

impl DeviceCatalog for WmiCatalog {
    fn query(&self, filter: &EntityFilter) -> Result<Vec<PnpEntity>> {
        let entities: Vec<Win32PnPEntity> = self
            .connection
            .raw_query(filter.to_wql())
            .map_err(|e| PnpError::wmi(format!("WMI query failed: {}", e)))?;

        let mut found = Vec::with_capacity(entities.len());
        for entity in entities {
            // Methods are invoked through the object path, keyed by DeviceID
            let Some(device_id) = entity.device_id.as_deref() else {
                log::debug!("Skipping PnP entity without DeviceID: {:?}", entity.name);
                continue;
            };

            let handle = WmiObjectHandle {
                connection: Rc::clone(&self.connection),
                object_path: object_path(device_id),
            };
            let record = EntityRecord {
                name: entity.name,
                description: entity.description,
                class_guid: entity.class_guid,
                device_id: entity.device_id,
                pnp_device_id: entity.pnp_device_id,
            };
            found.push(PnpEntity::new(record, Box::new(handle)));
        }

        Ok(found)
    }
}

struct WmiObjectHandle {
    connection: Rc<WMIConnection>,
    object_path: String,
}

impl PropertySource for WmiObjectHandle {
    fn fetch_property(&self, key: &str) -> Result<Option<DeviceProperty>> {
        let input = GetDevicePropertiesInput {
            device_property_keys: vec![key.to_string()],
        };

        let output: GetDevicePropertiesOutput = match self
            .connection
            .exec_instance_method::<Win32PnPEntity, _>(
                &self.object_path,
                GET_DEVICE_PROPERTIES_METHOD,
                input,
            ) {
            Ok(output) => output,
            Err(e) => {
                // WMI reports unknown or malformed keys as a method failure
                log::debug!("{} failed for {}: {}", GET_DEVICE_PROPERTIES_METHOD, key, e);
                return Ok(None);
            }
        };

        let Some(raw) = output.device_properties.and_then(|p| p.into_iter().next()) else {
            return Ok(None);
        };

        let data_type = DataType::from_code(raw.type_code.unwrap_or(0));
        let data = raw.data.and_then(to_property_value);

        Ok(Some(DeviceProperty::new(
            raw.device_id.unwrap_or_default(),
            raw.key.unwrap_or_else(|| key.to_string()),
            data_type,
            data,
            raw.key_name,
        )))
    }
}

/// `Win32_PnPEntity.DeviceID="..."` with `\` and `"` escaped
fn object_path(device_id: &str) -> String {
    let escaped = device_id.replace('\\', "\\\\").replace('"', "\\\"");
    format!("Win32_PnPEntity.DeviceID=\"{}\"", escaped)
}

fn to_property_value(variant: Variant) -> Option<PropertyValue> {
    match variant {
        Variant::Empty | Variant::Null => None,
        Variant::String(s) => Some(PropertyValue::String(s)),
        Variant::Bool(b) => Some(PropertyValue::Bool(b)),
        Variant::I1(v) => Some(PropertyValue::SByte(v)),
        Variant::UI1(v) => Some(PropertyValue::Byte(v)),
        Variant::I2(v) => Some(PropertyValue::Int16(v)),
        Variant::UI2(v) => Some(PropertyValue::UInt16(v)),
        Variant::I4(v) => Some(PropertyValue::Int32(v)),
        Variant::UI4(v) => Some(PropertyValue::UInt32(v)),
        Variant::I8(v) => Some(PropertyValue::Int64(v)),
        Variant::UI8(v) => Some(PropertyValue::UInt64(v)),
        Variant::R4(v) => Some(PropertyValue::Float(v)),
        Variant::R8(v) => Some(PropertyValue::Double(v)),
        Variant::Array(items) => array_value(items),
        other => {
            log::debug!("Unsupported property variant: {:?}", other);
            None
        }
    }
}

fn array_value(items: Vec<Variant>) -> Option<PropertyValue> {
    let bytes: Option<Vec<u8>> = items
        .iter()
        .map(|v| match v {
            Variant::UI1(b) => Some(*b),
            _ => None,
        })
        .collect();
    if let Some(bytes) = bytes {
        return Some(PropertyValue::Binary(bytes));
    }

    let strings: Option<Vec<String>> = items
        .into_iter()
        .map(|v| match v {
            Variant::String(s) => Some(s),
            _ => None,
        })
        .collect();
    strings.map(PropertyValue::StringList)
}
