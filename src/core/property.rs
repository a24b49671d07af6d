use serde::{Deserialize, Serialize};
use std::fmt;

/// Battery level in percent, exposed by the hands-free audio gateway node.
pub const BATTERY_LEVEL: &str = "{104EA319-6EE2-4701-BD47-8DDBF425BBE5} 2";

/// Connection flag, exposed by the headset node.
pub const IS_CONNECTED: &str = "{83DA6326-97A6-4088-9453-A1923F573B29} 15";

/// Last time the headset connected. Absent while the device is connected.
pub const LAST_CONNECTED_TIME: &str = "{2BD67D8B-8BEB-48D5-87E0-6CDA3428040A} 11";

/// `Type` field of `Win32_PnPDeviceProperty`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataType {
    Empty,
    Null,
    SByte,
    Byte,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Float,
    Double,
    Decimal,
    Guid,
    Currency,
    Date,
    FileTime,
    Boolean,
    String,
    SecurityDescriptor,
    SecurityDescriptorString,
    DevPropKey,
    DevPropType,
    Error,
    NtStatus,
    StringIndirect,
    Binary,
    StringList,
    Other(u32),
}

impl DataType {
    pub fn from_code(code: u32) -> Self {
        match code {
            0 => DataType::Empty,
            1 => DataType::Null,
            2 => DataType::SByte,
            3 => DataType::Byte,
            4 => DataType::Int16,
            5 => DataType::UInt16,
            6 => DataType::Int32,
            7 => DataType::UInt32,
            8 => DataType::Int64,
            9 => DataType::UInt64,
            10 => DataType::Float,
            11 => DataType::Double,
            12 => DataType::Decimal,
            13 => DataType::Guid,
            14 => DataType::Currency,
            15 => DataType::Date,
            16 => DataType::FileTime,
            17 => DataType::Boolean,
            18 => DataType::String,
            19 => DataType::SecurityDescriptor,
            20 => DataType::SecurityDescriptorString,
            21 => DataType::DevPropKey,
            22 => DataType::DevPropType,
            23 => DataType::Error,
            24 => DataType::NtStatus,
            25 => DataType::StringIndirect,
            4099 => DataType::Binary,
            8210 => DataType::StringList,
            other => DataType::Other(other),
        }
    }

    pub fn code(&self) -> u32 {
        match self {
            DataType::Empty => 0,
            DataType::Null => 1,
            DataType::SByte => 2,
            DataType::Byte => 3,
            DataType::Int16 => 4,
            DataType::UInt16 => 5,
            DataType::Int32 => 6,
            DataType::UInt32 => 7,
            DataType::Int64 => 8,
            DataType::UInt64 => 9,
            DataType::Float => 10,
            DataType::Double => 11,
            DataType::Decimal => 12,
            DataType::Guid => 13,
            DataType::Currency => 14,
            DataType::Date => 15,
            DataType::FileTime => 16,
            DataType::Boolean => 17,
            DataType::String => 18,
            DataType::SecurityDescriptor => 19,
            DataType::SecurityDescriptorString => 20,
            DataType::DevPropKey => 21,
            DataType::DevPropType => 22,
            DataType::Error => 23,
            DataType::NtStatus => 24,
            DataType::StringIndirect => 25,
            DataType::Binary => 4099,
            DataType::StringList => 8210,
            DataType::Other(code) => *code,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Other(code) => write!(f, "Type({})", code),
            other => write!(f, "{:?}", other),
        }
    }
}

/// Native value of a device property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    Bool(bool),
    SByte(i8),
    Byte(u8),
    Int16(i16),
    UInt16(u16),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Float(f32),
    Double(f64),
    /// Strings, GUIDs and CIM datetimes all arrive as text
    String(String),
    Binary(Vec<u8>),
    StringList(Vec<String>),
}

impl PropertyValue {
    fn as_i128(&self) -> Option<i128> {
        match *self {
            PropertyValue::SByte(v) => Some(v as i128),
            PropertyValue::Byte(v) => Some(v as i128),
            PropertyValue::Int16(v) => Some(v as i128),
            PropertyValue::UInt16(v) => Some(v as i128),
            PropertyValue::Int32(v) => Some(v as i128),
            PropertyValue::UInt32(v) => Some(v as i128),
            PropertyValue::Int64(v) => Some(v as i128),
            PropertyValue::UInt64(v) => Some(v as i128),
            _ => None,
        }
    }

    /// Integer value if it fits in a byte
    pub fn as_u8(&self) -> Option<u8> {
        self.as_i128().and_then(|v| u8::try_from(v).ok())
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Bool(v) => write!(f, "{}", v),
            PropertyValue::SByte(v) => write!(f, "{}", v),
            PropertyValue::Byte(v) => write!(f, "{}", v),
            PropertyValue::Int16(v) => write!(f, "{}", v),
            PropertyValue::UInt16(v) => write!(f, "{}", v),
            PropertyValue::Int32(v) => write!(f, "{}", v),
            PropertyValue::UInt32(v) => write!(f, "{}", v),
            PropertyValue::Int64(v) => write!(f, "{}", v),
            PropertyValue::UInt64(v) => write!(f, "{}", v),
            PropertyValue::Float(v) => write!(f, "{}", v),
            PropertyValue::Double(v) => write!(f, "{}", v),
            PropertyValue::String(v) => write!(f, "{}", v),
            PropertyValue::Binary(bytes) => {
                let hex: Vec<String> = bytes.iter().map(|b| format!("{:02X}", b)).collect();
                write!(f, "{}", hex.join(" "))
            }
            PropertyValue::StringList(items) => write!(f, "{}", items.join("; ")),
        }
    }
}

/// A device property as returned by `GetDeviceProperties`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceProperty {
    pub device_id: String,
    /// `{GUID} pid` form
    pub key: String,
    /// e.g. `DEVPKEY_Device_InLocalMachineContainer`; the key itself when unnamed
    pub key_name: String,
    pub data_type: DataType,
    #[serde(default)]
    pub data: Option<PropertyValue>,
}

impl DeviceProperty {
    pub fn new(
        device_id: impl Into<String>,
        key: impl Into<String>,
        data_type: DataType,
        data: Option<PropertyValue>,
        key_name: Option<String>,
    ) -> Self {
        let key = key.into();
        let key_name = key_name.unwrap_or_else(|| key.clone());

        Self {
            device_id: device_id.into(),
            key,
            key_name,
            data_type,
            data,
        }
    }

    /// True when the property carries a usable value
    pub fn has_value(&self) -> bool {
        self.data_type != DataType::Empty && self.data.is_some()
    }

    /// Whether `key` names this property, either by key or by key name
    pub fn is_named(&self, key: &str) -> bool {
        self.key.eq_ignore_ascii_case(key) || self.key_name.eq_ignore_ascii_case(key)
    }
}
