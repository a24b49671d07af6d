use std::path::PathBuf;
use wmipnp::core::property::{BATTERY_LEVEL, IS_CONNECTED, LAST_CONNECTED_TIME};
use wmipnp::core::{DataType, DeviceProperty, EntityRecord, MemoryCatalog, PropertyValue};

pub const HANDS_FREE_ID: &str = "BTHHFENUM\\BTHHFPAUDIO\\8&2B1B56A5&0&97";
pub const HEADPHONES_ID: &str = "BTHENUM\\DEV_F84E17FE9B55\\7&2A3C1F0&0&BLUETOOTHDEVICE_F84E17FE9B55";
pub const KEYBOARD_ID: &str = "HID\\VID_046D&PID_C52B&MI_00\\7&1A2B3C&0&0000";

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn record(name: &str, device_id: &str) -> EntityRecord {
    EntityRecord {
        name: Some(name.to_string()),
        description: Some("Bluetooth Device".to_string()),
        class_guid: Some("{e0cbf06c-cd8b-4647-bb8a-263b43f0f974}".to_string()),
        device_id: Some(device_id.to_string()),
        pnp_device_id: Some(device_id.to_string()),
    }
}

pub fn battery(device_id: &str, level: u8) -> DeviceProperty {
    DeviceProperty::new(
        device_id,
        BATTERY_LEVEL,
        DataType::Byte,
        Some(PropertyValue::Byte(level)),
        None,
    )
}

pub fn connected(device_id: &str, value: bool) -> DeviceProperty {
    DeviceProperty::new(
        device_id,
        IS_CONNECTED,
        DataType::Boolean,
        Some(PropertyValue::Bool(value)),
        Some("DEVPKEY_Device_IsConnected".to_string()),
    )
}

pub fn last_connected(device_id: &str, cim: &str) -> DeviceProperty {
    DeviceProperty::new(
        device_id,
        LAST_CONNECTED_TIME,
        DataType::FileTime,
        Some(PropertyValue::String(cim.to_string())),
        Some("DEVPKEY_Bluetooth_LastConnectedTime".to_string()),
    )
}

/// Disconnected headset at 80% plus an unrelated keyboard
pub fn xm4_catalog() -> MemoryCatalog {
    let mut catalog = MemoryCatalog::new();
    catalog.add_device(
        record("WH-1000XM4 Hands-Free AG", HANDS_FREE_ID),
        vec![battery(HANDS_FREE_ID, 80)],
    );
    catalog.add_device(
        record("WH-1000XM4", HEADPHONES_ID),
        vec![
            connected(HEADPHONES_ID, false),
            last_connected(HEADPHONES_ID, "20240502173000.000000+120"),
        ],
    );
    catalog.add_device(record("USB Receiver", KEYBOARD_ID), Vec::new());
    catalog
}
