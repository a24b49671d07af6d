use super::common::{battery, connected, record, xm4_catalog, HANDS_FREE_ID, HEADPHONES_ID};
use chrono::{TimeZone, Utc};
use wmipnp::core::property::{BATTERY_LEVEL, IS_CONNECTED, LAST_CONNECTED_TIME};
use wmipnp::core::{DataType, DeviceProperty, Headset, MemoryCatalog, PnpEntity, PropertyValue};
use wmipnp::PnpError;

#[test]
fn test_create_with_default_names() {
    let catalog = xm4_catalog();
    let headset = Headset::create(&catalog).unwrap();

    assert_eq!(headset.hands_free().device_id(), Some(HANDS_FREE_ID));
    assert_eq!(headset.headphones().device_id(), Some(HEADPHONES_ID));
}

#[test]
fn test_create_by_reports_missing_node() {
    let catalog = xm4_catalog();

    let err = Headset::create_by(&catalog, "WH-1000XM5 Hands-Free AG", "WH-1000XM4").unwrap_err();
    assert_eq!(err.to_string(), "Can not create WH-1000XM5 Hands-Free AG entity");

    let err = Headset::create_by(&catalog, "WH-1000XM4 Hands-Free AG", "WH-1000XM5").unwrap_err();
    assert_eq!(err.to_string(), "Can not create WH-1000XM5 entity");
}

#[test]
fn test_battery_level() {
    let catalog = xm4_catalog();
    let headset = Headset::create(&catalog).unwrap();
    assert_eq!(headset.battery_level().unwrap(), 80);

    catalog
        .set_property(HANDS_FREE_ID, battery(HANDS_FREE_ID, 15))
        .unwrap();
    assert_eq!(headset.battery_level().unwrap(), 15);
}

#[test]
fn test_battery_level_missing_is_error() {
    let catalog = xm4_catalog();
    let headset = Headset::create(&catalog).unwrap();

    catalog.remove_property(HANDS_FREE_ID, BATTERY_LEVEL).unwrap();
    assert!(matches!(headset.battery_level(), Err(PnpError::NotFound(_))));
}

#[test]
fn test_battery_level_wrong_type_is_error() {
    let catalog = xm4_catalog();
    let headset = Headset::create(&catalog).unwrap();

    catalog
        .set_property(
            HANDS_FREE_ID,
            DeviceProperty::new(
                HANDS_FREE_ID,
                BATTERY_LEVEL,
                DataType::String,
                Some(PropertyValue::String("full".to_string())),
                None,
            ),
        )
        .unwrap();
    assert!(matches!(headset.battery_level(), Err(PnpError::PropertyValue(_))));
}

#[test]
fn test_connection_state() {
    let catalog = xm4_catalog();
    let headset = Headset::create(&catalog).unwrap();
    assert!(!headset.is_connected().unwrap());

    catalog
        .set_property(HEADPHONES_ID, connected(HEADPHONES_ID, true))
        .unwrap();
    assert!(headset.is_connected().unwrap());

    catalog.remove_property(HEADPHONES_ID, IS_CONNECTED).unwrap();
    assert!(headset.is_connected().is_err());
}

#[test]
fn test_last_connected_time_is_utc() {
    let catalog = xm4_catalog();
    let headset = Headset::create(&catalog).unwrap();

    let expected = Utc.with_ymd_and_hms(2024, 5, 2, 15, 30, 0).unwrap();
    assert_eq!(headset.last_connected_time().unwrap(), expected);
}

#[test]
fn test_last_connected_time_missing_while_connected() {
    let catalog = xm4_catalog();
    let headset = Headset::create(&catalog).unwrap();

    catalog
        .remove_property(HEADPHONES_ID, LAST_CONNECTED_TIME)
        .unwrap();
    let err = headset.last_connected_time().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Can not find `LastConnectedTime` property. It is possible the device is still connected."
    );
}

#[test]
fn test_status_collects_every_value() {
    let catalog = xm4_catalog();
    let headset = Headset::create(&catalog).unwrap();

    let status = headset.status();
    assert_eq!(status.battery_level, Some(80));
    assert_eq!(status.connected, Some(false));
    assert_eq!(
        status.last_connected_time,
        Some(Utc.with_ymd_and_hms(2024, 5, 2, 15, 30, 0).unwrap())
    );

    catalog
        .remove_property(HEADPHONES_ID, LAST_CONNECTED_TIME)
        .unwrap();
    let status = headset.status();
    assert_eq!(status.battery_level, Some(80));
    assert_eq!(status.last_connected_time, None);

    let json = serde_json::to_value(&status).unwrap();
    assert_eq!(json["battery_level"], 80);
    assert!(json["last_connected_time"].is_null());
}

#[test]
fn test_from_entities_skips_lookup() {
    let mut catalog = MemoryCatalog::new();
    catalog.add_device(
        record("Headset Battery Node", "BTHENUM\\A"),
        vec![battery("BTHENUM\\A", 42)],
    );
    catalog.add_device(
        record("Headset State Node", "BTHENUM\\B"),
        vec![connected("BTHENUM\\B", true)],
    );

    let battery_entity = PnpEntity::by_device_id(&catalog, "BTHENUM\\A")
        .unwrap()
        .unwrap();
    let state_entity = PnpEntity::by_device_id(&catalog, "BTHENUM\\B")
        .unwrap()
        .unwrap();

    let headset = Headset::from_entities(battery_entity, state_entity);
    assert_eq!(headset.battery_level().unwrap(), 42);
    assert!(headset.is_connected().unwrap());
    assert!(headset.last_connected_time().is_err());
}

#[test]
fn test_battery_level_accepts_wider_integer() {
    let catalog = xm4_catalog();
    let headset = Headset::create(&catalog).unwrap();

    catalog
        .set_property(
            HANDS_FREE_ID,
            DeviceProperty::new(
                HANDS_FREE_ID,
                BATTERY_LEVEL,
                DataType::UInt32,
                Some(PropertyValue::UInt32(95)),
                None,
            ),
        )
        .unwrap();
    assert_eq!(headset.battery_level().unwrap(), 95);

    catalog
        .set_property(
            HANDS_FREE_ID,
            DeviceProperty::new(
                HANDS_FREE_ID,
                BATTERY_LEVEL,
                DataType::UInt32,
                Some(PropertyValue::UInt32(300)),
                None,
            ),
        )
        .unwrap();
    assert!(matches!(headset.battery_level(), Err(PnpError::PropertyValue(_))));
}

#[test]
fn test_connection_flag_wrong_type_is_error() {
    let catalog = xm4_catalog();
    let headset = Headset::create(&catalog).unwrap();

    catalog
        .set_property(
            HEADPHONES_ID,
            DeviceProperty::new(
                HEADPHONES_ID,
                IS_CONNECTED,
                DataType::Byte,
                Some(PropertyValue::Byte(1)),
                None,
            ),
        )
        .unwrap();
    assert!(matches!(headset.is_connected(), Err(PnpError::PropertyValue(_))));
}

#[test]
fn test_last_connected_time_with_wildcard_microseconds() {
    let catalog = xm4_catalog();
    let headset = Headset::create(&catalog).unwrap();

    catalog
        .set_property(
            HEADPHONES_ID,
            super::common::last_connected(HEADPHONES_ID, "20240502173000.******+120"),
        )
        .unwrap();
    let expected = Utc.with_ymd_and_hms(2024, 5, 2, 15, 30, 0).unwrap();
    assert_eq!(headset.last_connected_time().unwrap(), expected);
    assert_eq!(headset.status().last_connected_time, Some(expected));
}
