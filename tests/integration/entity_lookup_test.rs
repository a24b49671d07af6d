use super::common::{xm4_catalog, HANDS_FREE_ID, HEADPHONES_ID};
use wmipnp::core::{DeviceCatalog, EntityFilter, MemoryCatalog, PnpEntity};
use wmipnp::PnpError;

#[test]
fn test_by_friendly_name_is_exact() {
    let catalog = xm4_catalog();

    let headphones = PnpEntity::by_friendly_name(&catalog, "WH-1000XM4")
        .unwrap()
        .expect("headphones should be found");
    assert_eq!(headphones.device_id(), Some(HEADPHONES_ID));
    assert_eq!(headphones.pnp_device_id(), Some(HEADPHONES_ID));
    assert_eq!(headphones.description(), Some("Bluetooth Device"));
    assert_eq!(
        headphones.class_guid(),
        Some("{e0cbf06c-cd8b-4647-bb8a-263b43f0f974}")
    );

    assert!(PnpEntity::by_friendly_name(&catalog, "WH-1000")
        .unwrap()
        .is_none());
}

#[test]
fn test_by_friendly_name_ignores_case() {
    let catalog = xm4_catalog();
    let entity = PnpEntity::by_friendly_name(&catalog, "wh-1000xm4 hands-free ag")
        .unwrap()
        .unwrap();
    assert_eq!(entity.device_id(), Some(HANDS_FREE_ID));
}

#[test]
fn test_by_device_id() {
    let catalog = xm4_catalog();

    let entity = PnpEntity::by_device_id(&catalog, HANDS_FREE_ID)
        .unwrap()
        .unwrap();
    assert_eq!(entity.name(), Some("WH-1000XM4 Hands-Free AG"));

    let escaped = HANDS_FREE_ID.replace('\\', "\\\\");
    let raw = PnpEntity::by_device_id_raw(&catalog, &escaped)
        .unwrap()
        .unwrap();
    assert_eq!(raw.name(), Some("WH-1000XM4 Hands-Free AG"));

    assert!(PnpEntity::by_device_id(&catalog, "BTHENUM\\UNKNOWN")
        .unwrap()
        .is_none());
}

#[test]
fn test_like_friendly_name_returns_all_matches() {
    let catalog = xm4_catalog();

    let entities = PnpEntity::like_friendly_name(&catalog, "1000XM4").unwrap();
    let names: Vec<&str> = entities.iter().filter_map(|e| e.name()).collect();
    assert_eq!(names, vec!["WH-1000XM4 Hands-Free AG", "WH-1000XM4"]);

    assert!(PnpEntity::like_friendly_name(&catalog, "XM5")
        .unwrap()
        .is_empty());
}

#[test]
fn test_empty_catalog_finds_nothing() {
    let catalog = MemoryCatalog::new();
    assert!(catalog.is_empty());
    assert!(PnpEntity::by_friendly_name(&catalog, "WH-1000XM4")
        .unwrap()
        .is_none());
    assert!(catalog
        .first(&EntityFilter::friendly_name_like("WH"))
        .unwrap()
        .is_none());
}

#[test]
fn test_invalid_lookup_is_rejected() {
    let catalog = xm4_catalog();

    let err = PnpEntity::by_friendly_name(&catalog, "").unwrap_err();
    assert!(matches!(err, PnpError::InvalidQuery(_)));

    let err = PnpEntity::like_friendly_name(&catalog, "WH\n").unwrap_err();
    assert!(matches!(err, PnpError::InvalidQuery(_)));
}

#[test]
fn test_works_through_trait_object() {
    let catalog: Box<dyn DeviceCatalog> = Box::new(xm4_catalog());
    let entity = PnpEntity::by_friendly_name(&*catalog, "WH-1000XM4")
        .unwrap()
        .unwrap();
    assert_eq!(entity.device_id(), Some(HEADPHONES_ID));
}

#[test]
fn test_names_with_backslashes_and_quotes() {
    let mut catalog = MemoryCatalog::new();
    catalog.add_device(super::common::record("Audio\\", "SWD\\AUDIO\\1"), Vec::new());
    catalog.add_device(
        super::common::record("x\\' OR Name LIKE '%", "SWD\\AUDIO\\2"),
        Vec::new(),
    );

    let trailing = PnpEntity::by_friendly_name(&catalog, "Audio\\")
        .unwrap()
        .unwrap();
    assert_eq!(trailing.device_id(), Some("SWD\\AUDIO\\1"));

    let quoted = PnpEntity::by_friendly_name(&catalog, "x\\' OR Name LIKE '%")
        .unwrap()
        .unwrap();
    assert_eq!(quoted.device_id(), Some("SWD\\AUDIO\\2"));

    assert!(PnpEntity::by_friendly_name(&catalog, "Audio")
        .unwrap()
        .is_none());
}
