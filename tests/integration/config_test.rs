use tempfile::TempDir;
use wmipnp::core::Config;

#[test]
fn test_config_load_nonexistent_returns_default() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("config.json")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_config_save_and_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("wmipnp").join("config.json");

    let mut config = Config::default();
    config.set_hands_free_name("WH-1000XM5 Hands-Free AG".to_string());
    config.set_headphones_name("WH-1000XM5".to_string());
    config.json_output = true;
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.hands_free_name, "WH-1000XM5 Hands-Free AG");
    assert_eq!(loaded.headphones_name, "WH-1000XM5");
    assert!(loaded.json_output);
}

#[test]
fn test_config_empty_file_returns_default() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    std::fs::write(&path, "").unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn test_config_path_is_under_wmipnp() {
    if let Ok(path) = Config::get_config_path() {
        assert!(path.ends_with("wmipnp/config.json") || path.ends_with("wmipnp\\config.json"));
    }
}
