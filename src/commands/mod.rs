// Command handlers module
pub mod config;
pub mod dump;
pub mod find;
pub mod headset;
pub mod property;
pub mod version;

use crate::core::{Config, DeviceCatalog, DeviceSnapshot, MemoryCatalog};
use crate::platform;
use anyhow::{Context, Result};
use clap::ArgMatches;
use std::path::Path;

// Re-exports for cleaner imports
pub use dump::execute as dump;
pub use find::execute as find;
pub use headset::execute as headset;
pub use property::execute as property;
pub use version::execute as version;

/// Device catalog selected by the global `--snapshot` option
pub fn open_catalog(matches: &ArgMatches) -> Result<Box<dyn DeviceCatalog>> {
    match matches.get_one::<String>("snapshot") {
        Some(path) => {
            let snapshot = DeviceSnapshot::load(Path::new(path))
                .with_context(|| format!("Failed to load snapshot: {}", path))?;
            log::debug!("Replaying {} device(s) from {}", snapshot.devices.len(), path);
            Ok(Box::new(MemoryCatalog::from_snapshot(snapshot)))
        }
        None => platform::system_catalog().context("Failed to open the device catalog"),
    }
}

/// JSON output requested by `--json` or by the saved configuration
pub fn wants_json(matches: &ArgMatches, config: &Config) -> bool {
    matches.get_flag("json") || config.json_output
}
