// wmipnp library - public API

// Re-export error types
pub mod error;
pub use error::{PnpError, Result};

// Module declarations
pub mod cli;
pub mod commands;
pub mod core;
pub mod platform;
pub mod ui;

// Re-export commonly used types
pub use crate::core::config::Config;
pub use crate::core::{DeviceCatalog, DeviceProperty, EntityFilter, Headset, MemoryCatalog, PnpEntity};

/// Initialize logging. `RUST_LOG` takes precedence over the default level.
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}
