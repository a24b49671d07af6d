// Platform-specific device catalogs

#[cfg(windows)]
pub mod wmi_catalog;

#[cfg(windows)]
pub use wmi_catalog::WmiCatalog;

use crate::core::DeviceCatalog;
use crate::error::Result;

/// Catalog backed by the operating system's device manager
#[cfg(windows)]
pub fn system_catalog() -> Result<Box<dyn DeviceCatalog>> {
    Ok(Box::new(WmiCatalog::new()?))
}

#[cfg(not(windows))]
pub fn system_catalog() -> Result<Box<dyn DeviceCatalog>> {
    Err(crate::error::PnpError::unsupported(
        "PnP device queries need WMI, which is only available on Windows (use --snapshot to replay a captured device list)",
    ))
}
