// Validation of lookup strings before they are embedded in a WQL query

use crate::error::{PnpError, Result};

/// Maximum length of a friendly name or device id lookup
const MAX_LOOKUP_LENGTH: usize = 512;

/// Validates a friendly name, substring or device id used as a lookup key.
///
/// Rejects empty input, control characters (including NUL) and overly long
/// strings. Quotes and backslashes are allowed; escaping happens when the
/// predicate is built.
pub fn validate_lookup(kind: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PnpError::invalid_query(format!("{} cannot be empty", kind)));
    }

    let length = value.chars().count();
    if length > MAX_LOOKUP_LENGTH {
        return Err(PnpError::invalid_query(format!(
            "{} is too long ({} characters, max {})",
            kind, length, MAX_LOOKUP_LENGTH
        )));
    }

    if let Some(ch) = value.chars().find(|c| c.is_control()) {
        return Err(PnpError::invalid_query(format!(
            "{} contains control character {:?}",
            kind, ch
        )));
    }

    Ok(())
}

/// Validates a property key (`{GUID} pid` or a `DEVPKEY_*` name)
pub fn validate_property_key(key: &str) -> Result<()> {
    validate_lookup("Property key", key)
}
