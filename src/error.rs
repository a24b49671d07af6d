use std::io;
use thiserror::Error;

/// Error type for PnP lookups and property reads
#[derive(Error, Debug)]
pub enum PnpError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("WMI error: {0}")]
    Wmi(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Unexpected property value: {0}")]
    PropertyValue(String),

    #[error("Invalid CIM datetime '{0}'")]
    DateTime(String),

    #[error("Not supported on this platform: {0}")]
    Unsupported(String),
}

/// Result type alias for wmipnp
pub type Result<T> = std::result::Result<T, PnpError>;

impl PnpError {
    /// Create a WMI backend error
    pub fn wmi<S: Into<String>>(msg: S) -> Self {
        PnpError::Wmi(msg.into())
    }

    /// Create an invalid query error
    pub fn invalid_query<S: Into<String>>(msg: S) -> Self {
        PnpError::InvalidQuery(msg.into())
    }

    /// Create a not found error
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        PnpError::NotFound(msg.into())
    }

    pub fn property_value<S: Into<String>>(msg: S) -> Self {
        PnpError::PropertyValue(msg.into())
    }

    pub fn date_time<S: Into<String>>(input: S) -> Self {
        PnpError::DateTime(input.into())
    }

    pub fn unsupported<S: Into<String>>(msg: S) -> Self {
        PnpError::Unsupported(msg.into())
    }
}
