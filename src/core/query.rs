use crate::core::entity::EntityRecord;
use crate::core::validation::validate_lookup;
use crate::error::Result;

/// Projection and source of every entity lookup
pub const SELECT_PNP_ENTITY_WHERE: &str =
    "SELECT Name,Description,ClassGuid,DeviceID,PNPDeviceID FROM Win32_PnPEntity WHERE ";

pub const NAME_FIELD: &str = "Name";
pub const DESCRIPTION_FIELD: &str = "Description";
pub const CLASS_GUID_FIELD: &str = "ClassGuid";
pub const DEVICE_ID_FIELD: &str = "DeviceID";
pub const PNP_DEVICE_ID_FIELD: &str = "PNPDeviceID";

/// Predicate used to locate `Win32_PnPEntity` records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityFilter {
    /// Exact friendly name
    FriendlyName(String),
    /// Friendly name containing the text
    FriendlyNameLike(String),
    /// `DeviceID` or `PNPDeviceID` equal to the id.
    ///
    /// With `duplicate_slashes` the id is given in its natural form and every
    /// `\` is doubled for WQL. Without it the id is already escaped.
    DeviceId { id: String, duplicate_slashes: bool },
}

impl EntityFilter {
    pub fn friendly_name(name: impl Into<String>) -> Self {
        EntityFilter::FriendlyName(name.into())
    }

    pub fn friendly_name_like(name: impl Into<String>) -> Self {
        EntityFilter::FriendlyNameLike(name.into())
    }

    pub fn device_id(id: impl Into<String>) -> Self {
        EntityFilter::DeviceId {
            id: id.into(),
            duplicate_slashes: true,
        }
    }

    /// Device id already escaped for WQL (`\\` separators)
    pub fn device_id_raw(id: impl Into<String>) -> Self {
        EntityFilter::DeviceId {
            id: id.into(),
            duplicate_slashes: false,
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            EntityFilter::FriendlyName(name) => validate_lookup("Friendly name", name),
            EntityFilter::FriendlyNameLike(name) => validate_lookup("Friendly name", name),
            EntityFilter::DeviceId { id, .. } => validate_lookup("Device id", id),
        }
    }

    /// WHERE clause of the query
    pub fn predicate(&self) -> String {
        match self {
            EntityFilter::FriendlyName(name) => {
                format!("{}='{}'", NAME_FIELD, wql_literal(name))
            }
            EntityFilter::FriendlyNameLike(name) => {
                format!("{} LIKE '%{}%'", NAME_FIELD, wql_literal(name))
            }
            EntityFilter::DeviceId {
                id,
                duplicate_slashes,
            } => {
                let id = if *duplicate_slashes {
                    wql_literal(id)
                } else {
                    escape_quotes(id)
                };
                format!(
                    "{}='{}' OR {}='{}'",
                    DEVICE_ID_FIELD, id, PNP_DEVICE_ID_FIELD, id
                )
            }
        }
    }

    /// Full WQL statement
    pub fn to_wql(&self) -> String {
        format!("{}{}", SELECT_PNP_ENTITY_WHERE, self.predicate())
    }

    /// Evaluates the predicate against a record with WQL's case-insensitive
    /// string comparison. Names are compared in their natural (unescaped) form,
    /// which is what the escaped WQL literal denotes.
    pub fn matches(&self, record: &EntityRecord) -> bool {
        match self {
            EntityFilter::FriendlyName(name) => record
                .name
                .as_deref()
                .is_some_and(|n| n.to_lowercase() == name.to_lowercase()),
            EntityFilter::FriendlyNameLike(name) => record
                .name
                .as_deref()
                .is_some_and(|n| n.to_lowercase().contains(&name.to_lowercase())),
            EntityFilter::DeviceId {
                id,
                duplicate_slashes,
            } => {
                let natural = if *duplicate_slashes {
                    id.to_lowercase()
                } else {
                    id.replace("\\\\", "\\").to_lowercase()
                };
                [&record.device_id, &record.pnp_device_id]
                    .into_iter()
                    .flatten()
                    .any(|candidate| candidate.to_lowercase() == natural)
            }
        }
    }
}

/// Escape a natural string for a single-quoted WQL literal
fn wql_literal(value: &str) -> String {
    escape_quotes(&value.replace('\\', "\\\\"))
}

/// Escape only quotes, for ids whose backslashes are already doubled
fn escape_quotes(value: &str) -> String {
    value.replace('\'', "\\'")
}
