// A property listing as the dashboard believes it exists in the remote store.
//
// Notes
// - `id` is assigned by the store and never changes.
// - `created_at` is epoch milliseconds, only used for sorting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PropertyStatus {
    #[default]
    Available,
    Booked,
}

impl PropertyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyStatus::Available => "Available",
            PropertyStatus::Booked => "Booked",
        }
    }
}

impl fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for PropertyStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "available" => Ok(PropertyStatus::Available),
            "booked" => Ok(PropertyStatus::Booked),
            _ => Err(UnknownStatus(s.to_string())),
        }
    }
}

/// Validated field values, as written to the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordFields {
    pub name: String,
    pub price_per_night: f64,
    pub status: PropertyStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: String,
    pub name: String,
    pub price_per_night: f64,
    pub status: PropertyStatus,
    pub created_at: Option<i64>,
}

impl Record {
    pub fn from_fields(id: impl Into<String>, fields: RecordFields) -> Self {
        Self {
            id: id.into(),
            name: fields.name,
            price_per_night: fields.price_per_night,
            status: fields.status,
            created_at: fields.created_at,
        }
    }

    /// Replaces the editable fields. `id` and `created_at` are kept.
    pub fn apply(&mut self, fields: &RecordFields) {
        self.name = fields.name.clone();
        self.price_per_night = fields.price_per_night;
        self.status = fields.status;
    }
}
