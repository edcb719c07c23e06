// Local field checks shared by create and update.
//
// Responsibilities
// - Turn raw form input into RecordFields, or reject it before any remote call.
// - Never perform input or output.

use crate::modules::properties::core::record::{PropertyStatus, RecordFields};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name required")]
    NameRequired,

    #[error("invalid price")]
    InvalidPrice,
}

/// Form input as typed by the user. The price is still text at this point.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordInput {
    pub name: String,
    pub price_per_night: String,
    pub status: Option<PropertyStatus>,
}

impl RecordInput {
    pub fn new(name: impl Into<String>, price_per_night: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price_per_night: price_per_night.into(),
            status: None,
        }
    }

    pub fn with_status(mut self, status: PropertyStatus) -> Self {
        self.status = Some(status);
        self
    }
}

pub fn validate(input: &RecordInput) -> Result<RecordFields, ValidationError> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(ValidationError::NameRequired);
    }
    let price = input
        .price_per_night
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p >= 0.0)
        .ok_or(ValidationError::InvalidPrice)?;
    Ok(RecordFields {
        name: name.to_string(),
        // normalizes -0.0
        price_per_night: price + 0.0,
        status: input.status.unwrap_or_default(),
        created_at: None,
    })
}
