use thiserror::Error;

use super::types::LineItemId;

/// Errors that can occur while building or editing an invoice.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InvoiceError {
    /// One or more validation rules failed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Builder encountered invalid or missing configuration.
    #[error("builder error: {0}")]
    Builder(String),

    /// The only remaining line item cannot be removed.
    #[error("an invoice must keep at least one line item")]
    LastLineItem,

    /// No line item with the given id exists on the invoice.
    #[error("line item {0} not found")]
    UnknownLineItem(LineItemId),

    /// Country code is not in the country tax table.
    #[error("unknown country code '{0}'")]
    UnknownCountry(String),

    /// Region code is not valid for the selected country.
    #[error("unknown region '{region}' for country '{country}'")]
    UnknownRegion { country: String, region: String },

    /// Document extraction failed.
    #[error("extraction error: {0}")]
    Extraction(String),
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "client.state_code").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Join validation errors into a single [`InvoiceError::Validation`].
pub(crate) fn validation_failure(errors: &[ValidationError]) -> InvoiceError {
    let msg = errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ");
    InvoiceError::Validation(msg)
}
