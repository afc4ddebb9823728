use shared::error::ErrorCode;
use thiserror::Error;

use crate::contact::ContactField;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SiteError {
    #[error("carousel requires at least one item")]
    EmptyCarousel,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("a submission is already in flight")]
    AlreadySubmitting,
    #[error("missing required fields: {}", format_fields(.0))]
    MissingFields(Vec<ContactField>),
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
    #[error("contact delivery failed: {0}")]
    Delivery(String),
    #[error("contact endpoint rejected submission ({status}): {message}")]
    Rejected {
        status: u16,
        code: Option<ErrorCode>,
        message: String,
    },
}

impl ContactError {
    /// Errors raised before anything left the form.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            ContactError::AlreadySubmitting
                | ContactError::MissingFields(_)
                | ContactError::InvalidEmail(_)
        )
    }
}

fn format_fields(fields: &[ContactField]) -> String {
    fields
        .iter()
        .map(|field| field.label())
        .collect::<Vec<_>>()
        .join(", ")
}
