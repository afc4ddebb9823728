//! UI/backend events and error modeling for the brochure controller.

use shared::{domain::SubmissionId, protocol::ContactAck};
use site_core::error::ContactError;

#[derive(Debug)]
pub enum UiEvent {
    Info(String),
    Error(UiError),
    ContactCompleted {
        id: SubmissionId,
        result: Result<ContactAck, ContactError>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Validation,
    Transport,
    Rejected,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    ContactSubmit,
    Newsletter,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("invalid")
            || message_lower.contains("missing")
            || message_lower.contains("required")
            || message_lower.contains("malformed")
        {
            UiErrorCategory::Validation
        } else if message_lower.contains("rejected")
            || message_lower.contains("refused submission")
        {
            UiErrorCategory::Rejected
        } else if message_lower.contains("timeout")
            || message_lower.contains("timed out")
            || message_lower.contains("connection")
            || message_lower.contains("unreachable")
            || message_lower.contains("queue is full")
            || message_lower.contains("disconnect")
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn from_contact(err: &ContactError) -> Self {
        let category = match err {
            _ if err.is_local() => UiErrorCategory::Validation,
            ContactError::Rejected { .. } => UiErrorCategory::Rejected,
            _ => UiErrorCategory::Transport,
        };
        Self {
            category,
            context: UiErrorContext::ContactSubmit,
            message: err.to_string(),
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn title(&self) -> &'static str {
        match (self.context, self.category) {
            (UiErrorContext::BackendStartup, _) => "Contact service unavailable",
            (_, UiErrorCategory::Validation) => "Please check the form",
            (_, UiErrorCategory::Transport) => "Connection problem",
            (_, UiErrorCategory::Rejected) => "Message not accepted",
            (_, UiErrorCategory::Unknown) => "Something went wrong",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;
    use site_core::contact::ContactField;

    #[test]
    fn classifies_backend_command_processor_disconnect_as_transport_error() {
        let err = UiError::from_message(
            UiErrorContext::ContactSubmit,
            "Backend command processor disconnected (possible startup/runtime failure)",
        );
        assert_eq!(err.category(), UiErrorCategory::Transport);
    }

    #[test]
    fn classifies_keyword_messages() {
        assert_eq!(
            UiError::from_message(UiErrorContext::Newsletter, "invalid email address: bob")
                .category(),
            UiErrorCategory::Validation
        );
        assert_eq!(
            UiError::from_message(UiErrorContext::ContactSubmit, "endpoint rejected payload").category(),
            UiErrorCategory::Rejected
        );
        assert_eq!(
            UiError::from_message(UiErrorContext::ContactSubmit, "kaboom").category(),
            UiErrorCategory::Unknown
        );
    }

    #[test]
    fn typed_contact_errors_map_without_keyword_guessing() {
        let missing = UiError::from_contact(&ContactError::MissingFields(vec![ContactField::Name]));
        assert_eq!(missing.category(), UiErrorCategory::Validation);
        assert_eq!(missing.context(), UiErrorContext::ContactSubmit);
        assert_eq!(missing.title(), "Please check the form");

        let rejected = UiError::from_contact(&ContactError::Rejected {
            status: 503,
            code: Some(ErrorCode::Unavailable),
            message: "mailer offline".into(),
        });
        assert_eq!(rejected.category(), UiErrorCategory::Rejected);
        assert!(rejected.message().contains("mailer offline"));

        let delivery = UiError::from_contact(&ContactError::Delivery("invalid ack payload".into()));
        assert_eq!(delivery.category(), UiErrorCategory::Transport);
    }
}
