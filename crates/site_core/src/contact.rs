//! Contact form draft and its submission state machine.
//!
//! ```text
//! Idle --begin_submit--> Submitting --ack--> Idle (draft cleared)
//!                                   --err--> Idle (draft kept)
//! ```

use chrono::{DateTime, Utc};
use shared::{
    domain::SubmissionId,
    protocol::{ContactAck, ContactSubmission},
};

use crate::{
    error::ContactError,
    gateway::ContactGateway,
    notifications::Notification,
};

pub const SUCCESS_TITLE: &str = "Message sent successfully!";
pub const SUCCESS_DESCRIPTION: &str = "We'll get back to you as soon as possible.";
pub const FAILURE_TITLE: &str = "Message not sent";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Full Name",
            ContactField::Email => "Email Address",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ContactField::Name => "John Smith",
            ContactField::Email => "john@example.com",
            ContactField::Subject => "Project Inquiry",
            ContactField::Message => "Tell us about your project...",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn is_empty(&self) -> bool {
        ContactField::ALL
            .iter()
            .all(|field| self.field(*field).is_empty())
    }

    pub fn missing_fields(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|field| self.field(*field).trim().is_empty())
            .collect()
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ContactError::MissingFields(missing));
        }
        if !looks_like_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail(self.email.trim().to_string()));
        }
        Ok(())
    }
}

/// Same shape check a browser applies to `type="email"` inputs: one `@`
/// with a non-empty local part and a dotted-or-bare non-empty domain.
pub fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Submitting { id: SubmissionId },
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    draft: ContactDraft,
    phase: FormPhase,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            draft: ContactDraft::default(),
            phase: FormPhase::Idle,
        }
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, FormPhase::Submitting { .. })
    }

    /// Input is blocked while a submission is in flight; returns whether the
    /// edit was applied.
    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) -> bool {
        if self.is_submitting() {
            return false;
        }
        *self.draft.field_mut(field) = value.into();
        true
    }

    pub fn begin_submit(&mut self, now: DateTime<Utc>) -> Result<ContactSubmission, ContactError> {
        if self.is_submitting() {
            tracing::debug!("ignoring contact submit while another is in flight");
            return Err(ContactError::AlreadySubmitting);
        }
        self.draft.validate()?;

        let id = SubmissionId::new();
        self.phase = FormPhase::Submitting { id };
        tracing::info!(submission_id = %id, "contact submission started");
        Ok(ContactSubmission {
            id,
            name: self.draft.name.trim().to_string(),
            email: self.draft.email.trim().to_string(),
            subject: self.draft.subject.trim().to_string(),
            message: self.draft.message.clone(),
            submitted_at: now,
        })
    }

    /// Applies the outcome of the submission `id`. Completions for anything
    /// other than the in-flight submission are ignored.
    pub fn complete(
        &mut self,
        id: SubmissionId,
        result: Result<ContactAck, ContactError>,
    ) -> Option<Notification> {
        match self.phase {
            FormPhase::Submitting { id: pending } if pending == id => {}
            _ => {
                tracing::debug!(submission_id = %id, "dropping stale contact completion");
                return None;
            }
        }
        self.phase = FormPhase::Idle;

        match result {
            Ok(ack) => {
                tracing::info!(submission_id = %ack.submission_id, "contact submission acknowledged");
                self.draft = ContactDraft::default();
                Some(Notification::success(SUCCESS_TITLE, SUCCESS_DESCRIPTION))
            }
            Err(err) => {
                tracing::warn!(submission_id = %id, error = %err, "contact submission failed");
                Some(Notification::error(FAILURE_TITLE, err.to_string()))
            }
        }
    }

    /// Runs a whole round trip against `gateway`.
    pub async fn submit_with<G>(
        &mut self,
        gateway: &G,
        now: DateTime<Utc>,
    ) -> Result<Notification, ContactError>
    where
        G: ContactGateway + ?Sized,
    {
        let submission = self.begin_submit(now)?;
        let result = gateway.submit_contact(&submission).await;
        let id = submission.id;
        Ok(self
            .complete(id, result)
            .unwrap_or_else(|| Notification::error(FAILURE_TITLE, "submission superseded")))
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/contact_tests.rs"]
mod tests;
