use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::SubmissionId;

/// Contact form payload handed to the delivery collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub id: SubmissionId,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactAck {
    pub submission_id: SubmissionId,
    pub accepted_at: DateTime<Utc>,
}

impl ContactAck {
    pub fn for_submission(submission: &ContactSubmission) -> Self {
        Self {
            submission_id: submission.id,
            accepted_at: Utc::now(),
        }
    }
}
