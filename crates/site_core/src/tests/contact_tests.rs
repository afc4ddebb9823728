use super::*;
use crate::{
    gateway::{SimulatedContactGateway, DEFAULT_SIMULATED_DELAY},
    notifications::NotificationKind,
};
use async_trait::async_trait;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

fn filled_form() -> ContactForm {
    let mut form = ContactForm::new();
    form.set_field(ContactField::Name, "Amanda Chen");
    form.set_field(ContactField::Email, "amanda@fashionforward.example");
    form.set_field(ContactField::Subject, "Storefront refresh");
    form.set_field(ContactField::Message, "We need a new checkout.");
    form
}

struct FailingGateway {
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl ContactGateway for FailingGateway {
    async fn submit_contact(
        &self,
        _submission: &ContactSubmission,
    ) -> Result<ContactAck, ContactError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(ContactError::Delivery("mailer offline".into()))
    }

    fn describe(&self) -> String {
        "failing".into()
    }
}

#[test]
fn set_field_updates_only_the_named_field() {
    let mut form = ContactForm::new();
    assert!(form.set_field(ContactField::Subject, "Hello"));
    assert_eq!(form.draft().subject, "Hello");
    assert!(form.draft().name.is_empty());
    assert!(!form.draft().is_empty());
}

#[test]
fn begin_submit_enters_submitting_and_blocks_input() {
    let mut form = filled_form();
    let submission = form.begin_submit(Utc::now()).expect("submission");
    assert!(form.is_submitting());
    assert_eq!(form.phase(), FormPhase::Submitting { id: submission.id });
    assert_eq!(submission.name, "Amanda Chen");

    assert!(!form.set_field(ContactField::Name, "someone else"));
    assert_eq!(form.draft().name, "Amanda Chen");
}

#[test]
fn second_submit_while_in_flight_is_rejected() {
    let mut form = filled_form();
    let first = form.begin_submit(Utc::now()).expect("first");
    let err = form.begin_submit(Utc::now()).expect_err("second");
    assert_eq!(err, ContactError::AlreadySubmitting);
    assert_eq!(form.phase(), FormPhase::Submitting { id: first.id });
}

#[test]
fn required_fields_are_enforced_before_submitting() {
    let mut form = ContactForm::new();
    form.set_field(ContactField::Email, "john@example.com");
    form.set_field(ContactField::Message, "   ");

    let err = form.begin_submit(Utc::now()).expect_err("missing");
    assert_eq!(
        err,
        ContactError::MissingFields(vec![
            ContactField::Name,
            ContactField::Subject,
            ContactField::Message
        ])
    );
    assert!(!form.is_submitting());
}

#[test]
fn malformed_email_is_rejected() {
    let mut form = filled_form();
    form.set_field(ContactField::Email, "amanda at example");
    assert!(matches!(
        form.begin_submit(Utc::now()),
        Err(ContactError::InvalidEmail(_))
    ));
}

#[test]
fn email_shape_check() {
    assert!(looks_like_email("john@example.com"));
    assert!(looks_like_email("ops@localhost"));
    assert!(!looks_like_email("john@"));
    assert!(!looks_like_email("@example.com"));
    assert!(!looks_like_email("a@b@c"));
    assert!(!looks_like_email("john smith@example.com"));
    assert!(!looks_like_email("john@example."));
}

#[test]
fn success_clears_every_field_and_returns_to_idle() {
    let mut form = filled_form();
    let submission = form.begin_submit(Utc::now()).expect("submission");
    let ack = ContactAck::for_submission(&submission);

    let notification = form.complete(submission.id, Ok(ack)).expect("notification");
    assert_eq!(notification.kind, NotificationKind::Success);
    assert_eq!(notification.title, SUCCESS_TITLE);
    assert_eq!(notification.description, SUCCESS_DESCRIPTION);
    assert_eq!(form.phase(), FormPhase::Idle);
    assert_eq!(form.draft(), &ContactDraft::default());
}

#[test]
fn failure_keeps_the_draft_for_a_retry() {
    let mut form = filled_form();
    let before = form.draft().clone();
    let submission = form.begin_submit(Utc::now()).expect("submission");

    let notification = form
        .complete(submission.id, Err(ContactError::Delivery("timeout".into())))
        .expect("notification");
    assert_eq!(notification.kind, NotificationKind::Error);
    assert!(!form.is_submitting());
    assert_eq!(form.draft(), &before);
}

#[test]
fn stale_completions_are_ignored() {
    let mut form = filled_form();
    let submission = form.begin_submit(Utc::now()).expect("submission");

    let stray = SubmissionId::new();
    let stray_ack = ContactAck {
        submission_id: stray,
        accepted_at: Utc::now(),
    };
    assert!(form.complete(stray, Ok(stray_ack)).is_none());
    assert!(form.is_submitting());

    let ack = ContactAck::for_submission(&submission);
    assert!(form.complete(submission.id, Ok(ack.clone())).is_some());
    assert!(form.complete(submission.id, Ok(ack)).is_none());
}

#[tokio::test(start_paused = true)]
async fn simulated_round_trip_always_clears_the_form() {
    let gateway = SimulatedContactGateway::default();
    for message in ["short", "a much longer message\nwith lines"] {
        let mut form = filled_form();
        form.set_field(ContactField::Message, message);
        let started = tokio::time::Instant::now();

        let notification = form
            .submit_with(&gateway, Utc::now())
            .await
            .expect("round trip");
        assert_eq!(notification.kind, NotificationKind::Success);
        assert!(started.elapsed() >= DEFAULT_SIMULATED_DELAY);
        assert!(!form.is_submitting());
        assert!(form.draft().is_empty());
    }
}

#[tokio::test]
async fn failing_gateway_round_trip_reports_error_and_keeps_draft() {
    let calls = Arc::new(AtomicUsize::new(0));
    let gateway = FailingGateway {
        calls: Arc::clone(&calls),
    };
    let mut form = filled_form();

    let notification = form
        .submit_with(&gateway, Utc::now())
        .await
        .expect("round trip");
    assert_eq!(notification.kind, NotificationKind::Error);
    assert!(notification.description.contains("mailer offline"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(form.draft().name, "Amanda Chen");
}

#[tokio::test]
async fn invalid_draft_never_reaches_the_gateway() {
    let calls = Arc::new(AtomicUsize::new(0));
    let gateway = FailingGateway {
        calls: Arc::clone(&calls),
    };
    let mut form = ContactForm::new();

    let err = form
        .submit_with(&gateway, Utc::now())
        .await
        .expect_err("invalid");
    assert!(matches!(err, ContactError::MissingFields(_)));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}
