use axum::{http::StatusCode, routing::post, Json, Router};
use chrono::Utc;
use shared::{
    domain::SubmissionId,
    error::{ApiError, ErrorCode},
    protocol::{ContactAck, ContactSubmission},
};
use site_core::{
    contact::{ContactField, ContactForm},
    error::ContactError,
    gateway::{ContactGateway, WebhookContactGateway},
    notifications::NotificationKind,
};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
};

async fn spawn_endpoint(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{addr}/contact")
}

fn submission() -> ContactSubmission {
    ContactSubmission {
        id: SubmissionId::new(),
        name: "Robert Johnson".into(),
        email: "robert@techsolutions.example".into(),
        subject: "Website redesign".into(),
        message: "Our site needs a refresh.".into(),
        submitted_at: Utc::now(),
    }
}

#[tokio::test]
async fn webhook_returns_the_echoed_ack() {
    let router = Router::new().route(
        "/contact",
        post(|Json(submission): Json<ContactSubmission>| async move {
            Json(ContactAck::for_submission(&submission))
        }),
    );
    let endpoint = spawn_endpoint(router).await;
    let gateway = WebhookContactGateway::parse(&endpoint).expect("gateway");
    let submission = submission();

    let ack = gateway.submit_contact(&submission).await.expect("ack");
    assert_eq!(ack.submission_id, submission.id);
}

#[tokio::test]
async fn api_error_body_maps_to_rejection() {
    let router = Router::new().route(
        "/contact",
        post(|| async {
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiError::new(ErrorCode::Unavailable, "mailer offline")),
            )
        }),
    );
    let endpoint = spawn_endpoint(router).await;
    let gateway = WebhookContactGateway::parse(&endpoint).expect("gateway");

    let err = gateway
        .submit_contact(&submission())
        .await
        .expect_err("rejected");
    assert_eq!(
        err,
        ContactError::Rejected {
            status: 503,
            code: Some(ErrorCode::Unavailable),
            message: "mailer offline".into(),
        }
    );
}

#[tokio::test]
async fn plain_text_rejection_keeps_body_as_message() {
    let router = Router::new().route(
        "/contact",
        post(|| async { (StatusCode::BAD_REQUEST, "subject too long") }),
    );
    let endpoint = spawn_endpoint(router).await;
    let gateway = WebhookContactGateway::parse(&endpoint).expect("gateway");

    match gateway.submit_contact(&submission()).await {
        Err(ContactError::Rejected {
            status,
            code,
            message,
        }) => {
            assert_eq!(status, 400);
            assert_eq!(code, None);
            assert_eq!(message, "subject too long");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn empty_success_body_counts_as_acknowledged() {
    let router = Router::new().route("/contact", post(|| async { StatusCode::OK }));
    let endpoint = spawn_endpoint(router).await;
    let gateway = WebhookContactGateway::parse(&endpoint).expect("gateway");
    let submission = submission();

    let ack = gateway.submit_contact(&submission).await.expect("ack");
    assert_eq!(ack.submission_id, submission.id);
}

#[tokio::test]
async fn mismatched_ack_is_a_delivery_error() {
    let router = Router::new().route(
        "/contact",
        post(|| async {
            Json(ContactAck {
                submission_id: SubmissionId::new(),
                accepted_at: Utc::now(),
            })
        }),
    );
    let endpoint = spawn_endpoint(router).await;
    let gateway = WebhookContactGateway::parse(&endpoint).expect("gateway");

    let err = gateway
        .submit_contact(&submission())
        .await
        .expect_err("mismatch");
    assert!(matches!(err, ContactError::Delivery(_)));
}

#[tokio::test]
async fn unreachable_endpoint_keeps_the_form_draft() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    let gateway =
        WebhookContactGateway::parse(&format!("http://{addr}/contact")).expect("gateway");

    let mut form = ContactForm::new();
    form.set_field(ContactField::Name, "Emily Rodriguez");
    form.set_field(ContactField::Email, "emily@healthplus.example");
    form.set_field(ContactField::Subject, "Patient portal");
    form.set_field(ContactField::Message, "Can you help?");

    let notification = form
        .submit_with(&gateway, Utc::now())
        .await
        .expect("round trip");
    assert_eq!(notification.kind, NotificationKind::Error);
    assert!(!form.is_submitting());
    assert_eq!(form.draft().name, "Emily Rodriguez");
}

#[tokio::test]
async fn truncated_error_body_falls_back_to_the_status_reason() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let mut request = Vec::new();
        let mut chunk = [0u8; 1024];
        // Drain the whole request so the client sees the reply, not a reset.
        while !(request.windows(4).any(|w| w == b"\r\n\r\n") && request.ends_with(b"}")) {
            let read = socket.read(&mut chunk).await.expect("read");
            if read == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..read]);
        }
        socket
            .write_all(b"HTTP/1.1 500 Internal Server Error\r\ncontent-length: 64\r\n\r\npartial")
            .await
            .expect("write");
        socket.shutdown().await.expect("shutdown");
    });

    let gateway =
        WebhookContactGateway::parse(&format!("http://{addr}/contact")).expect("gateway");
    let err = gateway
        .submit_contact(&submission())
        .await
        .expect_err("server error");
    assert_eq!(
        err,
        ContactError::Rejected {
            status: 500,
            code: None,
            message: "Internal Server Error".into(),
        }
    );
}
