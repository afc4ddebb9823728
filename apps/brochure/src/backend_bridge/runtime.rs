//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use crossbeam_channel::{Receiver, Sender};
use site_core::{
    error::ContactError,
    gateway::{ContactGateway, SimulatedContactGateway, WebhookContactGateway},
};

use crate::backend_bridge::commands::BackendCommand;
use crate::config::Settings;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn build_gateway(settings: &Settings) -> Result<Arc<dyn ContactGateway>, ContactError> {
    match &settings.contact_endpoint {
        Some(endpoint) => Ok(Arc::new(WebhookContactGateway::parse(endpoint)?)),
        None => Ok(Arc::new(SimulatedContactGateway::new(settings.submit_delay()))),
    }
}

pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    settings: Settings,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        let gateway = match build_gateway(&settings) {
            Ok(gateway) => gateway,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: {err}"),
                )));
                tracing::error!("failed to build contact gateway: {err}");
                return;
            }
        };

        runtime.block_on(serve(cmd_rx, ui_tx, gateway));
        tracing::info!("backend worker stopped");
    })
}

async fn serve(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    gateway: Arc<dyn ContactGateway>,
) {
    tracing::info!(gateway = %gateway.describe(), "backend worker ready");
    let _ = ui_tx.try_send(UiEvent::Info(format!(
        "Contact delivery: {}",
        gateway.describe()
    )));

    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            BackendCommand::SubmitContact(submission) => {
                let gateway = Arc::clone(&gateway);
                let ui_tx = ui_tx.clone();
                tokio::spawn(async move {
                    let id = submission.id;
                    tracing::info!(submission_id = %id, "delivering contact submission");
                    let result = gateway.submit_contact(&submission).await;
                    if let Err(err) = &result {
                        tracing::warn!(submission_id = %id, "contact delivery failed: {err}");
                    }
                    // Must not be dropped: the form stays in `Submitting` until it arrives.
                    let event = UiEvent::ContactCompleted { id, result };
                    let delivered = tokio::task::spawn_blocking(move || ui_tx.send(event).is_ok())
                        .await
                        .unwrap_or(false);
                    if !delivered {
                        tracing::warn!(submission_id = %id, "contact completion undeliverable; ui disconnected");
                    }
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crossbeam_channel::bounded;
    use shared::{domain::SubmissionId, protocol::ContactSubmission};
    use std::time::Duration;

    #[test]
    fn endpoint_selects_webhook_delivery() {
        let settings = Settings {
            contact_endpoint: Some("http://127.0.0.1:9/contact".into()),
            ..Settings::default()
        };
        let gateway = build_gateway(&settings).expect("gateway");
        assert_eq!(gateway.describe(), "webhook (http://127.0.0.1:9/contact)");
    }

    #[test]
    fn no_endpoint_simulates_with_configured_delay() {
        let settings = Settings {
            submit_delay_ms: 20,
            ..Settings::default()
        };
        let gateway = build_gateway(&settings).expect("gateway");
        assert_eq!(gateway.describe(), "simulated (20 ms)");
    }

    #[test]
    fn submission_round_trips_through_the_worker() {
        let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(4);
        let (ui_tx, ui_rx) = bounded::<UiEvent>(16);
        let settings = Settings {
            submit_delay_ms: 5,
            ..Settings::default()
        };
        let worker = launch(cmd_rx, ui_tx, settings);

        let id = SubmissionId::new();
        cmd_tx
            .send(BackendCommand::SubmitContact(ContactSubmission {
                id,
                name: "Lisa Wong".into(),
                email: "lisa@example.com".into(),
                subject: "Hello".into(),
                message: "Hi there".into(),
                submitted_at: Utc::now(),
            }))
            .expect("queue");

        let completed = loop {
            match ui_rx.recv_timeout(Duration::from_secs(5)).expect("event") {
                UiEvent::ContactCompleted { id, result } => break (id, result),
                UiEvent::Info(_) => continue,
                UiEvent::Error(err) => panic!("backend error: {}", err.message()),
            }
        };
        assert_eq!(completed.0, id);
        assert_eq!(completed.1.expect("ack").submission_id, id);

        drop(cmd_tx);
        worker.join().expect("worker exits once the ui hangs up");
    }

    #[test]
    fn completion_waits_for_room_in_a_full_ui_queue() {
        let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(4);
        let (ui_tx, ui_rx) = bounded::<UiEvent>(1);
        let settings = Settings {
            submit_delay_ms: 5,
            ..Settings::default()
        };
        let worker = launch(cmd_rx, ui_tx, settings);

        let id = SubmissionId::new();
        cmd_tx
            .send(BackendCommand::SubmitContact(ContactSubmission {
                id,
                name: "Lisa Wong".into(),
                email: "lisa@example.com".into(),
                subject: "Hello".into(),
                message: "Hi there".into(),
                submitted_at: Utc::now(),
            }))
            .expect("queue");

        // The startup notice occupies the only slot while the submission lands.
        std::thread::sleep(Duration::from_millis(200));
        assert!(matches!(
            ui_rx.recv_timeout(Duration::from_secs(5)).expect("startup notice"),
            UiEvent::Info(_)
        ));
        match ui_rx.recv_timeout(Duration::from_secs(5)).expect("completion") {
            UiEvent::ContactCompleted { id: done, result } => {
                assert_eq!(done, id);
                assert!(result.is_ok());
            }
            other => panic!("unexpected event: {other:?}"),
        }

        drop(cmd_tx);
        worker.join().expect("worker exits once the ui hangs up");
    }
}
