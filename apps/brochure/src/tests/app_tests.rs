use super::*;

use crossbeam_channel::bounded;
use shared::{error::ErrorCode, protocol::ContactAck};
use site_core::{contact::ContactField, notifications::NotificationKind};

fn app_with(options: PageOptions) -> (BrochureApp, Receiver<BackendCommand>, Sender<UiEvent>, Instant) {
    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(8);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(8);
    let now = Instant::now();
    let app = BrochureApp::with_channels(cmd_tx, ui_rx, options, now).expect("app");
    (app, cmd_rx, ui_tx, now)
}

fn fill_contact(app: &mut BrochureApp) {
    app.contact.set_field(ContactField::Name, "Olivia Davis");
    app.contact.set_field(ContactField::Email, "olivia@example.com");
    app.contact.set_field(ContactField::Subject, "New storefront");
    app.contact.set_field(ContactField::Message, "Let's talk.");
}

fn kinds(app: &BrochureApp) -> Vec<NotificationKind> {
    app.toasts.visible().map(|toast| toast.kind).collect()
}

#[test]
fn mounting_observes_every_animated_element() {
    let (app, _cmd_rx, _ui_tx, _now) = app_with(PageOptions::default());
    let expected = content::SERVICES.len()
        + content::PROJECTS.len()
        + content::PROCESS_STEPS.len()
        + content::TEAM.len()
        + 1;
    assert_eq!(app.reveal.tracked(), expected);
    assert!(app.auto_advance.is_armed());
    assert!(app.scroll.is_subscribed());
    assert!(app
        .copyright
        .ends_with("PixelPerfect. All rights reserved."));
}

#[test]
fn category_change_releases_hidden_projects() {
    let (mut app, _cmd_rx, _ui_tx, _now) = app_with(PageOptions::default());
    let before = app.reveal.tracked();

    app.select_category("Web Design");
    assert_eq!(app.filter.active().label(), "Web Design");
    assert_eq!(app.reveal.tracked(), before - content::PROJECTS.len() + 2);
    for project in content::PROJECTS {
        let key = RevealKey::new(SectionId::Portfolio, project.slug);
        assert_eq!(
            app.reveal.is_observed(&key),
            project.category == "Web Design",
            "{}",
            project.slug
        );
    }

    app.select_category("All");
    assert_eq!(app.reveal.tracked(), before);
}

#[test]
fn category_change_leaves_other_sections_revealed() {
    let (mut app, _cmd_rx, _ui_tx, now) = app_with(PageOptions::default());
    let team = RevealKey::new(SectionId::Team, content::TEAM[0].slug);
    assert!(app.reveal.report(&team, 1.0, now));

    app.select_category("Branding");
    assert!(app.reveal.is_revealed(&team));
    assert!(app.reveal.is_observed(&RevealKey::new(
        SectionId::Testimonials,
        TESTIMONIALS_REVEAL_SLUG
    )));
}

#[test]
fn disabled_reveal_renders_everything_final() {
    let (app, _cmd_rx, _ui_tx, now) = app_with(PageOptions {
        reveal_animations: false,
        ..PageOptions::default()
    });
    let key = RevealKey::new(SectionId::Team, content::TEAM[0].slug);
    assert_eq!(app.reveal.tracked(), 0);
    assert!(app.reveal.is_revealed(&key));
    assert_eq!(app.reveal.progress(&key, now, CARD_STAGGER), 1.0);
}

#[test]
fn carousel_advances_on_its_own_schedule() {
    let interval = Duration::from_secs(6);
    let (mut app, _cmd_rx, _ui_tx, now) = app_with(PageOptions {
        carousel_interval: interval,
        ..PageOptions::default()
    });

    app.tick(now + Duration::from_secs(1));
    assert_eq!(app.carousel.index(), 0);
    app.tick(now + interval);
    assert_eq!(app.carousel.index(), 1);

    app.show_previous_testimonial();
    app.show_previous_testimonial();
    assert_eq!(app.carousel.index(), content::TESTIMONIALS.len() - 1);
    app.tick(now + interval * 2);
    assert_eq!(app.carousel.index(), 0);
}

#[test]
fn navigating_closes_the_menu_and_waits_for_layout() {
    let (mut app, _cmd_rx, _ui_tx, _now) = app_with(PageOptions::default());
    app.menu.toggle();
    assert!(app.menu.is_open());

    app.jump_to(SectionId::Portfolio);
    assert!(!app.menu.is_open());
    assert_eq!(app.take_scroll_target(), None);

    app.anchors.set_header_height(64.0);
    app.anchors.record(SectionId::Portfolio, 1864.0);
    assert_eq!(app.take_scroll_target(), Some(1800.0));
    assert_eq!(app.take_scroll_target(), None);
}

#[test]
fn successful_submission_clears_the_form() {
    let (mut app, cmd_rx, ui_tx, now) = app_with(PageOptions::default());
    fill_contact(&mut app);

    app.submit_contact(now);
    assert!(app.contact.is_submitting());
    assert_eq!(app.status, "Sending message...");
    let submission = match cmd_rx.try_recv().expect("queued") {
        BackendCommand::SubmitContact(submission) => submission,
    };
    assert_eq!(submission.name, "Olivia Davis");

    ui_tx
        .try_send(UiEvent::ContactCompleted {
            id: submission.id,
            result: Ok(ContactAck::for_submission(&submission)),
        })
        .expect("event");
    app.process_ui_events(now);

    assert!(!app.contact.is_submitting());
    assert!(app.contact.draft().is_empty());
    assert_eq!(kinds(&app), vec![NotificationKind::Success]);
    assert_eq!(app.status, site_core::contact::SUCCESS_TITLE);
}

#[test]
fn rejected_submission_keeps_the_draft() {
    let (mut app, cmd_rx, ui_tx, now) = app_with(PageOptions::default());
    fill_contact(&mut app);
    app.submit_contact(now);
    let BackendCommand::SubmitContact(submission) = cmd_rx.try_recv().expect("queued");

    ui_tx
        .try_send(UiEvent::ContactCompleted {
            id: submission.id,
            result: Err(ContactError::Rejected {
                status: 503,
                code: Some(ErrorCode::Unavailable),
                message: "mailer offline".into(),
            }),
        })
        .expect("event");
    app.process_ui_events(now);

    assert!(!app.contact.is_submitting());
    assert_eq!(app.contact.draft().name, "Olivia Davis");
    assert_eq!(kinds(&app), vec![NotificationKind::Error]);
    assert!(app.status.contains("mailer offline"));
}

#[test]
fn double_submit_is_refused_while_in_flight() {
    let (mut app, cmd_rx, _ui_tx, now) = app_with(PageOptions::default());
    fill_contact(&mut app);
    app.submit_contact(now);
    app.submit_contact(now);

    assert!(cmd_rx.try_recv().is_ok());
    assert!(cmd_rx.try_recv().is_err());
    assert_eq!(kinds(&app), vec![NotificationKind::Error]);
}

#[test]
fn disconnected_backend_unwinds_the_submission() {
    let (mut app, cmd_rx, _ui_tx, now) = app_with(PageOptions::default());
    drop(cmd_rx);
    fill_contact(&mut app);

    app.submit_contact(now);
    assert!(!app.contact.is_submitting());
    assert_eq!(app.contact.draft().email, "olivia@example.com");
    assert_eq!(kinds(&app), vec![NotificationKind::Error]);
}

#[test]
fn incomplete_form_is_reported_without_queueing() {
    let (mut app, cmd_rx, _ui_tx, now) = app_with(PageOptions::default());
    app.contact.set_field(ContactField::Name, "Olivia Davis");

    app.submit_contact(now);
    assert!(cmd_rx.try_recv().is_err());
    assert!(app.status.starts_with("missing required fields"));
    let titles: Vec<_> = app.toasts.visible().map(|t| t.title.clone()).collect();
    assert_eq!(titles, vec!["Please check the form".to_string()]);
}

#[test]
fn newsletter_accepts_only_email_shaped_input() {
    let (mut app, _cmd_rx, _ui_tx, now) = app_with(PageOptions::default());
    app.newsletter_email = "not-an-email".into();
    app.subscribe_newsletter(now);
    assert_eq!(app.newsletter_email, "not-an-email");
    assert_eq!(kinds(&app), vec![NotificationKind::Error]);

    app.newsletter_email = " reader@example.com ".into();
    app.subscribe_newsletter(now);
    assert!(app.newsletter_email.is_empty());
    assert_eq!(
        kinds(&app),
        vec![NotificationKind::Error, NotificationKind::Info]
    );
}

#[test]
fn backend_startup_errors_surface_as_toasts() {
    let (mut app, _cmd_rx, ui_tx, now) = app_with(PageOptions::default());
    ui_tx
        .try_send(UiEvent::Error(UiError::from_message(
            UiErrorContext::BackendStartup,
            "backend worker startup failure: failed to build runtime",
        )))
        .expect("event");
    ui_tx
        .try_send(UiEvent::Info("Contact delivery: simulated (1500 ms)".into()))
        .expect("event");
    app.process_ui_events(now);

    let titles: Vec<_> = app.toasts.visible().map(|t| t.title.clone()).collect();
    assert_eq!(titles, vec!["Contact service unavailable".to_string()]);
    assert_eq!(app.status, "Contact delivery: simulated (1500 ms)");
}

#[test]
fn repaint_waits_for_the_nearest_deadline() {
    let (mut app, _cmd_rx, _ui_tx, now) = app_with(PageOptions {
        reveal_animations: false,
        ..PageOptions::default()
    });
    assert_eq!(app.next_repaint(now), IDLE_REPAINT);

    fill_contact(&mut app);
    app.submit_contact(now);
    assert_eq!(app.next_repaint(now), BUSY_REPAINT);

    let late = now + app.auto_advance.interval() - Duration::from_millis(40);
    assert!(app.next_repaint(late) <= Duration::from_millis(40));
}
