use std::time::{Duration, Instant};

use chrono::{Datelike, Local, Utc};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::{SectionId, Testimonial};
use site_core::{
    carousel::{AutoAdvance, Carousel},
    contact::{looks_like_email, ContactForm},
    content,
    error::{ContactError, SiteError},
    filter::CategoryFilter,
    menu::ResponsiveMenu,
    navigation::SectionAnchors,
    notifications::{Notification, ToastQueue},
    reveal::{RevealKey, RevealTracker, CARD_STAGGER, STEP_STAGGER},
    scroll::ScrollTracker,
};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorCategory, UiErrorContext, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;

use super::theme;

/// Slug of the reveal key that covers the testimonials section as a whole.
pub const TESTIMONIALS_REVEAL_SLUG: &str = "section";

const IDLE_REPAINT: Duration = Duration::from_millis(500);
const BUSY_REPAINT: Duration = Duration::from_millis(100);
const ANIMATION_REPAINT: Duration = Duration::from_millis(16);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageOptions {
    pub carousel_interval: Duration,
    pub reveal_animations: bool,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            carousel_interval: site_core::carousel::DEFAULT_AUTO_ADVANCE,
            reveal_animations: true,
        }
    }
}

pub struct BrochureApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    pub(super) filter: CategoryFilter<'static>,
    pub(super) carousel: Carousel<'static, Testimonial>,
    auto_advance: AutoAdvance,
    pub(super) reveal: RevealTracker,
    pub(super) scroll: ScrollTracker,
    pub(super) menu: ResponsiveMenu,
    pub(super) anchors: SectionAnchors,
    pending_jump: Option<SectionId>,
    pub(super) contact: ContactForm,
    pub(super) toasts: ToastQueue,
    pub(super) status: String,
    pub(super) newsletter_email: String,
    pub(super) navbar_height: f32,
    pub(super) hero_rect: Option<egui::Rect>,
    pub(super) copyright: String,
}

impl BrochureApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        options: PageOptions,
    ) -> Result<Self, SiteError> {
        theme::apply(&cc.egui_ctx);
        egui_extras::install_image_loaders(&cc.egui_ctx);
        Self::with_channels(cmd_tx, ui_rx, options, Instant::now())
    }

    pub fn with_channels(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        options: PageOptions,
        now: Instant,
    ) -> Result<Self, SiteError> {
        let reveal = if options.reveal_animations {
            RevealTracker::new()
        } else {
            RevealTracker::disabled()
        };
        let mut app = Self {
            cmd_tx,
            ui_rx,
            filter: CategoryFilter::new(content::PROJECTS, content::PORTFOLIO_CATEGORIES),
            carousel: Carousel::new(content::TESTIMONIALS)?,
            auto_advance: AutoAdvance::new(options.carousel_interval),
            reveal,
            scroll: ScrollTracker::new(),
            menu: ResponsiveMenu::new(),
            anchors: SectionAnchors::new(0.0),
            pending_jump: None,
            contact: ContactForm::new(),
            toasts: ToastQueue::default(),
            status: String::new(),
            newsletter_email: String::new(),
            navbar_height: 0.0,
            hero_rect: None,
            copyright: content::copyright_line(Local::now().year()),
        };
        app.mount(now);
        Ok(app)
    }

    fn mount(&mut self, now: Instant) {
        self.scroll.subscribe();
        self.reveal.mount();
        self.resync_reveal();
        self.auto_advance.mount(now);
        tracing::debug!(tracked = self.reveal.tracked(), "page mounted");
    }

    fn unmount(&mut self) {
        self.auto_advance.unmount();
        self.reveal.unmount();
        self.scroll.unsubscribe();
        tracing::debug!("page unmounted");
    }

    /// Every element that currently animates in on scroll.
    pub(super) fn rendered_reveal_keys(&self) -> Vec<RevealKey> {
        let services = content::SERVICES
            .iter()
            .map(|service| RevealKey::new(SectionId::Services, service.slug));
        let projects = self
            .filter
            .visible_slugs()
            .into_iter()
            .map(|slug| RevealKey::new(SectionId::Portfolio, slug));
        let steps = content::PROCESS_STEPS
            .iter()
            .map(|step| RevealKey::new(SectionId::Process, step.number));
        let team = content::TEAM
            .iter()
            .map(|member| RevealKey::new(SectionId::Team, member.slug));
        services
            .chain(projects)
            .chain(steps)
            .chain(team)
            .chain(std::iter::once(RevealKey::new(
                SectionId::Testimonials,
                TESTIMONIALS_REVEAL_SLUG,
            )))
            .collect()
    }

    fn resync_reveal(&mut self) {
        let keys = self.rendered_reveal_keys();
        self.reveal.sync(keys);
    }

    pub(super) fn select_category(&mut self, label: &str) {
        if self.filter.is_active(label) {
            return;
        }
        self.filter.select(label);
        let projects: Vec<RevealKey> = self
            .filter
            .visible_slugs()
            .into_iter()
            .map(|slug| RevealKey::new(SectionId::Portfolio, slug))
            .collect();
        self.reveal
            .sync_scoped(projects, |key| key.section == SectionId::Portfolio);
    }

    /// Closes the mobile menu and scrolls to `section` on the next frame.
    pub(super) fn jump_to(&mut self, section: SectionId) {
        let target = self.menu.navigate(section);
        tracing::debug!(section = ?target, "navigating");
        self.pending_jump = Some(target);
    }

    pub(super) fn take_scroll_target(&mut self) -> Option<f32> {
        let section = self.pending_jump?;
        let offset = self.anchors.scroll_target(section)?;
        self.pending_jump = None;
        Some(offset)
    }

    pub(super) fn show_previous_testimonial(&mut self) {
        self.carousel.previous();
    }

    pub(super) fn show_next_testimonial(&mut self) {
        self.carousel.next();
    }

    fn tick(&mut self, now: Instant) {
        if self.auto_advance.poll(now) {
            let index = self.carousel.next();
            tracing::trace!(index, "carousel auto-advanced");
        }
        self.toasts.prune(now);
    }

    pub(super) fn submit_contact(&mut self, now: Instant) {
        let submission = match self.contact.begin_submit(Utc::now()) {
            Ok(submission) => submission,
            Err(err) => {
                self.report_error(UiError::from_contact(&err), now);
                return;
            }
        };

        let id = submission.id;
        if dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::SubmitContact(submission),
            &mut self.status,
        ) {
            self.status = "Sending message...".to_string();
            return;
        }

        let reason = ContactError::Delivery(self.status.clone());
        if let Some(notification) = self.contact.complete(id, Err(reason)) {
            self.toasts.push(notification, now);
        }
    }

    pub(super) fn subscribe_newsletter(&mut self, now: Instant) {
        let email = self.newsletter_email.trim().to_string();
        if !looks_like_email(&email) {
            self.report_error(
                UiError::from_message(
                    UiErrorContext::Newsletter,
                    format!("invalid email address: '{email}'"),
                ),
                now,
            );
            return;
        }
        tracing::info!("newsletter subscription requested");
        self.newsletter_email.clear();
        self.toasts.push(
            Notification::info(
                "Thanks for subscribing!",
                "You'll hear from us when there's something new.",
            ),
            now,
        );
    }

    fn report_error(&mut self, err: UiError, now: Instant) {
        if err.category() != UiErrorCategory::Validation {
            tracing::warn!(context = ?err.context(), "{}", err.message());
        }
        self.status = err.message().to_string();
        self.toasts
            .push(Notification::error(err.title(), err.message()), now);
    }

    fn process_ui_events(&mut self, now: Instant) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    tracing::debug!("{message}");
                    self.status = message;
                }
                UiEvent::Error(err) => self.report_error(err, now),
                UiEvent::ContactCompleted { id, result } => {
                    let failed = result.is_err();
                    if let Some(notification) = self.contact.complete(id, result) {
                        self.status = if failed {
                            notification.description.clone()
                        } else {
                            notification.title.clone()
                        };
                        self.toasts.push(notification, now);
                    }
                }
            }
        }
    }

    fn next_repaint(&self, now: Instant) -> Duration {
        let max_stagger = CARD_STAGGER.max(STEP_STAGGER) * content::SERVICES.len() as u32;
        if self.reveal.is_animating(now, max_stagger) {
            return ANIMATION_REPAINT;
        }
        let mut wait = if self.contact.is_submitting() {
            BUSY_REPAINT
        } else {
            IDLE_REPAINT
        };
        for deadline in [
            self.auto_advance.time_until_next(now),
            self.toasts.next_expiry(now),
        ]
        .into_iter()
        .flatten()
        {
            wait = wait.min(deadline);
        }
        wait
    }
}

impl eframe::App for BrochureApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.process_ui_events(now);
        self.tick(now);

        let width = ctx.input(|i| i.screen_rect().width());
        self.show_page(ctx, now);
        self.show_navbar(ctx, width);
        self.show_menu_overlay(ctx, width);
        self.show_toasts(ctx, now);

        ctx.request_repaint_after(self.next_repaint(now));
    }
}

impl Drop for BrochureApp {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
#[path = "../tests/app_tests.rs"]
mod tests;
