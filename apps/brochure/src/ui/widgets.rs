//! Small drawing helpers shared by the page sections.

use std::time::{Duration, Instant};

use eframe::egui;
use shared::domain::{Glyph, SectionHeading};
use site_core::reveal::{visible_ratio, RevealKey, RevealTracker, Span};

use super::theme;

/// Vertical travel of a card while it fades in.
const REVEAL_SLIDE: f32 = 16.0;

pub fn glyph_symbol(glyph: Glyph) -> &'static str {
    match glyph {
        Glyph::Code => "</>",
        Glyph::Sparkles => "✨",
        Glyph::Zap => "⚡",
        Glyph::Layers => "☰",
        Glyph::ShoppingCart => "🛒",
        Glyph::Smartphone => "📱",
        Glyph::BarChart => "📊",
        Glyph::Lightbulb => "💡",
        Glyph::Palette => "🎨",
        Glyph::Lock => "🔒",
        Glyph::Search => "🔍",
        Glyph::Pencil => "✏",
        Glyph::Mail => "✉",
        Glyph::Phone => "📞",
        Glyph::MapPin => "📍",
    }
}

pub fn card_frame() -> egui::Frame {
    egui::Frame::NONE
        .fill(theme::CARD_BACKGROUND)
        .corner_radius(14.0)
        .stroke(egui::Stroke::new(1.0, theme::BORDER))
        .inner_margin(egui::Margin::symmetric(20, 18))
}

pub fn glyph_badge(ui: &mut egui::Ui, glyph: Glyph) {
    egui::Frame::NONE
        .fill(theme::lighten_color(theme::PRIMARY, 0.88))
        .corner_radius(10.0)
        .inner_margin(egui::Margin::symmetric(10, 8))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(glyph_symbol(glyph))
                    .size(20.0)
                    .color(theme::PRIMARY),
            );
        });
}

pub fn badge(ui: &mut egui::Ui, text: &str) {
    egui::Frame::NONE
        .stroke(egui::Stroke::new(1.0, theme::BORDER))
        .corner_radius(12.0)
        .inner_margin(egui::Margin::symmetric(10, 4))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).small().strong());
        });
}

pub fn tag_chips(ui: &mut egui::Ui, tags: &[&str]) {
    ui.horizontal_wrapped(|ui| {
        for tag in tags {
            egui::Frame::NONE
                .fill(theme::MUTED_BACKGROUND)
                .corner_radius(8.0)
                .inner_margin(egui::Margin::symmetric(8, 3))
                .show(ui, |ui| {
                    ui.label(egui::RichText::new(*tag).small().color(theme::MUTED_TEXT));
                });
        }
    });
}

pub fn star_row(ui: &mut egui::Ui, rating: u8) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 2.0;
        for i in 0..5u8 {
            let color = if i < rating {
                theme::STAR
            } else {
                theme::MUTED_TEXT
            };
            ui.label(egui::RichText::new("★").color(color));
        }
    });
}

pub fn primary_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(
        egui::RichText::new(text.to_string())
            .color(theme::PRIMARY_TEXT)
            .strong(),
    )
    .fill(theme::PRIMARY)
    .corner_radius(8.0)
}

pub fn outline_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.to_string()).strong())
        .fill(theme::BACKGROUND)
        .stroke(egui::Stroke::new(1.0, theme::BORDER))
        .corner_radius(8.0)
}

pub fn muted(text: &str) -> egui::RichText {
    egui::RichText::new(text).color(theme::MUTED_TEXT)
}

/// Badge, two-tone heading and blurb opening every section.
pub fn section_header(ui: &mut egui::Ui, heading: &SectionHeading) {
    badge(ui, heading.badge);
    ui.add_space(8.0);
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        for (text, highlighted) in [
            (heading.lead_in, false),
            (heading.highlight, true),
            (heading.trailing, false),
        ] {
            if text.is_empty() {
                continue;
            }
            let mut text = egui::RichText::new(text)
                .text_style(theme::heading_style())
                .strong();
            if highlighted {
                text = text.color(theme::PRIMARY);
            }
            ui.label(text);
        }
    });
    if let Some(blurb) = heading.blurb {
        ui.add_space(4.0);
        ui.label(muted(blurb));
    }
    ui.add_space(24.0);
}

/// Lays `add` out in a centered column no wider than the page content.
pub fn centered<R>(ui: &mut egui::Ui, add: impl FnOnce(&mut egui::Ui) -> R) -> R {
    let available = ui.available_width();
    let width = available.min(theme::CONTENT_MAX_WIDTH) - 32.0;
    let margin = ((available - width) / 2.0).max(0.0);
    ui.horizontal(|ui| {
        ui.add_space(margin);
        ui.vertical(|ui| {
            ui.set_width(width.max(0.0));
            add(ui)
        })
        .inner
    })
    .inner
}

/// Draws `add` faded and offset by its reveal progress, then reports how much
/// of it is inside the scroll viewport.
pub fn reveal_scope<R>(
    ui: &mut egui::Ui,
    tracker: &mut RevealTracker<RevealKey>,
    key: RevealKey,
    stagger: Duration,
    now: Instant,
    add: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    let progress = tracker.progress(&key, now, stagger);
    let inner = ui.scope(|ui| {
        ui.multiply_opacity(progress);
        let slide = (1.0 - progress) * REVEAL_SLIDE;
        ui.add_space(slide);
        let out = add(ui);
        ui.add_space(REVEAL_SLIDE - slide);
        out
    });

    let rect = inner.response.rect;
    let viewport = ui.clip_rect();
    let ratio = visible_ratio(
        Span::new(rect.top(), rect.bottom()),
        Span::new(viewport.top(), viewport.bottom()),
    );
    if tracker.report(&key, ratio, now) {
        tracing::trace!(section = ?key.section, slug = key.slug, "revealed");
        ui.ctx().request_repaint();
    }
    inner.inner
}
