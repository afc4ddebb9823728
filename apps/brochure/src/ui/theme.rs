//! Palette and text styles for the brochure page.

use eframe::egui;
use egui::{Color32, FontFamily, FontId, TextStyle};

pub const PRIMARY: Color32 = Color32::from_rgb(37, 99, 235);
pub const PRIMARY_TEXT: Color32 = Color32::WHITE;
pub const BACKGROUND: Color32 = Color32::from_rgb(255, 255, 255);
pub const MUTED_BACKGROUND: Color32 = Color32::from_rgb(244, 246, 250);
pub const CARD_BACKGROUND: Color32 = Color32::from_rgb(255, 255, 255);
pub const BORDER: Color32 = Color32::from_rgb(226, 232, 240);
pub const FOREGROUND: Color32 = Color32::from_rgb(15, 23, 42);
pub const MUTED_TEXT: Color32 = Color32::from_rgb(100, 116, 139);
pub const STAR: Color32 = Color32::from_rgb(245, 158, 11);
pub const SUCCESS: Color32 = Color32::from_rgb(22, 163, 74);
pub const DANGER: Color32 = Color32::from_rgb(220, 38, 38);

pub const CONTENT_MAX_WIDTH: f32 = 1200.0;
pub const SECTION_PADDING: f32 = 96.0;

pub fn heading_style() -> TextStyle {
    TextStyle::Name("SectionHeading".into())
}

pub fn display_style() -> TextStyle {
    TextStyle::Name("Display".into())
}

pub fn apply(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::light();
    style.visuals.panel_fill = BACKGROUND;
    style.visuals.window_fill = CARD_BACKGROUND;
    style.visuals.extreme_bg_color = MUTED_BACKGROUND;
    style.visuals.selection.bg_fill = lighten_color(PRIMARY, 0.6);
    style.visuals.hyperlink_color = PRIMARY;
    style.visuals.override_text_color = Some(FOREGROUND);
    style.spacing.item_spacing = egui::vec2(10.0, 10.0);
    style.spacing.button_padding = egui::vec2(16.0, 8.0);

    style.text_styles = [
        (TextStyle::Small, FontId::new(12.0, FontFamily::Proportional)),
        (TextStyle::Body, FontId::new(15.0, FontFamily::Proportional)),
        (TextStyle::Button, FontId::new(15.0, FontFamily::Proportional)),
        (TextStyle::Monospace, FontId::new(14.0, FontFamily::Monospace)),
        (TextStyle::Heading, FontId::new(20.0, FontFamily::Proportional)),
        (heading_style(), FontId::new(34.0, FontFamily::Proportional)),
        (display_style(), FontId::new(48.0, FontFamily::Proportional)),
    ]
    .into();

    ctx.set_style(style);
}

pub fn lighten_color(c: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |channel: u8| -> u8 {
        let channel = channel as f32;
        (channel + (255.0 - channel) * t).round().clamp(0.0, 255.0) as u8
    };
    Color32::from_rgba_unmultiplied(mix(c.r()), mix(c.g()), mix(c.b()), c.a())
}

/// How many cards fit side by side at `width`, never more than `max`.
pub fn grid_columns(width: f32, max: usize) -> usize {
    let columns = if width >= 1024.0 {
        4
    } else if width >= 640.0 {
        2
    } else {
        1
    };
    columns.min(max).max(1)
}
