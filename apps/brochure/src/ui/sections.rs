//! Page layout: navbar, the stacked sections, footer and toast overlay.

use std::time::{Duration, Instant};

use eframe::egui;
use shared::domain::{SectionId, TeamMember, Testimonial};
use site_core::{
    carousel::DEFAULT_WINDOW,
    contact::{ContactField, SUCCESS_TITLE},
    content,
    hero::{hero_tilt, MAX_TILT},
    menu::is_compact,
    navigation::{GET_STARTED_TARGET, NAV_ITEMS, START_PROJECT_TARGET, VIEW_WORK_TARGET},
    notifications::{Notification, NotificationKind},
    reveal::{RevealKey, CARD_STAGGER, STEP_STAGGER},
};

use super::app::{BrochureApp, TESTIMONIALS_REVEAL_SLUG};
use super::theme;
use super::widgets::{
    card_frame, centered, glyph_badge, glyph_symbol, muted, outline_button, primary_button,
    reveal_scope, section_header, star_row, tag_chips,
};

const PROJECT_IMAGE_HEIGHT: f32 = 200.0;
const PORTRAIT_HEIGHT: f32 = 260.0;

fn stagger(step: Duration, index: usize) -> Duration {
    step * index as u32
}

impl BrochureApp {
    pub(super) fn show_page(&mut self, ctx: &egui::Context, now: Instant) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(theme::BACKGROUND))
            .show(ctx, |ui| {
                let mut area = egui::ScrollArea::vertical()
                    .id_salt("page")
                    .auto_shrink([false, false]);
                if let Some(offset) = self.take_scroll_target() {
                    area = area.vertical_scroll_offset(offset);
                }
                let output = area.show(ui, |ui| {
                    let origin = ui.min_rect().top();
                    for section in SectionId::ALL {
                        self.anchors.record(section, ui.cursor().top() - origin);
                        match section {
                            SectionId::Home => self.show_hero(ui),
                            SectionId::Services => self.show_services(ui, now),
                            SectionId::Portfolio => self.show_portfolio(ui, now),
                            SectionId::Process => self.show_process(ui, now),
                            SectionId::Team => self.show_team(ui, now),
                            SectionId::Testimonials => self.show_testimonials(ui, now),
                            SectionId::Contact => self.show_contact(ui, now),
                        }
                    }
                    self.show_footer(ui, now);
                });
                if self.scroll.on_scroll(output.state.offset.y) {
                    tracing::debug!(scrolled = self.scroll.is_scrolled(), "navbar style changed");
                }
            });
    }

    pub(super) fn show_navbar(&mut self, ctx: &egui::Context, width: f32) {
        let compact = is_compact(width);
        let frame = if self.scroll.is_scrolled() {
            egui::Frame::NONE
                .fill(theme::BACKGROUND.gamma_multiply(0.94))
                .stroke(egui::Stroke::new(1.0, theme::BORDER))
        } else {
            egui::Frame::NONE
        };

        let response = egui::Area::new(egui::Id::new("navbar"))
            .fixed_pos(egui::pos2(0.0, 0.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                ui.set_width(width);
                frame
                    .inner_margin(egui::Margin::symmetric(24, 14))
                    .show(ui, |ui| {
                        ui.set_width(width - 48.0);
                        ui.horizontal(|ui| {
                            let brand = ui.add(
                                egui::Label::new(
                                    egui::RichText::new(format!(
                                        "{}  {}",
                                        glyph_symbol(shared::domain::Glyph::Code),
                                        content::BRAND_NAME
                                    ))
                                    .size(20.0)
                                    .strong(),
                                )
                                .sense(egui::Sense::click()),
                            );
                            if brand.clicked() {
                                self.jump_to(SectionId::Home);
                            }

                            if !compact {
                                ui.add_space(24.0);
                                let active = self.anchors.current(self.scroll.offset());
                                for item in NAV_ITEMS {
                                    let label = if active == Some(item.target) {
                                        egui::RichText::new(item.label).color(theme::PRIMARY)
                                    } else {
                                        muted(item.label)
                                    };
                                    let link = ui.add(
                                        egui::Label::new(label).sense(egui::Sense::click()),
                                    );
                                    if link.clicked() {
                                        self.jump_to(item.target);
                                    }
                                }
                            }

                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                if compact {
                                    let icon = if self.menu.is_open() { "✕" } else { "☰" };
                                    if ui.add(outline_button(icon)).clicked() {
                                        let open = self.menu.toggle();
                                        tracing::debug!(open, "mobile menu toggled");
                                    }
                                } else if ui.add(primary_button("Get Started")).clicked() {
                                    self.jump_to(GET_STARTED_TARGET);
                                }
                            });
                        });
                    });
            });

        self.navbar_height = response.response.rect.height();
        self.anchors.set_header_height(self.navbar_height);
    }

    pub(super) fn show_menu_overlay(&mut self, ctx: &egui::Context, width: f32) {
        if !self.menu.overlay_visible(width) {
            return;
        }
        egui::Area::new(egui::Id::new("mobile_menu"))
            .fixed_pos(egui::pos2(0.0, self.navbar_height))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::NONE
                    .fill(theme::BACKGROUND.gamma_multiply(0.97))
                    .stroke(egui::Stroke::new(1.0, theme::BORDER))
                    .inner_margin(egui::Margin::symmetric(24, 16))
                    .show(ui, |ui| {
                        ui.set_width(width - 48.0);
                        for item in NAV_ITEMS {
                            let link = ui.add(
                                egui::Label::new(muted(item.label)).sense(egui::Sense::click()),
                            );
                            if link.clicked() {
                                self.jump_to(item.target);
                            }
                            ui.add_space(6.0);
                        }
                        ui.add_space(8.0);
                        if ui.add(primary_button("Get Started")).clicked() {
                            self.jump_to(GET_STARTED_TARGET);
                        }
                    });
            });
    }

    pub(super) fn show_toasts(&mut self, ctx: &egui::Context, now: Instant) {
        if self.toasts.is_empty() {
            return;
        }
        let mut dismissed = None;
        egui::Area::new(egui::Id::new("toasts"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
            .order(egui::Order::Tooltip)
            .show(ctx, |ui| {
                for (index, toast) in self.toasts.visible().enumerate() {
                    if toast_card(ui, toast) {
                        dismissed = Some(index);
                    }
                }
            });
        if let Some(index) = dismissed {
            self.toasts.dismiss(index);
            ctx.request_repaint();
        }
        if let Some(wait) = self.toasts.next_expiry(now) {
            ctx.request_repaint_after(wait);
        }
    }

    fn show_hero(&mut self, ui: &mut egui::Ui) {
        let pointer = ui.ctx().pointer_hover_pos();
        let (tilt_x, tilt_y) = match (pointer, self.hero_rect) {
            (Some(p), Some(rect)) if rect.contains(p) => hero_tilt(
                (p.x, p.y),
                (rect.left(), rect.top()),
                (rect.width(), rect.height()),
            ),
            _ => (0.0, 0.0),
        };

        let response = ui.vertical(|ui| {
            ui.add_space(self.navbar_height + theme::SECTION_PADDING);
            centered(ui, |ui| {
                ui.vertical_centered(|ui| {
                    super::widgets::badge(ui, content::HERO_BADGE);
                    ui.add_space(16.0);
                    ui.horizontal_wrapped(|ui| {
                        ui.spacing_mut().item_spacing.x = 0.0;
                        for (index, part) in content::HERO_HEADLINE.iter().enumerate() {
                            let mut text = egui::RichText::new(*part)
                                .text_style(theme::display_style())
                                .strong();
                            if index % 2 == 1 {
                                text = text.color(theme::PRIMARY);
                            }
                            ui.label(text);
                        }
                    });
                    ui.add_space(16.0);
                    ui.label(muted(content::HERO_LEAD).size(18.0));
                    ui.add_space(28.0);
                    ui.horizontal(|ui| {
                        if ui.add(primary_button("Start a Project  →")).clicked() {
                            self.jump_to(START_PROJECT_TARGET);
                        }
                        if ui.add(outline_button("View Our Work")).clicked() {
                            self.jump_to(VIEW_WORK_TARGET);
                        }
                    });
                });
                ui.add_space(48.0);

                let half = MAX_TILT / 2.0;
                let margin = egui::Margin {
                    left: (half + tilt_x).round() as i8,
                    right: (half - tilt_x).round() as i8,
                    top: (half + tilt_y).round() as i8,
                    bottom: (half - tilt_y).round() as i8,
                };
                let columns = theme::grid_columns(ui.available_width(), 3);
                ui.columns(columns, |cols| {
                    for (index, card) in content::HERO_HIGHLIGHTS.iter().enumerate() {
                        let ui = &mut cols[index % columns];
                        egui::Frame::NONE.outer_margin(margin).show(ui, |ui| {
                            card_frame().show(ui, |ui| {
                                ui.set_width(ui.available_width());
                                glyph_badge(ui, card.glyph);
                                ui.label(egui::RichText::new(card.title).heading().strong());
                                ui.label(muted(card.description));
                            });
                        });
                    }
                });
            });
            ui.add_space(theme::SECTION_PADDING);
        });
        self.hero_rect = Some(response.response.rect);
    }

    fn show_services(&mut self, ui: &mut egui::Ui, now: Instant) {
        let reveal = &mut self.reveal;
        section_frame(ui, theme::MUTED_BACKGROUND, |ui| {
            section_header(ui, &content::SERVICES_HEADING);
            let columns = theme::grid_columns(ui.available_width(), 4);
            ui.columns(columns, |cols| {
                for (index, service) in content::SERVICES.iter().enumerate() {
                    let ui = &mut cols[index % columns];
                    let key = RevealKey::new(SectionId::Services, service.slug);
                    reveal_scope(ui, reveal, key, stagger(CARD_STAGGER, index), now, |ui| {
                        card_frame().show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            glyph_badge(ui, service.glyph);
                            ui.label(egui::RichText::new(service.title).heading().strong());
                            ui.label(muted(service.description));
                            tag_chips(ui, service.tags);
                        });
                    });
                }
            });
        });
    }

    fn show_portfolio(&mut self, ui: &mut egui::Ui, now: Instant) {
        let mut selected = None;
        let categories = self.filter.categories();
        let visible = self.filter.visible_items();
        let filter = &self.filter;
        let reveal = &mut self.reveal;

        section_frame(ui, theme::BACKGROUND, |ui| {
            section_header(ui, &content::PORTFOLIO_HEADING);
            ui.horizontal_wrapped(|ui| {
                for category in categories {
                    let button = if filter.is_active(category) {
                        primary_button(category)
                    } else {
                        outline_button(category)
                    };
                    if ui.add(button).clicked() {
                        selected = Some(category.to_string());
                    }
                }
            });
            ui.add_space(20.0);

            if visible.is_empty() {
                ui.label(muted("No projects in this category yet."));
            }
            let columns = theme::grid_columns(ui.available_width(), 3);
            ui.columns(columns, |cols| {
                for (index, project) in visible.iter().enumerate() {
                    let ui = &mut cols[index % columns];
                    let key = RevealKey::new(SectionId::Portfolio, project.slug);
                    reveal_scope(ui, reveal, key, stagger(CARD_STAGGER, index), now, |ui| {
                        card_frame().show(ui, |ui| {
                            let width = ui.available_width();
                            ui.set_width(width);
                            ui.add(
                                egui::Image::new(project.image.url())
                                    .fit_to_exact_size(egui::vec2(width, PROJECT_IMAGE_HEIGHT))
                                    .corner_radius(10.0),
                            );
                            ui.label(muted(project.category).small());
                            ui.label(egui::RichText::new(project.title).heading().strong());
                            ui.label(muted(project.description));
                            tag_chips(ui, project.tags);
                        });
                    });
                }
            });

            ui.add_space(24.0);
            ui.vertical_centered(|ui| {
                ui.add(outline_button("View All Projects  ↗"));
            });
        });

        if let Some(category) = selected {
            self.select_category(&category);
        }
    }

    fn show_process(&mut self, ui: &mut egui::Ui, now: Instant) {
        let reveal = &mut self.reveal;
        section_frame(ui, theme::MUTED_BACKGROUND, |ui| {
            section_header(ui, &content::PROCESS_HEADING);
            let columns = theme::grid_columns(ui.available_width(), 3);
            ui.columns(columns, |cols| {
                for (index, step) in content::PROCESS_STEPS.iter().enumerate() {
                    let ui = &mut cols[index % columns];
                    let key = RevealKey::new(SectionId::Process, step.number);
                    reveal_scope(ui, reveal, key, stagger(STEP_STAGGER, index), now, |ui| {
                        card_frame().show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.horizontal(|ui| {
                                glyph_badge(ui, step.glyph);
                                ui.label(
                                    egui::RichText::new(step.number)
                                        .size(28.0)
                                        .strong()
                                        .color(theme::lighten_color(theme::PRIMARY, 0.6)),
                                );
                            });
                            ui.label(egui::RichText::new(step.title).heading().strong());
                            ui.label(muted(step.description));
                        });
                    });
                }
            });
        });
    }

    fn show_team(&mut self, ui: &mut egui::Ui, now: Instant) {
        let reveal = &mut self.reveal;
        section_frame(ui, theme::BACKGROUND, |ui| {
            section_header(ui, &content::TEAM_HEADING);
            let columns = theme::grid_columns(ui.available_width(), 3);
            ui.columns(columns, |cols| {
                for (index, member) in content::TEAM.iter().enumerate() {
                    let ui = &mut cols[index % columns];
                    let key = RevealKey::new(SectionId::Team, member.slug);
                    reveal_scope(ui, reveal, key, stagger(CARD_STAGGER, index), now, |ui| {
                        team_card(ui, member);
                    });
                }
            });
        });
    }

    fn show_testimonials(&mut self, ui: &mut egui::Ui, now: Instant) {
        let mut step: Option<bool> = None;
        let compact = is_compact(ui.available_width());
        let slots = self.carousel.window(if compact { 1 } else { DEFAULT_WINDOW });
        let reveal = &mut self.reveal;
        let key = RevealKey::new(SectionId::Testimonials, TESTIMONIALS_REVEAL_SLUG);

        section_frame(ui, theme::MUTED_BACKGROUND, |ui| {
            reveal_scope(ui, reveal, key, Duration::ZERO, now, |ui| {
                section_header(ui, &content::TESTIMONIALS_HEADING);
                ui.horizontal(|ui| {
                    if ui.add(outline_button("←")).clicked() {
                        step = Some(false);
                    }
                    if ui.add(outline_button("→")).clicked() {
                        step = Some(true);
                    }
                });
                ui.add_space(16.0);
                ui.columns(slots.len().max(1), |cols| {
                    for (col, slot) in cols.iter_mut().zip(&slots) {
                        col.push_id(slot.position, |ui| {
                            if !slot.emphasized {
                                ui.multiply_opacity(0.4);
                            }
                            testimonial_card(ui, slot.item);
                        });
                    }
                });
            });
        });

        match step {
            Some(true) => self.show_next_testimonial(),
            Some(false) => self.show_previous_testimonial(),
            None => {}
        }
    }

    fn show_contact(&mut self, ui: &mut egui::Ui, now: Instant) {
        let mut submit = false;
        let mut edits: Vec<(ContactField, String)> = Vec::new();
        let submitting = self.contact.is_submitting();
        let draft = self.contact.draft().clone();

        section_frame(ui, theme::BACKGROUND, |ui| {
            section_header(ui, &content::CONTACT_HEADING);
            let columns = if is_compact(ui.available_width()) { 1 } else { 2 };
            ui.columns(columns, |cols| {
                {
                    let ui = &mut cols[0];
                    card_frame().show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        for field in ContactField::ALL {
                            ui.label(egui::RichText::new(field.label()).strong());
                            let mut value = draft.field(field).to_string();
                            let editor = if field == ContactField::Message {
                                egui::TextEdit::multiline(&mut value).desired_rows(6)
                            } else {
                                egui::TextEdit::singleline(&mut value)
                            }
                            .hint_text(field.placeholder())
                            .desired_width(f32::INFINITY);
                            if ui.add_enabled(!submitting, editor).changed() {
                                edits.push((field, value));
                            }
                            ui.add_space(6.0);
                        }
                        ui.horizontal(|ui| {
                            let label = if submitting {
                                "Sending Message"
                            } else {
                                "Send Message  →"
                            };
                            if ui.add_enabled(!submitting, primary_button(label)).clicked() {
                                submit = true;
                            }
                            if submitting {
                                ui.spinner();
                            }
                        });
                    });
                }
                let info = &mut cols[columns - 1];
                if columns == 1 {
                    info.add_space(16.0);
                }
                contact_details(info);
            });
        });

        for (field, value) in edits {
            self.contact.set_field(field, value);
        }
        if submit {
            self.submit_contact(now);
        }
    }

    fn show_footer(&mut self, ui: &mut egui::Ui, now: Instant) {
        let mut subscribe = false;
        let copyright = self.copyright.clone();
        let newsletter_email = &mut self.newsletter_email;

        section_frame(ui, theme::MUTED_BACKGROUND, |ui| {
            let columns = theme::grid_columns(ui.available_width(), 4);
            ui.columns(columns, |cols| {
                let brand = &mut cols[0];
                brand.label(
                    egui::RichText::new(format!(
                        "{}  {}",
                        glyph_symbol(shared::domain::Glyph::Code),
                        content::BRAND_NAME
                    ))
                    .size(20.0)
                    .strong(),
                );
                brand.label(muted(content::BRAND_TAGLINE));
                brand.horizontal_wrapped(|ui| {
                    for social in content::SOCIAL_LINKS {
                        ui.label(muted(social).small());
                    }
                });

                for (index, group) in content::FOOTER_LINK_GROUPS.iter().enumerate() {
                    let ui = &mut cols[(index + 1) % columns];
                    ui.label(egui::RichText::new(group.heading).strong());
                    for link in group.links {
                        ui.label(muted(link));
                    }
                }

                let ui = &mut cols[3 % columns];
                ui.label(egui::RichText::new(content::NEWSLETTER_HEADING).strong());
                ui.label(muted(content::NEWSLETTER_PROMPT));
                ui.horizontal(|ui| {
                    let field = ui.add(
                        egui::TextEdit::singleline(newsletter_email)
                            .hint_text("Email address")
                            .desired_width(200.0),
                    );
                    let pressed_enter =
                        field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if ui.add(primary_button("Subscribe")).clicked() || pressed_enter {
                        subscribe = true;
                    }
                });
                ui.label(muted(content::NEWSLETTER_FINE_PRINT).small());
            });

            ui.add_space(32.0);
            ui.separator();
            ui.horizontal_wrapped(|ui| {
                ui.label(muted(&copyright).small());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    for link in content::FOOTER_LEGAL_LINKS.iter().rev() {
                        ui.label(muted(link).small());
                    }
                });
            });
        });

        if subscribe {
            self.subscribe_newsletter(now);
        }
    }
}

fn section_frame(ui: &mut egui::Ui, fill: egui::Color32, add: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::NONE.fill(fill).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.add_space(theme::SECTION_PADDING);
        centered(ui, add);
        ui.add_space(theme::SECTION_PADDING);
    });
}

fn team_card(ui: &mut egui::Ui, member: &TeamMember) {
    card_frame().show(ui, |ui| {
        let width = ui.available_width();
        ui.set_width(width);
        ui.add(
            egui::Image::new(member.image.url())
                .fit_to_exact_size(egui::vec2(width, PORTRAIT_HEIGHT))
                .corner_radius(10.0),
        );
        ui.label(egui::RichText::new(member.name).heading().strong());
        ui.label(egui::RichText::new(member.role).color(theme::PRIMARY));
        ui.label(muted(member.bio));
    });
}

fn testimonial_card(ui: &mut egui::Ui, testimonial: &Testimonial) {
    card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        star_row(ui, testimonial.rating);
        ui.label(egui::RichText::new(format!("\"{}\"", testimonial.quote)).size(17.0));
        ui.add_space(8.0);
        ui.label(egui::RichText::new(testimonial.name).strong());
        ui.label(muted(&format!("{}, {}", testimonial.title, testimonial.company)).small());
    });
}

fn contact_details(ui: &mut egui::Ui) {
    for channel in content::CONTACT_CHANNELS {
        ui.horizontal(|ui| {
            glyph_badge(ui, channel.glyph);
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(channel.title).strong());
                ui.hyperlink_to(muted(channel.details), channel.href);
            });
        });
        ui.add_space(10.0);
    }
    ui.add_space(8.0);
    card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new("Our Availability").strong());
        ui.label(muted(content::AVAILABILITY_NOTE).small());
        ui.add_space(6.0);
        for slot in content::AVAILABILITY {
            ui.horizontal(|ui| {
                ui.label(slot.day);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(slot.hours);
                });
            });
        }
    });
}

/// Returns `true` when the close button was clicked.
fn toast_card(ui: &mut egui::Ui, toast: &Notification) -> bool {
    let accent = match toast.kind {
        NotificationKind::Success => theme::SUCCESS,
        NotificationKind::Info => theme::PRIMARY,
        NotificationKind::Error => theme::DANGER,
    };
    let mut close = false;
    card_frame()
        .stroke(egui::Stroke::new(1.5, accent))
        .show(ui, |ui| {
            ui.set_max_width(360.0);
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    let title = if toast.title == SUCCESS_TITLE {
                        format!("✔ {}", toast.title)
                    } else {
                        toast.title.clone()
                    };
                    ui.label(egui::RichText::new(title).strong().color(accent));
                    ui.label(muted(&toast.description));
                });
                if ui.small_button("✕").clicked() {
                    close = true;
                }
            });
        });
    ui.add_space(8.0);
    close
}
