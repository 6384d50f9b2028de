// Home page: hero, about, selected work, footer

use crate::content::{home, PROJECTS};
use crate::layout;
use crate::message::Action;
use crate::state::PageId;
use crate::view::page::handler::{PageContext, PageView};
use crate::view::widgets;
use chrono::Datelike;
use eframe::egui;

pub struct HomePage;

impl HomePage {
    pub fn new() -> Self {
        Self
    }

    fn render_hero(&self, ui: &mut egui::Ui, context: &PageContext) {
        let palette = &context.palette;
        ui.add_space(layout::HEADER_HEIGHT + 48.0);

        let text = |ui: &mut egui::Ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(home::HERO_HEADLINE)
                        .size(40.0)
                        .color(palette.text_primary),
                )
                .wrap(),
            );
            ui.add_space(16.0);
            widgets::body_text(ui, home::HERO_SUBLINE, palette);
            ui.add_space(12.0);
            widgets::eyebrow(ui, home::HERO_SELECTED, palette);
            ui.add_space(16.0);

            if widgets::link_button(ui, &format!("{} →", home::HERO_CTA), palette.text_primary) {
                context.emit(Action::ScrollToAnchor(home::WORK_ANCHOR));
            }
            ui.horizontal(|ui| {
                if widgets::link_button(ui, "LinkedIn", palette.text_secondary) {
                    context.emit(Action::OpenLink(context.contact.linkedin.clone()));
                }
                ui.add_space(16.0);
                if widgets::link_button(ui, "Email", palette.text_secondary) {
                    context.emit(Action::OpenLink(format!("mailto:{}", context.contact.email)));
                }
            });
        };

        if context.narrow {
            ui.vertical_centered(|ui| {
                widgets::asset_image(ui, context.assets, home::HERO_PHOTO, 192.0);
            });
            ui.add_space(24.0);
            text(ui);
        } else {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.set_width(ui.available_width() - layout::HERO_PHOTO_SIZE - 48.0);
                    text(ui);
                });
                ui.add_space(48.0);
                widgets::asset_image(ui, context.assets, home::HERO_PHOTO, layout::HERO_PHOTO_SIZE);
            });
        }
        ui.add_space(layout::SECTION_SPACING);
    }

    fn render_about(&self, ui: &mut egui::Ui, context: &PageContext) {
        let palette = &context.palette;
        context.anchor(ui, home::ABOUT_ANCHOR, |ui| {
            egui::Frame::new()
                .fill(palette.surface_secondary)
                .inner_margin(egui::Margin::symmetric(0, 64))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    layout::centered_column(ui, layout::READING_MAX_WIDTH, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.label(
                                egui::RichText::new(home::ABOUT_TITLE)
                                    .size(34.0)
                                    .color(palette.text_primary),
                            );
                            ui.add_space(24.0);
                            for paragraph in home::ABOUT_BODY {
                                widgets::body_text(ui, paragraph, palette);
                                ui.add_space(12.0);
                            }
                        });
                    });
                });
        });
        ui.add_space(layout::SECTION_SPACING);
    }

    fn render_work(&self, ui: &mut egui::Ui, context: &PageContext) {
        let palette = &context.palette;
        context.anchor(ui, home::WORK_ANCHOR, |ui| {
            layout::centered_column(ui, layout::CONTENT_MAX_WIDTH, |ui| {
                widgets::eyebrow(ui, home::WORK_EYEBROW, palette);
                ui.add_space(6.0);
                widgets::body_text(ui, home::WORK_INTRO, palette);
                ui.add_space(40.0);

                for card in &PROJECTS {
                    let clicked = context.anchor(ui, card.anchor(), |ui| {
                        widgets::project_card(ui, card, context.assets, palette, context.narrow)
                    });
                    if clicked {
                        context.emit(Action::Navigate(card.page));
                    }
                    ui.add_space(32.0);
                }
            });
        });
        ui.add_space(layout::SECTION_SPACING);
    }

    fn render_footer(&self, ui: &mut egui::Ui, context: &PageContext) {
        let palette = &context.palette;
        egui::Frame::new()
            .fill(palette.surface_secondary)
            .inner_margin(egui::Margin::symmetric(0, 48))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    let year = chrono::Local::now().year();
                    ui.label(
                        egui::RichText::new(format!("© {year} {}", home::OWNER))
                            .size(12.0)
                            .color(palette.text_muted),
                    );
                });
            });
    }
}

impl PageView for HomePage {
    fn name(&self) -> &str {
        "home"
    }

    fn can_render(&self, page: PageId) -> bool {
        page == PageId::Home
    }

    fn render(&self, ui: &mut egui::Ui, _page: PageId, context: &PageContext) {
        layout::centered_column(ui, layout::CONTENT_MAX_WIDTH, |ui| {
            self.render_hero(ui, context);
        });
        self.render_about(ui, context);
        self.render_work(ui, context);
        self.render_footer(ui, context);
    }
}
