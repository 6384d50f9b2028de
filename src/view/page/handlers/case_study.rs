// Case study page: hero, problem, approach, results, closing image

use crate::content::{case_study, CaseStudy};
use crate::layout;
use crate::message::Action;
use crate::state::PageId;
use crate::view::markdown::render_markdown;
use crate::view::page::handler::{PageContext, PageView};
use crate::view::widgets;
use eframe::egui;

pub struct CaseStudyPage;

impl CaseStudyPage {
    pub fn new() -> Self {
        Self
    }

    fn render_hero(&self, ui: &mut egui::Ui, study: &CaseStudy, context: &PageContext) {
        let palette = &context.palette;
        ui.add_space(96.0);
        ui.vertical_centered(|ui| {
            widgets::eyebrow(ui, study.eyebrow, palette);
            ui.add_space(16.0);
            ui.add(
                egui::Label::new(
                    egui::RichText::new(study.title)
                        .size(40.0)
                        .strong()
                        .color(palette.text_primary),
                )
                .wrap(),
            );
            ui.add_space(12.0);
            ui.label(
                egui::RichText::new(study.tagline)
                    .size(18.0)
                    .italics()
                    .color(palette.text_secondary),
            );
        });

        ui.add_space(32.0);
        ui.separator();
        ui.add_space(16.0);
        egui::Grid::new(("case_study_meta", study.page.tag()))
            .num_columns(2)
            .spacing([32.0, 10.0])
            .show(ui, |ui| {
                for (label, value) in study.meta {
                    widgets::eyebrow(ui, label, palette);
                    ui.label(
                        egui::RichText::new(*value)
                            .size(14.0)
                            .color(palette.text_primary),
                    );
                    ui.end_row();
                }
            });
        ui.add_space(32.0);
        let width = ui.available_width();
        widgets::asset_image(ui, context.assets, study.hero_image, width);
    }

    fn render_insight(&self, ui: &mut egui::Ui, study: &CaseStudy, context: &PageContext) {
        let palette = &context.palette;
        egui::Frame::new()
            .fill(palette.accent_band)
            .corner_radius(layout::CARD_ROUNDING)
            .inner_margin(egui::Margin::same(layout::CARD_PADDING))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    widgets::eyebrow(ui, "Key insight", palette);
                    ui.add_space(10.0);
                    widgets::section_heading(ui, study.insight.heading, palette);
                    ui.add_space(10.0);
                    render_markdown(ui, study.insight.body, palette);
                });
            });
    }

    fn render_approach(&self, ui: &mut egui::Ui, study: &CaseStudy, context: &PageContext) {
        let palette = &context.palette;
        widgets::section_heading(ui, "The approach", palette);
        ui.add_space(16.0);
        for (i, step) in study.approach.iter().enumerate() {
            ui.horizontal_wrapped(|ui| {
                ui.label(
                    egui::RichText::new(format!("{:02}", i + 1))
                        .size(14.0)
                        .strong()
                        .color(palette.brand),
                );
                ui.add_space(12.0);
                widgets::body_text(ui, step, palette);
            });
            ui.add_space(10.0);
        }
    }

    fn render_closing(&self, ui: &mut egui::Ui, study: &CaseStudy, context: &PageContext) {
        let palette = &context.palette;
        let width = ui.available_width();
        widgets::asset_image(ui, context.assets, study.closing_image, width);
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(format!("“{}”", study.closing_quote))
                        .size(24.0)
                        .italics()
                        .color(palette.text_primary),
                )
                .wrap(),
            );
        });
    }

    /// Floating "Back" control, returning to the card this study came from
    fn render_back(&self, ui: &egui::Ui, context: &PageContext) {
        let palette = &context.palette;
        egui::Area::new(egui::Id::new("case_study_back"))
            .anchor(egui::Align2::LEFT_TOP, [16.0, 16.0])
            .show(ui.ctx(), |ui| {
                egui::Frame::new()
                    .fill(palette.surface_primary)
                    .corner_radius(layout::CARD_ROUNDING)
                    .inner_margin(egui::Margin::symmetric(14, 0))
                    .show(ui, |ui| {
                        if widgets::link_button(ui, "← Back", palette.text_primary) {
                            context.emit(Action::BackFromStudy);
                        }
                    });
            });
    }

    fn render_next(&self, ui: &mut egui::Ui, study: &CaseStudy, context: &PageContext) {
        let palette = &context.palette;
        let Some(next) = study.page.next_study() else {
            return;
        };
        context.anchor(ui, "next-study", |ui| {
            ui.vertical_centered(|ui| {
                widgets::eyebrow(ui, "Next case study", palette);
                if widgets::link_button(ui, &format!("{} →", next.title()), palette.text_primary) {
                    context.emit(Action::NextStudy);
                }
            });
        });
    }
}

impl PageView for CaseStudyPage {
    fn name(&self) -> &str {
        "case_study"
    }

    fn can_render(&self, page: PageId) -> bool {
        page.is_case_study()
    }

    fn render(&self, ui: &mut egui::Ui, page: PageId, context: &PageContext) {
        let Some(study) = case_study(page) else {
            return;
        };
        let palette = &context.palette;
        self.render_back(ui, context);

        layout::centered_column(ui, layout::CONTENT_MAX_WIDTH * 0.8, |ui| {
            self.render_hero(ui, study, context);
            widgets::vertical_divider(ui, palette);

            context.anchor(ui, "problem", |ui| {
                widgets::eyebrow(ui, "The problem", palette);
                ui.add_space(8.0);
                widgets::section_heading(ui, study.problem.heading, palette);
                ui.add_space(12.0);
                render_markdown(ui, study.problem.body, palette);
            });
            widgets::vertical_divider(ui, palette);

            widgets::section_heading(ui, study.ownership.heading, palette);
            ui.add_space(12.0);
            render_markdown(ui, study.ownership.body, palette);
            widgets::vertical_divider(ui, palette);

            self.render_insight(ui, study, context);
            widgets::vertical_divider(ui, palette);

            context.anchor(ui, "approach", |ui| self.render_approach(ui, study, context));
            widgets::vertical_divider(ui, palette);

            context.anchor(ui, "results", |ui| {
                widgets::eyebrow(ui, "Results", palette);
                ui.add_space(8.0);
                widgets::section_heading(ui, study.results.heading, palette);
                ui.add_space(12.0);
                render_markdown(ui, study.results.body, palette);
            });
            widgets::vertical_divider(ui, palette);

            self.render_closing(ui, study, context);
            ui.add_space(layout::SECTION_SPACING);
            self.render_next(ui, study, context);
            ui.add_space(layout::SECTION_SPACING);
        });
    }
}
