// Small building blocks shared by the page views

use crate::content::{AssetCatalog, ImageSide, ProjectCard};
use crate::layout;
use crate::style::Palette;
use eframe::egui;

/// Small uppercase label above a heading
pub fn eyebrow(ui: &mut egui::Ui, text: &str, palette: &Palette) {
    ui.label(
        egui::RichText::new(text.to_uppercase())
            .size(11.0)
            .color(palette.text_muted),
    );
}

pub fn section_heading(ui: &mut egui::Ui, text: &str, palette: &Palette) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(text)
                .size(28.0)
                .strong()
                .color(palette.text_primary),
        )
        .wrap(),
    );
}

pub fn body_text(ui: &mut egui::Ui, text: &str, palette: &Palette) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(text)
                .size(16.0)
                .color(palette.text_secondary),
        )
        .wrap(),
    );
}

/// Short vertical rule between case study sections
pub fn vertical_divider(ui: &mut egui::Ui, palette: &Palette) {
    ui.add_space(24.0);
    ui.vertical_centered(|ui| {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(1.0, 48.0), egui::Sense::hover());
        ui.painter().rect_filled(rect, 0.0, palette.text_primary);
    });
    ui.add_space(24.0);
}

/// Image from the assets directory, skipped when the file is missing.
pub fn asset_image(ui: &mut egui::Ui, assets: &AssetCatalog, name: &str, max_width: f32) {
    if let Some(uri) = assets.uri(name) {
        ui.add(
            egui::Image::new(uri)
                .max_width(max_width)
                .corner_radius(layout::CARD_ROUNDING),
        );
    }
}

/// Text button with a minimum touch target; returns true when clicked.
pub fn link_button(ui: &mut egui::Ui, text: &str, color: egui::Color32) -> bool {
    ui.add(
        egui::Button::new(egui::RichText::new(text).size(14.0).color(color))
            .frame(false)
            .min_size(egui::vec2(0.0, layout::MIN_TOUCH_TARGET)),
    )
    .clicked()
}

fn card_text(ui: &mut egui::Ui, card: &ProjectCard, palette: &Palette) {
    ui.horizontal_wrapped(|ui| {
        for tag in card.tags {
            egui::Frame::new()
                .fill(palette.border_hairline)
                .corner_radius(6u8)
                .inner_margin(egui::Margin::symmetric(8, 3))
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(tag.to_uppercase())
                            .size(10.0)
                            .color(palette.text_secondary),
                    );
                });
        }
    });
    ui.add_space(8.0);

    let title_size = if card.elevated { 26.0 } else { 22.0 };
    ui.add(
        egui::Label::new(
            egui::RichText::new(card.title)
                .size(title_size)
                .strong()
                .color(palette.text_primary),
        )
        .wrap(),
    );
    ui.add_space(6.0);
    body_text(ui, card.description, palette);

    if !card.metrics.is_empty() {
        ui.add_space(12.0);
        ui.horizontal_wrapped(|ui| {
            for metric in card.metrics {
                ui.vertical(|ui| {
                    ui.set_max_width(160.0);
                    ui.label(
                        egui::RichText::new(metric.value)
                            .size(20.0)
                            .strong()
                            .color(palette.text_primary),
                    );
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(metric.label)
                                .size(12.0)
                                .color(palette.text_muted),
                        )
                        .wrap(),
                    );
                });
                ui.add_space(16.0);
            }
        });
    }

    if !card.bullets.is_empty() {
        ui.add_space(10.0);
        for bullet in card.bullets {
            ui.label(
                egui::RichText::new(format!("• {bullet}"))
                    .size(14.0)
                    .color(palette.text_secondary),
            );
        }
    }

    ui.add_space(14.0);
    ui.label(
        egui::RichText::new(format!("{} →", card.cta))
            .size(14.0)
            .strong()
            .color(palette.text_primary),
    );
}

/// Project card; returns true when the card was clicked.
pub fn project_card(
    ui: &mut egui::Ui,
    card: &ProjectCard,
    assets: &AssetCatalog,
    palette: &Palette,
    narrow: bool,
) -> bool {
    let mut frame = egui::Frame::new()
        .fill(palette.surface_secondary)
        .corner_radius(layout::CARD_ROUNDING)
        .inner_margin(egui::Margin::same(layout::CARD_PADDING));
    if card.elevated {
        frame = frame.shadow(egui::epaint::Shadow {
            offset: [0, 2],
            blur: 8,
            spread: 0,
            color: egui::Color32::from_black_alpha(12),
        });
    }

    let response = frame
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            if narrow {
                ui.vertical(|ui| {
                    card_text(ui, card, palette);
                    ui.add_space(16.0);
                    let width = ui.available_width();
                    asset_image(ui, assets, card.image, width);
                });
            } else {
                let text_width = ui.available_width() - layout::CARD_IMAGE_WIDTH - 32.0;
                ui.horizontal(|ui| {
                    let text = |ui: &mut egui::Ui| {
                        ui.vertical(|ui| {
                            ui.set_width(text_width.max(200.0));
                            card_text(ui, card, palette);
                        });
                    };
                    match card.image_side {
                        ImageSide::Right => {
                            text(ui);
                            ui.add_space(32.0);
                            asset_image(ui, assets, card.image, layout::CARD_IMAGE_WIDTH);
                        }
                        ImageSide::Left => {
                            asset_image(ui, assets, card.image, layout::CARD_IMAGE_WIDTH);
                            ui.add_space(32.0);
                            text(ui);
                        }
                    }
                });
            }
        })
        .response
        .interact(egui::Sense::click());

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response.clicked()
}
