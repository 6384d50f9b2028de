// Header, narrow-window menu and status line

use crate::app::Portfolio;
use crate::content::home;
use crate::layout;
use crate::message::Action;
use crate::state::PageId;
use crate::style::Palette;
use crate::view::widgets;
use eframe::egui;
use std::cell::RefCell;

/// Header links in display order
const NAV_LINKS: [(&str, Action); 3] = [
    ("Work", Action::ScrollToAnchor(home::WORK_ANCHOR)),
    ("About", Action::ScrollToAnchor(home::ABOUT_ANCHOR)),
    ("Contact", Action::Navigate(PageId::Contact)),
];

impl Portfolio {
    pub(crate) fn render_header(
        &self,
        ctx: &egui::Context,
        palette: &Palette,
        narrow: bool,
        actions: &RefCell<Vec<Action>>,
    ) {
        egui::TopBottomPanel::top("header")
            .exact_height(layout::HEADER_HEIGHT)
            .frame(
                egui::Frame::new()
                    .fill(palette.surface_primary)
                    .inner_margin(egui::Margin::symmetric(layout::PAGE_PADDING as i8, 0)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    let logo = ui.add(
                        egui::Button::new(
                            egui::RichText::new(home::LOGO)
                                .size(18.0)
                                .strong()
                                .color(palette.text_primary),
                        )
                        .frame(false),
                    );
                    if logo.on_hover_cursor(egui::CursorIcon::PointingHand).clicked() {
                        actions.borrow_mut().push(Action::HomeTop);
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if narrow {
                            let icon = if self.ui.menu_open { "✕" } else { "☰" };
                            if widgets::link_button(ui, icon, palette.text_primary) {
                                actions.borrow_mut().push(Action::ToggleMenu);
                            }
                        } else {
                            // Right-to-left layout: add in reverse
                            for (label, action) in NAV_LINKS.iter().rev() {
                                if widgets::link_button(ui, label, palette.text_secondary) {
                                    actions.borrow_mut().push(action.clone());
                                }
                                ui.add_space(12.0);
                            }
                        }
                    });
                });
            });

        if narrow && self.ui.menu_open {
            self.render_menu(ctx, palette, actions);
        }
    }

    fn render_menu(&self, ctx: &egui::Context, palette: &Palette, actions: &RefCell<Vec<Action>>) {
        egui::TopBottomPanel::top("header_menu")
            .frame(
                egui::Frame::new()
                    .fill(palette.surface_primary)
                    .inner_margin(egui::Margin::symmetric(layout::PAGE_PADDING as i8, 8)),
            )
            .show(ctx, |ui| {
                for (label, action) in NAV_LINKS.iter() {
                    if widgets::link_button(ui, label, palette.text_primary) {
                        let mut actions = actions.borrow_mut();
                        actions.push(Action::CloseMenu);
                        actions.push(action.clone());
                    }
                }
            });
    }

    /// Transient error and info messages
    pub(crate) fn render_status(&self, ctx: &egui::Context) {
        if self.ui.error_message.is_none() && self.ui.info_message.is_none() {
            return;
        }
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some((msg, _)) = &self.ui.error_message {
                    ui.colored_label(egui::Color32::from_rgb(220, 80, 80), msg);
                }
                if let Some((msg, _)) = &self.ui.info_message {
                    ui.colored_label(egui::Color32::from_rgb(80, 200, 120), msg);
                }
            });
        });
    }
}
