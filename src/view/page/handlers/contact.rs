// Contact page

use crate::content::home;
use crate::layout;
use crate::message::Action;
use crate::state::PageId;
use crate::view::page::handler::{PageContext, PageView};
use crate::view::widgets;
use eframe::egui;

pub struct ContactPage;

impl ContactPage {
    pub fn new() -> Self {
        Self
    }
}

impl PageView for ContactPage {
    fn name(&self) -> &str {
        "contact"
    }

    fn can_render(&self, page: PageId) -> bool {
        page == PageId::Contact
    }

    fn render(&self, ui: &mut egui::Ui, _page: PageId, context: &PageContext) {
        let palette = &context.palette;
        ui.add_space(layout::HEADER_HEIGHT + 96.0);
        layout::centered_column(ui, layout::READING_MAX_WIDTH, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(home::CONTACT_TITLE)
                        .size(40.0)
                        .color(palette.text_primary),
                );
                ui.add_space(16.0);
                widgets::body_text(ui, home::CONTACT_BODY, palette);
                ui.add_space(32.0);

                let email = &context.contact.email;
                if widgets::link_button(ui, email, palette.brand) {
                    context.emit(Action::OpenLink(format!("mailto:{email}")));
                }
                if widgets::link_button(ui, "LinkedIn", palette.brand) {
                    context.emit(Action::OpenLink(context.contact.linkedin.clone()));
                }
            });
        });
    }
}
