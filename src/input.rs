// Keyboard and mouse input for the portfolio window

use crate::app::Portfolio;
use crate::message::Action;
use eframe::egui;
use std::time::Instant;

impl Portfolio {
    pub fn handle_input(&mut self, ctx: &egui::Context, now: Instant) {
        // History keys and the mouse side buttons, as in a browser
        let back = ctx.input(|i| {
            (i.modifiers.alt && i.key_pressed(egui::Key::ArrowLeft))
                || i.pointer.button_pressed(egui::PointerButton::Extra1)
        });
        let forward = ctx.input(|i| {
            (i.modifiers.alt && i.key_pressed(egui::Key::ArrowRight))
                || i.pointer.button_pressed(egui::PointerButton::Extra2)
        });

        if back {
            self.apply_action(Action::HistoryBack, now);
            return;
        }
        if forward {
            self.apply_action(Action::HistoryForward, now);
            return;
        }

        if self.ui.menu_open && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.ui.menu_open = false;
        }
    }
}
