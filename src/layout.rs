// Layout constants for the portfolio site

use eframe::egui;

// --- Sizing ---
pub const CONTENT_MAX_WIDTH: f32 = 1100.0;
pub const READING_MAX_WIDTH: f32 = 680.0;
pub const HEADER_HEIGHT: f32 = 56.0;
pub const PAGE_PADDING: f32 = 24.0;
pub const SECTION_SPACING: f32 = 72.0;
pub const CARD_ROUNDING: u8 = 16;
pub const CARD_PADDING: i8 = 32;
pub const CARD_IMAGE_WIDTH: f32 = 420.0;
pub const HERO_PHOTO_SIZE: f32 = 360.0;
pub const MIN_TOUCH_TARGET: f32 = 44.0;

// --- Breakpoints ---
/// Below this width the header collapses into a menu button
pub const NARROW_WIDTH: f32 = 760.0;

// --- Timing ---
pub const SETTLE_DELAY_MS: u64 = 150;
pub const MESSAGE_TIMEOUT_SECS: u64 = 5;

// --- Helper functions ---

pub fn is_narrow(ctx: &egui::Context) -> bool {
    ctx.input(|i| i.content_rect().width()) < NARROW_WIDTH
}

/// Width available to page content, clamped to `max`.
pub fn content_width(ui: &egui::Ui, max: f32) -> f32 {
    (ui.available_width() - 2.0 * PAGE_PADDING).clamp(0.0, max)
}

/// Run `add_contents` in a column of at most `max` width, centered.
pub fn centered_column<R>(
    ui: &mut egui::Ui,
    max: f32,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    let width = content_width(ui, max);
    ui.vertical_centered(|ui| {
        ui.set_max_width(width);
        ui.vertical(|ui| {
            ui.set_width(width);
            add_contents(ui)
        })
        .inner
    })
    .inner
}

#[cfg(test)]
mod tests {
    use super::*;

    fn narrow_at(width: f32) -> bool {
        let ctx = egui::Context::default();
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(width, 800.0),
            )),
            ..Default::default()
        };
        let mut narrow = false;
        let _ = ctx.run(input, |ctx| narrow = is_narrow(ctx));
        narrow
    }

    #[test]
    fn test_narrow_breakpoint() {
        assert!(narrow_at(420.0));
        assert!(!narrow_at(1280.0));
    }
}
