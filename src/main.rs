mod app;
mod config;
mod content;
mod error;
mod input;
mod layout;
mod message;
mod state;
mod style;
mod view;

use app::Portfolio;
use config::Config;
use eframe::egui;
use std::path::Path;
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("portfolio=info")),
        )
        .init();

    if let Err(e) = Config::create_default() {
        warn!(error = %e, "could not write default configuration");
    }
    let config = Config::load();

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([config.window.width, config.window.height])
        .with_min_inner_size([360.0, 480.0])
        .with_title(content::home::OWNER);
    if let Some(icon) = load_icon(&config.assets.dir) {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Portfolio",
        options,
        Box::new(|cc| Ok(Box::new(Portfolio::new(cc, config)))),
    )
}

/// Window icon from `icon.png` in the assets directory, if there is one
fn load_icon(dir: &Path) -> Option<egui::IconData> {
    let image = image::open(dir.join("icon.png")).ok()?.into_rgba8();
    let (width, height) = image.dimensions();
    Some(egui::IconData {
        rgba: image.into_raw(),
        width,
        height,
    })
}
