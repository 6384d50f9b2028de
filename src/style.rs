use eframe::egui;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_config(mode: &str) -> Self {
        match mode {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn visuals(self) -> egui::Visuals {
        match self {
            Theme::Light => egui::Visuals::light(),
            Theme::Dark => egui::Visuals::dark(),
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette {
                text_primary: egui::Color32::from_rgb(20, 20, 20),
                text_secondary: egui::Color32::from_rgb(82, 82, 91),
                text_muted: egui::Color32::from_rgb(140, 140, 148),
                surface_primary: egui::Color32::WHITE,
                surface_secondary: egui::Color32::from_rgb(245, 245, 247),
                border_hairline: egui::Color32::from_rgb(229, 229, 231),
                brand: egui::Color32::from_rgb(37, 76, 218),
                accent_band: egui::Color32::from_rgb(232, 238, 255),
            },
            Theme::Dark => Palette {
                text_primary: egui::Color32::from_rgb(236, 236, 238),
                text_secondary: egui::Color32::from_rgb(170, 170, 178),
                text_muted: egui::Color32::from_rgb(120, 120, 128),
                surface_primary: egui::Color32::from_rgb(18, 18, 20),
                surface_secondary: egui::Color32::from_rgb(30, 30, 33),
                border_hairline: egui::Color32::from_rgb(48, 48, 52),
                brand: egui::Color32::from_rgb(120, 150, 255),
                accent_band: egui::Color32::from_rgb(34, 40, 64),
            },
        }
    }
}

/// Color tokens shared by every page
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub text_primary: egui::Color32,
    pub text_secondary: egui::Color32,
    pub text_muted: egui::Color32,
    pub surface_primary: egui::Color32,
    pub surface_secondary: egui::Color32,
    pub border_hairline: egui::Color32,
    pub brand: egui::Color32,
    pub accent_band: egui::Color32,
}
