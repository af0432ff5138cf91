//! Dark palette and egui style tuning for the browser window.

use eframe::egui;

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub window_fill: egui::Color32,
    pub card_fill: egui::Color32,
    pub card_stroke: egui::Color32,
    pub heading_text: egui::Color32,
    pub muted_text: egui::Color32,
    pub rating_accent: egui::Color32,
    pub error_text: egui::Color32,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            window_fill: egui::Color32::from_rgb(24, 26, 32),
            card_fill: egui::Color32::from_rgb(36, 39, 48),
            card_stroke: egui::Color32::from_rgb(58, 62, 74),
            heading_text: egui::Color32::from_rgb(230, 232, 238),
            muted_text: egui::Color32::from_rgb(148, 152, 164),
            rating_accent: egui::Color32::from_rgb(245, 197, 66),
            error_text: egui::Color32::from_rgb(240, 110, 110),
        }
    }

    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = egui::Visuals::dark();
        visuals.panel_fill = self.window_fill;
        visuals.window_fill = self.window_fill;
        visuals.override_text_color = Some(self.heading_text);
        ctx.set_visuals(visuals);
    }
}
