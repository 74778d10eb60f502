//! Theme definitions for StoryWeave
//!
//! Semantic color names over a fixed dark palette, applied once per frame.

use eframe::egui;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub bg_primary: egui::Color32,
    pub bg_secondary: egui::Color32,
    pub border: egui::Color32,

    pub text_primary: egui::Color32,
    pub text_muted: egui::Color32,

    pub brand: egui::Color32,
    pub destructive: egui::Color32,
}

pub fn current_theme() -> Theme {
    Theme {
        bg_primary: egui::Color32::from_rgb(24, 24, 37),
        bg_secondary: egui::Color32::from_rgb(30, 30, 46),
        border: egui::Color32::from_rgb(69, 71, 90),
        text_primary: egui::Color32::from_rgb(205, 214, 244),
        text_muted: egui::Color32::from_rgb(166, 173, 200),
        brand: egui::Color32::from_rgb(203, 166, 247),
        destructive: egui::Color32::from_rgb(243, 139, 168),
    }
}

pub fn apply(ctx: &egui::Context) {
    let theme = current_theme();
    let mut visuals = egui::Visuals::dark();

    visuals.panel_fill = theme.bg_primary;
    visuals.window_fill = theme.bg_primary;

    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, theme.border);
    visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, theme.border);
    visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, theme.brand);
    visuals.widgets.hovered.bg_fill = theme.bg_secondary;
    visuals.widgets.active.bg_stroke = egui::Stroke::new(1.0, theme.brand);
    visuals.widgets.active.bg_fill = theme.bg_secondary;

    visuals.selection.bg_fill = theme.brand.gamma_multiply(0.3);
    visuals.selection.stroke = egui::Stroke::new(1.0, theme.brand);

    ctx.set_visuals(visuals);
}
