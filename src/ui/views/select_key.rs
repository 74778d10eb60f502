use eframe::egui;

use crate::ui::app::Action;
use crate::ui::theme::current_theme;

use super::error_banner;

/// One-time credential gate. Also hosts the error banner when a generation
/// failure invalidated the previously selected key.
pub fn select_key_screen(ui: &mut egui::Ui, error: Option<&str>, intents: &mut Vec<Action>) {
    let theme = current_theme();

    ui.vertical_centered(|ui| {
        ui.add_space(90.0);
        ui.heading(
            egui::RichText::new("StoryWeave")
                .color(theme.brand)
                .size(32.0),
        );
        ui.add_space(6.0);
        ui.label(
            egui::RichText::new("Turn any topic into an illustrated story.")
                .color(theme.text_muted),
        );
        ui.add_space(24.0);

        if let Some(message) = error {
            error_banner(ui, message);
            ui.add_space(16.0);
        }

        ui.label(
            egui::RichText::new("Select a Gemini API key to start weaving.")
                .color(theme.text_primary),
        );
        ui.add_space(12.0);

        let button = egui::Button::new(
            egui::RichText::new("Select API key").color(theme.bg_primary),
        )
        .fill(theme.brand);
        if ui.add(button).clicked() {
            intents.push(Action::SelectKeyRequested);
        }
    });
}
