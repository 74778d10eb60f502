use eframe::egui;

use crate::ui::theme::current_theme;

/// Shown while the startup credential check is still in flight.
pub fn checking_screen(ui: &mut egui::Ui) {
    let theme = current_theme();

    ui.vertical_centered(|ui| {
        ui.add_space(140.0);
        ui.add(egui::Spinner::new().size(28.0));
        ui.add_space(12.0);
        ui.label(egui::RichText::new("Checking for an API key...").color(theme.text_muted));
    });
}
