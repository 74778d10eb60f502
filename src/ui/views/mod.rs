//! Screen views. Pure render functions: they read state, draw, and push
//! [`Action`]s into an intent list the frame loop dispatches afterwards.

mod checking;
mod main_screen;
mod select_key;

pub use checking::checking_screen;
pub use main_screen::{MainViewEffects, main_screen};
pub use select_key::select_key_screen;

use eframe::egui;

use crate::ui::theme::current_theme;

/// Framed error message used on both the selection and main screens.
pub(crate) fn error_banner(ui: &mut egui::Ui, message: &str) {
    let theme = current_theme();
    egui::Frame::new()
        .fill(theme.bg_secondary)
        .stroke(egui::Stroke::new(1.0, theme.destructive))
        .corner_radius(6.0)
        .inner_margin(egui::Margin::symmetric(12, 8))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(message).color(theme.destructive));
        });
}
