use eframe::egui;

use crate::ui::views;

use super::StoryWeaveApp;
use super::state::{Screen, select_screen};
use super::store::Action;

impl eframe::App for StoryWeaveApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        crate::ui::theme::apply(ctx);

        let updated = self.poll_action_messages();
        if updated || self.state.credential.is_checking || self.state.request.is_loading() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        // A fresh request invalidates illustrations from the previous story.
        if self.state.request.is_loading() && !self.illustration_textures.is_empty() {
            self.illustration_textures.clear();
        }

        let scroll_to_top = std::mem::take(&mut self.pending_scroll_to_top);
        let focus_topic = std::mem::take(&mut self.pending_focus_topic);

        let state = &self.state;
        let textures = &mut self.illustration_textures;
        let mut intents: Vec<Action> = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| {
            match select_screen(&state.credential, &state.request) {
                Screen::Checking => views::checking_screen(ui),
                Screen::SelectKey { error } => views::select_key_screen(ui, error, &mut intents),
                Screen::Main(content) => views::main_screen(
                    ui,
                    &state.topic,
                    content,
                    views::MainViewEffects {
                        scroll_to_top,
                        focus_topic,
                        textures,
                    },
                    &mut intents,
                ),
            }
        });

        for action in intents {
            self.dispatch(action);
        }
    }
}
