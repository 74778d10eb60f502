use std::collections::HashMap;

use base64::Engine as _;
use eframe::egui;

use crate::domain::{Illustration, IllustratedStory};
use crate::ui::app::{Action, MainContent};
use crate::ui::theme::current_theme;

use super::error_banner;

/// One-frame render effects plus the illustration texture cache, split out of
/// the app struct so the view can borrow them alongside the state.
pub struct MainViewEffects<'a> {
    pub scroll_to_top: bool,
    pub focus_topic: bool,
    pub textures: &'a mut HashMap<usize, Option<egui::TextureHandle>>,
}

/// The main screen: topic form plus whatever the request lifecycle holds.
pub fn main_screen(
    ui: &mut egui::Ui,
    topic: &str,
    content: MainContent<'_>,
    effects: MainViewEffects<'_>,
    intents: &mut Vec<Action>,
) {
    let theme = current_theme();

    ui.add_space(16.0);
    ui.heading(egui::RichText::new("StoryWeave").color(theme.brand).size(24.0));
    ui.label(
        egui::RichText::new("What should tonight's story be about?").color(theme.text_muted),
    );
    ui.add_space(12.0);

    match content {
        MainContent::Idle => {
            topic_form(ui, topic, false, effects.focus_topic, intents);
            ui.add_space(32.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("Your story will appear here.")
                        .color(theme.text_muted)
                        .italics(),
                );
            });
        }
        MainContent::Loading => {
            topic_form(ui, topic, true, false, intents);
            ui.add_space(32.0);
            ui.vertical_centered(|ui| {
                ui.add(egui::Spinner::new().size(28.0));
                ui.add_space(12.0);
                ui.label(
                    egui::RichText::new("Weaving your story...").color(theme.text_muted),
                );
            });
        }
        MainContent::Error(message) => {
            topic_form(ui, topic, false, effects.focus_topic, intents);
            ui.add_space(16.0);
            error_banner(ui, message);
        }
        MainContent::Story(story) => {
            story_view(ui, story, effects, intents);
        }
    }
}

fn topic_form(
    ui: &mut egui::Ui,
    topic: &str,
    loading: bool,
    focus: bool,
    intents: &mut Vec<Action>,
) {
    let mut draft = topic.to_string();

    ui.horizontal(|ui| {
        let field_width = (ui.available_width() - 130.0).max(120.0);
        let response = ui.add_sized(
            [field_width, 28.0],
            egui::TextEdit::singleline(&mut draft)
                .hint_text("A brave snail who dreams of the moon...")
                .interactive(!loading),
        );
        if focus {
            response.request_focus();
        }
        if response.changed() {
            intents.push(Action::UpdateTopic(draft.clone()));
        }

        let can_submit = !loading && !draft.trim().is_empty();
        let clicked = ui
            .add_enabled(can_submit, egui::Button::new("Weave story"))
            .clicked();
        let submitted =
            response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if clicked || (submitted && can_submit) {
            intents.push(Action::SubmitRequested);
        }
    });
}

fn story_view(
    ui: &mut egui::Ui,
    story: &IllustratedStory,
    effects: MainViewEffects<'_>,
    intents: &mut Vec<Action>,
) {
    let theme = current_theme();

    let mut scroll = egui::ScrollArea::vertical().auto_shrink([false; 2]);
    if effects.scroll_to_top {
        scroll = scroll.vertical_scroll_offset(0.0);
    }

    scroll.show(ui, |ui| {
        ui.add_space(8.0);
        ui.heading(
            egui::RichText::new(&story.title)
                .color(theme.text_primary)
                .size(26.0),
        );
        ui.add_space(12.0);

        for (index, page) in story.pages.iter().enumerate() {
            if let Some(texture) = page_texture(ui, index, &page.illustration, effects.textures)
            {
                ui.add(
                    egui::Image::from_texture(texture)
                        .max_height(320.0)
                        .corner_radius(6.0),
                );
                ui.add_space(8.0);
            }
            ui.label(
                egui::RichText::new(&page.text)
                    .color(theme.text_primary)
                    .size(16.0),
            );
            ui.add_space(20.0);
        }

        if ui.button("Create another story").clicked() {
            intents.push(Action::ResetSession);
        }
        ui.add_space(24.0);
    });
}

/// Decodes a page illustration into a GPU texture on first sight and caches
/// the outcome, including failures.
fn page_texture<'t>(
    ui: &egui::Ui,
    index: usize,
    illustration: &Option<Illustration>,
    textures: &'t mut HashMap<usize, Option<egui::TextureHandle>>,
) -> Option<&'t egui::TextureHandle> {
    if !textures.contains_key(&index) {
        let texture = illustration
            .as_ref()
            .and_then(|illustration| decode_illustration(ui.ctx(), index, illustration));
        textures.insert(index, texture);
    }
    textures.get(&index)?.as_ref()
}

fn decode_illustration(
    ctx: &egui::Context,
    index: usize,
    illustration: &Illustration,
) -> Option<egui::TextureHandle> {
    let bytes = match base64::engine::general_purpose::STANDARD.decode(&illustration.data) {
        Ok(bytes) => bytes,
        Err(err) => {
            log::warn!("page {index}: illustration payload is not valid base64: {err}");
            return None;
        }
    };
    let image = match image::load_from_memory(&bytes) {
        Ok(image) => image,
        Err(err) => {
            log::warn!(
                "page {index}: could not decode {} illustration: {err}",
                illustration.mime_type
            );
            return None;
        }
    };

    let size = [image.width() as usize, image.height() as usize];
    let rgba = image.to_rgba8();
    Some(ctx.load_texture(
        format!("story_page_{index}"),
        egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()),
        egui::TextureOptions::LINEAR,
    ))
}
