//! Main entry point for the StoryWeave application
//! Initializes the egui application framework and sets up the Tokio runtime.

use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    // Enter the runtime context so UI code can tokio::spawn freely
    let _guard = storyweave::runtime().enter();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 720.0])
            .with_title("StoryWeave"),
        ..Default::default()
    };

    eframe::run_native(
        "StoryWeave",
        options,
        Box::new(|cc| Ok(Box::new(storyweave::ui::app::StoryWeaveApp::new_egui(cc)))),
    )
}
