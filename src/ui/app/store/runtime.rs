use std::time::Duration;

use super::super::StoryWeaveApp;
use super::action::{Action, AsyncAction};
use super::command::Command;

/// Grace period before the startup credential check fires, tolerating a host
/// that has not finished publishing its capability at first paint. Best
/// effort, not a synchronization point: a host that is still absent after
/// the delay simply reads as "no credential".
pub(crate) const HOST_READY_GRACE: Duration = Duration::from_millis(100);

pub fn run(app: &mut StoryWeaveApp, command: Command) {
    match command {
        Command::CheckCredential => check_credential(app),
        Command::OpenSelectKey => open_select_key(app),
        Command::GenerateStory { topic } => generate_story(app, topic),
        Command::ScrollToTop => app.pending_scroll_to_top = true,
        Command::FocusTopicInput => app.pending_focus_topic = true,
    }
}

fn check_credential(app: &mut StoryWeaveApp) {
    let host = app.host.clone();
    let action_tx = app.action_tx.clone();

    tokio::spawn(async move {
        tokio::time::sleep(HOST_READY_GRACE).await;
        let selected = match host.has_selected_api_key().await {
            Ok(selected) => selected,
            Err(err) => {
                // A missing or broken host capability means "no credential";
                // it is never surfaced to the user.
                log::warn!("credential check failed: {err}");
                false
            }
        };
        let _ = action_tx
            .send(Action::Async(AsyncAction::CredentialChecked(selected)))
            .await;
    });
}

fn open_select_key(app: &mut StoryWeaveApp) {
    let host = app.host.clone();
    let action_tx = app.action_tx.clone();

    tokio::spawn(async move {
        let result = host.open_select_key().await.map_err(|err| err.to_string());
        let _ = action_tx
            .send(Action::Async(AsyncAction::KeySelectionFinished(result)))
            .await;
    });
}

fn generate_story(app: &mut StoryWeaveApp, topic: String) {
    let service = app.story_service.clone();
    let action_tx = app.action_tx.clone();

    tokio::spawn(async move {
        let result = service
            .generate_story(&topic)
            .await
            .map_err(|err| err.to_string());
        let _ = action_tx
            .send(Action::Async(AsyncAction::StoryFinished(Box::new(result))))
            .await;
    });
}
