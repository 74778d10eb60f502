//! Root egui app struct.

use std::collections::HashMap;
use std::sync::Arc;

use eframe::egui;
use tokio::sync::mpsc;

use crate::infra::host::CredentialHost;
use crate::infra::story::StoryService;

use super::state::AppState;
use super::store::Action;

/// Root egui application for StoryWeave.
///
/// Owns all application state; views receive it by reference and talk back
/// exclusively through dispatched [`Action`]s.
pub struct StoryWeaveApp {
    pub state: AppState,

    pub host: Arc<dyn CredentialHost>,
    pub story_service: Arc<dyn StoryService>,

    pub action_tx: mpsc::Sender<Action>,
    pub action_rx: mpsc::Receiver<Action>,

    /// One-frame render effects issued by a session reset.
    pub pending_scroll_to_top: bool,
    pub pending_focus_topic: bool,

    /// Decoded page illustrations, keyed by page index. Presentation-only
    /// cache; cleared whenever a new request starts. `None` marks a payload
    /// that failed to decode so it is not retried every frame.
    pub illustration_textures: HashMap<usize, Option<egui::TextureHandle>>,
}

impl StoryWeaveApp {
    pub fn with_collaborators(
        host: Arc<dyn CredentialHost>,
        story_service: Arc<dyn StoryService>,
    ) -> Self {
        let (action_tx, action_rx) = mpsc::channel(32);

        Self {
            state: AppState::default(),
            host,
            story_service,
            action_tx,
            action_rx,
            pending_scroll_to_top: false,
            pending_focus_topic: false,
            illustration_textures: HashMap::new(),
        }
    }
}
