use std::sync::Arc;

use crate::infra::app_config;
use crate::infra::host::{CredentialHost, KeychainHost};
use crate::infra::story::GeminiStoryClient;

use super::StoryWeaveApp;

impl StoryWeaveApp {
    pub fn new_egui(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = app_config::load_config();

        let host: Arc<dyn CredentialHost> = Arc::new(KeychainHost::new());
        let service = Arc::new(GeminiStoryClient::new(&config, host.clone()));

        let mut app = Self::with_collaborators(host, service);
        // The credential gate resolves before anything else is reachable.
        app.start_credential_check();
        app
    }
}
