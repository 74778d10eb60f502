//! Main application state and UI logic for the StoryWeave application.
//!
//! This module contains the primary egui application state, async message
//! plumbing, and the root `eframe::App` implementation.

mod init;
mod polling;
mod root;
mod state;
mod store;
mod update;

pub use root::StoryWeaveApp;
pub use state::{AppState, CredentialStatus, MainContent, RequestState, Screen, select_screen};
pub use store::{Action, AsyncAction, CREDENTIAL_INVALID_MESSAGE};
