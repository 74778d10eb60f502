//! Reducer-style state updates + side-effect commands.
//!
//! User intents and async results enter as [`Action`]s; the reducer applies
//! the transition rules and returns [`Command`]s; the runtime executes the
//! commands against the collaborator traits.

mod action;
mod command;
mod reducer;
mod runtime;

pub use action::{Action, AsyncAction};
pub use command::Command;
pub use reducer::CREDENTIAL_INVALID_MESSAGE;

use super::StoryWeaveApp;

impl StoryWeaveApp {
    pub fn dispatch(&mut self, action: Action) {
        let commands = reducer::reduce(&mut self.state, action);
        for command in commands {
            runtime::run(self, command);
        }
    }

    /// Issues the one-time startup credential check. Everything else is
    /// unreachable until it settles.
    pub fn start_credential_check(&mut self) {
        runtime::run(self, Command::CheckCredential);
    }
}
