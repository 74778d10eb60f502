use super::action::{Action, AsyncAction};
use super::command::Command;
use crate::ui::app::state::{AppState, RequestState};

/// Remote-service phrases that signal an invalid or unrecognized credential.
/// Matching is case-sensitive and deliberately conservative: anything else
/// is treated as transient so a valid key is not discarded over a network
/// error or a rate limit.
const CREDENTIAL_ERROR_MARKERS: [&str; 2] =
    ["API key not valid", "Requested entity was not found"];

pub const CREDENTIAL_INVALID_MESSAGE: &str =
    "Your API key is invalid or was revoked. Select a different key to continue.";

pub fn reduce(state: &mut AppState, action: Action) -> Vec<Command> {
    match action {
        Action::UpdateTopic(text) => {
            state.topic = text;
            Vec::new()
        }

        Action::SubmitRequested => {
            // Re-entrancy guard: at most one request in flight; concurrent
            // submissions are rejected, not queued.
            if state.topic.trim().is_empty() || state.request.is_loading() {
                return Vec::new();
            }
            let topic = state.topic.trim().to_string();
            state.request = RequestState::Loading;
            vec![Command::GenerateStory { topic }]
        }

        Action::SelectKeyRequested => vec![Command::OpenSelectKey],

        Action::ResetSession => {
            // Only reachable from the story-shown screen.
            if !matches!(state.request, RequestState::Success(_)) {
                return Vec::new();
            }
            state.request = RequestState::Idle;
            state.topic.clear();
            vec![Command::ScrollToTop, Command::FocusTopicInput]
        }

        Action::Async(action) => reduce_async(state, action),
    }
}

fn reduce_async(state: &mut AppState, action: AsyncAction) -> Vec<Command> {
    match action {
        AsyncAction::CredentialChecked(selected) => {
            // `is_selected` settles before the checking flag drops, so the
            // checking screen is never dismissed against stale state.
            state.credential.is_selected = selected;
            state.credential.is_checking = false;
            Vec::new()
        }

        AsyncAction::KeySelectionFinished(result) => {
            match result {
                // Optimistic: the host resolved, assume a key is in place
                // rather than racing a re-query against the next submit.
                Ok(()) => state.credential.is_selected = true,
                Err(err) => log::warn!("select-key flow failed: {err}"),
            }
            Vec::new()
        }

        AsyncAction::StoryFinished(result) => {
            match *result {
                Ok(story) => state.request = RequestState::Success(story),
                Err(message) => {
                    if is_credential_error(&message) {
                        state.request =
                            RequestState::Error(CREDENTIAL_INVALID_MESSAGE.to_string());
                        state.credential.is_selected = false;
                    } else {
                        state.request = RequestState::Error(message);
                    }
                }
            }
            Vec::new()
        }
    }
}

fn is_credential_error(message: &str) -> bool {
    CREDENTIAL_ERROR_MARKERS
        .iter()
        .any(|marker| message.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::IllustratedStory;
    use crate::ui::app::state::CredentialStatus;

    fn story(title: &str) -> IllustratedStory {
        IllustratedStory {
            title: title.to_string(),
            pages: vec![],
        }
    }

    fn ready_state(topic: &str) -> AppState {
        AppState {
            credential: CredentialStatus {
                is_checking: false,
                is_selected: true,
            },
            topic: topic.to_string(),
            request: RequestState::Idle,
        }
    }

    #[test]
    fn submit_emits_generate_command_with_trimmed_topic() {
        let mut state = ready_state("  a brave snail  ");
        let commands = reduce(&mut state, Action::SubmitRequested);

        assert_eq!(state.request, RequestState::Loading);
        assert_eq!(
            commands,
            vec![Command::GenerateStory {
                topic: "a brave snail".to_string()
            }]
        );
    }

    #[test]
    fn submit_empty_topic_is_a_no_op() {
        for topic in ["", "   "] {
            let mut state = ready_state(topic);
            let commands = reduce(&mut state, Action::SubmitRequested);
            assert_eq!(state.request, RequestState::Idle);
            assert!(commands.is_empty());
        }
    }

    #[test]
    fn submit_while_loading_is_rejected_not_queued() {
        let mut state = ready_state("dragons");
        state.request = RequestState::Loading;

        let commands = reduce(&mut state, Action::SubmitRequested);

        assert!(commands.is_empty());
        assert_eq!(state.request, RequestState::Loading);
    }

    #[test]
    fn submit_clears_prior_error() {
        let mut state = ready_state("dragons");
        state.request = RequestState::Error("network timeout".into());

        let commands = reduce(&mut state, Action::SubmitRequested);

        assert_eq!(state.request, RequestState::Loading);
        assert_eq!(commands.len(), 1);
    }

    #[test]
    fn story_success_transitions_to_success() {
        let mut state = ready_state("dragons");
        state.request = RequestState::Loading;

        let commands = reduce(
            &mut state,
            Action::Async(AsyncAction::StoryFinished(Box::new(Ok(story("The Cave"))))),
        );

        assert!(commands.is_empty());
        assert!(matches!(state.request, RequestState::Success(ref s) if s.title == "The Cave"));
    }

    #[test]
    fn invalid_key_error_demotes_credential() {
        let mut state = ready_state("dragons");
        state.request = RequestState::Loading;

        reduce(
            &mut state,
            Action::Async(AsyncAction::StoryFinished(Box::new(Err(
                "API key not valid. Please pass a valid API key.".to_string(),
            )))),
        );

        assert!(!state.credential.is_selected);
        assert_eq!(
            state.request.error_message(),
            Some(CREDENTIAL_INVALID_MESSAGE)
        );
    }

    #[test]
    fn unknown_entity_error_demotes_credential() {
        let mut state = ready_state("dragons");
        state.request = RequestState::Loading;

        reduce(
            &mut state,
            Action::Async(AsyncAction::StoryFinished(Box::new(Err(
                "Requested entity was not found.".to_string(),
            )))),
        );

        assert!(!state.credential.is_selected);
    }

    #[test]
    fn generic_error_is_surfaced_verbatim_and_keeps_credential() {
        let mut state = ready_state("dragons");
        state.request = RequestState::Loading;

        reduce(
            &mut state,
            Action::Async(AsyncAction::StoryFinished(Box::new(Err(
                "network timeout".to_string(),
            )))),
        );

        assert!(state.credential.is_selected);
        assert_eq!(state.request.error_message(), Some("network timeout"));
    }

    #[test]
    fn classification_is_case_sensitive() {
        let mut state = ready_state("dragons");
        state.request = RequestState::Loading;

        reduce(
            &mut state,
            Action::Async(AsyncAction::StoryFinished(Box::new(Err(
                "api key not valid".to_string(),
            )))),
        );

        // Lowercase variant does not match the known phrases.
        assert!(state.credential.is_selected);
        assert_eq!(state.request.error_message(), Some("api key not valid"));
    }

    #[test]
    fn credential_checked_settles_selected_before_checking() {
        let mut state = AppState::default();
        assert!(state.credential.is_checking);

        reduce(&mut state, Action::Async(AsyncAction::CredentialChecked(true)));

        assert!(!state.credential.is_checking);
        assert!(state.credential.is_selected);
    }

    #[test]
    fn key_selection_success_is_optimistic() {
        let mut state = AppState {
            credential: CredentialStatus {
                is_checking: false,
                is_selected: false,
            },
            ..Default::default()
        };

        reduce(
            &mut state,
            Action::Async(AsyncAction::KeySelectionFinished(Ok(()))),
        );

        assert!(state.credential.is_selected);
    }

    #[test]
    fn key_selection_failure_leaves_state_unchanged() {
        let mut state = AppState {
            credential: CredentialStatus {
                is_checking: false,
                is_selected: false,
            },
            ..Default::default()
        };

        let commands = reduce(
            &mut state,
            Action::Async(AsyncAction::KeySelectionFinished(Err(
                "dialog unavailable".to_string(),
            ))),
        );

        assert!(commands.is_empty());
        assert!(!state.credential.is_selected);
    }

    #[test]
    fn reset_from_success_clears_topic_and_requests_render_effects() {
        let mut state = ready_state("dragons");
        state.request = RequestState::Success(story("T"));

        let commands = reduce(&mut state, Action::ResetSession);

        assert_eq!(state.request, RequestState::Idle);
        assert!(state.topic.is_empty());
        assert_eq!(commands, vec![Command::ScrollToTop, Command::FocusTopicInput]);
    }

    #[test]
    fn reset_is_a_no_op_outside_success() {
        for request in [
            RequestState::Idle,
            RequestState::Loading,
            RequestState::Error("boom".into()),
        ] {
            let mut state = ready_state("dragons");
            state.request = request.clone();

            let commands = reduce(&mut state, Action::ResetSession);

            assert!(commands.is_empty());
            assert_eq!(state.request, request);
            assert_eq!(state.topic, "dragons");
        }
    }

    #[test]
    fn reset_then_resubmit_behaves_like_first_submission() {
        let mut state = ready_state("dragons");

        let first = reduce(&mut state, Action::SubmitRequested);
        reduce(
            &mut state,
            Action::Async(AsyncAction::StoryFinished(Box::new(Ok(story("T"))))),
        );
        reduce(&mut state, Action::ResetSession);
        reduce(&mut state, Action::UpdateTopic("dragons".to_string()));
        let second = reduce(&mut state, Action::SubmitRequested);

        assert_eq!(first, second);
        assert_eq!(state.request, RequestState::Loading);
    }
}
