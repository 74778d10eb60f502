use crate::domain::IllustratedStory;

/// Outcome of the startup credential check.
///
/// While `is_checking` is true, `is_selected` is not yet authoritative and
/// must not gate screen selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialStatus {
    pub is_checking: bool,
    pub is_selected: bool,
}

impl Default for CredentialStatus {
    fn default() -> Self {
        Self {
            is_checking: true,
            is_selected: false,
        }
    }
}

/// Lifecycle of the single story request.
///
/// Exactly one variant holds at any time, so a loading request can never be
/// observed together with a settled result.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Error(String),
    Success(IllustratedStory),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            RequestState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// All app state in one struct.
#[derive(Debug, Default)]
pub struct AppState {
    pub credential: CredentialStatus,
    pub topic: String,
    pub request: RequestState,
}

/// Which screen is active.
#[derive(Debug, PartialEq)]
pub enum Screen<'a> {
    Checking,
    SelectKey { error: Option<&'a str> },
    Main(MainContent<'a>),
}

#[derive(Debug, PartialEq)]
pub enum MainContent<'a> {
    Idle,
    Loading,
    Error(&'a str),
    Story(&'a IllustratedStory),
}

/// Deterministically selects exactly one of the four screens from the
/// credential status and the request lifecycle.
pub fn select_screen<'a>(
    credential: &CredentialStatus,
    request: &'a RequestState,
) -> Screen<'a> {
    if credential.is_checking {
        return Screen::Checking;
    }
    if !credential.is_selected {
        // A request error can land here when generation invalidated the
        // credential; it is shown on the selection screen.
        return Screen::SelectKey {
            error: request.error_message(),
        };
    }
    Screen::Main(match request {
        RequestState::Idle => MainContent::Idle,
        RequestState::Loading => MainContent::Loading,
        RequestState::Error(message) => MainContent::Error(message),
        RequestState::Success(story) => MainContent::Story(story),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story() -> IllustratedStory {
        IllustratedStory {
            title: "T".into(),
            pages: vec![],
        }
    }

    #[test]
    fn checking_wins_regardless_of_other_state() {
        let credential = CredentialStatus {
            is_checking: true,
            is_selected: true,
        };
        let request = RequestState::Success(story());
        assert_eq!(select_screen(&credential, &request), Screen::Checking);
    }

    #[test]
    fn unselected_shows_select_key() {
        let credential = CredentialStatus {
            is_checking: false,
            is_selected: false,
        };
        assert_eq!(
            select_screen(&credential, &RequestState::Idle),
            Screen::SelectKey { error: None }
        );
    }

    #[test]
    fn unselected_with_error_carries_message_to_select_key() {
        let credential = CredentialStatus {
            is_checking: false,
            is_selected: false,
        };
        let request = RequestState::Error("key revoked".into());
        assert_eq!(
            select_screen(&credential, &request),
            Screen::SelectKey {
                error: Some("key revoked")
            }
        );
    }

    #[test]
    fn main_screen_branches_are_exhaustive() {
        let credential = CredentialStatus {
            is_checking: false,
            is_selected: true,
        };

        assert_eq!(
            select_screen(&credential, &RequestState::Idle),
            Screen::Main(MainContent::Idle)
        );
        assert_eq!(
            select_screen(&credential, &RequestState::Loading),
            Screen::Main(MainContent::Loading)
        );
        assert_eq!(
            select_screen(&credential, &RequestState::Error("boom".into())),
            Screen::Main(MainContent::Error("boom"))
        );
        let success = RequestState::Success(story());
        assert!(matches!(
            select_screen(&credential, &success),
            Screen::Main(MainContent::Story(_))
        ));
    }
}
