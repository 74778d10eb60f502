use crate::domain::IllustratedStory;

/// User intents and async results feeding the reducer.
#[derive(Debug)]
pub enum Action {
    /// The topic field changed.
    UpdateTopic(String),
    /// The user asked for a story.
    SubmitRequested,
    /// The user asked the host to run its key-selection flow.
    SelectKeyRequested,
    /// "Create another story" from the success screen.
    ResetSession,
    Async(AsyncAction),
}

/// Results coming back from background tasks.
#[derive(Debug)]
pub enum AsyncAction {
    /// Settled startup credential check. Host failures arrive as `false`.
    CredentialChecked(bool),
    /// The host's select-key flow finished.
    KeySelectionFinished(Result<(), String>),
    /// The story-generation collaborator settled.
    StoryFinished(Box<Result<IllustratedStory, String>>),
}
