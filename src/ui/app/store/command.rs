/// Side effects requested by the reducer and executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Query the host for an already-selected credential (startup only,
    /// after a short grace delay).
    CheckCredential,
    /// Open the host's interactive key-selection flow.
    OpenSelectKey,
    /// Call the story-generation service.
    GenerateStory { topic: String },
    /// Scroll the story viewport back to the top.
    ScrollToTop,
    /// Move focus back to the topic field.
    FocusTopicInput,
}
