use serde::{Deserialize, Serialize};

/// Opaque structured output of the story-generation service.
///
/// The application carries this through to the presentation layer without
/// interpreting its shape; only the views look inside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IllustratedStory {
    pub title: String,
    pub pages: Vec<StoryPage>,
}

/// One narrative beat of a generated story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryPage {
    pub text: String,
    pub illustration: Option<Illustration>,
}

/// Image payload attached to a page, exactly as returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Illustration {
    pub mime_type: String,
    /// Base64-encoded image bytes.
    pub data: String,
}

impl IllustratedStory {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}
