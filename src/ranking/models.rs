use serde::{Deserialize, Serialize};

/// What the ranking boundary needs: the fixed instruction, the per-listing
/// content and a response-length cap.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingRequest {
    pub system: String,
    pub user: String,
    pub max_tokens: u32,
}

// chat/completions request
//  ├── model
//  ├── messages[] { role, content }
//  └── max_tokens

#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub max_tokens: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

// chat/completions response
//  └── choices[]
//       └── message
//            └── content

#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Choice {
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChoiceMessage {
    pub content: Option<String>,
}

impl ChatResponse {
    /// First choice's text, if it is there and not blank.
    pub fn first_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .filter(|c| !c.trim().is_empty())
    }
}
