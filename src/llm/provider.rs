//! LLM chat targets — where "Open in …" rows send the reader.
//!
//! Each target turns the canonical page URL into a chat URL that asks the
//! model to read the page. Target ids in config are matched exactly.

/// A chat service a row can open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmTarget {
    ChatGpt,
    Claude,
    Perplexity,
}

/// Config ids, matched exactly.
const TARGETS: [(&str, LlmTarget); 3] = [
    ("chatgpt", LlmTarget::ChatGpt),
    ("claude", LlmTarget::Claude),
    ("perplexity", LlmTarget::Perplexity),
];

impl LlmTarget {
    /// Resolve a config id. Unknown ids yield `None`; callers treat that as a no-op.
    pub fn from_id(id: &str) -> Option<Self> {
        TARGETS
            .iter()
            .find(|(known, _)| *known == id)
            .map(|(_, target)| *target)
    }

    pub fn id(self) -> &'static str {
        TARGETS
            .iter()
            .find(|(_, target)| *target == self)
            .map_or("", |(id, _)| id)
    }

    /// Build the chat URL for a page. `page_url` is percent-encoded here.
    pub fn chat_url(self, page_url: &str) -> String {
        let encoded = urlencoding::encode(page_url);
        match self {
            LlmTarget::ChatGpt => format!(
                "https://chatgpt.com/?hints=search&prompt=Read+from+{}+so+I+can+ask+questions+about+it.",
                encoded
            ),
            LlmTarget::Claude => format!(
                "https://claude.ai/new?q=Read%20from%20{}%20so%20I%20can%20ask%20questions%20about%20it.",
                encoded
            ),
            LlmTarget::Perplexity => format!(
                "https://www.perplexity.ai/search/new?q=Read%20from%20{}%20so%20I%20can+ask+questions+about+it.",
                encoded
            ),
        }
    }
}
