use serde::Deserialize;

/// Reply from the inference endpoint.
///
/// Endpoints answer with either `response` or `answer`; both are accepted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InferenceReply {
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
}

/// Which reply field carried the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplySource {
    Response,
    Answer,
}

impl ReplySource {
    pub fn as_str(self) -> &'static str {
        match self {
            ReplySource::Response => "response",
            ReplySource::Answer => "answer",
        }
    }
}

impl InferenceReply {
    /// The first non-empty of `response` and `answer`.
    pub fn into_text(self) -> Option<(String, ReplySource)> {
        let response = self
            .response
            .filter(|s| !s.is_empty())
            .map(|s| (s, ReplySource::Response));

        response.or_else(|| {
            self.answer
                .filter(|s| !s.is_empty())
                .map(|s| (s, ReplySource::Answer))
        })
    }
}
