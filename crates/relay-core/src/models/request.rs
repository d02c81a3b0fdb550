use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::chat::ChatTurn;
use crate::error::CoreError;

/// A chat request as sent by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct IncomingRequest {
    pub message: String,
    #[serde(default)]
    pub conversation_history: Vec<ChatTurn>,
}

/// Wire shape before the required field is checked, so a missing `message`
/// can be told apart from a body that is not JSON at all.
///
/// An absent `conversationHistory` defaults to empty; an explicit `null` is
/// not a sequence and fails to decode.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRequest {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    conversation_history: Vec<ChatTurn>,
}

impl IncomingRequest {
    /// Decode a request body. An empty (or whitespace-only) body is read as
    /// `{}`, which then fails on the missing `message`.
    pub fn from_body(body: &[u8]) -> Result<Self, CoreError> {
        let body = if body.iter().all(u8::is_ascii_whitespace) {
            b"{}".as_slice()
        } else {
            body
        };

        let raw: RawRequest = serde_json::from_slice(body)?;
        let message = raw.message.ok_or(CoreError::MissingMessage)?;

        Ok(Self {
            message,
            conversation_history: raw.conversation_history,
        })
    }

    /// The caller's history followed by the new user turn.
    ///
    /// This is the conversation returned to the caller; the payload sent
    /// downstream carries the caller's history untouched.
    pub fn working_history(&self) -> Vec<ChatTurn> {
        let mut turns = Vec::with_capacity(self.conversation_history.len() + 2);
        turns.extend(self.conversation_history.iter().cloned());
        turns.push(ChatTurn::user(self.message.clone()));
        turns
    }

    /// Build the payload for the inference endpoint.
    pub fn outbound(&self) -> OutboundPayload<'_> {
        OutboundPayload {
            message: &self.message,
            conversation_history: &self.conversation_history,
        }
    }
}

/// Body of the POST to the inference endpoint.
///
/// `conversation_history` is the history the caller sent, without the
/// current message; the endpoint receives the message separately.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundPayload<'a> {
    pub message: &'a str,
    pub conversation_history: &'a [ChatTurn],
}
