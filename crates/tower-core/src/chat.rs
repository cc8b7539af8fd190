//! Chat transcript and relay payloads.

use serde::{Deserialize, Serialize};

/// Shown when the relay answers without any usable text.
pub const FALLBACK_REPLY: &str = "Sorry, I could not process your request.";
/// Appended to the transcript when the relay call fails.
pub const ERROR_REPLY: &str =
    "Sorry, there was an error processing your message. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    User,
    Agent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u64,
    pub text: String,
    pub author: Author,
}

/// Request body sent to the relay.
#[derive(Debug, Clone, Serialize)]
pub struct RelayRequest {
    pub message: String,
}

/// Relay response. Different relay versions use different field names.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RelayReply {
    pub reply: Option<String>,
    pub message: Option<String>,
    pub response: Option<String>,
}

impl RelayReply {
    /// First non-empty of `reply`, `message`, `response`.
    pub fn text(&self) -> &str {
        [&self.reply, &self.message, &self.response]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|text| !text.is_empty())
            .unwrap_or(FALLBACK_REPLY)
    }
}

/// Ordered conversation shown in the chat widget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl ChatTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Appends the user's message. Blank input is ignored.
    ///
    /// Returns the request to send to the relay.
    pub fn push_user(&mut self, text: &str) -> Option<RelayRequest> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.push(text.to_string(), Author::User);
        Some(RelayRequest {
            message: text.to_string(),
        })
    }

    pub fn push_reply(&mut self, reply: &RelayReply) {
        self.push(reply.text().to_string(), Author::Agent);
    }

    pub fn push_error(&mut self) {
        self.push(ERROR_REPLY.to_string(), Author::Agent);
    }

    fn push(&mut self, text: String, author: Author) {
        self.messages.push(ChatMessage {
            id: self.next_id,
            text,
            author,
        });
        self.next_id += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_field_priority() {
        let reply: RelayReply =
            serde_json::from_str(r#"{"message": "second", "reply": "first"}"#).unwrap();
        assert_eq!(reply.text(), "first");

        let reply: RelayReply = serde_json::from_str(r#"{"response": "third"}"#).unwrap();
        assert_eq!(reply.text(), "third");

        let reply: RelayReply = serde_json::from_str(r#"{"reply": "", "message": "m"}"#).unwrap();
        assert_eq!(reply.text(), "m");

        let reply: RelayReply = serde_json::from_str("{}").unwrap();
        assert_eq!(reply.text(), FALLBACK_REPLY);
    }

    #[test]
    fn test_blank_input_ignored() {
        let mut transcript = ChatTranscript::new();
        assert!(transcript.push_user("   ").is_none());
        assert!(transcript.messages().is_empty());
    }

    #[test]
    fn test_conversation_order_and_ids() {
        let mut transcript = ChatTranscript::new();
        let request = transcript.push_user("  hello ").unwrap();
        assert_eq!(request.message, "hello");
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"message":"hello"}"#
        );

        transcript.push_error();

        let messages = transcript.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].author, Author::User);
        assert_eq!(messages[0].text, "hello");
        assert_eq!(messages[1].author, Author::Agent);
        assert_eq!(messages[1].text, ERROR_REPLY);
        assert!(messages[0].id < messages[1].id);
    }
}
