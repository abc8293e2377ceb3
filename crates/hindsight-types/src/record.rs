//! Wire-facing record types for the editor's persisted state stores.
//!
//! Every payload in the stores is a JSON blob with camelCase field names.
//! These types are the validation boundary: raw values are parsed into them
//! once, and all downstream code works with the typed form. Fields the
//! editor writes but Hindsight never reads are deliberately not modeled.

use serde::{Deserialize, Serialize};

/// Who produced a composer message, persisted as an integer code.
///
/// The stores write `1` for the user and `2` for the assistant. Decoding is
/// lenient: any other code degrades to `Assistant` rather than failing the
/// record, matching how the editor's own renderer branches on the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum Speaker {
    User,
    Assistant,
}

impl From<u8> for Speaker {
    fn from(code: u8) -> Self {
        if code == 1 {
            Speaker::User
        } else {
            Speaker::Assistant
        }
    }
}

impl From<Speaker> for u8 {
    fn from(speaker: Speaker) -> u8 {
        match speaker {
            Speaker::User => 1,
            Speaker::Assistant => 2,
        }
    }
}

/// The chat-panel record stored in a workspace store.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatData {
    #[serde(default)]
    pub tabs: Vec<RawChatTab>,
}

/// One chat tab as the editor persists it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawChatTab {
    pub tab_id: String,
    #[serde(default)]
    pub chat_title: Option<String>,
    #[serde(default)]
    pub last_send_time: Option<i64>,
    #[serde(default)]
    pub bubbles: Vec<RawBubble>,
}

/// One chat bubble as the editor persists it. The speaker is stored as a
/// string tag (`"user"` / `"ai"`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBubble {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub model_type: Option<String>,
    #[serde(default)]
    pub selections: Vec<CodeSelection>,
}

/// The composer index stored in a workspace store: references to sessions
/// whose bodies live in the shared store.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposerIndex {
    #[serde(default)]
    pub all_composers: Vec<ComposerIndexEntry>,
}

/// A single index entry. Only the id matters; it is unique within an index.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposerIndexEntry {
    pub composer_id: String,
}

/// A composer session body from the shared store.
///
/// Exactly one of `conversation` / `full_conversation_headers_only` is
/// authoritative: a non-empty `conversation` is trusted as-is, otherwise a
/// non-empty header list drives reconstruction. A session with neither is
/// passed through unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposerSession {
    pub composer_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation: Option<Vec<ComposerMessage>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_conversation_headers_only: Option<Vec<MessageHeader>>,
}

/// A lightweight message header. The header list's order is the canonical
/// conversation order and must survive reconstruction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageHeader {
    pub bubble_id: String,
    #[serde(rename = "type")]
    pub speaker: Speaker,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_bubble_id: Option<String>,
}

/// A full composer message, either read from the shared store or synthesized
/// as a placeholder when the real body cannot be retrieved.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposerMessage {
    pub bubble_id: String,
    #[serde(rename = "type")]
    pub speaker: Speaker,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub rich_text: String,
    #[serde(default)]
    pub context: MessageContext,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

/// Context attached to a composer message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageContext {
    #[serde(default)]
    pub selections: Vec<CodeSelection>,
}

/// A code/text excerpt attached to a user turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeSelection {
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speaker_decodes_known_codes() {
        assert_eq!(Speaker::from(1), Speaker::User);
        assert_eq!(Speaker::from(2), Speaker::Assistant);
    }

    #[test]
    fn speaker_degrades_unknown_codes_to_assistant() {
        assert_eq!(Speaker::from(0), Speaker::Assistant);
        assert_eq!(Speaker::from(7), Speaker::Assistant);
    }

    #[test]
    fn speaker_roundtrips_through_json() {
        let json = serde_json::to_string(&Speaker::User).unwrap();
        assert_eq!(json, "1");
        let back: Speaker = serde_json::from_str("2").unwrap();
        assert_eq!(back, Speaker::Assistant);
    }

    #[test]
    fn session_with_headers_parses() {
        let raw = r#"{
            "composerId": "c-1",
            "name": "Refactor the parser",
            "createdAt": 1716200000000,
            "fullConversationHeadersOnly": [
                {"bubbleId": "b-1", "type": 1},
                {"bubbleId": "b-2", "type": 2, "serverBubbleId": "srv-9"}
            ]
        }"#;
        let session: ComposerSession = serde_json::from_str(raw).unwrap();
        assert_eq!(session.composer_id, "c-1");
        assert!(session.conversation.is_none());
        let headers = session.full_conversation_headers_only.unwrap();
        assert_eq!(headers.len(), 2);
        assert_eq!(headers[0].speaker, Speaker::User);
        assert_eq!(headers[1].server_bubble_id.as_deref(), Some("srv-9"));
    }

    #[test]
    fn session_with_materialized_conversation_parses() {
        let raw = r#"{
            "composerId": "c-2",
            "conversation": [
                {"bubbleId": "m-1", "type": 1, "text": "hi",
                 "context": {"selections": [{"text": "fn main() {}"}]}}
            ]
        }"#;
        let session: ComposerSession = serde_json::from_str(raw).unwrap();
        let conversation = session.conversation.unwrap();
        assert_eq!(conversation[0].text, "hi");
        assert_eq!(conversation[0].context.selections[0].text, "fn main() {}");
    }

    #[test]
    fn message_tolerates_missing_optional_fields() {
        let raw = r#"{"bubbleId": "m-1", "type": 2}"#;
        let message: ComposerMessage = serde_json::from_str(raw).unwrap();
        assert_eq!(message.text, "");
        assert_eq!(message.rich_text, "");
        assert!(message.context.selections.is_empty());
        assert!(message.timestamp.is_none());
    }

    #[test]
    fn chat_data_parses_editor_shape() {
        let raw = r#"{
            "tabs": [{
                "tabId": "tab-1",
                "chatTitle": "Fix the build\nextra detail",
                "lastSendTime": 1716200000000,
                "bubbles": [
                    {"type": "user", "text": "why does it fail?",
                     "selections": [{"text": "let x = 1;"}]},
                    {"type": "ai", "text": "Because...", "modelType": "claude"}
                ]
            }]
        }"#;
        let data: ChatData = serde_json::from_str(raw).unwrap();
        assert_eq!(data.tabs.len(), 1);
        assert_eq!(data.tabs[0].bubbles[0].kind, "user");
        assert_eq!(data.tabs[0].bubbles[1].model_type.as_deref(), Some("claude"));
    }

    #[test]
    fn composer_index_ignores_extra_fields() {
        let raw = r#"{"allComposers": [{"composerId": "c-1", "unifiedMode": "agent"}]}"#;
        let index: ComposerIndex = serde_json::from_str(raw).unwrap();
        assert_eq!(index.all_composers[0].composer_id, "c-1");
    }
}
