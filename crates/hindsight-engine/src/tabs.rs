//! Presentation adapter: map raw and reconstructed records into the
//! normalized `ChatTab` shape.

use hindsight_types::{
    Bubble, ChatTab, ComposerSession, RawChatTab, Speaker, SpeakerRole, normalize_timestamp,
};

/// Model label attached to composer turns; the stores do not record which
/// model produced them.
const COMPOSER_MODEL_LABEL: &str = "Claude";

/// Normalize a raw chat tab: first line of the stored title (falling back to
/// a truncated id), a always-valid timestamp, and typed bubbles.
pub fn chat_tab(raw: RawChatTab) -> ChatTab {
    let title = raw
        .chat_title
        .as_deref()
        .and_then(|t| t.lines().next())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| ChatTab::fallback_title(&raw.tab_id));

    let messages = raw
        .bubbles
        .into_iter()
        .map(|bubble| Bubble {
            speaker_role: if bubble.kind == "user" {
                SpeakerRole::User
            } else {
                SpeakerRole::Assistant
            },
            text: bubble.text.unwrap_or_default(),
            model_label: bubble.model_type,
            selections: bubble.selections,
        })
        .collect();

    ChatTab {
        id: raw.tab_id,
        title,
        timestamp: normalize_timestamp(raw.last_send_time),
        messages,
    }
}

/// Map a reconstructed composer session into the generic tab shape used for
/// rendering and export.
pub fn session_to_tab(session: &ComposerSession) -> ChatTab {
    let messages = session
        .conversation
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|message| Bubble {
            speaker_role: match message.speaker {
                Speaker::User => SpeakerRole::User,
                Speaker::Assistant => SpeakerRole::Assistant,
            },
            text: message.text.clone(),
            model_label: Some(COMPOSER_MODEL_LABEL.to_string()),
            selections: message.context.selections.clone(),
        })
        .collect();

    ChatTab {
        id: session.composer_id.clone(),
        title: session
            .name
            .clone()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| ChatTab::fallback_title(&session.composer_id)),
        timestamp: normalize_timestamp(session.created_at),
        messages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_tab(json: serde_json::Value) -> RawChatTab {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn chat_tab_uses_first_line_of_title() {
        let tab = chat_tab(raw_tab(serde_json::json!({
            "tabId": "t-1",
            "chatTitle": "Fix the build\nand other stuff",
            "lastSendTime": 1_716_200_000_000_i64
        })));
        assert_eq!(tab.title, "Fix the build");
        assert_eq!(tab.timestamp.to_rfc3339(), "2024-05-20T10:13:20+00:00");
    }

    #[test]
    fn chat_tab_falls_back_to_id_title() {
        let tab = chat_tab(raw_tab(serde_json::json!({
            "tabId": "0123456789abcdef"
        })));
        assert_eq!(tab.title, "Chat 01234567");
    }

    #[test]
    fn empty_title_falls_back_too() {
        let tab = chat_tab(raw_tab(serde_json::json!({
            "tabId": "t-2",
            "chatTitle": ""
        })));
        assert_eq!(tab.title, "Chat t-2");
    }

    #[test]
    fn chat_bubbles_map_speaker_tags() {
        let tab = chat_tab(raw_tab(serde_json::json!({
            "tabId": "t-1",
            "bubbles": [
                {"type": "user", "text": "q", "selections": [{"text": "let x;"}]},
                {"type": "ai", "text": "a", "modelType": "claude"}
            ]
        })));
        assert_eq!(tab.messages[0].speaker_role, SpeakerRole::User);
        assert_eq!(tab.messages[0].selections[0].text, "let x;");
        assert_eq!(tab.messages[1].speaker_role, SpeakerRole::Assistant);
        assert_eq!(tab.messages[1].model_label.as_deref(), Some("claude"));
    }

    #[test]
    fn session_maps_to_tab() {
        let session: ComposerSession = serde_json::from_value(serde_json::json!({
            "composerId": "c-1",
            "name": "Rework the locator",
            "createdAt": 1_716_200_000_000_i64,
            "conversation": [
                {"bubbleId": "b-1", "type": 1, "text": "please",
                 "context": {"selections": [{"text": "fn f() {}"}]}},
                {"bubbleId": "b-2", "type": 2, "text": "done"}
            ]
        }))
        .unwrap();
        let tab = session_to_tab(&session);
        assert_eq!(tab.id, "c-1");
        assert_eq!(tab.title, "Rework the locator");
        assert_eq!(tab.messages.len(), 2);
        assert_eq!(tab.messages[0].speaker_role, SpeakerRole::User);
        assert_eq!(tab.messages[0].selections.len(), 1);
        assert_eq!(tab.messages[1].speaker_role, SpeakerRole::Assistant);
    }

    #[test]
    fn unnamed_session_gets_fallback_title() {
        let session: ComposerSession =
            serde_json::from_value(serde_json::json!({"composerId": "fedcba9876543210"}))
                .unwrap();
        let tab = session_to_tab(&session);
        assert_eq!(tab.title, "Chat fedcba98");
        assert!(tab.messages.is_empty());
    }
}
