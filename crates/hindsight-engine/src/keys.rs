//! Well-known store keys and composite key derivation.

/// Workspace-store key holding the chat-panel data.
pub const CHAT_DATA_KEY: &str = "workbench.panel.aichat.view.aichat.chatdata";

/// Workspace-store key holding the composer index.
pub const COMPOSER_INDEX_KEY: &str = "composer.composerData";

const SESSION_BODY_PREFIX: &str = "composerData";
const MESSAGE_BODY_PREFIX: &str = "bubbleId";

/// Shared-store key of a composer session body.
pub fn session_body_key(composer_id: &str) -> String {
    format!("{SESSION_BODY_PREFIX}:{composer_id}")
}

/// Shared-store key of a message body.
///
/// The key must be qualified by the owning composer id: bubble ids are only
/// unique within a session, and an unqualified key can collide across
/// sessions.
pub fn message_body_key(composer_id: &str, bubble_id: &str) -> String {
    format!("{MESSAGE_BODY_PREFIX}:{composer_id}:{bubble_id}")
}
