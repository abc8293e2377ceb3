//! Normalized, display-ready output shapes.

use crate::record::{CodeSelection, ComposerSession};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The full extraction result for one workspace.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceData {
    pub tabs: Vec<ChatTab>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composers: Option<ComposerCollection>,
}

/// Reconstructed composer sessions, keyed shape matching the stored index.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposerCollection {
    pub all_composers: Vec<ComposerSession>,
}

/// A normalized conversation unit ready for rendering or export.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatTab {
    pub id: String,
    pub title: String,
    pub timestamp: DateTime<Utc>,
    pub messages: Vec<Bubble>,
}

impl ChatTab {
    /// Title used when a tab or session has no stored name.
    pub fn fallback_title(id: &str) -> String {
        format!("Chat {}", id_prefix(id))
    }
}

/// A single turn in a normalized conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bubble {
    pub speaker_role: SpeakerRole,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_label: Option<String>,
    #[serde(default)]
    pub selections: Vec<CodeSelection>,
}

/// Display-facing role of a bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeakerRole {
    User,
    Assistant,
}

/// First 8 characters of an id, safe for ids shorter than that.
fn id_prefix(id: &str) -> &str {
    let end = id
        .char_indices()
        .nth(8)
        .map(|(i, _)| i)
        .unwrap_or(id.len());
    &id[..end]
}
