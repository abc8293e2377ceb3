//! The composer reconstruction engine.
//!
//! Given a composer index and the shared store, expand every referenced
//! session into a fully populated conversation. Sessions are hydrated
//! independently and concurrently; a failure inside one session degrades
//! that session to placeholders and never affects the others.

use crate::keys::{message_body_key, session_body_key};
use chrono::Utc;
use futures_util::future::join_all;
use hindsight_store::{DISK_KV_TABLE, RecordStore, StoreError};
use hindsight_types::{
    ComposerIndex, ComposerMessage, ComposerSession, MessageContext, MessageHeader,
};
use std::collections::HashMap;

/// Outcome of the bulk message-body fetch for one session.
///
/// Explicit so the merge step handles "store unavailable" by exhaustive
/// match rather than by intercepting errors mid-merge.
enum BodyFetch {
    /// Bodies that could be fetched and parsed, keyed by bubble id.
    Fetched(HashMap<String, ComposerMessage>),
    /// The batched lookup itself failed; every header is treated as missing.
    Unavailable,
}

/// Expand each session referenced by the index into a fully populated
/// `ComposerSession`, in index order.
///
/// One batched lookup retrieves all session bodies; a payload that fails to
/// parse is logged and skipped without aborting the batch. Per-session
/// hydration then runs concurrently and is joined before returning.
pub async fn reconstruct(
    index: &ComposerIndex,
    store: &dyn RecordStore,
) -> Result<Vec<ComposerSession>, StoreError> {
    let keys: Vec<String> = index
        .all_composers
        .iter()
        .map(|entry| session_body_key(&entry.composer_id))
        .collect();
    let payloads = store.get_many(DISK_KV_TABLE, &keys).await?;

    // Fetch results come back in arbitrary store order; re-key by the id
    // embedded in each payload so output order can follow the index.
    let mut by_id: HashMap<String, ComposerSession> = HashMap::new();
    for payload in &payloads {
        match serde_json::from_str::<ComposerSession>(payload) {
            Ok(session) => {
                by_id.insert(session.composer_id.clone(), session);
            }
            Err(e) => {
                tracing::warn!("Skipping malformed composer session payload: {}", e);
            }
        }
    }

    let ordered = index
        .all_composers
        .iter()
        .filter_map(|entry| by_id.remove(&entry.composer_id));

    // join_all preserves input order regardless of I/O completion order.
    let hydrated = join_all(ordered.map(|session| hydrate_session(session, store))).await;
    Ok(hydrated)
}

/// Fill in a session's conversation. Infallible: every failure path degrades
/// to placeholder messages instead of surfacing an error.
async fn hydrate_session(mut session: ComposerSession, store: &dyn RecordStore) -> ComposerSession {
    // A non-empty materialized conversation is trusted as-is.
    if session
        .conversation
        .as_ref()
        .is_some_and(|conversation| !conversation.is_empty())
    {
        return session;
    }

    let headers = match &session.full_conversation_headers_only {
        Some(headers) if !headers.is_empty() => headers.clone(),
        _ => return session,
    };

    let keys: Vec<String> = headers
        .iter()
        .map(|header| message_body_key(&session.composer_id, &header.bubble_id))
        .collect();

    let fetch = fetch_bodies(store, &session.composer_id, &keys).await;
    session.conversation = Some(merge_bodies(&headers, fetch));
    session
}

/// Bulk-fetch message bodies for one session, parsing each independently.
async fn fetch_bodies(store: &dyn RecordStore, composer_id: &str, keys: &[String]) -> BodyFetch {
    let payloads = match store.get_many(DISK_KV_TABLE, keys).await {
        Ok(payloads) => payloads,
        Err(e) => {
            tracing::warn!(
                "Message body fetch failed for composer {}: {}",
                composer_id,
                e
            );
            return BodyFetch::Unavailable;
        }
    };

    let mut bodies = HashMap::new();
    for payload in &payloads {
        match serde_json::from_str::<ComposerMessage>(payload) {
            Ok(message) => {
                bodies.insert(message.bubble_id.clone(), message);
            }
            Err(e) => {
                tracing::warn!(
                    "Skipping malformed message body in composer {}: {}",
                    composer_id,
                    e
                );
            }
        }
    }
    BodyFetch::Fetched(bodies)
}

/// Produce the conversation by walking headers in order, substituting fetched
/// bodies where present and synthesizing placeholders where not.
///
/// The header's speaker is authoritative even when the fetched body disagrees.
fn merge_bodies(headers: &[MessageHeader], fetch: BodyFetch) -> Vec<ComposerMessage> {
    match fetch {
        BodyFetch::Fetched(mut bodies) => headers
            .iter()
            .map(|header| match bodies.remove(&header.bubble_id) {
                Some(mut body) => {
                    body.speaker = header.speaker;
                    body
                }
                None => placeholder_message(header),
            })
            .collect(),
        BodyFetch::Unavailable => headers.iter().map(placeholder_message).collect(),
    }
}

/// Synthesize a stand-in for a message whose body could not be retrieved,
/// so downstream rendering shows a marked gap instead of failing.
fn placeholder_message(header: &MessageHeader) -> ComposerMessage {
    ComposerMessage {
        bubble_id: header.bubble_id.clone(),
        speaker: header.speaker,
        text: format!("[message body {} could not be loaded]", header.bubble_id),
        rich_text: String::new(),
        context: MessageContext::default(),
        timestamp: Some(Utc::now().timestamp_millis()),
    }
}
