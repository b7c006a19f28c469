//! Test factory for creating Serenity Message objects.

use serenity::all::Message;

use super::user_json;

/// Creates a test Serenity Message.
///
/// # Arguments
/// - `message_id` - Discord message ID (snowflake)
/// - `channel_id` - Channel the message was posted in
/// - `author_id` - Author's user ID
/// - `content` - Raw message content
/// - `reply_to` - ID of the message this one replies to, if any
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::message::create_test_message;
///
/// let original = create_test_message(100, 5, 42, "-static hello", None);
/// let reply = create_test_message(101, 5, 42, "-export", Some(100));
/// ```
pub fn create_test_message(
    message_id: u64,
    channel_id: u64,
    author_id: u64,
    content: &str,
    reply_to: Option<u64>,
) -> Message {
    let reference = reply_to.map(|id| {
        serde_json::json!({
            "message_id": id.to_string(),
            "channel_id": channel_id.to_string(),
        })
    });

    serde_json::from_value(serde_json::json!({
        "id": message_id.to_string(),
        "channel_id": channel_id.to_string(),
        "author": user_json(author_id, "author", false),
        "content": content,
        "timestamp": "2024-01-15T12:00:00.000000+00:00",
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "mention_roles": [],
        "attachments": [],
        "embeds": [],
        "pinned": false,
        "type": if reply_to.is_some() { 19 } else { 0 },
        "flags": 0,
        "message_reference": reference,
        "components": [],
    }))
    .expect("Failed to create test message - invalid JSON structure")
}

/// Creates a test Serenity Message that mentions the given users.
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
pub fn create_test_message_with_mentions(
    message_id: u64,
    channel_id: u64,
    author_id: u64,
    content: &str,
    mentioned_user_ids: &[u64],
) -> Message {
    let mut message = create_test_message(message_id, channel_id, author_id, content, None);
    message.mentions = mentioned_user_ids
        .iter()
        .map(|id| {
            serde_json::from_value(user_json(*id, "mentioned", false))
                .expect("Failed to create test user - invalid JSON structure")
        })
        .collect();
    message
}
