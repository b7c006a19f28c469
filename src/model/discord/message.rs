//! Discord message domain model.

use serenity::all::{ChannelId, Message, MessageId, UserId};

/// Message with the fields the command and stats behaviors inspect.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    /// Discord message ID.
    pub id: MessageId,
    /// Channel the message was posted in.
    pub channel_id: ChannelId,
    /// Author of the message.
    pub author_id: UserId,
    /// Raw message content, including markdown and mention markup.
    pub content: String,
    /// Message this one replies to, if any. Replies always live in the same channel.
    pub reference: Option<MessageId>,
    /// Users mentioned by the message.
    pub mentions: Vec<UserId>,
}

impl ChatMessage {
    /// Returns true if the message mentions the given user.
    ///
    /// Falls back to scanning the content for mention markup, since an edited
    /// message's mention list is only refreshed by the platform after the edit.
    pub fn mentions_user(&self, user_id: UserId) -> bool {
        self.mentions.contains(&user_id)
            || self.content.contains(&format!("<@{}>", user_id))
            || self.content.contains(&format!("<@!{}>", user_id))
    }
}

impl From<&Message> for ChatMessage {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id,
            channel_id: message.channel_id,
            author_id: message.author.id,
            content: message.content.clone(),
            reference: message
                .message_reference
                .as_ref()
                .and_then(|reference| reference.message_id),
            mentions: message.mentions.iter().map(|user| user.id).collect(),
        }
    }
}
