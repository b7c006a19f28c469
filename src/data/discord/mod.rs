//! Guild-scoped Discord operations.
//!
//! A `GuildApi` instance is bound to one guild and lives for the handling of a
//! single gateway event. Nothing is cached between events: role and channel
//! listings are requested again every time they are needed.

pub mod guild;
pub mod permission;

#[cfg(test)]
mod test;

use std::time::Duration;

use serenity::all::{ChannelId, MessageId, RoleId, UserId};
use serenity::async_trait;

use crate::error::AppError;
use crate::model::discord::{ChatMessage, GuildChannelInfo, GuildMember, GuildRole};

pub use guild::DiscordGuildRepository;

/// Discord operations available to behaviors, scoped to a single guild.
///
/// Lookups that can legitimately miss (a member who left, a deleted message)
/// return `Ok(None)`; every other platform failure is returned as an error.
#[async_trait]
pub trait GuildApi: Send + Sync {
    /// The bot's own user ID.
    fn bot_user_id(&self) -> UserId;

    /// All roles in the guild, in platform listing order.
    async fn roles(&self) -> Result<Vec<GuildRole>, AppError>;

    /// All channels in the guild, in platform listing order.
    async fn channels(&self) -> Result<Vec<GuildChannelInfo>, AppError>;

    /// Fetches the authoritative member state from the API.
    async fn member(&self, user_id: UserId) -> Result<Option<GuildMember>, AppError>;

    /// Whether the user holds administrator rights in the guild.
    async fn is_administrator(&self, user_id: UserId) -> Result<bool, AppError>;

    async fn add_member_role(&self, user_id: UserId, role_id: RoleId) -> Result<(), AppError>;

    async fn remove_member_role(&self, user_id: UserId, role_id: RoleId) -> Result<(), AppError>;

    /// Sends a plain text message and returns the created message.
    async fn send_message(
        &self,
        channel_id: ChannelId,
        content: &str,
    ) -> Result<ChatMessage, AppError>;

    /// Replaces the content of a message authored by the bot.
    async fn edit_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        content: &str,
    ) -> Result<(), AppError>;

    async fn delete_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<(), AppError>;

    /// Schedules deletion of a message after `delay` without waiting for it.
    fn delete_message_after(&self, channel_id: ChannelId, message_id: MessageId, delay: Duration);

    /// Fetches a single message, `None` if it does not exist.
    async fn message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<Option<ChatMessage>, AppError>;

    /// Fetches up to `limit` of the most recent messages, newest first.
    async fn message_history(
        &self,
        channel_id: ChannelId,
        limit: usize,
    ) -> Result<Vec<ChatMessage>, AppError>;

    /// Replies to a message with a single file attachment.
    async fn send_file_reply(
        &self,
        channel_id: ChannelId,
        reply_to: MessageId,
        filename: &str,
        data: Vec<u8>,
    ) -> Result<ChatMessage, AppError>;
}
