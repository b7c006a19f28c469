//! Serenity-backed implementation of [`GuildApi`].

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serenity::{
    all::{
        ChannelId, CreateAttachment, CreateMessage, EditMessage, GetMessages, GuildId, MessageId,
        RoleId, UserId,
    },
    async_trait,
    http::Http,
};

use super::{permission, GuildApi};
use crate::error::AppError;
use crate::model::discord::{ChatMessage, GuildChannelInfo, GuildMember, GuildRole};

/// Maximum number of messages Discord returns per history request.
pub(super) const MESSAGES_PER_REQUEST: usize = 100;

/// Audit log reason attached to voice role changes.
const VOICE_ROLE_AUDIT_REASON: &str = "Voice channel membership changed";

/// Discord REST access for a single guild.
///
/// Constructed fresh for every gateway event; it holds no state besides the
/// shared HTTP client and the IDs it is scoped to.
pub struct DiscordGuildRepository {
    http: Arc<Http>,
    guild_id: GuildId,
    bot_user_id: UserId,
}

impl DiscordGuildRepository {
    /// Creates a new repository bound to one guild.
    ///
    /// # Arguments
    /// - `http` - Shared serenity HTTP client
    /// - `guild_id` - Guild all operations are scoped to
    /// - `bot_user_id` - The bot's own user ID, used for authorship checks
    pub fn new(http: Arc<Http>, guild_id: GuildId, bot_user_id: UserId) -> Self {
        Self {
            http,
            guild_id,
            bot_user_id,
        }
    }
}

/// Returns true for HTTP 404 responses such as Unknown Message or Unknown Member.
fn is_not_found(err: &serenity::Error) -> bool {
    match err {
        serenity::Error::Http(http_err) => http_err
            .status_code()
            .is_some_and(|status| status.as_u16() == 404),
        _ => false,
    }
}

/// Collects up to `limit` of the most recent messages, newest first.
///
/// Discord caps a single request at 100 messages, so pages are requested
/// backwards from the oldest message seen so far until `limit` is reached or a
/// short page shows the channel is exhausted.
///
/// # Arguments
/// - `limit` - Maximum number of messages to collect
/// - `fetch_page` - Requests one page given its size and the `before` cursor
pub(super) async fn collect_history<F, Fut>(
    limit: usize,
    mut fetch_page: F,
) -> Result<Vec<ChatMessage>, AppError>
where
    F: FnMut(u8, Option<MessageId>) -> Fut,
    Fut: Future<Output = Result<Vec<ChatMessage>, AppError>>,
{
    let mut history: Vec<ChatMessage> = Vec::with_capacity(limit);

    while history.len() < limit {
        let batch_size = (limit - history.len()).min(MESSAGES_PER_REQUEST);
        let before = history.last().map(|oldest| oldest.id);

        let batch = fetch_page(batch_size as u8, before).await?;
        let exhausted = batch.len() < batch_size;

        history.extend(batch);

        if exhausted {
            break;
        }
    }

    Ok(history)
}

#[async_trait]
impl GuildApi for DiscordGuildRepository {
    fn bot_user_id(&self) -> UserId {
        self.bot_user_id
    }

    async fn roles(&self) -> Result<Vec<GuildRole>, AppError> {
        let roles = self.http.get_guild_roles(self.guild_id).await?;

        Ok(roles.iter().map(GuildRole::from).collect())
    }

    async fn channels(&self) -> Result<Vec<GuildChannelInfo>, AppError> {
        let channels = self.http.get_channels(self.guild_id).await?;

        Ok(channels.iter().map(GuildChannelInfo::from).collect())
    }

    async fn member(&self, user_id: UserId) -> Result<Option<GuildMember>, AppError> {
        match self.http.get_member(self.guild_id, user_id).await {
            Ok(member) => Ok(Some(GuildMember::from(&member))),
            Err(e) if is_not_found(&e) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn is_administrator(&self, user_id: UserId) -> Result<bool, AppError> {
        let Some(member) = self.member(user_id).await? else {
            return Ok(false);
        };

        let guild = self.http.get_guild(self.guild_id).await?;
        let roles: Vec<GuildRole> = guild.roles.values().map(GuildRole::from).collect();

        Ok(permission::is_administrator(
            self.guild_id,
            guild.owner_id,
            &member,
            &roles,
        ))
    }

    async fn add_member_role(&self, user_id: UserId, role_id: RoleId) -> Result<(), AppError> {
        self.http
            .add_member_role(
                self.guild_id,
                user_id,
                role_id,
                Some(VOICE_ROLE_AUDIT_REASON),
            )
            .await?;

        Ok(())
    }

    async fn remove_member_role(&self, user_id: UserId, role_id: RoleId) -> Result<(), AppError> {
        self.http
            .remove_member_role(
                self.guild_id,
                user_id,
                role_id,
                Some(VOICE_ROLE_AUDIT_REASON),
            )
            .await?;

        Ok(())
    }

    async fn send_message(
        &self,
        channel_id: ChannelId,
        content: &str,
    ) -> Result<ChatMessage, AppError> {
        let message = CreateMessage::new().content(content);
        let sent = channel_id.send_message(&self.http, message).await?;

        Ok(ChatMessage::from(&sent))
    }

    async fn edit_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        content: &str,
    ) -> Result<(), AppError> {
        let edit_message = EditMessage::new().content(content);

        self.http
            .edit_message(channel_id, message_id, &edit_message, vec![])
            .await?;

        Ok(())
    }

    async fn delete_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<(), AppError> {
        self.http
            .delete_message(channel_id, message_id, None)
            .await?;

        Ok(())
    }

    fn delete_message_after(&self, channel_id: ChannelId, message_id: MessageId, delay: Duration) {
        let http = self.http.clone();

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            if let Err(e) = http.delete_message(channel_id, message_id, None).await {
                tracing::warn!(
                    "Failed to delete transient message {} in channel {}: {}",
                    message_id,
                    channel_id,
                    e
                );
            }
        });
    }

    async fn message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<Option<ChatMessage>, AppError> {
        match self.http.get_message(channel_id, message_id).await {
            Ok(message) => Ok(Some(ChatMessage::from(&message))),
            Err(e) if is_not_found(&e) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn message_history(
        &self,
        channel_id: ChannelId,
        limit: usize,
    ) -> Result<Vec<ChatMessage>, AppError> {
        let http = &self.http;

        let history = collect_history(limit, |batch_size, before| {
            let mut request = GetMessages::new().limit(batch_size);
            if let Some(before) = before {
                request = request.before(before);
            }

            async move {
                let batch = channel_id.messages(http, request).await?;
                Ok::<_, AppError>(batch.iter().map(ChatMessage::from).collect())
            }
        })
        .await?;

        tracing::debug!(
            "Fetched {} messages of history from channel {}",
            history.len(),
            channel_id
        );

        Ok(history)
    }

    async fn send_file_reply(
        &self,
        channel_id: ChannelId,
        reply_to: MessageId,
        filename: &str,
        data: Vec<u8>,
    ) -> Result<ChatMessage, AppError> {
        let attachment = CreateAttachment::bytes(data, filename);
        let message = CreateMessage::new()
            .add_file(attachment)
            .reference_message((channel_id, reply_to));

        let sent = channel_id.send_message(&self.http, message).await?;

        Ok(ChatMessage::from(&sent))
    }
}
