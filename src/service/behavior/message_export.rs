//! Message export behavior.
//!
//! Discord renders markdown, so copying a message from the client loses its
//! source text. An administrator replying `-export` to a message gets the raw
//! content back as a `raw_message.txt` attachment.

use std::time::Duration;

use serenity::async_trait;

use super::{Behavior, MessageHandler};
use crate::data::discord::GuildApi;
use crate::error::AppError;
use crate::model::discord::ChatMessage;

const EXPORT_COMMAND: &str = "-export";
pub const EXPORT_FILENAME: &str = "raw_message.txt";
pub const NOT_FOUND_NOTICE: &str = "Could not find the message to export.";
/// How long the not-found notice stays in the channel.
pub const NOTICE_LIFETIME: Duration = Duration::from_secs(5);

pub struct BehaviorMessageExport<'a> {
    guild: &'a dyn GuildApi,
}

impl<'a> BehaviorMessageExport<'a> {
    pub fn new(guild: &'a dyn GuildApi) -> Self {
        Self { guild }
    }
}

impl Behavior for BehaviorMessageExport<'_> {
    fn name(&self) -> &'static str {
        "message_export"
    }

    fn message(&self) -> Option<&dyn MessageHandler> {
        Some(self)
    }
}

#[async_trait]
impl<'a> MessageHandler for BehaviorMessageExport<'a> {
    async fn on_message(&self, message: &ChatMessage) -> Result<(), AppError> {
        if message.author_id == self.guild.bot_user_id() || message.content != EXPORT_COMMAND {
            return Ok(());
        }

        let Some(target_id) = message.reference else {
            return Ok(());
        };

        if !self.guild.is_administrator(message.author_id).await? {
            tracing::debug!(
                "Ignoring -export from non-administrator {}",
                message.author_id
            );
            return Ok(());
        }

        match self.guild.message(message.channel_id, target_id).await? {
            Some(target) => {
                self.guild
                    .send_file_reply(
                        message.channel_id,
                        target.id,
                        EXPORT_FILENAME,
                        target.content.into_bytes(),
                    )
                    .await?;

                tracing::info!(
                    "Exported raw content of message {} in channel {}",
                    target_id,
                    message.channel_id
                );
            }
            None => {
                let notice = self
                    .guild
                    .send_message(message.channel_id, NOT_FOUND_NOTICE)
                    .await?;
                self.guild
                    .delete_message_after(message.channel_id, notice.id, NOTICE_LIFETIME);
            }
        }

        self.guild
            .delete_message(message.channel_id, message.id)
            .await
    }
}
