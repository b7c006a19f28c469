//! Static message behavior.
//!
//! Lets administrators post and maintain bot-authored messages such as rules or
//! channel guides. Sending `-static <content>` makes the bot post `<content>` as
//! its own message. Replying to one of the bot's messages with
//! `-static <content>` replaces that message's content instead. The command
//! message is deleted afterwards in both cases. Commands from non-administrators
//! and replies to messages the bot did not write are ignored.

use serenity::async_trait;

use super::{Behavior, MessageHandler};
use crate::data::discord::GuildApi;
use crate::error::AppError;
use crate::model::discord::ChatMessage;

const STATIC_PREFIX: &str = "-static ";

/// Extracts the content of a `-static` command, if the message is one.
pub fn parse_static_command(content: &str) -> Option<&str> {
    content
        .strip_prefix(STATIC_PREFIX)
        .filter(|rest| !rest.trim().is_empty())
}

pub struct BehaviorStaticMessage<'a> {
    guild: &'a dyn GuildApi,
}

impl<'a> BehaviorStaticMessage<'a> {
    pub fn new(guild: &'a dyn GuildApi) -> Self {
        Self { guild }
    }
}

impl Behavior for BehaviorStaticMessage<'_> {
    fn name(&self) -> &'static str {
        "static_message"
    }

    fn message(&self) -> Option<&dyn MessageHandler> {
        Some(self)
    }
}

#[async_trait]
impl<'a> MessageHandler for BehaviorStaticMessage<'a> {
    async fn on_message(&self, message: &ChatMessage) -> Result<(), AppError> {
        if message.author_id == self.guild.bot_user_id() {
            return Ok(());
        }

        let Some(content) = parse_static_command(&message.content) else {
            return Ok(());
        };

        if !self.guild.is_administrator(message.author_id).await? {
            tracing::debug!(
                "Ignoring -static from non-administrator {}",
                message.author_id
            );
            return Ok(());
        }

        match message.reference {
            Some(target_id) => {
                let Some(target) = self.guild.message(message.channel_id, target_id).await? else {
                    tracing::debug!("Referenced message {} no longer exists", target_id);
                    return Ok(());
                };

                if target.author_id != self.guild.bot_user_id() {
                    tracing::debug!(
                        "Refusing to take over message {} not authored by the bot",
                        target.id
                    );
                    return Ok(());
                }

                self.guild
                    .edit_message(message.channel_id, target.id, content)
                    .await?;

                tracing::info!(
                    "Updated static message {} in channel {}",
                    target.id,
                    message.channel_id
                );
            }
            None => {
                let created = self.guild.send_message(message.channel_id, content).await?;

                tracing::info!(
                    "Created static message {} in channel {}",
                    created.id,
                    message.channel_id
                );
            }
        }

        self.guild
            .delete_message(message.channel_id, message.id)
            .await
    }
}
