use serenity::all::{Context, Message};

use crate::data::discord::DiscordGuildRepository;
use crate::model::discord::ChatMessage;
use crate::service::guild::VoiceToolGuild;
use crate::util::clock::Clock;

/// Handle message creation in a channel
pub async fn handle_message(clock: &dyn Clock, ctx: Context, message: Message) {
    // Only guild channels (not DMs)
    let Some(guild_id) = message.guild_id else {
        return;
    };

    let bot_user_id = ctx.cache.current_user().id;
    if message.author.id == bot_user_id {
        return;
    }

    let guild = DiscordGuildRepository::new(ctx.http.clone(), guild_id, bot_user_id);
    let message = ChatMessage::from(&message);

    let report = VoiceToolGuild::new(&guild, clock).message(&message).await;

    if !report.failed.is_empty() {
        tracing::debug!(
            "Message {} in channel {}: {} of {} behaviors failed",
            message.id,
            message.channel_id,
            report.failed.len(),
            report.invoked.len()
        );
    }
}
