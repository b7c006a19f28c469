//! Voice state event handler.
//!
//! Discord sends a voice state update for every change to a member's voice
//! state, including mute and deafen toggles. Only changes of channel are passed
//! on to the behaviors.

use serenity::all::{ChannelId, Context, GuildId, VoiceState};

use crate::data::discord::{DiscordGuildRepository, GuildApi};
use crate::model::discord::GuildChannelInfo;
use crate::service::behavior::voice_role;
use crate::service::guild::VoiceToolGuild;
use crate::util::clock::Clock;

/// Handles the voice_state_update event.
///
/// The member is re-fetched from the API before dispatching, since the member
/// attached to the gateway event may carry a stale role list. If the member
/// cannot be fetched the event is dropped.
///
/// # Arguments
/// - `clock` - Wall clock used for stats timestamps
/// - `ctx` - Discord context for API access
/// - `old` - Previous voice state, if the member was known to be connected
/// - `new` - Current voice state
pub async fn handle_voice_state_update(
    clock: &dyn Clock,
    ctx: Context,
    old: Option<VoiceState>,
    new: VoiceState,
) {
    let before = old.as_ref().and_then(|state| state.channel_id);
    let after = new.channel_id;

    if before == after {
        // Mute, deafen or stream change rather than a channel change
        return;
    }

    let Some(guild_id) = new.guild_id else {
        return;
    };

    let bot_user_id = ctx.cache.current_user().id;
    let guild = DiscordGuildRepository::new(ctx.http.clone(), guild_id, bot_user_id);

    let member = match guild.member(new.user_id).await {
        Ok(Some(member)) => member,
        Ok(None) => {
            tracing::debug!(
                "Member {} no longer in guild {}, ignoring voice update",
                new.user_id,
                guild_id
            );
            return;
        }
        Err(e) => {
            tracing::error!(
                "Failed to fetch member {} in guild {}: {}",
                new.user_id,
                guild_id,
                e
            );
            return;
        }
    };

    let channels = match guild.channels().await {
        Ok(channels) => channels,
        Err(e) => {
            tracing::error!("Failed to fetch channels of guild {}: {}", guild_id, e);
            return;
        }
    };

    let before_channel = resolve_channel(&ctx, guild_id, &channels, before);
    let after_channel = resolve_channel(&ctx, guild_id, &channels, after);

    if before.is_some() && before_channel.is_none() {
        // Left channel is gone, so its role name is unknown
        if let Err(e) =
            voice_role::remove_stale_voice_roles(&guild, &member, after_channel.as_ref()).await
        {
            tracing::error!(
                "Failed to clear stale voice roles of {} in guild {}: {}",
                member.display_name,
                guild_id,
                e
            );
        }
    }

    let report = VoiceToolGuild::new(&guild, clock)
        .voice_state_changed(&member, before_channel.as_ref(), after_channel.as_ref())
        .await;

    tracing::debug!(
        "Voice update for {} in guild {} handled by {} behaviors, {} failed",
        member.display_name,
        guild_id,
        report.invoked.len(),
        report.failed.len()
    );
}

/// Looks up a voice channel from the event, first in the fresh channel listing
/// and then in the gateway cache, which may still hold a channel that was
/// deleted after the member left it.
fn resolve_channel(
    ctx: &Context,
    guild_id: GuildId,
    channels: &[GuildChannelInfo],
    channel_id: Option<ChannelId>,
) -> Option<GuildChannelInfo> {
    let channel_id = channel_id?;

    if let Some(channel) = channels.iter().find(|channel| channel.id == channel_id) {
        return Some(channel.clone());
    }

    let cached = ctx.cache.guild(guild_id).and_then(|guild| {
        guild
            .channels
            .get(&channel_id)
            .map(GuildChannelInfo::from)
    });

    if cached.is_none() {
        tracing::debug!("Voice channel {} no longer exists", channel_id);
    }

    cached
}
