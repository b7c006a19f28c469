//! Voice role behavior.
//!
//! Gives a member the role named `voice <channel name>` while they are in that
//! voice channel, and takes it away when they leave. Channels without a matching
//! role are ignored, so creating the role is how the feature is enabled for a
//! channel. A typical use is granting access to a text channel that belongs to
//! the voice channel.

use serenity::async_trait;

use super::{Behavior, VoiceJoinHandler, VoiceLeaveHandler};
use crate::data::discord::GuildApi;
use crate::error::AppError;
use crate::model::discord::{GuildChannelInfo, GuildMember, GuildRole};

const VOICE_ROLE_PREFIX: &str = "voice ";

/// Name of the role mirrored for members of `channel`.
pub fn voice_role_name(channel: &GuildChannelInfo) -> String {
    format!("{}{}", VOICE_ROLE_PREFIX, channel.name)
}

/// Removes every `voice ` role the member holds that does not belong to
/// `current`, the channel they are now in.
///
/// Used when the channel a member left can no longer be resolved, typically
/// because it was deleted while occupied, so the regular leave handler has no
/// channel name to derive the role from.
///
/// # Arguments
/// - `guild` - Guild the member belongs to
/// - `member` - Member with their freshly fetched role list
/// - `current` - Voice channel the member is in now, `None` if disconnected
pub async fn remove_stale_voice_roles(
    guild: &dyn GuildApi,
    member: &GuildMember,
    current: Option<&GuildChannelInfo>,
) -> Result<(), AppError> {
    let keep = current.map(voice_role_name);
    let roles = guild.roles().await?;

    let stale = roles.iter().filter(|role| {
        role.name.starts_with(VOICE_ROLE_PREFIX)
            && member.roles.contains(&role.id)
            && keep.as_deref() != Some(role.name.as_str())
    });

    for role in stale {
        tracing::info!(
            "Removing stale role '{}' from {} after leaving an unknown channel",
            role.name,
            member.display_name
        );

        guild.remove_member_role(member.user_id, role.id).await?;
    }

    Ok(())
}

pub struct BehaviorVoiceRole<'a> {
    guild: &'a dyn GuildApi,
}

impl<'a> BehaviorVoiceRole<'a> {
    pub fn new(guild: &'a dyn GuildApi) -> Self {
        Self { guild }
    }

    async fn voice_role(&self, channel: &GuildChannelInfo) -> Result<Option<GuildRole>, AppError> {
        let role_name = voice_role_name(channel);
        let roles = self.guild.roles().await?;

        let role = GuildRole::find_by_name(&roles, &role_name).cloned();
        if role.is_none() {
            tracing::debug!("No role named '{}', skipping voice role", role_name);
        }

        Ok(role)
    }
}

impl Behavior for BehaviorVoiceRole<'_> {
    fn name(&self) -> &'static str {
        "voice_role"
    }

    fn voice_leave(&self) -> Option<&dyn VoiceLeaveHandler> {
        Some(self)
    }

    fn voice_join(&self) -> Option<&dyn VoiceJoinHandler> {
        Some(self)
    }
}

#[async_trait]
impl<'a> VoiceLeaveHandler for BehaviorVoiceRole<'a> {
    async fn on_voice_leave(
        &self,
        member: &GuildMember,
        channel: &GuildChannelInfo,
    ) -> Result<(), AppError> {
        let Some(role) = self.voice_role(channel).await? else {
            return Ok(());
        };

        tracing::info!(
            "Removing role '{}' from {} after leaving {}",
            role.name,
            member.display_name,
            channel.name
        );

        self.guild
            .remove_member_role(member.user_id, role.id)
            .await
    }
}

#[async_trait]
impl<'a> VoiceJoinHandler for BehaviorVoiceRole<'a> {
    async fn on_voice_join(
        &self,
        member: &GuildMember,
        channel: &GuildChannelInfo,
    ) -> Result<(), AppError> {
        let Some(role) = self.voice_role(channel).await? else {
            return Ok(());
        };

        tracing::info!(
            "Adding role '{}' to {} after joining {}",
            role.name,
            member.display_name,
            channel.name
        );

        self.guild.add_member_role(member.user_id, role.id).await
    }
}
