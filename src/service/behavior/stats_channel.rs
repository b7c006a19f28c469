//! Stats channel behavior.
//!
//! Keeps a human-readable join/leave log for a voice channel, which is handy for
//! seeing how long people have been sitting in a waiting room. The log lives in a
//! text channel whose name is derived from the voice channel: only ASCII letters,
//! digits and spaces are kept, the result is lowercased, runs of spaces become a
//! single `-`, and `stats-` is prefixed. `⌚ waiting room` logs to
//! `#stats-waiting-room`. Without such a channel nothing is logged.
//!
//! Entries are plain messages. Joining posts `join 14:02:11 CET  @member`;
//! leaving turns the newest matching entry into
//! `leave 14:30:45 join 14:02:11 CET  @member`. The time zone comes from the
//! stats channel topic (`tz:Europe/Stockholm`) and defaults to UTC.

use chrono_tz::Tz;
use serenity::async_trait;

use super::{Behavior, VoiceJoinHandler, VoiceLeaveHandler};
use crate::data::discord::GuildApi;
use crate::error::AppError;
use crate::model::channel_config::ChannelConfig;
use crate::model::discord::{ChatMessage, GuildChannelInfo, GuildMember};
use crate::util::clock::Clock;

/// How many of the most recent stats messages are searched for a join entry.
pub const HISTORY_LENGTH: usize = 200;

const STATS_CHANNEL_PREFIX: &str = "stats-";
const JOIN_PREFIX: &str = "join ";
const LEAVE_PREFIX: &str = "leave ";
const PLACEHOLDER: &str = "(temp)";
const TIMEZONE_KEY: &str = "tz";

/// Derives the stats channel name for a voice channel name.
///
/// # Returns
/// - `String` - e.g. `stats-waiting-room`; just `stats-` when nothing survives
///   the filtering
pub fn stats_channel_name(voice_channel_name: &str) -> String {
    let filtered: String = voice_channel_name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect();

    let slug = filtered
        .to_lowercase()
        .split(' ')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    format!("{}{}", STATS_CHANNEL_PREFIX, slug)
}

/// Resolves the `tz` setting of a stats channel, falling back to UTC.
pub fn resolve_timezone(config: &ChannelConfig) -> Tz {
    match config.get(TIMEZONE_KEY) {
        Some(name) => name.parse::<Tz>().unwrap_or_else(|_| {
            tracing::debug!("Unrecognized time zone '{}', using UTC", name);
            Tz::UTC
        }),
        None => Tz::UTC,
    }
}

pub struct BehaviorStatsChannel<'a> {
    guild: &'a dyn GuildApi,
    clock: &'a dyn Clock,
}

impl<'a> BehaviorStatsChannel<'a> {
    pub fn new(guild: &'a dyn GuildApi, clock: &'a dyn Clock) -> Self {
        Self { guild, clock }
    }

    async fn stats_channel(
        &self,
        voice_channel: &GuildChannelInfo,
    ) -> Result<Option<GuildChannelInfo>, AppError> {
        let name = stats_channel_name(&voice_channel.name);
        let channels = self.guild.channels().await?;

        let channel = GuildChannelInfo::find_text_by_name(&channels, &name).cloned();
        if channel.is_none() {
            tracing::debug!("No stats channel '{}' for {}", name, voice_channel.name);
        }

        Ok(channel)
    }

    /// Current time in the stats channel's time zone as `HH:MM:SS`, optionally
    /// followed by the zone abbreviation.
    fn timestamp(&self, stats_channel: &GuildChannelInfo, with_zone: bool) -> String {
        let timezone = resolve_timezone(&stats_channel.config());
        let now = self.clock.now().with_timezone(&timezone);

        if with_zone {
            now.format("%H:%M:%S %Z").to_string()
        } else {
            now.format("%H:%M:%S").to_string()
        }
    }

    fn is_join_entry_for(&self, message: &ChatMessage, member: &GuildMember) -> bool {
        message.author_id == self.guild.bot_user_id()
            && message.content.starts_with(JOIN_PREFIX)
            && message.mentions_user(member.user_id)
    }
}

impl Behavior for BehaviorStatsChannel<'_> {
    fn name(&self) -> &'static str {
        "stats_channel"
    }

    fn voice_leave(&self) -> Option<&dyn VoiceLeaveHandler> {
        Some(self)
    }

    fn voice_join(&self) -> Option<&dyn VoiceJoinHandler> {
        Some(self)
    }
}

#[async_trait]
impl<'a> VoiceLeaveHandler for BehaviorStatsChannel<'a> {
    async fn on_voice_leave(
        &self,
        member: &GuildMember,
        channel: &GuildChannelInfo,
    ) -> Result<(), AppError> {
        let Some(stats_channel) = self.stats_channel(channel).await? else {
            return Ok(());
        };

        let now = self.timestamp(&stats_channel, false);
        let history = self
            .guild
            .message_history(stats_channel.id, HISTORY_LENGTH)
            .await?;

        let Some(entry) = history
            .iter()
            .find(|message| self.is_join_entry_for(message, member))
        else {
            tracing::debug!(
                "No join entry for {} in the last {} messages of {}",
                member.display_name,
                HISTORY_LENGTH,
                stats_channel.name
            );
            return Ok(());
        };

        let content = format!("{}{} {}", LEAVE_PREFIX, now, entry.content);
        self.guild
            .edit_message(stats_channel.id, entry.id, &content)
            .await
    }
}

#[async_trait]
impl<'a> VoiceJoinHandler for BehaviorStatsChannel<'a> {
    async fn on_voice_join(
        &self,
        member: &GuildMember,
        channel: &GuildChannelInfo,
    ) -> Result<(), AppError> {
        let Some(stats_channel) = self.stats_channel(channel).await? else {
            return Ok(());
        };

        let now = self.timestamp(&stats_channel, true);

        // Sending the mention directly would ping the member; editing it into an
        // existing message does not.
        let placeholder = self
            .guild
            .send_message(stats_channel.id, PLACEHOLDER)
            .await?;

        let content = format!("{}{}  {}", JOIN_PREFIX, now, member.mention());
        self.guild
            .edit_message(stats_channel.id, placeholder.id, &content)
            .await
    }
}
