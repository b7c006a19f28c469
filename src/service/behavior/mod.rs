//! Behaviors and the event capabilities they can implement.
//!
//! A behavior is an independent unit of reaction logic. It declares which events
//! it handles by returning `Some` from the matching accessor on [`Behavior`];
//! the default for every accessor is `None`, meaning "not implemented". The
//! dispatcher never has to guess: an absent capability is skipped, a present one
//! is called and any error it returns is a real failure.

pub mod message_export;
pub mod static_message;
pub mod stats_channel;
pub mod voice_role;

use serenity::async_trait;

use crate::error::AppError;
use crate::model::discord::{ChatMessage, GuildChannelInfo, GuildMember};

pub use message_export::BehaviorMessageExport;
pub use static_message::BehaviorStaticMessage;
pub use stats_channel::BehaviorStatsChannel;
pub use voice_role::BehaviorVoiceRole;

/// Reacts to a member leaving a voice channel.
#[async_trait]
pub trait VoiceLeaveHandler: Send + Sync {
    async fn on_voice_leave(
        &self,
        member: &GuildMember,
        channel: &GuildChannelInfo,
    ) -> Result<(), AppError>;
}

/// Reacts to a member joining a voice channel.
#[async_trait]
pub trait VoiceJoinHandler: Send + Sync {
    async fn on_voice_join(
        &self,
        member: &GuildMember,
        channel: &GuildChannelInfo,
    ) -> Result<(), AppError>;
}

/// Reacts to a message posted in a guild channel.
#[async_trait]
pub trait MessageHandler: Send + Sync {
    async fn on_message(&self, message: &ChatMessage) -> Result<(), AppError>;
}

/// A unit of behavior registered with the guild dispatcher.
pub trait Behavior: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    fn voice_leave(&self) -> Option<&dyn VoiceLeaveHandler> {
        None
    }

    fn voice_join(&self) -> Option<&dyn VoiceJoinHandler> {
        None
    }

    fn message(&self) -> Option<&dyn MessageHandler> {
        None
    }
}
