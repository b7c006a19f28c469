//! Discord bot integration.
//!
//! Connects to the Discord gateway with serenity and forwards voice state and
//! message events to a freshly built [`crate::service::guild::VoiceToolGuild`].
//! Connection lifecycle events are only logged.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild, role and channel availability
//! - `GUILD_VOICE_STATES` - Voice channel joins, leaves and moves
//! - `GUILD_MESSAGES` - Messages posted in guild channels
//! - `MESSAGE_CONTENT` - Message content for the `-static` and `-export` commands
//!   (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod start;
