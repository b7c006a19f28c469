//! Platform access layer.
//!
//! Everything the behaviors need from Discord goes through the [`GuildApi`]
//! trait. The production implementation, [`DiscordGuildRepository`], calls the
//! Discord REST API through serenity's `Http` client and converts the returned
//! serenity objects into the domain models in [`crate::model`].
//!
//! [`GuildApi`]: discord::GuildApi
//! [`DiscordGuildRepository`]: discord::DiscordGuildRepository

pub mod discord;
