//! Event handling logic.
//!
//! [`guild::VoiceToolGuild`] fans each gateway event out to the behaviors in
//! [`behavior`]. Both are rebuilt for every event and hold no state of their
//! own; everything they read comes from the platform through
//! [`crate::data::discord::GuildApi`].

pub mod behavior;
pub mod guild;

#[cfg(test)]
mod test;
