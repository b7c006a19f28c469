//! Error types for the bot.
//!
//! `AppError` is the single error type returned by platform calls, behaviors and
//! startup code. Behavior errors never reach Discord or the triggering user; the
//! guild dispatcher logs them and moves on to the next behavior. Errors returned
//! during startup abort the process.

pub mod config;

use std::time::Duration;

use thiserror::Error;

use crate::error::config::ConfigError;

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size. Permission failures (a missing Manage Roles or
    /// Manage Messages permission, for example) surface through this variant.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// A behavior handler did not finish within the dispatch timeout.
    #[error("Behavior {behavior} timed out after {elapsed:?}")]
    Timeout {
        /// Name of the behavior whose handler was cancelled
        behavior: &'static str,
        /// The timeout that elapsed
        elapsed: Duration,
    },
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
