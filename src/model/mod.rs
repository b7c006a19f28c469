//! Domain models for the platform objects the bot reads.
//!
//! Serenity types are converted into these small structs at the data layer
//! boundary, so behaviors only depend on the handful of fields they use and can
//! be exercised against an in-memory guild in tests.

pub mod channel_config;
pub mod discord;
