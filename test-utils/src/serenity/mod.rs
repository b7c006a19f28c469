//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON with
//! sensible defaults, while allowing customization of the fields the bot reads.
//!
//! # Available Factories
//!
//! - `role::create_test_role` - Create Serenity Role objects
//! - `channel::create_test_channel` - Create Serenity GuildChannel objects
//! - `member::create_test_member` - Create Serenity Member objects
//! - `message::create_test_message` - Create Serenity Message objects

pub mod channel;
pub mod member;
pub mod message;
pub mod role;

// Re-export commonly used functions for convenience
pub use channel::create_test_channel;
pub use member::create_test_member;
pub use message::create_test_message;
pub use role::create_test_role;

/// Builds the JSON for a Discord user object.
pub(crate) fn user_json(user_id: u64, username: &str, bot: bool) -> serde_json::Value {
    serde_json::json!({
        "id": user_id.to_string(),
        "username": username,
        "discriminator": "0",
        "global_name": null,
        "avatar": null,
        "bot": bot,
        "system": false,
        "public_flags": 0,
    })
}
