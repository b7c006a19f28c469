use serenity::all::{Context, Message, Ready, ResumedEvent, ShardStageUpdateEvent, VoiceState};
use serenity::async_trait;
use serenity::client::EventHandler;

use crate::util::clock::SystemClock;

pub mod message;
pub mod ready;
pub mod voice;

/// Discord bot event handler
#[derive(Default)]
pub struct Handler {
    clock: SystemClock,
}

impl Handler {
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a dropped gateway session is resumed
    async fn resume(&self, ctx: Context, resumed: ResumedEvent) {
        ready::handle_resume(ctx, resumed).await;
    }

    /// Called when a shard connects, disconnects or reconnects
    async fn shard_stage_update(&self, ctx: Context, event: ShardStageUpdateEvent) {
        ready::handle_shard_stage_update(ctx, event).await;
    }

    /// Called when a member joins, leaves or moves between voice channels, or
    /// changes mute and deafen state
    async fn voice_state_update(&self, ctx: Context, old: Option<VoiceState>, new: VoiceState) {
        voice::handle_voice_state_update(&self.clock, ctx, old, new).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(&self.clock, ctx, message).await;
    }
}
