//! Connection lifecycle handlers.
//!
//! The bot keeps no state across connections, so lifecycle events are only
//! logged.

use serenity::all::{Context, Ready, ResumedEvent, ShardStageUpdateEvent};

/// Handles the ready event when the bot connects to Discord.
pub async fn handle_ready(_ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord ({} guilds)",
        ready.user.name,
        ready.guilds.len()
    );
}

/// Handles a resumed gateway session after a short disconnect.
pub async fn handle_resume(_ctx: Context, _resumed: ResumedEvent) {
    tracing::info!("Gateway session resumed");
}

/// Handles shard connection stage transitions (connecting, connected,
/// disconnected, resuming).
pub async fn handle_shard_stage_update(_ctx: Context, event: ShardStageUpdateEvent) {
    tracing::info!(
        "Shard {} connection stage changed: {:?} -> {:?}",
        event.shard_id,
        event.old,
        event.new
    );
}
