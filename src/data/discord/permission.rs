//! Administrator resolution from guild roles.
//!
//! Discord has no single "is admin" flag on a member. A member counts as an
//! administrator when they own the guild, or when any role they hold carries the
//! `ADMINISTRATOR` permission. The `@everyone` role shares its ID with the guild
//! and applies to every member implicitly, so it is included even though it never
//! appears in the member's role list.

use serenity::all::{GuildId, UserId};

use crate::model::discord::{GuildMember, GuildRole};

/// Resolves whether `member` has administrator rights in the guild.
///
/// # Arguments
/// - `guild_id` - Guild the member belongs to (also the `@everyone` role ID)
/// - `owner_id` - Owner of the guild
/// - `member` - Member to check, with their current role list
/// - `guild_roles` - All roles of the guild
///
/// # Returns
/// - `true` - Member owns the guild or holds a role with `ADMINISTRATOR`
/// - `false` - Otherwise
pub fn is_administrator(
    guild_id: GuildId,
    owner_id: UserId,
    member: &GuildMember,
    guild_roles: &[GuildRole],
) -> bool {
    if member.user_id == owner_id {
        return true;
    }

    guild_roles
        .iter()
        .filter(|role| role.id.get() == guild_id.get() || member.roles.contains(&role.id))
        .any(|role| role.permissions.administrator())
}
