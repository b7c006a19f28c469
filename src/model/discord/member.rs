//! Discord guild member domain model.

use serenity::all::{Member, Mentionable, RoleId, UserId};

/// Guild member as re-fetched from the API at event time.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildMember {
    /// Discord user ID of the member.
    pub user_id: UserId,
    /// Nickname, global name or username, in that order of preference.
    pub display_name: String,
    /// Roles currently held by the member.
    pub roles: Vec<RoleId>,
}

impl GuildMember {
    #[cfg(test)]
    pub fn new(user_id: UserId, display_name: impl Into<String>) -> Self {
        Self {
            user_id,
            display_name: display_name.into(),
            roles: Vec::new(),
        }
    }

    /// Mention markup for this member, e.g. `<@80351110224678912>`.
    pub fn mention(&self) -> String {
        self.user_id.mention().to_string()
    }
}

impl From<&Member> for GuildMember {
    fn from(member: &Member) -> Self {
        Self {
            user_id: member.user.id,
            display_name: member.display_name().to_string(),
            roles: member.roles.clone(),
        }
    }
}
