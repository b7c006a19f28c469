//! Discord guild role domain model.

use serenity::all::{Permissions, Role, RoleId};

/// Role within a guild as seen by the behaviors.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildRole {
    /// Discord role ID.
    pub id: RoleId,
    /// Role display name, matched exactly by name-based lookups.
    pub name: String,
    /// Guild-level permissions granted by the role.
    pub permissions: Permissions,
}

impl GuildRole {
    #[cfg(test)]
    pub fn new(id: RoleId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            permissions: Permissions::empty(),
        }
    }

    /// Finds the first role with exactly the given name.
    ///
    /// Discord allows several roles to share a name; the first one in listing
    /// order wins and the rest are ignored.
    pub fn find_by_name<'a>(roles: &'a [GuildRole], name: &str) -> Option<&'a GuildRole> {
        roles.iter().find(|role| role.name == name)
    }
}

impl From<&Role> for GuildRole {
    fn from(role: &Role) -> Self {
        Self {
            id: role.id,
            name: role.name.clone(),
            permissions: role.permissions,
        }
    }
}
