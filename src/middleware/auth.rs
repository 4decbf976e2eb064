use serenity::async_trait;

use crate::{
    error::{auth::AuthError, AppError},
    model::command::Invocation,
};

/// Requirement a command places on its invocation.
///
/// Commands list their permissions in the order they must be checked; the first
/// failing permission short-circuits the rest and the command body never runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Invocation must come from a guild, not a DM.
    GuildOnly,
    /// Invoking user must hold the admin role in the AGDB guild.
    Admin,
}

/// Resolves the roles a user holds in a guild.
#[async_trait]
pub trait RoleLookup: Send + Sync {
    /// # Returns
    /// - `Ok(Vec<u64>)` - Role IDs of the member
    /// - `Err(AuthError::MemberLookup)` - Guild or member unknown, or Discord unreachable
    async fn member_roles(&self, guild_id: u64, user_id: u64) -> Result<Vec<u64>, AuthError>;
}

pub struct AuthGuard<'a> {
    roles: &'a dyn RoleLookup,
    agdb_guild_id: u64,
    admin_role_id: u64,
}

impl<'a> AuthGuard<'a> {
    pub fn new(roles: &'a dyn RoleLookup, agdb_guild_id: u64, admin_role_id: u64) -> Self {
        Self {
            roles,
            agdb_guild_id,
            admin_role_id,
        }
    }

    /// Checks every permission in order.
    ///
    /// Role membership is always resolved in the AGDB guild, whichever guild the
    /// command was used in.
    ///
    /// # Returns
    /// - `Ok(())` - All permissions satisfied
    /// - `Err(AppError::AuthErr)` - First unsatisfied permission, or a failed role lookup
    pub async fn require(
        &self,
        invocation: &Invocation,
        permissions: &[Permission],
    ) -> Result<(), AppError> {
        for permission in permissions {
            match permission {
                Permission::GuildOnly => requires_guild_context(invocation)?,
                Permission::Admin => {
                    let roles = self
                        .roles
                        .member_roles(self.agdb_guild_id, invocation.user_id)
                        .await?;
                    requires_admin_role(invocation, &roles, self.admin_role_id)?;
                }
            }
        }

        Ok(())
    }
}

/// Denies invocations that did not come from a guild.
pub fn requires_guild_context(invocation: &Invocation) -> Result<(), AuthError> {
    if invocation.guild_id.is_none() {
        return Err(AuthError::GuildOnly(invocation.command.name().to_string()));
    }

    Ok(())
}

/// Allows iff `admin_role_id` is among `roles`; other roles are irrelevant.
pub fn requires_admin_role(
    invocation: &Invocation,
    roles: &[u64],
    admin_role_id: u64,
) -> Result<(), AuthError> {
    if !roles.contains(&admin_role_id) {
        return Err(AuthError::AccessDenied {
            user_id: invocation.user_id,
            command: invocation.command.name().to_string(),
        });
    }

    Ok(())
}
