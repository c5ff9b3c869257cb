use poise::serenity_prelude as serenity;

/// Resolve a member's effective guild-level permissions from their roles.
///
/// The guild owner always resolves to every permission.
pub async fn resolve_user_permissions(
    http: &serenity::Http,
    guild_id: serenity::GuildId,
    user_id: serenity::UserId,
) -> anyhow::Result<serenity::Permissions> {
    let guild = guild_id.to_partial_guild(http).await?;
    if guild.owner_id == user_id {
        return Ok(serenity::Permissions::all());
    }

    let member = guild_id.member(http, user_id).await?;
    let roles = guild_id.roles(http).await?;

    let everyone_role_id = serenity::RoleId::new(guild_id.get());
    let resolved = roles
        .values()
        .filter(|role| role.id == everyone_role_id || member.roles.contains(&role.id))
        .fold(serenity::Permissions::empty(), |acc, role| {
            acc | role.permissions
        });

    Ok(resolved)
}

/// Whether a resolved permission set grants `required`.
pub fn grants(perms: serenity::Permissions, required: serenity::Permissions) -> bool {
    perms.contains(serenity::Permissions::ADMINISTRATOR) || perms.contains(required)
}

pub async fn has_user_permission(
    http: &serenity::Http,
    guild_id: serenity::GuildId,
    user_id: serenity::UserId,
    required: serenity::Permissions,
) -> anyhow::Result<bool> {
    let perms = resolve_user_permissions(http, guild_id, user_id).await?;
    Ok(grants(perms, required))
}
