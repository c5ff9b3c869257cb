use tracing::error;

use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::acknowledgement::{
    acknowledge, guild_only_message, is_missing_permissions_error, moderation_ack_body,
    moderation_bot_target_message, moderation_self_action_message, permission_denied_message,
    reason_ack_options, usage_message,
};
use herald_ack::reason::DEFAULT_REASON;
use herald_core::{Context, Error};
use herald_utils::permissions::has_user_permission;

pub const META: CommandMeta = CommandMeta {
    name: "ban",
    desc: "Ban a user from the server.",
    category: "moderation",
    usage: "!ban <user> [reason]",
};

#[poise::command(prefix_command, slash_command, category = "Moderation")]
pub async fn ban(
    ctx: Context<'_>,
    #[description = "The user to ban"] user: Option<serenity::User>,
    #[description = "Reason for the ban"]
    #[rest]
    reason: Option<String>,
) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    if !has_user_permission(
        ctx.http(),
        guild_id,
        ctx.author().id,
        serenity::Permissions::BAN_MEMBERS,
    )
    .await?
    {
        ctx.say(permission_denied_message()).await?;
        return Ok(());
    }

    let Some(user) = user else {
        ctx.say(usage_message(META.usage)).await?;
        return Ok(());
    };

    if user.id == ctx.author().id {
        ctx.say(moderation_self_action_message("ban")).await?;
        return Ok(());
    }

    if user.bot {
        ctx.say(moderation_bot_target_message()).await?;
        return Ok(());
    }

    let ban_result = guild_id
        .ban_with_reason(
            ctx.http(),
            user.id,
            0,
            reason.as_deref().unwrap_or(DEFAULT_REASON),
        )
        .await;

    if let Err(source) = ban_result {
        if !is_missing_permissions_error(&source) {
            error!(?source, "ban request failed");
        }
        ctx.say("I couldn't ban that user. Check role hierarchy and permissions.")
            .await?;
        return Ok(());
    }

    let body = moderation_ack_body(user.id, "banned", reason.as_deref());
    acknowledge(ctx, &body, reason_ack_options(ctx)).await
}
