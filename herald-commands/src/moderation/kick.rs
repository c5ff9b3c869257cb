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
    name: "kick",
    desc: "Kick a user from the server.",
    category: "moderation",
    usage: "!kick <user> [reason]",
};

#[poise::command(prefix_command, slash_command, category = "Moderation")]
pub async fn kick(
    ctx: Context<'_>,
    #[description = "The user to kick"] user: Option<serenity::User>,
    #[description = "Reason for the kick"]
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
        serenity::Permissions::KICK_MEMBERS,
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
        ctx.say(moderation_self_action_message("kick")).await?;
        return Ok(());
    }

    if user.bot {
        ctx.say(moderation_bot_target_message()).await?;
        return Ok(());
    }

    let kick_result = guild_id
        .kick_with_reason(
            ctx.http(),
            user.id,
            reason.as_deref().unwrap_or(DEFAULT_REASON),
        )
        .await;

    if let Err(source) = kick_result {
        if !is_missing_permissions_error(&source) {
            error!(?source, "kick request failed");
        }
        ctx.say("I couldn't kick that user. Check role hierarchy and permissions.")
            .await?;
        return Ok(());
    }

    let body = moderation_ack_body(user.id, "kicked", reason.as_deref());
    acknowledge(ctx, &body, reason_ack_options(ctx)).await
}
