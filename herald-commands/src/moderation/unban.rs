use tracing::{error, warn};

use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::acknowledgement::{
    acknowledge, guild_only_message, is_missing_permissions_error, moderation_ack_body,
    moderation_bot_target_message, permission_denied_message, reason_ack_options, usage_message,
};
use herald_ack::UnbanSubject;
use herald_core::{Context, Error};
use herald_utils::permissions::has_user_permission;

pub const META: CommandMeta = CommandMeta {
    name: "unban",
    desc: "Unban a user from the server.",
    category: "moderation",
    usage: "!unban <user> [reason]",
};

#[poise::command(prefix_command, slash_command, category = "Moderation")]
pub async fn unban(
    ctx: Context<'_>,
    #[description = "The user to unban"] user: Option<serenity::User>,
    #[description = "Reason for the unban"]
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

    if user.bot {
        ctx.say(moderation_bot_target_message()).await?;
        return Ok(());
    }

    let is_banned = matches!(guild_id.get_ban(ctx.http(), user.id).await, Ok(Some(_)));
    if !is_banned {
        ctx.say("That user is not currently banned in this server.")
            .await?;
        return Ok(());
    }

    if let Err(source) = guild_id.unban(ctx.http(), user.id).await {
        if !is_missing_permissions_error(&source) {
            error!(?source, "unban request failed");
        }
        ctx.say("I couldn't unban that user. They may not be banned, or I lack permissions.")
            .await?;
        return Ok(());
    }

    let log_result = ctx
        .data()
        .acks
        .send_unban_acknowledgement(
            ctx.serenity_context(),
            guild_id,
            &UnbanSubject::from(&user),
            ctx.author().id,
            reason.as_deref(),
        )
        .await;
    if let Err(source) = log_result {
        warn!(?source, "unban was not posted to the log channel");
    }

    let body = moderation_ack_body(user.id, "unbanned", reason.as_deref());
    acknowledge(ctx, &body, reason_ack_options(ctx)).await
}
