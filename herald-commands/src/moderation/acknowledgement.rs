use poise::serenity_prelude as serenity;
use tracing::warn;

use herald_ack::reason::{DEFAULT_REASON, reason_line};
use herald_ack::{AckOptions, AckTarget};
use herald_core::{Context, Error};
use herald_utils::formatting::user_mention;

/// Body of a moderation acknowledgement, e.g.
/// `User <@99> has been banned\n**Reason:** spam`.
pub fn moderation_ack_body(
    target_user_id: serenity::UserId,
    action_past_tense: &str,
    reason: Option<&str>,
) -> String {
    format!(
        "User {} has been {}\n{}",
        user_mention(target_user_id),
        action_past_tense,
        reason_line(reason.unwrap_or(DEFAULT_REASON))
    )
}

/// Options for an action acknowledgement with an editable reason.
pub fn reason_ack_options(ctx: Context<'_>) -> AckOptions {
    AckOptions::default().with_reason_button(Some(ctx.id().to_string()))
}

/// Send `body` through the acknowledgement service, falling back to plain
/// text so the invoker still sees the result.
pub async fn acknowledge(ctx: Context<'_>, body: &str, options: AckOptions) -> Result<(), Error> {
    let target = AckTarget::from_poise(ctx);
    if let Err(source) = ctx.data().acks.send(&target, body, &options).await {
        warn!(?source, "acknowledgement not delivered; replying with plain text");
        ctx.say(body).await?;
    }

    Ok(())
}

pub fn usage_message(usage: &str) -> String {
    format!("Usage: `{usage}`")
}

pub fn guild_only_message() -> &'static str {
    "This command only works in servers."
}

pub fn permission_denied_message() -> &'static str {
    "You don't have permission to use this command."
}

pub fn moderation_self_action_message(action: &str) -> String {
    format!("You can't {action} yourself.")
}

pub fn moderation_bot_target_message() -> &'static str {
    "You can't use moderation actions on bots or application accounts."
}

pub fn is_missing_permissions_error(source: &serenity::Error) -> bool {
    matches!(
        source,
        serenity::Error::Http(serenity::HttpError::UnsuccessfulRequest(response))
            if response.status_code.as_u16() == 403 || response.error.code == 50013
    )
}
