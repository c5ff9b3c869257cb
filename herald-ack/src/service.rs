use poise::serenity_prelude as serenity;
use tracing::{debug, error, info, warn};

use herald_utils::time::now_unix_millis;

use crate::config::AckConfig;
use crate::discord::{ButtonPress, ReasonSubmission};
use crate::error::AckError;
use crate::interaction::{InteractionOutcome, ReasonInteraction, Route, route};
use crate::reason::{
    DEFAULT_REASON, REASON_INPUT_ID, ReasonForm, extract_reason, upsert_reason_line,
};
use crate::render::{
    AckFormat, AckOptions, RenderedMessage, UnbanSubject, render_at, render_unban_at,
};
use crate::target::{AckTarget, ChannelDirectory, InteractionResponder};

pub const REASON_UPDATED_NOTICE: &str = "✅ Reason updated!";
pub const REASON_UPDATE_FAILED_NOTICE: &str = "❌ Failed to update reason.";

/// Result of a successful send.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Delivery {
    pub format: AckFormat,
    /// Known when the platform returned the message (edits, follow-ups,
    /// channel posts); initial interaction replies do not.
    pub message_id: Option<serenity::MessageId>,
}

/// Renders moderation acknowledgements and routes reason edits back into them.
#[derive(Clone, Debug, Default)]
pub struct AcknowledgementService {
    config: AckConfig,
}

impl AcknowledgementService {
    pub fn new(config: AckConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AckConfig {
        &self.config
    }

    pub fn render(
        &self,
        executor: serenity::UserId,
        body: &str,
        options: &AckOptions,
    ) -> RenderedMessage {
        render_at(&self.config, executor, body, options, now_unix_millis())
    }

    /// Never for messages with a reason button: the reason flow edits embed
    /// descriptions.
    fn wants_layout(&self, options: &AckOptions) -> bool {
        self.config.prefer_layout && options.prefer_layout && !options.reason_button
    }

    /// Send an acknowledgement for `body` to `target`.
    ///
    /// Returns `Ok(None)` for a detached target. A rejected layout send is
    /// retried once as an embed; only failures of that final send surface.
    pub async fn send(
        &self,
        target: &AckTarget<'_>,
        body: &str,
        options: &AckOptions,
    ) -> Result<Option<Delivery>, AckError> {
        let Some(executor) = target.executor() else {
            debug!("acknowledgement target has no response surface; skipping");
            return Ok(None);
        };

        let message = self.render(executor, body, options);

        let layout_responder = match target {
            AckTarget::Command(responder) if self.wants_layout(options) => Some(responder),
            _ => None,
        };

        if let Some(responder) = layout_responder {
            let layout = deliver_to_interaction(
                responder.as_ref(),
                &message,
                AckFormat::Layout,
                options.follow_up,
            )
            .await;

            match layout {
                Ok(message_id) => {
                    return Ok(Some(Delivery {
                        format: AckFormat::Layout,
                        message_id,
                    }));
                }
                Err(source) => {
                    warn!(?source, "layout acknowledgement rejected; falling back to embed");
                }
            }
        }

        let result = match target {
            AckTarget::Command(responder) => {
                deliver_to_interaction(
                    responder.as_ref(),
                    &message,
                    AckFormat::Embed,
                    options.follow_up,
                )
                .await
            }
            AckTarget::Component(responder) => {
                deliver_to_interaction(responder.as_ref(), &message, AckFormat::Embed, false).await
            }
            AckTarget::Message(target) => target
                .channels
                .post(target.channel_id, &message)
                .await
                .map(Some),
            AckTarget::Detached => return Ok(None),
        };

        match result {
            Ok(message_id) => Ok(Some(Delivery {
                format: AckFormat::Embed,
                message_id,
            })),
            Err(source) => {
                error!(?source, "failed to deliver acknowledgement");
                Err(source)
            }
        }
    }

    /// Post an unban acknowledgement to the configured log channel of `guild_id`.
    pub async fn send_unban_acknowledgement(
        &self,
        channels: &dyn ChannelDirectory,
        guild_id: serenity::GuildId,
        subject: &UnbanSubject,
        executor: serenity::UserId,
        reason: Option<&str>,
    ) -> Result<serenity::MessageId, AckError> {
        let channel_id = self.config.unban_channel_id;
        if !channels.guild_has_channel(guild_id, channel_id) {
            error!(
                guild_id = guild_id.get(),
                channel_id = channel_id.get(),
                "unban acknowledgement channel not found"
            );
            return Err(AckError::ChannelNotFound(channel_id));
        }

        let message =
            render_unban_at(&self.config, subject, executor, reason, now_unix_millis());
        channels.post(channel_id, &message).await.map_err(|source| {
            error!(?source, "failed to send unban acknowledgement");
            source
        })
    }

    /// Rewrite the reason line of the message `interaction` originated on.
    pub async fn update_reason(
        &self,
        interaction: &dyn ReasonInteraction,
        reason: &str,
    ) -> Result<(), AckError> {
        let result = match interaction.source_description() {
            Some(description) => {
                let updated = upsert_reason_line(description, reason);
                interaction.rewrite_description(&updated).await
            }
            None => Err(AckError::MissingEmbed),
        };

        if let Err(source) = &result {
            error!(?source, "failed to update acknowledgement reason");
        }

        result
    }

    /// Entry point for button clicks and modal submissions.
    pub async fn handle_interaction(
        &self,
        interaction: &dyn ReasonInteraction,
    ) -> InteractionOutcome {
        match route(interaction.kind(), interaction.custom_id()) {
            Route::Ignore => InteractionOutcome::Ignored,
            Route::OpenForm { correlation_id } => {
                let existing_reason = interaction
                    .source_description()
                    .and_then(extract_reason)
                    .unwrap_or_else(|| DEFAULT_REASON.to_owned());
                let form = ReasonForm::new(correlation_id, existing_reason);

                match interaction.show_reason_form(&form).await {
                    Ok(()) => InteractionOutcome::FormShown,
                    Err(source) => {
                        error!(?source, "failed to show reason form");
                        InteractionOutcome::ResponseFailed
                    }
                }
            }
            Route::SubmitReason => {
                let (notice, outcome) = if self.submit_reason(interaction).await.is_ok() {
                    (REASON_UPDATED_NOTICE, InteractionOutcome::ReasonUpdated)
                } else {
                    (
                        REASON_UPDATE_FAILED_NOTICE,
                        InteractionOutcome::ReasonUpdateFailed,
                    )
                };

                if let Err(source) = interaction.reply_ephemeral(notice).await {
                    error!(?source, "failed to acknowledge reason form submission");
                    return InteractionOutcome::ResponseFailed;
                }

                info!(?outcome, "reason form handled");
                outcome
            }
        }
    }

    async fn submit_reason(&self, interaction: &dyn ReasonInteraction) -> Result<(), AckError> {
        match interaction.text_input(REASON_INPUT_ID) {
            Some(reason) => self.update_reason(interaction, &reason).await,
            None => {
                let source = AckError::MissingInput(REASON_INPUT_ID);
                error!(
                    ?source,
                    custom_id = interaction.custom_id(),
                    "failed to update acknowledgement reason"
                );
                Err(source)
            }
        }
    }

    /// Adapt a gateway interaction and run it through [`Self::handle_interaction`].
    pub async fn handle_gateway_interaction(
        &self,
        ctx: &serenity::Context,
        interaction: &serenity::Interaction,
    ) -> InteractionOutcome {
        match interaction {
            serenity::Interaction::Component(component) => {
                self.handle_interaction(&ButtonPress::new(&ctx.http, component))
                    .await
            }
            serenity::Interaction::Modal(modal) => {
                self.handle_interaction(&ReasonSubmission::new(&ctx.http, modal))
                    .await
            }
            _ => InteractionOutcome::Ignored,
        }
    }
}

async fn deliver_to_interaction(
    responder: &dyn InteractionResponder,
    message: &RenderedMessage,
    format: AckFormat,
    follow_up: bool,
) -> Result<Option<serenity::MessageId>, AckError> {
    if follow_up {
        return responder.follow_up(message, format).await;
    }

    if responder.has_responded() {
        responder.edit_reply(message, format).await
    } else {
        responder.reply(message, format).await
    }
}
