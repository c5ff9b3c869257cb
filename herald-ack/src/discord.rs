//! serenity-backed implementations of the platform traits.

use std::sync::atomic::{AtomicBool, Ordering};

use poise::serenity_prelude as serenity;

use crate::error::AckError;
use crate::interaction::{InteractionKind, ReasonInteraction};
use crate::reason::ReasonForm;
use crate::render::{AckFormat, RenderedMessage};
use crate::target::{ChannelDirectory, InteractionResponder};

enum AnsweredFlag<'a> {
    /// poise tracks the initial response of application commands itself.
    Shared(&'a AtomicBool),
    Owned(AtomicBool),
}

impl AnsweredFlag<'_> {
    fn get(&self) -> bool {
        match self {
            AnsweredFlag::Shared(flag) => flag.load(Ordering::SeqCst),
            AnsweredFlag::Owned(flag) => flag.load(Ordering::SeqCst),
        }
    }

    fn set(&self) {
        match self {
            AnsweredFlag::Shared(flag) => flag.store(true, Ordering::SeqCst),
            AnsweredFlag::Owned(flag) => flag.store(true, Ordering::SeqCst),
        }
    }
}

/// Interaction id and token, answered through the raw interaction endpoints
/// so embed and layout payloads share one code path.
pub struct InteractionHandle<'a> {
    http: &'a serenity::Http,
    id: serenity::InteractionId,
    token: &'a str,
    user_id: serenity::UserId,
    answered: AnsweredFlag<'a>,
}

impl<'a> InteractionHandle<'a> {
    pub fn for_poise<U, E>(ctx: poise::ApplicationContext<'a, U, E>) -> Self {
        Self {
            http: &ctx.serenity_context.http,
            id: ctx.interaction.id,
            token: &ctx.interaction.token,
            user_id: ctx.interaction.user.id,
            answered: AnsweredFlag::Shared(ctx.has_sent_initial_response),
        }
    }

    /// `answered` is whether the interaction was already replied to or
    /// deferred; serenity does not track this outside poise.
    pub fn for_component(
        http: &'a serenity::Http,
        interaction: &'a serenity::ComponentInteraction,
        answered: bool,
    ) -> Self {
        Self::owned(
            http,
            interaction.id,
            &interaction.token,
            interaction.user.id,
            answered,
        )
    }

    pub fn for_modal(
        http: &'a serenity::Http,
        interaction: &'a serenity::ModalInteraction,
        answered: bool,
    ) -> Self {
        Self::owned(
            http,
            interaction.id,
            &interaction.token,
            interaction.user.id,
            answered,
        )
    }

    fn owned(
        http: &'a serenity::Http,
        id: serenity::InteractionId,
        token: &'a str,
        user_id: serenity::UserId,
        answered: bool,
    ) -> Self {
        Self {
            http,
            id,
            token,
            user_id,
            answered: AnsweredFlag::Owned(AtomicBool::new(answered)),
        }
    }
}

#[serenity::async_trait]
impl InteractionResponder for InteractionHandle<'_> {
    fn user_id(&self) -> serenity::UserId {
        self.user_id
    }

    fn has_responded(&self) -> bool {
        self.answered.get()
    }

    async fn reply(
        &self,
        message: &RenderedMessage,
        format: AckFormat,
    ) -> Result<Option<serenity::MessageId>, AckError> {
        match format {
            AckFormat::Layout => {
                let layout = message.to_layout();
                self.http
                    .create_interaction_response(
                        self.id,
                        self.token,
                        &layout.as_response(),
                        Vec::new(),
                    )
                    .await?;
            }
            AckFormat::Embed => {
                let mut data = serenity::CreateInteractionResponseMessage::new()
                    .embed(message.to_embed())
                    .ephemeral(message.ephemeral);
                let rows = message.action_rows();
                if !rows.is_empty() {
                    data = data.components(rows);
                }

                self.http
                    .create_interaction_response(
                        self.id,
                        self.token,
                        &serenity::CreateInteractionResponse::Message(data),
                        Vec::new(),
                    )
                    .await?;
            }
        }

        self.answered.set();
        Ok(None)
    }

    async fn edit_reply(
        &self,
        message: &RenderedMessage,
        format: AckFormat,
    ) -> Result<Option<serenity::MessageId>, AckError> {
        let edited = match format {
            AckFormat::Layout => {
                self.http
                    .edit_original_interaction_response(
                        self.token,
                        &message.to_layout().for_edit(),
                        Vec::new(),
                    )
                    .await?
            }
            AckFormat::Embed => {
                let mut builder =
                    serenity::EditInteractionResponse::new().embed(message.to_embed());
                let rows = message.action_rows();
                if !rows.is_empty() {
                    builder = builder.components(rows);
                }

                self.http
                    .edit_original_interaction_response(self.token, &builder, Vec::new())
                    .await?
            }
        };

        Ok(Some(edited.id))
    }

    async fn follow_up(
        &self,
        message: &RenderedMessage,
        format: AckFormat,
    ) -> Result<Option<serenity::MessageId>, AckError> {
        let sent = match format {
            AckFormat::Layout => {
                self.http
                    .create_followup_message(self.token, &message.to_layout(), Vec::new())
                    .await?
            }
            AckFormat::Embed => {
                let mut builder = serenity::CreateInteractionResponseFollowup::new()
                    .embed(message.to_embed())
                    .ephemeral(message.ephemeral);
                let rows = message.action_rows();
                if !rows.is_empty() {
                    builder = builder.components(rows);
                }

                self.http
                    .create_followup_message(self.token, &builder, Vec::new())
                    .await?
            }
        };

        Ok(Some(sent.id))
    }
}

#[serenity::async_trait]
impl ChannelDirectory for serenity::Context {
    fn guild_has_channel(
        &self,
        guild_id: serenity::GuildId,
        channel_id: serenity::ChannelId,
    ) -> bool {
        self.cache
            .guild(guild_id)
            .is_some_and(|guild| guild.channels.contains_key(&channel_id))
    }

    async fn post(
        &self,
        channel_id: serenity::ChannelId,
        message: &RenderedMessage,
    ) -> Result<serenity::MessageId, AckError> {
        let mut builder = serenity::CreateMessage::new().embed(message.to_embed());
        let rows = message.action_rows();
        if !rows.is_empty() {
            builder = builder.components(rows);
        }

        let sent = channel_id.send_message(self, builder).await?;
        Ok(sent.id)
    }
}

fn first_embed_description(message: &serenity::Message) -> Option<&str> {
    message
        .embeds
        .first()
        .and_then(|embed| embed.description.as_deref())
}

async fn rewrite_first_embed(
    http: &serenity::Http,
    message: &serenity::Message,
    description: &str,
) -> Result<(), AckError> {
    let embed = message.embeds.first().cloned().ok_or(AckError::MissingEmbed)?;
    let embed = serenity::CreateEmbed::from(embed).description(description);

    message
        .channel_id
        .edit_message(http, message.id, serenity::EditMessage::new().embed(embed))
        .await?;

    Ok(())
}

async fn respond(
    http: &serenity::Http,
    id: serenity::InteractionId,
    token: &str,
    response: serenity::CreateInteractionResponse,
) -> Result<(), AckError> {
    http.create_interaction_response(id, token, &response, Vec::new())
        .await?;
    Ok(())
}

fn ephemeral_notice(content: &str) -> serenity::CreateInteractionResponse {
    serenity::CreateInteractionResponse::Message(
        serenity::CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(true),
    )
}

/// A button click on an acknowledgement message.
pub struct ButtonPress<'a> {
    http: &'a serenity::Http,
    interaction: &'a serenity::ComponentInteraction,
}

impl<'a> ButtonPress<'a> {
    pub fn new(http: &'a serenity::Http, interaction: &'a serenity::ComponentInteraction) -> Self {
        Self { http, interaction }
    }
}

#[serenity::async_trait]
impl ReasonInteraction for ButtonPress<'_> {
    fn kind(&self) -> InteractionKind {
        match self.interaction.data.kind {
            serenity::ComponentInteractionDataKind::Button => InteractionKind::Button,
            _ => InteractionKind::Other,
        }
    }

    fn custom_id(&self) -> &str {
        &self.interaction.data.custom_id
    }

    fn source_description(&self) -> Option<&str> {
        first_embed_description(&self.interaction.message)
    }

    fn text_input(&self, _input_id: &str) -> Option<String> {
        None
    }

    async fn show_reason_form(&self, form: &ReasonForm) -> Result<(), AckError> {
        respond(
            self.http,
            self.interaction.id,
            &self.interaction.token,
            serenity::CreateInteractionResponse::Modal(form.to_modal()),
        )
        .await
    }

    async fn rewrite_description(&self, description: &str) -> Result<(), AckError> {
        rewrite_first_embed(self.http, &self.interaction.message, description).await
    }

    async fn reply_ephemeral(&self, content: &str) -> Result<(), AckError> {
        respond(
            self.http,
            self.interaction.id,
            &self.interaction.token,
            ephemeral_notice(content),
        )
        .await
    }
}

/// A submitted reason form.
pub struct ReasonSubmission<'a> {
    http: &'a serenity::Http,
    interaction: &'a serenity::ModalInteraction,
}

impl<'a> ReasonSubmission<'a> {
    pub fn new(http: &'a serenity::Http, interaction: &'a serenity::ModalInteraction) -> Self {
        Self { http, interaction }
    }
}

#[serenity::async_trait]
impl ReasonInteraction for ReasonSubmission<'_> {
    fn kind(&self) -> InteractionKind {
        InteractionKind::ModalSubmit
    }

    fn custom_id(&self) -> &str {
        &self.interaction.data.custom_id
    }

    fn source_description(&self) -> Option<&str> {
        self.interaction
            .message
            .as_deref()
            .and_then(first_embed_description)
    }

    fn text_input(&self, input_id: &str) -> Option<String> {
        self.interaction
            .data
            .components
            .iter()
            .flat_map(|row| row.components.iter())
            .find_map(|component| match component {
                serenity::ActionRowComponent::InputText(input) if input.custom_id == input_id => {
                    input.value.clone()
                }
                _ => None,
            })
    }

    async fn show_reason_form(&self, form: &ReasonForm) -> Result<(), AckError> {
        respond(
            self.http,
            self.interaction.id,
            &self.interaction.token,
            serenity::CreateInteractionResponse::Modal(form.to_modal()),
        )
        .await
    }

    async fn rewrite_description(&self, description: &str) -> Result<(), AckError> {
        let message = self
            .interaction
            .message
            .as_deref()
            .ok_or(AckError::MissingEmbed)?;
        rewrite_first_embed(self.http, message, description).await
    }

    async fn reply_ephemeral(&self, content: &str) -> Result<(), AckError> {
        respond(
            self.http,
            self.interaction.id,
            &self.interaction.token,
            ephemeral_notice(content),
        )
        .await
    }
}
