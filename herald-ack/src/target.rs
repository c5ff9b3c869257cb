use poise::serenity_prelude as serenity;

use crate::discord::InteractionHandle;
use crate::error::AckError;
use crate::render::{AckFormat, RenderedMessage};

/// Response surface of a Discord interaction.
#[serenity::async_trait]
pub trait InteractionResponder: Send + Sync {
    /// User who triggered the interaction.
    fn user_id(&self) -> serenity::UserId;

    /// Whether an initial response (reply or defer) was already sent.
    fn has_responded(&self) -> bool;

    async fn reply(
        &self,
        message: &RenderedMessage,
        format: AckFormat,
    ) -> Result<Option<serenity::MessageId>, AckError>;

    async fn edit_reply(
        &self,
        message: &RenderedMessage,
        format: AckFormat,
    ) -> Result<Option<serenity::MessageId>, AckError>;

    async fn follow_up(
        &self,
        message: &RenderedMessage,
        format: AckFormat,
    ) -> Result<Option<serenity::MessageId>, AckError>;
}

/// Guild channel lookup and plain channel posting.
#[serenity::async_trait]
pub trait ChannelDirectory: Send + Sync {
    /// Cached lookup only; never hits the API.
    fn guild_has_channel(
        &self,
        guild_id: serenity::GuildId,
        channel_id: serenity::ChannelId,
    ) -> bool;

    /// Post `message` as an embed with its button row.
    async fn post(
        &self,
        channel_id: serenity::ChannelId,
        message: &RenderedMessage,
    ) -> Result<serenity::MessageId, AckError>;
}

/// A plain channel message that triggered a prefix command.
pub struct MessageTarget<'a> {
    pub channels: &'a dyn ChannelDirectory,
    pub channel_id: serenity::ChannelId,
    pub author: serenity::UserId,
}

/// Where an acknowledgement goes, resolved once from whatever invoked it.
pub enum AckTarget<'a> {
    /// Slash or context-menu command.
    Command(Box<dyn InteractionResponder + 'a>),
    /// Button, select menu, or modal submission.
    Component(Box<dyn InteractionResponder + 'a>),
    Message(MessageTarget<'a>),
    /// Nothing to answer.
    Detached,
}

impl<'a> AckTarget<'a> {
    pub fn from_poise<U, E>(ctx: poise::Context<'a, U, E>) -> Self
    where
        U: Send + Sync,
        E: Send + Sync,
    {
        match ctx {
            poise::Context::Application(app) => {
                AckTarget::Command(Box::new(InteractionHandle::for_poise(app)))
            }
            poise::Context::Prefix(prefix) => AckTarget::Message(MessageTarget {
                channels: prefix.serenity_context,
                channel_id: prefix.msg.channel_id,
                author: prefix.msg.author.id,
            }),
        }
    }

    /// A button or select interaction. Pass `deferred` when the caller already
    /// acknowledged it, so the ack edits that response instead of replying.
    pub fn component(
        http: &'a serenity::Http,
        interaction: &'a serenity::ComponentInteraction,
        deferred: bool,
    ) -> Self {
        AckTarget::Component(Box::new(InteractionHandle::for_component(
            http,
            interaction,
            deferred,
        )))
    }

    pub fn modal(
        http: &'a serenity::Http,
        interaction: &'a serenity::ModalInteraction,
        deferred: bool,
    ) -> Self {
        AckTarget::Component(Box::new(InteractionHandle::for_modal(
            http,
            interaction,
            deferred,
        )))
    }

    /// User credited in the "Executed by" line.
    pub fn executor(&self) -> Option<serenity::UserId> {
        match self {
            AckTarget::Command(responder) | AckTarget::Component(responder) => {
                Some(responder.user_id())
            }
            AckTarget::Message(target) => Some(target.author),
            AckTarget::Detached => None,
        }
    }
}
