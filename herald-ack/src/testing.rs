//! Recording fakes for the platform traits.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use poise::serenity_prelude as serenity;

use crate::error::AckError;
use crate::interaction::{InteractionKind, ReasonInteraction};
use crate::reason::ReasonForm;
use crate::render::{AckFormat, RenderedMessage};
use crate::target::{ChannelDirectory, InteractionResponder};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseKind {
    Reply,
    EditReply,
    FollowUp,
}

#[derive(Clone, Debug)]
pub struct RecordedResponse {
    pub kind: ResponseKind,
    pub format: AckFormat,
    pub message: RenderedMessage,
    pub delivered: bool,
}

pub struct MockResponder {
    pub user_id: serenity::UserId,
    pub responded: AtomicBool,
    pub reject_layout: bool,
    pub reject_all: bool,
    pub responses: Arc<Mutex<Vec<RecordedResponse>>>,
}

impl MockResponder {
    pub fn new(user_id: u64) -> Self {
        Self {
            user_id: serenity::UserId::new(user_id),
            responded: AtomicBool::new(false),
            reject_layout: false,
            reject_all: false,
            responses: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn answered(self) -> Self {
        self.responded.store(true, Ordering::SeqCst);
        self
    }

    pub fn rejecting_layout(mut self) -> Self {
        self.reject_layout = true;
        self
    }

    pub fn rejecting_all(mut self) -> Self {
        self.reject_all = true;
        self
    }

    fn record(
        &self,
        kind: ResponseKind,
        message: &RenderedMessage,
        format: AckFormat,
    ) -> Result<Option<serenity::MessageId>, AckError> {
        let delivered =
            !(self.reject_all || (self.reject_layout && format == AckFormat::Layout));

        self.responses.lock().unwrap().push(RecordedResponse {
            kind,
            format,
            message: message.clone(),
            delivered,
        });

        if !delivered {
            return Err(AckError::Platform(serenity::Error::Other("rejected by mock")));
        }

        if kind == ResponseKind::Reply {
            self.responded.store(true, Ordering::SeqCst);
            return Ok(None);
        }

        Ok(Some(serenity::MessageId::new(500)))
    }
}

#[serenity::async_trait]
impl InteractionResponder for MockResponder {
    fn user_id(&self) -> serenity::UserId {
        self.user_id
    }

    fn has_responded(&self) -> bool {
        self.responded.load(Ordering::SeqCst)
    }

    async fn reply(
        &self,
        message: &RenderedMessage,
        format: AckFormat,
    ) -> Result<Option<serenity::MessageId>, AckError> {
        self.record(ResponseKind::Reply, message, format)
    }

    async fn edit_reply(
        &self,
        message: &RenderedMessage,
        format: AckFormat,
    ) -> Result<Option<serenity::MessageId>, AckError> {
        self.record(ResponseKind::EditReply, message, format)
    }

    async fn follow_up(
        &self,
        message: &RenderedMessage,
        format: AckFormat,
    ) -> Result<Option<serenity::MessageId>, AckError> {
        self.record(ResponseKind::FollowUp, message, format)
    }
}

#[derive(Default)]
pub struct MockChannels {
    pub known: Vec<(serenity::GuildId, serenity::ChannelId)>,
    pub reject_posts: bool,
    pub posts: Arc<Mutex<Vec<(serenity::ChannelId, RenderedMessage)>>>,
}

impl MockChannels {
    pub fn with_channel(guild_id: u64, channel_id: u64) -> Self {
        Self {
            known: vec![(
                serenity::GuildId::new(guild_id),
                serenity::ChannelId::new(channel_id),
            )],
            ..Self::default()
        }
    }

    pub fn rejecting_posts(mut self) -> Self {
        self.reject_posts = true;
        self
    }
}

#[serenity::async_trait]
impl ChannelDirectory for MockChannels {
    fn guild_has_channel(
        &self,
        guild_id: serenity::GuildId,
        channel_id: serenity::ChannelId,
    ) -> bool {
        self.known.contains(&(guild_id, channel_id))
    }

    async fn post(
        &self,
        channel_id: serenity::ChannelId,
        message: &RenderedMessage,
    ) -> Result<serenity::MessageId, AckError> {
        if self.reject_posts {
            return Err(AckError::Platform(serenity::Error::Other("post rejected by mock")));
        }

        let mut posts = self.posts.lock().unwrap();
        posts.push((channel_id, message.clone()));
        Ok(serenity::MessageId::new(1000 + posts.len() as u64))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReasonCall {
    ShowForm(ReasonForm),
    Rewrite(String),
    ReplyEphemeral(String),
}

pub struct MockReasonInteraction {
    pub kind: InteractionKind,
    pub custom_id: String,
    pub description: Option<String>,
    pub input: Option<String>,
    pub reject_rewrite: bool,
    pub calls: Arc<Mutex<Vec<ReasonCall>>>,
}

impl MockReasonInteraction {
    pub fn new(kind: InteractionKind, custom_id: &str) -> Self {
        Self {
            kind,
            custom_id: custom_id.to_owned(),
            description: None,
            input: None,
            reject_rewrite: false,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_owned());
        self
    }

    pub fn input(mut self, input: &str) -> Self {
        self.input = Some(input.to_owned());
        self
    }

    pub fn rejecting_rewrite(mut self) -> Self {
        self.reject_rewrite = true;
        self
    }

    pub fn calls(&self) -> Vec<ReasonCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[serenity::async_trait]
impl ReasonInteraction for MockReasonInteraction {
    fn kind(&self) -> InteractionKind {
        self.kind
    }

    fn custom_id(&self) -> &str {
        &self.custom_id
    }

    fn source_description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn text_input(&self, input_id: &str) -> Option<String> {
        if input_id == crate::reason::REASON_INPUT_ID {
            self.input.clone()
        } else {
            None
        }
    }

    async fn show_reason_form(&self, form: &ReasonForm) -> Result<(), AckError> {
        self.calls
            .lock()
            .unwrap()
            .push(ReasonCall::ShowForm(form.clone()));
        Ok(())
    }

    async fn rewrite_description(&self, description: &str) -> Result<(), AckError> {
        if self.reject_rewrite {
            return Err(AckError::Platform(serenity::Error::Other("edit rejected by mock")));
        }

        self.calls
            .lock()
            .unwrap()
            .push(ReasonCall::Rewrite(description.to_owned()));
        Ok(())
    }

    async fn reply_ephemeral(&self, content: &str) -> Result<(), AckError> {
        self.calls
            .lock()
            .unwrap()
            .push(ReasonCall::ReplyEphemeral(content.to_owned()));
        Ok(())
    }
}
