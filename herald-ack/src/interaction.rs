use poise::serenity_prelude as serenity;

use crate::error::AckError;
use crate::reason::{REASON_MODAL_PREFIX, REASON_PREFIX, ReasonForm};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionKind {
    Button,
    ModalSubmit,
    Other,
}

/// What the router did with an interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionOutcome {
    Ignored,
    FormShown,
    ReasonUpdated,
    ReasonUpdateFailed,
    /// The response to the user could not be delivered.
    ResponseFailed,
}

/// An interaction that may belong to the reason-edit flow.
#[serenity::async_trait]
pub trait ReasonInteraction: Send + Sync {
    fn kind(&self) -> InteractionKind;

    fn custom_id(&self) -> &str;

    /// Description of the first embed on the message the interaction came from.
    fn source_description(&self) -> Option<&str>;

    /// Value of a submitted text input.
    fn text_input(&self, input_id: &str) -> Option<String>;

    async fn show_reason_form(&self, form: &ReasonForm) -> Result<(), AckError>;

    /// Replace the first embed's description on the source message, leaving
    /// its components untouched.
    async fn rewrite_description(&self, description: &str) -> Result<(), AckError>;

    async fn reply_ephemeral(&self, content: &str) -> Result<(), AckError>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Route<'a> {
    OpenForm { correlation_id: &'a str },
    SubmitReason,
    Ignore,
}

pub(crate) fn route(kind: InteractionKind, custom_id: &str) -> Route<'_> {
    match kind {
        InteractionKind::ModalSubmit if custom_id.starts_with(REASON_MODAL_PREFIX) => {
            Route::SubmitReason
        }
        InteractionKind::Button if !custom_id.starts_with(REASON_MODAL_PREFIX) => custom_id
            .strip_prefix(REASON_PREFIX)
            .map_or(Route::Ignore, |correlation_id| Route::OpenForm { correlation_id }),
        _ => Route::Ignore,
    }
}
