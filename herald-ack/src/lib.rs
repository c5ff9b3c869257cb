//! Moderation acknowledgements: rendering, dispatch, and the editable reason
//! round-trip for messages the bot posts after a moderation action.

pub mod config;
pub mod discord;
mod error;
pub mod interaction;
pub mod layout;
pub mod reason;
pub mod render;
mod service;
pub mod target;

#[cfg(test)]
mod testing;

pub use config::AckConfig;
pub use error::AckError;
pub use interaction::{InteractionKind, InteractionOutcome, ReasonInteraction};
pub use render::{AckButton, AckFormat, AckOptions, RenderedMessage, UnbanSubject};
pub use service::{AcknowledgementService, Delivery};
pub use target::{AckTarget, ChannelDirectory, InteractionResponder, MessageTarget};
