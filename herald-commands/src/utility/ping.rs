use herald_ack::AckOptions;
use herald_core::{Context, Error};

use crate::CommandMeta;
use crate::moderation::acknowledgement::acknowledge;

pub const META: CommandMeta = CommandMeta {
    name: "ping",
    desc: "Replies with Pong!",
    category: "utility",
    usage: "!ping",
};

#[poise::command(prefix_command, slash_command, category = "Utility")]
pub async fn ping(ctx: Context<'_>) -> Result<(), Error> {
    acknowledge(ctx, "Pong!", AckOptions::default().ephemeral()).await
}
