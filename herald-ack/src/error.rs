use poise::serenity_prelude as serenity;

#[derive(Debug, thiserror::Error)]
pub enum AckError {
    #[error("discord request failed: {0}")]
    Platform(#[from] serenity::Error),

    #[error("acknowledgement channel {0} is not present in the guild")]
    ChannelNotFound(serenity::ChannelId),

    #[error("source message has no embed to edit")]
    MissingEmbed,

    #[error("modal submission has no `{0}` input")]
    MissingInput(&'static str),

    #[error("failed to encode layout payload: {0}")]
    Serialize(#[from] serde_json::Error),
}
