use poise::serenity_prelude as serenity;
use tracing::debug;

use herald_ack::InteractionOutcome;
use herald_core::Data;

/// Forward button clicks and modal submissions to the reason-edit flow.
pub async fn handle_interaction_reason(
    ctx: &serenity::Context,
    data: &Data,
    interaction: &serenity::Interaction,
) {
    let outcome = data.acks.handle_gateway_interaction(ctx, interaction).await;
    if outcome != InteractionOutcome::Ignored {
        debug!(?outcome, "reason interaction handled");
    }
}
