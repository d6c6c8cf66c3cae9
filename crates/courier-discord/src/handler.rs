use serenity::async_trait;
use serenity::model::application::Interaction;
use serenity::model::gateway::Ready;
use serenity::model::id::GuildId;
use serenity::prelude::{Context, EventHandler};
use tracing::info;

use courier_core::config::RelayConfig;

/// Serenity event handler for the relay bot.
pub struct RelayHandler {
    pub relay: RelayConfig,
}

#[async_trait]
impl EventHandler for RelayHandler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(name = %ready.user.name, "Discord bot connected");
        crate::commands::register_commands(&ctx, GuildId::new(self.relay.guild)).await;
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        if let Interaction::Command(command) = interaction {
            crate::commands::handle_interaction(&self.relay, &ctx, &command).await;
        }
    }
}
