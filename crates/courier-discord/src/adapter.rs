use std::time::Duration;

use serenity::model::gateway::GatewayIntents;
use serenity::Client;
use tracing::{error, info, warn};

use courier_core::config::{DiscordConfig, RelayConfig};

use crate::handler::RelayHandler;

/// Relay-bot gateway adapter.
///
/// Wraps a serenity `Client` and drives the event loop until the process
/// exits, reconnecting with a flat pause whenever the gateway drops.
pub struct DiscordAdapter {
    discord: DiscordConfig,
    relay: RelayConfig,
}

impl DiscordAdapter {
    pub fn new(discord: DiscordConfig, relay: RelayConfig) -> Self {
        Self { discord, relay }
    }

    /// Connect to Discord and keep reconnecting. Never returns.
    pub async fn run(self) {
        let intents = GatewayIntents::non_privileged() | GatewayIntents::MESSAGE_CONTENT;

        loop {
            let mut client = loop {
                match self.build_client(intents).await {
                    Ok(c) => break c,
                    Err(e) => {
                        error!("Discord: client build failed ({e}), retrying in 30s");
                        tokio::time::sleep(Duration::from_secs(30)).await;
                    }
                }
            };

            info!("Discord: gateway connecting");
            if let Err(e) = client.start().await {
                warn!("Discord: gateway error ({e}), reconnecting in 5s");
            } else {
                info!("Discord: gateway stopped cleanly, reconnecting in 5s");
            }
            tokio::time::sleep(Duration::from_secs(5)).await;
        }
    }

    /// Build a fresh serenity `Client` with the relay event handler.
    async fn build_client(&self, intents: GatewayIntents) -> Result<Client, serenity::Error> {
        let handler = RelayHandler {
            relay: self.relay.clone(),
        };

        Client::builder(&self.discord.token, intents)
            .event_handler(handler)
            .await
    }
}
