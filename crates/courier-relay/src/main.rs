use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "courier_relay=info,courier_discord=info".into()),
        )
        .init();

    // Config: explicit path via COURIER_CONFIG, else ./courier.toml.
    let config_path = std::env::var("COURIER_CONFIG").ok();
    let config = courier_core::CourierConfig::load(config_path.as_deref())?;
    let relay = config
        .relay
        .clone()
        .ok_or_else(|| anyhow::anyhow!("missing [relay] section in courier.toml"))?;

    info!(guild = relay.guild, "starting relay bot");

    // Never returns: the adapter reconnects until the process is killed.
    courier_discord::DiscordAdapter::new(config.discord, relay)
        .run()
        .await;
    Ok(())
}
