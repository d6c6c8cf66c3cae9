use std::sync::Arc;

use tracing::info;

use courier_schedule::{DailySchedule, DailyScheduler, PostDispatcher};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "courier_daily=info,courier_schedule=info,courier_feed=info".into()
            }),
        )
        .init();

    // Config: explicit path via COURIER_CONFIG, else ./courier.toml.
    let config_path = std::env::var("COURIER_CONFIG").ok();
    let config = courier_core::CourierConfig::load(config_path.as_deref())?;
    let daily = config
        .daily
        .clone()
        .ok_or_else(|| anyhow::anyhow!("missing [daily] section in courier.toml"))?;

    // All schedule validation happens before any network work.
    let schedule = DailySchedule::parse(&daily.time, &daily.timezone)?;

    // One fetch at startup; an unreachable or empty feed is fatal.
    let store = courier_feed::load_messages(&daily).await?;
    info!(messages = store.len(), schedule = %schedule, "daily poster ready");

    let sender = Arc::new(courier_discord::ChannelSender::new(
        &config.discord.token,
        daily.channel,
    ));
    let dispatcher = PostDispatcher::new(store, sender);
    let scheduler = DailyScheduler::new(schedule, dispatcher);

    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
    let task = tokio::spawn(scheduler.run(shutdown_rx));

    tokio::signal::ctrl_c().await?;
    info!("SIGINT received, shutting down");
    let _ = shutdown_tx.send(true);
    let _ = task.await;
    Ok(())
}
