use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Attachment size cap for bots in unboosted guilds (8 MiB).
pub const DEFAULT_MAX_ATTACHMENT_BYTES: u64 = 8 * 1024 * 1024;

const DEFAULT_CONFIG_PATH: &str = "courier.toml";

/// Top-level config (courier.toml + COURIER_* env overrides).
///
/// The `[relay]` and `[daily]` sections are each required only by the binary
/// that uses them; a deployment running a single bot configures one section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourierConfig {
    pub discord: DiscordConfig,
    #[serde(default)]
    pub relay: Option<RelayConfig>,
    #[serde(default)]
    pub daily: Option<DailyConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscordConfig {
    /// Bot token. Env override: COURIER_DISCORD_TOKEN.
    pub token: String,
}

/// Settings for the `/post` relay bot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Guild the `/post` command is registered in.
    pub guild: u64,
    /// Attachments above this size are relayed as text only.
    #[serde(default = "default_max_attachment_bytes")]
    pub max_attachment_bytes: u64,
}

/// Settings for the daily feed poster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyConfig {
    /// Channel the daily pick is posted to.
    pub channel: u64,
    /// Wall-clock fire time, "HH:MM:SS".
    #[serde(default = "default_post_time")]
    pub time: String,
    /// IANA zone identifier the fire time is interpreted in.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// CSV feed location, fetched once at startup.
    pub feed: String,
    /// Rows scoring below this are dropped at load time.
    #[serde(default)]
    pub threshold: f64,
}

fn default_max_attachment_bytes() -> u64 {
    DEFAULT_MAX_ATTACHMENT_BYTES
}
fn default_post_time() -> String {
    "09:00:00".to_string()
}
fn default_timezone() -> String {
    "UTC".to_string()
}

impl CourierConfig {
    /// Load config from a TOML file with COURIER_* env var overrides.
    ///
    /// Malformed values are a startup-time fatal error: both binaries call
    /// this before touching the network and exit on failure.
    pub fn load(config_path: Option<&str>) -> crate::error::Result<Self> {
        let path = config_path.unwrap_or(DEFAULT_CONFIG_PATH);

        let config: CourierConfig = Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed("COURIER_").split("_"))
            .extract()
            .map_err(|e| crate::error::CourierError::Config(e.to_string()))?;

        Ok(config)
    }
}
