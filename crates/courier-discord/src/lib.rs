//! `courier-discord` — everything that touches Discord.
//!
//! The relay bot uses the full gateway path (`adapter` → `handler` →
//! `commands` → `relay`). The daily poster only needs the REST API, so it
//! gets [`ChannelSender`] and never opens a websocket.

pub mod adapter;
pub mod commands;
pub mod error;
pub mod handler;
pub mod relay;
pub mod send;
pub mod sender;

pub use adapter::DiscordAdapter;
pub use error::DiscordError;
pub use sender::ChannelSender;
