//! `courier-core` — configuration, error taxonomy and message types shared
//! by both Courier binaries.
//!
//! Nothing in here talks to the network. The relay bot and the daily poster
//! each build their own state from these pieces at startup; there is no
//! process-global state anywhere in the workspace.

pub mod config;
pub mod error;
pub mod store;

pub use config::CourierConfig;
pub use error::{CourierError, Result};
pub use store::{Message, MessageStore};
