//! The `/post` slash command — registration and interaction handling.
//!
//! Registration happens in `ready()`. The command is guild-scoped so it
//! shows up immediately instead of waiting for global propagation; stale
//! global commands from earlier runs are cleared first.

use serenity::builder::{
    CreateCommand, CreateCommandOption, CreateInteractionResponse,
    CreateInteractionResponseMessage,
};
use serenity::model::application::{
    Command, CommandDataOptionValue, CommandInteraction, CommandOptionType,
};
use serenity::model::id::GuildId;
use serenity::prelude::Context;
use tracing::{info, warn};

use courier_core::config::RelayConfig;

/// Register the guild-scoped `/post` command. Call from `ready()`.
///
/// Failures are logged, not fatal: the gateway connection stays up and a
/// reconnect gets another chance to register.
pub async fn register_commands(ctx: &Context, guild_id: GuildId) {
    if let Err(e) = Command::set_global_commands(&ctx.http, vec![]).await {
        warn!(error = %e, "failed to clear global commands");
    }

    let post = CreateCommand::new("post")
        .description("Post something anonymously")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "text", "The text to post")
                .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Attachment,
                "file",
                "Optional file to attach",
            )
            .required(false),
        );

    match guild_id.set_commands(&ctx.http, vec![post]).await {
        Ok(cmds) => {
            info!(guild = %guild_id, count = cmds.len(), "registered guild slash commands");
        }
        Err(e) => warn!(guild = %guild_id, error = %e, "failed to register guild commands"),
    }
}

/// Dispatch a slash command interaction.
pub async fn handle_interaction(relay: &RelayConfig, ctx: &Context, command: &CommandInteraction) {
    let result = match command.data.name.as_str() {
        "post" => handle_post(relay, ctx, command).await,
        _ => {
            respond_ephemeral(ctx, command, "Unknown command.").await;
            Ok(())
        }
    };

    if let Err(e) = result {
        warn!(command = %command.data.name, error = %e, "slash command error");
    }
}

/// `/post text:String [file:Attachment]` — relay anonymously into the
/// invoking channel.
async fn handle_post(
    relay: &RelayConfig,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), serenity::Error> {
    let text = command
        .data
        .options
        .iter()
        .find(|o| o.name == "text")
        .and_then(|o| o.value.as_str())
        .unwrap_or("");

    let attachment = command
        .data
        .options
        .iter()
        .find(|o| o.name == "file")
        .and_then(|o| match &o.value {
            CommandDataOptionValue::Attachment(id) => command.data.resolved.attachments.get(id),
            _ => None,
        });

    // Operator-side audit trail; the relayed post itself carries no
    // attribution.
    info!(user = %command.user.name, user_id = %command.user.id, text, "relay request");

    // Acknowledge privately before the relay work so the interaction never
    // times out while an attachment downloads.
    respond_ephemeral(ctx, command, "Your post has been sent!").await;

    if let Err(e) = crate::relay::repost(relay, ctx, command.channel_id, text, attachment).await {
        warn!(error = %e, "relay failed");
    }
    Ok(())
}

/// Ephemeral response — only the invoker sees it.
async fn respond_ephemeral(ctx: &Context, command: &CommandInteraction, content: &str) {
    let _ = command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .content(content)
                    .ephemeral(true),
            ),
        )
        .await;
}
