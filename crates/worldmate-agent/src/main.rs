//! Worldmate agent entry point.
//!
//! Binary name: `wmate`
//!
//! Loads the persona configuration, wires the completion client and the
//! turn engine together, and runs the chat loop for the lifetime of the
//! session. A local console stands in for the world chat channel: every
//! stdin line is published as a chat event. Ctrl-C or stdin EOF tears the
//! session down and unsubscribes the agent from the bus.

mod console;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use worldmate_core::agent::ConversationAgent;
use worldmate_core::chat::ChatBus;
use worldmate_infra::config::load_persona_config;
use worldmate_infra::llm::OpenAiChatClient;
use worldmate_types::chat::ChatEvent;

use console::ConsoleChat;

/// Sender identifier for chat lines typed on the local console.
const CONSOLE_SENDER: &str = "operator";

#[derive(Parser)]
#[command(name = "wmate", about = "In-world persona chat agent")]
struct Cli {
    /// Path to the persona configuration TOML file.
    #[arg(short, long, env = "WORLDMATE_CONFIG")]
    config: PathBuf,

    /// Override the completion endpoint base URL.
    #[arg(long)]
    base_url: Option<String>,

    /// Export spans via OpenTelemetry (stdout exporter).
    #[arg(long)]
    otel: bool,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity; RUST_LOG still wins when set.
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,worldmate_core=debug,worldmate_infra=debug",
        _ => "trace",
    };
    worldmate_observe::tracing_setup::init_tracing(filter, cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let persona = load_persona_config(&cli.config)
        .await
        .context("loading persona configuration")?;

    let mut client = OpenAiChatClient::new(persona.api_key.clone());
    if let Some(base_url) = cli.base_url {
        client = client.with_base_url(base_url);
    }

    let agent = Arc::new(ConversationAgent::new(persona, client, ConsoleChat));
    info!(persona = %agent.persona_name(), "agent ready; address it with @<name>");

    let bus = ChatBus::new(64);
    let receiver = bus.subscribe();
    let runner = {
        let agent = Arc::clone(&agent);
        tokio::spawn(async move { agent.run(receiver).await })
    };

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => match line? {
                Some(line) if !line.trim().is_empty() => {
                    bus.publish(ChatEvent::new(line, CONSOLE_SENDER));
                }
                Some(_) => {}
                None => break,
            },
            _ = tokio::signal::ctrl_c() => {
                info!("shutdown requested");
                break;
            }
        }
    }

    // Teardown: closing the bus unsubscribes the agent.
    drop(bus);
    runner.await?;
    worldmate_observe::tracing_setup::shutdown_tracing();
    Ok(())
}
