//! CLI tool to show a feed message in the terminal.
//!
//! Usage:
//!   feed-show 42
//!   feed-show --list
//!   feed-show --file saved.json
//!
//! Defaults come from the `P2PSTORE_*` environment variables.

use clap::Parser;
use p2p_feed::config::KEY_INITIAL_MSG_ID;
use p2p_feed::{
    Endpoint, FeedConfig, FeedError, FeedMessage, MessageClient, decode_message, render_text,
};
use std::fs;
use std::io::{self, Write};
use std::process;
use tracing_subscriber::EnvFilter;

/// Fetch a message from the marketplace feed and print it.
#[derive(Parser)]
#[command(name = "feed-show")]
struct Cli {
    /// Message id (default: P2PSTORE_INITIAL_MSG_ID or 0)
    msg_id: Option<i64>,

    /// API origin, e.g. http://localhost:8001
    #[arg(long)]
    base_url: Option<String>,

    /// Chat identifier, e.g. @bitcoinp2pmarketplace
    #[arg(long)]
    chat: Option<String>,

    /// Render a saved response body instead of fetching
    #[arg(short, long, conflicts_with = "list")]
    file: Option<String>,

    /// Print the ids offered by the chat
    #[arg(short, long)]
    list: bool,

    /// Print the decoded message as JSON
    #[arg(long)]
    json: bool,

    /// Log requests on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("feed-show: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), FeedError> {
    // The configured initial id only matters when no message was named
    let needs_initial_id = cli.msg_id.is_none() && cli.file.is_none() && !cli.list;
    let config = FeedConfig::from_lookup(|key| {
        if key == KEY_INITIAL_MSG_ID && !needs_initial_id {
            return None;
        }
        std::env::var(key).ok()
    })?;
    let msg_id = cli.msg_id.unwrap_or(config.initial_msg_id);

    if let Some(path) = &cli.file {
        let body = fs::read_to_string(path).map_err(|e| FeedError::Io {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        return print_message(&decode_message(&body)?, cli.json);
    }

    let endpoint = Endpoint::new(
        cli.base_url
            .as_deref()
            .unwrap_or(config.endpoint.base_url()),
        cli.chat.as_deref().unwrap_or(config.endpoint.chat()),
    )?;
    let client = MessageClient::new(endpoint)?;

    if cli.list {
        let offers = client.fetch_offers()?;
        let listing: String = offers.ids().iter().map(|id| format!("{id}\n")).collect();
        return write_out(&listing);
    }

    print_message(&client.fetch_message(msg_id)?, cli.json)
}

fn print_message(msg: &FeedMessage, json: bool) -> Result<(), FeedError> {
    if json {
        let text = serde_json::to_string_pretty(msg)?;
        write_out(&format!("{text}\n"))
    } else {
        write_out(&render_text(msg))
    }
}

fn write_out(text: &str) -> Result<(), FeedError> {
    io::stdout()
        .write_all(text.as_bytes())
        .map_err(|e| FeedError::Io {
            path: "(stdout)".to_string(),
            reason: e.to_string(),
        })
}
