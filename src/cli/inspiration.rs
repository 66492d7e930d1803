//! Inspiration search and proxy server commands
//!
//! These are the only commands that need an async runtime; each builds its
//! own so the rest of the CLI stays synchronous.

use std::sync::Arc;

use clap::{Args, Subcommand};
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

use crate::config::settings::Settings;
use crate::display::format_search_results;
use crate::error::WedplanResult;
use crate::inspiration::server::{self, ServerConfig};
use crate::inspiration::{PinterestClient, SearchResults};
use crate::services::{AddItemInput, MoodboardService};
use crate::storage::Storage;

/// Inspiration subcommands
#[derive(Subcommand)]
pub enum InspirationCommands {
    /// Search for wedding inspiration pins
    Search {
        /// What to look for, e.g. "rustic centerpieces"
        query: String,
        /// Page token from a previous search
        #[arg(long)]
        page: Option<String>,
        /// Print the raw JSON page
        #[arg(long)]
        json: bool,
        /// Pin every result to this moodboard
        #[arg(long)]
        save_to: Option<String>,
    },
}

/// Options for the search proxy
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Port to listen on (default from settings or WEDPLAN_PORT)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,
}

fn runtime() -> WedplanResult<Runtime> {
    Ok(Builder::new_multi_thread().enable_all().build()?)
}

/// Handle an inspiration command
pub fn handle_inspiration_command(
    storage: &Storage,
    settings: &Settings,
    cmd: InspirationCommands,
) -> WedplanResult<()> {
    match cmd {
        InspirationCommands::Search {
            query,
            page,
            json,
            save_to,
        } => {
            let client = PinterestClient::from_settings(&settings.search)?;
            let results = runtime()?.block_on(client.search(&query, page.as_deref()))?;
            debug!(pins = results.pins.len(), mock = results.is_mock, "Search finished");

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                print!("{}", format_search_results(&results));
            }

            if let Some(board) = save_to {
                let saved = save_pins(storage, &board, &query, &results)?;
                println!("Saved {} pins to {}", saved, board);
            }
        }
    }

    Ok(())
}

/// Pin every result that has an image to `board`
fn save_pins(
    storage: &Storage,
    board: &str,
    query: &str,
    results: &SearchResults,
) -> WedplanResult<usize> {
    let service = MoodboardService::new(storage);
    let tag = query.trim().to_lowercase();

    let mut saved = 0;
    for pin in results.pins.iter().filter(|p| !p.image_url.is_empty()) {
        service.add_item(
            board,
            AddItemInput {
                image_url: pin.image_url.clone(),
                source_url: pin.link.clone(),
                tags: vec![tag.clone()],
                notes: Some(pin.title.clone()),
            },
        )?;
        saved += 1;
    }
    Ok(saved)
}

/// Run the search proxy until interrupted
pub fn handle_serve_command(settings: &Settings, args: ServeArgs) -> anyhow::Result<()> {
    let port = args.port.unwrap_or_else(|| settings.search.effective_port());
    let client = Arc::new(PinterestClient::from_settings(&settings.search)?);
    let config = ServerConfig::new(args.host, port);

    println!("Serving inspiration search on http://{}", config.socket_addr());
    println!("Press Ctrl+C to stop.");

    runtime()?.block_on(server::run(config, client))
}
