//! coverscout CLI - resolve cover art and listen links from the terminal.

use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use coverscout::config;
use coverscout::resolver::{CoverResolver, links};

/// coverscout CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
enum Commands {
    /// Resolve a cover image, caption, and listen link
    Resolve {
        /// Artist name, free-form
        artist: String,
        /// Album title, free-form
        album: String,
        /// Per-request timeout in seconds (overrides the config file)
        #[arg(long)]
        timeout_secs: Option<u64>,
    },
    /// Print the search links without touching the network
    Links {
        /// Artist name, free-form
        artist: String,
        /// Album title, free-form
        album: String,
    },
    /// Single-shot iTunes artwork lookup, useful when a chosen cover fails to load
    Artwork {
        /// Artist name, free-form
        artist: String,
        /// Album title, free-form
        album: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env().add_directive("coverscout=info".parse()?))
        .init();

    let args = Cli::parse();
    let config = config::load();

    match args.command {
        Commands::Resolve {
            artist,
            album,
            timeout_secs,
        } => {
            let mut resolver_config = config.resolver_config();
            if let Some(secs) = timeout_secs {
                resolver_config.request_timeout = Duration::from_secs(secs);
            }

            let resolver = CoverResolver::new(&resolver_config);
            let cover = resolver.resolve(&artist, &album).await;

            println!("cover:    {}", cover.cover_url);
            println!("caption:  {}", cover.caption());
            println!("spotify:  {}", cover.spotify_url);
            println!(
                "youtube:  {}",
                links::youtube_music_search_url(&artist, &album)
            );
        }
        Commands::Links { artist, album } => {
            println!("spotify:  {}", links::spotify_search_url(&artist, &album));
            println!(
                "youtube:  {}",
                links::youtube_music_search_url(&artist, &album)
            );
        }
        Commands::Artwork { artist, album } => {
            let resolver = CoverResolver::new(&config.resolver_config());
            match resolver.fallback_artwork(&artist, &album).await {
                Some(url) => println!("{url}"),
                None => {
                    eprintln!("No artwork found for {artist} - {album}");
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
