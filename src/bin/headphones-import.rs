mod commands;

use clap::{Parser, ValueEnum};
use commands::import::{handle_import, ImportArgs};
use std::path::PathBuf;

#[derive(ValueEnum, Clone, Copy, PartialEq, Eq)]
enum ColorChoice {
    Yes,
    No,
}

/// Collects albums from Spotify playlists and imports them to a Headphones server
#[derive(Parser)]
#[command(
    name = "headphones-import",
    about = "Collects albums from Spotify playlists and imports them to a Headphones server",
    after_help = "Playlists are CSV exports as produced by Exportify (https://exportify.net)."
)]
struct Cli {
    /// The base URL of Headphones, e.g. headphones:8181 or https://headphones.example.com.
    /// Falls back to HEADPHONES_URL, then to a prompt unless --yes is given.
    #[arg(long, short = 'u')]
    url: Option<String>,

    /// The Headphones API key. Falls back to HEADPHONES_API_KEY, then to a
    /// prompt unless --yes is given.
    #[arg(long, short = 'k')]
    api_key: Option<String>,

    /// Whether to color the output
    #[arg(long, value_enum, default_value_t = ColorChoice::Yes)]
    color: ColorChoice,

    /// Skip all prompts and import everything
    #[arg(long, short = 'y')]
    yes: bool,

    /// Skip prompts for each album. Assumed with --min-tracks
    #[arg(long, short = 'a')]
    yes_albums: bool,

    /// Queue all albums after adding them
    #[arg(long, short = 'q')]
    queue: bool,

    /// When queueing, only search lossless
    #[arg(long, short = 'l')]
    lossless: bool,

    /// Only add albums with at least this many of their songs in the playlists
    #[arg(long, short = 'm', default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    min_tracks: u64,

    /// Keep going with the next playlist when one cannot be read
    #[arg(long)]
    skip_errors: bool,

    /// Show detailed debug information
    #[arg(long)]
    verbose: bool,

    /// One or more paths to CSV playlist files
    #[arg(required = true, value_name = "PLAYLIST_CSV")]
    files: Vec<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let import_args = ImportArgs {
        url: args.url,
        api_key: args.api_key,
        color: args.color == ColorChoice::Yes,
        prompt: !args.yes,
        prompt_albums: !(args.yes || args.yes_albums),
        queue: args.queue,
        lossless: args.lossless,
        min_tracks: usize::try_from(args.min_tracks).unwrap_or(usize::MAX),
        skip_errors: args.skip_errors,
        files: args.files,
    };

    if let Err(e) = handle_import(import_args).await {
        eprintln!("❌ Import failed: {e}");
        std::process::exit(1);
    }

    Ok(())
}
