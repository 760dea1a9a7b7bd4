use super::terminal::{TerminalConfirmer, TerminalReporter};
use headphones_import::{
    FilterConfig, HeadphonesClient, ImportOptions, Importer, Reporter, ServerConfig,
};
use std::path::PathBuf;

/// Everything the import command needs, already decoded from the command line.
pub struct ImportArgs {
    pub url: Option<String>,
    pub api_key: Option<String>,
    pub color: bool,
    /// Ask before starting and for missing settings.
    pub prompt: bool,
    /// Ask about each album.
    pub prompt_albums: bool,
    pub queue: bool,
    pub lossless: bool,
    pub min_tracks: usize,
    pub skip_errors: bool,
    pub files: Vec<PathBuf>,
}

/// Resolve the server settings, then run the import against Headphones.
pub async fn handle_import(args: ImportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let reporter = TerminalReporter::new(args.color);
    let confirmer = TerminalConfirmer::new(args.prompt);

    let config = ServerConfig::resolve(args.url, args.api_key, &confirmer)?;
    log::info!("Using Headphones at {}", config.url);

    let http_client = http_client::native::NativeClient::new();
    let catalog = HeadphonesClient::new(Box::new(http_client), &config);

    let options = ImportOptions {
        queue: args.queue,
        lossless: args.lossless,
        filter: FilterConfig {
            min_tracks: args.min_tracks,
            confirm_albums: args.prompt_albums,
        },
        skip_errors: args.skip_errors,
    };

    let importer = Importer::new(&catalog, &reporter, &confirmer);
    let report = importer.run(&args.files, &options).await?;

    if report.summary.to_add_count == 0 {
        reporter.warn("No albums were selected for import.");
    }

    Ok(())
}
