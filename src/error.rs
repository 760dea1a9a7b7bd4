use thiserror::Error;

/// Error types for playlist loading and Headphones operations.
///
/// Only source-level errors can end a run. Catalog failures are caught by the
/// workflow and recorded on the album they belong to, so a caller of
/// [`Importer::run`](crate::Importer::run) only sees playlist errors (when it
/// has not asked to skip bad playlists) or [`ImportError::Cancelled`].
///
/// # Error Handling Examples
///
/// ```rust,no_run
/// use headphones_import::{ImportError, PlaylistAggregator};
///
/// let mut aggregator = PlaylistAggregator::new();
/// match aggregator.add_source("all.csv", std::io::stdin()) {
///     Ok(rows) => println!("Read {rows} rows"),
///     Err(ImportError::MalformedRecord { playlist, message }) => {
///         eprintln!("Playlist {playlist} is not an Exportify export: {message}");
///     }
///     Err(e) => eprintln!("Other error: {e}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum ImportError {
    /// HTTP/network related errors.
    ///
    /// Connection failures and non-success status codes from the Headphones
    /// API both end up here. Calls are never retried.
    #[error("HTTP error: {0}")]
    Transport(String),

    /// Failed to parse a Headphones response.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// A playlist row is missing one of the required columns or cannot be
    /// decoded as a record.
    #[error("Incorrectly formatted playlist in '{playlist}': {message}")]
    MalformedRecord {
        /// Name of the playlist the row came from
        playlist: String,
        /// Description of what was wrong with the row
        message: String,
    },

    /// A playlist file could not be opened or read.
    #[error("Could not load playlist '{playlist}': {error}")]
    SourceUnavailable {
        /// Name of the playlist that failed
        playlist: String,
        /// Underlying I/O failure
        #[source]
        error: std::io::Error,
    },

    /// A required configuration value was missing and prompting is disabled.
    #[error("Required value: {0}")]
    MissingValue(String),

    /// The operator declined to continue with the import.
    #[error("Import cancelled")]
    Cancelled,

    /// Terminal or other I/O errors outside of playlist reading.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
