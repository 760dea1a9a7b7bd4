pub mod album;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod importer;
pub mod matcher;
pub mod playlist;
pub mod reporter;
pub mod summary;
pub mod track;
pub mod workflow;

#[cfg(test)]
mod test_support;

pub use album::{Album, AlbumStatus};
pub use catalog::{Catalog, CatalogCandidate, HeadphonesClient};
pub use config::{ImportOptions, ServerConfig};
pub use error::ImportError;
pub use filter::{AlbumFilter, AlbumFilterChain, ConfirmFilter, FilterConfig, MinTracksFilter};
pub use importer::Importer;
pub use matcher::{find_album_id, normalize, MatchOutcome};
pub use playlist::{load_playlist_files, PlaylistAggregator, PlaylistRecord};
pub use reporter::{format_unordered_list, Confirmer, LogReporter, Reporter, Severity};
pub use summary::{ImportReport, ImportSummary};
pub use track::Track;
pub use workflow::{ImportWorkflow, WorkflowOptions};

#[cfg(any(test, feature = "mock"))]
pub use catalog::MockCatalog;

pub type Result<T> = std::result::Result<T, ImportError>;
