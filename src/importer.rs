use crate::{
    format_unordered_list, load_playlist_files, Album, AlbumFilterChain, AlbumStatus, Catalog,
    Confirmer, FilterConfig, ImportError, ImportOptions, ImportReport, ImportSummary,
    ImportWorkflow, Reporter, Result, WorkflowOptions,
};
use std::path::Path;

/// Runs a whole import: load playlists, pick albums, push them to the
/// catalog and summarize.
///
/// # Examples
///
/// ```rust,no_run
/// use headphones_import::{
///     Confirmer, HeadphonesClient, ImportOptions, Importer, LogReporter, Result, ServerConfig,
/// };
///
/// struct AlwaysYes;
///
/// impl Confirmer for AlwaysYes {
///     fn confirm(&self, _prompt: &str) -> bool {
///         true
///     }
///
///     fn prompt_value(&self, prompt: &str, _default: Option<&str>) -> Result<String> {
///         Err(headphones_import::ImportError::MissingValue(prompt.to_string()))
///     }
/// }
///
/// # tokio_test::block_on(async {
/// let config = ServerConfig::new("headphones:8181", "api-key");
/// let catalog = HeadphonesClient::new(
///     Box::new(http_client::native::NativeClient::new()),
///     &config,
/// );
///
/// let importer = Importer::new(&catalog, &LogReporter, &AlwaysYes);
/// let report = importer.run(&["liked.csv"], &ImportOptions::default()).await?;
/// println!("{}", report.summary);
/// # Ok::<(), headphones_import::ImportError>(())
/// # });
/// ```
pub struct Importer<'a, C: Catalog + ?Sized> {
    catalog: &'a C,
    reporter: &'a dyn Reporter,
    confirmer: &'a dyn Confirmer,
}

impl<'a, C: Catalog + ?Sized> Importer<'a, C> {
    pub fn new(catalog: &'a C, reporter: &'a dyn Reporter, confirmer: &'a dyn Confirmer) -> Self {
        Self {
            catalog,
            reporter,
            confirmer,
        }
    }

    /// Load the playlists at `files` and import the albums they contain.
    pub async fn run<P: AsRef<Path>>(
        &self,
        files: &[P],
        options: &ImportOptions,
    ) -> Result<ImportReport> {
        self.reporter.info(
            "Caution: This may take a very long time to complete, depending on your music library size.",
        );

        let names: Vec<String> = files
            .iter()
            .map(|file| file.as_ref().display().to_string())
            .collect();
        self.reporter
            .info(&format!("Loading {} playlist file(s):", files.len()));
        self.reporter.info(&format_unordered_list(&names, 0));

        let albums = load_playlist_files(files, options.skip_errors, self.reporter)?;
        self.import_albums(albums, options).await
    }

    /// Filter already aggregated albums and push the selected ones to the
    /// catalog.
    pub async fn import_albums(
        &self,
        mut albums: Vec<Album>,
        options: &ImportOptions,
    ) -> Result<ImportReport> {
        self.reporter.info("About to be performed:");
        self.reporter
            .info(&format!(" * Search for {} albums", albums.len()));
        if options.queue {
            self.reporter.info(" * Queue every album that is added");
        }

        if !self.confirmer.confirm("Continue? (y/n) ") {
            return Err(ImportError::Cancelled);
        }

        let to_add_count = self.select_albums(&mut albums, &options.filter);

        self.reporter.info("Searching musicbrainz for album IDs...");
        let workflow = ImportWorkflow::new(
            self.catalog,
            self.reporter,
            WorkflowOptions {
                queue: options.queue,
                lossless: options.lossless,
            },
        );
        workflow
            .run(
                albums
                    .iter_mut()
                    .filter(|album| *album.status() == AlbumStatus::Pending),
            )
            .await;

        let summary = ImportSummary::from_albums(&albums, to_add_count);
        summary.report(&albums, self.reporter);

        Ok(ImportReport { summary, albums })
    }

    /// List every album with its tracks and run it through the filter chain.
    /// Rejected albums are marked skipped. Returns the number selected.
    fn select_albums(&self, albums: &mut [Album], filter: &FilterConfig) -> usize {
        let chain = AlbumFilterChain::from_config(filter, self.confirmer);
        let mut selected = 0;

        self.reporter.info("Albums to search:");
        self.reporter.info("===========");
        for album in albums.iter_mut() {
            self.reporter.info(&album.to_string());
            self.reporter.info(" Tracks:");
            self.reporter.info(&format_unordered_list(&album.tracks, 0));

            if chain.evaluate(album) {
                self.reporter.success(" Will be added!");
                selected += 1;
            } else {
                self.reporter.info(" Will be skipped!");
                album.set_status(AlbumStatus::Skipped);
            }
        }
        self.reporter.info("===========");

        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{RecordingReporter, ScriptedConfirmer};
    use crate::{CatalogCandidate, MockCatalog, Track};

    fn album(name: &str, tracks: usize) -> Album {
        let mut album = Album::new(name, "Artist", "2000-01-01");
        for i in 0..tracks {
            album.add_track(Track::new(format!("Track {i}"), "Artist"));
        }
        album
    }

    #[tokio::test]
    async fn test_declining_to_continue_cancels() {
        let mut catalog = MockCatalog::new();
        catalog.expect_search().never();

        let reporter = RecordingReporter::default();
        let confirmer = ScriptedConfirmer::new(false);
        let importer = Importer::new(&catalog, &reporter, &confirmer);

        let result = importer
            .import_albums(vec![album("A", 1)], &ImportOptions::default())
            .await;

        assert!(matches!(result, Err(ImportError::Cancelled)));
    }

    #[tokio::test]
    async fn test_min_tracks_skips_small_albums() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_search()
            .times(1)
            .returning(|_| Ok(vec![CatalogCandidate::new("Big", "Artist", "mbid-big")]));
        catalog.expect_add().times(1).returning(|_| Ok(()));

        let reporter = RecordingReporter::default();
        let confirmer = ScriptedConfirmer::new(true);
        let importer = Importer::new(&catalog, &reporter, &confirmer);

        let mut options = ImportOptions::default();
        options.filter.min_tracks = 2;
        let report = importer
            .import_albums(vec![album("Small", 1), album("Big", 2)], &options)
            .await
            .unwrap();

        assert_eq!(report.albums[0].status(), &AlbumStatus::Skipped);
        assert_eq!(report.albums[1].status(), &AlbumStatus::Added);
        assert_eq!(
            report.summary,
            ImportSummary {
                queued: 0,
                added: 1,
                skipped: 1,
                to_add_count: 1,
                total: 2,
            }
        );
    }
}
