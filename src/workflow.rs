use crate::{find_album_id, Album, AlbumStatus, Catalog, MatchOutcome, Reporter};

/// Options for the remote part of an import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkflowOptions {
    /// Queue each album after it has been added.
    pub queue: bool,
    /// Ask the catalog to only look for lossless releases when queueing.
    pub lossless: bool,
}

/// Drives albums through search, add and (optionally) queue.
///
/// Albums are processed one at a time and each one ends with a status on the
/// album itself. A failed call stops work on that album only; the next album
/// is processed as usual. Nothing is retried.
///
/// # Examples
///
/// ```rust,no_run
/// use headphones_import::{Album, HeadphonesClient, ImportWorkflow, LogReporter, WorkflowOptions};
///
/// # tokio_test::block_on(async {
/// let catalog = HeadphonesClient::with_base_url(
///     Box::new(http_client::native::NativeClient::new()),
///     "http://headphones:8181".to_string(),
///     "api-key".to_string(),
/// );
/// let options = WorkflowOptions { queue: true, lossless: false };
/// let workflow = ImportWorkflow::new(&catalog, &LogReporter, options);
///
/// let mut albums = vec![Album::new("In Rainbows", "Radiohead", "2007-10-10")];
/// workflow.run(albums.iter_mut()).await;
/// println!("{}", albums[0].status());
/// # });
/// ```
pub struct ImportWorkflow<'a, C: Catalog + ?Sized> {
    catalog: &'a C,
    reporter: &'a dyn Reporter,
    options: WorkflowOptions,
}

impl<'a, C: Catalog + ?Sized> ImportWorkflow<'a, C> {
    pub fn new(catalog: &'a C, reporter: &'a dyn Reporter, options: WorkflowOptions) -> Self {
        Self {
            catalog,
            reporter,
            options,
        }
    }

    /// Process every album in order. Returns how many albums were processed.
    pub async fn run<'b>(&self, albums: impl IntoIterator<Item = &'b mut Album>) -> usize {
        let mut processed = 0;
        for album in albums {
            self.process_album(album).await;
            processed += 1;
        }
        processed
    }

    /// Take one album as far through the workflow as it will go. Albums that
    /// already have an outcome are left alone.
    pub async fn process_album(&self, album: &mut Album) {
        if *album.status() != AlbumStatus::Pending {
            log::debug!("Not processing '{}': already {}", album, album.status());
            return;
        }

        let Some(catalog_id) = self.search(album).await else {
            return;
        };

        self.reporter.info(&format!("Adding album {album}..."));
        if let Err(e) = self.catalog.add(&catalog_id).await {
            self.reporter
                .error(&format!("Error. While adding {album} to headphones: {e}"));
            album.set_status(AlbumStatus::AddFailed(e.to_string()));
            return;
        }
        album.set_status(AlbumStatus::Added);
        self.reporter.success("Added!");

        if !self.options.queue {
            return;
        }

        self.reporter.info("Queueing album");
        if let Err(e) = self
            .catalog
            .queue(&catalog_id, self.options.lossless)
            .await
        {
            self.reporter
                .error(&format!("Error. While queueing {album} to headphones: {e}"));
            album.set_status(AlbumStatus::QueueFailed(e.to_string()));
            return;
        }
        album.set_status(AlbumStatus::Queued);
        self.reporter.success("Queued!");
    }

    /// Search the catalog and record the matched id on the album. Returns
    /// `None` after recording a failure status.
    async fn search(&self, album: &mut Album) -> Option<String> {
        let query = album.to_string();

        let candidates = match self.catalog.search(&query).await {
            Ok(candidates) => candidates,
            Err(e) => {
                self.reporter.error(&format!(
                    "Error. While searching musicbrainz for {album}: {e}"
                ));
                album.set_status(AlbumStatus::SearchFailed(e.to_string()));
                return None;
            }
        };

        match find_album_id(album, &candidates) {
            MatchOutcome::Found(catalog_id) => {
                album.set_catalog_id(catalog_id.clone());
                self.reporter.success(&format!(
                    "Mapped {album} to album ID: {catalog_id}"
                ));
                Some(catalog_id)
            }
            MatchOutcome::NotFound { considered } => {
                self.reporter.warn(&format!(
                    "Warning. Album '{query}' not found after searching {considered} possible matches."
                ));
                album.set_status(AlbumStatus::NotFound);
                None
            }
        }
    }
}
