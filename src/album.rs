use crate::Track;
use chrono::{Datelike, NaiveDate};
use std::fmt;

/// Outcome of an album's trip through the filter chain and the import workflow.
///
/// Transitions only move forward:
///
/// ```text
/// Pending -> Skipped
///         -> SearchFailed | NotFound
///         -> AddFailed | Added -> QueueFailed | Queued
/// ```
///
/// The [`Display`](fmt::Display) form is what ends up in the final report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlbumStatus {
    /// Not yet filtered or processed.
    Pending,
    /// Rejected by the filter chain.
    Skipped,
    /// The catalog search call itself failed.
    SearchFailed(String),
    /// The search succeeded but no candidate matched the album.
    NotFound,
    /// The album was found but the add call failed.
    AddFailed(String),
    /// The album was added to the catalog.
    Added,
    /// The album was added but the queue call failed.
    QueueFailed(String),
    /// The album was added and queued for download.
    Queued,
}

impl AlbumStatus {
    /// Whether `next` is a legal successor of this status within one pass.
    pub fn can_advance_to(&self, next: &AlbumStatus) -> bool {
        match self {
            AlbumStatus::Pending => *next != AlbumStatus::Pending,
            AlbumStatus::Added => {
                matches!(next, AlbumStatus::Queued | AlbumStatus::QueueFailed(_))
            }
            _ => false,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(
            self,
            AlbumStatus::SearchFailed(_)
                | AlbumStatus::NotFound
                | AlbumStatus::AddFailed(_)
                | AlbumStatus::QueueFailed(_)
        )
    }
}

impl fmt::Display for AlbumStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlbumStatus::Pending => write!(f, "Pending"),
            AlbumStatus::Skipped => write!(f, "Skipped"),
            AlbumStatus::SearchFailed(detail) => write!(f, "Error: Could not find ID: {detail}"),
            AlbumStatus::NotFound => write!(f, "Error: Could not find album_id"),
            AlbumStatus::AddFailed(_) => write!(f, "Error: Not added"),
            AlbumStatus::Added => write!(f, "Added"),
            AlbumStatus::QueueFailed(_) => write!(f, "Error: Not queued"),
            AlbumStatus::Queued => write!(f, "Queued"),
        }
    }
}

/// An album assembled from one or more playlist rows.
///
/// Album-level metadata comes from the first row seen for the album; later
/// rows only contribute tracks.
///
/// # Examples
///
/// ```rust
/// use headphones_import::{Album, Track};
///
/// let mut album = Album::new("In Rainbows", "Radiohead", "2007-10-10");
/// album.add_track(Track::new("Reckoner", "Radiohead"));
///
/// assert_eq!(album.release_year, "2007");
/// assert_eq!(album.to_string(), "Radiohead - In Rainbows (2007)");
/// ```
#[derive(Debug, Clone)]
pub struct Album {
    pub name: String,
    pub artists: String,
    pub release_date: String,
    pub release_year: String,
    pub tracks: Vec<Track>,
    status: AlbumStatus,
    catalog_id: Option<String>,
}

impl Album {
    pub fn new(
        name: impl Into<String>,
        artists: impl Into<String>,
        release_date: impl Into<String>,
    ) -> Self {
        let release_date = release_date.into();
        let release_year = release_year_of(&release_date);

        Self {
            name: name.into(),
            artists: artists.into(),
            release_date,
            release_year,
            tracks: Vec::new(),
            status: AlbumStatus::Pending,
            catalog_id: None,
        }
    }

    pub fn add_track(&mut self, track: Track) {
        self.tracks.push(track);
    }

    pub fn status(&self) -> &AlbumStatus {
        &self.status
    }

    pub fn catalog_id(&self) -> Option<&str> {
        self.catalog_id.as_deref()
    }

    /// Move the album to `next`, refusing transitions that would revert a
    /// final outcome. Returns whether the status changed.
    pub fn set_status(&mut self, next: AlbumStatus) -> bool {
        if !self.status.can_advance_to(&next) {
            log::warn!(
                "Refusing status change for '{}': {} -> {}",
                self,
                self.status,
                next
            );
            return false;
        }

        log::debug!("Status of '{}': {} -> {}", self, self.status, next);
        self.status = next;
        true
    }

    /// Record the catalog id found by the search step. An id that is already
    /// set is never replaced.
    pub fn set_catalog_id(&mut self, catalog_id: impl Into<String>) -> bool {
        if self.catalog_id.is_some() {
            return false;
        }
        self.catalog_id = Some(catalog_id.into());
        true
    }
}

impl fmt::Display for Album {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} ({})",
            self.artists, self.name, self.release_year
        )
    }
}

/// ISO dates yield their year; anything else falls back to the first four
/// characters so partial dates like `"1997"` or `"1997-06"` still work.
fn release_year_of(release_date: &str) -> String {
    match NaiveDate::parse_from_str(release_date, "%Y-%m-%d") {
        Ok(date) => date.year().to_string(),
        Err(_) => release_date.chars().take(4).collect(),
    }
}
