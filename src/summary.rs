use crate::{Album, AlbumStatus, Reporter, Severity};
use serde::Serialize;
use std::fmt;

/// Final tallies of an import run.
///
/// The counts are exact-state tallies: an album that was added but failed to
/// queue counts as neither `added` nor `queued`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub queued: usize,
    pub added: usize,
    pub skipped: usize,
    /// Albums that passed the filter chain.
    pub to_add_count: usize,
    pub total: usize,
}

impl ImportSummary {
    pub fn from_albums(albums: &[Album], to_add_count: usize) -> Self {
        let count = |status: AlbumStatus| albums.iter().filter(|a| *a.status() == status).count();

        Self {
            queued: count(AlbumStatus::Queued),
            added: count(AlbumStatus::Added),
            skipped: count(AlbumStatus::Skipped),
            to_add_count,
            total: albums.len(),
        }
    }

    /// Report the headline followed by one line per album.
    pub fn report(&self, albums: &[Album], reporter: &dyn Reporter) {
        reporter.info(&self.to_string());
        for album in albums {
            reporter.report(
                status_severity(album.status()),
                &format!("{album}: {}", album.status()),
            );
        }
    }
}

/// Outcome of a whole run: the tallies plus every album with its final status,
/// in the order the albums first appeared in the playlists.
#[derive(Debug, Clone)]
pub struct ImportReport {
    pub summary: ImportSummary,
    pub albums: Vec<Album>,
}

impl fmt::Display for ImportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Queued {} / Added {} / {} albums (skipped {} / {})",
            self.queued, self.added, self.to_add_count, self.skipped, self.total
        )
    }
}

pub fn status_severity(status: &AlbumStatus) -> Severity {
    match status {
        AlbumStatus::Added | AlbumStatus::Queued => Severity::Success,
        AlbumStatus::Skipped => Severity::Warning,
        _ => Severity::Error,
    }
}
