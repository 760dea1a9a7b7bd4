//! Grouping exported playlist rows into albums.
//!
//! Playlists are Exportify CSV exports. Only six columns are read:
//!
//! | Column                 | Used for              |
//! |------------------------|-----------------------|
//! | `Track Name`           | track name            |
//! | `Artist Name(s)`       | track artist          |
//! | `Album Name`           | album name            |
//! | `Album Artist Name(s)` | album artists         |
//! | `Album Release Date`   | release date and year |
//! | `Album URI`            | aggregation key       |
//!
//! Rows are grouped by album URI rather than by artist and title so that
//! distinct releases sharing a name stay apart.

use crate::{Album, ImportError, Reporter, Result, Track};
use csv::StringRecord;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One row of an exported playlist.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlaylistRecord {
    #[serde(rename = "Track Name")]
    pub track_name: String,
    #[serde(rename = "Artist Name(s)")]
    pub artist_names: String,
    #[serde(rename = "Album Name")]
    pub album_name: String,
    #[serde(rename = "Album Artist Name(s)")]
    pub album_artist_names: String,
    #[serde(rename = "Album Release Date")]
    pub album_release_date: String,
    #[serde(rename = "Album URI")]
    pub album_uri: String,
}

/// Collects albums from any number of playlists, keeping the order in which
/// albums were first seen.
///
/// When several rows share an album URI but disagree on album metadata (a
/// corrupt export), the metadata of the first row is kept and later rows only
/// add their track.
///
/// # Examples
///
/// ```rust
/// use headphones_import::PlaylistAggregator;
///
/// let csv = "\
/// Track Name,Artist Name(s),Album Name,Album Artist Name(s),Album Release Date,Album URI
/// Airbag,Radiohead,OK Computer,Radiohead,1997-05-21,spotify:album:1
/// Lucky,Radiohead,OK Computer,Radiohead,1997-05-21,spotify:album:1
/// ";
///
/// let mut aggregator = PlaylistAggregator::new();
/// aggregator.add_source("liked.csv", csv.as_bytes())?;
///
/// let albums = aggregator.into_albums();
/// assert_eq!(albums.len(), 1);
/// assert_eq!(albums[0].tracks.len(), 2);
/// # Ok::<(), headphones_import::ImportError>(())
/// ```
#[derive(Debug, Default)]
pub struct PlaylistAggregator {
    albums: Vec<Album>,
    index: HashMap<String, usize>,
}

impl PlaylistAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one row, creating its album on first sight.
    pub fn add_record(&mut self, record: PlaylistRecord) {
        let position = match self.index.get(&record.album_uri) {
            Some(&position) => position,
            None => {
                let album = Album::new(
                    record.album_name,
                    record.album_artist_names,
                    record.album_release_date,
                );
                self.albums.push(album);
                let position = self.albums.len() - 1;
                self.index.insert(record.album_uri, position);
                position
            }
        };

        self.albums[position].add_track(Track::new(record.track_name, record.artist_names));
    }

    /// Read every row of one playlist. Returns the number of rows read.
    ///
    /// Rows read before a malformed row stay aggregated. Rows may be shorter
    /// or longer than the header as long as every required column is present.
    pub fn add_source<R: Read>(&mut self, playlist: &str, reader: R) -> Result<usize> {
        let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
        let headers = csv_reader
            .headers()
            .map_err(|e| record_error(playlist, e))?
            .clone();
        let mut rows = 0;

        for row in csv_reader.records() {
            let row = row.map_err(|e| record_error(playlist, e))?;
            // A short row only maps the columns it has, so a missing required
            // column surfaces as serde's missing field error.
            let record: PlaylistRecord = if row.len() < headers.len() {
                let present: StringRecord = headers.iter().take(row.len()).collect();
                row.deserialize(Some(&present))
            } else {
                row.deserialize(Some(&headers))
            }
            .map_err(|e| record_error(playlist, e))?;
            self.add_record(record);
            rows += 1;
        }

        log::debug!("Read {rows} rows from '{playlist}'");
        Ok(rows)
    }

    pub fn album_count(&self) -> usize {
        self.albums.len()
    }

    pub fn track_count(&self) -> usize {
        self.albums.iter().map(|album| album.tracks.len()).sum()
    }

    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    pub fn into_albums(self) -> Vec<Album> {
        self.albums
    }
}

fn record_error(playlist: &str, error: csv::Error) -> ImportError {
    let message = error.to_string();
    match error.into_kind() {
        csv::ErrorKind::Io(error) => ImportError::SourceUnavailable {
            playlist: playlist.to_string(),
            error,
        },
        _ => ImportError::MalformedRecord {
            playlist: playlist.to_string(),
            message,
        },
    }
}

/// Load and aggregate the playlists at `paths`, in order.
///
/// A playlist that cannot be opened or contains a malformed row is reported
/// as an error. With `skip_errors` the remaining playlists are still loaded,
/// otherwise the error is returned.
pub fn load_playlist_files<P: AsRef<Path>>(
    paths: &[P],
    skip_errors: bool,
    reporter: &dyn Reporter,
) -> Result<Vec<Album>> {
    let mut aggregator = PlaylistAggregator::new();

    for path in paths {
        let name = path.as_ref().display().to_string();
        reporter.info(&format!("Loading playlist file '{name}'..."));

        let result = File::open(path.as_ref())
            .map_err(|error| ImportError::SourceUnavailable {
                playlist: name.clone(),
                error,
            })
            .and_then(|file| aggregator.add_source(&name, file));

        if let Err(e) = result {
            reporter.error(&format!("Error. {e}"));
            if !skip_errors {
                return Err(e);
            }
        }
    }

    let names: Vec<String> = paths
        .iter()
        .map(|path| path.as_ref().display().to_string())
        .collect();
    reporter.info(&format!(
        "Loaded {} albums for {} songs from [{}]",
        aggregator.album_count(),
        aggregator.track_count(),
        names.join(", ")
    ));

    Ok(aggregator.into_albums())
}
