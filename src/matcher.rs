//! Deciding whether a catalog search result is the album we are looking for.
//!
//! Spotify and MusicBrainz format names differently ("AC/DC" vs "ACDC",
//! "Hits (Remastered)" vs "Hits"), so both sides are reduced to a plain
//! lower-case form before comparing. Candidates are checked in the order the
//! catalog returned them and the first acceptable one wins.

use crate::{Album, CatalogCandidate};
use regex::Regex;
use std::sync::LazyLock;

static UNWANTED_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9 -]").unwrap());

/// Result of matching one album against a list of search candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The catalog id of the first acceptable candidate.
    Found(String),
    /// No candidate was acceptable.
    NotFound {
        /// How many candidates were examined
        considered: usize,
    },
}

impl MatchOutcome {
    pub fn album_id(&self) -> Option<&str> {
        match self {
            MatchOutcome::Found(id) => Some(id),
            MatchOutcome::NotFound { .. } => None,
        }
    }
}

/// Strip everything but ASCII letters, digits, spaces and hyphens, trim, and
/// lower-case.
///
/// ```rust
/// use headphones_import::normalize;
///
/// assert_eq!(normalize("  AC/DC "), "acdc");
/// assert_eq!(normalize("Hits (Remastered)"), "hits remastered");
/// ```
pub fn normalize(value: &str) -> String {
    UNWANTED_CHARS
        .replace_all(value, "")
        .trim()
        .to_lowercase()
}

/// Pick the catalog id of the first candidate whose title and artist both
/// match `album`.
///
/// * Title: the candidate title equals the album title or is a prefix of it.
/// * Artist: the candidate artist occurs within the album artists string or
///   equals the artist of at least one of the album's tracks.
pub fn find_album_id(album: &Album, candidates: &[CatalogCandidate]) -> MatchOutcome {
    let album_title = normalize(&album.name);
    let album_artists = normalize(&album.artists);
    let track_artists: Vec<String> = album
        .tracks
        .iter()
        .map(|track| normalize(&track.artist))
        .collect();

    for candidate in candidates {
        let candidate_title = normalize(&candidate.title);
        let candidate_artist = normalize(&candidate.artist_unique_name);

        let title_match = album_title.starts_with(&candidate_title);
        if !title_match {
            continue;
        }

        let artist_match = album_artists.contains(&candidate_artist)
            || track_artists.iter().any(|a| *a == candidate_artist);

        if artist_match {
            log::debug!(
                "Matched '{}' to '{}' by '{}' ({})",
                album,
                candidate.title,
                candidate.artist_unique_name,
                candidate.album_id
            );
            return MatchOutcome::Found(candidate.album_id.clone());
        }
    }

    MatchOutcome::NotFound {
        considered: candidates.len(),
    }
}
