use crate::{Album, Confirmer};

/// Settings that decide which albums proceed to the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterConfig {
    /// Minimum number of playlist tracks an album needs. Values above 1
    /// replace the per-album confirmation.
    pub min_tracks: usize,
    /// Ask the operator about each album when no track threshold applies.
    pub confirm_albums: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_tracks: 1,
            confirm_albums: false,
        }
    }
}

/// A predicate deciding whether an album proceeds to the import workflow.
pub trait AlbumFilter {
    fn accepts(&self, album: &Album) -> bool;
}

/// Accepts albums with at least `min_tracks` tracks collected from the
/// playlists.
#[derive(Debug, Clone, Copy)]
pub struct MinTracksFilter {
    pub min_tracks: usize,
}

impl AlbumFilter for MinTracksFilter {
    fn accepts(&self, album: &Album) -> bool {
        album.tracks.len() >= self.min_tracks
    }
}

/// Asks the operator whether to add each album.
pub struct ConfirmFilter<'a> {
    confirmer: &'a dyn Confirmer,
}

impl<'a> ConfirmFilter<'a> {
    pub fn new(confirmer: &'a dyn Confirmer) -> Self {
        Self { confirmer }
    }
}

impl AlbumFilter for ConfirmFilter<'_> {
    fn accepts(&self, album: &Album) -> bool {
        self.confirmer
            .confirm(&format!("Add album '{album}'? (y/n) "))
    }
}

/// Short-circuiting AND over an ordered list of filters.
///
/// The chain only answers questions; marking rejected albums as skipped is
/// left to the caller. An empty chain accepts everything.
#[derive(Default)]
pub struct AlbumFilterChain<'a> {
    filters: Vec<Box<dyn AlbumFilter + 'a>>,
}

impl<'a> AlbumFilterChain<'a> {
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Build the chain for a run. A track threshold above 1 takes precedence
    /// over interactive confirmation; at most one of the two is installed.
    pub fn from_config(config: &FilterConfig, confirmer: &'a dyn Confirmer) -> Self {
        let mut chain = Self::new();
        if config.min_tracks > 1 {
            chain.push(MinTracksFilter {
                min_tracks: config.min_tracks,
            });
        } else if config.confirm_albums {
            chain.push(ConfirmFilter::new(confirmer));
        }
        chain
    }

    pub fn push(&mut self, filter: impl AlbumFilter + 'a) {
        self.filters.push(Box::new(filter));
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn evaluate(&self, album: &Album) -> bool {
        self.filters.iter().all(|filter| filter.accepts(album))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedConfirmer;
    use crate::Track;

    fn album_with_tracks(count: usize) -> Album {
        let mut album = Album::new("Album", "Artist", "2010-01-01");
        for i in 0..count {
            album.add_track(Track::new(format!("Track {i}"), "Artist"));
        }
        album
    }

    #[test]
    fn test_min_tracks_boundary_is_inclusive() {
        let confirmer = ScriptedConfirmer::new(false);
        let config = FilterConfig {
            min_tracks: 3,
            confirm_albums: true,
        };
        let chain = AlbumFilterChain::from_config(&config, &confirmer);

        assert!(!chain.evaluate(&album_with_tracks(2)));
        assert!(chain.evaluate(&album_with_tracks(3)));
        assert!(chain.evaluate(&album_with_tracks(4)));
        // The threshold supersedes confirmation, so nobody was asked.
        assert!(confirmer.prompts.borrow().is_empty());
    }

    #[test]
    fn test_confirmation_used_without_threshold() {
        let confirmer = ScriptedConfirmer::new(false);
        let config = FilterConfig {
            min_tracks: 1,
            confirm_albums: true,
        };
        let chain = AlbumFilterChain::from_config(&config, &confirmer);

        assert_eq!(chain.len(), 1);
        assert!(!chain.evaluate(&album_with_tracks(5)));
        assert_eq!(
            confirmer.prompts.borrow().as_slice(),
            ["Add album 'Artist - Album (2010)'? (y/n) "]
        );
    }

    #[test]
    fn test_no_filters_accepts_everything() {
        let confirmer = ScriptedConfirmer::new(false);
        let chain = AlbumFilterChain::from_config(&FilterConfig::default(), &confirmer);

        assert!(chain.is_empty());
        assert!(chain.evaluate(&album_with_tracks(1)));
    }

    #[test]
    fn test_chain_short_circuits() {
        let confirmer = ScriptedConfirmer::new(true);
        let mut chain = AlbumFilterChain::new();
        chain.push(MinTracksFilter { min_tracks: 2 });
        chain.push(ConfirmFilter::new(&confirmer));

        assert!(!chain.evaluate(&album_with_tracks(1)));
        assert!(confirmer.prompts.borrow().is_empty());

        assert!(chain.evaluate(&album_with_tracks(2)));
        assert_eq!(confirmer.prompts.borrow().len(), 1);
    }
}
