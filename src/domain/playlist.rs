use super::{Song, SongInfo};
use crate::{
    errors::PlaylistError,
    library::{Catalog, CatalogId},
};
use log::{debug, warn};
use std::{collections::HashSet, fmt::Display, sync::Arc, time::Duration};

/// An ordered, duplicate free list of songs borrowed from a single [`Catalog`].
///
/// Entries are shared handles into the catalog, never copies, and are kept in
/// the order they were first added.
#[derive(Debug, Clone)]
pub struct Playlist {
    name: String,
    catalog: CatalogId,
    tracklist: Vec<Arc<Song>>,
}

impl Playlist {
    pub fn new(name: impl Into<String>, catalog: &Catalog) -> Self {
        Playlist {
            name: name.into(),
            catalog: catalog.id(),
            tracklist: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tracklist(&self) -> &[Arc<Song>] {
        &self.tracklist
    }

    pub fn get_tracks(&self) -> Vec<Arc<Song>> {
        self.tracklist.iter().map(Arc::clone).collect()
    }

    pub fn len(&self) -> usize {
        self.tracklist.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracklist.is_empty()
    }

    pub fn contains(&self, title: &str) -> bool {
        self.tracklist.iter().any(|s| s.get_title() == title)
    }

    pub fn total_length(&self) -> Duration {
        self.tracklist.iter().map(|s| s.get_duration()).sum()
    }

    /// Resolves `title` in `catalog` and appends it unless a song with the
    /// same title is already present.
    ///
    /// Returns `Ok(true)` when the playlist grew. Songs can only come from the
    /// catalog this playlist was created against.
    pub fn add_song(&mut self, catalog: &Catalog, title: &str) -> Result<bool, PlaylistError> {
        if catalog.id() != self.catalog {
            return Err(PlaylistError::ForeignCatalog);
        }

        let song = catalog
            .find_by_title(title)
            .ok_or_else(|| PlaylistError::UnknownTitle(title.to_string()))?;

        if self.tracklist.iter().any(|s| s.same_song(song)) {
            debug!("\"{title}\" already in playlist {}", self.name);
            return Ok(false);
        }

        debug!("Adding \"{title}\" to playlist {}", self.name);
        self.tracklist.push(Arc::clone(song));
        Ok(true)
    }

    /// Removes the entry titled `title`, returning whether anything was removed.
    pub fn remove_song(&mut self, title: &str) -> bool {
        match self.tracklist.iter().position(|s| s.get_title() == title) {
            Some(idx) => {
                self.tracklist.remove(idx);
                debug!("Removed \"{title}\" from playlist {}", self.name);
                true
            }
            None => false,
        }
    }

    /// Replaces the tracklist with `titles` resolved against `catalog`.
    ///
    /// Only the number of songs is compared against the current tracklist, so
    /// a title that resolves in the catalog but was never part of this
    /// playlist is accepted as long as the count lines up. On any error the
    /// tracklist is left untouched.
    pub fn reorder_songs<S: AsRef<str>>(
        &mut self,
        catalog: &Catalog,
        titles: &[S],
    ) -> Result<(), PlaylistError> {
        let result = self.resolve_order(catalog, titles);

        match result {
            Ok(reordered) => {
                debug!("Reordered playlist {}", self.name);
                self.tracklist = reordered;
                Ok(())
            }
            Err(e) => {
                warn!("Rejected reorder of playlist {}: {e}", self.name);
                Err(e)
            }
        }
    }

    fn resolve_order<S: AsRef<str>>(
        &self,
        catalog: &Catalog,
        titles: &[S],
    ) -> Result<Vec<Arc<Song>>, PlaylistError> {
        if catalog.id() != self.catalog {
            return Err(PlaylistError::ForeignCatalog);
        }

        let mut seen = HashSet::with_capacity(titles.len());
        let mut reordered = Vec::with_capacity(titles.len());

        for title in titles {
            let title = title.as_ref();
            let song = catalog
                .find_by_title(title)
                .ok_or_else(|| PlaylistError::UnknownTitle(title.to_string()))?;

            if !seen.insert(title) {
                return Err(PlaylistError::DuplicateTitle(title.to_string()));
            }
            reordered.push(Arc::clone(song));
        }

        if reordered.len() != self.tracklist.len() {
            return Err(PlaylistError::LengthMismatch {
                expected: self.tracklist.len(),
                found: reordered.len(),
            });
        }

        Ok(reordered)
    }

    /// 1-indexed view of the playlist in its current order.
    pub fn display(&self) -> Vec<PlaylistRow> {
        self.tracklist
            .iter()
            .enumerate()
            .map(|(idx, song)| PlaylistRow {
                position: idx + 1,
                title: song.get_title().to_string(),
                artist: Arc::clone(&song.artist),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistRow {
    pub position: usize,
    pub title: String,
    pub artist: Arc<String>,
}

impl Display for PlaylistRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {} - {}", self.position, self.title, self.artist)
    }
}
