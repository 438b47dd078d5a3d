use crate::domain::{Song, SongInfo};
use indexmap::{IndexMap, map::Entry};
use log::debug;
use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

static NEXT_CATALOG_ID: AtomicU64 = AtomicU64::new(0);

/// Identifies the catalog a [`Playlist`](crate::domain::Playlist) was created against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CatalogId(u64);

/// The deduplicated set of known songs, keyed by title.
///
/// Songs are stored behind an `Arc` so playlists can hold the same handle
/// rather than a copy. Iteration follows insertion order.
#[derive(Debug)]
pub struct Catalog {
    id: CatalogId,
    pub(super) songs: IndexMap<String, Arc<Song>>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Catalog {
            id: CatalogId(NEXT_CATALOG_ID.fetch_add(1, Ordering::Relaxed)),
            songs: IndexMap::new(),
        }
    }

    pub fn id(&self) -> CatalogId {
        self.id
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn songs(&self) -> impl Iterator<Item = &Arc<Song>> {
        self.songs.values()
    }

    /// Inserts `song` unless its title is already taken. The first song
    /// stored under a title is never replaced.
    pub fn add(&mut self, song: Song) -> bool {
        match self.songs.entry(song.title.clone()) {
            Entry::Occupied(_) => {
                debug!("Ignoring duplicate title \"{}\"", song.title);
                false
            }
            Entry::Vacant(slot) => {
                debug!("Cataloged \"{}\" by {}", song.title, song.artist);
                slot.insert(Arc::new(song));
                true
            }
        }
    }

    pub fn find_by_title(&self, title: &str) -> Option<&Arc<Song>> {
        self.songs.get(title)
    }

    pub fn find_by_artist(&self, artist: &str) -> Vec<Arc<Song>> {
        self.filter_songs(|s| s.get_artist() == artist)
    }

    pub fn find_by_album(&self, album: &str) -> Vec<Arc<Song>> {
        self.filter_songs(|s| s.get_album() == album)
    }

    pub fn find_by_genre(&self, genre: &str) -> Vec<Arc<Song>> {
        self.filter_songs(|s| s.get_genre() == genre)
    }

    fn filter_songs(&self, predicate: impl Fn(&Song) -> bool) -> Vec<Arc<Song>> {
        self.songs
            .values()
            .filter(|song| predicate(song))
            .cloned()
            .collect()
    }
}
