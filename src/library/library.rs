use super::Catalog;
use crate::{
    domain::{Playlist, Song},
    errors::{LibraryError, PlaylistError},
};
use indexmap::IndexMap;
use log::{debug, info};

/// Owns a catalog and every playlist built on top of it.
///
/// Playlists are keyed by name. Names are trimmed and compared without regard
/// to case, both when a playlist is created and when it is looked up.
#[derive(Debug, Default)]
pub struct Library {
    catalog: Catalog,
    playlists: IndexMap<String, Playlist>,
}

impl Library {
    pub fn new() -> Self {
        Library {
            catalog: Catalog::new(),
            playlists: IndexMap::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn add_song(&mut self, song: Song) -> bool {
        self.catalog.add(song)
    }

    pub fn playlists(&self) -> impl Iterator<Item = &Playlist> {
        self.playlists.values()
    }

    pub fn playlist(&self, name: &str) -> Option<&Playlist> {
        self.playlists.get(&playlist_key(name))
    }

    pub fn create_playlist(&mut self, name: &str) -> Result<&mut Playlist, LibraryError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(LibraryError::EmptyName);
        }

        let key = playlist_key(name);
        if self.playlists.contains_key(&key) {
            return Err(LibraryError::PlaylistExists(name.to_string()));
        }

        info!("Created playlist {name}");
        let playlist = Playlist::new(name, &self.catalog);
        Ok(self.playlists.entry(key).or_insert(playlist))
    }

    /// Looks `title` up in the catalog and appends it to `playlist`.
    ///
    /// Returns `Ok(false)` if the song was already in the playlist.
    pub fn add_to_playlist(&mut self, playlist: &str, title: &str) -> Result<bool, LibraryError> {
        let catalog = &self.catalog;
        let playlist = Self::find_mut(&mut self.playlists, playlist)?;

        playlist.add_song(catalog, title).map_err(|e| match e {
            PlaylistError::UnknownTitle(title) => LibraryError::SongNotFound(title),
            e => LibraryError::Playlist(e),
        })
    }

    pub fn remove_from_playlist(
        &mut self,
        playlist: &str,
        title: &str,
    ) -> Result<bool, LibraryError> {
        let playlist = Self::find_mut(&mut self.playlists, playlist)?;
        Ok(playlist.remove_song(title))
    }

    pub fn reorder_playlist<S: AsRef<str>>(
        &mut self,
        playlist: &str,
        titles: &[S],
    ) -> Result<(), LibraryError> {
        let playlist = Self::find_mut(&mut self.playlists, playlist)?;

        debug!("Reordering {} with {} titles", playlist.name(), titles.len());
        playlist
            .reorder_songs(&self.catalog, titles)
            .map_err(LibraryError::Reorder)
    }

    fn find_mut<'a>(
        playlists: &'a mut IndexMap<String, Playlist>,
        name: &str,
    ) -> Result<&'a mut Playlist, LibraryError> {
        playlists
            .get_mut(&playlist_key(name))
            .ok_or_else(|| LibraryError::PlaylistNotFound(name.trim().to_string()))
    }
}

fn playlist_key(name: &str) -> String {
    name.trim().to_lowercase()
}
