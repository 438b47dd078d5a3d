use crate::errors::InputError;
use std::{fmt::Display, str::FromStr, time::Duration};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddSong,
    CreatePlaylist,
    AddToPlaylist,
    DisplayPlaylists,
    RemoveFromPlaylist,
    ReorderPlaylist,
    SearchArtist,
    SearchAlbum,
    SearchGenre,
    SearchTitle,
    Exit,
}

impl MenuChoice {
    /// Every option in the order it is listed.
    pub const ALL: [MenuChoice; 11] = [
        MenuChoice::AddSong,
        MenuChoice::CreatePlaylist,
        MenuChoice::AddToPlaylist,
        MenuChoice::DisplayPlaylists,
        MenuChoice::RemoveFromPlaylist,
        MenuChoice::ReorderPlaylist,
        MenuChoice::SearchArtist,
        MenuChoice::Exit,
        MenuChoice::SearchAlbum,
        MenuChoice::SearchGenre,
        MenuChoice::SearchTitle,
    ];

    pub fn key(&self) -> u8 {
        match self {
            MenuChoice::AddSong => 1,
            MenuChoice::CreatePlaylist => 2,
            MenuChoice::AddToPlaylist => 3,
            MenuChoice::DisplayPlaylists => 4,
            MenuChoice::RemoveFromPlaylist => 5,
            MenuChoice::ReorderPlaylist => 6,
            MenuChoice::SearchArtist => 7,
            MenuChoice::Exit => 8,
            MenuChoice::SearchAlbum => 9,
            MenuChoice::SearchGenre => 10,
            MenuChoice::SearchTitle => 11,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::AddSong => "Add Song to Library",
            MenuChoice::CreatePlaylist => "Create Playlist",
            MenuChoice::AddToPlaylist => "Add Song to Playlist",
            MenuChoice::DisplayPlaylists => "Display Playlists",
            MenuChoice::RemoveFromPlaylist => "Remove Song from Playlist",
            MenuChoice::ReorderPlaylist => "Reorder Songs in Playlist",
            MenuChoice::SearchArtist => "Search Songs by Artist",
            MenuChoice::SearchAlbum => "Search Songs by Album",
            MenuChoice::SearchGenre => "Search Songs by Genre",
            MenuChoice::SearchTitle => "Search Songs by Title",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl Display for MenuChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {}", self.key(), self.label())
    }
}

impl FromStr for MenuChoice {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<u8>()
            .ok()
            .and_then(|key| MenuChoice::ALL.into_iter().find(|c| c.key() == key))
            .ok_or_else(|| InputError::InvalidChoice(trimmed.to_string()))
    }
}

/// Parses a song length given in (possibly fractional) minutes.
pub fn parse_length(input: &str) -> Result<Duration, InputError> {
    let trimmed = input.trim();
    let invalid = || InputError::InvalidLength(trimmed.to_string());

    let minutes = trimmed.parse::<f64>().map_err(|_| invalid())?;
    if !minutes.is_finite() || minutes <= 0.0 {
        return Err(invalid());
    }

    Duration::try_from_secs_f64(minutes * 60.0).map_err(|_| invalid())
}

/// Splits a comma separated list of titles, trimming each one.
pub fn split_titles(input: &str) -> Vec<String> {
    input.split(',').map(|t| t.trim().to_string()).collect()
}
