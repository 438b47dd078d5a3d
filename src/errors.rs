use thiserror::Error;

/// Why a playlist edit was refused. The playlist is unchanged in every case.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaylistError {
    #[error("\"{0}\" is not in the library")]
    UnknownTitle(String),
    #[error("\"{0}\" appears more than once in the new order")]
    DuplicateTitle(String),
    #[error("expected {expected} song titles, got {found}")]
    LengthMismatch { expected: usize, found: usize },
    #[error("playlist belongs to a different library")]
    ForeignCatalog,
}

/// Errors that can occur when managing playlists in a [`Library`](crate::Library).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LibraryError {
    #[error("Playlist name cannot be empty!")]
    EmptyName,
    #[error("Playlist \"{0}\" already exists!")]
    PlaylistExists(String),
    #[error("Playlist \"{0}\" not found.")]
    PlaylistNotFound(String),
    #[error("Song \"{0}\" not found in the library.")]
    SongNotFound(String),
    #[error("Invalid new order: {0}. The playlist remains unchanged.")]
    Reorder(PlaylistError),
    #[error("{0}")]
    Playlist(PlaylistError),
}

/// Malformed input rejected by the menu before it reaches the library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid choice \"{0}\". Please enter a valid option.")]
    InvalidChoice(String),
    #[error("Invalid length \"{0}\". Please enter a positive number of minutes.")]
    InvalidLength(String),
    #[error("The song {0} cannot be empty.")]
    EmptyField(&'static str),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unable to find the config directory for mfun.")]
    NoConfigDir,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}
