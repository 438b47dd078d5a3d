mod playlist;
mod song;

pub use playlist::{Playlist, PlaylistRow};
pub use song::Song;

pub trait SongInfo {
    fn get_title(&self) -> &str;
    fn get_artist(&self) -> &str;
    fn get_album(&self) -> &str;
    fn get_genre(&self) -> &str;
    fn get_duration(&self) -> std::time::Duration;
    fn get_duration_str(&self) -> String;
}
