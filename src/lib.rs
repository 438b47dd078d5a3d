use serde::Deserialize;
use std::time::Duration;

pub mod app_core;
pub mod config;
pub mod domain;
pub mod errors;
pub mod library;
pub mod logger;
pub mod menu;

pub use domain::{Playlist, Song, SongInfo};
pub use library::{Catalog, Library};

pub const CONFIG_DIRECTORY: &str = "mfun";
pub const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationStyle {
    Clean,
    #[default]
    Compact,
}

pub fn get_readable_duration(duration: Duration, style: DurationStyle) -> String {
    let mut secs = duration.as_secs();
    let mins = secs / 60;
    secs %= 60;

    match style {
        DurationStyle::Clean => match mins {
            0 => format!("{secs:02}s"),
            _ => format!("{mins}m {secs:02}s"),
        },
        DurationStyle::Compact => format!("{mins}:{secs:02}"),
    }
}
