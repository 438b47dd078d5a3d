use super::SongInfo;
use crate::{DurationStyle, get_readable_duration};
use std::{sync::Arc, time::Duration};

/// A single catalog entry. The title doubles as the song's identity.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Song {
    pub(crate) title: String,
    pub(crate) artist: Arc<String>,
    pub(crate) album: Arc<String>,
    pub(crate) genre: Arc<String>,
    pub(crate) length: Duration,
}

impl Song {
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        album: impl Into<String>,
        genre: impl Into<String>,
        length: Duration,
    ) -> Self {
        Song {
            title: title.into(),
            artist: Arc::new(artist.into()),
            album: Arc::new(album.into()),
            genre: Arc::new(genre.into()),
            length,
        }
    }

    /// Two songs are the same song when their titles match, regardless of metadata.
    pub fn same_song(&self, other: &Song) -> bool {
        self.title == other.title
    }
}

impl SongInfo for Song {
    fn get_title(&self) -> &str {
        &self.title
    }

    fn get_artist(&self) -> &str {
        &self.artist
    }

    fn get_album(&self) -> &str {
        &self.album
    }

    fn get_genre(&self) -> &str {
        &self.genre
    }

    fn get_duration(&self) -> Duration {
        self.length
    }

    fn get_duration_str(&self) -> String {
        get_readable_duration(self.length, DurationStyle::Compact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::identical("Hey Jude", "Hey Jude", true)]
    #[case::different("Hey Jude", "Let It Be", false)]
    #[case::case_sensitive("Hey Jude", "hey jude", false)]
    fn test_same_song(#[case] left: &str, #[case] right: &str, #[case] expected: bool) {
        let a = Song::new(left, "The Beatles", "Single", "Rock", Duration::from_secs(431));
        let b = Song::new(right, "Someone Else", "Other", "Pop", Duration::from_secs(10));
        assert_eq!(a.same_song(&b), expected);
    }

    #[test]
    fn test_song_info_accessors() {
        let song = Song::new(
            "Clair de Lune",
            "Debussy",
            "Suite bergamasque",
            "Classical",
            Duration::from_secs(5 * 60 + 3),
        );

        assert_eq!(song.get_title(), "Clair de Lune");
        assert_eq!(song.get_artist(), "Debussy");
        assert_eq!(song.get_album(), "Suite bergamasque");
        assert_eq!(song.get_genre(), "Classical");
        assert_eq!(song.get_duration(), Duration::from_secs(303));
        assert_eq!(song.get_duration_str(), "5:03");
    }
}
