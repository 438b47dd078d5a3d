use mfun::{Catalog, Library, Playlist, Song, SongInfo, errors::PlaylistError};
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use std::{sync::Arc, time::Duration};

fn song(title: &str, artist: &str) -> Song {
    Song::new(title, artist, "Album", "Genre", Duration::from_secs(180))
}

fn rows(playlist: &Playlist) -> Vec<(usize, String)> {
    playlist
        .display()
        .into_iter()
        .map(|row| (row.position, row.title))
        .collect()
}

#[fixture]
fn catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.add(song("A", "Artist A"));
    catalog.add(song("B", "Artist B"));
    catalog.add(song("C", "Artist C"));
    catalog
}

#[rstest]
fn add_reorder_remove(catalog: Catalog) {
    let mut playlist = Playlist::new("abc", &catalog);
    for title in ["A", "B", "C"] {
        playlist.add_song(&catalog, title).unwrap();
    }
    assert_eq!(
        rows(&playlist),
        vec![(1, "A".into()), (2, "B".into()), (3, "C".into())]
    );

    playlist.reorder_songs(&catalog, &["C", "A", "B"]).unwrap();
    assert_eq!(
        rows(&playlist),
        vec![(1, "C".into()), (2, "A".into()), (3, "B".into())]
    );

    assert!(playlist.remove_song("A"));
    assert_eq!(rows(&playlist), vec![(1, "C".into()), (2, "B".into())]);
    assert_eq!(playlist.display()[0].to_string(), "1. C - Artist C");
}

#[rstest]
fn first_add_order_is_kept(catalog: Catalog) {
    let mut playlist = Playlist::new("dupes", &catalog);
    for title in ["B", "A", "B", "C", "A", "C", "B"] {
        playlist.add_song(&catalog, title).unwrap();
    }

    let titles: Vec<&str> = playlist.tracklist().iter().map(|s| s.get_title()).collect();
    assert_eq!(titles, vec!["B", "A", "C"]);
}

#[rstest]
fn rejected_reorder_is_atomic(catalog: Catalog) {
    let mut playlist = Playlist::new("abc", &catalog);
    for title in ["A", "B", "C"] {
        playlist.add_song(&catalog, title).unwrap();
    }
    let before = playlist.get_tracks();

    assert_eq!(
        playlist.reorder_songs(&catalog, &["C", "Nope", "A"]),
        Err(PlaylistError::UnknownTitle("Nope".into()))
    );
    assert!(
        before
            .iter()
            .zip(playlist.tracklist())
            .all(|(a, b)| Arc::ptr_eq(a, b))
    );
}

#[test]
fn playlists_across_libraries_are_independent() {
    let mut home = Library::new();
    let mut work = Library::new();
    home.add_song(song("A", "Home"));
    work.add_song(song("A", "Work"));

    home.create_playlist("mix").unwrap();
    work.create_playlist("mix").unwrap();
    home.add_to_playlist("mix", "A").unwrap();
    work.add_to_playlist("mix", "A").unwrap();

    let home_mix = home.playlist("mix").unwrap();
    assert_eq!(home_mix.tracklist()[0].get_artist(), "Home");

    let mut stray = home_mix.clone();
    assert_eq!(
        stray.reorder_songs(work.catalog(), &["A"]),
        Err(PlaylistError::ForeignCatalog)
    );
}
