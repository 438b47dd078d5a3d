use mfun::{DurationStyle, SongInfo, app_core::MFun, config::Settings};
use pretty_assertions::assert_eq;
use std::io::Cursor;

const SESSION: &str = "\
1
A
Artist A
Album
Rock
3
1
B
Artist B
Album
Rock
2.5
1
C
Artist C
Album
Jazz
4
2
Road Trip
3
Road Trip
A
3
Road Trip
B
3
Road Trip
C
3
Road Trip
A
6
Road Trip
C, A, B
4
6
Road Trip
C,A
5
Road Trip
A
4
8
";

fn run(settings: Settings, script: &str) -> MFun<Cursor<String>, Vec<u8>> {
    let mut app = MFun::new(settings, Cursor::new(script.to_string()), Vec::new());
    app.run().unwrap();
    app
}

fn titles(app: &MFun<Cursor<String>, Vec<u8>>, playlist: &str) -> Vec<String> {
    app.library()
        .playlist(playlist)
        .unwrap()
        .tracklist()
        .iter()
        .map(|s| s.get_title().to_string())
        .collect()
}

#[test]
fn scripted_session() {
    let app = run(Settings::default(), SESSION);

    assert_eq!(app.library().catalog().len(), 3);
    assert_eq!(titles(&app, "Road Trip"), vec!["C", "B"]);

    let output = String::from_utf8(app.into_output()).unwrap();
    assert!(output.contains("Playlist created."));
    assert!(output.contains("Song is already in the playlist."));
    assert!(output.contains("Playlist reordered."));
    assert!(output.contains("Invalid new order: expected 3 song titles, got 2."));
    assert!(output.contains("Song removed from the playlist."));

    // first listing after the reorder, then the one after removal
    assert!(output.contains(
        "Playlist: Road Trip\n1. C - Artist C\n2. A - Artist A\n3. B - Artist B\n3 songs, 9:30\n"
    ));
    assert!(output.contains("Playlist: Road Trip\n1. C - Artist C\n2. B - Artist B\n2 songs, 6:30\n"));
}

#[test]
fn clean_duration_style() {
    let settings = Settings {
        duration_style: DurationStyle::Clean,
        ..Settings::default()
    };
    let script = "1\nA\nArtist A\nAlbum\nRock\n3\n2\nmix\n3\nmix\nA\n4\n8\n";

    let output = String::from_utf8(run(settings, script).into_output()).unwrap();
    assert!(output.contains("Playlist: mix\n1. A - Artist A\n1 song, 3m 00s\n"));
}

#[test]
fn duplicate_playlist_names_are_rejected() {
    let app = run(Settings::default(), "2\nGym\n2\ngym\n8\n");
    assert_eq!(app.library().playlists().count(), 1);

    let output = String::from_utf8(app.into_output()).unwrap();
    assert!(output.contains("Playlist \"gym\" already exists!"));
}

#[test]
fn padded_playlist_name_finds_playlist() {
    let script = "1\nA\nArtist A\nAlbum\nRock\n3\n2\n Gym \n3\n Gym \nA\n4\n8\n";
    let app = run(Settings::default(), script);
    assert_eq!(titles(&app, "gym"), vec!["A"]);

    let output = String::from_utf8(app.into_output()).unwrap();
    assert!(!output.contains("Playlist not found."));
    assert!(output.contains("Playlist: Gym\n1. A - Artist A\n"));
}
