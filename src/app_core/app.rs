use crate::{
    Library, Song, SongInfo,
    config::Settings,
    domain::Playlist,
    errors::InputError,
    get_readable_duration,
    menu::{self, MenuChoice},
};
use anyhow::Result;
use log::info;
use std::{
    io::{BufRead, Write},
    ops::ControlFlow,
    sync::Arc,
};

/// Outcome of a single menu action. `Break` means input ran out mid-prompt.
type Flow = ControlFlow<()>;

/// The interactive menu. Generic over its input and output so it can be
/// driven by a script as easily as by a terminal.
pub struct MFun<R, W> {
    library: Library,
    settings: Settings,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> MFun<R, W> {
    pub fn new(settings: Settings, input: R, output: W) -> Self {
        MFun {
            library: Library::new(),
            settings,
            input,
            output,
        }
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until the user picks Exit or input is exhausted.
    pub fn run(&mut self) -> Result<()> {
        info!("Starting menu");

        // MAIN ROUTINE
        loop {
            self.print_menu()?;

            let Some(line) = self.ask("Enter your choice: ")? else {
                break;
            };

            let choice = match line.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(e) => {
                    writeln!(self.output, "{e}")?;
                    continue;
                }
            };

            if choice == MenuChoice::Exit {
                writeln!(self.output, "Exiting the program.")?;
                break;
            }

            if self.handle_choice(choice)?.is_break() {
                break;
            }
        }

        info!(
            "Leaving with {} songs and {} playlists",
            self.library.catalog().len(),
            self.library.playlists().count()
        );
        Ok(())
    }

    #[rustfmt::skip]
    fn handle_choice(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::AddSong            => self.add_song(),
            MenuChoice::CreatePlaylist     => self.create_playlist(),
            MenuChoice::AddToPlaylist      => self.add_to_playlist(),
            MenuChoice::DisplayPlaylists   => self.display_playlists(),
            MenuChoice::RemoveFromPlaylist => self.remove_from_playlist(),
            MenuChoice::ReorderPlaylist    => self.reorder_playlist(),
            MenuChoice::SearchArtist       => self.search_artist(),
            MenuChoice::SearchAlbum        => self.search_album(),
            MenuChoice::SearchGenre        => self.search_genre(),
            MenuChoice::SearchTitle        => self.search_title(),
            MenuChoice::Exit               => Ok(Flow::Break(())),
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\nOptions:")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{choice}")?;
        }
        Ok(())
    }

    /// Prompts and reads one line. `None` once input is exhausted.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}

// Library actions
impl<R: BufRead, W: Write> MFun<R, W> {
    fn add_song(&mut self) -> Result<Flow> {
        let Some(title) = self.ask("Enter song title: ")? else {
            return Ok(Flow::Break(()));
        };
        let Some(artist) = self.ask("Enter artist: ")? else {
            return Ok(Flow::Break(()));
        };
        let Some(album) = self.ask("Enter album: ")? else {
            return Ok(Flow::Break(()));
        };
        let Some(genre) = self.ask("Enter genre: ")? else {
            return Ok(Flow::Break(()));
        };
        let Some(length) = self.ask("Enter length (in minutes): ")? else {
            return Ok(Flow::Break(()));
        };

        let title = title.trim();
        if title.is_empty() {
            writeln!(self.output, "{}", InputError::EmptyField("title"))?;
            return Ok(Flow::Continue(()));
        }

        let length = match menu::parse_length(&length) {
            Ok(length) => length,
            Err(e) => {
                writeln!(self.output, "{e}")?;
                return Ok(Flow::Continue(()));
            }
        };

        let song = Song::new(title, artist.trim(), album.trim(), genre.trim(), length);
        match self.library.add_song(song) {
            true => writeln!(self.output, "Song added to the library.")?,
            false => writeln!(
                self.output,
                "\"{title}\" is already in the library. The existing entry was kept."
            )?,
        }

        Ok(Flow::Continue(()))
    }

    fn search_artist(&mut self) -> Result<Flow> {
        let Some(artist) = self.ask("Enter artist name to search: ")? else {
            return Ok(Flow::Break(()));
        };
        let songs = self.library.catalog().find_by_artist(artist.trim());

        self.print_results(&songs, &format!("Songs by {}", artist.trim()), |s| {
            s.get_album().to_string()
        })?;
        Ok(Flow::Continue(()))
    }

    fn search_album(&mut self) -> Result<Flow> {
        let Some(album) = self.ask("Enter album name to search: ")? else {
            return Ok(Flow::Break(()));
        };
        let songs = self.library.catalog().find_by_album(album.trim());

        self.print_results(&songs, &format!("Songs on {}", album.trim()), |s| {
            s.get_artist().to_string()
        })?;
        Ok(Flow::Continue(()))
    }

    fn search_genre(&mut self) -> Result<Flow> {
        let Some(genre) = self.ask("Enter genre to search: ")? else {
            return Ok(Flow::Break(()));
        };
        let songs = self.library.catalog().find_by_genre(genre.trim());

        self.print_results(&songs, &format!("{} songs", genre.trim()), |s| {
            s.get_artist().to_string()
        })?;
        Ok(Flow::Continue(()))
    }

    fn search_title(&mut self) -> Result<Flow> {
        let Some(query) = self.ask("Enter part of a song title: ")? else {
            return Ok(Flow::Break(()));
        };
        let songs = self
            .library
            .catalog()
            .search(&query, self.settings.search_threshold);

        let style = self.settings.duration_style;
        self.print_results(&songs, &format!("Matches for \"{}\"", query.trim()), |s| {
            format!(
                "{} ({})",
                s.get_artist(),
                get_readable_duration(s.get_duration(), style)
            )
        })?;
        Ok(Flow::Continue(()))
    }

    fn print_results(
        &mut self,
        songs: &[Arc<Song>],
        heading: &str,
        detail: impl Fn(&Song) -> String,
    ) -> Result<()> {
        if songs.is_empty() {
            writeln!(self.output, "{heading}: no songs found.")?;
            return Ok(());
        }

        writeln!(self.output, "\n{heading}:")?;
        for song in songs {
            writeln!(self.output, "{} - {}", song.get_title(), detail(song))?;
        }
        Ok(())
    }
}

// Playlist actions
impl<R: BufRead, W: Write> MFun<R, W> {
    fn create_playlist(&mut self) -> Result<Flow> {
        let Some(name) = self.ask("Enter playlist name: ")? else {
            return Ok(Flow::Break(()));
        };

        match self.library.create_playlist(&name) {
            Ok(_) => writeln!(self.output, "Playlist created.")?,
            Err(e) => writeln!(self.output, "{e}")?,
        }
        Ok(Flow::Continue(()))
    }

    fn add_to_playlist(&mut self) -> Result<Flow> {
        let Some(name) = self.ask("Enter playlist name: ")? else {
            return Ok(Flow::Break(()));
        };
        if !self.require_playlist(&name)? {
            return Ok(Flow::Continue(()));
        }
        let Some(title) = self.ask("Enter song title to add: ")? else {
            return Ok(Flow::Break(()));
        };

        match self.library.add_to_playlist(&name, title.trim()) {
            Ok(true) => writeln!(self.output, "Song added to the playlist.")?,
            Ok(false) => writeln!(self.output, "Song is already in the playlist.")?,
            Err(e) => writeln!(self.output, "{e}")?,
        }
        Ok(Flow::Continue(()))
    }

    fn remove_from_playlist(&mut self) -> Result<Flow> {
        let Some(name) = self.ask("Enter playlist name: ")? else {
            return Ok(Flow::Break(()));
        };
        if !self.require_playlist(&name)? {
            return Ok(Flow::Continue(()));
        }
        let Some(title) = self.ask("Enter song title to remove: ")? else {
            return Ok(Flow::Break(()));
        };

        match self.library.remove_from_playlist(&name, title.trim()) {
            Ok(true) => writeln!(self.output, "Song removed from the playlist.")?,
            Ok(false) => writeln!(self.output, "Song not found in the playlist.")?,
            Err(e) => writeln!(self.output, "{e}")?,
        }
        Ok(Flow::Continue(()))
    }

    fn reorder_playlist(&mut self) -> Result<Flow> {
        let Some(name) = self.ask("Enter playlist name: ")? else {
            return Ok(Flow::Break(()));
        };
        if !self.require_playlist(&name)? {
            return Ok(Flow::Continue(()));
        }
        let Some(order) =
            self.ask("Enter the new order of song titles (comma-separated): ")?
        else {
            return Ok(Flow::Break(()));
        };

        let titles = menu::split_titles(&order);
        match self.library.reorder_playlist(&name, &titles) {
            Ok(()) => writeln!(self.output, "Playlist reordered.")?,
            Err(e) => writeln!(self.output, "{e}")?,
        }
        Ok(Flow::Continue(()))
    }

    fn display_playlists(&mut self) -> Result<Flow> {
        if self.library.playlists().next().is_none() {
            writeln!(
                self.output,
                "You currently have no playlists. Please create some new playlists."
            )?;
            return Ok(Flow::Continue(()));
        }

        let style = self.settings.duration_style;
        for playlist in self.library.playlists() {
            Self::write_playlist(&mut self.output, playlist, style)?;
        }
        Ok(Flow::Continue(()))
    }

    fn write_playlist(
        output: &mut W,
        playlist: &Playlist,
        style: crate::DurationStyle,
    ) -> Result<()> {
        writeln!(output, "\nPlaylist: {}", playlist.name())?;
        for row in playlist.display() {
            writeln!(output, "{row}")?;
        }
        writeln!(
            output,
            "{} song{}, {}",
            playlist.len(),
            if playlist.len() == 1 { "" } else { "s" },
            get_readable_duration(playlist.total_length(), style)
        )?;
        Ok(())
    }

    /// Prints a notice and returns `false` when no playlist is called `name`.
    fn require_playlist(&mut self, name: &str) -> Result<bool> {
        match self.library.playlist(name) {
            Some(_) => Ok(true),
            None => {
                writeln!(self.output, "Playlist not found.")?;
                Ok(false)
            }
        }
    }
}
