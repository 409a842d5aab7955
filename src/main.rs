// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Mixtape.
//!
//! A terminal playlist player for a fixed catalog of tracks.
//!
//! The application keeps an ordered working playlist built from an
//! immutable catalog, plays and pauses tracks through an MPV-backed audio
//! worker, and keeps the terminal display synchronized with playlist and
//! playback state.
//!
//! ## Architecture
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle, processes
//!   application events in arrival order, and renders the UI after each.
//! * The **Audio Worker** owns the MPV context and reports playback
//!   progress back as events.
//! * **Input and tick threads** feed key presses and periodic refreshes
//!   into the same event channel.
//!
//! The application follows a strict setup-run-teardown pattern to ensure
//! the terminal state is preserved even in the event of a crash.
//! Communication between the threads is handled via `std::sync::mpsc`
//! channels.

mod components;
mod config;
mod events;
mod model;
mod player;
mod render;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};

use crate::{
    components::PlaylistView,
    events::{AppEvent, process_events},
    model::{catalog::Catalog, playlist::Playlist},
    player::{AudioPlayer, PlayerState},
    theme::Theme,
};

/// Application state.
struct App {
    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub audio_player: AudioPlayer,

    pub catalog: Catalog,
    pub playlist: Playlist,
    pub playlist_view: PlaylistView,

    pub player_state: PlayerState,
    pub player_time: f64,
    pub status: Option<String>,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(catalog: Catalog) -> Result<Self> {
        let (event_tx, event_rx) = mpsc::channel();

        let audio_player_event_tx = event_tx.clone();

        let playlist = Playlist::new(&catalog);
        let playlist_view = PlaylistView::new(playlist.songs().len());

        Ok(Self {
            theme: Theme::default(),
            event_tx,
            event_rx,
            audio_player: AudioPlayer::new(audio_player_event_tx)?,
            catalog,
            playlist,
            playlist_view,
            player_state: PlayerState::Stopped,
            player_time: 0.0,
            status: None,
        })
    }
}

/// The entry point of the application.
///
/// Loads the configuration and catalog, initializes the application state,
/// manages the terminal lifecycle, and returns an error if any part of the
/// execution fails.
fn main() -> Result<()> {
    let config = config::load_config();
    let catalog = Catalog::from_config(&config);

    let mut app = App::new(catalog).context("Failed to initalise application")?;

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate
/// screen cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd
    // get a thin black outline
    util::term::set_terminal_bg(app.theme.background_colour);

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including
/// disabling raw mode, leaving the alternate screen, and resetting the
/// background color. It also ensures the cursor is made visible again.
///
/// This function is designed to be "best-effort" and does not return a
/// result, as it is typically called during cleanup or panic handling.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg();
    terminal.show_cursor().ok();
}

/// Starts the application's background threads and enters the main event
/// loop.
///
/// This function spawns:
/// * An input thread to poll for system keyboard events.
/// * A tick thread to trigger periodic UI refreshes.
///
/// After spawning the workers, it hands control to [`process_events`] to
/// manage the UI and state updates.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an
/// unrecoverable application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            if let Ok(event::Event::Key(key)) = event::read() {
                tx_keys.send(AppEvent::Key(key)).ok();
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI
    // application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let _ = tx_tick.send(AppEvent::Tick);
            thread::sleep(Duration::from_millis(250));
        }
    });

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
