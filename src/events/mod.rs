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

//! Application events and the main processing loop.
//!
//! Every state change in the application travels through this module as an
//! [`AppEvent`]: key presses are translated into playlist operations, the
//! audio worker reports playback progress, and the terminal is redrawn
//! after each processed event. Events are handled to completion, strictly
//! in arrival order, so playlist state is never observed mid-transition.

mod handlers;
use handlers::*;

use std::io::Stdout;

use anyhow::{Result, bail};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{App, model::TrackId, player::PlayerState, render::draw};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    PlayTrack(TrackId),
    PlayOrResume,
    PausePlayback,
    PlayNext,
    PlayPrevious,

    ShufflePlaylist,
    DeleteTrack(TrackId),
    SortPlaylist,
    ResetPlaylist,

    TrackFinished,
    PlayerStateChanged(PlayerState),
    TimeChanged(f64),

    Tick,

    ExitApplication,

    Error(String),
    FatalError(String),
}

/// Runs the main application loop, handling events and rendering the UI in
/// the terminal.
///
/// This function loops until a 'quit' event is received or the event
/// channel is closed.
///
/// # Errors
///
/// Returns an error when a handler fails or when a worker reports a fatal
/// condition.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        match event {
            AppEvent::Key(key) => process_key_event(app, key)?,
            AppEvent::PlayTrack(id) => handle_play_track(app, id)?,
            AppEvent::PlayOrResume => handle_play_or_resume(app)?,
            AppEvent::PausePlayback => handle_pause_playback(app)?,
            AppEvent::PlayNext => handle_play_next(app)?,
            AppEvent::PlayPrevious => handle_play_previous(app)?,
            AppEvent::ShufflePlaylist => handle_shuffle_playlist(app)?,
            AppEvent::DeleteTrack(id) => handle_delete_track(app, id)?,
            AppEvent::SortPlaylist => handle_sort_playlist(app),
            AppEvent::ResetPlaylist => handle_reset_playlist(app),
            AppEvent::TrackFinished => handle_track_finished(app)?,
            AppEvent::PlayerStateChanged(state) => handle_player_state_changed(app, state),
            AppEvent::TimeChanged(secs) => handle_time_changed(app, secs),
            AppEvent::Error(message) => handle_error(app, message),
            AppEvent::FatalError(message) => bail!("Fatal error: {}", message),
            AppEvent::Tick | _ => handle_tick(app),
        }

        terminal.draw(|f| draw(f, app))?;
    }
    Ok(())
}

/// Maps keyboard input to playlist operations and playback commands.
///
/// Cursor movement is applied to the playlist view directly; everything
/// else is sent back through the event channel so that every state change
/// is processed in the same ordered stream.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }

        // Cursor movement over the playlist
        KeyCode::Char('j') | KeyCode::Down => {
            app.playlist_view.select_next(app.playlist.songs().len());
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.playlist_view.select_previous(app.playlist.songs().len());
        }

        KeyCode::Enter => {
            if let Some(id) = app.playlist_view.selected_id(app.playlist.songs()) {
                app.event_tx.send(AppEvent::PlayTrack(id))?;
            }
        }

        KeyCode::Char('p') => app.event_tx.send(AppEvent::PlayOrResume)?,
        KeyCode::Char(' ') => app.event_tx.send(AppEvent::PausePlayback)?,
        KeyCode::Char('n') => app.event_tx.send(AppEvent::PlayNext)?,
        KeyCode::Char('b') => app.event_tx.send(AppEvent::PlayPrevious)?,
        KeyCode::Char('s') => app.event_tx.send(AppEvent::ShufflePlaylist)?,
        KeyCode::Char('t') => app.event_tx.send(AppEvent::SortPlaylist)?,

        KeyCode::Char('d') => {
            if let Some(id) = app.playlist_view.selected_id(app.playlist.songs()) {
                app.event_tx.send(AppEvent::DeleteTrack(id))?;
            }
        }

        // The reset affordance is only offered once the playlist is empty
        KeyCode::Char('r') => {
            if app.playlist.is_empty() {
                app.event_tx.send(AppEvent::ResetPlaylist)?;
            }
        }

        _ => {}
    }

    Ok(())
}
