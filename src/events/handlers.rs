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

use anyhow::Result;

use crate::{
    App,
    model::{
        TrackId,
        playlist::{LoadRequest, PlaybackState, PlaylistError},
    },
    player::PlayerState,
};

// Forwards a successful play transition to the audio engine and seeds the
// last-known position with the offset playback starts from.
fn start_playback(app: &mut App, request: LoadRequest) -> Result<()> {
    app.player_time = request.start_at;
    app.status = None;
    app.audio_player.play_track(&request.track.source, request.start_at)
}

pub(super) fn handle_play_track(app: &mut App, id: TrackId) -> Result<()> {
    match app.playlist.play(id) {
        Ok(request) => start_playback(app, request)?,
        Err(e) => app.status = Some(e.to_string()),
    }

    Ok(())
}

pub(super) fn handle_play_or_resume(app: &mut App) -> Result<()> {
    match app.playlist.play_current_or_first() {
        Ok(request) => start_playback(app, request)?,
        // An empty playlist makes the play key a no-op; the reset
        // affordance is already on screen.
        Err(PlaylistError::PlaylistExhausted) => {}
        Err(e) => app.status = Some(e.to_string()),
    }

    Ok(())
}

pub(super) fn handle_pause_playback(app: &mut App) -> Result<()> {
    if app.playlist.state() != PlaybackState::Playing {
        return Ok(());
    }

    app.playlist.pause(app.player_time);
    app.audio_player.pause()?;

    Ok(())
}

pub(super) fn handle_play_next(app: &mut App) -> Result<()> {
    match app.playlist.next_id() {
        Ok(id) => handle_play_track(app, id)?,
        Err(PlaylistError::PlaylistExhausted) => {}
        Err(e) => app.status = Some(e.to_string()),
    }

    Ok(())
}

pub(super) fn handle_play_previous(app: &mut App) -> Result<()> {
    match app.playlist.previous_id() {
        Ok(id) => handle_play_track(app, id)?,
        Err(e) => app.status = Some(e.to_string()),
    }

    Ok(())
}

pub(super) fn handle_shuffle_playlist(app: &mut App) -> Result<()> {
    app.playlist.shuffle();
    app.playlist_view.reset_selection(app.playlist.songs().len());
    app.player_time = 0.0;
    app.status = None;
    app.audio_player.pause()?;

    Ok(())
}

pub(super) fn handle_delete_track(app: &mut App, id: TrackId) -> Result<()> {
    match app.playlist.delete(id) {
        Ok(removal) => {
            if removal.was_current {
                app.player_time = 0.0;
                app.audio_player.stop()?;
            }
            app.playlist_view.clamp_selection(app.playlist.songs().len());
            app.status = removal
                .emptied
                .then(|| "Playlist is empty".to_string());
        }
        Err(e) => app.status = Some(e.to_string()),
    }

    Ok(())
}

pub(super) fn handle_sort_playlist(app: &mut App) {
    app.playlist.sort_by_title();
}

pub(super) fn handle_reset_playlist(app: &mut App) {
    if !app.playlist.is_empty() {
        return;
    }

    app.playlist.reset(&app.catalog);
    app.playlist_view.reset_selection(app.playlist.songs().len());
    app.status = None;
}

pub(super) fn handle_track_finished(app: &mut App) -> Result<()> {
    app.player_time = 0.0;
    match app.playlist.finish_current() {
        Some(id) => handle_play_track(app, id)?,
        None => app.audio_player.stop()?,
    }

    Ok(())
}

pub(super) fn handle_player_state_changed(app: &mut App, state: PlayerState) {
    app.player_state = state;
}

pub(super) fn handle_time_changed(app: &mut App, seconds: f64) {
    app.player_time = seconds;
}

pub(super) fn handle_error(app: &mut App, message: String) {
    app.status = Some(message);
}

pub(super) fn handle_tick(_app: &mut App) {}
