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

//! Audio playback control.
//!
//! This module provides the [`AudioPlayer`] handle the event handlers use
//! to drive playback. It manages a background worker thread that interfaces
//! with the underlying audio library (MPV), so that loading and seeking
//! never block the main event loop. The worker reports position changes and
//! end-of-track back through the application event channel.

mod commands;

use std::sync::mpsc;

use anyhow::Result;

use crate::{events::AppEvent, player::commands::AudioPlayerCommand};

/// Represents the current playback status of the audio engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum PlayerState {
    Playing,
    Paused,
    Stopped,
}

/// A handle to the audio playback engine.
///
/// This struct acts as a command proxy; it does not perform audio
/// processing itself but instead sends instructions to a background worker
/// thread.
pub(crate) struct AudioPlayer {
    /// Channel for sending commands to the background worker thread.
    command_tx: mpsc::Sender<AudioPlayerCommand>,
}

impl AudioPlayer {
    /// Spawns the audio worker thread and returns a new player handle.
    ///
    /// # Arguments
    ///
    /// * `event_tx` - A channel to send application-level events (position
    ///   updates, end-of-track, errors) back to the main event loop.
    pub(crate) fn new(event_tx: mpsc::Sender<AppEvent>) -> Result<Self> {
        let (command_tx, command_rx) = mpsc::channel::<AudioPlayerCommand>();

        commands::spawn_player_worker(command_rx, event_tx);

        Ok(Self { command_tx })
    }

    // Maps internal audio backend flags to a simplified [`PlayerState`].
    fn player_state(is_paused: bool, is_idle: bool) -> PlayerState {
        if is_idle {
            PlayerState::Stopped
        } else if is_paused {
            PlayerState::Paused
        } else {
            PlayerState::Playing
        }
    }

    /// Instructs the worker to load a track and start playing it from the
    /// given offset in seconds.
    pub(crate) fn play_track(&self, source: &str, start_at: f64) -> Result<()> {
        self.command_tx.send(AudioPlayerCommand::PlayTrack {
            source: source.to_string(),
            start_at,
        })?;
        Ok(())
    }

    /// Pauses playback, leaving the current track loaded.
    pub(crate) fn pause(&self) -> Result<()> {
        self.command_tx.send(AudioPlayerCommand::Pause)?;
        Ok(())
    }

    /// Stops playback and unloads the current track.
    pub(crate) fn stop(&self) -> Result<()> {
        self.command_tx.send(AudioPlayerCommand::Stop)?;
        Ok(())
    }
}
