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

//! Playlist state machine.
//!
//! This module owns the ordered working set of tracks and the playback
//! bookkeeping attached to it: which track is current, how far into it
//! playback has progressed, and whether it is playing or paused. It is the
//! only mutator of that state; the event handlers translate its results
//! into audio engine commands and the renderer reads it back out.
//!
//! All operations are synchronous and complete before the next application
//! event is processed, so the state is never observed mid-transition.

use rand::{rng, seq::SliceRandom};
use thiserror::Error;

use crate::model::{Track, TrackId, catalog::Catalog};

/// Recoverable playlist conditions. None of these are fatal; callers either
/// ignore them or surface them in the status line.
#[derive(Debug, Error, PartialEq)]
pub(crate) enum PlaylistError {
    #[error("no track with id {0} in the playlist")]
    NotFound(TrackId),

    #[error("already at the last track")]
    NoNextTrack,

    #[error("already at the first track")]
    NoPreviousTrack,

    #[error("the playlist is empty")]
    PlaylistExhausted,
}

/// Playback status of the playlist as a whole.
///
/// `Paused` and `Playing` both imply a current track is loaded; `Idle`
/// means there is none.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum PlaybackState {
    Idle,
    Paused,
    Playing,
}

/// What the audio engine should load next, produced by a successful play
/// operation. `start_at` is 0 for a fresh track and the saved position when
/// resuming the track that was already current.
#[derive(Debug, PartialEq)]
pub(crate) struct LoadRequest {
    pub(crate) track: Track,
    pub(crate) start_at: f64,
}

/// Outcome of a successful deletion.
#[derive(Debug, PartialEq)]
pub(crate) struct Removal {
    pub(crate) was_current: bool,
    pub(crate) emptied: bool,
}

pub(crate) struct Playlist {
    songs: Vec<Track>,
    current: Option<Track>,
    elapsed: f64,
    playing: bool,
}

impl Playlist {
    /// Creates the working playlist as a copy of the catalog in canonical
    /// alphabetical order.
    pub(crate) fn new(catalog: &Catalog) -> Self {
        let mut playlist = Self {
            songs: catalog.tracks().to_vec(),
            current: None,
            elapsed: 0.0,
            playing: false,
        };
        playlist.sort_by_title();
        playlist
    }

    pub(crate) fn songs(&self) -> &[Track] {
        &self.songs
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub(crate) fn current(&self) -> Option<&Track> {
        self.current.as_ref()
    }

    pub(crate) fn current_id(&self) -> Option<TrackId> {
        self.current.as_ref().map(|track| track.id)
    }

    pub(crate) fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub(crate) fn state(&self) -> PlaybackState {
        match (&self.current, self.playing) {
            (None, _) => PlaybackState::Idle,
            (Some(_), false) => PlaybackState::Paused,
            (Some(_), true) => PlaybackState::Playing,
        }
    }

    /// The track the play key would start: the current track when one is
    /// loaded, otherwise the first in the list. Used for the play
    /// affordance label.
    pub(crate) fn play_target(&self) -> Option<&Track> {
        self.current.as_ref().or_else(|| self.songs.first())
    }

    /// Makes the track with `id` current and marks it playing.
    ///
    /// Requesting the track that is already current resumes from the saved
    /// position; any other track starts from the beginning. The returned
    /// [`LoadRequest`] tells the caller what to hand to the audio engine.
    ///
    /// # Errors
    ///
    /// [`PlaylistError::NotFound`] if no track with `id` is in the playlist.
    pub(crate) fn play(&mut self, id: TrackId) -> Result<LoadRequest, PlaylistError> {
        let track = self
            .songs
            .iter()
            .find(|track| track.id == id)
            .cloned()
            .ok_or(PlaylistError::NotFound(id))?;

        let start_at = match &self.current {
            Some(current) if current.id == id => self.elapsed,
            _ => 0.0,
        };

        self.elapsed = start_at;
        self.current = Some(track.clone());
        self.playing = true;

        Ok(LoadRequest { track, start_at })
    }

    /// The play-button behaviour: resume the current track, or start the
    /// first listed track when nothing is current.
    ///
    /// # Errors
    ///
    /// [`PlaylistError::PlaylistExhausted`] when the playlist is empty and
    /// nothing is current.
    pub(crate) fn play_current_or_first(&mut self) -> Result<LoadRequest, PlaylistError> {
        let id = match &self.current {
            Some(track) => track.id,
            None => {
                self.songs
                    .first()
                    .ok_or(PlaylistError::PlaylistExhausted)?
                    .id
            }
        };
        self.play(id)
    }

    /// Captures the audio engine position and marks the current track
    /// paused. Idempotent; does nothing unless a track is playing.
    pub(crate) fn pause(&mut self, position: f64) {
        if !self.playing {
            return;
        }
        self.elapsed = position;
        self.playing = false;
    }

    /// The id of the track after the current one.
    ///
    /// While idle this is the first track in the list, so that "next" from
    /// a fresh start begins playback.
    ///
    /// # Errors
    ///
    /// [`PlaylistError::PlaylistExhausted`] when the playlist is empty,
    /// [`PlaylistError::NoNextTrack`] when the current track is the last.
    pub(crate) fn next_id(&self) -> Result<TrackId, PlaylistError> {
        let current = match &self.current {
            Some(track) => track,
            None => {
                return self
                    .songs
                    .first()
                    .map(|track| track.id)
                    .ok_or(PlaylistError::PlaylistExhausted);
            }
        };

        let index = self.index_of(current.id).ok_or(PlaylistError::NotFound(current.id))?;
        self.songs
            .get(index + 1)
            .map(|track| track.id)
            .ok_or(PlaylistError::NoNextTrack)
    }

    /// The id of the track before the current one.
    ///
    /// # Errors
    ///
    /// [`PlaylistError::NoPreviousTrack`] while idle or when the current
    /// track is first in the list.
    pub(crate) fn previous_id(&self) -> Result<TrackId, PlaylistError> {
        let current = self.current.as_ref().ok_or(PlaylistError::NoPreviousTrack)?;
        let index = self.index_of(current.id).ok_or(PlaylistError::NotFound(current.id))?;

        if index == 0 {
            return Err(PlaylistError::NoPreviousTrack);
        }

        Ok(self.songs[index - 1].id)
    }

    /// Randomly permutes the playlist and drops the current track, leaving
    /// the playlist idle. Uses a uniform permutation.
    pub(crate) fn shuffle(&mut self) {
        let mut rng = rng();
        self.songs.shuffle(&mut rng);
        self.stop();
    }

    /// Removes the track with `id` from the playlist.
    ///
    /// Deleting the current track leaves the playlist idle. The returned
    /// [`Removal`] reports whether that happened and whether the playlist
    /// is now empty, so the caller can stop the audio engine and offer the
    /// reset affordance.
    ///
    /// # Errors
    ///
    /// [`PlaylistError::NotFound`] if no track with `id` is in the playlist.
    pub(crate) fn delete(&mut self, id: TrackId) -> Result<Removal, PlaylistError> {
        let index = self.index_of(id).ok_or(PlaylistError::NotFound(id))?;

        let was_current = self.current_id() == Some(id);
        if was_current {
            self.stop();
        }

        self.songs.remove(index);

        Ok(Removal {
            was_current,
            emptied: self.songs.is_empty(),
        })
    }

    /// Replaces the playlist with a fresh copy of the catalog in canonical
    /// order. Playback state is left untouched.
    pub(crate) fn reset(&mut self, catalog: &Catalog) {
        self.songs = catalog.tracks().to_vec();
        self.sort_by_title();
    }

    /// Reorders the playlist by title, case-sensitively. The sort is stable
    /// so tracks with equal titles keep their relative order and repeated
    /// calls are idempotent.
    pub(crate) fn sort_by_title(&mut self) {
        self.songs.sort_by(|a, b| a.title.cmp(&b.title));
    }

    /// Handles the end of the current track: yields the id to play next, or
    /// leaves the playlist idle when the current track was the last.
    pub(crate) fn finish_current(&mut self) -> Option<TrackId> {
        match self.next_id() {
            Ok(id) => Some(id),
            Err(_) => {
                self.stop();
                None
            }
        }
    }

    /// Clears the current track and playback bookkeeping.
    pub(crate) fn stop(&mut self) {
        self.current = None;
        self.elapsed = 0.0;
        self.playing = false;
    }

    // Linear scan; the playlist is mutated far more often than it is
    // navigated, so no index cache is kept.
    fn index_of(&self, id: TrackId) -> Option<usize> {
        self.songs.iter().position(|track| track.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn track(id: TrackId, title: &str) -> Track {
        Track {
            id,
            title: title.to_string(),
            artist: "Artist".to_string(),
            duration: "3:00".to_string(),
            source: format!("track-{}.mp3", id),
        }
    }

    fn catalog_of(tracks: Vec<Track>) -> Catalog {
        Catalog::from_config(&AppConfig {
            tracks,
            ..AppConfig::default()
        })
    }

    fn playlist_of(tracks: Vec<Track>) -> Playlist {
        Playlist::new(&catalog_of(tracks))
    }

    #[test]
    fn new_playlist_is_idle_and_canonically_ordered() {
        let playlist = playlist_of(vec![track(0, "Zeta"), track(1, "Alpha"), track(2, "Mid")]);

        assert_eq!(playlist.state(), PlaybackState::Idle);
        let titles: Vec<&str> = playlist.songs().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Alpha", "Mid", "Zeta"]);
    }

    #[test]
    fn play_sets_current_and_playing() {
        let mut playlist = playlist_of(vec![track(0, "A"), track(1, "B")]);

        let request = playlist.play(1).unwrap();

        assert_eq!(request.track.id, 1);
        assert_eq!(request.start_at, 0.0);
        assert_eq!(playlist.current_id(), Some(1));
        assert_eq!(playlist.state(), PlaybackState::Playing);
    }

    #[test]
    fn play_unknown_id_is_not_found() {
        let mut playlist = playlist_of(vec![track(0, "A")]);

        assert_eq!(playlist.play(42), Err(PlaylistError::NotFound(42)));
        assert_eq!(playlist.state(), PlaybackState::Idle);
    }

    #[test]
    fn replaying_the_current_track_resumes_from_saved_position() {
        let mut playlist = playlist_of(vec![track(0, "A"), track(1, "B")]);

        playlist.play(0).unwrap();
        playlist.pause(42.5);

        let request = playlist.play(0).unwrap();
        assert_eq!(request.start_at, 42.5);
        assert_eq!(playlist.state(), PlaybackState::Playing);
    }

    #[test]
    fn playing_a_different_track_restarts_from_zero() {
        let mut playlist = playlist_of(vec![track(0, "A"), track(1, "B")]);

        playlist.play(0).unwrap();
        playlist.pause(42.5);

        let request = playlist.play(1).unwrap();
        assert_eq!(request.start_at, 0.0);
        assert_eq!(playlist.elapsed(), 0.0);
    }

    #[test]
    fn pause_is_idempotent_and_a_no_op_while_idle() {
        let mut playlist = playlist_of(vec![track(0, "A")]);

        playlist.pause(10.0);
        assert_eq!(playlist.state(), PlaybackState::Idle);
        assert_eq!(playlist.elapsed(), 0.0);

        playlist.play(0).unwrap();
        playlist.pause(10.0);
        playlist.pause(99.0);
        assert_eq!(playlist.elapsed(), 10.0);
        assert_eq!(playlist.state(), PlaybackState::Paused);
    }

    #[test]
    fn play_current_or_first_prefers_the_current_track() {
        let mut playlist = playlist_of(vec![track(0, "A"), track(1, "B")]);

        playlist.play(1).unwrap();
        playlist.pause(5.0);

        let request = playlist.play_current_or_first().unwrap();
        assert_eq!(request.track.id, 1);
        assert_eq!(request.start_at, 5.0);
    }

    #[test]
    fn play_current_or_first_on_empty_playlist_is_exhausted() {
        let mut playlist = playlist_of(vec![track(0, "A")]);
        playlist.delete(0).unwrap();

        assert_eq!(
            playlist.play_current_or_first(),
            Err(PlaylistError::PlaylistExhausted)
        );
    }

    #[test]
    fn next_from_idle_is_the_first_track() {
        let playlist = playlist_of(vec![track(0, "B"), track(1, "A")]);

        // canonical order puts "A" (id 1) first
        assert_eq!(playlist.next_id(), Ok(1));
    }

    #[test]
    fn next_from_last_track_signals_no_next() {
        let mut playlist = playlist_of(vec![track(0, "A"), track(1, "B")]);

        playlist.play(1).unwrap();
        assert_eq!(playlist.next_id(), Err(PlaylistError::NoNextTrack));
    }

    #[test]
    fn previous_at_first_track_or_idle_signals_no_previous() {
        let mut playlist = playlist_of(vec![track(0, "A"), track(1, "B")]);

        assert_eq!(playlist.previous_id(), Err(PlaylistError::NoPreviousTrack));

        playlist.play(0).unwrap();
        assert_eq!(playlist.previous_id(), Err(PlaylistError::NoPreviousTrack));

        playlist.play(1).unwrap();
        assert_eq!(playlist.previous_id(), Ok(0));
    }

    #[test]
    fn finish_current_advances_then_stops_at_the_end() {
        let mut playlist = playlist_of(vec![track(0, "A"), track(1, "B")]);

        playlist.play(0).unwrap();
        assert_eq!(playlist.finish_current(), Some(1));

        playlist.play(1).unwrap();
        assert_eq!(playlist.finish_current(), None);
        assert_eq!(playlist.state(), PlaybackState::Idle);
        assert_eq!(playlist.elapsed(), 0.0);
    }

    #[test]
    fn shuffle_keeps_the_same_tracks_and_clears_current() {
        let tracks: Vec<Track> = (0..8).map(|id| track(id, &format!("T{}", id))).collect();
        let mut playlist = playlist_of(tracks);

        playlist.play(3).unwrap();
        playlist.shuffle();

        assert_eq!(playlist.state(), PlaybackState::Idle);
        assert_eq!(playlist.elapsed(), 0.0);

        let mut ids: Vec<TrackId> = playlist.songs().iter().map(|t| t.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, (0..8).collect::<Vec<TrackId>>());
    }

    #[test]
    fn deleting_the_current_track_leaves_the_playlist_idle() {
        let mut playlist = playlist_of(vec![track(0, "A"), track(1, "B")]);

        playlist.play(0).unwrap();
        let removal = playlist.delete(0).unwrap();

        assert!(removal.was_current);
        assert!(!removal.emptied);
        assert_eq!(playlist.current(), None);
        assert_eq!(playlist.state(), PlaybackState::Idle);
        assert_eq!(playlist.songs().len(), 1);
    }

    #[test]
    fn deleting_the_only_track_reports_emptied() {
        let mut playlist = playlist_of(vec![track(0, "A")]);

        playlist.play(0).unwrap();
        let removal = playlist.delete(0).unwrap();

        assert!(removal.was_current);
        assert!(removal.emptied);
        assert!(playlist.is_empty());
    }

    #[test]
    fn deleting_another_track_does_not_disturb_playback() {
        let mut playlist = playlist_of(vec![track(0, "A"), track(1, "B")]);

        playlist.play(0).unwrap();
        let removal = playlist.delete(1).unwrap();

        assert!(!removal.was_current);
        assert_eq!(playlist.current_id(), Some(0));
        assert_eq!(playlist.state(), PlaybackState::Playing);
    }

    #[test]
    fn delete_unknown_id_is_not_found() {
        let mut playlist = playlist_of(vec![track(0, "A")]);

        assert_eq!(playlist.delete(9), Err(PlaylistError::NotFound(9)));
        assert_eq!(playlist.songs().len(), 1);
    }

    #[test]
    fn reset_restores_the_catalog_in_canonical_order() {
        let catalog = catalog_of(vec![track(0, "Zeta"), track(1, "Alpha"), track(2, "Mid")]);
        let mut playlist = Playlist::new(&catalog);

        playlist.shuffle();
        playlist.delete(1).unwrap();
        playlist.delete(2).unwrap();
        playlist.reset(&catalog);

        let titles: Vec<&str> = playlist.songs().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Alpha", "Mid", "Zeta"]);
    }

    #[test]
    fn sort_by_title_is_stable_and_idempotent() {
        let mut playlist = playlist_of(vec![
            track(0, "Same"),
            track(1, "Alpha"),
            track(2, "Same"),
        ]);

        playlist.sort_by_title();
        let once: Vec<TrackId> = playlist.songs().iter().map(|t| t.id).collect();

        playlist.sort_by_title();
        let twice: Vec<TrackId> = playlist.songs().iter().map(|t| t.id).collect();

        assert_eq!(once, vec![1, 0, 2]);
        assert_eq!(once, twice);
    }

    #[test]
    fn play_target_is_current_then_first() {
        let mut playlist = playlist_of(vec![track(0, "A"), track(1, "B")]);

        assert_eq!(playlist.play_target().map(|t| t.id), Some(0));

        playlist.play(1).unwrap();
        assert_eq!(playlist.play_target().map(|t| t.id), Some(1));

        playlist.delete(1).unwrap();
        playlist.delete(0).unwrap();
        assert_eq!(playlist.play_target(), None);
    }

    #[test]
    fn example_scenario_from_end_to_end() {
        // Catalog = [A("Zeta"), B("Alpha")]; canonical order is [B, A].
        let mut playlist = playlist_of(vec![track(0, "Zeta"), track(1, "Alpha")]);

        let request = playlist.play(1).unwrap();
        assert_eq!(request.start_at, 0.0);
        assert_eq!(playlist.state(), PlaybackState::Playing);

        playlist.pause(12.0);
        assert_eq!(playlist.state(), PlaybackState::Paused);

        let next = playlist.next_id().unwrap();
        assert_eq!(next, 0);
        let request = playlist.play(next).unwrap();
        assert_eq!(request.start_at, 0.0);

        // media "ended" on the last track
        assert_eq!(playlist.finish_current(), None);
        assert_eq!(playlist.state(), PlaybackState::Idle);
    }
}
