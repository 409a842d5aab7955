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

//! Playlist view state.
//!
//! This module keeps the cursor state for the playlist pane. The cursor
//! targets the track that `Enter` plays and `d` deletes; it is independent
//! of which track is currently playing, which the renderer marks
//! separately.

mod render;

use ratatui::widgets::ListState;

use crate::model::{Track, TrackId};

pub(crate) struct PlaylistView {
    list_state: ListState,
}

impl PlaylistView {
    pub(crate) fn new(track_count: usize) -> Self {
        let mut list_state = ListState::default();
        if track_count > 0 {
            list_state.select(Some(0));
        }

        Self { list_state }
    }

    pub(crate) fn select_next(&mut self, track_count: usize) {
        if track_count == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if i >= track_count - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub(crate) fn select_previous(&mut self, track_count: usize) {
        if track_count == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if i == 0 {
                    track_count - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// The id of the track under the cursor.
    pub(crate) fn selected_id(&self, songs: &[Track]) -> Option<TrackId> {
        let index = self.list_state.selected()?;
        songs.get(index).map(|track| track.id)
    }

    /// Keeps the cursor on a valid row after a track is removed.
    pub(crate) fn clamp_selection(&mut self, track_count: usize) {
        if track_count == 0 {
            self.list_state.select(None);
            return;
        }

        match self.list_state.selected() {
            Some(i) if i >= track_count => self.list_state.select(Some(track_count - 1)),
            None => self.list_state.select(Some(0)),
            _ => {}
        }
    }

    /// Moves the cursor back to the top, e.g. after a shuffle or reset.
    pub(crate) fn reset_selection(&mut self, track_count: usize) {
        if track_count == 0 {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(0));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: TrackId) -> Track {
        Track {
            id,
            title: format!("Track {}", id),
            artist: "Artist".to_string(),
            duration: "3:00".to_string(),
            source: format!("track-{}.mp3", id),
        }
    }

    #[test]
    fn cursor_wraps_in_both_directions() {
        let mut view = PlaylistView::new(3);

        view.select_previous(3);
        assert_eq!(view.selected_id(&[track(0), track(1), track(2)]), Some(2));

        view.select_next(3);
        assert_eq!(view.selected_id(&[track(0), track(1), track(2)]), Some(0));
    }

    #[test]
    fn cursor_movement_on_empty_list_stays_unselected() {
        let mut view = PlaylistView::new(0);

        view.select_next(0);
        view.select_previous(0);
        assert_eq!(view.selected_id(&[]), None);
    }

    #[test]
    fn clamp_pulls_the_cursor_back_onto_the_list() {
        let mut view = PlaylistView::new(3);
        view.select_next(3);
        view.select_next(3);

        // two tracks remain, cursor was on index 2
        view.clamp_selection(2);
        assert_eq!(view.selected_id(&[track(0), track(1)]), Some(1));

        view.clamp_selection(0);
        assert_eq!(view.selected_id(&[]), None);
    }
}
