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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application — the
//! immutable [`Track`] records that make up the catalog, and the mutable
//! [`playlist::Playlist`] working set built from them.

pub(crate) mod catalog;
pub(crate) mod playlist;

use serde::{Deserialize, Serialize};

pub(crate) type TrackId = u32;

/// One playable song entry.
///
/// Tracks are created once at startup from the catalog and never mutated.
/// The `duration` is a display string (for example `"4:25"`) rather than a
/// number of seconds; it is shown verbatim in the playlist and never used
/// for arithmetic. `source` is the URL or path handed to the audio engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Track {
    pub(crate) id: TrackId,
    pub(crate) title: String,
    pub(crate) artist: String,
    pub(crate) duration: String,
    pub(crate) source: String,
}
