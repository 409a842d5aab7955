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

//! The immutable master catalog of tracks.
//!
//! The catalog is built once at startup and never changes afterwards. The
//! working playlist starts as a copy of it and is restored from it when the
//! user resets an emptied playlist.

use crate::{config::AppConfig, model::Track};

const STREAM_BASE: &str = "https://s3.amazonaws.com/org.freecodecamp.mp3-player-project";

pub(crate) struct Catalog {
    tracks: Vec<Track>,
}

impl Catalog {
    /// Builds the catalog from the application configuration.
    ///
    /// A non-empty `tracks` list in the config file replaces the built-in
    /// catalog wholesale; duplicate ids are dropped, keeping the first
    /// occurrence, so that playlist operations can rely on id uniqueness.
    pub(crate) fn from_config(config: &AppConfig) -> Self {
        if config.tracks.is_empty() {
            return Self::builtin();
        }

        let mut tracks: Vec<Track> = Vec::with_capacity(config.tracks.len());
        for track in &config.tracks {
            if !tracks.iter().any(|t| t.id == track.id) {
                tracks.push(track.clone());
            }
        }

        Self { tracks }
    }

    /// The catalog that ships in the binary.
    pub(crate) fn builtin() -> Self {
        let entries: [(&str, &str, &str); 10] = [
            ("Scratching The Surface", "4:25", "scratching-the-surface.mp3"),
            ("Can't Stay Down", "4:15", "cant-stay-down.mp3"),
            ("Still Learning", "3:51", "still-learning.mp3"),
            ("Cruising for a Musing", "3:34", "cruising-for-a-musing.mp3"),
            ("Never Not Favored", "3:35", "never-not-favored.mp3"),
            ("From the Ground Up", "3:12", "from-the-ground-up.mp3"),
            ("Walking on Air", "3:25", "walking-on-air.mp3"),
            (
                "Can't Stop Me. Can't Even Slow Me Down.",
                "3:52",
                "cant-stop-me-cant-even-slow-me-down.mp3",
            ),
            ("The Surest Way Out is Through", "3:10", "the-surest-way-out-is-through.mp3"),
            ("Chasing That Feeling", "2:43", "chasing-that-feeling.mp3"),
        ];

        let tracks = entries
            .iter()
            .enumerate()
            .map(|(id, (title, duration, file))| Track {
                id: id as u32,
                title: title.to_string(),
                artist: "Quincy Larson".to_string(),
                duration: duration.to_string(),
                source: format!("{}/{}", STREAM_BASE, file),
            })
            .collect();

        Self { tracks }
    }

    pub(crate) fn tracks(&self) -> &[Track] {
        &self.tracks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_unique_ids() {
        let catalog = Catalog::builtin();
        let tracks = catalog.tracks();

        assert_eq!(tracks.len(), 10);
        for track in tracks {
            assert_eq!(1, tracks.iter().filter(|t| t.id == track.id).count());
        }
    }

    #[test]
    fn empty_config_falls_back_to_builtin() {
        let catalog = Catalog::from_config(&AppConfig::default());
        assert_eq!(catalog.tracks().len(), 10);
    }

    #[test]
    fn config_catalog_drops_duplicate_ids() {
        let track = |id, title: &str| Track {
            id,
            title: title.to_string(),
            artist: "Artist".to_string(),
            duration: "1:00".to_string(),
            source: format!("{}.mp3", title),
        };

        let config = AppConfig {
            tracks: vec![track(1, "One"), track(2, "Two"), track(1, "One Again")],
            ..AppConfig::default()
        };

        let catalog = Catalog::from_config(&config);
        let titles: Vec<&str> = catalog.tracks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["One", "Two"]);
    }
}
