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

//! Render the music player interface.
//!
//! This module renders the now-playing display: the current track, its
//! playback state and elapsed time, the play-affordance label naming the
//! track the play key would start, and the key map.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    App,
    model::playlist::PlaybackState,
    player::PlayerState,
    render::icons::{ICON_PAUSE, ICON_PLAY, ICON_STOP},
    util,
};

/// Renders the main player widget including track info and the key map.
pub(crate) fn draw_player(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(app.theme.border_colour))
        .padding(Padding::horizontal(1));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner_area);

    let icon = match app.player_state {
        PlayerState::Playing => ICON_PLAY,
        PlayerState::Paused => ICON_PAUSE,
        PlayerState::Stopped => ICON_STOP,
    };

    if let Some(track) = app.playlist.current() {
        let track_line = Line::from(vec![
            Span::styled(format!(" {} ", icon), Style::default().add_modifier(Modifier::BOLD))
                .fg(Color::White),
            Span::styled(&track.title, Style::default().add_modifier(Modifier::BOLD))
                .fg(app.theme.accent_colour),
            Span::raw(" by "),
            Span::styled(&track.artist, Style::default().add_modifier(Modifier::BOLD))
                .fg(app.theme.accent_colour),
        ]);
        f.render_widget(Paragraph::new(track_line), chunks[0]);

        // While paused, show the saved offset playback would resume from
        // rather than the engine's last reported position.
        let position = match app.playlist.state() {
            PlaybackState::Playing => app.player_time,
            _ => app.playlist.elapsed(),
        };

        let time_line = Line::from(vec![
            Span::raw("   "),
            Span::styled(
                util::format::format_time(position as u64),
                Style::default().fg(app.theme.accent_colour),
            ),
            Span::raw(" / "),
            Span::styled(
                track.duration.as_str(),
                Style::default().fg(app.theme.list_duration_fg),
            ),
        ]);
        f.render_widget(Paragraph::new(time_line), chunks[1]);
    } else {
        f.render_widget(
            Paragraph::new(format!(" {} Nothing playing", ICON_STOP)),
            chunks[0],
        );
    }

    // The play-affordance label: what "p" would start
    let affordance = match app.playlist.play_target() {
        Some(track) => format!(" p: Play {}", track.title),
        None => " p: Play".to_string(),
    };
    f.render_widget(
        Paragraph::new(affordance).style(Style::default().fg(app.theme.list_duration_fg)),
        chunks[2],
    );

    let hints = " enter play | space pause | n next | b prev | s shuffle | d delete | t sort | q quit";
    f.render_widget(
        Paragraph::new(hints).style(Style::default().fg(app.theme.border_colour)),
        chunks[3],
    );
}
