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

//! UI rendering logic for the playlist pane.
//!
//! The pane lists the working playlist with the cursor row highlighted and
//! the currently playing track marked. When the playlist has been emptied
//! by deletions it shows the reset affordance instead of the list.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
};

use crate::{
    components::PlaylistView, model::playlist::Playlist, render::icons::ICON_PLAY, theme::Theme,
};

impl PlaylistView {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, playlist: &Playlist, theme: &Theme) {
        if playlist.is_empty() {
            draw_reset_affordance(f, area, theme);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        let header_block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::horizontal(1));

        let header = Paragraph::new(format!("Playlist | {} tracks", playlist.songs().len()))
            .block(header_block);
        f.render_widget(header, chunks[0]);

        let current_id = playlist.current_id();

        let items: Vec<ListItem> = playlist
            .songs()
            .iter()
            .map(|track| {
                let is_current = current_id == Some(track.id);

                let marker = if is_current {
                    format!("{} ", ICON_PLAY)
                } else {
                    "  ".to_string()
                };

                let title_style = if is_current {
                    Style::default()
                        .fg(theme.accent_colour)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.list_title_fg)
                };

                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(theme.accent_colour)),
                    Span::styled(format!("{:<44}", track.title), title_style),
                    Span::styled(
                        format!("{:<24}", track.artist),
                        Style::default().fg(theme.list_artist_fg),
                    ),
                    Span::styled(
                        format!("{:>5}", track.duration),
                        Style::default().fg(theme.list_duration_fg),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().bg(theme.cursor_bg))
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, chunks[1], &mut self.list_state);
    }
}

/// Renders the reset affordance shown when deletions empty the playlist.
fn draw_reset_affordance(f: &mut Frame, area: Rect, theme: &Theme) {
    let block = Block::default()
        .title(" Playlist ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_colour))
        .padding(Padding::uniform(1));

    let lines = vec![
        Line::from(""),
        Line::from("The playlist is empty."),
        Line::from(""),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled(
                "r",
                Style::default()
                    .fg(theme.accent_colour)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" to reset the playlist from the catalog."),
        ]),
    ];

    let affordance = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);

    f.render_widget(affordance, area);
}
