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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. The primary entry point is the
//! [`draw`] function, which is called after every processed application
//! event, so the display always reflects the latest playlist and playback
//! state.

pub(crate) mod icons;
mod player;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::{Block, Padding, Paragraph},
};

use crate::{App, render::player::draw_player};

/// Renders the user interface to the terminal frame.
///
/// The screen is split into the playlist pane, the player pane, and a
/// one-line status footer showing the most recent recoverable error.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(6),
            Constraint::Length(1),
        ])
        .split(area);

    app.playlist_view
        .draw(f, outer[0], &app.playlist, &app.theme);

    draw_player(f, outer[1], app);

    draw_status(f, outer[2], app);
}

fn draw_status(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let message = app.status.as_deref().unwrap_or("");

    let status = Paragraph::new(message)
        .style(Style::default().fg(app.theme.status_fg))
        .block(Block::default().padding(Padding::horizontal(1)));

    f.render_widget(status, area);
}
