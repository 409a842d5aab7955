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

//! Terminal environment and styling utilities.
//!
//! This module manipulates the terminal emulator's own properties using
//! OSC (Operating System Command) escape sequences.
//!
//! # Compatibility
//!
//! These functions rely on the terminal emulator supporting the specific
//! OSC codes. Most modern terminals (XTerm, iTerm2, Alacritty, Kitty)
//! support these sequences.

use std::io::{self, Write};

use ratatui::style::Color;

/// Sets the terminal background color using an OSC 11 escape sequence.
///
/// Non-RGB colours are ignored; they have no portable hex representation
/// to hand to the emulator.
///
/// # Note
///
/// This function flushes `stdout` immediately to ensure the change is
/// applied without delay.
pub(crate) fn set_terminal_bg(colour: Color) {
    if let Color::Rgb(r, g, b) = colour {
        print!("\x1b]11;#{:02x}{:02x}{:02x}\x07", r, g, b);
        io::stdout().flush().ok();
    }
}

/// Resets the terminal background to its default color.
///
/// This sends the OSC 111 escape sequence, which instructs the terminal to
/// revert the background color to the user's original configuration. It is
/// called during application cleanup.
pub(crate) fn reset_terminal_bg() {
    print!("\x1b]111\x07");
    io::stdout().flush().ok();
}
