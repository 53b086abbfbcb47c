//! Interactive terminal keypad
//!
//! A thin collaborator around [`Calculator`]: crossterm key events become
//! [`Input`]s, and the screen is redrawn from a [`Snapshot`] after each one.

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use tracing::debug;

use crate::controller::{Calculator, Snapshot};
use crate::error::CliResult;
use crate::input::{Input, Keypad};

const DISPLAY_WIDTH: usize = 23;

/// Actions produced by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward an input to the calculator
    Input(Input),
    /// Leave the session
    Quit,
    /// No action (ignored input)
    None,
}

/// Maps a key event to an action.
///
/// Besides the standard keyboard equivalents, `%` applies percent, F9
/// toggles the sign, Ctrl+L clears history and Ctrl+C / Ctrl+Q quit.
#[must_use]
pub fn map_key_event(event: KeyEvent) -> KeyAction {
    let KeyEvent {
        code, modifiers, ..
    } = event;

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c' | 'q') => KeyAction::Quit,
            KeyCode::Char('l') => KeyAction::Input(Input::ClearHistory),
            _ => KeyAction::None,
        };
    }

    let input = match code {
        KeyCode::Char('%') => Some(Input::Percent),
        KeyCode::Char(c) => Input::from_char(c),
        KeyCode::Enter => Some(Input::Evaluate),
        KeyCode::Backspace => Some(Input::Backspace),
        KeyCode::Esc => Some(Input::Clear),
        KeyCode::F(9) => Some(Input::ToggleSign),
        _ => None,
    };

    input.map_or(KeyAction::None, KeyAction::Input)
}

/// Lays out the screen as plain text lines
#[must_use]
pub fn render_lines(snapshot: &Snapshot, keypad: &Keypad) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!("┌{}┐", "─".repeat(DISPLAY_WIDTH + 2)));
    lines.push(format!("│ {:>DISPLAY_WIDTH$} │", snapshot.display));
    lines.push(format!("└{}┘", "─".repeat(DISPLAY_WIDTH + 2)));

    for row in 0..keypad.rows() {
        let cells: Vec<String> = (0..keypad.cols())
            .filter_map(|col| keypad.button_at(row, col))
            .map(|button| format!("[ {} ]", button.label()))
            .collect();
        lines.push(format!(" {}", cells.join(" ")));
    }

    lines.push(String::new());
    lines.push("History".to_string());
    if snapshot.history.is_empty() {
        lines.push("  No calculations yet.".to_string());
    } else {
        lines.extend(
            snapshot
                .history
                .iter()
                .map(|entry| format!("  {}", entry.display())),
        );
    }

    lines.push(String::new());
    lines.push("Enter = evaluate  Esc = clear  F9 = ±  Ctrl+L = clear history  Ctrl+Q = quit".to_string());
    lines
}

/// Restores the terminal when dropped
struct RawModeGuard;

impl RawModeGuard {
    fn enter(out: &mut impl Write) -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, Hide)?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

fn draw(out: &mut impl Write, lines: &[String]) -> io::Result<()> {
    queue!(out, Clear(ClearType::All))?;
    for (row, line) in lines.iter().enumerate() {
        queue!(out, MoveTo(0, row as u16), Print(line))?;
    }
    out.flush()
}

/// Runs the interactive session until the user quits
pub fn run_session(calc: &mut Calculator) -> CliResult<()> {
    let keypad = Keypad::new();
    let mut stdout = io::stdout();
    let _guard = RawModeGuard::enter(&mut stdout)?;

    loop {
        draw(&mut stdout, &render_lines(&calc.snapshot(), &keypad))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match map_key_event(key) {
            KeyAction::Quit => break,
            KeyAction::Input(input) => {
                let outcome = calc.dispatch(input);
                debug!(?outcome, "key handled");
            }
            KeyAction::None => {}
        }
    }

    Ok(())
}
