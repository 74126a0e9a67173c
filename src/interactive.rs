//! Keyboard-driven terminal editor.
//!
//! Keys: F1 or Ctrl-S saves, Up/Down step the current field of a chosen
//! record, Tab switches between width and height, Esc or `q` exits.
//! Errors are shown in the status line; once a file is loaded nothing
//! short of an I/O failure on the terminal ends the loop.

use std::io::{self, BufRead, Write};

use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{self, Clear, ClearType};

use crate::error::FigeditError;
use crate::record::Field;
use crate::session::{Direction, Session};

/// What a key press asks the editor to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Save,
    Exit,
    Adjust(Direction),
    ToggleField,
}

#[derive(Clone, Copy, Debug)]
pub struct EditorOptions {
    pub field: Field,
    pub step: i64,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            field: Field::Width,
            step: 1,
        }
    }
}

/// Map a key event to an editor action. Releases and repeats are ignored.
pub fn key_action(key: &KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::F(1) => Some(Action::Save),
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Save),
        KeyCode::Esc | KeyCode::Char('q') => Some(Action::Exit),
        KeyCode::Up => Some(Action::Adjust(Direction::Increase)),
        KeyCode::Down => Some(Action::Adjust(Direction::Decrease)),
        KeyCode::Tab => Some(Action::ToggleField),
        _ => None,
    }
}

/// Parse a typed 1-based record number, accepting only `1..=len`.
pub fn parse_choice(input: &str, len: usize) -> Option<usize> {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|choice| (1..=len).contains(choice))
}

/// Run the editor until the user exits.
pub fn run(session: &mut Session, options: EditorOptions) -> Result<(), FigeditError> {
    let mut stdout = io::stdout();
    let stdin = io::stdin();
    let mut field = options.field;
    let mut status: Option<String> = None;

    loop {
        draw(&mut stdout, session, field, status.take())?;

        match read_action()? {
            Action::Save => {
                status = Some(match session.save() {
                    Ok(()) => "File saved.".to_string(),
                    Err(err) => format!("Error: {err}"),
                });
            }
            Action::Exit => {
                writeln!(stdout, "Exiting program.")?;
                return Ok(());
            }
            Action::ToggleField => {
                field = match field {
                    Field::Width => Field::Height,
                    Field::Height => Field::Width,
                };
            }
            Action::Adjust(direction) => {
                write!(stdout, "\nEnter the number of the item to change: ")?;
                stdout.flush()?;

                let mut input = String::new();
                stdin.lock().read_line(&mut input)?;

                status = match parse_choice(&input, session.store().len()) {
                    Some(choice) => session
                        .adjust(choice, field, direction, options.step)
                        .err()
                        .map(|err| format!("Error: {err}")),
                    None => Some(format!("No item numbered '{}'.", input.trim())),
                };
            }
        }
    }
}

fn draw(
    stdout: &mut io::Stdout,
    session: &Session,
    field: Field,
    status: Option<String>,
) -> Result<(), FigeditError> {
    execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
    write!(stdout, "{}", session.render())?;
    writeln!(
        stdout,
        "\nPress F1 to save, Up/Down arrows to change {field}, Tab to switch field, Esc to exit."
    )?;
    if let Some(status) = status {
        writeln!(stdout, "{status}")?;
    }
    stdout.flush()?;
    Ok(())
}

/// Block until a key maps to an action, with raw mode on only while waiting.
fn read_action() -> Result<Action, FigeditError> {
    let _raw = RawMode::enable()?;
    loop {
        if let Event::Key(key) = event::read()? {
            if let Some(action) = key_action(&key) {
                return Ok(action);
            }
        }
    }
}

struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(RawMode)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        if let Err(err) = terminal::disable_raw_mode() {
            log::warn!("failed to leave raw mode: {err}");
        }
    }
}
