/// Terminal frontend for the wireframe cube
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use std::io::{self, stdout, Write};
use wirecube_core::{CubeRotator, Key, RotatorConfig};

pub mod renderer;

pub use renderer::{CharCanvas, Viewport};

/// Rows reserved above the canvas for the status line
const STATUS_ROWS: u16 = 1;

const STATUS: &str = "WireCube | Q=XYZ  A=-X  W/S=+/-Y  E/D=+/-Z | Esc=Quit";

/// What the event loop should do after an input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Apply a key (or ignore it, if unbound) and redraw
    Press(Option<Key>),
    Resize(u16, u16),
    Quit,
    Nothing,
}

/// Translate a crossterm event into an [`Action`]
pub fn action_for(event: &Event) -> Action {
    match event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            ..
        }) => {
            if *kind == KeyEventKind::Release {
                return Action::Nothing;
            }
            match code {
                KeyCode::Esc => Action::Quit,
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
                KeyCode::Char(c) => Action::Press(Key::from_char(*c)),
                _ => Action::Press(None),
            }
        }
        Event::Resize(columns, rows) => Action::Resize(*columns, *rows),
        _ => Action::Nothing,
    }
}

/// Restore the terminal to cooked mode on the main screen
pub fn restore_terminal() -> io::Result<()> {
    terminal::disable_raw_mode()?;
    execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)
}

/// Main application struct for the terminal cube viewer
pub struct TerminalApp {
    rotator: CubeRotator,
    canvas: CharCanvas,
    running: bool,
}

impl TerminalApp {
    pub fn new(config: RotatorConfig) -> io::Result<Self> {
        let (columns, rows) = terminal::size()?;
        Ok(Self {
            rotator: CubeRotator::new(config),
            canvas: canvas_for(columns, rows),
            running: true,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();
        if let Err(e) = &result {
            log::error!("event loop failed: {e}");
        }

        // Cleanup
        restore_terminal()?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        self.rotator.render(&mut self.canvas);
        self.present()?;

        while self.running {
            let event = event::read()?;
            match action_for(&event) {
                Action::Press(key) => {
                    self.rotator.key_pressed(key, &mut self.canvas);
                    self.present()?;
                }
                Action::Resize(columns, rows) => {
                    log::info!("terminal resized to {columns}x{rows}");
                    self.canvas = canvas_for(columns, rows);
                    self.rotator.render(&mut self.canvas);
                    self.present()?;
                }
                Action::Quit => self.running = false,
                Action::Nothing => {}
            }
        }

        Ok(())
    }

    fn present(&self) -> io::Result<()> {
        let mut stdout = stdout();
        queue!(stdout, terminal::Clear(ClearType::All))?;
        self.canvas.draw(&mut stdout, STATUS_ROWS)?;

        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(STATUS),
            ResetColor
        )?;

        stdout.flush()
    }
}

fn canvas_for(columns: u16, rows: u16) -> CharCanvas {
    let rows = rows.saturating_sub(STATUS_ROWS);
    CharCanvas::new(columns as usize, rows as usize, Viewport::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(
            action_for(&key(KeyCode::Char('w'), KeyModifiers::NONE)),
            Action::Press(Some(Key::W))
        );
        assert_eq!(
            action_for(&key(KeyCode::Char('Q'), KeyModifiers::SHIFT)),
            Action::Press(Some(Key::Q))
        );
    }

    #[test]
    fn test_unbound_keys_still_redraw() {
        assert_eq!(
            action_for(&key(KeyCode::Char('x'), KeyModifiers::NONE)),
            Action::Press(None)
        );
        assert_eq!(
            action_for(&key(KeyCode::Left, KeyModifiers::NONE)),
            Action::Press(None)
        );
    }

    #[test]
    fn test_quit() {
        assert_eq!(action_for(&key(KeyCode::Esc, KeyModifiers::NONE)), Action::Quit);
        assert_eq!(
            action_for(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
    }

    #[test]
    fn test_release_ignored() {
        let event = Event::Key(KeyEvent {
            code: KeyCode::Char('w'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(action_for(&event), Action::Nothing);
    }

    #[test]
    fn test_resize() {
        assert_eq!(action_for(&Event::Resize(100, 40)), Action::Resize(100, 40));
        let canvas = canvas_for(100, 40);
        assert_eq!(canvas.rows(), 39);
        assert_eq!(canvas.columns(), 100);
    }
}
