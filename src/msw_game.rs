// Terminal lifecycle and the main event loop
// Applies mouse and key input to the board and redraws after every pass

use anyhow::{Context, Result};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use std::io;
use std::time::Duration;

use crate::msw_board::Board;
use crate::msw_input::{BoardAction, InputHandler};
use crate::msw_render::Renderer;

/// Owns the board and its collaborators and drives one session
pub struct GameManager {
    board: Board,
    input: InputHandler,
    renderer: Renderer,
}

impl GameManager {
    pub fn new(width: usize, height: usize, mines: usize, cell_size: u16) -> Self {
        GameManager {
            board: Board::new(width, height, mines),
            input: InputHandler::new(cell_size),
            renderer: Renderer::new(cell_size),
        }
    }

    /// Run until the player quits
    /// The terminal is put into raw mode with mouse capture on the alternate
    /// screen, and restored on the way out even when the loop fails.
    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnableMouseCapture, terminal::EnterAlternateScreen)
            .context("failed to acquire the terminal")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            DisableMouseCapture,
            terminal::LeaveAlternateScreen
        )?;
        terminal.show_cursor()?;
        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        let tick_rate = Duration::from_millis(200);
        let mut board_rect: Option<Rect> = None;

        loop {
            terminal.draw(|f| {
                board_rect = self.renderer.draw(f, &self.board);
            })?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(KeyEvent {
                        code,
                        kind: KeyEventKind::Press,
                        ..
                    }) => match code {
                        KeyCode::Esc => {
                            log::debug!("exit requested");
                            break;
                        }
                        KeyCode::Char('r') | KeyCode::Char('R') => {
                            log::debug!("starting a new round");
                            self.board.restart();
                        }
                        _ => {}
                    },
                    Event::Mouse(me) => {
                        if let Some(area) = board_rect {
                            if let Some(action) = self.input.action_for(&me, area, &self.board) {
                                let before = self.board.state();
                                match action {
                                    BoardAction::Reveal(x, y) => self.board.reveal(x, y),
                                    BoardAction::ToggleFlag(x, y) => self.board.toggle_flag(x, y),
                                }
                                let after = self.board.state();
                                if before != after {
                                    log::debug!("round finished: {:?}", after);
                                }
                            }
                        }
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }
}
