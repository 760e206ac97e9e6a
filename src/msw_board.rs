// Board state machine for a single minesweeper round
// Handles mine placement, adjacency counts, reveals, flags, and win/loss detection

use rand::prelude::*;
use std::collections::VecDeque;

/// A single cell on the minesweeper board
#[derive(Clone, Copy, Default)]
pub struct Cell {
    pub mine: bool,       // Contains a mine
    pub revealed: bool,   // Has been opened
    pub flagged: bool,    // Carries a player flag
    pub adj: u8,          // Adjacent mine count (0-8)
    pub exploded: bool,   // The mine whose reveal ended the round
    pub wrong_flag: bool, // Flagged but empty, marked when the round is lost
}

/// Round outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

/// The minefield
/// Cells are stored row-major. Mine placement is deferred to the first
/// reveal so the first click can never hit a mine.
pub struct Board {
    w: usize,
    h: usize,
    mines: usize,
    cells: Vec<Cell>,
    state: GameState,
    placed: bool,
}

impl Board {
    /// Create an empty board; mines appear on the first reveal
    pub fn new(w: usize, h: usize, mines: usize) -> Self {
        Board {
            w,
            h,
            mines,
            cells: vec![Cell::default(); w * h],
            state: GameState::Playing,
            placed: false,
        }
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Convert (x, y) coordinates to flat array index
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    /// Read-only view of the cell at (x, y)
    pub fn cell(&self, x: usize, y: usize) -> &Cell {
        &self.cells[self.index(x, y)]
    }

    /// Randomly place mines, never on the avoided cell, then fill in
    /// adjacency counts for the whole board
    fn place_mines<R: Rng>(&mut self, rng: &mut R, avoid: usize) {
        let n = self.w * self.h;
        let mines = self.mines.min(n.saturating_sub(1));
        let mut placed = 0;
        while placed < mines {
            let i = rng.gen_range(0..n);
            if i == avoid || self.cells[i].mine {
                continue;
            }
            self.cells[i].mine = true;
            placed += 1;
        }
        self.compute_adjacency();
    }

    fn compute_adjacency(&mut self) {
        for y in 0..self.h {
            for x in 0..self.w {
                let mut adj = 0u8;
                for oy in y.saturating_sub(1)..=(y + 1).min(self.h - 1) {
                    for ox in x.saturating_sub(1)..=(x + 1).min(self.w - 1) {
                        if ox == x && oy == y {
                            continue;
                        }
                        if self.cells[self.index(ox, oy)].mine {
                            adj += 1;
                        }
                    }
                }
                let idx = self.index(x, y);
                self.cells[idx].adj = adj;
            }
        }
    }

    /// Reveal the cell at (x, y)
    /// - The first reveal places mines away from the clicked cell
    /// - Revealing a mine ends the round
    /// - A cell with no adjacent mines opens its whole region (flood fill)
    pub fn reveal(&mut self, x: usize, y: usize) {
        if self.state != GameState::Playing || x >= self.w || y >= self.h {
            return;
        }
        let idx = self.index(x, y);
        if self.cells[idx].revealed || self.cells[idx].flagged {
            return;
        }
        if !self.placed {
            self.place_mines(&mut thread_rng(), idx);
            self.placed = true;
        }
        if self.cells[idx].mine {
            self.cells[idx].revealed = true;
            self.finish_loss(idx);
            return;
        }
        self.flood_reveal(x, y);
        if self.all_safe_revealed() {
            self.finish_win();
        }
    }

    /// Open (x, y) and, across zero-count cells, everything connected to it.
    /// Uses an explicit worklist so large boards cannot exhaust the stack.
    fn flood_reveal(&mut self, x: usize, y: usize) {
        let mut work = VecDeque::new();
        work.push_back((x, y));
        while let Some((cx, cy)) = work.pop_front() {
            let idx = self.index(cx, cy);
            if self.cells[idx].revealed || self.cells[idx].flagged {
                continue;
            }
            self.cells[idx].revealed = true;
            if self.cells[idx].adj > 0 {
                continue;
            }
            for oy in cy.saturating_sub(1)..=(cy + 1).min(self.h - 1) {
                for ox in cx.saturating_sub(1)..=(cx + 1).min(self.w - 1) {
                    if ox == cx && oy == cy {
                        continue;
                    }
                    let nidx = self.index(ox, oy);
                    if !self.cells[nidx].revealed
                        && !self.cells[nidx].flagged
                        && !self.cells[nidx].mine
                    {
                        work.push_back((ox, oy));
                    }
                }
            }
        }
    }

    /// Loss bookkeeping: show every mine, mark the fatal cell, and mark
    /// flags that were sitting on empty cells
    fn finish_loss(&mut self, hit: usize) {
        self.state = GameState::Lost;
        self.cells[hit].exploded = true;
        for cell in self.cells.iter_mut() {
            if cell.mine {
                cell.revealed = true;
            } else if cell.flagged {
                cell.wrong_flag = true;
            }
        }
    }

    /// Win bookkeeping: flag whatever mines the player left unmarked
    fn finish_win(&mut self) {
        self.state = GameState::Won;
        for cell in self.cells.iter_mut() {
            if cell.mine {
                cell.flagged = true;
            }
        }
    }

    fn all_safe_revealed(&self) -> bool {
        self.cells.iter().all(|c| c.mine || c.revealed)
    }

    /// Flip the flag on a covered cell
    /// Revealed cells and finished rounds are left alone
    pub fn toggle_flag(&mut self, x: usize, y: usize) {
        if self.state != GameState::Playing || x >= self.w || y >= self.h {
            return;
        }
        let idx = self.index(x, y);
        if self.cells[idx].revealed {
            return;
        }
        self.cells[idx].flagged = !self.cells[idx].flagged;
    }

    /// Start a fresh round with the same dimensions and mine count
    /// The new layout materializes on the next first reveal
    pub fn restart(&mut self) {
        *self = Board::new(self.w, self.h, self.mines);
    }

    /// Mine counter display value (total mines minus flags placed)
    /// Can be negative if the player places too many flags
    pub fn remaining_mines(&self) -> isize {
        let flagged = self.cells.iter().filter(|c| c.flagged).count();
        self.mines as isize - flagged as isize
    }
}
