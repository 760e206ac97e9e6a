// Mouse input translation
// Turns raw pointer events into board coordinates and actions

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::msw_board::Board;

/// A board mutation requested by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardAction {
    Reveal(usize, usize),
    ToggleFlag(usize, usize),
}

/// Maps pointer positions to cells using the configured cell width
pub struct InputHandler {
    cell_width: u16,
}

impl InputHandler {
    pub fn new(cell_width: u16) -> Self {
        InputHandler {
            cell_width: cell_width.max(1),
        }
    }

    /// Translate a mouse event into a board action
    /// `area` is the board interior as drawn last frame. Anything that is not
    /// a button press inside it maps to None.
    pub fn action_for(&self, me: &MouseEvent, area: Rect, board: &Board) -> Option<BoardAction> {
        match me.kind {
            MouseEventKind::Down(MouseButton::Left) => self
                .cell_at(me.column, me.row, area, board)
                .map(|(x, y)| BoardAction::Reveal(x, y)),
            MouseEventKind::Down(MouseButton::Right) => self
                .cell_at(me.column, me.row, area, board)
                .map(|(x, y)| BoardAction::ToggleFlag(x, y)),
            _ => None,
        }
    }

    /// Cell under the given screen position, if any
    fn cell_at(&self, column: u16, row: u16, area: Rect, board: &Board) -> Option<(usize, usize)> {
        if column < area.x || row < area.y {
            return None;
        }
        let local_x = (column - area.x) as usize;
        let local_y = (row - area.y) as usize;
        if local_x >= area.width as usize || local_y >= area.height as usize {
            return None;
        }
        let cx = local_x / self.cell_width as usize;
        let cy = local_y;
        if cx < board.width() && cy < board.height() {
            Some((cx, cy))
        } else {
            None
        }
    }
}
