// Frame drawing
// Renders the minefield, the status line, and the end-of-round banner

use ratatui::backend::Backend;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Span, Spans, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::msw_board::{Board, Cell, GameState};
use crate::msw_color::{number_color, resolve};

/// Read-only view of the board
/// Glyphs and colors are resolved once at construction.
pub struct Renderer {
    cell_width: u16,
    glyph_covered: (&'static str, Color),
    glyph_mine: (&'static str, Color),
    glyph_flag: (&'static str, Color),
    glyph_wrong: (&'static str, Color),
    board_bg: Color,
    exploded_bg: Color,
    exploded_fg: Color,
    counter_warn_fg: Color,
    hint_key_fg: Color,
    num_colors: [Color; 8],
}

impl Renderer {
    pub fn new(cell_width: u16) -> Self {
        Renderer {
            cell_width: cell_width.max(1),
            glyph_covered: ("■", resolve((204, 204, 204), 250, Color::Gray)),
            glyph_mine: ("☼", resolve((12, 12, 12), 232, Color::Black)),
            glyph_flag: ("⚑", resolve((197, 15, 31), 160, Color::Red)),
            glyph_wrong: ("✗", resolve((231, 72, 86), 203, Color::LightRed)),
            board_bg: resolve((118, 118, 118), 243, Color::DarkGray),
            exploded_bg: resolve((197, 15, 31), 160, Color::Red),
            exploded_fg: resolve((242, 242, 242), 255, Color::White),
            counter_warn_fg: resolve((231, 72, 86), 203, Color::LightRed),
            hint_key_fg: resolve((193, 156, 0), 178, Color::Yellow),
            num_colors: [
                number_color(1),
                number_color(2),
                number_color(3),
                number_color(4),
                number_color(5),
                number_color(6),
                number_color(7),
                number_color(8),
            ],
        }
    }

    /// Outer size of the board block, borders included
    pub fn board_size(&self, board: &Board) -> (u16, u16) {
        (
            board.width() as u16 * self.cell_width + 2,
            board.height() as u16 + 2,
        )
    }

    /// Draw one frame
    /// Returns the board interior for mouse mapping, or None when the
    /// terminal is too small to fit the board.
    pub fn draw<B: Backend>(&self, f: &mut Frame<B>, board: &Board) -> Option<Rect> {
        let size = f.size();
        let (need_w, need_h) = self.board_size(board);
        // If terminal too small, render a centered warning and skip normal UI
        if size.width < need_w || size.height < need_h + 3 {
            let warn_lines = vec![
                Spans::from(Span::raw("Terminal size too small.")),
                Spans::from(Span::raw(format!(
                    "Minimum required: {} x {}",
                    need_w,
                    need_h + 3
                ))),
            ];
            let warn = Paragraph::new(Text::from(warn_lines))
                .block(Block::default().borders(Borders::ALL).title("Resize Terminal"))
                .alignment(Alignment::Center);
            f.render_widget(Clear, size);
            let w = 40u16.min(size.width.saturating_sub(2));
            let h = 4u16.min(size.height.saturating_sub(2));
            f.render_widget(warn, center_rect(w, h, size));
            return None;
        }

        // layout: center board, bottom status
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(0)
            .constraints([Constraint::Min(3), Constraint::Length(3)].as_ref())
            .split(size);

        let board_area = center_rect(need_w, need_h, chunks[0]);
        self.draw_board(f, board, board_area);
        self.draw_status(f, board, chunks[1]);
        if board.state() != GameState::Playing {
            self.draw_banner(f, board.state(), size);
        }
        Some(inner(board_area))
    }

    fn draw_board<B: Backend>(&self, f: &mut Frame<B>, board: &Board, area: Rect) {
        let mut lines = vec![];
        for y in 0..board.height() {
            let mut spans = vec![];
            for x in 0..board.width() {
                let (s, style) = self.cell_appearance(board.cell(x, y));
                spans.push(Span::styled(self.pad_glyph(&s), style));
            }
            lines.push(Spans::from(spans));
        }
        let paragraph = Paragraph::new(Text::from(lines))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Minesweeper")
                    .title_alignment(Alignment::Center),
            )
            .alignment(Alignment::Left);
        f.render_widget(paragraph, area);
    }

    /// Glyph and style for a single cell
    fn cell_appearance(&self, cell: &Cell) -> (String, Style) {
        let style = Style::default().bg(self.board_bg);
        if cell.revealed {
            if cell.mine {
                if cell.exploded {
                    let style = Style::default()
                        .bg(self.exploded_bg)
                        .fg(self.exploded_fg)
                        .add_modifier(Modifier::BOLD);
                    return (self.glyph_mine.0.to_string(), style);
                }
                return (self.glyph_mine.0.to_string(), style.fg(self.glyph_mine.1));
            }
            if cell.adj > 0 {
                let n = (cell.adj as usize).saturating_sub(1);
                return (format!("{}", cell.adj), style.fg(self.num_colors[n]));
            }
            return (" ".to_string(), style);
        }
        if cell.wrong_flag {
            let style = style.fg(self.glyph_wrong.1).add_modifier(Modifier::BOLD);
            return (self.glyph_wrong.0.to_string(), style);
        }
        if cell.flagged {
            return (self.glyph_flag.0.to_string(), style.fg(self.glyph_flag.1));
        }
        (
            self.glyph_covered.0.to_string(),
            style.fg(self.glyph_covered.1),
        )
    }

    /// Center the glyph inside the configured cell width
    fn pad_glyph(&self, glyph: &str) -> String {
        let cw = self.cell_width as usize;
        let pad = cw.saturating_sub(glyph.width());
        let right = pad / 2;
        let left = pad - right;
        format!("{}{}{}", " ".repeat(left), glyph, " ".repeat(right))
    }

    // status row (left counter + right-aligned key hints)
    fn draw_status<B: Backend>(&self, f: &mut Frame<B>, board: &Board, area: Rect) {
        let remaining = board.remaining_mines();
        let left_text = format!(" Mines: {} ", remaining);
        let left_style = if remaining < 0 {
            Style::default()
                .fg(self.counter_warn_fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let keys = [("R", "New"), ("Esc", "Exit")];
        let inner_w = area.width.saturating_sub(2) as usize;
        let left_w = left_text.as_str().width();
        // account for the ": " after each key and three spaces between entries
        let mut right_w = 0;
        for (i, (key, rest)) in keys.iter().enumerate() {
            if i > 0 {
                right_w += 3;
            }
            right_w += key.width() + 2 + rest.width();
        }
        let mid_spaces = if inner_w > left_w + right_w + 1 {
            inner_w - left_w - right_w - 1
        } else {
            1
        };
        let mut spans: Vec<Span> = Vec::new();
        spans.push(Span::styled(left_text, left_style));
        spans.push(Span::raw(" ".repeat(mid_spaces)));
        for (i, (key, rest)) in keys.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("   "));
            }
            spans.push(Span::styled(
                key.to_string(),
                Style::default()
                    .fg(self.hint_key_fg)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(format!(": {}", rest)));
        }
        spans.push(Span::raw(" "));
        let status = Paragraph::new(Text::from(Spans::from(spans)))
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Left);
        f.render_widget(status, area);
    }

    fn draw_banner<B: Backend>(&self, f: &mut Frame<B>, state: GameState, size: Rect) {
        let (title, msg) = match state {
            GameState::Won => ("Success", "You win"),
            GameState::Lost => ("Failure", "Game over"),
            GameState::Playing => return,
        };
        let w = 30u16.min(size.width.saturating_sub(2));
        let h = 5u16.min(size.height.saturating_sub(2));
        let area = center_rect(w, h, size);
        f.render_widget(Clear, area);
        f.render_widget(Block::default().borders(Borders::ALL).title(title), area);
        let lines = vec![
            Spans::from(Span::styled(msg, Style::default().add_modifier(Modifier::BOLD))),
            Spans::from(Span::raw("")),
            Spans::from(Span::raw("Press R for a new round")),
        ];
        let p = Paragraph::new(Text::from(lines)).alignment(Alignment::Center);
        f.render_widget(p, inner(area));
    }
}

fn center_rect(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

fn inner(r: Rect) -> Rect {
    Rect::new(
        r.x + 1,
        r.y + 1,
        r.width.saturating_sub(2),
        r.height.saturating_sub(2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn revealed(adj: u8) -> Cell {
        Cell {
            revealed: true,
            adj,
            ..Cell::default()
        }
    }

    #[test]
    fn glyphs_follow_cell_state() {
        let r = Renderer::new(2);
        assert_eq!(r.cell_appearance(&Cell::default()).0, r.glyph_covered.0);
        assert_eq!(r.cell_appearance(&revealed(0)).0, " ");
        assert_eq!(r.cell_appearance(&revealed(3)).0, "3");

        let flagged = Cell {
            flagged: true,
            ..Cell::default()
        };
        assert_eq!(r.cell_appearance(&flagged).0, r.glyph_flag.0);

        let wrong = Cell {
            flagged: true,
            wrong_flag: true,
            ..Cell::default()
        };
        assert_eq!(r.cell_appearance(&wrong).0, r.glyph_wrong.0);

        let mine = Cell {
            mine: true,
            revealed: true,
            ..Cell::default()
        };
        assert_eq!(r.cell_appearance(&mine).0, r.glyph_mine.0);
    }

    #[test]
    fn the_fatal_mine_stands_out() {
        let r = Renderer::new(2);
        let hit = Cell {
            mine: true,
            revealed: true,
            exploded: true,
            ..Cell::default()
        };
        let (s, style) = r.cell_appearance(&hit);
        assert_eq!(s, r.glyph_mine.0);
        assert_eq!(style.bg, Some(r.exploded_bg));
    }

    #[test]
    fn digits_use_their_own_colors() {
        let r = Renderer::new(2);
        for adj in 1..=8u8 {
            let (s, style) = r.cell_appearance(&revealed(adj));
            assert_eq!(s, format!("{}", adj));
            assert_eq!(style.fg, Some(r.num_colors[adj as usize - 1]));
        }
    }

    #[test]
    fn glyphs_are_padded_to_the_cell_width() {
        assert_eq!(Renderer::new(1).pad_glyph("5"), "5");
        assert_eq!(Renderer::new(2).pad_glyph("■"), " ■");
        assert_eq!(Renderer::new(3).pad_glyph("⚑"), " ⚑ ");
        assert_eq!(Renderer::new(4).pad_glyph("1"), "  1 ");
    }

    #[test]
    fn board_block_scales_with_cell_width() {
        let b = Board::new(10, 10, 15);
        assert_eq!(Renderer::new(2).board_size(&b), (22, 12));
        assert_eq!(Renderer::new(4).board_size(&b), (42, 12));
    }
}
