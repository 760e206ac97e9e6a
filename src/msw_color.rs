// Terminal color capability handling
// Resolves the board palette to what the attached terminal can display

use ratatui::style::Color;
use term_color_support::ColorSupport;

/// Pick the richest representation of a palette entry the terminal supports:
/// the exact RGB value under truecolor, a stable 16-255 index under 256-color
/// terminals, and the plain ANSI variant everywhere else.
pub fn resolve(rgb: (u8, u8, u8), indexed: u8, basic: Color) -> Color {
    let support = ColorSupport::stdout();
    if support.has_16m {
        Color::Rgb(rgb.0, rgb.1, rgb.2)
    } else if support.has_256 {
        Color::Indexed(indexed)
    } else {
        basic
    }
}

/// Classic minesweeper digit colors for adjacency counts 1-8
pub fn number_color(adj: u8) -> Color {
    match adj {
        1 => resolve((0, 0, 255), 21, Color::LightBlue),
        2 => resolve((0, 128, 0), 28, Color::Green),
        3 => resolve((255, 0, 0), 196, Color::LightRed),
        4 => resolve((0, 0, 128), 18, Color::Blue),
        5 => resolve((128, 0, 0), 88, Color::Red),
        6 => resolve((0, 128, 128), 30, Color::Cyan),
        7 => resolve((0, 0, 0), 16, Color::Black),
        _ => resolve((128, 128, 128), 245, Color::Gray),
    }
}
