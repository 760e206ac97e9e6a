// Entry point for the minesweeper terminal application
// Parses the command line, validates the board shape, and starts the game loop

use anyhow::bail;
use clap::Parser;

// Module declarations
mod msw_board; // Board state machine
mod msw_color; // Terminal color capability handling
mod msw_game; // Terminal lifecycle and event loop
mod msw_input; // Mouse input translation
mod msw_render; // Frame drawing

use msw_game::GameManager;

/// Classic minesweeper in the terminal
///
/// Left click reveals a cell, right click plants a flag, R starts a new
/// round, Esc quits.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Board width in cells
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u16).range(1..=200))]
    width: u16,

    /// Board height in cells
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u16).range(1..=200))]
    height: u16,

    /// Number of mines hidden in the board
    #[arg(long, default_value_t = 15)]
    mines: usize,

    /// Width of one cell in terminal columns
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u16).range(1..=16))]
    cell_size: u16,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let cells = cli.width as usize * cli.height as usize;
    if cli.mines >= cells {
        bail!(
            "{} mines do not fit a {}x{} board; at most {} are playable",
            cli.mines,
            cli.width,
            cli.height,
            cells - 1
        );
    }

    log::info!(
        "starting a {}x{} board with {} mines",
        cli.width,
        cli.height,
        cli.mines
    );
    let mut game = GameManager::new(
        cli.width as usize,
        cli.height as usize,
        cli.mines,
        cli.cell_size,
    );
    game.run()
}
