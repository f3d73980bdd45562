use crossterm::{
    execute,
    terminal::{
        self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
        SetTitle,
    },
};
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;
use std::io::{self, Stdout};

use snake::config::{GameConfig, LOG_FILE, TITLE};
use snake::game::Game;
use snake::geometry::Size;

fn main() -> Result<(), io::Error> {
    // Set up logging before anything else
    WriteLogger::init(
        LevelFilter::Info,
        Config::default(),
        File::create(LOG_FILE)?,
    )
    .map_err(io::Error::other)?;

    info!("Starting {}", TITLE);

    // The whole play area has to be visible
    let config = GameConfig::default();
    let (width, height) = terminal::size()?;
    if let Err(e) = config.check_terminal_size(Size { width, height }) {
        error!("Terminal too small: {}", e);
        return Err(e);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle(TITLE))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    // Seeded once from the OS; the game owns the only generator
    let mut game = Game::new(config, StdRng::from_entropy());
    let result = game.run(&mut terminal);

    // Restore the terminal even if the game loop failed
    restore_terminal(&mut terminal)?;

    if let Err(e) = result {
        error!("Game loop failed: {}", e);
        return Err(e);
    }

    let score = game.score();

    info!(
        "Finished with {:?}, score {}, length {}",
        game.state(),
        score,
        game.snake().length()
    );
    println!("Final Score: {}", score);

    Ok(())
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
