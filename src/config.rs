use ratatui::style::Color;
use std::io;
use std::time::Duration;

use crate::geometry::{Grid, Size};

pub const TITLE: &str = "Snake";
pub const LOG_FILE: &str = "snake.log";

/// Play area in terminal cells.
pub const WINDOW_SIZE: Size = Size {
    width: 64,
    height: 24,
};

/// On-screen size of one grid cell. Two columns per row keeps blocks square-ish.
pub const BLOCK_SIZE: Size = Size {
    width: 2,
    height: 1,
};

/// Rows above the play area taken by the score line.
pub const HEADER_HEIGHT: u16 = 1;

pub const FPS: u32 = 15;
pub const INIT_SNAKE_SIZE: usize = 3;

pub const BACKGROUND_COLOR: Color = Color::Rgb(0, 0, 32);
pub const SNAKE_COLOR: Color = Color::Rgb(0, 255, 0);
pub const APPLE_COLOR: Color = Color::Rgb(255, 0, 0);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameConfig {
    pub grid: Grid,
    pub tick_rate: u32,
    pub initial_growth: usize,
    pub background: Color,
    pub snake_color: Color,
    pub apple_color: Color,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: Grid::new(WINDOW_SIZE, BLOCK_SIZE),
            tick_rate: FPS,
            initial_growth: INIT_SNAKE_SIZE,
            background: BACKGROUND_COLOR,
            snake_color: SNAKE_COLOR,
            apple_color: APPLE_COLOR,
        }
    }
}

impl GameConfig {
    /// Default look and pacing on a custom grid.
    #[cfg(test)]
    pub(crate) fn with_grid(grid: Grid) -> Self {
        Self {
            grid,
            ..Default::default()
        }
    }

    /// Terminal size needed to show the score line and the whole window.
    pub fn required_terminal_size(&self) -> Size {
        Size {
            width: self.grid.window.width,
            height: self.grid.window.height + HEADER_HEIGHT,
        }
    }

    /// Refuses terminals that would hide part of the play area.
    pub fn check_terminal_size(&self, available: Size) -> io::Result<()> {
        let required = self.required_terminal_size();
        if available.width < required.width || available.height < required.height {
            return Err(io::Error::other(format!(
                "terminal is {}x{}, at least {}x{} is needed",
                available.width, available.height, required.width, required.height
            )));
        }
        Ok(())
    }

    /// Wall-clock budget of a single tick.
    pub fn frame_budget(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate.max(1)
    }
}
