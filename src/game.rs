use crossterm::event::{self, Event};
use log::{debug, info};
use rand::Rng;
use ratatui::{prelude::*, widgets::Paragraph};
use std::io;
use std::thread;
use std::time::{Duration, Instant};

use crate::apple::Apple;
use crate::canvas::{BufferCanvas, Canvas};
use crate::config::{GameConfig, HEADER_HEIGHT};
use crate::geometry::Direction;
use crate::input::Command;
use crate::snake::{Crash, Snake, Step};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StopReason {
    Quit,
    Crashed(Crash),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GameState {
    Running,
    Stopped(StopReason),
}

pub struct Game<R> {
    config: GameConfig,
    rng: R,
    snake: Snake,
    apple: Apple,
    score: u32,
    state: GameState,
}

impl<R: Rng> Game<R> {
    pub fn new(config: GameConfig, mut rng: R) -> Self {
        let grid = config.grid;
        let mut snake = Snake::new(grid.center(), config.snake_color);
        let mut apple = Apple::random(&grid, config.apple_color, &mut rng);

        for _ in 0..config.initial_growth {
            snake.add();
        }
        apple.update_position(&grid, &mut rng);

        Game {
            config,
            rng,
            snake,
            apple,
            score: 0,
            state: GameState::Running,
        }
    }

    /// Plays until the game stops.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let budget = self.config.frame_budget();

        while self.is_running() {
            let frame_start = Instant::now();

            let events = pending_events()?;
            self.tick(terminal, &events)?;

            if let Some(rest) = remaining_budget(budget, frame_start.elapsed()) {
                thread::sleep(rest);
            }
        }

        Ok(())
    }

    /// One tick without the pacing: input, simulate and draw, present, eat.
    pub fn tick<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        events: &[Event],
    ) -> io::Result<()> {
        for event in events {
            self.handle_event(event);
        }

        terminal.draw(|frame| self.draw_and_advance(frame))?;

        self.eat_apple();
        Ok(())
    }

    /// Composes the frame that is about to be presented.
    ///
    /// The snake paints its body and then moves within the same frame, so
    /// the simulation step runs here, against the frame buffer, rather than
    /// before or after the draw call. All state changes go through
    /// `simulate`, which only sees a `Canvas`.
    fn draw_and_advance(&mut self, frame: &mut Frame) {
        let layout = Layout::default()
            .direction(layout::Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT), // Score
                Constraint::Min(0),    // Play area
            ])
            .split(frame.area());

        frame.render_widget(
            Paragraph::new(format!("SNAKE    Score: {}", self.score)).alignment(Alignment::Left),
            layout[0],
        );

        let window = self.config.grid.window;
        let arena = Rect {
            width: window.width,
            height: window.height,
            ..layout[1]
        }
        .intersection(layout[1]);

        let mut canvas = BufferCanvas::new(frame.buffer_mut(), arena);
        self.simulate(&mut canvas);
    }

    /// Clears the canvas, then draws and advances the snake and draws the
    /// apple.
    pub fn simulate(&mut self, canvas: &mut impl Canvas) {
        let grid = self.config.grid;

        canvas.clear(self.config.background);

        if let Step::GameOver(crash) = self.snake.on_frame(canvas, &grid) {
            self.stop(StopReason::Crashed(crash));
        }

        self.apple.on_frame(canvas, &grid);
    }

    /// Grows the snake and moves the apple if the head sits on it.
    pub fn eat_apple(&mut self) -> bool {
        if self.snake.head() != self.apple.pos() {
            return false;
        }

        self.snake.add();
        let next = self.apple.update_position(&self.config.grid, &mut self.rng);
        self.score += 1;
        debug!(
            "Apple eaten, score {} length {}, next apple at {:?}",
            self.score,
            self.snake.length(),
            next
        );
        true
    }
}

impl<R> Game<R> {
    pub fn handle_event(&mut self, event: &Event) {
        if let Some(command) = Command::from_event(event) {
            self.handle_command(command);
        }
    }

    pub fn handle_command(&mut self, command: Command) {
        match command {
            Command::Turn(direction) => self.snake.update_direction(direction),
            Command::Cancel => self.snake.update_direction(Direction::None),
            Command::Quit => self.stop(StopReason::Quit),
        }
    }

    // First reason wins; later ones in the same tick are ignored.
    fn stop(&mut self, reason: StopReason) {
        if self.state == GameState::Running {
            info!("Game over: {:?}", reason);
            self.state = GameState::Stopped(reason);
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == GameState::Running
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

}

/// Everything the terminal has queued up, without waiting.
fn pending_events() -> io::Result<Vec<Event>> {
    let mut events = Vec::new();
    while event::poll(Duration::ZERO)? {
        events.push(event::read()?);
    }
    Ok(events)
}

/// Time left to sleep so a tick lasts `budget`. `None` when the tick overran.
pub fn remaining_budget(budget: Duration, elapsed: Duration) -> Option<Duration> {
    budget.checked_sub(elapsed).filter(|rest| !rest.is_zero())
}
