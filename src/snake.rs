use ratatui::style::Color;

use crate::canvas::Canvas;
use crate::geometry::{Direction, Grid, Pos};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Crash {
    SelfCollision,
    OutOfBounds,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    Continue,
    GameOver(Crash),
}

/// Picks the heading that is actually applied this tick.
///
/// Returns the effective direction and the new value of the last direction.
/// A request to turn straight back falls back to the previous heading and
/// forgets it.
pub fn resolve_heading(current: Direction, last: Direction) -> (Direction, Direction) {
    if current.is_opposite(last) {
        (last, Direction::None)
    } else {
        (current, last)
    }
}

#[derive(Clone, Debug)]
pub struct Snake {
    body: Vec<Pos>,
    current_direction: Direction,
    last_direction: Direction,
    color: Color,
}

impl Snake {
    pub fn new(start: Pos, color: Color) -> Self {
        Snake {
            body: vec![start],
            current_direction: Direction::None,
            last_direction: Direction::None,
            color,
        }
    }

    pub fn body(&self) -> &[Pos] {
        &self.body
    }

    pub fn length(&self) -> usize {
        self.body.len()
    }

    pub fn head(&self) -> Pos {
        self.body[0]
    }

    pub fn current_direction(&self) -> Direction {
        self.current_direction
    }

    pub fn last_direction(&self) -> Direction {
        self.last_direction
    }

    /// Grows by one segment stacked on the tail. It peels off once the body
    /// shifts on the next moving tick.
    pub fn add(&mut self) {
        let tail = self.body[self.body.len() - 1];
        self.body.push(tail);
    }

    pub fn update_direction(&mut self, direction: Direction) {
        self.last_direction = self.current_direction;
        self.current_direction = direction;
    }

    pub fn draw(&self, canvas: &mut impl Canvas, grid: &Grid) {
        for pos in &self.body {
            let (x, y) = grid.block_origin(*pos);
            canvas.fill_rect(x, y, grid.block, self.color);
        }
    }

    pub fn on_frame(&mut self, canvas: &mut impl Canvas, grid: &Grid) -> Step {
        self.draw(canvas, grid);

        if self.current_direction == Direction::None {
            return Step::Continue;
        }

        self.shift_body();
        self.move_head();

        if self.hit_itself() {
            return Step::GameOver(Crash::SelfCollision);
        }
        if !grid.contains(self.head()) {
            return Step::GameOver(Crash::OutOfBounds);
        }

        Step::Continue
    }

    fn shift_body(&mut self) {
        for i in (1..self.body.len()).rev() {
            self.body[i] = self.body[i - 1];
        }
    }

    fn move_head(&mut self) {
        let (effective, last) = resolve_heading(self.current_direction, self.last_direction);
        self.current_direction = effective;
        self.last_direction = last;
        self.body[0] = self.body[0].offset(effective.into());
    }

    // The neck (index 1) is skipped: right after a shift it still holds the
    // head's previous cell.
    fn hit_itself(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(2).any(|segment| *segment == head)
    }
}
