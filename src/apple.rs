use rand::Rng;
use ratatui::style::Color;

use crate::canvas::Canvas;
use crate::geometry::{Grid, Pos};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Apple {
    pos: Pos,
    color: Color,
}

impl Apple {
    pub fn new(pos: Pos, color: Color) -> Self {
        Apple { pos, color }
    }

    /// An apple somewhere on the grid.
    pub fn random(grid: &Grid, color: Color, rng: &mut impl Rng) -> Self {
        Apple::new(random_pos(grid, rng), color)
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// Moves to a fresh random cell. The snake's body is not avoided.
    pub fn update_position(&mut self, grid: &Grid, rng: &mut impl Rng) -> Pos {
        self.pos = random_pos(grid, rng);
        self.pos
    }

    pub fn on_frame(&self, canvas: &mut impl Canvas, grid: &Grid) {
        let (x, y) = grid.block_origin(self.pos);
        canvas.fill_rect(x, y, grid.block, self.color);
    }
}

// Same inclusive range the bounds check accepts.
fn random_pos(grid: &Grid, rng: &mut impl Rng) -> Pos {
    Pos {
        x: rng.gen_range(0..=grid.width_limit()),
        y: rng.gen_range(0..=grid.height_limit()),
    }
}
