#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Direction {
    #[default]
    None,
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub fn new(x: i32, y: i32) -> Self {
        Pos { x, y }
    }

    pub fn offset(&self, delta: PosDelta) -> Pos {
        Pos {
            x: self.x + delta.x,
            y: self.y + delta.y,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PosDelta {
    pub x: i32,
    pub y: i32,
}

impl From<Direction> for PosDelta {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::None => PosDelta { x: 0, y: 0 },
            Direction::Up => PosDelta { x: 0, y: -1 },
            Direction::Right => PosDelta { x: 1, y: 0 },
            Direction::Down => PosDelta { x: 0, y: 1 },
            Direction::Left => PosDelta { x: -1, y: 0 },
        }
    }
}

/// The play area: a window of fixed size cut into equally sized blocks.
///
/// Legal coordinates run from 0 to the column/row count *inclusive*, one more
/// than fits in the window. The last column and row are never visible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Grid {
    pub window: Size,
    pub block: Size,
}

impl Grid {
    pub fn new(window: Size, block: Size) -> Self {
        Grid { window, block }
    }

    pub fn width_limit(&self) -> i32 {
        (self.window.width / self.block.width.max(1)) as i32
    }

    pub fn height_limit(&self) -> i32 {
        (self.window.height / self.block.height.max(1)) as i32
    }

    pub fn center(&self) -> Pos {
        Pos {
            x: self.width_limit() / 2,
            y: self.height_limit() / 2,
        }
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.x <= self.width_limit() && pos.y >= 0 && pos.y <= self.height_limit()
    }

    /// Top-left corner of the block at `pos`, in window cells.
    pub fn block_origin(&self, pos: Pos) -> (i32, i32) {
        (
            pos.x * self.block.width as i32,
            pos.y * self.block.height as i32,
        )
    }
}
