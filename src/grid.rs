use rand::Rng;

/// Board dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Derives the cell grid from a pixel-sized screen, the way the board
    /// was laid out in the windowed version of the game.
    pub fn from_screen(screen_width: u32, screen_height: u32, cell_size: u32) -> Self {
        let cell_size = cell_size.max(1);
        Self {
            width: (screen_width / cell_size).min(u16::MAX as u32) as u16,
            height: (screen_height / cell_size).min(u16::MAX as u32) as u16,
        }
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    /// Uniformly random cell on the board.
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        Cell::new(rng.gen_range(0..self.width), rng.gen_range(0..self.height))
    }
}

#[cfg(test)]
impl GridSize {
    pub(crate) fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: u16,
    pub y: u16,
}

impl Cell {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Neighbouring cell in `direction`, re-entering from the opposite edge
    /// when stepping off the board.
    pub fn step(&self, direction: Direction, grid: GridSize) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: wrap_axis(self.x, dx, grid.width),
            y: wrap_axis(self.y, dy, grid.height),
        }
    }
}

fn wrap_axis(value: u16, delta: i32, extent: u16) -> u16 {
    let extent = i32::from(extent);
    (i32::from(value) + delta).rem_euclid(extent) as u16
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Direction {
        Direction::ALL[rng.gen_range(0..Direction::ALL.len())]
    }
}
