use crate::grid::Cell;

/// Obstacles that pile up as the score grows.
///
/// One stone is added the first time the score lands on each multiple of
/// `interval`. `last_threshold` remembers which multiple already produced
/// its stone so that ticks spent sitting on the same score add nothing.
#[derive(Debug, Clone)]
pub struct Stones {
    cells: Vec<Cell>,
    interval: u32,
    last_threshold: Option<u32>,
}

impl Stones {
    pub fn new(interval: u32) -> Self {
        Stones {
            cells: Vec::new(),
            interval: interval.max(1),
            last_threshold: None,
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Threshold index `score` would claim, if a stone is due.
    pub fn due(&self, score: u32) -> Option<u32> {
        if score == 0 || score % self.interval != 0 {
            return None;
        }
        let threshold = score / self.interval;
        if self.last_threshold == Some(threshold) {
            None
        } else {
            Some(threshold)
        }
    }

    /// Places a stone for `threshold`, as returned by [`Stones::due`].
    pub fn place(&mut self, cell: Cell, threshold: u32) {
        self.cells.push(cell);
        self.last_threshold = Some(threshold);
    }

    /// Lets the next multiple spawn again; stones already placed stay.
    pub fn rearm(&mut self) {
        self.last_threshold = None;
    }

    pub fn clear(&mut self) {
        self.cells.clear();
        self.last_threshold = None;
    }
}
