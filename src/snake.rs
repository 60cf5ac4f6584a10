use std::collections::VecDeque;

use rand::Rng;

use crate::grid::{Cell, Direction, GridSize};

/// How many turns can be queued between two ticks.
const TURN_BUFFER: usize = 2;

/// The player's snake. Head is the front of `body`.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Cell>,
    length: usize,
    direction: Direction,
    turns: VecDeque<Direction>,
    vacated: Option<Cell>,
}

impl Snake {
    /// One-cell snake at `start` heading in `direction`.
    pub fn new(start: Cell, direction: Direction) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);

        Snake {
            body,
            length: 1,
            direction,
            turns: VecDeque::with_capacity(TURN_BUFFER),
            vacated: None,
        }
    }

    pub fn head(&self) -> Cell {
        // body is never empty: every constructor and reset leaves one cell
        self.body[0]
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    /// Length the snake is growing towards; doubles as the score.
    pub fn length_target(&self) -> usize {
        self.length
    }

    /// Tail cell dropped by the last `advance`, if any.
    pub fn vacated(&self) -> Option<Cell> {
        self.vacated
    }

    /// Queues a turn for the next tick. Repeats and reversals of the last
    /// queued direction, and presses beyond the buffer, are dropped.
    pub fn steer(&mut self, direction: Direction) {
        let last = self.turns.back().copied().unwrap_or(self.direction);
        if last == direction || last.is_opposite(direction) || self.turns.len() >= TURN_BUFFER {
            return;
        }
        self.turns.push_back(direction);
    }

    pub fn grow(&mut self) {
        self.length += 1;
    }

    /// Moves one cell, wrapping around the board edges.
    pub fn advance(&mut self, grid: GridSize) {
        if let Some(turn) = self.turns.pop_front() {
            if !self.direction.is_opposite(turn) {
                self.direction = turn;
            }
        }

        let next = self.head().step(self.direction, grid);
        debug_assert!(grid.contains(next));
        self.body.push_front(next);

        self.vacated = if self.body.len() > self.length {
            self.body.pop_back()
        } else {
            None
        };
    }

    /// True when the head sits on one of the other segments.
    pub fn bit_itself(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    /// Back to a single segment at `start`, heading somewhere random.
    pub fn reset<R: Rng + ?Sized>(&mut self, start: Cell, rng: &mut R) {
        self.body.clear();
        self.body.push_front(start);
        self.length = 1;
        self.direction = Direction::random(rng);
        self.turns.clear();
        self.vacated = None;
    }
}

#[cfg(test)]
impl Snake {
    /// Snake with explicit segments, head first. The length target is the
    /// number of segments.
    pub(crate) fn from_segments(segments: Vec<Cell>, direction: Direction) -> Self {
        let length = segments.len().max(1);
        Snake {
            body: VecDeque::from(segments),
            length,
            direction,
            turns: VecDeque::with_capacity(TURN_BUFFER),
            vacated: None,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.body.len()
    }

    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const GRID: GridSize = GridSize {
        width: 32,
        height: 24,
    };

    #[test]
    fn test_advance_moves_head() {
        let mut snake = Snake::new(Cell::new(2, 2), Direction::Right);
        snake.advance(GRID);
        assert_eq!(snake.head(), Cell::new(3, 2));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.vacated(), Some(Cell::new(2, 2)));
    }

    #[test]
    fn test_wraps_to_first_column() {
        let mut snake = Snake::new(Cell::new(2, 2), Direction::Right);
        snake.advance(GRID);
        assert_eq!(snake.head(), Cell::new(3, 2));

        for _ in 0..29 {
            snake.advance(GRID);
            assert!(GRID.contains(snake.head()));
        }
        assert_eq!(snake.head(), Cell::new(0, 2));
    }

    #[test]
    fn test_growth_skips_one_tail_pop() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Down);
        snake.grow();
        assert_eq!(snake.length_target(), 2);
        assert_eq!(snake.len(), 1);

        snake.advance(GRID);
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.vacated(), None);

        snake.advance(GRID);
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.vacated(), Some(Cell::new(5, 5)));
    }

    #[test]
    fn test_reversal_ignored() {
        let segments = vec![
            Cell::new(8, 4),
            Cell::new(7, 4),
            Cell::new(6, 4),
            Cell::new(5, 4),
        ];
        let mut snake = Snake::from_segments(segments, Direction::Right);

        snake.steer(Direction::Left);
        snake.advance(GRID);

        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.head(), Cell::new(9, 4));
        assert!(!snake.bit_itself());
    }

    #[test]
    fn test_two_quick_turns_both_applied() {
        let mut snake = Snake::from_segments(
            vec![Cell::new(5, 5), Cell::new(4, 5), Cell::new(3, 5)],
            Direction::Right,
        );

        snake.steer(Direction::Up);
        snake.steer(Direction::Left);
        snake.advance(GRID);
        assert_eq!(snake.direction(), Direction::Up);
        assert_eq!(snake.head(), Cell::new(5, 4));

        snake.advance(GRID);
        assert_eq!(snake.direction(), Direction::Left);
        assert_eq!(snake.head(), Cell::new(4, 4));
    }

    #[test]
    fn test_turn_buffer_is_bounded() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Right);
        snake.steer(Direction::Up);
        snake.steer(Direction::Up);
        snake.steer(Direction::Left);
        snake.steer(Direction::Down);

        snake.advance(GRID);
        assert_eq!(snake.direction(), Direction::Up);
        snake.advance(GRID);
        assert_eq!(snake.direction(), Direction::Left);
        snake.advance(GRID);
        assert_eq!(snake.direction(), Direction::Left);
    }

    #[test]
    fn test_reversal_does_not_take_a_turn_slot() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Right);
        snake.steer(Direction::Left);
        snake.steer(Direction::Up);
        snake.steer(Direction::Left);

        snake.advance(GRID);
        assert_eq!(snake.direction(), Direction::Up);
        assert_eq!(snake.head(), Cell::new(5, 4));

        snake.advance(GRID);
        assert_eq!(snake.direction(), Direction::Left);
        assert_eq!(snake.head(), Cell::new(4, 4));
    }

    #[test]
    fn test_queued_reversal_dropped() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Right);
        snake.steer(Direction::Up);
        snake.steer(Direction::Down);

        snake.advance(GRID);
        snake.advance(GRID);
        assert_eq!(snake.direction(), Direction::Up);
        assert_eq!(snake.head(), Cell::new(5, 3));
    }

    #[test]
    fn test_bit_itself() {
        // head moves up into (5,5), which is still part of the body
        let mut snake = Snake::from_segments(
            vec![
                Cell::new(5, 6),
                Cell::new(6, 6),
                Cell::new(6, 5),
                Cell::new(5, 5),
                Cell::new(4, 5),
            ],
            Direction::Left,
        );
        snake.steer(Direction::Up);
        snake.advance(GRID);

        assert_eq!(snake.head(), Cell::new(5, 5));
        assert!(snake.bit_itself());
    }

    #[test]
    fn test_reset() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut snake = Snake::from_segments(
            vec![Cell::new(1, 1), Cell::new(1, 2), Cell::new(1, 3)],
            Direction::Up,
        );
        snake.steer(Direction::Left);

        snake.reset(GRID.center(), &mut rng);

        assert_eq!(snake.len(), 1);
        assert_eq!(snake.length_target(), 1);
        assert_eq!(snake.head(), GRID.center());
        assert!(Direction::ALL.contains(&snake.direction()));
        assert_eq!(snake.vacated(), None);
    }
}
