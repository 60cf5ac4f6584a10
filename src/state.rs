use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::GameConfig;
use crate::grid::{Cell, Direction, GridSize};
use crate::log;
use crate::placement::random_free_cell;
use crate::snake::Snake;
use crate::stones::Stones;

/// What a single tick did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Paused,
    Moved,
    Ate,
    HitSelf,
    HitStone,
    /// The snake ate the last free cell; the board starts over.
    Filled,
}

impl TickOutcome {
    /// The snake went back to its starting cell and the board needs a full
    /// repaint.
    pub fn is_reset(&self) -> bool {
        matches!(
            self,
            TickOutcome::HitSelf | TickOutcome::HitStone | TickOutcome::Filled
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Apple,
    Snake,
    Stone,
}

/// Something that occupies cells on the board.
#[derive(Debug, Clone)]
pub struct Entity {
    pub kind: EntityKind,
    pub cells: Vec<Cell>,
}

impl Entity {
    fn new(kind: EntityKind, cells: Vec<Cell>) -> Self {
        Self { kind, cells }
    }
}

/// Full game state, owned by the main loop.
pub struct GameState {
    grid: GridSize,
    snake: Snake,
    apple: Cell,
    stones: Stones,
    stones_enabled: bool,
    paused: bool,
    rng: StdRng,
}

impl GameState {
    pub fn new(config: &GameConfig, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let grid = config.grid();
        let snake = Snake::new(grid.center(), Direction::random(&mut rng));
        let mut state = GameState {
            grid,
            snake,
            apple: grid.center(),
            stones: Stones::new(config.stone_interval),
            stones_enabled: config.stones,
            paused: false,
            rng,
        };
        if let Some(apple) = state.free_cell(&[]) {
            state.apple = apple;
        }
        state
    }

    pub fn grid(&self) -> GridSize {
        self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple(&self) -> Cell {
        self.apple
    }

    pub fn stones(&self) -> &Stones {
        &self.stones
    }

    pub fn score(&self) -> usize {
        self.snake.length_target()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        log!("pause {}", if self.paused { "on" } else { "off" });
        self.paused
    }

    pub fn steer(&mut self, direction: Direction) {
        self.snake.steer(direction);
    }

    /// Advances the game by one tick.
    ///
    /// Eating is checked first, then biting itself, then hitting a stone;
    /// the first match wins. A stone is added afterwards if the score just
    /// reached a new multiple of the stone interval.
    pub fn tick(&mut self) -> TickOutcome {
        if self.paused {
            return TickOutcome::Paused;
        }

        self.snake.advance(self.grid);
        let head = self.snake.head();

        let outcome = if head == self.apple {
            self.snake.grow();
            let center = self.grid.center();
            match self.free_cell(&[center]) {
                Some(apple) => {
                    self.apple = apple;
                    log!("apple eaten, score {}, next apple at {:?}", self.score(), apple);
                    TickOutcome::Ate
                }
                None => {
                    log!("board full with score {}", self.score());
                    self.stones.clear();
                    self.reset_snake();
                    if let Some(apple) = self.free_cell(&[center]) {
                        self.apple = apple;
                    }
                    TickOutcome::Filled
                }
            }
        } else if self.snake.bit_itself() {
            log!("snake bit itself at {:?} with score {}", head, self.score());
            self.reset_snake();
            TickOutcome::HitSelf
        } else if self.stones_enabled && self.stones.contains(head) {
            log!("snake hit a stone at {:?} with score {}", head, self.score());
            self.stones.clear();
            self.reset_snake();
            TickOutcome::HitStone
        } else {
            TickOutcome::Moved
        };

        self.spawn_stone();
        outcome
    }

    /// Entities in drawing order.
    pub fn entities(&self) -> Vec<Entity> {
        let mut entities = vec![Entity::new(EntityKind::Apple, vec![self.apple])];
        if self.stones_enabled && !self.stones.is_empty() {
            entities.push(Entity::new(EntityKind::Stone, self.stones.cells().to_vec()));
        }
        entities.push(Entity::new(
            EntityKind::Snake,
            self.snake.body().iter().copied().collect(),
        ));
        entities
    }

    fn reset_snake(&mut self) {
        let center = self.grid.center();
        self.snake.reset(center, &mut self.rng);
        self.stones.rearm();
    }

    fn spawn_stone(&mut self) {
        if !self.stones_enabled {
            return;
        }
        let Some(threshold) = self.stones.due(self.score() as u32) else {
            return;
        };
        let exclude = [self.apple, self.grid.center()];
        let Some(cell) = self.free_cell(&exclude) else {
            log!("no room for stone #{}", self.stones.len() + 1);
            return;
        };
        self.stones.place(cell, threshold);
        log!("stone #{} placed at {:?}", self.stones.len(), cell);
    }

    /// Random cell clear of the snake, the stones and `extra`, or `None`
    /// when they cover the whole board.
    fn free_cell(&mut self, extra: &[Cell]) -> Option<Cell> {
        let mut occupied: HashSet<Cell> = self.snake.body().iter().copied().collect();
        occupied.extend(self.stones.cells().iter().copied());
        occupied.extend(extra.iter().copied());
        if occupied.len() >= self.grid.cell_count() {
            return None;
        }
        Some(random_free_cell(&mut self.rng, self.grid, &occupied))
    }
}

#[cfg(test)]
impl GameState {
    pub(crate) fn with_snake(mut self, snake: Snake) -> Self {
        self.snake = snake;
        self
    }

    pub(crate) fn set_apple(&mut self, cell: Cell) {
        self.apple = cell;
    }

    pub(crate) fn place_stone(&mut self, cell: Cell) {
        let threshold = self.stones.len() as u32 + 100;
        self.stones.place(cell, threshold);
        self.stones.rearm();
    }
}
