use std::io::Write;

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};

use crate::config::{GameConfig, Palette, Rgb};
use crate::grid::Cell;
use crate::state::{EntityKind, GameState, TickOutcome};

/// Terminal columns per board cell, so cells come out roughly square.
const CELL_COLUMNS: u16 = 2;
const FILLED: &str = "██";
const EMPTY: &str = "  ";
const GRID_DOT: &str = "· ";

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

pub struct Renderer {
    palette: Palette,
    show_grid: bool,
    show_score: bool,
}

impl Renderer {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            palette: config.colors.clone(),
            show_grid: config.show_grid,
            show_score: config.show_score,
        }
    }

    /// Repaints the whole board.
    pub fn draw_full<W: Write>(&self, out: &mut W, state: &GameState) -> std::io::Result<()> {
        queue!(out, ResetColor, Clear(ClearType::All))?;

        let grid = state.grid();
        for y in 0..grid.height {
            for x in 0..grid.width {
                self.erase_cell(out, Cell::new(x, y))?;
            }
        }

        for entity in state.entities() {
            for cell in &entity.cells {
                self.fill_cell(out, *cell, entity.kind)?;
            }
        }

        self.draw_status(out, state)?;
        out.flush()
    }

    /// Repaints only what a tick can have changed: the old tail, the new
    /// head, the apple and the stones. Resets get a full repaint.
    pub fn draw_tick<W: Write>(
        &self,
        out: &mut W,
        state: &GameState,
        outcome: TickOutcome,
    ) -> std::io::Result<()> {
        if outcome.is_reset() {
            return self.draw_full(out, state);
        }

        if let Some(vacated) = state.snake().vacated() {
            self.erase_cell(out, vacated)?;
        }
        self.fill_cell(out, state.apple(), EntityKind::Apple)?;
        for stone in state.stones().cells() {
            self.fill_cell(out, *stone, EntityKind::Stone)?;
        }
        self.fill_cell(out, state.snake().head(), EntityKind::Snake)?;

        self.draw_status(out, state)?;
        out.flush()
    }

    fn fill_cell<W: Write>(&self, out: &mut W, cell: Cell, kind: EntityKind) -> std::io::Result<()> {
        let body = match kind {
            EntityKind::Apple => self.palette.apple,
            EntityKind::Snake => self.palette.snake,
            EntityKind::Stone => self.palette.stone,
        };
        queue!(
            out,
            MoveTo(cell.x * CELL_COLUMNS, cell.y),
            SetBackgroundColor(color(self.palette.background)),
            SetForegroundColor(color(body)),
            Print(FILLED)
        )
    }

    fn erase_cell<W: Write>(&self, out: &mut W, cell: Cell) -> std::io::Result<()> {
        let glyph = if self.show_grid { GRID_DOT } else { EMPTY };
        queue!(
            out,
            MoveTo(cell.x * CELL_COLUMNS, cell.y),
            SetBackgroundColor(color(self.palette.background)),
            SetForegroundColor(color(self.palette.grid)),
            Print(glyph)
        )
    }

    fn draw_status<W: Write>(&self, out: &mut W, state: &GameState) -> std::io::Result<()> {
        let grid = state.grid();
        queue!(
            out,
            MoveTo(0, grid.height),
            ResetColor,
            Clear(ClearType::CurrentLine),
            SetForegroundColor(color(self.palette.text))
        )?;
        if self.show_score {
            queue!(out, Print(format!("Score: {}", state.score())))?;
        }
        if state.is_paused() {
            queue!(out, Print("  PAUSED"))?;
        }
        queue!(
            out,
            MoveTo(0, grid.height + 1),
            Print("Arrows to move, Space to pause, Esc or 'q' to quit"),
            ResetColor
        )
    }
}
