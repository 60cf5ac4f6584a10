use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{stdout, Stdout, Write};
use std::thread;
use std::time::{Duration, Instant};

use crate::config::GameConfig;
use crate::input::{key_action, KeyAction};
use crate::log;
use crate::render::Renderer;
use crate::state::GameState;

/// Pads every loop iteration out to a fixed length.
pub struct FrameClock {
    period: Duration,
    next: Instant,
}

impl FrameClock {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next: Instant::now() + period,
        }
    }

    /// Sleeps until the current frame is over. A frame that overran starts
    /// the next one from now instead of trying to catch up.
    pub fn tick(&mut self) {
        let now = Instant::now();
        if self.next > now {
            thread::sleep(self.next - now);
            self.next += self.period;
        } else {
            self.next = now + self.period;
        }
    }
}

/// Every step has already run; reports the first that failed.
fn first_error<const N: usize>(steps: [Result<()>; N]) -> Result<()> {
    steps.into_iter().find(Result::is_err).unwrap_or(Ok(()))
}

pub struct Game {
    state: GameState,
    renderer: Renderer,
    tick: Duration,
    quit: bool,
}

impl Game {
    pub fn new(config: &GameConfig, seed: Option<u64>) -> Self {
        Game {
            state: GameState::new(config, seed),
            renderer: Renderer::new(config),
            tick: config.tick_duration(),
            quit: false,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        let mut out = stdout();
        execute!(out, EnterAlternateScreen, Hide).context("Failed to enter alternate screen")?;

        let result = self.run_loop(&mut out);

        let raw_mode = terminal::disable_raw_mode().context("Failed to disable raw mode");
        let screen = execute!(out, Show, LeaveAlternateScreen)
            .context("Failed to leave alternate screen");
        let flush = out.flush().context("Failed to flush stdout");
        first_error([result, raw_mode, screen, flush])?;
        log!("quit with score {}", self.state.score());
        println!("Final score: {}", self.state.score());
        Ok(())
    }

    fn run_loop(&mut self, out: &mut Stdout) -> Result<()> {
        let mut clock = FrameClock::new(self.tick);
        self.renderer
            .draw_full(out, &self.state)
            .context("Failed to draw board")?;

        while !self.quit {
            self.handle_input()?;
            if self.quit {
                break;
            }

            let outcome = self.state.tick();
            self.renderer
                .draw_tick(out, &self.state, outcome)
                .context("Failed to draw frame")?;

            clock.tick();
        }

        Ok(())
    }

    /// Drains every pending event without blocking.
    fn handle_input(&mut self) -> Result<()> {
        while event::poll(Duration::ZERO).context("Failed to poll events")? {
            let Event::Key(key) = event::read().context("Failed to read event")? else {
                continue;
            };
            match key_action(key) {
                KeyAction::Steer(direction) => self.state.steer(direction),
                KeyAction::TogglePause => {
                    self.state.toggle_pause();
                }
                KeyAction::Quit => {
                    self.quit = true;
                    return Ok(());
                }
                KeyAction::None => {}
            }
        }
        Ok(())
    }
}
