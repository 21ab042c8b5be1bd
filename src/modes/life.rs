use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use std::time::Duration;
use tokio::time::interval;
use tracing::info;

use super::terminal::{Tui, restore_terminal, setup_terminal};
use crate::input::{InputHandler, LifeKeyAction};
use crate::life::{LifeConfig, LifeEngine};
use crate::metrics::LifeStats;
use crate::render::Renderer;

pub struct LifeMode {
    engine: LifeEngine,
    stats: LifeStats,
    tick_interval: Duration,
    renderer: Renderer,
    input_handler: InputHandler,
    paused: bool,
    should_quit: bool,
}

impl LifeMode {
    /// Allocate a grid of the given size and schedule the first random seed
    pub fn new(rows: usize, cols: usize, config: &LifeConfig) -> Result<Self> {
        let mut engine =
            LifeEngine::new(rows, cols, config).context("Failed to create life grid")?;
        engine.randomize();

        Ok(Self {
            engine,
            stats: LifeStats::new(),
            tick_interval: Duration::from_millis(config.tick_interval_ms),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            paused: false,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = setup_terminal()?;
        info!(
            rows = self.engine.rows(),
            cols = self.engine.cols(),
            "life started"
        );

        // Run the loop, then restore the terminal whatever happened
        let result = self.run_loop(&mut terminal).await;
        restore_terminal(&mut terminal)?;

        info!(
            generation = self.engine.generation(),
            population = self.engine.population(),
            peak = self.stats.peak,
            "life finished"
        );
        result
    }

    async fn run_loop(&mut self, terminal: &mut Tui) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut tick_timer = interval(self.tick_interval);

        // Redraw at least once a second so the clock keeps moving while paused
        let mut render_timer = interval(Duration::from_secs(1));

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                _ = tick_timer.tick() => {
                    if !self.paused {
                        self.step();
                    }
                }

                _ = render_timer.tick() => {}

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }

            terminal
                .draw(|frame| {
                    self.renderer
                        .render_life(frame, &self.engine, &self.stats, self.paused)
                })
                .context("Failed to draw frame")?;
        }

        Ok(())
    }

    fn step(&mut self) {
        let report = self.engine.tick();
        self.stats.record(&report);
    }

    fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };
        if key.kind != KeyEventKind::Press {
            return;
        }

        match self.input_handler.life_action(key) {
            LifeKeyAction::Randomize => self.engine.randomize(),
            LifeKeyAction::Pause => self.paused = true,
            LifeKeyAction::Resume => self.paused = false,
            LifeKeyAction::Quit => self.should_quit = true,
            LifeKeyAction::None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    #[test]
    fn test_initial_seed_is_pending() {
        let mode = LifeMode::new(20, 30, &LifeConfig::seeded(1)).unwrap();
        assert_eq!(mode.engine.population(), 0);
        assert!(!mode.paused);
    }

    #[test]
    fn test_rejects_tiny_terminal() {
        assert!(LifeMode::new(3, 3, &LifeConfig::default()).is_err());
    }

    #[test]
    fn test_pause_and_resume() {
        let mut mode = LifeMode::new(20, 30, &LifeConfig::seeded(1)).unwrap();

        mode.handle_event(key('p'));
        assert!(mode.paused);
        mode.handle_event(key('c'));
        assert!(!mode.paused);
        mode.handle_event(key('q'));
        assert!(mode.should_quit);
    }

    #[test]
    fn test_randomize_reseeds() {
        let config = LifeConfig {
            density: 1.0,
            ..LifeConfig::seeded(1)
        };
        let mut mode = LifeMode::new(10, 10, &config).unwrap();
        mode.step();
        mode.step();
        let thinned = mode.engine.population();

        mode.handle_event(key('r'));
        mode.step();

        assert!(thinned < 36);
        assert_eq!(mode.engine.population(), 36);
        assert_eq!(mode.stats.peak, 36);
        assert_eq!(mode.stats.delta(), 36 - thinned as i64);
    }
}
