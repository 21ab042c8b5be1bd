use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use std::time::Duration;
use tokio::time::interval;
use tracing::{debug, info};

use super::terminal::{Tui, restore_terminal, setup_terminal};
use crate::input::{InputHandler, SnakeKeyAction};
use crate::metrics::SnakeStats;
use crate::render::Renderer;
use crate::snake::{Direction, SnakeConfig, SnakeEngine};

pub struct SnakeMode {
    engine: SnakeEngine,
    tick_interval: Duration,
    stats: SnakeStats,
    renderer: Renderer,
    input_handler: InputHandler,
    paused: bool,
    should_quit: bool,
    pending_direction: Option<Direction>,
}

impl SnakeMode {
    pub fn new(rows: usize, cols: usize, config: SnakeConfig) -> Result<Self> {
        let tick_interval = Duration::from_millis(config.tick_interval_ms);
        let engine = SnakeEngine::new(rows, cols, config).context("Failed to create snake board")?;

        Ok(Self {
            engine,
            tick_interval,
            stats: SnakeStats::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            paused: false,
            should_quit: false,
            pending_direction: None,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = setup_terminal()?;

        let result = self.run_game_loop(&mut terminal).await;
        restore_terminal(&mut terminal)?;

        info!(
            sessions = self.stats.sessions_played,
            high_score = self.stats.high_score,
            longest_snake = self.stats.longest_snake,
            "snake finished"
        );
        result
    }

    async fn run_game_loop(&mut self, terminal: &mut Tui) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut tick_timer = interval(self.tick_interval);

        // Render at 30 FPS (33ms per frame)
        let mut render_timer = interval(Duration::from_millis(33));

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
                    self.update_game();
                }

                _ = render_timer.tick() => {
                    terminal.draw(|frame| {
                        self.renderer.render_snake(frame, &self.engine, &self.stats, self.paused);
                    }).context("Failed to draw frame")?;
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };
        // Only process key press events, not release
        if key.kind != KeyEventKind::Press {
            return;
        }

        match self.input_handler.snake_action(key) {
            SnakeKeyAction::Steer(dir) => self.pending_direction = Some(dir),
            SnakeKeyAction::TogglePause => {
                if !self.engine.is_ended() {
                    self.paused = !self.paused;
                }
            }
            SnakeKeyAction::Restart => self.reset_game(),
            SnakeKeyAction::Quit => self.should_quit = true,
            SnakeKeyAction::None => {}
        }
    }

    fn update_game(&mut self) {
        if self.paused || self.engine.is_ended() {
            return;
        }

        // Only the last key pressed since the previous tick counts
        if let Some(dir) = self.pending_direction.take() {
            self.engine.set_heading(dir);
        }

        if self.engine.tick().is_terminal() {
            self.stats.record_session(&self.engine);
            debug!(
                score = self.engine.score(),
                ticks = self.engine.ticks(),
                collision = ?self.stats.last_collision,
                "session recorded"
            );
        }
    }

    fn reset_game(&mut self) {
        debug!("restarting snake session");
        self.engine.restart();
        self.pending_direction = None;
        self.paused = false;
    }
}
