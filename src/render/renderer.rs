use chrono::Local;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use super::{LifeView, SnakeView};
use crate::life::LifeEngine;
use crate::metrics::{LifeStats, SnakeStats};
use crate::snake::{CollisionType, SnakeEngine};

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Grid fills the screen; population and wall clock sit on the inner ring
    pub fn render_life(
        &self,
        frame: &mut Frame,
        engine: &LifeEngine,
        stats: &LifeStats,
        paused: bool,
    ) {
        let area = frame.area();
        frame.render_widget(LifeView::new(engine), area);

        if area.height < 3 || area.width < 4 {
            return;
        }
        let status_row = Rect::new(
            area.x + 2,
            area.y + area.height - 2,
            area.width.saturating_sub(4),
            1,
        );

        let mut left = vec![
            Span::raw(engine.population().to_string()),
            Span::raw(format!(" ({:+})", stats.delta())),
            Span::raw(format!("  peak {}", stats.peak)),
        ];
        if stats.is_still() {
            left.push(Span::raw("  [still]"));
        }
        if paused {
            left.push(Span::raw("  "));
            left.push(Span::styled(
                "[paused]",
                Style::default().add_modifier(Modifier::BOLD),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(left)), status_row);

        let clock = Local::now().format("%a %b %e %H:%M:%S %Y").to_string();
        frame.render_widget(
            Paragraph::new(clock).alignment(Alignment::Right),
            status_row,
        );
    }

    /// Board on top, one status line underneath
    pub fn render_snake(
        &self,
        frame: &mut Frame,
        engine: &SnakeEngine,
        stats: &SnakeStats,
        paused: bool,
    ) {
        let area = frame.area();
        let board_height = (engine.rows() as u16).min(area.height);
        let board = Rect::new(area.x, area.y, area.width, board_height);
        frame.render_widget(SnakeView::new(engine), board);

        if area.height > board_height {
            let status = Rect::new(area.x, area.y + board_height, area.width, 1);
            frame.render_widget(self.snake_stats(engine, stats), status);
        }

        if let Some(collision) = engine.collision() {
            let popup = centered(area, 36, 8);
            frame.render_widget(Clear, popup);
            frame.render_widget(self.game_over(engine, stats, collision), popup);
        } else if paused {
            let popup = centered(area, 16, 3);
            frame.render_widget(Clear, popup);
            frame.render_widget(
                Paragraph::new("PAUSED")
                    .alignment(Alignment::Center)
                    .block(Block::default().borders(Borders::ALL)),
                popup,
            );
        }
    }

    fn snake_stats(&self, engine: &SnakeEngine, stats: &SnakeStats) -> Paragraph<'_> {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let best = if stats.is_record(engine) {
            Span::styled(engine.score().to_string(), bold)
        } else {
            Span::raw(stats.high_score.to_string())
        };
        let text = Line::from(vec![
            Span::raw("Score: "),
            Span::styled(engine.score().to_string(), bold),
            Span::raw("    "),
            Span::raw("Length: "),
            Span::styled(engine.length().to_string(), bold),
            Span::raw("    "),
            Span::raw("Ticks: "),
            Span::raw(engine.ticks().to_string()),
            Span::raw("    "),
            Span::raw("Best: "),
            best,
        ]);

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn game_over(
        &self,
        engine: &SnakeEngine,
        stats: &SnakeStats,
        collision: CollisionType,
    ) -> Paragraph<'_> {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let cause = match collision {
            CollisionType::Wall => "Hit the wall",
            CollisionType::SelfCollision => "Bit yourself",
        };

        let text = vec![
            Line::from(Span::styled("GAME OVER", bold)),
            Line::from(cause),
            Line::from(""),
            Line::from(vec![
                Span::raw("Final Score: "),
                Span::styled(engine.score().to_string(), bold),
            ]),
            Line::from(format!(
                "Best {}  Longest {}  Games {}",
                stats.high_score, stats.longest_snake, stats.sessions_played
            )),
            Line::from(vec![
                Span::raw("Press "),
                Span::styled("R", bold),
                Span::raw(" to restart or "),
                Span::styled("Q", bold),
                Span::raw(" to quit"),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double),
        )
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Rectangle of at most `width` x `height` centred in `area`
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::life::LifeConfig;
    use crate::snake::SnakeConfig;
    use ratatui::{Terminal, backend::TestBackend};

    fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buf = terminal.backend().buffer();
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_centered() {
        let area = Rect::new(0, 0, 40, 20);
        assert_eq!(centered(area, 10, 4), Rect::new(15, 8, 10, 4));
        assert_eq!(centered(area, 80, 40), area);
    }

    #[test]
    fn test_life_status_line() {
        let mut engine = LifeEngine::new(12, 60, &LifeConfig::seeded(1)).unwrap();
        for (r, c) in [(4, 4), (4, 5), (5, 4)] {
            engine.set_alive(r, c, true);
        }

        let stats = LifeStats {
            previous: 5,
            current: 3,
            peak: 9,
            still_generations: 0,
        };

        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal
            .draw(|frame| Renderer::new().render_life(frame, &engine, &stats, true))
            .unwrap();

        let status = row_text(&terminal, 10);
        assert!(
            status.starts_with("| 3 (-2)  peak 9  [paused]"),
            "status was {status:?}"
        );
        assert!(row_text(&terminal, 0).chars().all(|c| c == '='));
    }

    #[test]
    fn test_snake_game_over_popup() {
        let mut engine = SnakeEngine::new(10, 60, SnakeConfig::seeded(4)).unwrap();
        while !engine.tick().is_terminal() {}

        let mut stats = SnakeStats::new();
        stats.record_session(&engine);
        let mut terminal = Terminal::new(TestBackend::new(60, 11)).unwrap();
        terminal
            .draw(|frame| Renderer::new().render_snake(frame, &engine, &stats, false))
            .unwrap();

        let screen: String = (0..11).map(|y| row_text(&terminal, y)).collect();
        assert!(screen.contains("GAME OVER"));
        assert!(screen.contains("Hit the wall"));
        assert!(screen.contains("Games 1"));

        let status = row_text(&terminal, 10);
        assert!(status.contains("Score:"));
        assert!(status.contains(&format!("Ticks: {}", engine.ticks())));
    }
}
