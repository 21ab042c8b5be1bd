use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::snake::Direction;

/// Commands understood by the Life driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeKeyAction {
    Randomize,
    Pause,
    Resume,
    Quit,
    None,
}

/// Commands understood by the Snake driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeKeyAction {
    Steer(Direction),
    TogglePause,
    Restart,
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn life_action(&self, key: KeyEvent) -> LifeKeyAction {
        if is_interrupt(&key) {
            return LifeKeyAction::Quit;
        }

        match key.code {
            KeyCode::Char('r') | KeyCode::Char('R') => LifeKeyAction::Randomize,
            KeyCode::Char('p') | KeyCode::Char('P') => LifeKeyAction::Pause,
            KeyCode::Char('c') | KeyCode::Char('C') => LifeKeyAction::Resume,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => LifeKeyAction::Quit,
            _ => LifeKeyAction::None,
        }
    }

    pub fn snake_action(&self, key: KeyEvent) -> SnakeKeyAction {
        if is_interrupt(&key) {
            return SnakeKeyAction::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => SnakeKeyAction::Steer(Direction::Up),
            KeyCode::Down => SnakeKeyAction::Steer(Direction::Down),
            KeyCode::Left => SnakeKeyAction::Steer(Direction::Left),
            KeyCode::Right => SnakeKeyAction::Steer(Direction::Right),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => SnakeKeyAction::Steer(Direction::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => SnakeKeyAction::Steer(Direction::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => SnakeKeyAction::Steer(Direction::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => SnakeKeyAction::Steer(Direction::Right),

            // Controls
            KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Char(' ') => {
                SnakeKeyAction::TogglePause
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => SnakeKeyAction::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => SnakeKeyAction::Restart,

            _ => SnakeKeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}
