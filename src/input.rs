use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the unit (dx, dy) step for this direction.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// High-level input events consumed by the game screen.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    /// Leave the game and return to the console.
    Back,
}

/// High-level input events consumed by the console screen.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ConsoleInput {
    Char(char),
    Backspace,
    Submit,
    RecallPrevious,
    RecallNext,
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// Maps a raw key event to game input. Key releases are ignored so Windows
/// terminals do not produce doubled events.
#[must_use]
pub fn map_game_key(key: KeyEvent) -> Option<GameInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(GameInput::Direction(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameInput::Direction(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameInput::Direction(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameInput::Direction(Direction::Right))
        }
        KeyCode::Esc => Some(GameInput::Back),
        _ => None,
    }
}

/// Maps a raw key event to console line-editing input.
#[must_use]
pub fn map_console_key(key: KeyEvent) -> Option<ConsoleInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Leave control chords (Ctrl-C etc.) to the application shell.
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        KeyCode::Char(c) => Some(ConsoleInput::Char(c)),
        KeyCode::Backspace => Some(ConsoleInput::Backspace),
        KeyCode::Enter => Some(ConsoleInput::Submit),
        KeyCode::Up => Some(ConsoleInput::RecallPrevious),
        KeyCode::Down => Some(ConsoleInput::RecallNext),
        _ => None,
    }
}
