use rand::Rng;

use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// Food entity currently active on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    /// Creates food at an explicit position.
    #[must_use]
    pub fn at(position: Position) -> Self {
        Self { position }
    }

    /// Fixed starting position used for every fresh run, distinct from the
    /// snake's center start on any grid of at least 4x4.
    #[must_use]
    pub fn starting(bounds: GridSize) -> Self {
        Self::at(Position {
            x: i32::from(bounds.width) * 3 / 4,
            y: i32::from(bounds.height) * 3 / 4,
        })
    }

    /// Respawns food in a uniformly random unoccupied cell.
    #[must_use]
    pub fn respawn<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize, snake: &Snake) -> Self {
        Self::at(spawn_position(rng, bounds, snake))
    }
}

/// Picks a uniformly random position not currently occupied by the snake.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize, snake: &Snake) -> Position {
    let mut candidates = Vec::new();

    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            let position = Position { x, y };
            if !snake.occupies(position) {
                candidates.push(position);
            }
        }
    }

    assert!(
        !candidates.is_empty(),
        "spawn_position: no free cells on the board ({}x{})",
        bounds.width,
        bounds.height,
    );

    let index = rng.gen_range(0..candidates.len());
    candidates[index]
}
