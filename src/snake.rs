use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the neighboring cell one step away, wrapped into bounds on
    /// both axes. Passing a boundary reenters from the opposite side.
    #[must_use]
    pub fn stepped(self, direction: Direction, bounds: GridSize) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
        .wrapped(bounds)
    }

    /// Returns this position wrapped into bounds on both axes.
    #[must_use]
    pub fn wrapped(self, bounds: GridSize) -> Self {
        Self {
            x: wrap_axis(self.x, i32::from(bounds.width)),
            y: wrap_axis(self.y, i32::from(bounds.height)),
        }
    }
}

fn wrap_axis(value: i32, upper_bound: i32) -> i32 {
    let wrapped = value % upper_bound;
    if wrapped < 0 {
        wrapped + upper_bound
    } else {
        wrapped
    }
}

/// Ordered snake body, head first. Movement direction lives in the game
/// state because the snake starts with no direction at all.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Creates a one-cell snake at `start`.
    #[must_use]
    pub fn new(start: Position) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);

        Self { body }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>) -> Self {
        Self {
            body: VecDeque::from(segments),
        }
    }

    /// Prepends a new head segment (growth step of a food tick).
    pub fn push_head(&mut self, head: Position) {
        self.body.push_front(head);
    }

    /// Removes the tail segment (second half of a plain move).
    pub fn pop_tail(&mut self) {
        let _ = self.body.pop_back();
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::input::Direction;

    use super::{Position, Snake};

    #[test]
    fn position_wrapping_keeps_coordinates_inside_bounds() {
        let bounds = GridSize {
            width: 10,
            height: 8,
        };

        let wrapped_left = Position { x: -1, y: 3 }.wrapped(bounds);
        let wrapped_bottom = Position { x: 4, y: 8 }.wrapped(bounds);

        assert_eq!(wrapped_left, Position { x: 9, y: 3 });
        assert_eq!(wrapped_bottom, Position { x: 4, y: 0 });
    }

    #[test]
    fn stepping_past_every_edge_reenters_opposite_side() {
        let bounds = GridSize {
            width: 20,
            height: 20,
        };

        let right_edge = Position { x: 19, y: 7 }.stepped(Direction::Right, bounds);
        let left_edge = Position { x: 0, y: 7 }.stepped(Direction::Left, bounds);
        let top_edge = Position { x: 3, y: 0 }.stepped(Direction::Up, bounds);
        let bottom_edge = Position { x: 3, y: 19 }.stepped(Direction::Down, bounds);

        assert_eq!(right_edge, Position { x: 0, y: 7 });
        assert_eq!(left_edge, Position { x: 19, y: 7 });
        assert_eq!(top_edge, Position { x: 3, y: 19 });
        assert_eq!(bottom_edge, Position { x: 3, y: 0 });
    }

    #[test]
    fn push_head_without_pop_grows_by_one() {
        let mut snake = Snake::new(Position { x: 5, y: 5 });

        snake.push_head(Position { x: 6, y: 5 });

        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head(), Position { x: 6, y: 5 });
    }

    #[test]
    fn push_head_then_pop_tail_keeps_length() {
        let mut snake = Snake::from_segments(vec![
            Position { x: 5, y: 5 },
            Position { x: 4, y: 5 },
            Position { x: 3, y: 5 },
        ]);

        snake.push_head(Position { x: 6, y: 5 });
        snake.pop_tail();

        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position { x: 6, y: 5 });
        assert!(!snake.occupies(Position { x: 3, y: 5 }));
    }
}
