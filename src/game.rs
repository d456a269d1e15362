use std::rc::Rc;
use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{
    BASE_TICK_INTERVAL_MS, GridSize, MIN_TICK_INTERVAL_MS, TICK_SPEEDUP_STEP_MS,
};
use crate::feedback::{Feedback, FeedbackEvent};
use crate::food::Food;
use crate::input::{Direction, GameInput, direction_change_is_valid};
use crate::scheduler::TickScheduler;
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
///
/// A self-collision is not a state of its own: it resets the session back to
/// `Idle` within the same tick, so the host only ever observes these three.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    /// Board is live but no direction has been set yet.
    Idle,
    /// The snake is advancing every tick.
    Running,
    /// Target score reached; terminal for the session.
    Won,
}

/// Signal surfaced to the host by `advance`/`tick`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameEvent {
    /// The target score was reached on this tick.
    Won,
}

/// Complete mutable game state for one gate session, including its own tick
/// driver. Created fresh when the game screen opens and dropped when the
/// host leaves it.
pub struct GameSession {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub status: GameStatus,
    pub tick_count: u64,
    direction: Option<Direction>,
    target_score: u32,
    bounds: GridSize,
    scheduler: TickScheduler,
    rng: StdRng,
    feedback: Rc<dyn Feedback>,
}

impl GameSession {
    /// Creates a session with entropy-seeded food placement, ticking from `now`.
    #[must_use]
    pub fn new(bounds: GridSize, target_score: u32, feedback: Rc<dyn Feedback>, now: Instant) -> Self {
        Self::with_rng(bounds, target_score, StdRng::from_entropy(), feedback, now)
    }

    /// Creates a deterministic session for tests and reproducible simulations.
    #[must_use]
    pub fn new_with_seed(
        bounds: GridSize,
        target_score: u32,
        seed: u64,
        feedback: Rc<dyn Feedback>,
        now: Instant,
    ) -> Self {
        Self::with_rng(
            bounds,
            target_score,
            StdRng::seed_from_u64(seed),
            feedback,
            now,
        )
    }

    fn with_rng(
        bounds: GridSize,
        target_score: u32,
        rng: StdRng,
        feedback: Rc<dyn Feedback>,
        now: Instant,
    ) -> Self {
        let mut scheduler = TickScheduler::new(Duration::from_millis(BASE_TICK_INTERVAL_MS));
        scheduler.start(now);

        Self {
            snake: Snake::new(starting_position(bounds)),
            food: Food::starting(bounds),
            score: 0,
            status: GameStatus::Idle,
            tick_count: 0,
            direction: None,
            target_score,
            bounds,
            scheduler,
            rng,
            feedback,
        }
    }

    /// Returns the grid bounds of this session.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Returns the score needed to win.
    #[must_use]
    pub fn target_score(&self) -> u32 {
        self.target_score
    }

    /// Returns the current movement direction, `None` until the first
    /// accepted input.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Returns the current tick period (shrinks as food is eaten).
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        self.scheduler.period()
    }

    /// Returns true while the tick driver is armed.
    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.scheduler.is_running()
    }

    /// Applies one external input event.
    ///
    /// Directions are stored immediately and take effect on the next tick;
    /// rapid inputs between ticks overwrite each other, latest wins. The
    /// exact reverse of the current travel direction is rejected.
    pub fn apply_input(&mut self, input: GameInput) {
        let GameInput::Direction(next) = input else {
            return;
        };

        if self.status == GameStatus::Won {
            return;
        }

        if let Some(current) = self.direction {
            if !direction_change_is_valid(current, next) {
                return;
            }
        }

        self.direction = Some(next);
        self.status = GameStatus::Running;
        self.feedback.event(FeedbackEvent::Move);
    }

    /// Fires at most one due tick. Call once per event-loop iteration.
    pub fn advance(&mut self, now: Instant) -> Option<GameEvent> {
        if self.scheduler.poll(now) {
            return self.tick(now);
        }

        None
    }

    /// Advances simulation by one gameplay tick.
    pub fn tick(&mut self, now: Instant) -> Option<GameEvent> {
        if self.status == GameStatus::Won {
            return None;
        }

        self.tick_count += 1;

        let Some(direction) = self.direction else {
            return None;
        };

        let candidate = self.snake.head().stepped(direction, self.bounds);

        if self.snake.occupies(candidate) {
            self.feedback.event(FeedbackEvent::Collision);
            self.reset(now);
            return None;
        }

        self.snake.push_head(candidate);

        if candidate == self.food.position {
            self.score += 1;
            self.feedback.event(FeedbackEvent::Eat);

            if self.score >= self.target_score {
                // The snake keeps the grown head on this final tick.
                self.status = GameStatus::Won;
                self.scheduler.stop();
                self.feedback.event(FeedbackEvent::Win);
                return Some(GameEvent::Won);
            }

            self.food = Food::respawn(&mut self.rng, self.bounds, &self.snake);
            let faster = self
                .scheduler
                .period()
                .saturating_sub(Duration::from_millis(TICK_SPEEDUP_STEP_MS))
                .max(Duration::from_millis(MIN_TICK_INTERVAL_MS));
            self.scheduler.restart_with_period(now, faster);
        } else {
            self.snake.pop_tail();
        }

        None
    }

    /// Full reset after a self-collision: fresh snake, food, score, direction
    /// and base speed. The session keeps ticking, ready for new input.
    fn reset(&mut self, now: Instant) {
        self.snake = Snake::new(starting_position(self.bounds));
        self.food = Food::starting(self.bounds);
        self.score = 0;
        self.direction = None;
        self.status = GameStatus::Idle;
        self.scheduler
            .restart_with_period(now, Duration::from_millis(BASE_TICK_INTERVAL_MS));
    }
}

fn starting_position(bounds: GridSize) -> Position {
    Position {
        x: i32::from(bounds.width / 2),
        y: i32::from(bounds.height / 2),
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;
    use std::time::{Duration, Instant};

    use crate::config::{BASE_TICK_INTERVAL_MS, GridSize};
    use crate::feedback::FeedbackEvent;
    use crate::feedback::testing::RecordingFeedback;
    use crate::food::Food;
    use crate::input::{Direction, GameInput};
    use crate::snake::{Position, Snake};

    use super::{GameEvent, GameSession, GameStatus};

    const GRID: GridSize = GridSize {
        width: 20,
        height: 20,
    };

    fn session(target_score: u32) -> (GameSession, Rc<RecordingFeedback>, Instant) {
        let feedback = Rc::new(RecordingFeedback::default());
        let now = Instant::now();
        let session = GameSession::new_with_seed(GRID, target_score, 42, feedback.clone(), now);
        (session, feedback, now)
    }

    #[test]
    fn fresh_session_is_idle_at_fixed_positions() {
        let (session, _, _) = session(5);

        assert_eq!(session.status, GameStatus::Idle);
        assert_eq!(session.snake.head(), Position { x: 10, y: 10 });
        assert_eq!(session.food.position, Position { x: 15, y: 15 });
        assert_eq!(session.score, 0);
        assert_eq!(session.direction(), None);
        assert!(session.is_ticking());
    }

    #[test]
    fn tick_without_direction_is_a_no_op() {
        let (mut session, _, now) = session(5);

        session.tick(now);

        assert_eq!(session.snake.head(), Position { x: 10, y: 10 });
        assert_eq!(session.status, GameStatus::Idle);
    }

    #[test]
    fn one_tick_moving_right_without_food_keeps_length() {
        let (mut session, _, now) = session(5);
        session.snake =
            Snake::from_segments(vec![Position { x: 10, y: 10 }, Position { x: 9, y: 10 }]);

        session.apply_input(GameInput::Direction(Direction::Right));
        session.tick(now);

        let body: Vec<Position> = session.snake.segments().copied().collect();
        assert_eq!(
            body,
            vec![Position { x: 11, y: 10 }, Position { x: 10, y: 10 }]
        );
        assert_eq!(session.score, 0);
    }

    #[test]
    fn one_cell_snake_stays_one_cell_on_a_plain_move() {
        let (mut session, _, now) = session(5);

        session.apply_input(GameInput::Direction(Direction::Right));
        session.tick(now);

        assert_eq!(session.snake.len(), 1);
        assert_eq!(session.snake.head(), Position { x: 11, y: 10 });
    }

    #[test]
    fn eating_food_grows_snake_and_speeds_up() {
        let (mut session, feedback, now) = session(5);
        session.food = Food::at(Position { x: 11, y: 10 });

        session.apply_input(GameInput::Direction(Direction::Right));
        let event = session.tick(now);

        assert_eq!(event, None);
        assert_eq!(session.score, 1);
        assert_eq!(session.snake.len(), 2);
        assert_ne!(session.food.position, Position { x: 11, y: 10 });
        assert!(!session.snake.occupies(session.food.position));
        assert_eq!(
            session.tick_interval(),
            Duration::from_millis(BASE_TICK_INTERVAL_MS - 5)
        );
        assert_eq!(feedback.count(FeedbackEvent::Eat), 1);
    }

    #[test]
    fn reversal_input_is_rejected() {
        let (mut session, feedback, now) = session(5);

        session.apply_input(GameInput::Direction(Direction::Right));
        session.apply_input(GameInput::Direction(Direction::Left));
        session.tick(now);

        assert_eq!(session.direction(), Some(Direction::Right));
        assert_eq!(session.snake.head(), Position { x: 11, y: 10 });
        // Only the accepted input produced move feedback.
        assert_eq!(feedback.count(FeedbackEvent::Move), 1);
    }

    #[test]
    fn latest_input_between_ticks_wins() {
        let (mut session, _, now) = session(5);

        session.apply_input(GameInput::Direction(Direction::Right));
        session.apply_input(GameInput::Direction(Direction::Down));
        session.tick(now);

        assert_eq!(session.snake.head(), Position { x: 10, y: 11 });
    }

    #[test]
    fn head_wraps_across_the_grid_edge() {
        let (mut session, _, now) = session(5);
        session.snake = Snake::new(Position { x: 19, y: 7 });

        session.apply_input(GameInput::Direction(Direction::Right));
        session.tick(now);

        assert_eq!(session.snake.head(), Position { x: 0, y: 7 });
        assert_eq!(session.status, GameStatus::Running);
    }

    #[test]
    fn self_collision_resets_the_session() {
        let (mut session, feedback, now) = session(5);
        session.snake = Snake::from_segments(vec![
            Position { x: 2, y: 2 },
            Position { x: 3, y: 2 },
            Position { x: 3, y: 3 },
            Position { x: 2, y: 3 },
            Position { x: 1, y: 3 },
        ]);
        session.score = 3;

        session.apply_input(GameInput::Direction(Direction::Down));
        session.tick(now);

        assert_eq!(session.status, GameStatus::Idle);
        assert_eq!(session.score, 0);
        assert_eq!(session.snake.len(), 1);
        assert_eq!(session.snake.head(), Position { x: 10, y: 10 });
        assert_eq!(session.direction(), None);
        assert_eq!(
            session.tick_interval(),
            Duration::from_millis(BASE_TICK_INTERVAL_MS)
        );
        assert!(session.is_ticking());
        assert_eq!(feedback.count(FeedbackEvent::Collision), 1);
    }

    #[test]
    fn reaching_target_wins_exactly_once_without_shrinking() {
        let (mut session, feedback, now) = session(1);
        session.food = Food::at(Position { x: 11, y: 10 });

        session.apply_input(GameInput::Direction(Direction::Right));
        let event = session.tick(now);

        assert_eq!(event, Some(GameEvent::Won));
        assert_eq!(session.status, GameStatus::Won);
        // Grown head kept: no shrink on the winning tick.
        assert_eq!(session.snake.len(), 2);
        assert!(!session.is_ticking());
        assert_eq!(feedback.count(FeedbackEvent::Win), 1);

        // Terminal: further ticks and inputs change nothing.
        let later = now + Duration::from_secs(1);
        assert_eq!(session.tick(later), None);
        session.apply_input(GameInput::Direction(Direction::Down));
        assert_eq!(session.direction(), Some(Direction::Right));
        assert_eq!(session.snake.len(), 2);
    }

    #[test]
    fn advance_fires_only_when_the_period_elapses() {
        let (mut session, _, now) = session(5);
        session.apply_input(GameInput::Direction(Direction::Right));

        assert_eq!(session.advance(now + Duration::from_millis(10)), None);
        assert_eq!(session.snake.head(), Position { x: 10, y: 10 });

        session.advance(now + Duration::from_millis(BASE_TICK_INTERVAL_MS));
        assert_eq!(session.snake.head(), Position { x: 11, y: 10 });
    }
}
