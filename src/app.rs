use std::rc::Rc;
use std::time::Instant;

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::config::{GAME_LAUNCH_DELAY, GridSize, SITE_ENTER_DELAY};
use crate::console::{Console, ConsoleRequest};
use crate::feedback::{Feedback, FeedbackEvent};
use crate::game::{GameEvent, GameSession};
use crate::history::CommandHistory;
use crate::input::{self, GameInput};
use crate::scheduler::DeferredQueue;

/// Which surface currently owns input and the frame.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Screen {
    /// The terminal landing page.
    Console,
    /// The snake-game gate.
    Game,
    /// The revealed main content.
    Site,
}

/// Staged screen transition, applied after its fixed delay.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Transition {
    EnterGame,
    EnterSite,
}

/// Startup options resolved from the command line.
#[derive(Debug, Clone, Copy)]
pub struct AppConfig {
    pub grid: GridSize,
    pub target_score: u32,
    /// Open directly on the site screen, skipping the console and gate.
    pub skip_intro: bool,
}

/// Application shell: owns the screens and plays the "host" role from the
/// core's point of view — it applies transition requests, wires input to
/// whichever surface is visible, and tears the game down when it is left.
pub struct App {
    screen: Screen,
    console: Console,
    game: Option<GameSession>,
    staged: DeferredQueue<Transition>,
    feedback: Rc<dyn Feedback>,
    config: AppConfig,
    should_quit: bool,
}

impl App {
    /// Builds the shell with a (possibly persisted) command history.
    #[must_use]
    pub fn new(config: AppConfig, history: CommandHistory, feedback: Rc<dyn Feedback>) -> Self {
        let screen = if config.skip_intro {
            Screen::Site
        } else {
            Screen::Console
        };

        Self {
            screen,
            console: Console::new(history, config.target_score, feedback.clone()),
            game: None,
            staged: DeferredQueue::new(),
            feedback,
            config,
            should_quit: false,
        }
    }

    /// Routes one terminal event to the active surface.
    pub fn handle_event(&mut self, event: &Event, now: Instant) {
        let Event::Key(key) = event else {
            return;
        };

        if key.kind == KeyEventKind::Press
            && key.modifiers.contains(KeyModifiers::CONTROL)
            && key.code == KeyCode::Char('c')
        {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Console => {
                if let Some(console_input) = input::map_console_key(*key) {
                    if let Some(request) = self.console.handle_input(console_input) {
                        self.stage(request, now);
                    }
                }
            }
            Screen::Game => {
                let Some(game_input) = input::map_game_key(*key) else {
                    return;
                };
                match game_input {
                    GameInput::Back => {
                        // Abandoning the gate returns to the console.
                        self.game = None;
                        self.screen = Screen::Console;
                    }
                    other => {
                        if let Some(game) = &mut self.game {
                            game.apply_input(other);
                        }
                    }
                }
            }
            Screen::Site => {
                if key.kind == KeyEventKind::Press
                    && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
                {
                    self.should_quit = true;
                }
            }
        }
    }

    /// Drains due transitions and advances the game. Call once per loop
    /// iteration with the current instant.
    pub fn advance(&mut self, now: Instant) {
        for transition in self.staged.drain_due(now) {
            self.apply_transition(transition, now);
        }

        if let Some(game) = &mut self.game {
            if let Some(GameEvent::Won) = game.advance(now) {
                self.staged.schedule(now, SITE_ENTER_DELAY, Transition::EnterSite);
            }
        }
    }

    fn stage(&mut self, request: ConsoleRequest, now: Instant) {
        match request {
            ConsoleRequest::EnterGame => {
                self.staged
                    .schedule(now, GAME_LAUNCH_DELAY, Transition::EnterGame);
            }
            ConsoleRequest::EnterSite => {
                self.staged
                    .schedule(now, SITE_ENTER_DELAY, Transition::EnterSite);
            }
        }
    }

    fn apply_transition(&mut self, transition: Transition, now: Instant) {
        match transition {
            Transition::EnterGame => {
                self.game = Some(GameSession::new(
                    self.config.grid,
                    self.config.target_score,
                    self.feedback.clone(),
                    now,
                ));
                self.screen = Screen::Game;
            }
            Transition::EnterSite => {
                self.game = None;
                self.screen = Screen::Site;
                self.feedback.event(FeedbackEvent::Transition);
            }
        }
    }

    /// Returns the active screen.
    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns the console session.
    #[must_use]
    pub fn console(&self) -> &Console {
        &self.console
    }

    /// Returns the live game session while the gate is open.
    #[must_use]
    pub fn game(&self) -> Option<&GameSession> {
        self.game.as_ref()
    }

    /// Returns true once the user asked to leave.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;
    use std::time::{Duration, Instant};

    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

    use crate::config::{DEFAULT_TILE_COUNT, GridSize};
    use crate::feedback::testing::RecordingFeedback;
    use crate::history::CommandHistory;

    use super::{App, AppConfig, Screen};

    fn app() -> (App, Instant) {
        let config = AppConfig {
            grid: GridSize {
                width: DEFAULT_TILE_COUNT,
                height: DEFAULT_TILE_COUNT,
            },
            target_score: 5,
            skip_intro: false,
        };
        let app = App::new(
            config,
            CommandHistory::new(),
            Rc::new(RecordingFeedback::default()),
        );
        (app, Instant::now())
    }

    fn key(app: &mut App, code: KeyCode, now: Instant) {
        app.handle_event(&Event::Key(KeyEvent::new(code, KeyModifiers::NONE)), now);
    }

    fn submit(app: &mut App, line: &str, now: Instant) {
        for c in line.chars() {
            key(app, KeyCode::Char(c), now);
        }
        key(app, KeyCode::Enter, now);
    }

    #[test]
    fn play_opens_the_game_after_the_launch_delay() {
        let (mut app, now) = app();

        submit(&mut app, "play", now);
        assert_eq!(app.screen(), Screen::Console);
        assert!(app.game().is_none());

        app.advance(now + Duration::from_millis(499));
        assert_eq!(app.screen(), Screen::Console);

        app.advance(now + Duration::from_millis(500));
        assert_eq!(app.screen(), Screen::Game);
        assert!(app.game().is_some());
    }

    #[test]
    fn start_skips_the_gate_after_its_delay() {
        let (mut app, now) = app();

        submit(&mut app, "start", now);
        app.advance(now + Duration::from_millis(999));
        assert_eq!(app.screen(), Screen::Console);

        app.advance(now + Duration::from_millis(1000));
        assert_eq!(app.screen(), Screen::Site);
        assert!(app.game().is_none());
    }

    #[test]
    fn escape_abandons_the_gate_back_to_the_console() {
        let (mut app, now) = app();
        submit(&mut app, "play", now);
        let in_game = now + Duration::from_millis(500);
        app.advance(in_game);
        assert_eq!(app.screen(), Screen::Game);

        key(&mut app, KeyCode::Esc, in_game);

        assert_eq!(app.screen(), Screen::Console);
        assert!(app.game().is_none());
    }

    #[test]
    fn ctrl_c_quits_from_any_screen() {
        let (mut app, now) = app();

        app.handle_event(
            &Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            now,
        );

        assert!(app.should_quit());
    }

    #[test]
    fn q_quits_from_the_site_screen_only() {
        let (mut app, now) = app();

        key(&mut app, KeyCode::Char('q'), now);
        assert!(!app.should_quit());
        // The console swallowed the 'q' into its input buffer.
        key(&mut app, KeyCode::Backspace, now);

        submit(&mut app, "start", now);
        app.advance(now + Duration::from_millis(1000));
        key(&mut app, KeyCode::Char('q'), now);
        assert!(app.should_quit());
    }

    #[test]
    fn skip_intro_opens_directly_on_the_site() {
        let config = AppConfig {
            grid: GridSize {
                width: DEFAULT_TILE_COUNT,
                height: DEFAULT_TILE_COUNT,
            },
            target_score: 5,
            skip_intro: true,
        };
        let app = App::new(
            config,
            CommandHistory::new(),
            Rc::new(RecordingFeedback::default()),
        );

        assert_eq!(app.screen(), Screen::Site);
    }
}
