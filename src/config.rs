use std::time::Duration;

use ratatui::style::Color;

/// Logical grid dimensions passed through the game as a named type.
///
/// Replaces the anonymous `(u16, u16)` tuple that was used for bounds,
/// making width vs. height unambiguous at every call site.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Largest winnable target score on this grid.
    ///
    /// The snake's length is always score + 1, and the winning food never
    /// respawns, so the board can hold one point less than its cell count.
    /// Any higher target would fill the board and leave no cell to respawn
    /// food into.
    #[must_use]
    pub fn max_target_score(self) -> u32 {
        u32::try_from(self.total_cells().saturating_sub(1)).unwrap_or(u32::MAX)
    }
}

/// Default grid tile count per axis.
pub const DEFAULT_TILE_COUNT: u16 = 20;

/// Food eaten to win the gate and unlock the site.
pub const DEFAULT_TARGET_SCORE: u32 = 5;

/// Base tick interval in milliseconds.
pub const BASE_TICK_INTERVAL_MS: u64 = 150;

/// Minimum tick interval in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 80;

/// How much the tick interval shrinks per food eaten, in milliseconds.
pub const TICK_SPEEDUP_STEP_MS: u64 = 5;

/// Delay between the `play` command and the game screen appearing.
pub const GAME_LAUNCH_DELAY: Duration = Duration::from_millis(500);

/// Delay between winning (or `start`) and the site screen appearing.
pub const SITE_ENTER_DELAY: Duration = Duration::from_millis(1000);

/// Prompt string echoed in front of every submitted console line.
pub const PROMPT: &str = "visitor@portfolio:~$";

/// A color theme applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    /// Console prompt and command echo color.
    pub prompt: Color,
    /// Regular console output text.
    pub console_fg: Color,
    /// Highlighted headings in console output.
    pub accent: Color,
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    /// Faint reference grid dots in the play area.
    pub grid_dot: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub hud_score: Color,
    pub hud_hint: Color,
    pub site_heading: Color,
    pub site_footer: Color,
}

/// Neon-on-dark landing page theme.
pub const THEME_DEFAULT: Theme = Theme {
    name: "Neon",
    prompt: Color::Green,
    console_fg: Color::Gray,
    accent: Color::Cyan,
    snake_head: Color::Cyan,
    snake_body: Color::Blue,
    food: Color::Red,
    grid_dot: Color::DarkGray,
    play_bg: Color::Black,
    border_fg: Color::Cyan,
    hud_score: Color::White,
    hud_hint: Color::DarkGray,
    site_heading: Color::Cyan,
    site_footer: Color::DarkGray,
};
