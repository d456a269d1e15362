use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::config::{GridSize, Theme};
use crate::game::{GameSession, GameStatus};
use crate::snake::Position;

const GLYPH_GRID_DOT: &str = "·";
const GLYPH_SNAKE_HEAD: &str = "█";
const GLYPH_SNAKE_BODY: &str = "▓";
const GLYPH_FOOD: &str = "●";
const GLYPH_FOOD_PULSE: &str = "◉";

/// Renders the game screen: centered play field, score line, hint line.
pub fn render(frame: &mut Frame<'_>, game: &GameSession, theme: &Theme) {
    let area = frame.area();
    frame.render_widget(
        Block::new().style(Style::default().bg(theme.play_bg)),
        area,
    );

    let [play_area, score_area, hint_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let field = centered_field(play_area, game.bounds());
    let block = Block::bordered()
        .title(" snake ")
        .border_style(Style::default().fg(theme.border_fg));
    let inner = block.inner(field);
    frame.render_widget(block, field);

    render_grid(frame, inner, game.bounds(), theme);
    render_food(frame, inner, game, theme);
    render_snake(frame, inner, game, theme);

    frame.render_widget(
        Paragraph::new(Line::from(format!(
            "Score: {} / {}",
            game.score,
            game.target_score()
        )))
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.hud_score)),
        score_area,
    );

    let hint = match game.status {
        GameStatus::Idle => "Press arrows or WASD to move — Esc returns to the terminal",
        GameStatus::Running => "Wrap the walls, dodge yourself — the gate opens at the target",
        GameStatus::Won => "You win! Entering the website...",
    };
    frame.render_widget(
        Paragraph::new(Line::from(hint))
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.hud_hint)),
        hint_area,
    );
}

/// Faint reference grid behind the actors.
fn render_grid(frame: &mut Frame<'_>, inner: Rect, bounds: GridSize, theme: &Theme) {
    let buffer = frame.buffer_mut();
    let style = Style::default().fg(theme.grid_dot);

    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            let Some((col, row)) = logical_to_terminal(inner, bounds, Position { x, y }) else {
                continue;
            };
            buffer.set_string(col, row, GLYPH_GRID_DOT, style);
        }
    }
}

/// Food with a pulsing emphasis driven by the tick counter.
fn render_food(frame: &mut Frame<'_>, inner: Rect, game: &GameSession, theme: &Theme) {
    let Some((col, row)) = logical_to_terminal(inner, game.bounds(), game.food.position) else {
        return;
    };

    let pulsing = game.tick_count % 2 == 0;
    let glyph = if pulsing { GLYPH_FOOD_PULSE } else { GLYPH_FOOD };
    let mut style = Style::default().fg(theme.food);
    if pulsing {
        style = style.add_modifier(Modifier::BOLD);
    }

    frame.buffer_mut().set_string(col, row, glyph, style);
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, game: &GameSession, theme: &Theme) {
    let head = game.snake.head();
    let buffer = frame.buffer_mut();

    for segment in game.snake.segments() {
        let Some((col, row)) = logical_to_terminal(inner, game.bounds(), *segment) else {
            continue;
        };

        if *segment == head {
            buffer.set_string(
                col,
                row,
                GLYPH_SNAKE_HEAD,
                Style::default()
                    .fg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            );
        } else {
            buffer.set_string(
                col,
                row,
                GLYPH_SNAKE_BODY,
                Style::default().fg(theme.snake_body),
            );
        }
    }
}

/// Centers the bordered play field inside the available area, clamped to it.
fn centered_field(area: Rect, bounds: GridSize) -> Rect {
    let want_width = bounds.width.saturating_add(2).min(area.width);
    let want_height = bounds.height.saturating_add(2).min(area.height);
    let x = area.x + (area.width - want_width) / 2;
    let y = area.y + (area.height - want_height) / 2;

    Rect {
        x,
        y,
        width: want_width,
        height: want_height,
    }
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
