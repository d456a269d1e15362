use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::config::{PROMPT, Theme};
use crate::console::Console;

/// Renders the terminal landing screen: transcript tail plus prompt line.
pub fn render(frame: &mut Frame<'_>, console: &Console, theme: &Theme) {
    let area = frame.area();
    let block = Block::bordered()
        .title(" terminal ")
        .border_style(Style::default().fg(theme.border_fg))
        .style(Style::default().bg(theme.play_bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [transcript_area, prompt_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    frame.render_widget(
        Paragraph::new(transcript_tail(
            console,
            usize::from(transcript_area.height),
            theme,
        )),
        transcript_area,
    );

    frame.render_widget(prompt_line(console, usize::from(prompt_area.width), theme), prompt_area);
}

/// Newest transcript lines that fit the area, echoed prompt lines in the
/// prompt color, everything else in the regular console color.
fn transcript_tail<'a>(console: &'a Console, rows: usize, theme: &Theme) -> Vec<Line<'a>> {
    let transcript = console.transcript();
    let skip = transcript.len().saturating_sub(rows);

    transcript[skip..]
        .iter()
        .map(|line| {
            let style = if line.starts_with(PROMPT) {
                Style::default().fg(theme.prompt)
            } else {
                Style::default().fg(theme.console_fg)
            };
            Line::styled(line.as_str(), style)
        })
        .collect()
}

/// Prompt plus the editable buffer and a block cursor. When the buffer is
/// wider than the row, only its tail is shown.
fn prompt_line<'a>(console: &'a Console, columns: usize, theme: &Theme) -> Line<'a> {
    let prompt_width = PROMPT.width() + 1;
    let budget = columns.saturating_sub(prompt_width + 1);

    let input = console.input();
    let mut shown = input;
    while shown.width() > budget && !shown.is_empty() {
        let mut chars = shown.chars();
        chars.next();
        shown = chars.as_str();
    }

    Line::from(vec![
        Span::styled(
            format!("{PROMPT} "),
            Style::default()
                .fg(theme.prompt)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(shown, Style::default().fg(theme.console_fg)),
        Span::styled("█", Style::default().fg(theme.accent)),
    ])
}
