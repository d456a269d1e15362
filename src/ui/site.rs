use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::commands;
use crate::config::Theme;

/// Renders the revealed main-content screen: the same about/skills/contact
/// content the console serves, laid out as site sections.
pub fn render(frame: &mut Frame<'_>, theme: &Theme) {
    let area = frame.area();
    frame.render_widget(
        Block::new().style(Style::default().bg(theme.play_bg)),
        area,
    );

    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(vec![
            Line::styled(
                "KIM BERG",
                Style::default()
                    .fg(theme.site_heading)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                "systems programmer · terminal enthusiast",
                Style::default().fg(theme.hud_hint),
            ),
        ])
        .alignment(Alignment::Center),
        header_area,
    );

    let [about_area, skills_area, contact_area] = Layout::horizontal([
        Constraint::Percentage(40),
        Constraint::Percentage(30),
        Constraint::Percentage(30),
    ])
    .areas(body_area);

    let section = |title: &'static str, text: String| {
        Paragraph::new(text)
            .wrap(Wrap { trim: false })
            .style(Style::default().fg(theme.console_fg))
            .block(
                Block::bordered()
                    .title(title)
                    .border_style(Style::default().fg(theme.border_fg)),
            )
    };

    frame.render_widget(section(" about ", commands::about_text()), about_area);
    frame.render_widget(section(" skills ", commands::skills_text()), skills_area);
    frame.render_widget(section(" contact ", commands::contact_text()), contact_area);

    frame.render_widget(
        Paragraph::new(Line::from("[q] quit"))
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.site_footer)),
        footer_area,
    );
}
