use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::board::BoardView;
use crate::config::Theme;

const SEPARATOR: &str = " │ ";

/// Supplemental values displayed by the HUD rows.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo<'a> {
    /// Best score reached during this run; never persisted.
    pub best_score: u32,
    pub theme: &'a Theme,
}

/// Draws the score line into `score_area` and key help into `help_area`.
pub fn render_hud(
    frame: &mut Frame<'_>,
    score_area: Rect,
    help_area: Rect,
    view: &BoardView,
    info: &HudInfo<'_>,
) {
    let [title_area, values_area] =
        Layout::horizontal([Constraint::Length(8), Constraint::Min(0)]).areas(score_area);

    frame.render_widget(
        Paragraph::new(Line::from("SNAKE")).style(
            Style::default()
                .fg(info.theme.hud_text)
                .add_modifier(Modifier::BOLD),
        ),
        title_area,
    );

    frame.render_widget(
        Paragraph::new(score_line(view.score, info.best_score, info.theme))
            .alignment(Alignment::Right),
        values_area,
    );

    frame.render_widget(
        Paragraph::new(Line::from(help_text(help_area.width)))
            .alignment(Alignment::Center)
            .style(Style::default().fg(info.theme.help_text)),
        help_area,
    );
}

fn score_line(score: u32, best_score: u32, theme: &Theme) -> Line<'static> {
    let value_style = Style::default()
        .fg(theme.hud_text)
        .add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(theme.help_text);

    Line::from(vec![
        Span::styled("Score: ", label_style),
        Span::styled(score.to_string(), value_style),
        Span::styled(SEPARATOR, label_style),
        Span::styled("Best: ", label_style),
        Span::styled(best_score.max(score).to_string(), value_style),
    ])
}

fn help_text(width: u16) -> &'static str {
    const FULL: &str = "arrows/WASD move · space start · esc exit";
    const SHORT: &str = "WASD · space · esc";

    if usize::from(width) >= FULL.chars().count() {
        FULL
    } else {
        SHORT
    }
}
