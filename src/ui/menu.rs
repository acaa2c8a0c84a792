use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use crate::board::Banner;
use crate::config::Theme;

/// Draws the status banner as a small popup centred on the board.
pub fn render_banner(frame: &mut Frame<'_>, area: Rect, banner: Banner, score: u32, theme: &Theme) {
    let color = match banner {
        Banner::PressStart => theme.banner_idle,
        Banner::GameOver(_) => theme.banner_game_over,
    };

    let mut lines = vec![Line::from(banner.text()).style(
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )];
    if let Some(detail) = banner.detail() {
        lines.push(Line::from(detail));
    }
    if matches!(banner, Banner::GameOver(_)) {
        lines.push(Line::from(format!("Score: {score}")));
    }

    let content_width = lines.iter().map(Line::width).max().unwrap_or(0);
    let width = u16::try_from(content_width).unwrap_or(u16::MAX).saturating_add(4);
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let popup = centered_rect(area, width, height);

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White).bg(theme.play_bg))
            .block(Block::bordered().border_style(Style::default().fg(color))),
        popup,
    );
}

/// Returns a `width` x `height` rectangle centred in `area`, clipped to it.
#[must_use]
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use super::centered_rect;

    #[test]
    fn centered_rect_is_centred_and_clipped() {
        let area = Rect::new(10, 5, 40, 20);

        assert_eq!(centered_rect(area, 20, 10), Rect::new(20, 10, 20, 10));
        assert_eq!(centered_rect(area, 100, 100), area);
    }
}
