use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::board::{BoardView, CellKind};
use crate::config::{Theme, CELL_WIDTH};
use crate::ui::hud::{render_hud, HudInfo};
use crate::ui::menu::{centered_rect, render_banner};

const GLYPH_FILLED: &str = "██";
const GLYPH_EMPTY: &str = "  ";

/// Rows above and below the board: score line and help line.
const HUD_ROWS: u16 = 2;

/// Renders the full game frame from an immutable board snapshot.
pub fn render(frame: &mut Frame<'_>, view: &BoardView, hud_info: HudInfo<'_>) {
    let area = frame.area();
    let theme = hud_info.theme;

    let (board_width, board_height) = bordered_board_size(view);
    if area.width < board_width || area.height < board_height + HUD_ROWS {
        render_too_small(frame, area, theme);
        return;
    }

    let layout = centered_rect(area, board_width, board_height + HUD_ROWS);
    let score_area = Rect { height: 1, ..layout };
    let board_area = Rect {
        y: layout.y + 1,
        height: board_height,
        ..layout
    };
    let help_area = Rect {
        y: board_area.bottom(),
        height: 1,
        ..layout
    };

    render_hud(frame, score_area, help_area, view, &hud_info);

    let block = Block::bordered().border_style(Style::new().fg(theme.border_fg));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    render_cells(frame, inner, view, theme);

    if let Some(banner) = view.banner {
        render_banner(frame, board_area, banner, view.score, theme);
    }
}

/// Terminal columns and rows needed for the board including its border.
#[must_use]
pub fn bordered_board_size(view: &BoardView) -> (u16, u16) {
    let size = view.size();
    (size.saturating_mul(CELL_WIDTH).saturating_add(2), size.saturating_add(2))
}

fn render_cells(frame: &mut Frame<'_>, inner: Rect, view: &BoardView, theme: &Theme) {
    let buffer = frame.buffer_mut();

    for (row, kinds) in (0u16..).zip(view.rows()) {
        for (column, kind) in (0u16..).zip(kinds.iter()) {
            let x = inner.x.saturating_add(column.saturating_mul(CELL_WIDTH));
            let y = inner.y.saturating_add(row);
            if x >= inner.right() || y >= inner.bottom() {
                continue;
            }

            let (glyph, style) = cell_style(*kind, theme);
            buffer.set_string(x, y, glyph, style);
        }
    }
}

fn cell_style(kind: CellKind, theme: &Theme) -> (&'static str, Style) {
    match kind {
        CellKind::Head => (
            GLYPH_FILLED,
            Style::new()
                .fg(theme.snake_head)
                .bg(theme.play_bg)
                .add_modifier(Modifier::BOLD),
        ),
        CellKind::Body => (
            GLYPH_FILLED,
            Style::new().fg(theme.snake_body).bg(theme.play_bg),
        ),
        CellKind::Food => (GLYPH_FILLED, Style::new().fg(theme.food).bg(theme.play_bg)),
        CellKind::Empty => (GLYPH_EMPTY, Style::new().bg(theme.play_bg)),
    }
}

fn render_too_small(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let message = centered_rect(area, area.width, 1);
    frame.render_widget(
        Paragraph::new("terminal too small")
            .alignment(Alignment::Center)
            .style(Style::new().fg(theme.banner_game_over)),
        message,
    );
}
