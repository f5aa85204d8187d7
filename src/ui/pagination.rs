//! Pagination footer rendering.
//!
//! Shows the "Page X of Y" indicator and the jump-to-page input.

use crate::app::{App, UiMode};
use crate::ui::Palette;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Render the pagination footer.
///
/// # Details
/// While the jump input is active the typed buffer is shown with a cursor;
/// committing clamps to the valid page range and invalid text reverts.
pub fn render_pagination(app: &App, palette: &Palette, area: Rect, buf: &mut Buffer) {
    let state = app.tab_state();
    let total = app.total_pages();
    let jumping = app.mode == UiMode::PageJump;

    let mut spans = vec![
        Span::styled(
            format!("Page {} of {}", state.page.current(), total),
            Style::default().fg(palette.text),
        ),
        Span::styled("   Go to page: ", Style::default().fg(palette.accent)),
    ];

    if jumping {
        spans.push(Span::styled(
            state.page.input().unwrap_or("").to_string(),
            Style::default().fg(palette.text),
        ));
        spans.push(Span::styled("_", Style::default().fg(palette.unread)));
    } else {
        spans.push(Span::styled("press 'g'", Style::default().fg(palette.dim)));
        spans.push(Span::styled(
            "   ←/→ page",
            Style::default().fg(palette.dim),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title("Pages")
            .borders(Borders::ALL)
            .style(if jumping {
                Style::default().fg(palette.unread)
            } else {
                Style::default()
            }),
    );

    Widget::render(paragraph, area, buf);
}
