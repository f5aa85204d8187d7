//! Tabs widget rendering.
//!
//! Displays tab headers for switching between the record collections.

use crate::app::{App, Tab};
use crate::ui::Palette;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Render the tabs widget.
///
/// # Details
/// Displays all tabs horizontally with the active one highlighted. The
/// Notifications tab carries an unread-count badge.
pub fn render_tabs(app: &App, palette: &Palette, area: Rect, buf: &mut Buffer) {
    let active_tab = app.active_tab();
    let unread = app.unread_count();

    let mut spans = Vec::new();
    for (i, tab) in Tab::ALL.iter().enumerate() {
        let is_active = *tab == active_tab;
        let style = if is_active {
            Style::default()
                .fg(palette.unread)
                .bg(palette.highlight_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.dim)
        };

        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(palette.dim)));
        }

        let mut label = tab.title().to_string();
        if *tab == Tab::Notifications && unread > 0 {
            label = format!("{} ({})", label, unread);
        }
        let tab_text = if is_active {
            format!("▶ {} ◀", label)
        } else {
            format!("  {}  ", label)
        };
        spans.push(Span::styled(tab_text, style));
    }

    let line = Line::from(spans);

    let paragraph = Paragraph::new(line)
        .block(Block::default().title("Tabs").borders(Borders::ALL))
        .alignment(ratatui::layout::Alignment::Center);

    Widget::render(paragraph, area, buf);
}
