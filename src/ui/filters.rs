//! Filters widget rendering.
//!
//! Displays the active category filter and sort key, and the category menu
//! while it is open.

use crate::app::{App, Tab, UiMode};
use crate::ui::Palette;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Height the filters widget wants, given the current mode.
///
/// # Details
/// The open category menu grows the widget; the layout recomputes every
/// frame so this is the menu's attach-on-open, detach-on-close scoping.
pub fn filters_height(app: &App) -> u16 {
    match app.mode {
        UiMode::FilterMenu => u16::try_from(app.filter_options().len())
            .unwrap_or(u16::MAX)
            .saturating_add(3),
        _ => 3,
    }
}

/// Render the filters widget.
///
/// # Details
/// One summary line in list mode; in filter-menu mode the category options
/// are listed below it with the highlighted entry marked.
pub fn render_filters(app: &App, palette: &Palette, area: Rect, buf: &mut Buffer) {
    let is_open = app.mode == UiMode::FilterMenu;
    let state = app.tab_state();

    let mut summary = vec![
        Span::styled("Filter: ", Style::default().fg(palette.accent)),
        Span::styled(state.filter.label().to_string(), Style::default().fg(palette.text)),
        Span::styled("   Sort: ", Style::default().fg(palette.accent)),
        Span::styled(state.sort.name(), Style::default().fg(palette.text)),
    ];
    if app.active_tab() == Tab::Properties {
        summary.push(Span::styled(
            "   Bookmarked only: ",
            Style::default().fg(palette.accent),
        ));
        summary.push(Span::styled(
            if app.bookmarked_only { "Yes" } else { "No" },
            Style::default().fg(if app.bookmarked_only {
                palette.ok
            } else {
                palette.dim
            }),
        ));
        summary.push(Span::styled(
            format!("   Bookmarks: {}", app.bookmarks.len()),
            Style::default().fg(palette.dim),
        ));
    }

    let mut lines = vec![Line::from(summary)];

    if is_open {
        for (i, option) in app.filter_options().iter().enumerate() {
            let style = if i == app.menu_index {
                Style::default()
                    .fg(palette.unread)
                    .bg(palette.highlight_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.text)
            };
            let marker = if i == app.menu_index { "> " } else { "  " };
            lines.push(Line::from(Span::styled(
                format!("{}{}", marker, option),
                style,
            )));
        }
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(if is_open {
                "Filter (Enter to apply, Esc to close)"
            } else {
                "Filters (press 'f')"
            })
            .borders(Borders::ALL)
            .style(if is_open {
                Style::default().fg(palette.unread)
            } else {
                Style::default()
            }),
    );

    Widget::render(paragraph, area, buf);
}
