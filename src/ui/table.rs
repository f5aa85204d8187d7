//! Record table rendering.
//!
//! Displays the current page of the active tab as a selectable list, one
//! row per record. Pagination replaces scrolling: only the page slice is
//! ever built.

use crate::app::{App, Tab};
use crate::portal::models::format_amount;
use crate::ui::Palette;
use crate::view::page_slice;
use chrono::NaiveDate;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, StatefulWidget, Widget},
};

fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Render the record table for the active tab.
///
/// # Details
/// Builds one line per record on the current page. Properties get a
/// bookmark marker, notifications an unread marker. The empty state covers
/// both an empty collection and an out-of-range page.
pub fn render_table(app: &App, palette: &Palette, area: Rect, buf: &mut Buffer) {
    let page = app.tab_state().page.current();
    let title = format!(
        "{} ({}/{})",
        app.active_tab().title(),
        app.row_count(),
        app.total_count()
    );

    let items: Vec<ListItem> = match app.active_tab() {
        Tab::Properties => {
            let rows = app.visible_properties();
            page_slice(&rows, page, app.page_size)
                .iter()
                .map(|p| {
                    let marker = if app.bookmarks.contains(p.id) {
                        Span::styled("★ ", Style::default().fg(palette.ok))
                    } else {
                        Span::styled("  ", Style::default())
                    };
                    ListItem::new(Line::from(vec![
                        marker,
                        Span::styled(
                            p.name.clone(),
                            Style::default()
                                .fg(palette.text)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(format!("  {}", p.kind), Style::default().fg(palette.accent)),
                        Span::styled(
                            format!("  {}, {}", p.street, p.city),
                            Style::default().fg(palette.dim),
                        ),
                        Span::styled(
                            format!("  {}/mo", format_amount(p.rent_cents)),
                            Style::default().fg(palette.ok),
                        ),
                        Span::styled(
                            format!("  {}bd/{}ba", p.bedrooms, p.bathrooms),
                            Style::default().fg(palette.dim),
                        ),
                        Span::styled(
                            format!("  {}", format_date(p.listed_on)),
                            Style::default().fg(palette.dim),
                        ),
                    ]))
                })
                .collect()
        }
        Tab::Rentals => {
            let rows = app.visible_rentals();
            page_slice(&rows, page, app.page_size)
                .iter()
                .map(|r| {
                    ListItem::new(Line::from(vec![
                        Span::styled(
                            format!("{} {}", r.property, r.unit),
                            Style::default()
                                .fg(palette.text)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(
                            format!("  {}/mo", format_amount(r.rent_cents)),
                            Style::default().fg(palette.ok),
                        ),
                        Span::styled(
                            format!(
                                "  {} → {}",
                                format_date(r.lease_start),
                                format_date(r.lease_end)
                            ),
                            Style::default().fg(palette.dim),
                        ),
                        Span::styled(format!("  {}", r.status), Style::default().fg(palette.accent)),
                    ]))
                })
                .collect()
        }
        Tab::Notices => {
            let rows = app.visible_notices();
            page_slice(&rows, page, app.page_size)
                .iter()
                .map(|n| {
                    ListItem::new(Line::from(vec![
                        Span::styled(
                            format!("[{}] ", if n.status.is_empty() { "-" } else { &n.status }),
                            Style::default().fg(palette.accent),
                        ),
                        Span::styled(
                            n.title.clone(),
                            Style::default()
                                .fg(palette.text)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(format!("  {}", n.kind), Style::default().fg(palette.accent)),
                        Span::styled(
                            format!("  {}", n.audience),
                            Style::default().fg(palette.dim),
                        ),
                        Span::styled(format!("  {}", n.body), Style::default().fg(palette.dim)),
                        Span::styled(
                            format!("  {}", format_date(n.date)),
                            Style::default().fg(palette.dim),
                        ),
                    ]))
                })
                .collect()
        }
        Tab::Payments => {
            let rows = app.visible_payments();
            page_slice(&rows, page, app.page_size)
                .iter()
                .map(|p| {
                    let status_color = match p.status.as_str() {
                        "paid" => palette.ok,
                        "overdue" => palette.error,
                        _ => palette.unread,
                    };
                    ListItem::new(Line::from(vec![
                        Span::styled(
                            p.tenant.clone(),
                            Style::default()
                                .fg(palette.text)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(
                            format!("  {}", p.property),
                            Style::default().fg(palette.dim),
                        ),
                        Span::styled(
                            format!("  {}", p.format_amount()),
                            Style::default().fg(palette.ok),
                        ),
                        Span::styled(format!("  {}", p.status), Style::default().fg(status_color)),
                        Span::styled(format!("  {}", p.method), Style::default().fg(palette.dim)),
                        Span::styled(
                            format!("  {}", format_date(p.date)),
                            Style::default().fg(palette.dim),
                        ),
                    ]))
                })
                .collect()
        }
        Tab::Notifications => {
            let rows = app.visible_notifications();
            page_slice(&rows, page, app.page_size)
                .iter()
                .map(|n| {
                    let marker = if n.read {
                        Span::styled("  ", Style::default())
                    } else {
                        Span::styled(
                            "● ",
                            Style::default()
                                .fg(palette.unread)
                                .add_modifier(Modifier::BOLD),
                        )
                    };
                    let title_style = if n.read {
                        Style::default().fg(palette.dim)
                    } else {
                        Style::default()
                            .fg(palette.text)
                            .add_modifier(Modifier::BOLD)
                    };
                    ListItem::new(Line::from(vec![
                        marker,
                        Span::styled(n.title.clone(), title_style),
                        Span::styled(format!("  {}", n.kind), Style::default().fg(palette.accent)),
                        Span::styled(
                            format!("  {}", n.message),
                            Style::default().fg(palette.dim),
                        ),
                        Span::styled(
                            format!("  {}", format_date(n.date)),
                            Style::default().fg(palette.dim),
                        ),
                    ]))
                })
                .collect()
        }
    };

    if items.is_empty() {
        let list = List::new(vec![ListItem::new("No records to display")])
            .block(Block::default().title(title).borders(Borders::ALL));
        Widget::render(list, area, buf);
        return;
    }

    let mut list_state = ListState::default();
    list_state.select(Some(app.tab_state().selected.min(items.len() - 1)));

    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .bg(palette.highlight_bg)
                .add_modifier(Modifier::BOLD),
        );

    StatefulWidget::render(list, area, buf, &mut list_state);
}
