//! rent-tui - Terminal dashboard for a property-management portal.
//!
//! Main entry point and event loop for the application.

mod app;
mod bookmarks;
mod config;
mod portal;
mod ui;
mod view;

use app::{App, Tab, UiMode};
use bookmarks::Bookmarks;
use config::Config;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use portal::PortalClient;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use ui::Palette;

/// Main application entry point.
///
/// # Details
/// Loads configuration once, checks the sign-in state, fetches the record
/// collections, and runs the event loop. All settings are threaded down
/// from the `Config` loaded here.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = Config::load(None)?;

    let client = PortalClient::new(&config)?;
    if !client.is_authenticated() {
        eprintln!("Error: sign-in required.");
        eprintln!(
            "Please add your portal API token to: {}",
            Config::default_config_path()?.display()
        );
        return Err(anyhow::anyhow!("API token not configured"));
    }

    // Load bookmarks (corrupt files load as empty, never abort startup)
    let bookmarks_path = config.bookmarks_file_path()?;
    let bookmarks = Bookmarks::load(&bookmarks_path)?;

    let mut app = App::new(bookmarks, config.page_size);
    app.set_status("Loading portal data...".to_string());
    load_all(&mut app, &client).await;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run event loop
    let result = run_app(&mut terminal, &mut app, &client, &mut config).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

/// Fetch every collection from the portal.
///
/// # Details
/// A failure surfaces as an inline status message with a retry hint; the
/// app never retries on its own.
async fn load_all(app: &mut App, client: &PortalClient) {
    let fetched = tokio::try_join!(
        client.fetch_properties(),
        client.fetch_rentals(),
        client.fetch_notices(),
        client.fetch_payments(),
        client.fetch_notifications(),
    );
    match fetched {
        Ok((properties, rentals, notices, payments, notifications)) => {
            let total = properties.len()
                + rentals.len()
                + notices.len()
                + payments.len()
                + notifications.len();
            app.properties = properties;
            app.rentals = rentals;
            app.notices = notices;
            app.payments = payments;
            app.notifications = notifications;
            app.clamp_all_views();
            app.load_error = false;
            app.set_status(format!("Loaded {} records", total));
        }
        Err(e) => {
            app.load_error = true;
            app.set_status(format!("Error loading data: {} (press 'r' to retry)", e));
        }
    }
}

/// Render the complete UI.
///
/// # Returns
/// * `Rect` - The table area, kept for mouse hit testing
fn render_ui(f: &mut ratatui::Frame, app: &App, palette: &Palette) -> ratatui::layout::Rect {
    let chunks = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Vertical)
        .constraints([
            ratatui::layout::Constraint::Length(3), // Tabs
            ratatui::layout::Constraint::Length(ui::filters::filters_height(app)),
            ratatui::layout::Constraint::Min(0),    // Record table
            ratatui::layout::Constraint::Length(3), // Pagination footer
            ratatui::layout::Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    ui::render_tabs(app, palette, chunks[0], f.buffer_mut());
    ui::render_filters(app, palette, chunks[1], f.buffer_mut());
    ui::render_table(app, palette, chunks[2], f.buffer_mut());
    ui::render_pagination(app, palette, chunks[3], f.buffer_mut());

    let status_text = app.status_message.as_deref().unwrap_or(
        "q quit | Tab/1-5 tabs | j/k select | h/l page | g go to page | f filter | s sort | b bookmark | Enter mark read",
    );
    let status_style = if app.load_error {
        ratatui::style::Style::default().fg(palette.error)
    } else {
        ratatui::style::Style::default()
    };
    let status = ratatui::widgets::Paragraph::new(ratatui::text::Line::from(status_text))
        .style(status_style);
    f.render_widget(status, chunks[4]);

    chunks[2]
}

/// Main event loop.
///
/// # Details
/// Handles keyboard and mouse events, updates state, and renders the UI.
/// All work is synchronous per event except the user-initiated refetch.
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    client: &PortalClient,
    config: &mut Config,
) -> anyhow::Result<()> {
    let mut palette = Palette::for_theme(config.theme);
    let mut table_area = ratatui::layout::Rect::default();

    loop {
        terminal.draw(|f| {
            table_area = render_ui(f, app, &palette);
        })?;

        // Non-blocking polling keeps the UI responsive between events
        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match app.mode {
                    UiMode::List => match key.code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => break,
                        KeyCode::Char('c')
                            if key.modifiers.contains(event::KeyModifiers::CONTROL) =>
                        {
                            break;
                        }
                        KeyCode::Tab => app.next_tab(),
                        KeyCode::Char(c @ '1'..='5') => {
                            app.switch_tab(Tab::ALL[c as usize - '1' as usize]);
                        }
                        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
                        KeyCode::Down | KeyCode::Char('j') => app.move_down(),
                        KeyCode::Left | KeyCode::Char('h') => app.prev_page(),
                        KeyCode::Right | KeyCode::Char('l') => app.next_page(),
                        KeyCode::Char('g') => app.begin_page_jump(),
                        KeyCode::Char('f') => app.open_filter_menu(),
                        KeyCode::Char('s') => app.cycle_sort(),
                        KeyCode::Char('b') => {
                            if let Some((id, added)) = app.toggle_selected_bookmark() {
                                save_bookmarks(app, config);
                                app.set_status(if added {
                                    format!("Bookmarked listing {}", id)
                                } else {
                                    format!("Removed bookmark for listing {}", id)
                                });
                            }
                        }
                        KeyCode::Char('B') => app.toggle_bookmarked_only(),
                        KeyCode::Char('x') => {
                            app.delete_selected();
                        }
                        KeyCode::Enter => {
                            if app.active_tab() == Tab::Notifications {
                                app.mark_selected_read();
                            }
                        }
                        KeyCode::Char('r') => {
                            app.set_status("Reloading portal data...".to_string());
                            load_all(app, client).await;
                        }
                        KeyCode::Char('t') => {
                            config.theme = config.theme.toggled();
                            palette = Palette::for_theme(config.theme);
                            match config.save(None) {
                                Ok(()) => app.set_status(format!("Theme: {}", config.theme.name())),
                                Err(e) => app.set_status(format!("Failed to save theme: {}", e)),
                            }
                        }
                        _ => {}
                    },
                    UiMode::FilterMenu => match key.code {
                        KeyCode::Up | KeyCode::Char('k') => app.menu_up(),
                        KeyCode::Down | KeyCode::Char('j') => app.menu_down(),
                        KeyCode::Enter => app.apply_menu_selection(),
                        // Any other key closes the menu, like a click
                        // outside a dropdown
                        _ => app.dismiss_filter_menu(),
                    },
                    UiMode::PageJump => match key.code {
                        KeyCode::Enter => app.commit_page_jump(),
                        KeyCode::Esc => app.cancel_page_jump(),
                        KeyCode::Backspace => app.pop_page_input(),
                        KeyCode::Char(c) => app.push_page_input(c),
                        _ => {}
                    },
                }
            }
            Event::Mouse(mouse) => handle_mouse_event(mouse, app, table_area),
            _ => {}
        }
    }

    Ok(())
}

/// Persist the bookmark list, reporting failures on the status line.
fn save_bookmarks(app: &mut App, config: &Config) {
    let result = config
        .bookmarks_file_path()
        .and_then(|path| app.bookmarks.save(&path));
    if let Err(e) = result {
        app.set_status(format!("Failed to save bookmarks: {}", e));
    }
}

/// Handle mouse events (scroll and click).
///
/// # Details
/// Scroll moves the selection; a left click inside the table selects the
/// clicked row. Rows are one line tall and start below the top border.
fn handle_mouse_event(mouse: MouseEvent, app: &mut App, table_area: ratatui::layout::Rect) {
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            if app.mode == UiMode::List {
                app.move_up();
            }
        }
        MouseEventKind::ScrollDown => {
            if app.mode == UiMode::List {
                app.move_down();
            }
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if app.mode == UiMode::List
                && mouse.column >= table_area.x
                && mouse.column < table_area.x + table_area.width
                && mouse.row > table_area.y // Skip top border
                && mouse.row < table_area.y + table_area.height
            {
                let row_index = (mouse.row - table_area.y - 1) as usize;
                if row_index < app.page_len() {
                    app.select_row(row_index);
                }
            }
        }
        _ => {}
    }
}
