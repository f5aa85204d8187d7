//! UI components module.
//!
//! Contains ratatui widgets for displaying the application interface. Every
//! render function takes the resolved color palette as a parameter; no
//! widget reads theme state from anywhere else.

pub mod filters;
pub mod pagination;
pub mod table;
pub mod tabs;

pub use filters::render_filters;
pub use pagination::render_pagination;
pub use table::render_table;
pub use tabs::render_tabs;

use crate::config::Theme;
use ratatui::style::Color;

/// Concrete colors for one theme.
///
/// Resolved once from the configured `Theme` and threaded down into the
/// render functions.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Primary text
    pub text: Color,
    /// De-emphasized text
    pub dim: Color,
    /// Accents (labels, active tab)
    pub accent: Color,
    /// Selection background
    pub highlight_bg: Color,
    /// Unread markers and badges
    pub unread: Color,
    /// Positive states (paid, bookmarked)
    pub ok: Color,
    /// Errors and overdue states
    pub error: Color,
}

impl Palette {
    /// Resolve the palette for a theme.
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                text: Color::White,
                dim: Color::DarkGray,
                accent: Color::Cyan,
                highlight_bg: Color::Blue,
                unread: Color::Yellow,
                ok: Color::Green,
                error: Color::Red,
            },
            Theme::Light => Self {
                text: Color::Black,
                dim: Color::Gray,
                accent: Color::Blue,
                highlight_bg: Color::LightBlue,
                unread: Color::Magenta,
                ok: Color::Green,
                error: Color::Red,
            },
        }
    }
}
