//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the button gallery pane, borders included
pub const BUTTONS_HEIGHT: u16 = 7;

/// Screen regions, one per pane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub navbar: Rect,
    pub form: Rect,
    pub buttons: Rect,
    pub table: Rect,
    pub history: Rect,
    pub footer: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen: navbar on top, footer at the bottom, the form on the
    /// left and buttons, table and history stacked on the right.
    ///
    /// `history_height` is zero while there is no history to show.
    #[must_use]
    pub fn screen(area: Rect, history_height: u16) -> ScreenAreas {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(rows[1]);

        // History never takes the table below its minimum
        let right = columns[1];
        let history_height = history_height.min(right.height.saturating_sub(BUTTONS_HEIGHT + 8));

        let stacked = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(BUTTONS_HEIGHT),
                Constraint::Min(8),
                Constraint::Length(history_height),
            ])
            .split(right);

        ScreenAreas {
            navbar: rows[0],
            form: columns[0],
            buttons: stacked[0],
            table: stacked[1],
            history: stacked[2],
            footer: rows[2],
        }
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height_lines),
                Constraint::Min(0),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}
