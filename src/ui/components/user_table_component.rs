use crate::constants::{TABLE_HINT, TABLE_TITLE};
use crate::table::{SortField, SortState, UserRow};
use crate::theme::Palette;
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Row, Table, TableState},
    Frame,
};

/// Sortable user table with a row cursor for edit and delete
pub struct UserTableComponent {
    rows: Vec<UserRow>,
    sort: SortState,
    selected_index: usize,
    table_state: TableState,
    focused: bool,
}

impl Default for UserTableComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl UserTableComponent {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            sort: SortState::default(),
            selected_index: 0,
            table_state: TableState::default(),
            focused: false,
        }
    }

    /// Replace the displayed rows, keeping the cursor on the same user when
    /// it is still present.
    pub fn update_data(&mut self, rows: Vec<UserRow>, sort: SortState) {
        let selected_id = self.selected_row().map(|row| row.id);
        self.rows = rows;
        self.sort = sort;

        if let Some(index) = selected_id.and_then(|id| self.rows.iter().position(|row| row.id == id)) {
            self.selected_index = index;
        }
        self.update_table_state();
    }

    pub fn rows(&self) -> &[UserRow] {
        &self.rows
    }

    pub fn selected_row(&self) -> Option<&UserRow> {
        self.rows.get(self.selected_index)
    }

    pub fn select_next(&mut self) {
        if !self.rows.is_empty() {
            self.selected_index = (self.selected_index + 1).min(self.rows.len() - 1);
            self.update_table_state();
        }
    }

    pub fn select_previous(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
        self.update_table_state();
    }

    fn update_table_state(&mut self) {
        if self.rows.is_empty() {
            self.selected_index = 0;
            self.table_state.select(None);
        } else {
            if self.selected_index >= self.rows.len() {
                self.selected_index = self.rows.len() - 1;
            }
            self.table_state.select(Some(self.selected_index));
        }
    }

    fn header_cell(&self, key: usize, field: SortField, palette: &Palette) -> Cell<'static> {
        let mut text = format!("{} [{}]", field.label(), key);
        if let Some(arrow) = self.sort.indicator(field) {
            text.push(' ');
            text.push_str(arrow);
        }
        let style = if self.sort.field == Some(field) {
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD)
        };
        Cell::from(text).style(style)
    }

    fn status_style(status: &str, palette: &Palette) -> Style {
        match status {
            "Active" => Style::default().fg(palette.success),
            "Inactive" => Style::default().fg(palette.danger),
            _ => Style::default().fg(palette.warning),
        }
    }
}

impl Component for UserTableComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                Action::None
            }
            KeyCode::Home => {
                self.selected_index = 0;
                self.update_table_state();
                Action::None
            }
            KeyCode::End => {
                self.selected_index = self.rows.len().saturating_sub(1);
                self.update_table_state();
                Action::None
            }
            KeyCode::Char(c @ '1'..='5') => SortField::from_digit(c).map_or(Action::None, Action::SortBy),
            KeyCode::Char('e') => self.selected_row().map_or(Action::None, |row| Action::EditRow(row.id)),
            KeyCode::Char('d') | KeyCode::Delete => {
                self.selected_row().map_or(Action::None, |row| Action::DeleteRow(row.id))
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, palette: &Palette) {
        let border_color = if self.focused { palette.focus } else { palette.border };
        let title = Line::from(vec![
            Span::styled(
                format!(" {} ", TABLE_TITLE),
                Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("Total Users: {} ", self.rows.len()),
                Style::default().fg(palette.muted),
            ),
        ]);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .title_bottom(Line::from(Span::styled(
                format!(" {} ", TABLE_HINT),
                Style::default().fg(palette.muted),
            )))
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(palette.surface));

        let header = Row::new(
            SortField::ALL
                .iter()
                .enumerate()
                .map(|(i, field)| self.header_cell(i + 1, *field, palette)),
        )
        .height(1);

        let rows: Vec<Row> = self
            .rows
            .iter()
            .map(|user| {
                Row::new(vec![
                    Cell::from(user.cell(SortField::Id)).style(Style::default().fg(palette.muted)),
                    Cell::from(user.name.clone()).style(Style::default().fg(palette.text)),
                    Cell::from(user.email.clone()).style(Style::default().fg(palette.text)),
                    Cell::from(user.role.clone()).style(Style::default().fg(palette.accent)),
                    Cell::from(user.status.clone()).style(Self::status_style(&user.status, palette)),
                ])
            })
            .collect();

        let widths = [
            Constraint::Length(16),
            Constraint::Percentage(22),
            Constraint::Percentage(32),
            Constraint::Length(12),
            Constraint::Length(14),
        ];

        let highlight = if self.focused {
            Style::default().bg(palette.selection).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(highlight)
            .highlight_symbol(if self.focused { "▶ " } else { "  " });

        f.render_stateful_widget(table, rect, &mut self.table_state);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
