use crate::constants::BUTTONS_TITLE;
use crate::theme::Palette;
use crate::ui::components::button::{button_span, ShowcaseButton, SHOWCASE_BUTTONS};
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

/// Showcase of the button variants, sizes and states
pub struct ButtonGalleryComponent {
    selected_index: usize,
    focused: bool,
}

impl Default for ButtonGalleryComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl ButtonGalleryComponent {
    pub fn new() -> Self {
        Self {
            selected_index: 0,
            focused: false,
        }
    }

    pub fn selected(&self) -> ShowcaseButton {
        SHOWCASE_BUTTONS[self.selected_index]
    }

    pub fn select_next(&mut self) {
        self.selected_index = (self.selected_index + 1) % SHOWCASE_BUTTONS.len();
    }

    pub fn select_previous(&mut self) {
        self.selected_index = (self.selected_index + SHOWCASE_BUTTONS.len() - 1) % SHOWCASE_BUTTONS.len();
    }

    fn line_for(&self, range: std::ops::Range<usize>, palette: &Palette) -> Line<'static> {
        let mut spans = Vec::new();
        for index in range {
            let button = SHOWCASE_BUTTONS[index];
            if !spans.is_empty() {
                spans.push(Span::raw(" "));
            }
            spans.push(button_span(
                button.label,
                button.variant,
                button.size,
                button.disabled,
                self.focused && index == self.selected_index,
                palette,
            ));
        }
        Line::from(spans)
    }
}

impl Component for ButtonGalleryComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Right | KeyCode::Char('l') => {
                self.select_next();
                Action::None
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.select_previous();
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let button = self.selected();
                if button.disabled {
                    log::info!("Button gallery: '{}' is disabled", button.label);
                    Action::None
                } else {
                    Action::PressButton(button)
                }
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, palette: &Palette) {
        let border_color = if self.focused { palette.focus } else { palette.border };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} ", BUTTONS_TITLE))
            .title_style(Style::default().fg(palette.text).add_modifier(Modifier::BOLD))
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(palette.surface));

        // Variants, then sizes, then states
        let lines = vec![
            self.line_for(0..4, palette),
            Line::default(),
            self.line_for(4..7, palette),
            Line::default(),
            self.line_for(7..SHOWCASE_BUTTONS.len(), palette),
        ];

        f.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: false }), rect);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
