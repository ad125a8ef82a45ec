//! Registration form pane.
//!
//! The component keeps its own cursor and focus state; the field values and
//! errors are owned by the workflow and pushed in through
//! [`FormComponent::update_data`] after every action.

use crate::constants::{BUTTON_CLEAR, BUTTON_REGISTER, BUTTON_REGISTERING, FORM_TITLE, PROCESSING_LABEL, SPINNER_FRAMES};
use crate::registration::{FormData, FormErrors, FormField, FormStatus};
use crate::theme::Palette;
use crate::ui::components::button::{button_span, ButtonSize, ButtonVariant};
use crate::ui::components::input::TextInput;
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Focusable controls of the form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormControl {
    Field(FormField),
    Register,
    Clear,
}

impl FormControl {
    pub const ALL: [FormControl; 7] = [
        FormControl::Field(FormField::Name),
        FormControl::Field(FormField::Email),
        FormControl::Field(FormField::Phone),
        FormControl::Field(FormField::Newsletter),
        FormControl::Field(FormField::Terms),
        FormControl::Register,
        FormControl::Clear,
    ];

    fn index(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

pub struct FormComponent {
    name: TextInput,
    email: TextInput,
    phone: TextInput,
    form: FormData,
    errors: FormErrors,
    status: FormStatus,
    busy: bool,
    selected: FormControl,
    focused: bool,
    spinner_frame: usize,
}

impl Default for FormComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl FormComponent {
    pub fn new() -> Self {
        let form = FormData::new();
        Self {
            name: TextInput::new(),
            email: TextInput::new(),
            phone: TextInput::new(),
            status: FormStatus::of(&form),
            form,
            errors: FormErrors::new(),
            busy: false,
            selected: FormControl::ALL[0],
            focused: true,
            spinner_frame: 0,
        }
    }

    pub fn update_data(&mut self, form: &FormData, errors: &FormErrors, status: FormStatus, busy: bool) {
        self.name.set_value(&form.name);
        self.email.set_value(&form.email);
        self.phone.set_value(&form.phone);
        self.form = form.clone();
        self.errors = errors.clone();
        self.status = status;
        if !busy {
            self.spinner_frame = 0;
        }
        self.busy = busy;
    }

    pub fn selected(&self) -> FormControl {
        self.selected
    }

    pub fn select(&mut self, control: FormControl) {
        self.selected = control;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Advance the busy spinner
    pub fn tick(&mut self) {
        if self.busy {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        }
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }

    fn input_mut(&mut self, field: FormField) -> Option<&mut TextInput> {
        match field {
            FormField::Name => Some(&mut self.name),
            FormField::Email => Some(&mut self.email),
            FormField::Phone => Some(&mut self.phone),
            FormField::Newsletter | FormField::Terms => None,
        }
    }

    fn input(&self, field: FormField) -> Option<&TextInput> {
        match field {
            FormField::Name => Some(&self.name),
            FormField::Email => Some(&self.email),
            FormField::Phone => Some(&self.phone),
            FormField::Newsletter | FormField::Terms => None,
        }
    }

    fn handle_text_key(&mut self, field: FormField, key: KeyEvent) -> Action {
        let busy = self.busy;
        let Some(input) = self.input_mut(field) else {
            return Action::None;
        };

        let edited = match key.code {
            KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
                if busy {
                    return Action::None;
                }
                input.insert(c);
                true
            }
            KeyCode::Backspace => !busy && input.backspace(),
            KeyCode::Delete => !busy && input.delete(),
            KeyCode::Left => {
                input.move_left();
                false
            }
            KeyCode::Right => {
                input.move_right();
                false
            }
            KeyCode::Home => {
                input.move_home();
                false
            }
            KeyCode::End => {
                input.move_end();
                false
            }
            KeyCode::Enter => return Action::SubmitForm,
            _ => return Action::None,
        };

        if edited {
            Action::SetText {
                field,
                value: input.value().to_string(),
            }
        } else {
            Action::None
        }
    }

    fn text_field_lines(&self, field: FormField, palette: &Palette) -> Vec<Line<'static>> {
        let selected = self.focused && self.selected == FormControl::Field(field);
        let label_style = if selected {
            Style::default().fg(palette.focus).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text)
        };
        let mut label = vec![Span::styled(field.label().to_string(), label_style)];
        if field.is_required() {
            label.push(Span::styled(" *", Style::default().fg(palette.danger)));
        }

        let border_color = if self.errors.contains(field) {
            palette.danger
        } else if selected {
            palette.focus
        } else {
            palette.border
        };
        let mut value = vec![Span::styled("▏", Style::default().fg(border_color))];
        if let Some(input) = self.input(field) {
            if input.value().is_empty() && !selected {
                value.push(Span::styled(
                    field.placeholder().to_string(),
                    Style::default().fg(palette.muted),
                ));
            } else if selected {
                let (before, under, after) = input.split_at_cursor();
                value.push(Span::styled(before.to_string(), Style::default().fg(palette.text)));
                value.push(Span::styled(
                    under.map_or_else(|| " ".to_string(), |c| c.to_string()),
                    Style::default().fg(palette.background).bg(palette.focus),
                ));
                value.push(Span::styled(after.to_string(), Style::default().fg(palette.text)));
            } else {
                value.push(Span::styled(input.value().to_string(), Style::default().fg(palette.text)));
            }
        }

        let mut lines = vec![Line::from(label), Line::from(value)];
        lines.push(self.error_line(field, palette));
        lines
    }

    fn checkbox_lines(&self, field: FormField, palette: &Palette) -> Vec<Line<'static>> {
        let selected = self.focused && self.selected == FormControl::Field(field);
        let checked = self.form.flag(field).unwrap_or(false);
        let mark = if checked { "[x]" } else { "[ ]" };
        let mark_color = if checked { palette.success } else { palette.border };
        let label_style = if selected {
            Style::default().fg(palette.focus).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text)
        };

        let mut spans = vec![
            Span::styled(mark, Style::default().fg(mark_color)),
            Span::raw(" "),
            Span::styled(field.label().to_string(), label_style),
        ];
        if field.is_required() {
            spans.push(Span::styled(" *", Style::default().fg(palette.danger)));
        }

        vec![
            Line::from(spans),
            Line::from(Span::styled(
                format!("    {}", field.placeholder()),
                Style::default().fg(palette.muted),
            )),
            self.error_line(field, palette),
        ]
    }

    fn error_line(&self, field: FormField, palette: &Palette) -> Line<'static> {
        match self.errors.get(field) {
            Some(message) => Line::from(Span::styled(message.to_string(), Style::default().fg(palette.danger))),
            None => Line::default(),
        }
    }

    fn button_line(&self, palette: &Palette) -> Line<'static> {
        let register_label = if self.busy { BUTTON_REGISTERING } else { BUTTON_REGISTER };
        let mut spans = vec![
            button_span(
                register_label,
                ButtonVariant::Primary,
                ButtonSize::Medium,
                self.busy,
                self.focused && self.selected == FormControl::Register,
                palette,
            ),
            Span::raw("  "),
            button_span(
                BUTTON_CLEAR,
                ButtonVariant::Secondary,
                ButtonSize::Medium,
                self.busy,
                self.focused && self.selected == FormControl::Clear,
                palette,
            ),
        ];
        if self.busy {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                format!("{} {}", self.spinner(), PROCESSING_LABEL),
                Style::default().fg(palette.warning),
            ));
        }
        Line::from(spans)
    }

    fn status_lines(&self, palette: &Palette) -> Vec<Line<'static>> {
        let indicator = |ok: bool, label: &str| {
            let (mark, color) = if ok { ("✓", palette.success) } else { ("○", palette.muted) };
            Line::from(vec![
                Span::styled(format!("{} ", mark), Style::default().fg(color)),
                Span::styled(label.to_string(), Style::default().fg(palette.text)),
            ])
        };

        vec![
            indicator(self.status.name_present, "Name provided"),
            indicator(self.status.email_valid, "Valid email"),
            indicator(self.status.terms_accepted, "Terms accepted"),
            indicator(self.status.ready, "Ready to submit"),
        ]
    }
}

impl Component for FormComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('s') => Action::SubmitForm,
                KeyCode::Char('l') => Action::ClearForm,
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Up => {
                self.selected = self.selected.previous();
                return Action::None;
            }
            KeyCode::Down => {
                self.selected = self.selected.next();
                return Action::None;
            }
            _ => {}
        }

        match self.selected {
            FormControl::Field(field) if field.is_text() => self.handle_text_key(field, key),
            FormControl::Field(field) => match key.code {
                KeyCode::Char(' ') | KeyCode::Enter => Action::SetFlag {
                    field,
                    value: !self.form.flag(field).unwrap_or(false),
                },
                _ => Action::None,
            },
            FormControl::Register => match key.code {
                KeyCode::Char(' ') | KeyCode::Enter => Action::SubmitForm,
                _ => Action::None,
            },
            FormControl::Clear => match key.code {
                KeyCode::Char(' ') | KeyCode::Enter => Action::ClearForm,
                _ => Action::None,
            },
        }
    }

    fn update(&mut self, action: Action) -> Action {
        if let Action::ClearForm = action {
            if !self.busy {
                self.name.clear();
                self.email.clear();
                self.phone.clear();
            }
        }
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, palette: &Palette) {
        let border_color = if self.focused { palette.focus } else { palette.border };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} ", FORM_TITLE))
            .title_style(Style::default().fg(palette.text).add_modifier(Modifier::BOLD))
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(palette.surface));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(6)])
            .split(inner);

        let mut lines = Vec::new();
        for field in FormField::ALL {
            if field.is_text() {
                lines.extend(self.text_field_lines(field, palette));
            } else {
                lines.extend(self.checkbox_lines(field, palette));
            }
        }
        lines.push(self.button_line(palette));
        f.render_widget(Paragraph::new(lines), chunks[0]);

        let status_block = Block::default()
            .borders(Borders::TOP)
            .title(" Form Status ")
            .title_style(Style::default().fg(palette.muted))
            .border_style(Style::default().fg(palette.border));
        f.render_widget(Paragraph::new(self.status_lines(palette)).block(status_block), chunks[1]);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
