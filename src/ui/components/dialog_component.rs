//! Modal dialog component.
//!
//! Shows one dialog at a time on top of the panes: the notification modal,
//! the keyboard shortcut help, or the in-memory log viewer. While a dialog is
//! visible it receives every key press.

use crate::theme::Palette;
use crate::ui::components::dialogs::{system_dialogs, ScrollState};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    scroll: ScrollState,
    logs: Vec<String>,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            scroll: ScrollState::new(),
            logs: Vec::new(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll.offset()
    }

    /// Snapshot of the log buffer shown by the logs dialog
    pub fn update_logs(&mut self, logs: Vec<String>) {
        self.logs = logs;
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.scroll.reset();
    }

    /// Scroll keys shared by every dialog. Returns false for other keys.
    fn handle_scroll_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll.up(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll.down(),
            KeyCode::PageUp => self.scroll.page_up(),
            KeyCode::PageDown => self.scroll.page_down(),
            KeyCode::Home => self.scroll.top(),
            KeyCode::End => self.scroll.bottom(),
            _ => return false,
        }
        true
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(dialog_type) = &self.dialog_type else {
            return Action::None;
        };

        // Quit always wins
        if key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
            return Action::Quit;
        }

        match dialog_type {
            DialogType::Notification(_) => {
                if self.handle_scroll_key(key) {
                    Action::None
                } else {
                    // Any other key dismisses the notification
                    Action::HideDialog
                }
            }
            DialogType::Help => match key.code {
                KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => Action::HideDialog,
                _ => {
                    self.handle_scroll_key(key);
                    Action::None
                }
            },
            DialogType::Logs => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => Action::HideDialog,
                KeyCode::Char('g') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::HideDialog,
                _ => {
                    self.handle_scroll_key(key);
                    Action::None
                }
            },
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.scroll.reset();
                if let DialogType::Notification(notification) = &dialog_type {
                    log::info!("Notification: {}", notification.body.replace('\n', " "));
                }
                self.dialog_type = Some(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, palette: &Palette) {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return;
        };

        match dialog_type {
            DialogType::Notification(notification) => {
                system_dialogs::render_notification_dialog(f, rect, &notification, &mut self.scroll, palette);
            }
            DialogType::Help => system_dialogs::render_help_dialog(f, rect, &mut self.scroll, palette),
            DialogType::Logs => system_dialogs::render_logs_dialog(f, rect, &self.logs, &mut self.scroll, palette),
        }
    }
}
