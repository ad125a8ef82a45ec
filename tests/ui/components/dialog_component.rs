use craftui::notification::Notification;
use craftui::ui::components::DialogComponent;
use craftui::ui::core::{Action, Component, DialogType};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn notification_dialog() -> DialogComponent {
    let mut dialog = DialogComponent::new();
    let action = dialog.update(Action::ShowDialog(DialogType::Notification(Notification::new("Saved"))));
    assert!(matches!(action, Action::None));
    dialog
}

#[test]
fn test_hidden_dialog_ignores_keys() {
    let mut dialog = DialogComponent::new();
    assert!(!dialog.is_visible());
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Esc)), Action::None));
}

#[test]
fn test_any_key_dismisses_notification() {
    let mut dialog = notification_dialog();
    assert!(dialog.is_visible());

    assert!(matches!(dialog.handle_key_events(key(KeyCode::Char('x'))), Action::HideDialog));
    dialog.update(Action::HideDialog);
    assert!(!dialog.is_visible());
}

#[test]
fn test_scroll_keys_keep_notification_open() {
    let mut dialog = notification_dialog();
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Down)), Action::None));
    assert_eq!(dialog.scroll_offset(), 1);
    assert!(dialog.is_visible());

    // Showing a new dialog resets the scroll position
    dialog.update(Action::ShowDialog(DialogType::Help));
    assert_eq!(dialog.scroll_offset(), 0);
}

#[test]
fn test_help_dialog_keys() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::Help));

    assert!(matches!(dialog.handle_key_events(key(KeyCode::Char('x'))), Action::None));
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Char('?'))), Action::HideDialog));
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Esc)), Action::HideDialog));
}

#[test]
fn test_logs_dialog_keys() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::Logs));
    dialog.update_logs(vec!["[12:00:00.000] hello".to_string()]);

    assert!(matches!(dialog.handle_key_events(key(KeyCode::Char('x'))), Action::None));
    let ctrl_g = KeyEvent::new(KeyCode::Char('g'), KeyModifiers::CONTROL);
    assert!(matches!(dialog.handle_key_events(ctrl_g), Action::HideDialog));
}

#[test]
fn test_quit_from_any_dialog() {
    let mut dialog = notification_dialog();
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(matches!(dialog.handle_key_events(ctrl_c), Action::Quit));
}

#[test]
fn test_unrelated_actions_pass_through() {
    let mut dialog = DialogComponent::new();
    assert!(matches!(dialog.update(Action::SubmitForm), Action::SubmitForm));
}
