use craftui::registration::{FormData, FormErrors, FormField, FormStatus};
use craftui::ui::components::{FormComponent, FormControl};
use craftui::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

#[test]
fn test_typing_emits_set_text() {
    let mut form = FormComponent::new();
    assert_eq!(form.selected(), FormControl::Field(FormField::Name));

    form.handle_key_events(key(KeyCode::Char('A')));
    match form.handle_key_events(key(KeyCode::Char('l'))) {
        Action::SetText { field, value } => {
            assert_eq!(field, FormField::Name);
            assert_eq!(value, "Al");
        }
        other => panic!("unexpected action {:?}", other),
    }

    match form.handle_key_events(key(KeyCode::Backspace)) {
        Action::SetText { value, .. } => assert_eq!(value, "A"),
        other => panic!("unexpected action {:?}", other),
    }

    // Cursor movement does not change the value
    assert!(matches!(form.handle_key_events(key(KeyCode::Left)), Action::None));
}

#[test]
fn test_shifted_characters_are_typed() {
    let mut form = FormComponent::new();
    let shifted = KeyEvent::new(KeyCode::Char('@'), KeyModifiers::SHIFT);
    assert!(matches!(form.handle_key_events(shifted), Action::SetText { .. }));
}

#[test]
fn test_control_shortcuts() {
    let mut form = FormComponent::new();
    assert!(matches!(form.handle_key_events(ctrl('s')), Action::SubmitForm));
    assert!(matches!(form.handle_key_events(ctrl('l')), Action::ClearForm));
    // Left for the global handler
    assert!(matches!(form.handle_key_events(ctrl('t')), Action::None));
    assert!(matches!(form.handle_key_events(key(KeyCode::Tab)), Action::None));
}

#[test]
fn test_control_navigation_wraps() {
    let mut form = FormComponent::new();
    form.handle_key_events(key(KeyCode::Up));
    assert_eq!(form.selected(), FormControl::Clear);

    form.handle_key_events(key(KeyCode::Down));
    assert_eq!(form.selected(), FormControl::Field(FormField::Name));
}

#[test]
fn test_checkbox_toggles_from_current_value() {
    let mut form = FormComponent::new();
    form.select(FormControl::Field(FormField::Terms));

    match form.handle_key_events(key(KeyCode::Char(' '))) {
        Action::SetFlag { field, value } => {
            assert_eq!(field, FormField::Terms);
            assert!(value);
        }
        other => panic!("unexpected action {:?}", other),
    }

    let data = FormData {
        terms: true,
        ..FormData::new()
    };
    form.update_data(&data, &FormErrors::new(), FormStatus::of(&data), false);
    assert!(matches!(
        form.handle_key_events(key(KeyCode::Enter)),
        Action::SetFlag { value: false, .. }
    ));
}

#[test]
fn test_buttons() {
    let mut form = FormComponent::new();
    form.select(FormControl::Register);
    assert!(matches!(form.handle_key_events(key(KeyCode::Enter)), Action::SubmitForm));

    form.select(FormControl::Clear);
    assert!(matches!(form.handle_key_events(key(KeyCode::Char(' '))), Action::ClearForm));
}

#[test]
fn test_busy_form_ignores_typing() {
    let mut form = FormComponent::new();
    let data = FormData::new();
    form.update_data(&data, &FormErrors::new(), FormStatus::of(&data), true);

    assert!(matches!(form.handle_key_events(key(KeyCode::Char('x'))), Action::None));
    assert!(matches!(form.handle_key_events(key(KeyCode::Backspace)), Action::None));

    let first = form.spinner();
    form.tick();
    assert_ne!(form.spinner(), first);
}

#[test]
fn test_focus_tracking() {
    let mut form = FormComponent::new();
    assert!(form.is_focused());
    form.on_blur();
    assert!(!form.is_focused());
    form.on_focus();
    assert!(form.is_focused());
}
