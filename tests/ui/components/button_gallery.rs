use craftui::ui::components::button::SHOWCASE_BUTTONS;
use craftui::ui::components::ButtonGalleryComponent;
use craftui::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn select(gallery: &mut ButtonGalleryComponent, label: &str) {
    for _ in 0..SHOWCASE_BUTTONS.len() {
        if gallery.selected().label == label {
            return;
        }
        gallery.select_next();
    }
    panic!("no button labelled {}", label);
}

#[test]
fn test_navigation_wraps() {
    let mut gallery = ButtonGalleryComponent::new();
    assert_eq!(gallery.selected().label, "Primary");

    gallery.handle_key_events(key(KeyCode::Left));
    assert_eq!(gallery.selected().label, "Open Modal");

    gallery.handle_key_events(key(KeyCode::Char('l')));
    assert_eq!(gallery.selected().label, "Primary");
}

#[test]
fn test_pressing_an_enabled_button() {
    let mut gallery = ButtonGalleryComponent::new();
    match gallery.handle_key_events(key(KeyCode::Enter)) {
        Action::PressButton(button) => {
            assert_eq!(button.label, "Primary");
            assert!(!button.opens_modal);
        }
        other => panic!("unexpected action {:?}", other),
    }
}

#[test]
fn test_disabled_button_does_nothing() {
    let mut gallery = ButtonGalleryComponent::new();
    select(&mut gallery, "Disabled");
    assert!(matches!(gallery.handle_key_events(key(KeyCode::Char(' '))), Action::None));
}

#[test]
fn test_modal_button() {
    let mut gallery = ButtonGalleryComponent::new();
    select(&mut gallery, "Open Modal");
    match gallery.handle_key_events(key(KeyCode::Enter)) {
        Action::PressButton(button) => assert!(button.opens_modal),
        other => panic!("unexpected action {:?}", other),
    }
}
