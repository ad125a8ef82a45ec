use craftui::table::{seed_rows, SortField, SortState};
use craftui::ui::components::UserTableComponent;
use craftui::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn loaded_table() -> UserTableComponent {
    let mut table = UserTableComponent::new();
    table.update_data(seed_rows(), SortState::default());
    table
}

#[test]
fn test_cursor_movement() {
    let mut table = loaded_table();
    assert_eq!(table.selected_row().map(|row| row.id), Some(1));

    table.handle_key_events(key(KeyCode::Char('j')));
    table.handle_key_events(key(KeyCode::Down));
    assert_eq!(table.selected_row().map(|row| row.id), Some(3));

    table.handle_key_events(key(KeyCode::End));
    table.handle_key_events(key(KeyCode::Down));
    assert_eq!(table.selected_row().map(|row| row.id), Some(4));

    table.handle_key_events(key(KeyCode::Home));
    table.handle_key_events(key(KeyCode::Up));
    assert_eq!(table.selected_row().map(|row| row.id), Some(1));
}

#[test]
fn test_row_actions_target_selected_user() {
    let mut table = loaded_table();
    table.select_next();

    assert!(matches!(table.handle_key_events(key(KeyCode::Char('e'))), Action::EditRow(2)));
    assert!(matches!(table.handle_key_events(key(KeyCode::Char('d'))), Action::DeleteRow(2)));
    assert!(matches!(table.handle_key_events(key(KeyCode::Delete)), Action::DeleteRow(2)));
}

#[test]
fn test_digit_keys_sort() {
    let mut table = loaded_table();
    assert!(matches!(
        table.handle_key_events(key(KeyCode::Char('2'))),
        Action::SortBy(SortField::Name)
    ));
    assert!(matches!(table.handle_key_events(key(KeyCode::Char('9'))), Action::None));
}

#[test]
fn test_cursor_follows_user_after_resort() {
    let mut table = loaded_table();
    table.select_next();
    assert_eq!(table.selected_row().map(|row| row.name.as_str()), Some("Jane Smith"));

    let mut rows = seed_rows();
    rows.reverse();
    table.update_data(rows, SortState::default());
    assert_eq!(table.selected_row().map(|row| row.name.as_str()), Some("Jane Smith"));
}

#[test]
fn test_cursor_clamped_when_rows_disappear() {
    let mut table = loaded_table();
    table.handle_key_events(key(KeyCode::End));

    let rows: Vec<_> = seed_rows().into_iter().filter(|row| row.id != 4).collect();
    table.update_data(rows, SortState::default());
    assert_eq!(table.selected_row().map(|row| row.id), Some(3));

    table.update_data(Vec::new(), SortState::default());
    assert!(table.selected_row().is_none());
    assert!(matches!(table.handle_key_events(key(KeyCode::Char('d'))), Action::None));
}
