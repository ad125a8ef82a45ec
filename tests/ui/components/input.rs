use craftui::ui::components::input::TextInput;

#[test]
fn test_insert_and_move() {
    let mut input = TextInput::new();
    for c in "helo".chars() {
        input.insert(c);
    }
    assert_eq!(input.cursor(), 4);

    input.move_left();
    input.insert('l');
    assert_eq!(input.value(), "hello");
    assert_eq!(input.cursor(), 4);

    input.move_home();
    assert_eq!(input.cursor(), 0);
    input.move_left();
    assert_eq!(input.cursor(), 0);

    input.move_end();
    input.move_right();
    assert_eq!(input.cursor(), 5);
}

#[test]
fn test_backspace_and_delete() {
    let mut input = TextInput::new();
    input.set_value("abc");
    input.move_end();

    assert!(input.backspace());
    assert_eq!(input.value(), "ab");

    input.move_home();
    assert!(!input.backspace());
    assert!(input.delete());
    assert_eq!(input.value(), "b");

    input.move_end();
    assert!(!input.delete());
}

#[test]
fn test_multibyte_characters() {
    let mut input = TextInput::new();
    input.insert('é');
    input.insert('ß');
    input.move_left();

    let (before, under, after) = input.split_at_cursor();
    assert_eq!(before, "é");
    assert_eq!(under, Some('ß'));
    assert_eq!(after, "");

    assert!(input.backspace());
    assert_eq!(input.value(), "ß");
}

#[test]
fn test_set_value_clamps_cursor() {
    let mut input = TextInput::new();
    input.set_value("long value");
    input.move_end();

    input.set_value("ab");
    assert_eq!(input.cursor(), 2);

    input.clear();
    assert_eq!(input.value(), "");
    assert_eq!(input.cursor(), 0);
}
