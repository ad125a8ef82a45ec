use craftui::ui::components::dialogs::ScrollState;

#[test]
fn test_scroll_moves_and_saturates() {
    let mut scroll = ScrollState::new();
    scroll.up();
    assert_eq!(scroll.offset(), 0);

    scroll.down();
    scroll.down();
    assert_eq!(scroll.offset(), 2);

    scroll.page_down();
    assert_eq!(scroll.offset(), 12);

    scroll.page_up();
    scroll.page_up();
    assert_eq!(scroll.offset(), 0);
}

#[test]
fn test_clamp_to_content() {
    let mut scroll = ScrollState::new();
    scroll.bottom();
    assert_eq!(scroll.clamp(30, 10), 20);

    scroll.top();
    assert_eq!(scroll.clamp(30, 10), 0);

    // Content shorter than the viewport never scrolls
    scroll.page_down();
    assert_eq!(scroll.clamp(5, 10), 0);
}

#[test]
fn test_reset() {
    let mut scroll = ScrollState::new();
    scroll.page_down();
    scroll.reset();
    assert_eq!(scroll.offset(), 0);
}
