use craftui::ui::layout::{LayoutManager, BUTTONS_HEIGHT};
use ratatui::layout::Rect;

#[test]
fn test_screen_regions() {
    let area = Rect::new(0, 0, 120, 40);
    let areas = LayoutManager::screen(area, 0);

    assert_eq!(areas.navbar.height, 1);
    assert_eq!(areas.footer.height, 1);
    assert_eq!(areas.footer.y, 39);
    assert_eq!(areas.form.height, 38);
    assert_eq!(areas.buttons.height, BUTTONS_HEIGHT);
    assert_eq!(areas.history.height, 0);
    assert_eq!(areas.form.width + areas.table.width, 120);
}

#[test]
fn test_history_never_starves_the_table() {
    let area = Rect::new(0, 0, 100, 24);
    let areas = LayoutManager::screen(area, 50);

    assert!(areas.table.height >= 8);
    assert_eq!(areas.buttons.height + areas.table.height + areas.history.height, 22);
}

#[test]
fn test_centered_rect_fits_inside() {
    let area = Rect::new(0, 0, 100, 50);
    let popup = LayoutManager::centered_rect(60, 50, area);
    assert!(popup.x > 0 && popup.y > 0);
    assert!(popup.right() <= area.right());
    assert!(popup.bottom() <= area.bottom());
}
