use craftui::ui::core::EventHandler;
use std::time::Duration;

#[test]
fn test_event_handler_tick_rate() {
    let handler = EventHandler::new(Duration::from_millis(250));
    assert_eq!(handler.tick_rate(), Duration::from_millis(250));
}

#[test]
fn test_event_handler_default() {
    let handler = EventHandler::default();
    assert_eq!(handler.tick_rate(), Duration::from_millis(100));
}
