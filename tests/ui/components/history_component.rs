use craftui::registration::{FormData, Submission};
use craftui::theme::Palette;
use craftui::ui::components::HistoryComponent;
use ratatui::{backend::TestBackend, layout::Rect, Terminal};

fn submission(id: u64, name: &str, phone: &str, newsletter: bool) -> Submission {
    let form = FormData {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: phone.to_string(),
        newsletter,
        terms: true,
    };
    Submission::new(&form, id, "10/18/2026, 02:15:07 PM")
}

#[test]
fn test_hidden_when_empty() {
    let history = HistoryComponent::new();
    assert!(!history.is_visible());
    assert_eq!(history.required_height(), 0);
}

#[test]
fn test_height_follows_entries() {
    let mut history = HistoryComponent::new();
    history.update_data(vec![submission(2, "Bo", "", false), submission(1, "Al", "", true)]);
    assert!(history.is_visible());
    assert_eq!(history.required_height(), 4);
    assert_eq!(history.entries()[0].name, "Bo");
}

#[test]
fn test_render_entry_details() {
    let mut history = HistoryComponent::new();
    history.update_data(vec![submission(1, "Al", "+1 555 0100", true)]);

    let mut terminal = Terminal::new(TestBackend::new(140, 5)).unwrap();
    terminal
        .draw(|f| history.render(f, Rect::new(0, 0, 140, 3), &Palette::light()))
        .unwrap();

    let text: String = terminal.backend().buffer().content().iter().map(|cell| cell.symbol()).collect();
    assert!(text.contains("Recent Submissions"));
    assert!(text.contains("al@example.com"));
    assert!(text.contains("+1 555 0100"));
    assert!(text.contains("Newsletter: Yes"));
    assert!(text.contains("Terms: Accepted"));
}
