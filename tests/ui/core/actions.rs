use craftui::notification::Notification;
use craftui::ui::core::{Action, DialogType, Pane};

#[test]
fn test_pane_cycle() {
    assert_eq!(Pane::default(), Pane::Form);
    for pane in Pane::ALL {
        assert_eq!(pane.next().previous(), pane);
    }
    assert_eq!(Pane::Table.next(), Pane::Form);
    assert_eq!(Pane::Form.previous(), Pane::Table);
}

#[test]
fn test_pane_titles() {
    let titles: Vec<&str> = Pane::ALL.iter().map(|pane| pane.title()).collect();
    assert_eq!(titles, vec!["Form", "Buttons", "Table"]);
}

#[test]
fn test_dialog_type_equality() {
    let a = DialogType::Notification(Notification::new("hello"));
    let b = DialogType::Notification(Notification::new("hello"));
    assert_eq!(a, b);
    assert_ne!(a, DialogType::Help);

    let action = Action::ShowDialog(a.clone());
    match action {
        Action::ShowDialog(DialogType::Notification(notification)) => assert_eq!(notification.body, "hello"),
        other => panic!("unexpected action {:?}", other),
    }
}
