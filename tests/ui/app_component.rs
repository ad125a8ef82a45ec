use async_trait::async_trait;
use craftui::config::Config;
use craftui::constants::REGISTRATION_FAILED;
use craftui::logger::Logger;
use craftui::registration::{
    FormData, FormField, RegistrationReceipt, RegistrationService, RemoteError, SimulatedRegistrationService,
};
use craftui::theme::{MemoryPreferenceStore, ThemeContext, ThemeMode};
use craftui::ui::app_component::{AppComponent, AppState};
use craftui::ui::core::{Action, AppContext, Component, DialogType, EventType, Pane};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use std::sync::Arc;
use std::time::Duration;

/// Service whose registrations always fail
struct UnavailableService;

#[async_trait]
impl RegistrationService for UnavailableService {
    async fn register(&self, _form: &FormData) -> Result<RegistrationReceipt, RemoteError> {
        Err(RemoteError::Unavailable)
    }
}

fn app_with_service(service: Arc<dyn RegistrationService>) -> AppComponent {
    let theme = ThemeContext::initialize(Box::new(MemoryPreferenceStore::default()), Arc::new(|| None));
    let context = AppContext::new(Config::default(), Logger::new(), theme, service);
    AppComponent::new(context)
}

fn test_app() -> AppComponent {
    app_with_service(Arc::new(SimulatedRegistrationService::new(Duration::ZERO)))
}

fn fill_valid_form(app: &mut AppComponent, name: &str) {
    app.dispatch(Action::SetText {
        field: FormField::Name,
        value: name.to_string(),
    });
    app.dispatch(Action::SetText {
        field: FormField::Email,
        value: "user@example.com".to_string(),
    });
    app.dispatch(Action::SetFlag {
        field: FormField::Terms,
        value: true,
    });
}

fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(EventType::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

fn ctrl(app: &mut AppComponent, c: char) {
    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)));
}

fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

async fn wait_for_dialog(app: &mut AppComponent) {
    for _ in 0..100 {
        app.tick();
        if app.dialog().is_some() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("no dialog after waiting for the registration");
}

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    buffer.content().iter().map(|cell| cell.symbol()).collect()
}

#[test]
fn test_app_state_new() {
    let state = AppState::new("%Y", 3);
    assert_eq!(state.focus, Pane::Form);
    assert_eq!(state.history_limit, 3);
    assert_eq!(state.table.len(), 4);
    assert!(!state.workflow.is_busy());
}

#[tokio::test]
async fn test_register_through_the_keyboard() {
    let mut app = test_app();

    type_text(&mut app, "Al");
    press(&mut app, KeyCode::Down);
    type_text(&mut app, "a@b.com");
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char(' '));

    assert_eq!(app.state().workflow.form().name, "Al");
    assert_eq!(app.state().workflow.form().email, "a@b.com");
    assert!(app.state().workflow.form().terms);

    ctrl(&mut app, 's');
    assert!(app.is_busy());
    assert!(app.registration_task().is_some());

    // A second submit while busy is ignored
    ctrl(&mut app, 's');
    assert_eq!(app.active_task_count(), 1);

    wait_for_dialog(&mut app).await;

    match app.dialog() {
        Some(DialogType::Notification(notification)) => assert!(notification.body.contains("Welcome, Al!")),
        other => panic!("expected a notification, got {:?}", other),
    }
    assert!(!app.is_busy());
    assert!(app.registration_task().is_none());
    assert_eq!(app.state().table.len(), 5);
    assert_eq!(app.state().workflow.history().len(), 1);
    assert!(app.state().workflow.form().is_empty());

    // Any key closes the notification
    press(&mut app, KeyCode::Char('x'));
    assert!(app.dialog().is_none());
    assert!(app.state().workflow.form().name.is_empty());
}

#[test]
fn test_invalid_submit_shows_errors() {
    let mut app = test_app();
    ctrl(&mut app, 's');

    assert!(!app.is_busy());
    assert!(app.dialog().is_none());
    assert_eq!(app.state().workflow.errors().len(), 3);
    assert_eq!(app.active_task_count(), 0);
}

#[test]
fn test_result_without_pending_submission_is_ignored() {
    let mut app = test_app();
    type_text(&mut app, "Al");

    app.dispatch(Action::SubmitForm);
    // Validation failed, so there is no pending submission to finish
    app.dispatch(Action::RegistrationFinished(Err(RemoteError::Unavailable)));
    assert!(app.dialog().is_none());
    assert_eq!(app.state().workflow.form().name, "Al");
}

#[tokio::test]
async fn test_failed_registration_keeps_the_form() {
    let mut app = app_with_service(Arc::new(UnavailableService));
    fill_valid_form(&mut app, "Al");
    let before = app.state().workflow.form().clone();

    app.dispatch(Action::SubmitForm);
    assert!(app.is_busy());

    wait_for_dialog(&mut app).await;

    match app.dialog() {
        Some(DialogType::Notification(notification)) => assert_eq!(notification.body, REGISTRATION_FAILED),
        other => panic!("expected a notification, got {:?}", other),
    }
    assert!(!app.is_busy());
    assert_eq!(app.state().workflow.form(), &before);
    assert_eq!(app.state().table.len(), 4);
    assert_eq!(app.state().workflow.history().len(), 0);
    assert!(!app.history_component().is_visible());
}

#[tokio::test]
async fn test_history_panel_shows_five_newest() {
    let mut app = test_app();
    let names = ["One", "Two", "Three", "Four", "Five", "Six"];

    for name in names {
        fill_valid_form(&mut app, name);
        app.dispatch(Action::SubmitForm);
        wait_for_dialog(&mut app).await;
        app.dispatch(Action::HideDialog);
    }

    assert_eq!(app.state().workflow.history().len(), 6);
    assert_eq!(app.state().table.len(), 10);

    let shown: Vec<&str> = app
        .history_component()
        .entries()
        .iter()
        .map(|entry| entry.name.as_str())
        .collect();
    assert_eq!(shown, vec!["Six", "Five", "Four", "Three", "Two"]);
}

#[test]
fn test_focus_cycles_with_tab() {
    let mut app = test_app();
    assert_eq!(app.focus(), Pane::Form);

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus(), Pane::Buttons);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus(), Pane::Table);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus(), Pane::Form);

    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.focus(), Pane::Table);
    assert!(!app.form_component().is_focused());
}

#[test]
fn test_table_delete_and_sort() {
    let mut app = test_app();
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.focus(), Pane::Table);

    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Char('2'));
    let names: Vec<&str> = app.table_component().rows().iter().map(|row| row.name.as_str()).collect();
    assert_eq!(names, vec!["John Doe", "Jane Smith", "Bob Johnson", "Alice Brown"]);

    press(&mut app, KeyCode::Char('d'));
    match app.dialog() {
        Some(DialogType::Notification(notification)) => {
            assert_eq!(notification.body, "User John Doe has been deleted successfully.")
        }
        other => panic!("expected a notification, got {:?}", other),
    }
    assert_eq!(app.state().table.len(), 3);
    assert!(app.state().table.find(1).is_none());
}

#[test]
fn test_edit_leaves_rows_untouched() {
    let mut app = test_app();
    app.dispatch(Action::EditRow(3));

    match app.dialog() {
        Some(DialogType::Notification(notification)) => {
            assert_eq!(notification.body, "Editing user: Bob Johnson (bob@example.com)")
        }
        other => panic!("expected a notification, got {:?}", other),
    }
    assert_eq!(app.state().table.len(), 4);
}

#[test]
fn test_theme_toggle_overrides_system() {
    let mut app = test_app();
    assert_eq!(app.context().theme.mode(), ThemeMode::Light);

    ctrl(&mut app, 't');
    assert_eq!(app.context().theme.mode(), ThemeMode::Dark);
    assert!(!app.context().theme.follows_system());

    app.dispatch(Action::SystemThemeChanged(false));
    assert_eq!(app.context().theme.mode(), ThemeMode::Dark);
}

#[test]
fn test_system_theme_change_applies_while_following() {
    let mut app = test_app();
    app.dispatch(Action::SystemThemeChanged(true));
    assert_eq!(app.context().theme.mode(), ThemeMode::Dark);
}

#[test]
fn test_help_and_logs_dialogs() {
    let mut app = test_app();
    press(&mut app, KeyCode::F(1));
    assert_eq!(app.dialog(), Some(&DialogType::Help));
    press(&mut app, KeyCode::Esc);
    assert!(app.dialog().is_none());

    ctrl(&mut app, 'g');
    assert_eq!(app.dialog(), Some(&DialogType::Logs));
    assert!(!app.context().logger.get_logs().is_empty());
}

#[test]
fn test_quit() {
    let mut app = test_app();
    assert!(!app.should_quit());
    ctrl(&mut app, 'q');
    assert!(app.should_quit());
}

#[test]
fn test_render_full_screen() {
    let mut app = test_app();
    let mut terminal = Terminal::new(TestBackend::new(200, 40)).unwrap();
    let palette = app.palette();

    terminal
        .draw(|f| {
            let area = f.area();
            app.render(f, area, &palette);
        })
        .unwrap();

    let text = screen_text(&terminal);
    assert!(text.contains("User Registration Form"));
    assert!(text.contains("User Management Table"));
    assert!(text.contains("Jane Smith"));
    assert!(text.contains("Total Users: 4"));
}

#[test]
fn test_render_notification_dialog() {
    let mut app = test_app();
    app.dispatch(Action::ShowDialog(DialogType::Notification(
        craftui::notification::Notification::new("Hello there"),
    )));
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    let palette = app.palette();

    terminal
        .draw(|f| {
            let area = f.area();
            app.render(f, area, &palette);
        })
        .unwrap();

    assert!(screen_text(&terminal).contains("Hello there"));
}
