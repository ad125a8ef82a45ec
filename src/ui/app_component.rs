use crate::notification::Notification;
use crate::registration::{RegistrationReceipt, RemoteError, SubmissionWorkflow, SubmitOutcome, SubmitStart};
use crate::table::TableController;
use crate::theme::Palette;
use crate::ui::components::{
    ButtonGalleryComponent, DialogComponent, Footer, FormComponent, FormControl, HistoryComponent, Navbar,
    StatusInfo, UserTableComponent,
};
use crate::ui::core::{
    actions::{Action, DialogType, Pane},
    context::AppContext,
    event_handler::EventType,
    task_manager::{TaskId, TaskManager},
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, style::Style, widgets::Block, Frame};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Upper bound on follow-up actions produced by a single dispatch
const MAX_CHAINED_ACTIONS: usize = 8;

/// How often the system theme hint is polled
const THEME_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Application state separate from UI concerns
#[derive(Debug, Clone)]
pub struct AppState {
    pub workflow: SubmissionWorkflow,
    pub table: TableController,
    pub focus: Pane,
    pub history_limit: usize,
}

impl AppState {
    pub fn new(timestamp_format: &str, history_limit: usize) -> Self {
        Self {
            workflow: SubmissionWorkflow::with_timestamp_format(timestamp_format),
            table: TableController::default(),
            focus: Pane::default(),
            history_limit,
        }
    }
}

pub struct AppComponent {
    // Component composition
    form: FormComponent,
    buttons: ButtonGalleryComponent,
    table: UserTableComponent,
    history: HistoryComponent,
    dialog: DialogComponent,

    // Application state
    state: AppState,

    // Services
    context: AppContext,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,

    // Simple UI state
    should_quit: bool,
    active_registration: Option<TaskId>,
}

impl AppComponent {
    pub fn new(context: AppContext) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();
        let state = AppState::new(
            &context.config.display.timestamp_format,
            context.config.display.history_limit,
        );

        let mut app = Self {
            form: FormComponent::new(),
            buttons: ButtonGalleryComponent::new(),
            table: UserTableComponent::new(),
            history: HistoryComponent::new(),
            dialog: DialogComponent::new(),
            state,
            context,
            task_manager,
            background_action_rx,
            should_quit: false,
            active_registration: None,
        };
        app.set_focus(Pane::Form);
        app.sync_component_data();
        app
    }

    /// Start background watchers. Must run inside the tokio runtime.
    pub fn start(&mut self) {
        let sender = self.task_manager.action_sender();
        self.context.theme.watch_system(THEME_POLL_INTERVAL, move |dark| {
            let _ = sender.send(Action::SystemThemeChanged(dark));
        });
        self.context.logger.log(format!(
            "AppComponent: started in {:?} mode (following system: {})",
            self.context.theme.mode(),
            self.context.theme.follows_system()
        ));
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    pub fn focus(&self) -> Pane {
        self.state.focus
    }

    pub fn dialog(&self) -> Option<&DialogType> {
        self.dialog.dialog_type.as_ref()
    }

    pub fn form_component(&self) -> &FormComponent {
        &self.form
    }

    pub fn table_component(&self) -> &UserTableComponent {
        &self.table
    }

    pub fn history_component(&self) -> &HistoryComponent {
        &self.history
    }

    pub fn palette(&self) -> Palette {
        self.context.theme.palette()
    }

    /// True while a registration call is in flight
    pub fn is_busy(&self) -> bool {
        self.state.workflow.is_busy()
    }

    /// Background task running the current registration, if any
    pub fn registration_task(&self) -> Option<TaskId> {
        self.active_registration
    }

    /// Get the number of active background tasks
    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    /// Update all components with current data
    fn sync_component_data(&mut self) {
        let workflow = &self.state.workflow;
        self.form
            .update_data(workflow.form(), workflow.errors(), workflow.status(), workflow.is_busy());

        self.table
            .update_data(self.state.table.view(), self.state.table.sort_state());

        self.history.update_data(
            workflow
                .history()
                .recent(self.state.history_limit)
                .cloned()
                .collect(),
        );

        if matches!(self.dialog.dialog_type, Some(DialogType::Logs)) {
            self.dialog.update_logs(self.context.logger.get_logs());
        }
    }

    fn focused_component(&mut self) -> &mut dyn Component {
        match self.state.focus {
            Pane::Form => &mut self.form,
            Pane::Buttons => &mut self.buttons,
            Pane::Table => &mut self.table,
        }
    }

    fn set_focus(&mut self, pane: Pane) {
        self.focused_component().on_blur();
        self.state.focus = pane;
        self.focused_component().on_focus();
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => {
                self.context.logger.log("Global key: quit".to_string());
                Action::Quit
            }
            KeyCode::Char('t') if ctrl => Action::ToggleTheme,
            KeyCode::Char('o') if ctrl => Action::ShowDialog(DialogType::Notification(Notification::button_demo())),
            KeyCode::Char('g') if ctrl => {
                self.context.logger.log("Global key: opening logs dialog".to_string());
                Action::ShowDialog(DialogType::Logs)
            }
            KeyCode::F(1) | KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Tab => Action::FocusNext,
            KeyCode::BackTab => Action::FocusPrevious,
            _ => Action::None,
        }
    }

    /// Handle app-level actions that require business logic.
    ///
    /// Returns a follow-up action, usually a dialog to show.
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                self.task_manager.cancel_all_tasks();
                self.context.theme.teardown();
                Action::None
            }
            Action::SetText { field, value } => {
                self.state.workflow.set_text(field, value);
                Action::None
            }
            Action::SetFlag { field, value } => {
                self.state.workflow.set_flag(field, value);
                Action::None
            }
            Action::SubmitForm => self.start_registration(),
            Action::ClearForm => {
                if self.state.workflow.clear_form() {
                    self.context.logger.log("Form: cleared".to_string());
                    self.form.select(FormControl::ALL[0]);
                }
                Action::None
            }
            Action::RegistrationFinished(result) => self.finish_registration(result),
            Action::SortBy(field) => {
                self.state.table.set_sort(field);
                let sort = self.state.table.sort_state();
                self.context
                    .logger
                    .log(format!("Table: sort by {} {:?}", field.label(), sort.direction));
                Action::None
            }
            Action::EditRow(id) => match self.state.table.edit(id) {
                Some(notification) => Action::ShowDialog(DialogType::Notification(notification)),
                None => Action::None,
            },
            Action::DeleteRow(id) => match self.state.table.delete(id) {
                Some((row, notification)) => {
                    self.context
                        .logger
                        .log(format!("Table: deleted user '{}' (ID: {})", row.name, row.id));
                    Action::ShowDialog(DialogType::Notification(notification))
                }
                None => Action::None,
            },
            Action::PressButton(button) => {
                self.context.logger.log(format!("Button: '{}' pressed", button.label));
                if button.opens_modal {
                    Action::ShowDialog(DialogType::Notification(Notification::button_demo()))
                } else {
                    Action::None
                }
            }
            Action::FocusNext => {
                self.set_focus(self.state.focus.next());
                Action::None
            }
            Action::FocusPrevious => {
                self.set_focus(self.state.focus.previous());
                Action::None
            }
            Action::ToggleTheme => {
                match self.context.theme.toggle() {
                    Ok(mode) => self.context.logger.log(format!("Theme: switched to {:?}", mode)),
                    Err(e) => {
                        self.context.logger.log(format!("Theme: {:#}", e));
                        log::warn!("Theme preference not saved: {:#}", e);
                    }
                }
                Action::None
            }
            Action::SystemThemeChanged(dark) => {
                if self.context.theme.apply_system(dark) {
                    self.context
                        .logger
                        .log(format!("Theme: system switched to {:?}", self.context.theme.mode()));
                }
                Action::None
            }
            Action::ShowDialog(_) | Action::HideDialog | Action::None => Action::None,
        }
    }

    fn start_registration(&mut self) -> Action {
        match self.state.workflow.begin_submit() {
            SubmitStart::Accepted(snapshot) => {
                self.context
                    .logger
                    .log(format!("Registration: submitting '{}'", snapshot.name));
                let service = Arc::clone(&self.context.registration_service);
                self.active_registration = Some(self.task_manager.spawn_registration(service, snapshot));
            }
            SubmitStart::Invalid(errors) => {
                self.context
                    .logger
                    .log(format!("Registration: {} field(s) need attention", errors.len()));
                if let Some(field) = errors.fields().next() {
                    self.form.select(FormControl::Field(field));
                }
            }
            SubmitStart::Busy => {
                self.context
                    .logger
                    .log("Registration: already in progress, ignoring".to_string());
            }
        }
        Action::None
    }

    fn finish_registration(&mut self, result: Result<RegistrationReceipt, RemoteError>) -> Action {
        self.active_registration = None;
        match self.state.workflow.finish_submit(result, &mut self.state.table) {
            Some(SubmitOutcome::Succeeded {
                submission,
                notification,
            }) => {
                self.context.logger.log(format!(
                    "Registration: '{}' registered with ID {}",
                    submission.name, submission.id
                ));
                self.form.select(FormControl::ALL[0]);
                Action::ShowDialog(DialogType::Notification(notification))
            }
            Some(SubmitOutcome::Failed { error, notification }) => {
                self.context.logger.log(format!("Registration: failed: {}", error));
                Action::ShowDialog(DialogType::Notification(notification))
            }
            _ => Action::None,
        }
    }

    /// Run an action and its follow-ups, then refresh the components
    pub fn dispatch(&mut self, action: Action) {
        let mut next = action;
        for _ in 0..MAX_CHAINED_ACTIONS {
            if matches!(next, Action::None) {
                break;
            }
            let action = self.update(next);
            next = self.handle_app_action(action);
        }
        self.sync_component_data();
    }

    /// Process background actions from task manager
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        // Process all available background actions
        while let Ok(action) = self.background_action_rx.try_recv() {
            log::debug!("Background: received action {:?}", action);
            actions.push(action);
        }

        // Clean up finished tasks
        let completed_tasks = self.task_manager.cleanup_finished_tasks();
        if !completed_tasks.is_empty() {
            log::debug!("Background: cleaned up {} finished tasks", completed_tasks.len());
        }

        actions
    }

    /// Apply background results and advance animations.
    ///
    /// Returns true when the screen needs a redraw.
    pub fn tick(&mut self) -> bool {
        let actions = self.process_background_actions();
        let changed = !actions.is_empty() || self.is_busy();

        for action in actions {
            self.dispatch(action);
        }
        self.form.tick();

        changed
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) {
        match event_type {
            EventType::Key(key) => {
                // Dialog has priority when visible
                let action = if self.dialog.is_visible() {
                    self.dialog.handle_key_events(key)
                } else {
                    match self.focused_component().handle_key_events(key) {
                        Action::None => self.handle_global_key(key),
                        action => action,
                    }
                };
                self.dispatch(action);
            }
            EventType::Tick => {
                self.tick();
            }
            EventType::Resize(_, _) | EventType::Other => {}
        }
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // This shouldn't be called directly - use handle_event instead
        self.handle_global_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        // Process through component hierarchy
        let action = self.dialog.update(action);
        let action = self.form.update(action);
        let action = self.buttons.update(action);

        // Return for app-level handling
        self.table.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, palette: &Palette) {
        f.render_widget(Block::default().style(Style::default().bg(palette.background)), rect);

        let areas = LayoutManager::screen(rect, self.history.required_height());
        let info = StatusInfo {
            focus: self.state.focus,
            theme: self.context.theme.mode(),
            follows_system: self.context.theme.follows_system(),
            busy: self.is_busy(),
            total_users: self.state.table.len(),
        };

        Navbar::render(f, areas.navbar, &info, palette);
        self.form.render(f, areas.form, palette);
        self.buttons.render(f, areas.buttons, palette);
        self.table.render(f, areas.table, palette);
        self.history.render(f, areas.history, palette);
        Footer::render(f, areas.footer, &info, palette);

        // Render dialog on top if visible
        if self.dialog.is_visible() {
            self.dialog.render(f, rect, palette);
        }
    }
}
