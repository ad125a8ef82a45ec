use crate::notification::Notification;
use crate::registration::{FormField, RegistrationReceipt, RemoteError};
use crate::table::SortField;
use crate::ui::components::button::ShowcaseButton;

/// The pane that currently receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    #[default]
    Form,
    Buttons,
    Table,
}

impl Pane {
    pub const ALL: [Pane; 3] = [Pane::Form, Pane::Buttons, Pane::Table];

    pub fn next(self) -> Self {
        match self {
            Pane::Form => Pane::Buttons,
            Pane::Buttons => Pane::Table,
            Pane::Table => Pane::Form,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Pane::Form => Pane::Table,
            Pane::Buttons => Pane::Form,
            Pane::Table => Pane::Buttons,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Pane::Form => "Form",
            Pane::Buttons => "Buttons",
            Pane::Table => "Table",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Action {
    // Form
    SetText { field: FormField, value: String },
    SetFlag { field: FormField, value: bool },
    SubmitForm,
    ClearForm,
    RegistrationFinished(Result<RegistrationReceipt, RemoteError>),

    // Table
    SortBy(SortField),
    EditRow(u64),
    DeleteRow(u64),

    // Button gallery
    PressButton(ShowcaseButton),

    // Focus
    FocusNext,
    FocusPrevious,

    // Theme
    ToggleTheme,
    SystemThemeChanged(bool),

    // UI operations
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogType {
    Notification(Notification),
    Help,
    Logs,
}
