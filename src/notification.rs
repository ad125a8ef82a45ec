//! Messages shown in the notification modal.

use crate::constants::{
    BUTTON_DEMO_MESSAGE, NOTIFICATION_TITLE, REGISTRATION_ADDED, REGISTRATION_FAILED, REGISTRATION_NEWSLETTER,
    REGISTRATION_WELCOME,
};
use crate::table::UserRow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

impl Notification {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            title: NOTIFICATION_TITLE.to_string(),
            body: body.into(),
        }
    }

    pub fn registration_succeeded(name: &str, newsletter: bool) -> Self {
        let mut body = format!("{}\n{}", REGISTRATION_WELCOME.replace("{}", name), REGISTRATION_ADDED);
        if newsletter {
            body.push_str(REGISTRATION_NEWSLETTER);
        }
        Self::new(body)
    }

    pub fn registration_failed() -> Self {
        Self::new(REGISTRATION_FAILED)
    }

    pub fn editing_user(row: &UserRow) -> Self {
        Self::new(format!("Editing user: {} ({})", row.name, row.email))
    }

    pub fn user_deleted(row: &UserRow) -> Self {
        Self::new(format!("User {} has been deleted successfully.", row.name))
    }

    pub fn button_demo() -> Self {
        Self::new(BUTTON_DEMO_MESSAGE)
    }
}
