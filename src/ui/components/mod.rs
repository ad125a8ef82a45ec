//! Reusable UI components

pub mod button;
pub mod input;
pub mod status_bar;

// Component architecture
pub mod button_gallery;
pub mod dialog_component;
pub mod dialogs;
pub mod form_component;
pub mod history_component;
pub mod user_table_component;

// Component exports
pub use button_gallery::ButtonGalleryComponent;
pub use dialog_component::DialogComponent;
pub use form_component::{FormComponent, FormControl};
pub use history_component::HistoryComponent;
pub use status_bar::{Footer, Navbar, StatusInfo};
pub use user_table_component::UserTableComponent;
