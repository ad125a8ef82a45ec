//! Core UI functionality for the Craftui application.
//!
//! This module contains the building blocks shared by every component:
//!
//! - [`actions`] - Actions produced by components and applied by the app
//! - [`component`] - Base component trait
//! - [`context`] - Services shared across the UI (config, logger, theme, registration)
//! - [`event_handler`] - Terminal event polling
//! - [`task_manager`] - Background task management for the registration call
//!
//! Components translate key presses into [`Action`]s. The app component
//! applies them to the registration workflow and the table controller, then
//! pushes fresh data back into the components before the next render.

pub mod actions;
pub mod component;
pub mod context;
pub mod event_handler;
pub mod task_manager;

// Re-export core types for easier access from other modules
pub use actions::{Action, DialogType, Pane};
pub use component::Component;
pub use context::AppContext;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{TaskId, TaskManager};
