//! Craftui - reusable terminal UI components with a live registration demo
//!
//! The library holds the demo's core logic and the Ratatui front end built
//! on top of it: a validated registration form with a simulated remote
//! submission, a sortable user table, and a light/dark theme that follows
//! the terminal until the user picks one.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`registration`] - Form data, validation and the submission workflow
//! * [`table`] - User rows and the sort/edit/delete controller
//! * [`theme`] - Theme mode, palettes and preference persistence
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Utility functions and helpers

/// Configuration module for managing application settings
pub mod config;

/// Application constants and user-facing text
pub mod constants;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Messages shown in the notification modal
pub mod notification;

/// Registration form, validation and submission workflow
pub mod registration;

/// User table rows and controller
pub mod table;

/// Light/dark theme state and persistence
pub mod theme;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling
pub mod utils;
