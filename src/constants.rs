//! Constants used throughout the application
//!
//! This module centralizes user-facing text, validation messages, and other
//! constant values to keep wording consistent between the core and the UI.

// Application chrome
pub const APP_TITLE: &str = "Craftui";
pub const APP_TAGLINE: &str = "Reusable terminal components with a live registration demo";
pub const FORM_TITLE: &str = "User Registration Form";
pub const BUTTONS_TITLE: &str = "Button Variants";
pub const TABLE_TITLE: &str = "User Management Table";
pub const TABLE_HINT: &str = "1-5 sort columns • e edit • d delete";
pub const HISTORY_TITLE: &str = "Recent Submissions";
pub const NOTIFICATION_TITLE: &str = "Notification";

// Validation messages
pub const ERROR_NAME_REQUIRED: &str = "Name is required";
pub const ERROR_NAME_TOO_SHORT: &str = "Name must be at least 2 characters long";
pub const ERROR_EMAIL_REQUIRED: &str = "Email is required";
pub const ERROR_EMAIL_INVALID: &str = "Please enter a valid email address";
pub const ERROR_PHONE_INVALID: &str = "Please enter a valid phone number";
pub const ERROR_TERMS_REQUIRED: &str = "You must accept the terms and conditions to continue";

/// Minimum length of a trimmed name, counted in Unicode scalar values
/// (`char`s), not UTF-16 units: a lone emoji such as "😀" is one character
/// and therefore too short.
pub const NAME_MIN_LENGTH: usize = 2;

// Notification messages
pub const REGISTRATION_WELCOME: &str = "Registration successful! Welcome, {}!";
pub const REGISTRATION_ADDED: &str = "Your account has been created and you've been added to the user table below.";
pub const REGISTRATION_NEWSLETTER: &str = " You will receive our newsletter.";
pub const REGISTRATION_FAILED: &str = "Registration failed. Please try again.";
pub const BUTTON_DEMO_MESSAGE: &str = "Button clicked! This demonstrates the modal component.";

// Button labels
pub const BUTTON_REGISTER: &str = "Register";
pub const BUTTON_REGISTERING: &str = "Registering...";
pub const BUTTON_CLEAR: &str = "Clear Form";
pub const PROCESSING_LABEL: &str = "Processing...";

// Table defaults for newly registered users
pub const DEFAULT_ROLE: &str = "User";
pub const DEFAULT_STATUS: &str = "Active";

// Dialog titles
pub const DIALOG_TITLE_HELP: &str = "❓ Keyboard Shortcuts - Esc or F1 to close";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Esc or q to close";

// Config messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";

/// Spinner frames shown next to the processing label
pub const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

// Config limits
pub const TICK_RATE_MIN_MS: u64 = 10;
pub const TICK_RATE_MAX_MS: u64 = 1000;
pub const SIMULATED_DELAY_MAX_MS: u64 = 60_000;
pub const HISTORY_LIMIT_MIN: usize = 1;
pub const HISTORY_LIMIT_MAX: usize = 50;

/// Maximum number of in-memory log lines kept for the log viewer
pub const LOG_BUFFER_CAPACITY: usize = 500;
