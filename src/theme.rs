//! Dark/light theme state.
//!
//! [`ThemeContext`] is created once at startup and handed by reference to the
//! renderers. It starts from the persisted preference when one exists and
//! otherwise follows the terminal's background hint. Following the terminal
//! is done by a watcher task that is aborted when the user picks a mode
//! explicitly or when the context is dropped.

use anyhow::{Context, Result};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    pub fn toggled(self) -> Self {
        Self::from_dark(!self.is_dark())
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Light => "☀ Light",
            ThemeMode::Dark => "☾ Dark",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            ThemeMode::Light => Palette::light(),
            ThemeMode::Dark => Palette::dark(),
        }
    }
}

/// Colors every component draws with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub focus: Color,
    pub accent: Color,
    pub primary: Color,
    pub secondary: Color,
    pub success: Color,
    pub danger: Color,
    pub warning: Color,
    pub selection: Color,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            background: Color::Rgb(249, 250, 251),
            surface: Color::Rgb(255, 255, 255),
            text: Color::Rgb(17, 24, 39),
            muted: Color::Rgb(107, 114, 128),
            border: Color::Rgb(209, 213, 219),
            focus: Color::Rgb(37, 99, 235),
            accent: Color::Rgb(147, 51, 234),
            primary: Color::Rgb(37, 99, 235),
            secondary: Color::Rgb(75, 85, 99),
            success: Color::Rgb(22, 163, 74),
            danger: Color::Rgb(220, 38, 38),
            warning: Color::Rgb(202, 138, 4),
            selection: Color::Rgb(219, 234, 254),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(17, 24, 39),
            surface: Color::Rgb(31, 41, 55),
            text: Color::Rgb(243, 244, 246),
            muted: Color::Rgb(156, 163, 175),
            border: Color::Rgb(75, 85, 99),
            focus: Color::Rgb(96, 165, 250),
            accent: Color::Rgb(192, 132, 252),
            primary: Color::Rgb(59, 130, 246),
            secondary: Color::Rgb(107, 114, 128),
            success: Color::Rgb(74, 222, 128),
            danger: Color::Rgb(248, 113, 113),
            warning: Color::Rgb(250, 204, 21),
            selection: Color::Rgb(55, 65, 81),
        }
    }
}

/// Persistence for the single dark mode flag
pub trait PreferenceStore: Send + Sync {
    /// `None` when the user never chose a mode
    fn load(&self) -> Result<Option<bool>>;
    fn save(&self, dark_mode: bool) -> Result<()>;
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredPreference {
    dark_mode: bool,
}

/// JSON file holding `{"dark_mode": true|false}`
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> Result<Option<bool>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read preference file: {}", self.path.display()))?;
        let stored: StoredPreference = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse preference file: {}", self.path.display()))?;
        Ok(Some(stored.dark_mode))
    }

    fn save(&self, dark_mode: bool) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create preference directory: {}", parent.display()))?;
        }
        let content = serde_json::to_string(&StoredPreference { dark_mode })?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write preference file: {}", self.path.display()))
    }
}

/// Process-local store, used when no data directory is available
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    value: Arc<Mutex<Option<bool>>>,
}

impl MemoryPreferenceStore {
    pub fn new(initial: Option<bool>) -> Self {
        Self {
            value: Arc::new(Mutex::new(initial)),
        }
    }

    pub fn get(&self) -> Option<bool> {
        self.value.lock().ok().and_then(|value| *value)
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Result<Option<bool>> {
        Ok(self.get())
    }

    fn save(&self, dark_mode: bool) -> Result<()> {
        let mut value = self
            .value
            .lock()
            .map_err(|_| anyhow::anyhow!("preference store lock poisoned"))?;
        *value = Some(dark_mode);
        Ok(())
    }
}

/// Source of the platform's dark mode hint; `None` when unknown
pub type SystemSignal = Arc<dyn Fn() -> Option<bool> + Send + Sync>;

/// Terminal background hint read from `COLORFGBG`
pub fn terminal_signal() -> SystemSignal {
    Arc::new(|| std::env::var("COLORFGBG").ok().and_then(|value| parse_colorfgbg(&value)))
}

/// Interpret `COLORFGBG` ("fg;bg" or "fg;default;bg"). Dark backgrounds are
/// the ANSI colors 0-6 and 8.
pub fn parse_colorfgbg(value: &str) -> Option<bool> {
    let background: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(matches!(background, 0..=6 | 8))
}

pub struct ThemeContext {
    mode: ThemeMode,
    user_override: bool,
    store: Box<dyn PreferenceStore>,
    signal: SystemSignal,
    watcher: Option<JoinHandle<()>>,
}

impl ThemeContext {
    /// Read the saved preference, falling back to the system signal.
    pub fn initialize(store: Box<dyn PreferenceStore>, signal: SystemSignal) -> Self {
        let saved = match store.load() {
            Ok(saved) => saved,
            Err(e) => {
                log::warn!("Ignoring unreadable theme preference: {:#}", e);
                None
            }
        };

        let (mode, user_override) = match saved {
            Some(dark) => (ThemeMode::from_dark(dark), true),
            None => (ThemeMode::from_dark(signal().unwrap_or(false)), false),
        };
        log::info!("Theme: starting in {:?} mode (user override: {})", mode, user_override);

        Self {
            mode,
            user_override,
            store,
            signal,
            watcher: None,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    pub fn palette(&self) -> Palette {
        self.mode.palette()
    }

    /// True while no explicit choice has been made
    pub fn follows_system(&self) -> bool {
        !self.user_override
    }

    pub fn is_watching(&self) -> bool {
        self.watcher.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Flip the mode, persist it and stop following the system.
    ///
    /// The in-memory mode changes even when persisting fails.
    pub fn toggle(&mut self) -> Result<ThemeMode> {
        self.mode = self.mode.toggled();
        self.user_override = true;
        self.teardown();
        self.store
            .save(self.mode.is_dark())
            .context("Failed to persist theme preference")?;
        Ok(self.mode)
    }

    /// Apply a system change. Ignored once the user has chosen a mode.
    pub fn apply_system(&mut self, dark: bool) -> bool {
        if self.user_override {
            return false;
        }
        self.mode = ThemeMode::from_dark(dark);
        true
    }

    /// Poll the system signal and report changes through `on_change`.
    ///
    /// Does nothing when the user has chosen a mode. Must be called from
    /// within a tokio runtime.
    pub fn watch_system<F>(&mut self, interval: Duration, on_change: F)
    where
        F: Fn(bool) + Send + 'static,
    {
        if self.user_override || self.watcher.is_some() {
            return;
        }

        let signal = Arc::clone(&self.signal);
        let mut last = signal();
        self.watcher = Some(tokio::spawn(async move {
            loop {
                tokio::time::sleep(interval).await;
                let current = signal();
                if current != last {
                    if let Some(dark) = current {
                        on_change(dark);
                    }
                    last = current;
                }
            }
        }));
    }

    /// Stop the system watcher, if any
    pub fn teardown(&mut self) {
        if let Some(handle) = self.watcher.take() {
            handle.abort();
        }
    }
}

impl Drop for ThemeContext {
    fn drop(&mut self) {
        self.teardown();
    }
}
