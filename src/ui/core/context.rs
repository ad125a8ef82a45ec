use crate::config::Config;
use crate::logger::Logger;
use crate::registration::{RegistrationService, SimulatedRegistrationService};
use crate::theme::{terminal_signal, FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, ThemeContext};
use std::sync::Arc;

/// Services shared by the whole UI, built once at startup.
pub struct AppContext {
    pub config: Config,
    pub logger: Logger,
    pub theme: ThemeContext,
    pub registration_service: Arc<dyn RegistrationService>,
}

impl AppContext {
    pub fn new(
        config: Config,
        logger: Logger,
        theme: ThemeContext,
        registration_service: Arc<dyn RegistrationService>,
    ) -> Self {
        Self {
            config,
            logger,
            theme,
            registration_service,
        }
    }

    /// Wire the default services: file-backed theme preference, terminal
    /// background hint and the simulated registration service.
    pub fn from_config(config: Config, logger: Logger) -> Self {
        let store: Box<dyn PreferenceStore> = match config.preference_path() {
            Some(path) => Box::new(FilePreferenceStore::new(path)),
            None => {
                log::warn!("No data directory available, theme preference will not be saved");
                Box::new(MemoryPreferenceStore::default())
            }
        };
        let theme = ThemeContext::initialize(store, terminal_signal());
        let service = Arc::new(SimulatedRegistrationService::from_config(&config.submission));

        Self::new(config, logger, theme, service)
    }
}
