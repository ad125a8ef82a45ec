//! The remote registration call.
//!
//! There is no real backend: [`SimulatedRegistrationService`] waits for a
//! configurable delay and then always succeeds. The trait still returns a
//! `Result` so the workflow handles the failure path like a real client would.

use crate::config::SubmissionConfig;
use crate::registration::form::FormData;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Successful answer from the registration service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrationReceipt {
    pub id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    #[error("registration rejected: {0}")]
    Rejected(String),
    #[error("registration service unavailable")]
    Unavailable,
}

#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Register a validated form and return the identifier assigned to it
    async fn register(&self, form: &FormData) -> Result<RegistrationReceipt, RemoteError>;
}

/// Millisecond clock identifiers, bumped so they never repeat in-process.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicU64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> u64 {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(last + 1);
            match self
                .last
                .compare_exchange_weak(last, candidate, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => return candidate,
                Err(actual) => last = actual,
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct SimulatedRegistrationService {
    delay: Duration,
    ids: Arc<IdGenerator>,
}

impl SimulatedRegistrationService {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            ids: Arc::new(IdGenerator::new()),
        }
    }

    pub fn from_config(config: &SubmissionConfig) -> Self {
        Self::new(Duration::from_millis(config.simulated_delay_ms))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl RegistrationService for SimulatedRegistrationService {
    async fn register(&self, form: &FormData) -> Result<RegistrationReceipt, RemoteError> {
        log::info!("Simulated registration for '{}' ({:?} delay)", form.name, self.delay);
        tokio::time::sleep(self.delay).await;
        Ok(RegistrationReceipt { id: self.ids.next_id() })
    }
}
