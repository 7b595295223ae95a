use std::sync::Arc;

use shared_config::AppConfig;
use shared_database::{DirectoryStore, DoctorDirectory};
use shared_models::error::AppError;

use crate::clock::{Clock, SystemClock};

/// State shared by every cell router.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub directory: DirectoryStore,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(config: AppConfig, directory: DirectoryStore) -> Self {
        let clock = Arc::new(SystemClock::from_config(&config));
        Self {
            config: Arc::new(config),
            directory,
            clock,
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Current directory snapshot, or `Unavailable` while it is still loading.
    pub async fn directory_snapshot(&self) -> Result<Arc<DoctorDirectory>, AppError> {
        self.directory
            .snapshot()
            .await
            .ok_or_else(|| AppError::Unavailable("Doctor directory is still loading".to_string()))
    }
}
