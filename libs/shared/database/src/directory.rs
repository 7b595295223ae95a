use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info};

use shared_config::AppConfig;
use shared_models::doctor::Doctor;
use shared_models::error::AppError;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Failed to read directory file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid directory format: {0}")]
    Format(#[from] serde_json::Error),

    #[error("Duplicate doctor id: {0}")]
    DuplicateId(String),
}

impl From<DirectoryError> for AppError {
    fn from(err: DirectoryError) -> Self {
        AppError::Directory(err.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct DirectoryFile {
    currency_symbol: Option<String>,
    doctors: Vec<Doctor>,
}

/// Read-only snapshot of the doctor directory.
#[derive(Debug, Clone, PartialEq)]
pub struct DoctorDirectory {
    doctors: Vec<Doctor>,
    currency_symbol: String,
}

impl DoctorDirectory {
    /// Builds a snapshot, rejecting duplicate doctor ids.
    pub fn new(doctors: Vec<Doctor>, currency_symbol: impl Into<String>) -> Result<Self, DirectoryError> {
        let mut seen = HashSet::with_capacity(doctors.len());
        for doctor in &doctors {
            if !seen.insert(doctor.id.as_str()) {
                return Err(DirectoryError::DuplicateId(doctor.id.clone()));
            }
        }

        Ok(Self {
            doctors,
            currency_symbol: currency_symbol.into(),
        })
    }

    /// Parses the JSON directory format. The file's currency symbol wins over
    /// `fallback_currency` when present.
    pub fn from_json(raw: &str, fallback_currency: &str) -> Result<Self, DirectoryError> {
        let file: DirectoryFile = serde_json::from_str(raw)?;
        let currency = file
            .currency_symbol
            .unwrap_or_else(|| fallback_currency.to_string());
        Self::new(file.doctors, currency)
    }

    pub async fn load(path: &Path, fallback_currency: &str) -> Result<Self, DirectoryError> {
        debug!("Loading doctor directory from {}", path.display());

        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| DirectoryError::Io {
                path: path.display().to_string(),
                source,
            })?;

        Self::from_json(&raw, fallback_currency)
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    pub fn find(&self, doctor_id: &str) -> Option<&Doctor> {
        self.doctors.iter().find(|doctor| doctor.id == doctor_id)
    }

    pub fn len(&self) -> usize {
        self.doctors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doctors.is_empty()
    }
}

/// Holds the current directory snapshot. Empty until the first load.
#[derive(Debug, Clone, Default)]
pub struct DirectoryStore {
    inner: Arc<RwLock<Option<Arc<DoctorDirectory>>>>,
}

impl DirectoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_directory(directory: DoctorDirectory) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Some(Arc::new(directory)))),
        }
    }

    pub async fn load_from_config(config: &AppConfig) -> Result<Self, DirectoryError> {
        let store = Self::new();
        store.reload(config).await?;
        Ok(store)
    }

    pub async fn reload(&self, config: &AppConfig) -> Result<(), DirectoryError> {
        let directory = DoctorDirectory::load(&config.directory_path, &config.currency_symbol).await?;
        info!(
            "Loaded {} doctors from {}",
            directory.len(),
            config.directory_path.display()
        );
        self.replace(directory).await;
        Ok(())
    }

    pub async fn replace(&self, directory: DoctorDirectory) {
        *self.inner.write().await = Some(Arc::new(directory));
    }

    /// `None` while the directory has not been loaded yet.
    pub async fn snapshot(&self) -> Option<Arc<DoctorDirectory>> {
        self.inner.read().await.clone()
    }
}
