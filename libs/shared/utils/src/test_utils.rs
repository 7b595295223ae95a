use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};

use shared_config::AppConfig;
use shared_database::{DirectoryStore, DoctorDirectory};
use shared_models::doctor::Doctor;

use crate::clock::FixedClock;
use crate::state::AppState;

pub struct TestDoctor;

impl TestDoctor {
    pub fn new(id: &str, name: &str, speciality: &str) -> Doctor {
        Doctor {
            id: id.to_string(),
            name: name.to_string(),
            image: format!("/assets/{}.png", id),
            speciality: speciality.to_string(),
            degree: "MBBS".to_string(),
            experience: "4 Years".to_string(),
            about: format!("{} is committed to comprehensive patient care.", name),
            fees: 50.0,
            available: true,
        }
    }

    /// A small directory covering several specialities, in a stable order.
    pub fn roster() -> Vec<Doctor> {
        vec![
            Self::new("doc1", "Dr. Richard James", "General physician"),
            Self::new("doc2", "Dr. Emily Larson", "Gynecologist"),
            Self::new("doc3", "Dr. Sarah Patel", "Dermatologist"),
            Self::new("doc4", "Dr. Christopher Lee", "Pediatricians"),
            Self::new("doc5", "Dr. Jennifer Garcia", "Neurologist"),
            Self::new("doc6", "Dr. Andrew Williams", "Neurologist"),
            Self::new("doc7", "Dr. Christopher Davis", "General physician"),
            Self::new("doc8", "Dr. Timothy White", "Gynecologist"),
        ]
    }
}

pub fn test_directory() -> DoctorDirectory {
    DoctorDirectory::new(TestDoctor::roster(), "$").expect("test roster has unique ids")
}

pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .expect("valid test timestamp")
}

/// App state over the sample roster with a frozen clock.
pub fn test_state(now: NaiveDateTime) -> AppState {
    test_state_with(DirectoryStore::with_directory(test_directory()), now)
}

pub fn test_state_with(directory: DirectoryStore, now: NaiveDateTime) -> AppState {
    AppState::new(AppConfig::default(), directory).with_clock(Arc::new(FixedClock(now)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_is_valid_directory() {
        let directory = test_directory();
        assert_eq!(directory.len(), 8);
        assert_eq!(directory.currency_symbol(), "$");
    }

    #[tokio::test]
    async fn test_state_uses_frozen_clock() {
        let now = at(2024, 5, 6, 9, 0);
        let state = test_state(now);
        assert_eq!(state.clock.now(), now);
        assert!(state.directory.snapshot().await.is_some());
    }
}
