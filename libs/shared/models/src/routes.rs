use std::fmt;

use serde::{Serialize, Serializer};

/// Navigation targets the views hand to the host router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Doctors,
    DoctorsBySpeciality(String),
    Appointment(String),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Doctors => "/doctors".to_string(),
            Route::DoctorsBySpeciality(speciality) => format!("/doctors/{}", speciality),
            Route::Appointment(doctor_id) => format!("/appointment/{}", doctor_id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl Serialize for Route {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Doctors.path(), "/doctors");
        assert_eq!(
            Route::DoctorsBySpeciality("General physician".to_string()).to_string(),
            "/doctors/General physician"
        );
        assert_eq!(Route::Appointment("doc7".to_string()).path(), "/appointment/doc7");
        assert_eq!(
            serde_json::to_value(Route::Appointment("doc1".to_string())).unwrap(),
            serde_json::json!("/appointment/doc1")
        );
    }
}
