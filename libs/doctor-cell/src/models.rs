use serde::{Deserialize, Serialize};

use shared_models::doctor::Doctor;
use shared_models::routes::Route;

/// Specialities offered in the listing selector, in display order.
pub const SPECIALITIES: [&str; 6] = [
    "General physician",
    "Gynecologist",
    "Dermatologist",
    "Pediatricians",
    "Neurologist",
    "Gastroenterologist",
];

pub const LISTING_INTRO: &str = "Browse through the doctors specialist.";

/// Compact doctor card used by the listing grid and the related-doctors grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoctorCard {
    pub id: String,
    pub name: String,
    pub image: String,
    pub speciality: String,
    pub availability: &'static str,
    pub route: Route,
}

impl From<&Doctor> for DoctorCard {
    fn from(doctor: &Doctor) -> Self {
        Self {
            id: doctor.id.clone(),
            name: doctor.name.clone(),
            image: doctor.image.clone(),
            speciality: doctor.speciality.clone(),
            availability: doctor.availability_label(),
            route: Route::Appointment(doctor.id.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecialityOption {
    pub name: &'static str,
    pub active: bool,
    pub route: Route,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingView {
    pub intro: &'static str,
    pub speciality: Option<String>,
    pub show_filters: bool,
    pub specialities: Vec<SpecialityOption>,
    pub doctors: Vec<DoctorCard>,
}

impl ListingView {
    /// Flips the narrow-viewport filter panel.
    pub fn toggle_filters(&mut self) {
        self.show_filters = !self.show_filters;
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingQuery {
    #[serde(default)]
    pub show_filters: bool,
}
