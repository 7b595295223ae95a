use tracing::debug;

use shared_database::DoctorDirectory;
use shared_models::routes::Route;

use crate::models::{DoctorCard, ListingView, SpecialityOption, LISTING_INTRO, SPECIALITIES};
use crate::services::filter::filter_by_speciality;

pub struct ListingService<'a> {
    directory: &'a DoctorDirectory,
}

impl<'a> ListingService<'a> {
    pub fn new(directory: &'a DoctorDirectory) -> Self {
        Self { directory }
    }

    /// Builds the listing page for an optional speciality.
    pub fn build(&self, speciality: Option<&str>, show_filters: bool) -> ListingView {
        let doctors: Vec<DoctorCard> = filter_by_speciality(self.directory.doctors(), speciality)
            .into_iter()
            .map(DoctorCard::from)
            .collect();

        debug!(
            "Listing {} of {} doctors for speciality {:?}",
            doctors.len(),
            self.directory.len(),
            speciality
        );

        let specialities = SPECIALITIES
            .iter()
            .map(|&name| SpecialityOption {
                name,
                active: speciality == Some(name),
                route: Route::DoctorsBySpeciality(name.to_string()),
            })
            .collect();

        ListingView {
            intro: LISTING_INTRO,
            speciality: speciality.map(str::to_string),
            show_filters,
            specialities,
            doctors,
        }
    }
}
