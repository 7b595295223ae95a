// libs/appointment-cell/src/models.rs
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use doctor_cell::models::DoctorCard;
use shared_models::doctor::Doctor;

// ==============================================================================
// SLOT MODELS
// ==============================================================================

/// One bookable half-hour appointment opportunity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub datetime: NaiveDateTime,
    pub time: String,
}

/// Slots sharing one calendar day, ordered by time. May be empty.
pub type DayBucket = Vec<Slot>;

/// Abbreviations indexed by days-from-Sunday.
pub const DAYS_OF_WEEK: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

pub const BOOK_LABEL: &str = "Book an appointment";
pub const RELATED_TITLE: &str = "Related Doctors";

// ==============================================================================
// DETAIL PAGE MODELS
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoctorProfile {
    pub id: String,
    pub name: String,
    pub image: String,
    pub degree: String,
    pub speciality: String,
    pub experience: String,
    pub about: String,
    pub fees: f64,
    pub currency_symbol: String,
    pub fee_label: String,
}

impl DoctorProfile {
    pub fn new(doctor: &Doctor, currency_symbol: &str) -> Self {
        Self {
            id: doctor.id.clone(),
            name: doctor.name.clone(),
            image: doctor.image.clone(),
            degree: doctor.degree.clone(),
            speciality: doctor.speciality.clone(),
            experience: doctor.experience.clone(),
            about: doctor.about.clone(),
            fees: doctor.fees,
            currency_symbol: currency_symbol.to_string(),
            fee_label: doctor.fee_label(currency_symbol),
        }
    }
}

/// Entry of the day strip. Label fields are absent for an empty bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayTab {
    pub index: usize,
    pub weekday: Option<&'static str>,
    pub day_of_month: Option<u32>,
    pub slot_count: usize,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotButton {
    pub time: String,
    pub datetime: NaiveDateTime,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelatedSection {
    pub title: &'static str,
    pub subtitle: String,
    pub doctors: Vec<DoctorCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailPage {
    pub doctor: DoctorProfile,
    pub days: Vec<DayTab>,
    pub selected_day: usize,
    pub slots: Vec<SlotButton>,
    pub selected_slot: Option<String>,
    pub book_label: &'static str,
    pub related: RelatedSection,
}

// ==============================================================================
// REQUEST / BOOKING MODELS
// ==============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DetailQuery {
    pub day: Option<usize>,
    pub slot: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookAppointmentRequest {
    #[serde(default)]
    pub day: usize,
    pub slot: String,
}

/// What the host booking service receives when the patient books.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotReservation {
    pub doctor_id: String,
    pub doctor_name: String,
    pub datetime: NaiveDateTime,
    pub time: String,
    pub fees: f64,
    pub currency_symbol: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Requested,
    Confirmed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingReceipt {
    pub doctor_id: String,
    pub datetime: NaiveDateTime,
    pub time: String,
    pub status: BookingStatus,
}
