use thiserror::Error;

use shared_models::error::AppError;

#[derive(Error, Debug, PartialEq)]
pub enum AppointmentError {
    #[error("Doctor not found: {0}")]
    DoctorNotFound(String),

    #[error("Day index {index} is out of range (0..{available})")]
    InvalidDay { index: usize, available: usize },

    #[error("Slot {0} is not offered on the selected day")]
    UnknownSlot(String),

    #[error("Select a time slot before booking")]
    NoSlotSelected,

    #[error("Booking failed: {0}")]
    Booking(#[from] BookingError),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BookingError {
    #[error("Booking rejected: {0}")]
    Rejected(String),

    #[error("Booking service unavailable: {0}")]
    Unavailable(String),
}

impl From<AppointmentError> for AppError {
    fn from(err: AppointmentError) -> Self {
        match err {
            AppointmentError::DoctorNotFound(_) => AppError::NotFound(err.to_string()),
            AppointmentError::InvalidDay { .. } | AppointmentError::UnknownSlot(_) => {
                AppError::BadRequest(err.to_string())
            }
            AppointmentError::NoSlotSelected => AppError::ValidationError(err.to_string()),
            AppointmentError::Booking(BookingError::Rejected(_)) => AppError::ValidationError(err.to_string()),
            AppointmentError::Booking(BookingError::Unavailable(_)) => AppError::Unavailable(err.to_string()),
        }
    }
}
