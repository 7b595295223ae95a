// libs/appointment-cell/src/services/booking.rs
use async_trait::async_trait;
use tracing::info;

use crate::error::BookingError;
use crate::models::{BookingReceipt, BookingStatus, SlotReservation};

/// Host-supplied booking side effect behind the "Book an appointment" action.
#[async_trait]
pub trait BookingHandler: Send + Sync {
    async fn book(&self, reservation: SlotReservation) -> Result<BookingReceipt, BookingError>;
}

/// Default handler: records the request in the log and acknowledges it
/// without reserving anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingBookingHandler;

#[async_trait]
impl BookingHandler for LoggingBookingHandler {
    async fn book(&self, reservation: SlotReservation) -> Result<BookingReceipt, BookingError> {
        info!(
            "Booking requested for doctor {} ({}) at {}",
            reservation.doctor_id, reservation.doctor_name, reservation.datetime
        );

        Ok(BookingReceipt {
            doctor_id: reservation.doctor_id,
            datetime: reservation.datetime,
            time: reservation.time,
            status: BookingStatus::Requested,
        })
    }
}
