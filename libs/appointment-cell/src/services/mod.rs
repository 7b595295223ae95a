pub mod booking;
pub mod detail;
pub mod slots;

pub use booking::{BookingHandler, LoggingBookingHandler};
pub use detail::{DetailSession, DetailState, DetailView};
pub use slots::{generate_slots, SlotSchedule};
