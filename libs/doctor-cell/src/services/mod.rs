pub mod filter;
pub mod listing;

pub use filter::{filter_by_speciality, related_doctors};
pub use listing::ListingService;
