pub mod doctor;
pub mod error;
pub mod routes;
