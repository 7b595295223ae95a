pub mod directory;

pub use directory::{DirectoryError, DirectoryStore, DoctorDirectory};
