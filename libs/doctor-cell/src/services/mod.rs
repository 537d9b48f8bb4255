pub mod directory;
pub mod slots;

pub use directory::{DoctorDirectory, DoctorSource};
pub use slots::available_slots;
