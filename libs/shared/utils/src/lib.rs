pub mod calendar;
pub mod clock;
pub mod test_utils;

pub use clock::{Clock, FixedClock, SystemClock};
