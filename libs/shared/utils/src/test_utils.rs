use chrono::NaiveDate;

use crate::clock::FixedClock;

/// Day used as "today" across the booking tests.
pub const TEST_TODAY: (i32, u32, u32) = (2024, 6, 15);

pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

pub fn test_today() -> NaiveDate {
    let (y, m, d) = TEST_TODAY;
    ymd(y, m, d)
}

pub fn test_clock() -> FixedClock {
    FixedClock::new(test_today())
}

/// Installs a test-writer subscriber so `tracing` output shows up under `cargo test -- --nocapture`.
/// Safe to call from every test; only the first call wins.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
