use serde::Serialize;
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_BOOKING_DELAY_MS: u64 = 1000;
pub const DEFAULT_BOOKING_HORIZON_MONTHS: u32 = 3;
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, Serialize)]
pub struct AppConfig {
    pub booking_delay_ms: u64,
    pub booking_horizon_months: u32,
    pub doctor_fixture_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            booking_delay_ms: DEFAULT_BOOKING_DELAY_MS,
            booking_horizon_months: DEFAULT_BOOKING_HORIZON_MONTHS,
            doctor_fixture_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            booking_delay_ms: parse_var("BOOKING_DELAY_MS", DEFAULT_BOOKING_DELAY_MS),
            booking_horizon_months: parse_var("BOOKING_HORIZON_MONTHS", DEFAULT_BOOKING_HORIZON_MONTHS),
            doctor_fixture_path: env::var("DOCTOR_FIXTURE_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            log_filter: log_filter_from_env(),
        };

        if config.booking_horizon_months == 0 {
            warn!("BOOKING_HORIZON_MONTHS is 0, only same-day appointments can be booked");
        }

        config
    }

    pub fn booking_delay(&self) -> Duration {
        Duration::from_millis(self.booking_delay_ms)
    }
}

/// `RUST_LOG`, or `info` when unset. Readable before a subscriber exists, so the
/// binary can install logging ahead of `AppConfig::from_env`.
pub fn log_filter_from_env() -> String {
    env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string())
}

fn parse_var<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display + Copy,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{} has invalid value {:?}, using default {}", key, raw, default);
            default
        }),
        Err(_) => default,
    }
}
