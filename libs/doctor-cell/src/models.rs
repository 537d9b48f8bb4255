// libs/doctor-cell/src/models.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use shared_models::AppError;

// ==============================================================================
// CORE DOCTOR MODELS
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialization: String,
    pub image: String,
    pub status: DoctorStatus,
    #[serde(default)]
    pub schedule: Vec<ScheduleDay>,
}

impl Doctor {
    /// Case-insensitive substring match on name or specialization.
    /// `needle` must already be lowercased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.specialization.to_lowercase().contains(needle)
    }

    pub fn profile_path(&self) -> String {
        format!("/doctors/{}", self.id)
    }

    pub fn booking_path(&self) -> String {
        format!("/doctors/{}/book", self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDay {
    pub day: String,
    pub slots: Vec<String>,
}

impl ScheduleDay {
    pub fn new(day: impl Into<String>, slots: &[&str]) -> Self {
        Self {
            day: day.into(),
            slots: slots.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Profile line, e.g. `Monday: 09:00, 09:30`.
    pub fn summary(&self) -> String {
        format!("{}: {}", self.day, self.slots.join(", "))
    }
}

/// Display badge only. Nothing gates booking on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DoctorStatus {
    #[serde(rename = "Available Today")]
    AvailableToday,
    #[serde(rename = "Fully Booked")]
    FullyBooked,
    #[serde(rename = "On Leave")]
    OnLeave,
}

impl DoctorStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DoctorStatus::AvailableToday => "Available Today",
            DoctorStatus::FullyBooked => "Fully Booked",
            DoctorStatus::OnLeave => "On Leave",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            DoctorStatus::AvailableToday => "success",
            DoctorStatus::FullyBooked => "warning",
            DoctorStatus::OnLeave => "secondary",
        }
    }
}

impl fmt::Display for DoctorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ==============================================================================
// ERRORS
// ==============================================================================

#[derive(Error, Debug)]
pub enum DoctorError {
    #[error("Doctor not found: {0}")]
    NotFound(String),

    #[error("Doctor fixture error: {0}")]
    Fixture(String),

    #[error("Doctor fixture could not be read: {0}")]
    Io(#[from] std::io::Error),

    #[error("Doctor fixture is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<DoctorError> for AppError {
    fn from(err: DoctorError) -> Self {
        match err {
            DoctorError::NotFound(_) => AppError::NotFound(err.to_string()),
            DoctorError::Fixture(_) | DoctorError::Io(_) | DoctorError::Serialization(_) => {
                AppError::Config(err.to_string())
            }
        }
    }
}
