// libs/appointment-cell/src/models.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

use shared_models::AppError;

// ==============================================================================
// FORM MODELS
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    PatientName,
    PatientEmail,
    Date,
    Time,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::PatientName,
        FormField::PatientEmail,
        FormField::Date,
        FormField::Time,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::PatientName => "Patient Name",
            FormField::PatientEmail => "Email Address",
            FormField::Date => "Appointment Date",
            FormField::Time => "Available Time Slots",
        }
    }

    /// Name and email count as filled only once trimmed; date and time are taken as-is.
    pub fn is_blank(&self, value: &str) -> bool {
        match self {
            FormField::PatientName | FormField::PatientEmail => value.trim().is_empty(),
            FormField::Date | FormField::Time => value.is_empty(),
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormField::PatientName => write!(f, "patientName"),
            FormField::PatientEmail => write!(f, "patientEmail"),
            FormField::Date => write!(f, "date"),
            FormField::Time => write!(f, "time"),
        }
    }
}

impl std::str::FromStr for FormField {
    type Err = AppointmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "patientName" | "name" => Ok(FormField::PatientName),
            "patientEmail" | "email" => Ok(FormField::PatientEmail),
            "date" => Ok(FormField::Date),
            "time" => Ok(FormField::Time),
            other => Err(AppointmentError::ValidationError(format!("Unknown form field: {}", other))),
        }
    }
}

/// Raw field input, exactly as typed or selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub patient_name: String,
    pub patient_email: String,
    pub date: String,
    pub time: String,
}

impl FormValues {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::PatientName => &self.patient_name,
            FormField::PatientEmail => &self.patient_email,
            FormField::Date => &self.date,
            FormField::Time => &self.time,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::PatientName => self.patient_name = value,
            FormField::PatientEmail => self.patient_email = value,
            FormField::Date => self.date = value,
            FormField::Time => self.time = value,
        }
    }
}

/// Per-field error messages. `None` means the field passed its last evaluation
/// (or has not been evaluated since it last changed).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

impl FormErrors {
    pub fn get(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::PatientName => self.patient_name.as_deref(),
            FormField::PatientEmail => self.patient_email.as_deref(),
            FormField::Date => self.date.as_deref(),
            FormField::Time => self.time.as_deref(),
        }
    }

    pub fn set(&mut self, field: FormField, error: Option<String>) {
        match field {
            FormField::PatientName => self.patient_name = error,
            FormField::PatientEmail => self.patient_email = error,
            FormField::Date => self.date = error,
            FormField::Time => self.time = error,
        }
    }

    pub fn has_errors(&self) -> bool {
        FormField::ALL.iter().any(|field| self.get(*field).is_some())
    }

    pub fn count(&self) -> usize {
        FormField::ALL.iter().filter(|field| self.get(**field).is_some()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> + '_ {
        FormField::ALL
            .into_iter()
            .filter_map(move |field| self.get(field).map(|msg| (field, msg)))
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, msg)| format!("{}: {}", field, msg))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TouchedFields {
    pub patient_name: bool,
    pub patient_email: bool,
    pub date: bool,
    pub time: bool,
}

impl TouchedFields {
    pub fn get(&self, field: FormField) -> bool {
        match field {
            FormField::PatientName => self.patient_name,
            FormField::PatientEmail => self.patient_email,
            FormField::Date => self.date,
            FormField::Time => self.time,
        }
    }

    pub fn touch(&mut self, field: FormField) {
        match field {
            FormField::PatientName => self.patient_name = true,
            FormField::PatientEmail => self.patient_email = true,
            FormField::Date => self.date = true,
            FormField::Time => self.time = true,
        }
    }

    pub fn touch_all(&mut self) {
        for field in FormField::ALL {
            self.touch(field);
        }
    }
}

/// Booking form state, owned by a single page instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub values: FormValues,
    pub errors: FormErrors,
    pub touched: TouchedFields,
    pub is_submitting: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Changed(FormField, String),
    Blurred(FormField),
    SubmitRequested,
    SubmitSucceeded,
    SubmitFailed,
}

/// How a single input is decorated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldFeedback {
    Neutral,
    Valid,
    Invalid(String),
}

// ==============================================================================
// BOOKING MODELS
// ==============================================================================

/// Submission payload. Serialized camelCase, which is also the shape that gets logged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRequest {
    pub doctor_id: String,
    pub patient_name: String,
    pub patient_email: String,
    /// YYYY-MM-DD
    pub date: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub reference: Uuid,
    pub doctor_id: String,
    pub booked_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Rejected(FormErrors),
    /// A submission was already in flight.
    InFlight,
    Booked(BookingConfirmation),
    Failed(String),
}

// ==============================================================================
// ERRORS
// ==============================================================================

#[derive(Error, Debug)]
pub enum AppointmentError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Booking submission failed: {0}")]
    SubmissionFailed(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl From<AppointmentError> for AppError {
    fn from(err: AppointmentError) -> Self {
        match err {
            AppointmentError::ValidationError(msg) => AppError::ValidationError(msg),
            other => AppError::Internal(other.to_string()),
        }
    }
}
