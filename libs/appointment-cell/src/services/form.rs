// libs/appointment-cell/src/services/form.rs
use tracing::debug;

use crate::models::{AppointmentRequest, FieldFeedback, FormEvent, FormField, FormState};
use crate::services::validation::{validate_field, validate_form, BookingRules};

pub const ERROR_BANNER: &str = "Please correct the errors below before submitting.";

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pure transition: consumes the current state and returns the next one.
    pub fn apply(mut self, event: FormEvent, rules: &BookingRules) -> Self {
        match event {
            FormEvent::Changed(field, value) => {
                self.values.set(field, value);
                self.errors.set(field, None);
            }
            FormEvent::Blurred(field) => {
                self.touched.touch(field);
                let error = validate_field(field, &self.values, rules);
                self.errors.set(field, error);
            }
            FormEvent::SubmitRequested => {
                if self.is_submitting {
                    debug!("Submit ignored, booking already in flight");
                    return self;
                }
                self.touched.touch_all();
                self.errors = validate_form(&self.values, rules);
                self.is_submitting = !self.errors.has_errors();
                debug!(
                    "Submit requested: {} field error(s), submitting = {}",
                    self.errors.count(),
                    self.is_submitting
                );
            }
            FormEvent::SubmitSucceeded | FormEvent::SubmitFailed => {
                self.is_submitting = false;
            }
        }
        self
    }

    /// In-place variant of [`FormState::apply`] for callers holding `&mut FormState`.
    pub fn dispatch(&mut self, event: FormEvent, rules: &BookingRules) {
        let current = std::mem::take(self);
        *self = current.apply(event, rules);
    }

    pub fn feedback(&self, field: FormField) -> FieldFeedback {
        if !self.touched.get(field) {
            return FieldFeedback::Neutral;
        }
        match self.errors.get(field) {
            Some(msg) => FieldFeedback::Invalid(msg.to_string()),
            None if field.is_blank(self.values.get(field)) => FieldFeedback::Neutral,
            None => FieldFeedback::Valid,
        }
    }

    pub fn shows_error_banner(&self) -> bool {
        self.errors.has_errors()
    }

    pub fn error_banner(&self) -> Option<&'static str> {
        self.shows_error_banner().then_some(ERROR_BANNER)
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting {
            "Booking..."
        } else {
            "Book Appointment"
        }
    }

    /// Submit and back buttons are disabled while a booking is in flight.
    pub fn buttons_disabled(&self) -> bool {
        self.is_submitting
    }

    pub fn to_request(&self, doctor_id: &str) -> AppointmentRequest {
        AppointmentRequest {
            doctor_id: doctor_id.to_string(),
            patient_name: self.values.patient_name.clone(),
            patient_email: self.values.patient_email.clone(),
            date: self.values.date.clone(),
            time: self.values.time.clone(),
        }
    }
}
