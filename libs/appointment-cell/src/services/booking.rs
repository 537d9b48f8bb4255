// libs/appointment-cell/src/services/booking.rs
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, error, info};
use uuid::Uuid;

use doctor_cell::Doctor;
use shared_config::AppConfig;
use shared_utils::Clock;

use crate::models::{
    AppointmentError, AppointmentRequest, BookingConfirmation, FormEvent, FormState, SubmitOutcome,
};
use crate::services::validation::BookingRules;

pub const BOOKED_MESSAGE: &str = "Appointment booked successfully!";
pub const FAILED_MESSAGE: &str = "Failed to book appointment. Please try again.";

/// Where validated booking requests are sent.
#[async_trait]
pub trait BookingSink: Send + Sync {
    async fn submit(&self, request: AppointmentRequest) -> Result<BookingConfirmation, AppointmentError>;
}

pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Blocking user-facing acknowledgement (success or failure).
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

/// Stand-in for a booking backend: waits, logs the request and always succeeds.
pub struct SimulatedBookingSink {
    delay: Duration,
    clock: Arc<dyn Clock>,
}

impl SimulatedBookingSink {
    pub fn new(config: &AppConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            delay: config.booking_delay(),
            clock,
        }
    }

    pub fn with_delay(delay: Duration, clock: Arc<dyn Clock>) -> Self {
        Self { delay, clock }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl BookingSink for SimulatedBookingSink {
    async fn submit(&self, request: AppointmentRequest) -> Result<BookingConfirmation, AppointmentError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let payload = serde_json::to_string(&request)?;
        info!("Booking request received: {}", payload);

        Ok(BookingConfirmation {
            reference: Uuid::new_v4(),
            doctor_id: request.doctor_id,
            booked_at: self.clock.now(),
        })
    }
}

/// Notifier that only writes to the log.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn alert(&self, message: &str) {
        info!("alert: {}", message);
    }
}

pub struct BookingService {
    sink: Arc<dyn BookingSink>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    clock: Arc<dyn Clock>,
    horizon_months: u32,
}

impl BookingService {
    pub fn new(
        config: &AppConfig,
        sink: Arc<dyn BookingSink>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            sink,
            navigator,
            notifier,
            clock,
            horizon_months: config.booking_horizon_months,
        }
    }

    /// Rules for the current day. Recomputed on every call so a page left open past
    /// midnight validates against the new date.
    pub fn rules(&self) -> BookingRules {
        BookingRules::new(self.clock.today()).with_horizon_months(self.horizon_months)
    }

    /// Apply a change or blur event against today's rules.
    pub fn handle(&self, state: &mut FormState, event: FormEvent) {
        state.dispatch(event, &self.rules());
    }

    /// Marks every field touched, validates, and sends the booking if the form is clean.
    /// Navigates home exactly once on success; never navigates otherwise.
    pub async fn submit(&self, state: &mut FormState, doctor: &Doctor) -> SubmitOutcome {
        if state.is_submitting {
            return SubmitOutcome::InFlight;
        }

        let rules = self.rules();
        state.dispatch(FormEvent::SubmitRequested, &rules);

        if !state.is_submitting {
            debug!("Booking for doctor {} rejected: {}", doctor.id, state.errors);
            return SubmitOutcome::Rejected(state.errors.clone());
        }

        let request = state.to_request(&doctor.id);
        match self.sink.submit(request).await {
            Ok(confirmation) => {
                info!(
                    "Appointment booked with doctor {} (reference {})",
                    confirmation.doctor_id, confirmation.reference
                );
                self.notifier.alert(BOOKED_MESSAGE);
                self.navigator.navigate("/");
                state.dispatch(FormEvent::SubmitSucceeded, &rules);
                SubmitOutcome::Booked(confirmation)
            }
            Err(e) => {
                error!("Booking with doctor {} failed: {}", doctor.id, e);
                self.notifier.alert(FAILED_MESSAGE);
                state.dispatch(FormEvent::SubmitFailed, &rules);
                SubmitOutcome::Failed(e.to_string())
            }
        }
    }

    /// "Back to Doctor Profile".
    pub fn back_to_profile(&self, doctor: &Doctor) {
        self.navigator.navigate(&doctor.profile_path());
    }
}
