use std::sync::Arc;

use tracing::{debug, info};

use appointment_cell::{
    BookingService, BookingSink, FormEvent, FormField, FormState, LogNotifier, Navigator, Notifier,
    SimulatedBookingSink, SubmitOutcome,
};
use doctor_cell::DoctorDirectory;
use shared_config::AppConfig;
use shared_models::AppError;
use shared_utils::Clock;

use crate::pages::{resolve, Page};
use crate::router::{NavigationHistory, Route};

/// One browsing session: the current route, its booking form and the navigation history.
pub struct PortalSession {
    directory: Arc<DoctorDirectory>,
    booking: BookingService,
    history: Arc<NavigationHistory>,
    route: Route,
    form: FormState,
}

impl PortalSession {
    pub fn new(config: &AppConfig, directory: DoctorDirectory, clock: Arc<dyn Clock>) -> Self {
        let sink = Arc::new(SimulatedBookingSink::new(config, clock.clone()));
        Self::with_ports(config, directory, sink, Arc::new(LogNotifier), clock)
    }

    pub fn with_ports(
        config: &AppConfig,
        directory: DoctorDirectory,
        sink: Arc<dyn BookingSink>,
        notifier: Arc<dyn Notifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let home = Route::home();
        let history = Arc::new(NavigationHistory::new(&home.path()));
        let booking = BookingService::new(config, sink, history.clone(), notifier, clock);

        Self {
            directory: Arc::new(directory),
            booking,
            history,
            route: home,
            form: FormState::new(),
        }
    }

    /// Navigates to `path`. The booking form is discarded on every navigation.
    pub fn open(&mut self, path: &str) -> Result<Page, AppError> {
        let route = Route::parse(path).ok_or_else(|| AppError::NotFound(format!("No page at {}", path)))?;
        self.history.navigate(&route.path());
        self.enter(route);
        Ok(self.page())
    }

    pub fn page(&self) -> Page {
        resolve(&self.route, &self.directory, &self.booking.rules(), &self.form)
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn history(&self) -> &NavigationHistory {
        &self.history
    }

    pub fn input(&mut self, field: FormField, value: impl Into<String>) {
        self.booking.handle(&mut self.form, FormEvent::Changed(field, value.into()));
    }

    pub fn blur(&mut self, field: FormField) {
        self.booking.handle(&mut self.form, FormEvent::Blurred(field));
    }

    /// Submits the booking form of the current page.
    pub async fn submit(&mut self) -> Result<SubmitOutcome, AppError> {
        let Route::BookAppointment(id) = &self.route else {
            return Err(AppError::NotFound("No booking form on this page".to_string()));
        };
        let doctor = self
            .directory
            .find(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Doctor not found".to_string()))?;

        let outcome = self.booking.submit(&mut self.form, &doctor).await;
        self.follow_history();
        Ok(outcome)
    }

    /// "Back to Doctor Profile" on the booking page.
    pub fn back_to_profile(&mut self) -> Result<Page, AppError> {
        let Route::BookAppointment(id) = &self.route else {
            return Err(AppError::NotFound("No booking form on this page".to_string()));
        };
        if self.form.buttons_disabled() {
            return Err(AppError::ValidationError("Booking in progress".to_string()));
        }
        let doctor = self
            .directory
            .find(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Doctor not found".to_string()))?;

        self.booking.back_to_profile(&doctor);
        self.follow_history();
        Ok(self.page())
    }

    /// Picks up navigation performed by the booking service.
    fn follow_history(&mut self) {
        let Some(current) = self.history.current() else {
            return;
        };
        if current == self.route.path() {
            return;
        }
        if let Some(route) = Route::parse(&current) {
            info!("Following navigation to {}", current);
            self.enter(route);
        }
    }

    fn enter(&mut self, route: Route) {
        debug!("Entering {:?}", route);
        self.route = route;
        self.form = FormState::new();
    }
}
