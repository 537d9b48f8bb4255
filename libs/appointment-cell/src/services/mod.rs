pub mod booking;
pub mod form;
pub mod validation;

pub use booking::{BookingService, BookingSink, LogNotifier, Navigator, Notifier, SimulatedBookingSink};
pub use form::ERROR_BANNER;
pub use validation::{
    validate_date, validate_email, validate_field, validate_form, validate_name, validate_time,
    BookingRules,
};
