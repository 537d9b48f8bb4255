// =====================================================================================
// VALIDATION SERVICE - BOOKING FORM FIELD RULES
// =====================================================================================

use chrono::NaiveDate;

use shared_config::DEFAULT_BOOKING_HORIZON_MONTHS;
use shared_utils::calendar::{add_months_rollover, format_input_date, parse_input_date};

use crate::models::{FormErrors, FormField, FormValues};

/// Date context the validators run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingRules {
    pub today: NaiveDate,
    pub horizon_months: u32,
}

impl BookingRules {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            horizon_months: DEFAULT_BOOKING_HORIZON_MONTHS,
        }
    }

    pub fn with_horizon_months(mut self, months: u32) -> Self {
        self.horizon_months = months;
        self
    }

    /// Last bookable day, inclusive.
    pub fn latest_date(&self) -> NaiveDate {
        add_months_rollover(self.today, self.horizon_months).unwrap_or(NaiveDate::MAX)
    }

    /// `(min, max)` bounds for the date input, formatted `YYYY-MM-DD`.
    pub fn booking_window(&self) -> (String, String) {
        (format_input_date(self.today), format_input_date(self.latest_date()))
    }
}

pub fn validate_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Some("Patient name is required".to_string());
    }
    if trimmed.chars().count() < 2 {
        return Some("Name must be at least 2 characters long".to_string());
    }
    if !trimmed.chars().all(|c| c.is_ascii_alphabetic() || c.is_whitespace()) {
        return Some("Name should only contain letters and spaces".to_string());
    }
    None
}

pub fn validate_email(email: &str) -> Option<String> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Some("Email address is required".to_string());
    }
    if !is_email_shaped(trimmed) {
        return Some("Please enter a valid email address".to_string());
    }
    None
}

/// `local@domain.tld`: exactly one '@', no whitespace anywhere, a non-empty local part,
/// and a '.' in the domain with at least one character on each side of it.
fn is_email_shaped(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

pub fn validate_date(date: &str, rules: &BookingRules) -> Option<String> {
    if date.is_empty() {
        return Some("Appointment date is required".to_string());
    }

    let Some(selected) = parse_input_date(date) else {
        return Some("Please enter a valid date".to_string());
    };

    if selected < rules.today {
        return Some("Appointment date cannot be in the past".to_string());
    }
    if selected > rules.latest_date() {
        return Some(format!(
            "Appointments can only be booked up to {} months in advance",
            rules.horizon_months
        ));
    }
    None
}

/// Slot membership is not re-checked: the value can only come from the offered list.
pub fn validate_time(time: &str) -> Option<String> {
    if time.is_empty() {
        return Some("Please select an available time slot".to_string());
    }
    None
}

pub fn validate_field(field: FormField, values: &FormValues, rules: &BookingRules) -> Option<String> {
    let value = values.get(field);
    match field {
        FormField::PatientName => validate_name(value),
        FormField::PatientEmail => validate_email(value),
        FormField::Date => validate_date(value, rules),
        FormField::Time => validate_time(value),
    }
}

pub fn validate_form(values: &FormValues, rules: &BookingRules) -> FormErrors {
    let mut errors = FormErrors::default();
    for field in FormField::ALL {
        errors.set(field, validate_field(field, values, rules));
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rules() -> BookingRules {
        BookingRules::new(ymd(2024, 6, 15))
    }

    #[test]
    fn test_name_rejections() {
        assert_eq!(validate_name("").as_deref(), Some("Patient name is required"));
        assert_eq!(validate_name(" ").as_deref(), Some("Patient name is required"));
        assert_eq!(validate_name("A").as_deref(), Some("Name must be at least 2 characters long"));
        assert_eq!(
            validate_name("John123").as_deref(),
            Some("Name should only contain letters and spaces")
        );
        assert!(validate_name("O'Brien").is_some());
        assert!(validate_name("José").is_some());
    }

    #[test]
    fn test_name_accepts_letters_and_spaces() {
        assert_eq!(validate_name("Jo"), None);
        assert_eq!(validate_name("Mary Ann"), None);
        assert_eq!(validate_name("  Mary   Ann  "), None);
        // trimmed before the length check
        assert!(validate_name(" J ").is_some());
    }

    #[test]
    fn test_email_shape() {
        for bad in ["", "a@b", "a.com", "a @b.com", "@b.com", "a@@b.com", "a@b@c.com", "a@.com", "a@b.", "a@b.c d"] {
            assert!(validate_email(bad).is_some(), "{:?} should be rejected", bad);
        }
        for good in ["a@b.com", "  a@b.com  ", "first.last@sub.example.org", "a@.b.c", "x@y.z"] {
            assert_eq!(validate_email(good), None, "{:?} should be accepted", good);
        }
        assert_eq!(validate_email("   ").as_deref(), Some("Email address is required"));
    }

    #[test]
    fn test_date_window() {
        let rules = rules();
        assert_eq!(
            validate_date("2024-06-14", &rules).as_deref(),
            Some("Appointment date cannot be in the past")
        );
        assert_eq!(
            validate_date("2024-09-16", &rules).as_deref(),
            Some("Appointments can only be booked up to 3 months in advance")
        );
        assert_eq!(validate_date("2024-06-15", &rules), None);
        assert_eq!(validate_date("2024-09-15", &rules), None);
        assert_eq!(validate_date("", &rules).as_deref(), Some("Appointment date is required"));
        assert_eq!(validate_date("tomorrow", &rules).as_deref(), Some("Please enter a valid date"));
    }

    #[test]
    fn test_date_window_uses_rollover() {
        let rules = BookingRules::new(ymd(2024, 11, 30));
        assert_eq!(rules.latest_date(), ymd(2025, 3, 2));
        assert_eq!(validate_date("2025-03-02", &rules), None);
        assert!(validate_date("2025-03-03", &rules).is_some());
    }

    #[test]
    fn test_custom_horizon() {
        let rules = rules().with_horizon_months(1);
        assert_eq!(validate_date("2024-07-15", &rules), None);
        assert_eq!(
            validate_date("2024-07-16", &rules).as_deref(),
            Some("Appointments can only be booked up to 1 months in advance")
        );
    }

    #[test]
    fn test_booking_window() {
        assert_eq!(
            rules().booking_window(),
            ("2024-06-15".to_string(), "2024-09-15".to_string())
        );
    }

    #[test]
    fn test_time() {
        assert!(validate_time("").is_some());
        assert_eq!(validate_time("Monday 09:00"), None);
        assert_eq!(validate_time(" "), None);
    }

    #[test]
    fn test_validate_form_reports_every_field() {
        let errors = validate_form(&FormValues::default(), &rules());
        assert_eq!(errors.count(), 4);

        let values = FormValues {
            patient_name: "Mary Ann".to_string(),
            patient_email: "mary@example.com".to_string(),
            date: "2024-07-01".to_string(),
            time: "Monday 09:00".to_string(),
        };
        assert!(!validate_form(&values, &rules()).has_errors());
    }
}
