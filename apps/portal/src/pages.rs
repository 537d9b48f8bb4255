use serde::Serialize;

use appointment_cell::{BookingRules, FieldFeedback, FormField, FormState};
use doctor_cell::{available_slots, Doctor, DoctorDirectory};

use crate::router::Route;

pub const NOT_FOUND_MESSAGE: &str = "Doctor not found";
pub const SLOT_PLACEHOLDER: &str = "Select a time slot";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum Page {
    Landing(LandingPage),
    Profile(ProfilePage),
    Booking(BookingPage),
    DoctorNotFound,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LandingPage {
    pub query: String,
    pub cards: Vec<DoctorCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoctorCard {
    pub id: String,
    pub name: String,
    pub specialization: String,
    pub image: String,
    pub status: String,
    pub badge: &'static str,
    pub profile_path: String,
}

impl From<&Doctor> for DoctorCard {
    fn from(doctor: &Doctor) -> Self {
        Self {
            id: doctor.id.clone(),
            name: doctor.name.clone(),
            specialization: doctor.specialization.clone(),
            image: doctor.image.clone(),
            status: doctor.status.label().to_string(),
            badge: doctor.status.badge_variant(),
            profile_path: doctor.profile_path(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfilePage {
    pub doctor: Doctor,
    pub schedule: Vec<String>,
    pub booking_path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingPage {
    pub doctor: Doctor,
    pub slots: Vec<String>,
    pub min_date: String,
    pub max_date: String,
    pub horizon_months: u32,
    pub form: FormState,
}

impl BookingPage {
    pub fn fields(&self) -> Vec<(FormField, &str, FieldFeedback)> {
        FormField::ALL
            .into_iter()
            .map(|field| (field, self.form.values.get(field), self.form.feedback(field)))
            .collect()
    }
}

/// Builds the page for `route`. `form` is the booking form owned by the current page.
pub fn resolve(route: &Route, directory: &DoctorDirectory, rules: &BookingRules, form: &FormState) -> Page {
    match route {
        Route::Landing { query } => Page::Landing(LandingPage {
            query: query.clone(),
            cards: directory.search(query).into_iter().map(DoctorCard::from).collect(),
        }),
        Route::DoctorProfile(id) => match directory.find(id) {
            Some(doctor) => Page::Profile(ProfilePage {
                doctor: doctor.clone(),
                schedule: doctor.schedule.iter().map(|day| day.summary()).collect(),
                booking_path: doctor.booking_path(),
            }),
            None => Page::DoctorNotFound,
        },
        Route::BookAppointment(id) => match directory.find(id) {
            Some(doctor) => {
                let (min_date, max_date) = rules.booking_window();
                Page::Booking(BookingPage {
                    doctor: doctor.clone(),
                    slots: available_slots(doctor),
                    min_date,
                    max_date,
                    horizon_months: rules.horizon_months,
                    form: form.clone(),
                })
            }
            None => Page::DoctorNotFound,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use shared_utils::test_utils::test_today;

    fn directory() -> DoctorDirectory {
        DoctorDirectory::from_fixture().unwrap()
    }

    fn rules() -> BookingRules {
        BookingRules::new(test_today())
    }

    #[test]
    fn test_landing_lists_search_hits() {
        let route = Route::Landing { query: "DERM".to_string() };
        let page = resolve(&route, &directory(), &rules(), &FormState::new());
        let landing = assert_matches!(page, Page::Landing(landing) => landing);
        assert_eq!(landing.cards.len(), 1);
        assert_eq!(landing.cards[0].badge, "warning");
        assert_eq!(landing.cards[0].profile_path, "/doctors/d2");
    }

    #[test]
    fn test_profile_schedule_lines() {
        let page = resolve(&Route::DoctorProfile("d1".to_string()), &directory(), &rules(), &FormState::new());
        let profile = assert_matches!(page, Page::Profile(profile) => profile);
        assert_eq!(
            profile.schedule,
            vec!["Monday: 09:00, 09:30, 10:00", "Tuesday: 11:00, 11:30"]
        );
        assert_eq!(profile.booking_path, "/doctors/d1/book");
    }

    #[test]
    fn test_booking_page_for_doctor_on_leave_still_renders() {
        let page = resolve(&Route::BookAppointment("d3".to_string()), &directory(), &rules(), &FormState::new());
        let booking = assert_matches!(page, Page::Booking(booking) => booking);
        assert!(booking.slots.is_empty());
        assert_eq!(booking.min_date, "2024-06-15");
        assert_eq!(booking.max_date, "2024-09-15");
        assert!(booking.fields().iter().all(|(_, _, fb)| *fb == FieldFeedback::Neutral));
    }

    #[test]
    fn test_unknown_doctor() {
        for route in [Route::DoctorProfile("nope".to_string()), Route::BookAppointment("nope".to_string())] {
            assert_eq!(resolve(&route, &directory(), &rules(), &FormState::new()), Page::DoctorNotFound);
        }
    }
}
