use std::fmt::Write;

use appointment_cell::FieldFeedback;

use crate::pages::{BookingPage, LandingPage, Page, ProfilePage, NOT_FOUND_MESSAGE, SLOT_PLACEHOLDER};

/// Plain-text rendering of a page, one element per line.
pub fn render(page: &Page) -> String {
    let mut out = String::new();
    match page {
        Page::Landing(landing) => render_landing(&mut out, landing),
        Page::Profile(profile) => render_profile(&mut out, profile),
        Page::Booking(booking) => render_booking(&mut out, booking),
        Page::DoctorNotFound => out.push_str(NOT_FOUND_MESSAGE),
    }
    out
}

fn render_landing(out: &mut String, landing: &LandingPage) {
    let _ = writeln!(out, "Find a Doctor");
    if !landing.query.is_empty() {
        let _ = writeln!(out, "Search: {}", landing.query);
    }
    for card in &landing.cards {
        let _ = writeln!(
            out,
            "- {} | {} | [{}] {} | {}",
            card.name, card.specialization, card.badge, card.status, card.profile_path
        );
    }
}

fn render_profile(out: &mut String, profile: &ProfilePage) {
    let _ = writeln!(out, "{}", profile.doctor.name);
    let _ = writeln!(out, "{}", profile.doctor.specialization);
    let _ = writeln!(out, "Schedule");
    for line in &profile.schedule {
        let _ = writeln!(out, "  {}", line);
    }
    let _ = writeln!(out, "Book Appointment -> {}", profile.booking_path);
}

fn render_booking(out: &mut String, booking: &BookingPage) {
    let form = &booking.form;
    let _ = writeln!(out, "Book Appointment with {}", booking.doctor.name);
    let _ = writeln!(out, "Specialty: {}", booking.doctor.specialization);
    let _ = writeln!(out, "Status: {}", booking.doctor.status);

    if let Some(banner) = form.error_banner() {
        let _ = writeln!(out, "! {}", banner);
    }

    for (field, value, feedback) in booking.fields() {
        let mark = match &feedback {
            FieldFeedback::Neutral => " ",
            FieldFeedback::Valid => "+",
            FieldFeedback::Invalid(_) => "x",
        };
        let _ = writeln!(out, "[{}] {} *: {}", mark, field.label(), value);
        if let FieldFeedback::Invalid(msg) = feedback {
            let _ = writeln!(out, "    {}", msg);
        }
    }

    let _ = writeln!(
        out,
        "Dates {} to {} (select a date within the next {} months)",
        booking.min_date, booking.max_date, booking.horizon_months
    );
    let _ = writeln!(out, "Slots: {}", SLOT_PLACEHOLDER);
    for slot in &booking.slots {
        let _ = writeln!(out, "  {}", slot);
    }

    let disabled = if form.buttons_disabled() { " (disabled)" } else { "" };
    let _ = writeln!(out, "[{}]{}", form.submit_label(), disabled);
    let _ = writeln!(out, "[Back to Doctor Profile]{}", disabled);
}
