use chrono::{Datelike, Duration, NaiveDate};

/// Adds whole months to `date`, rolling an overflowing day-of-month forward into the
/// following month instead of clamping it (Nov 30 + 3 months is Mar 2, or Mar 1 in a
/// leap year).
///
/// Returns `None` only when the result falls outside chrono's supported range.
pub fn add_months_rollover(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    let zero_based = date.month0() as i64 + months as i64;
    let year = date.year() as i64 + zero_based.div_euclid(12);
    let month = zero_based.rem_euclid(12) as u32 + 1;

    let first_of_month = NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, 1)?;
    first_of_month.checked_add_signed(Duration::days(date.day0() as i64))
}

/// Parses an HTML date-input value (`YYYY-MM-DD`).
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

pub fn format_input_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
