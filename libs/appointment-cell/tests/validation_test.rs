use appointment_cell::{
    validate_date, validate_email, validate_form, validate_name, validate_time, BookingRules,
    FormField, FormValues,
};
use shared_utils::test_utils::{test_today, ymd};

#[test]
fn test_name_examples() {
    for rejected in ["", " ", "A", "John123"] {
        assert!(validate_name(rejected).is_some(), "{:?}", rejected);
    }
    for accepted in ["Jo", "Mary Ann"] {
        assert_eq!(validate_name(accepted), None, "{:?}", accepted);
    }
}

#[test]
fn test_email_examples() {
    for rejected in ["", "a@b", "a.com", "a @b.com"] {
        assert!(validate_email(rejected).is_some(), "{:?}", rejected);
    }
    assert_eq!(validate_email("a@b.com"), None);
}

#[test]
fn test_date_examples_around_fixed_today() {
    let rules = BookingRules::new(test_today());
    assert_eq!(rules.today, ymd(2024, 6, 15));

    assert!(validate_date("2024-06-14", &rules).is_some());
    assert!(validate_date("2024-09-16", &rules).is_some());
    assert_eq!(validate_date("2024-06-15", &rules), None);
    assert_eq!(validate_date("2024-09-15", &rules), None);
}

#[test]
fn test_every_day_in_window_is_accepted() {
    let rules = BookingRules::new(test_today());
    let mut day = rules.today;
    while day <= rules.latest_date() {
        let value = day.format("%Y-%m-%d").to_string();
        assert_eq!(validate_date(&value, &rules), None, "{}", value);
        day = day.succ_opt().unwrap();
    }
}

#[test]
fn test_time_examples() {
    assert!(validate_time("").is_some());
    for accepted in ["Monday 09:00", "anything", " "] {
        assert_eq!(validate_time(accepted), None);
    }
}

#[test]
fn test_form_errors_are_keyed_by_field() {
    let values = FormValues {
        patient_name: "Mary Ann".to_string(),
        patient_email: "a @b.com".to_string(),
        date: "2024-06-14".to_string(),
        time: String::new(),
    };
    let errors = validate_form(&values, &BookingRules::new(test_today()));

    let fields: Vec<FormField> = errors.iter().map(|(field, _)| field).collect();
    assert_eq!(fields, vec![FormField::PatientEmail, FormField::Date, FormField::Time]);
    assert_eq!(errors.get(FormField::PatientName), None);
}
